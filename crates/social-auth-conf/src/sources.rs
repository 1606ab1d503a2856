//! Environment variable parsing helpers

use crate::error::ConfigError;

/// Prefix shared by every social auth environment variable
pub const ENV_PREFIX: &str = "SOCIAL_AUTH_";

/// Split a comma separated list, dropping blank entries
pub(crate) fn parse_list(value: &str) -> Vec<String> {
	value
		.split(',')
		.map(str::trim)
		.filter(|item| !item.is_empty())
		.map(str::to_string)
		.collect()
}

pub(crate) fn parse_bool(key: &str, value: &str) -> Result<bool, ConfigError> {
	match value.trim().to_ascii_lowercase().as_str() {
		"1" | "true" | "yes" | "on" => Ok(true),
		"0" | "false" | "no" | "off" => Ok(false),
		_ => Err(invalid(key, value)),
	}
}

pub(crate) fn parse_usize(key: &str, value: &str) -> Result<usize, ConfigError> {
	value.trim().parse().map_err(|_| invalid(key, value))
}

fn invalid(key: &str, value: &str) -> ConfigError {
	ConfigError::InvalidValue {
		key: key.to_string(),
		value: value.to_string(),
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case("true", true)]
	#[case("TRUE", true)]
	#[case("1", true)]
	#[case(" yes ", true)]
	#[case("on", true)]
	#[case("false", false)]
	#[case("0", false)]
	#[case("No", false)]
	#[case("off", false)]
	fn test_parse_bool(#[case] input: &str, #[case] expected: bool) {
		assert_eq!(parse_bool("KEY", input).unwrap(), expected);
	}

	#[test]
	fn test_parse_bool_invalid() {
		let result = parse_bool("SOCIAL_AUTH_CREATE_USERS", "maybe");
		assert!(matches!(result, Err(ConfigError::InvalidValue { .. })));
	}

	#[test]
	fn test_parse_list() {
		assert_eq!(
			parse_list(" twitter, ,openid ,"),
			vec!["twitter".to_string(), "openid".to_string()]
		);
		assert!(parse_list("").is_empty());
	}

	#[test]
	fn test_parse_usize() {
		assert_eq!(parse_usize("KEY", " 42 ").unwrap(), 42);
		assert!(parse_usize("KEY", "-1").is_err());
	}
}
