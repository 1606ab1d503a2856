//! Settings error types

use thiserror::Error;

/// Errors raised while loading or validating settings
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum ConfigError {
	#[error("IO error: {0}")]
	Io(#[from] std::io::Error),

	#[error("TOML error: {0}")]
	Toml(#[from] toml::de::Error),

	/// An environment variable held a value that could not be parsed
	#[error("Invalid value for {key}: {value:?}")]
	InvalidValue { key: String, value: String },

	#[error("Validation error: {0}")]
	Validation(String),
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_error_display() {
		let error = ConfigError::InvalidValue {
			key: "SOCIAL_AUTH_CREATE_USERS".to_string(),
			value: "maybe".to_string(),
		};
		assert_eq!(
			error.to_string(),
			"Invalid value for SOCIAL_AUTH_CREATE_USERS: \"maybe\""
		);

		let error = ConfigError::Validation("default_username must not be empty".to_string());
		assert_eq!(
			error.to_string(),
			"Validation error: default_username must not be empty"
		);
	}

	#[test]
	fn test_error_from_toml() {
		let toml_error = toml::from_str::<toml::Table>("backends = [").unwrap_err();
		let error: ConfigError = toml_error.into();

		assert!(matches!(error, ConfigError::Toml(_)));
	}
}
