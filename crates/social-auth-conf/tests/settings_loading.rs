//! Settings loading tests: TOML files and environment overrides

use rstest::*;
use social_auth_conf::{ConfigError, SocialAuthSettings};
use std::io::Write;
use tempfile::NamedTempFile;

fn env(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
	pairs
		.iter()
		.map(|(k, v)| (k.to_string(), v.to_string()))
		.collect()
}

#[test]
fn test_load_from_file() {
	// Arrange
	let mut file = NamedTempFile::new().unwrap();
	writeln!(
		file,
		r#"
backends = ["openid"]
create_users = false
default_username = "guest"
username_max_length = 20
"#
	)
	.unwrap();

	// Act
	let settings = SocialAuthSettings::from_file(file.path()).unwrap();

	// Assert
	assert_eq!(settings.backends, vec!["openid"]);
	assert!(!settings.create_users);
	assert!(settings.update_user_details);
	assert_eq!(settings.default_username, "guest");
	assert_eq!(settings.username_max_length, 20);
	assert_eq!(settings.username_suffix_length, 8);
}

#[test]
fn test_load_missing_file() {
	// Act
	let result = SocialAuthSettings::from_file("/nonexistent/social_auth.toml");

	// Assert
	assert!(matches!(result, Err(ConfigError::Io(_))));
}

#[test]
fn test_load_malformed_file() {
	// Arrange
	let mut file = NamedTempFile::new().unwrap();
	writeln!(file, "create_users = \"sometimes\"").unwrap();

	// Act
	let result = SocialAuthSettings::from_file(file.path());

	// Assert
	assert!(matches!(result, Err(ConfigError::Toml(_))));
}

#[test]
fn test_file_failing_validation() {
	// Arrange
	let toml = r#"default_username = """#;

	// Act
	let result = SocialAuthSettings::from_toml_str(toml);

	// Assert
	assert!(matches!(result, Err(ConfigError::Validation(_))));
}

#[test]
fn test_env_overrides_file() {
	// Arrange
	let mut settings = SocialAuthSettings::from_toml_str(
		r#"
backends = ["twitter"]
create_users = true
"#,
	)
	.unwrap();

	// Act
	settings
		.apply_env(env(&[
			("SOCIAL_AUTH_BACKENDS", "facebook, openid"),
			("SOCIAL_AUTH_CREATE_USERS", "false"),
			("SOCIAL_AUTH_UPDATE_USER_DETAILS", "0"),
			("SOCIAL_AUTH_DEFAULT_USERNAME", " member "),
			("SOCIAL_AUTH_USERNAME_MAX_LENGTH", "40"),
			("SOCIAL_AUTH_USERNAME_SUFFIX_LENGTH", "6"),
			("PATH", "/usr/bin"),
		]))
		.unwrap();

	// Assert
	assert_eq!(settings.backends, vec!["facebook", "openid"]);
	assert!(!settings.create_users);
	assert!(!settings.update_user_details);
	assert_eq!(settings.default_username, "member");
	assert_eq!(settings.username_max_length, 40);
	assert_eq!(settings.username_suffix_length, 6);
}

#[rstest]
#[case("SOCIAL_AUTH_CREATE_USERS", "perhaps")]
#[case("SOCIAL_AUTH_UPDATE_USER_DETAILS", "")]
#[case("SOCIAL_AUTH_USERNAME_MAX_LENGTH", "thirty")]
#[case("SOCIAL_AUTH_USERNAME_SUFFIX_LENGTH", "-3")]
fn test_env_invalid_values(#[case] key: &str, #[case] value: &str) {
	// Arrange
	let mut settings = SocialAuthSettings::default();

	// Act
	let result = settings.apply_env(env(&[(key, value)]));

	// Assert
	match result {
		Err(ConfigError::InvalidValue { key: k, value: v }) => {
			assert_eq!(k, key);
			assert_eq!(v, value);
		}
		other => panic!("expected InvalidValue, got {:?}", other),
	}
}

#[test]
fn test_env_unknown_variable_is_ignored() {
	// Arrange
	let mut settings = SocialAuthSettings::default();

	// Act
	settings
		.apply_env(env(&[("SOCIAL_AUTH_TWITTER_CONSUMER_KEY", "abc")]))
		.unwrap();

	// Assert
	assert_eq!(settings, SocialAuthSettings::default());
}

#[test]
fn test_env_result_is_validated() {
	// Arrange
	let mut settings = SocialAuthSettings::default();

	// Act
	let result = settings.apply_env(env(&[("SOCIAL_AUTH_USERNAME_MAX_LENGTH", "4")]));

	// Assert
	assert!(matches!(result, Err(ConfigError::Validation(_))));
}
