//! Social authentication settings

use crate::error::ConfigError;
use crate::sources;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Settings shared by every social authentication backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SocialAuthSettings {
	/// Enabled provider names ("twitter", "facebook", "openid")
	pub backends: Vec<String>,

	/// Create a local user for identities that are not linked yet
	pub create_users: bool,

	/// Refresh email and names of an already linked user on every login
	pub update_user_details: bool,

	/// Username used when the provider supplies none
	pub default_username: String,

	/// Maximum length of a generated username
	pub username_max_length: usize,

	/// Length of the random suffix appended on username collisions
	pub username_suffix_length: usize,
}

impl Default for SocialAuthSettings {
	fn default() -> Self {
		Self {
			backends: vec![
				"twitter".to_string(),
				"facebook".to_string(),
				"openid".to_string(),
			],
			create_users: true,
			update_user_details: true,
			default_username: "social".to_string(),
			username_max_length: 30,
			username_suffix_length: 8,
		}
	}
}

impl SocialAuthSettings {
	/// Parse settings from a TOML document
	///
	/// Missing keys keep their defaults. The result is validated.
	pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
		let settings: Self = toml::from_str(content)?;
		settings.validate()?;
		Ok(settings)
	}

	/// Load settings from a TOML file
	pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
		let path = path.as_ref();
		tracing::debug!(path = %path.display(), "loading social auth settings");
		let content = fs::read_to_string(path)?;
		Self::from_toml_str(&content)
	}

	/// Defaults overridden by the process environment
	pub fn from_env_with_defaults() -> Result<Self, ConfigError> {
		let mut settings = Self::default();
		settings.apply_env(std::env::vars())?;
		Ok(settings)
	}

	/// Override fields from `SOCIAL_AUTH_*` variables
	///
	/// Variables outside the prefix are ignored. The result is validated.
	///
	/// # Examples
	///
	/// ```
	/// use social_auth_conf::SocialAuthSettings;
	///
	/// let mut settings = SocialAuthSettings::default();
	/// settings
	///     .apply_env([
	///         ("SOCIAL_AUTH_BACKENDS".to_string(), "facebook".to_string()),
	///         ("HOME".to_string(), "/root".to_string()),
	///     ])
	///     .unwrap();
	///
	/// assert_eq!(settings.backends, vec!["facebook"]);
	/// ```
	pub fn apply_env<I>(&mut self, vars: I) -> Result<(), ConfigError>
	where
		I: IntoIterator<Item = (String, String)>,
	{
		for (key, value) in vars {
			let Some(field) = key.strip_prefix(sources::ENV_PREFIX) else {
				continue;
			};

			match field {
				"BACKENDS" => self.backends = sources::parse_list(&value),
				"CREATE_USERS" => self.create_users = sources::parse_bool(&key, &value)?,
				"UPDATE_USER_DETAILS" => {
					self.update_user_details = sources::parse_bool(&key, &value)?
				}
				"DEFAULT_USERNAME" => self.default_username = value.trim().to_string(),
				"USERNAME_MAX_LENGTH" => {
					self.username_max_length = sources::parse_usize(&key, &value)?
				}
				"USERNAME_SUFFIX_LENGTH" => {
					self.username_suffix_length = sources::parse_usize(&key, &value)?
				}
				_ => {
					tracing::debug!(key = %key, "ignoring unknown social auth variable");
					continue;
				}
			}
			tracing::debug!(key = %key, "social auth setting overridden from environment");
		}

		self.validate()
	}

	/// Check cross-field constraints
	pub fn validate(&self) -> Result<(), ConfigError> {
		if self.default_username.is_empty() {
			return Err(ConfigError::Validation(
				"default_username must not be empty".to_string(),
			));
		}
		if self.username_max_length == 0 {
			return Err(ConfigError::Validation(
				"username_max_length must be at least 1".to_string(),
			));
		}
		if self.username_suffix_length == 0
			|| self.username_suffix_length >= self.username_max_length
		{
			return Err(ConfigError::Validation(format!(
				"username_suffix_length must be between 1 and {}",
				self.username_max_length - 1
			)));
		}
		Ok(())
	}

	/// Check whether a backend is enabled by name
	pub fn is_enabled(&self, backend: &str) -> bool {
		self.backends.iter().any(|name| name == backend)
	}
}
