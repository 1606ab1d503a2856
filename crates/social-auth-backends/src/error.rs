//! Social authentication error types

use crate::provider::Provider;
use social_auth_conf::ConfigError;
use thiserror::Error;

/// Social authentication errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SocialAuthError {
	/// A field required by the backend is absent from the provider response
	#[error("Missing field: {0}")]
	MissingField(String),

	/// A field is present but holds a value the backend cannot use
	#[error("Invalid field {key}: {reason}")]
	InvalidField { key: String, reason: String },

	/// An AX attribute carried several values where one was expected
	#[error("Ambiguous attribute: {0} has more than one value")]
	AmbiguousAttribute(String),

	/// A backend was handed another provider's response
	#[error("Provider mismatch: expected {expected}, got {actual}")]
	ProviderMismatch { expected: Provider, actual: Provider },

	/// Settings reference a backend that does not exist
	#[error("Unknown backend: {0}")]
	UnknownBackend(String),

	/// Configuration error
	#[error("Configuration error: {0}")]
	Configuration(String),

	/// Account storage error
	#[error("Storage error: {0}")]
	Storage(String),
}

/// Result type used throughout the backends
pub type SocialAuthResult<T> = Result<T, SocialAuthError>;

impl From<ConfigError> for SocialAuthError {
	fn from(error: ConfigError) -> Self {
		SocialAuthError::Configuration(error.to_string())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_error_display() {
		let error = SocialAuthError::MissingField("id".to_string());
		assert_eq!(error.to_string(), "Missing field: id");

		let error = SocialAuthError::ProviderMismatch {
			expected: Provider::Twitter,
			actual: Provider::OpenId,
		};
		assert_eq!(
			error.to_string(),
			"Provider mismatch: expected twitter, got openid"
		);

		let error = SocialAuthError::AmbiguousAttribute(
			"http://axschema.org/contact/email".to_string(),
		);
		assert_eq!(
			error.to_string(),
			"Ambiguous attribute: http://axschema.org/contact/email has more than one value"
		);
	}

	#[test]
	fn test_error_from_config_error() {
		let config_error = ConfigError::Validation("bad".to_string());
		let error: SocialAuthError = config_error.into();

		assert_eq!(
			error,
			SocialAuthError::Configuration("Validation error: bad".to_string())
		);
	}
}
