//! OAuth provider responses and the backends built on them
//!
//! OAuth providers hand back a JSON object describing the user once the
//! token exchange is done. The backends here only read that object; the
//! exchange itself happens in the host's OAuth client.

pub mod facebook;
pub mod twitter;

pub use facebook::FacebookBackend;
pub use twitter::TwitterBackend;

use crate::details::UserIdentifier;
use crate::error::{SocialAuthError, SocialAuthResult};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// User object returned by an OAuth provider
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OAuthResponse(Map<String, Value>);

impl OAuthResponse {
	pub fn new(fields: Map<String, Value>) -> Self {
		Self(fields)
	}

	/// Build a response from an arbitrary JSON value
	///
	/// Fails with [`SocialAuthError::InvalidField`] unless the value is an object.
	pub fn from_value(value: Value) -> SocialAuthResult<Self> {
		match value {
			Value::Object(fields) => Ok(Self(fields)),
			other => Err(SocialAuthError::InvalidField {
				key: "response".to_string(),
				reason: format!("expected a JSON object, got {}", json_type(&other)),
			}),
		}
	}

	pub fn contains(&self, key: &str) -> bool {
		self.0.contains_key(key)
	}

	pub fn raw(&self) -> &Map<String, Value> {
		&self.0
	}

	/// Read a field that must be present
	///
	/// An absent key is a [`SocialAuthError::MissingField`]; a JSON `null`
	/// reads as `None`.
	pub fn required(&self, key: &str) -> SocialAuthResult<Option<String>> {
		match self.0.get(key) {
			Some(value) => scalar(key, value),
			None => Err(SocialAuthError::MissingField(key.to_string())),
		}
	}

	/// Read a field, substituting `default` when the key is absent
	pub fn get_or(&self, key: &str, default: &str) -> SocialAuthResult<Option<String>> {
		match self.0.get(key) {
			Some(value) => scalar(key, value),
			None => Ok(Some(default.to_string())),
		}
	}
}

impl From<Map<String, Value>> for OAuthResponse {
	fn from(fields: Map<String, Value>) -> Self {
		Self(fields)
	}
}

/// Provider-scoped user id of an OAuth response
///
/// OAuth providers return the user id under `id`, either as a string or a
/// number; both are returned as their textual form.
pub fn oauth_user_id(response: &OAuthResponse) -> SocialAuthResult<UserIdentifier> {
	match response.required("id")? {
		Some(id) => Ok(UserIdentifier::new(id)),
		None => Err(SocialAuthError::InvalidField {
			key: "id".to_string(),
			reason: "user id is null".to_string(),
		}),
	}
}

fn scalar(key: &str, value: &Value) -> SocialAuthResult<Option<String>> {
	match value {
		Value::Null => Ok(None),
		Value::String(s) => Ok(Some(s.clone())),
		Value::Number(n) => Ok(Some(n.to_string())),
		Value::Bool(b) => Ok(Some(b.to_string())),
		other => Err(SocialAuthError::InvalidField {
			key: key.to_string(),
			reason: format!("expected a scalar, got {}", json_type(other)),
		}),
	}
}

fn json_type(value: &Value) -> &'static str {
	match value {
		Value::Null => "null",
		Value::Bool(_) => "boolean",
		Value::Number(_) => "number",
		Value::String(_) => "string",
		Value::Array(_) => "array",
		Value::Object(_) => "object",
	}
}
