//! Canonical user details produced by every backend

use crate::provider::Provider;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Normalized profile of an authenticated user
///
/// Every backend maps its provider's response onto these five fields.
/// `None` means the provider did not supply the value at all, while an empty
/// string is a value the backend explicitly defaulted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserDetails {
	pub email: Option<String>,
	pub username: Option<String>,
	pub fullname: Option<String>,
	pub firstname: Option<String>,
	pub lastname: Option<String>,
}

impl UserDetails {
	/// Username, or an empty string when unset
	pub fn username_or_empty(&self) -> &str {
		self.username.as_deref().unwrap_or_default()
	}

	/// Set a field by its canonical identity
	pub(crate) fn set(&mut self, field: DetailField, value: Option<String>) {
		match field {
			DetailField::Email => self.email = value,
			DetailField::Username => self.username = value,
			DetailField::Fullname => self.fullname = value,
			DetailField::Firstname => self.firstname = value,
			DetailField::Lastname => self.lastname = value,
		}
	}
}

/// One of the five canonical detail fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DetailField {
	Email,
	Username,
	Fullname,
	Firstname,
	Lastname,
}

/// Provider-scoped user identifier
///
/// Unique only within one provider's namespace; pair it with a [`Provider`]
/// to key an external identity.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserIdentifier(String);

impl UserIdentifier {
	pub fn new(id: impl Into<String>) -> Self {
		Self(id.into())
	}

	pub fn as_str(&self) -> &str {
		&self.0
	}

	pub fn into_inner(self) -> String {
		self.0
	}
}

impl fmt::Display for UserIdentifier {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0)
	}
}

impl From<&str> for UserIdentifier {
	fn from(id: &str) -> Self {
		Self::new(id)
	}
}

impl From<String> for UserIdentifier {
	fn from(id: String) -> Self {
		Self(id)
	}
}

/// Result of a successful authentication: who the provider says the user is
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialIdentity {
	pub provider: Provider,
	pub uid: UserIdentifier,
	pub details: UserDetails,
}
