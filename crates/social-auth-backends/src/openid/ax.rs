//! Attribute Exchange (AX) payload and the attribute table

use crate::details::DetailField;
use crate::error::{SocialAuthError, SocialAuthResult};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// An AX attribute mapped onto a canonical detail field
///
/// Providers implementing the pre-1.0 drafts answer under the legacy
/// `schema.openid.net` URIs, current ones under `axschema.org`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AxAttribute {
	pub field: DetailField,
	pub legacy_uri: Option<&'static str>,
	pub uri: &'static str,
}

/// Attributes read from an AX fetch response, one entry per canonical field
pub const AX_ATTRIBUTES: [AxAttribute; 5] = [
	AxAttribute {
		field: DetailField::Email,
		legacy_uri: Some("http://schema.openid.net/contact/email"),
		uri: "http://axschema.org/contact/email",
	},
	AxAttribute {
		field: DetailField::Fullname,
		legacy_uri: Some("http://schema.openid.net/namePerson"),
		uri: "http://axschema.org/namePerson",
	},
	AxAttribute {
		field: DetailField::Firstname,
		legacy_uri: None,
		uri: "http://axschema.org/namePerson/first",
	},
	AxAttribute {
		field: DetailField::Lastname,
		legacy_uri: None,
		uri: "http://axschema.org/namePerson/last",
	},
	AxAttribute {
		field: DetailField::Username,
		legacy_uri: Some("http://schema.openid.net/namePerson/friendly"),
		uri: "http://axschema.org/namePerson/friendly",
	},
];

/// Every URI to ask for in an AX fetch request, legacy URIs first
pub fn ax_request_uris() -> impl Iterator<Item = &'static str> {
	AX_ATTRIBUTES
		.iter()
		.filter_map(|attribute| attribute.legacy_uri)
		.chain(AX_ATTRIBUTES.iter().map(|attribute| attribute.uri))
}

/// Values returned through an AX fetch response, keyed by type URI
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AxRecord(BTreeMap<String, Vec<String>>);

impl AxRecord {
	pub fn new() -> Self {
		Self::default()
	}

	/// Builder-style variant of [`AxRecord::add_value`]
	pub fn with_value(mut self, uri: impl Into<String>, value: impl Into<String>) -> Self {
		self.add_value(uri, value);
		self
	}

	/// Append a value for `uri`
	pub fn add_value(&mut self, uri: impl Into<String>, value: impl Into<String>) {
		self.0.entry(uri.into()).or_default().push(value.into());
	}

	/// All values returned for `uri`
	pub fn get(&self, uri: &str) -> Option<&[String]> {
		self.0.get(uri).map(Vec::as_slice)
	}

	/// The single value returned for `uri`
	///
	/// `None` when the provider sent no value, an
	/// [`SocialAuthError::AmbiguousAttribute`] when it sent several.
	pub fn get_single(&self, uri: &str) -> SocialAuthResult<Option<&str>> {
		match self.get(uri) {
			None | Some([]) => Ok(None),
			Some([value]) => Ok(Some(value.as_str())),
			Some(_) => Err(SocialAuthError::AmbiguousAttribute(uri.to_string())),
		}
	}

	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}
}
