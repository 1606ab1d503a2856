//! OpenID success responses

use crate::openid::ax::AxRecord;
use crate::openid::sreg::SregRecord;
use serde::{Deserialize, Serialize};

/// Capability view of a verified OpenID success response
///
/// The host's OpenID consumer owns the real response type; implementing this
/// trait for it is all the OpenID backend needs.
pub trait SuccessResponse {
	/// Identity URL asserted by the provider
	fn identity_url(&self) -> Option<&str>;

	/// Simple Registration payload, when the provider returned one
	fn extract_sreg(&self) -> Option<SregRecord>;

	/// Attribute Exchange fetch response, when the provider returned one
	fn extract_ax(&self) -> Option<AxRecord>;
}

/// Owned OpenID success response
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpenIdResponse {
	pub identity_url: Option<String>,

	#[serde(skip_serializing_if = "Option::is_none")]
	pub sreg: Option<SregRecord>,

	#[serde(skip_serializing_if = "Option::is_none")]
	pub ax: Option<AxRecord>,
}

impl OpenIdResponse {
	pub fn new(identity_url: impl Into<String>) -> Self {
		Self {
			identity_url: Some(identity_url.into()),
			sreg: None,
			ax: None,
		}
	}

	pub fn with_sreg(mut self, sreg: SregRecord) -> Self {
		self.sreg = Some(sreg);
		self
	}

	pub fn with_ax(mut self, ax: AxRecord) -> Self {
		self.ax = Some(ax);
		self
	}
}

impl SuccessResponse for OpenIdResponse {
	fn identity_url(&self) -> Option<&str> {
		self.identity_url.as_deref()
	}

	fn extract_sreg(&self) -> Option<SregRecord> {
		self.sreg.clone()
	}

	fn extract_ax(&self) -> Option<AxRecord> {
		self.ax.clone()
	}
}
