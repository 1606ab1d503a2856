//! Backend trait and the tagged provider response it consumes

use crate::details::{SocialIdentity, UserDetails, UserIdentifier};
use crate::error::{SocialAuthError, SocialAuthResult};
use crate::oauth::OAuthResponse;
use crate::openid::OpenIdResponse;
use crate::provider::Provider;
use serde::{Deserialize, Serialize};

/// Provider response, tagged with the provider that produced it
///
/// The tag decides which backend handles the response.
///
/// # Example
///
/// ```
/// use social_auth_backends::{Provider, ProviderResponse};
/// use serde_json::json;
///
/// let response: ProviderResponse = serde_json::from_value(json!({
///     "provider": "twitter",
///     "response": {"id": 42, "screen_name": "alice", "name": "Alice A"}
/// }))
/// .unwrap();
///
/// assert_eq!(response.provider(), Provider::Twitter);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "provider", content = "response", rename_all = "lowercase")]
pub enum ProviderResponse {
	Twitter(OAuthResponse),
	Facebook(OAuthResponse),
	#[serde(rename = "openid")]
	OpenId(OpenIdResponse),
}

impl ProviderResponse {
	pub fn provider(&self) -> Provider {
		match self {
			ProviderResponse::Twitter(_) => Provider::Twitter,
			ProviderResponse::Facebook(_) => Provider::Facebook,
			ProviderResponse::OpenId(_) => Provider::OpenId,
		}
	}

	/// Borrow the OAuth payload, provided it was tagged `expected`
	pub fn as_oauth(&self, expected: Provider) -> SocialAuthResult<&OAuthResponse> {
		match self {
			ProviderResponse::Twitter(response) | ProviderResponse::Facebook(response)
				if self.provider() == expected =>
			{
				Ok(response)
			}
			_ => Err(self.mismatch(expected)),
		}
	}

	/// Borrow the OpenID payload
	pub fn as_openid(&self) -> SocialAuthResult<&OpenIdResponse> {
		match self {
			ProviderResponse::OpenId(response) => Ok(response),
			_ => Err(self.mismatch(Provider::OpenId)),
		}
	}

	fn mismatch(&self, expected: Provider) -> SocialAuthError {
		SocialAuthError::ProviderMismatch {
			expected,
			actual: self.provider(),
		}
	}
}

/// Social authentication backend
///
/// A backend turns one provider's response into a provider-scoped user id and
/// canonical [`UserDetails`]. It never talks to the provider itself.
pub trait SocialAuthBackend: Send + Sync {
	/// Provider handled by this backend
	fn provider(&self) -> Provider;

	/// Provider-scoped unique id of the user
	fn get_user_id(
		&self,
		details: &UserDetails,
		response: &ProviderResponse,
	) -> SocialAuthResult<UserIdentifier>;

	/// Canonical details of the user
	fn get_user_details(&self, response: &ProviderResponse) -> SocialAuthResult<UserDetails>;

	/// Authenticate a provider response
	///
	/// Returns `Ok(None)` without inspecting the payload when the response
	/// belongs to another provider, so the caller can fall through to the next
	/// backend.
	fn authenticate(&self, response: &ProviderResponse) -> SocialAuthResult<Option<SocialIdentity>> {
		if response.provider() != self.provider() {
			tracing::debug!(
				backend = %self.provider(),
				provider = %response.provider(),
				"backend skipped: response belongs to another provider"
			);
			return Ok(None);
		}

		let details = self.get_user_details(response)?;
		let uid = self.get_user_id(&details, response)?;

		Ok(Some(SocialIdentity {
			provider: self.provider(),
			uid,
			details,
		}))
	}
}
