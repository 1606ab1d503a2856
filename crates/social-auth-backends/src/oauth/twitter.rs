//! Twitter OAuth backend

use crate::backend::{ProviderResponse, SocialAuthBackend};
use crate::details::{UserDetails, UserIdentifier};
use crate::error::SocialAuthResult;
use crate::oauth::{OAuthResponse, oauth_user_id};
use crate::provider::Provider;

/// Twitter OAuth authentication backend
///
/// Twitter never discloses the email address, and only provides a single
/// display name which is used as both full name and first name.
#[derive(Debug, Clone, Copy, Default)]
pub struct TwitterBackend;

impl TwitterBackend {
	pub fn new() -> Self {
		Self
	}

	/// Map a Twitter user object onto canonical details
	///
	/// Requires `screen_name` and `name`.
	pub fn user_details(response: &OAuthResponse) -> SocialAuthResult<UserDetails> {
		let name = response.required("name")?;

		Ok(UserDetails {
			email: Some(String::new()),
			username: response.required("screen_name")?,
			fullname: name.clone(),
			firstname: name,
			lastname: Some(String::new()),
		})
	}
}

impl SocialAuthBackend for TwitterBackend {
	fn provider(&self) -> Provider {
		Provider::Twitter
	}

	fn get_user_id(
		&self,
		_details: &UserDetails,
		response: &ProviderResponse,
	) -> SocialAuthResult<UserIdentifier> {
		oauth_user_id(response.as_oauth(Provider::Twitter)?)
	}

	fn get_user_details(&self, response: &ProviderResponse) -> SocialAuthResult<UserDetails> {
		Self::user_details(response.as_oauth(Provider::Twitter)?)
	}
}
