//! Facebook OAuth backend

use crate::backend::{ProviderResponse, SocialAuthBackend};
use crate::details::{UserDetails, UserIdentifier};
use crate::error::SocialAuthResult;
use crate::oauth::{OAuthResponse, oauth_user_id};
use crate::provider::Provider;

/// Facebook OAuth authentication backend
#[derive(Debug, Clone, Copy, Default)]
pub struct FacebookBackend;

impl FacebookBackend {
	pub fn new() -> Self {
		Self
	}

	/// Map a Facebook Graph user object onto canonical details
	///
	/// `name` is required and doubles as the username. Missing `email`,
	/// `first_name` and `last_name` default to an empty string.
	pub fn user_details(response: &OAuthResponse) -> SocialAuthResult<UserDetails> {
		let name = response.required("name")?;

		Ok(UserDetails {
			email: response.get_or("email", "")?,
			username: name.clone(),
			fullname: name,
			firstname: response.get_or("first_name", "")?,
			lastname: response.get_or("last_name", "")?,
		})
	}
}

impl SocialAuthBackend for FacebookBackend {
	fn provider(&self) -> Provider {
		Provider::Facebook
	}

	fn get_user_id(
		&self,
		_details: &UserDetails,
		response: &ProviderResponse,
	) -> SocialAuthResult<UserIdentifier> {
		oauth_user_id(response.as_oauth(Provider::Facebook)?)
	}

	fn get_user_details(&self, response: &ProviderResponse) -> SocialAuthResult<UserDetails> {
		Self::user_details(response.as_oauth(Provider::Facebook)?)
	}
}
