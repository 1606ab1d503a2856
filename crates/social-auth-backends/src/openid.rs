//! Generic OpenID backend
//!
//! OpenID providers describe the user through two optional extensions:
//! Simple Registration (SREG) and Attribute Exchange (AX). Details are
//! normalized in four steps:
//!
//! 1. SREG `email`, `fullname` and `nickname` (as username) are copied.
//! 2. Every entry of [`AX_ATTRIBUTES`] overwrites its field, legacy URIs
//!    first, even when the provider sent no value. AX therefore wins over
//!    SREG whenever both are present.
//! 3. Names are reconciled: a missing full name is built from first and last
//!    name, otherwise the full name is split at its last space.
//! 4. A missing username falls back to the title-cased first and last names.

pub mod ax;
pub mod response;
pub mod sreg;

pub use ax::{AX_ATTRIBUTES, AxAttribute, AxRecord, ax_request_uris};
pub use response::{OpenIdResponse, SuccessResponse};
pub use sreg::{SREG_FIELDS, SregRecord};

use crate::backend::{ProviderResponse, SocialAuthBackend};
use crate::details::{UserDetails, UserIdentifier};
use crate::error::{SocialAuthError, SocialAuthResult};
use crate::names::{split_fullname, title_case};
use crate::provider::Provider;

/// Generic OpenID authentication backend
#[derive(Debug, Clone, Copy, Default)]
pub struct OpenIdBackend;

impl OpenIdBackend {
	pub fn new() -> Self {
		Self
	}

	/// Identity URL of the response, verbatim
	pub fn user_id<R: SuccessResponse + ?Sized>(response: &R) -> SocialAuthResult<UserIdentifier> {
		response
			.identity_url()
			.map(UserIdentifier::from)
			.ok_or_else(|| SocialAuthError::MissingField("identity_url".to_string()))
	}

	/// Normalize the extension payloads of a success response
	pub fn user_details<R: SuccessResponse + ?Sized>(response: &R) -> SocialAuthResult<UserDetails> {
		let mut details = UserDetails::default();

		if let Some(sreg) = response.extract_sreg() {
			details.email = sreg.email;
			details.fullname = sreg.fullname;
			details.username = sreg.nickname;
		}

		if let Some(ax) = response.extract_ax() {
			for attribute in &AX_ATTRIBUTES {
				if let Some(uri) = attribute.legacy_uri {
					details.set(attribute.field, ax.get_single(uri)?.map(str::to_string));
				}
			}
			for attribute in &AX_ATTRIBUTES {
				details.set(
					attribute.field,
					ax.get_single(attribute.uri)?.map(str::to_string),
				);
			}
		}

		reconcile_names(&mut details);

		if is_blank(&details.username) {
			let username = format!(
				"{}{}",
				title_case(details.firstname.as_deref().unwrap_or_default()),
				title_case(details.lastname.as_deref().unwrap_or_default()),
			);
			tracing::debug!(username = %username, "username synthesized from names");
			details.username = Some(username);
		}

		Ok(details)
	}
}

fn is_blank(value: &Option<String>) -> bool {
	value.as_deref().is_none_or(str::is_empty)
}

fn reconcile_names(details: &mut UserDetails) {
	let Some(fullname) = details.fullname.as_deref().filter(|name| !name.is_empty()) else {
		let first = details.firstname.as_deref().unwrap_or_default();
		let last = details.lastname.as_deref().unwrap_or_default();
		if !first.is_empty() && !last.is_empty() {
			tracing::debug!("full name synthesized from first and last name");
			details.fullname = Some(format!("{} {}", first, last));
		}
		return;
	};

	match split_fullname(fullname) {
		Some((first, last)) => {
			details.firstname = Some(first.to_string());
			details.lastname = Some(last.to_string());
		}
		None => details.lastname = Some(fullname.to_string()),
	}
}

impl SocialAuthBackend for OpenIdBackend {
	fn provider(&self) -> Provider {
		Provider::OpenId
	}

	fn get_user_id(
		&self,
		_details: &UserDetails,
		response: &ProviderResponse,
	) -> SocialAuthResult<UserIdentifier> {
		Self::user_id(response.as_openid()?)
	}

	fn get_user_details(&self, response: &ProviderResponse) -> SocialAuthResult<UserDetails> {
		Self::user_details(response.as_openid()?)
	}
}
