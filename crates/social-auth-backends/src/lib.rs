//! # Social Auth Backends
//!
//! Pluggable authentication backends for third-party identity providers.
//!
//! Each backend reads a response that the host's OAuth or OpenID client has
//! already verified, and normalizes it into a provider-scoped
//! [`UserIdentifier`] plus canonical [`UserDetails`]. No protocol handshake
//! happens here.
//!
//! ## Backends
//!
//! - **Twitter** ([`TwitterBackend`]): `screen_name` as username, `name` as
//!   full and first name; Twitter never discloses email.
//! - **Facebook** ([`FacebookBackend`]): `name` as username and full name,
//!   optional email and first/last names defaulted to empty strings.
//! - **OpenID** ([`OpenIdBackend`]): SREG and AX extension data merged, names
//!   reconciled, username synthesized when missing.
//!
//! ## Example
//!
//! ```
//! use social_auth_backends::openid::{AxRecord, OpenIdResponse, SregRecord};
//! use social_auth_backends::{BackendRegistry, ProviderResponse};
//!
//! let registry = BackendRegistry::with_all_backends();
//! let response = ProviderResponse::OpenId(
//!     OpenIdResponse::new("https://openid.example.com/jane")
//!         .with_ax(AxRecord::new().with_value("http://axschema.org/namePerson", "Jane Q Public")),
//! );
//!
//! let identity = registry.authenticate(&response).unwrap().unwrap();
//!
//! assert_eq!(identity.uid.as_str(), "https://openid.example.com/jane");
//! assert_eq!(identity.details.firstname.as_deref(), Some("Jane Q"));
//! assert_eq!(identity.details.lastname.as_deref(), Some("Public"));
//! ```
//!
//! ## Architecture
//!
//! - [`backend`]: the [`SocialAuthBackend`] trait and the tagged
//!   [`ProviderResponse`]
//! - [`registry`]: lookup table routing responses to enabled backends
//! - [`oauth`], [`openid`]: provider backends
//! - [`association`]: linking identities to local users

pub mod association;
pub mod backend;
pub mod details;
pub mod error;
pub mod names;
pub mod oauth;
pub mod openid;
pub mod provider;
pub mod registry;

pub use association::{
	Association, InMemorySocialAccountStore, LocalUser, SocialAccount, SocialAccountStore,
	SocialUserAssociation,
};
pub use backend::{ProviderResponse, SocialAuthBackend};
pub use details::{DetailField, SocialIdentity, UserDetails, UserIdentifier};
pub use error::{SocialAuthError, SocialAuthResult};
pub use oauth::{FacebookBackend, OAuthResponse, TwitterBackend, oauth_user_id};
pub use openid::{OpenIdBackend, OpenIdResponse, SuccessResponse};
pub use provider::Provider;
pub use registry::BackendRegistry;
