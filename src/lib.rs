//! # Social Auth
//!
//! Pluggable social authentication backends for Twitter, Facebook and
//! generic OpenID providers.
//!
//! The backends take a response the host's OAuth or OpenID client has already
//! verified and normalize it into a provider-scoped user id plus canonical
//! user details (`email`, `username`, `fullname`, `firstname`, `lastname`).
//! Identities can then be linked to local users through
//! [`backends::SocialUserAssociation`].
//!
//! ## Feature Flags
//!
//! - `backends` - provider backends, dispatch registry, account association
//! - `conf` - settings loading (TOML files, `SOCIAL_AUTH_*` variables)
//! - `full` (default) - everything above
//!
//! ## Quick Example
//!
//! ```rust
//! # #[cfg(feature = "full")]
//! # {
//! use social_auth::prelude::*;
//! use serde_json::json;
//!
//! let settings = SocialAuthSettings::default();
//! let registry = BackendRegistry::from_settings(&settings).unwrap();
//!
//! let response = ProviderResponse::Facebook(
//!     OAuthResponse::from_value(json!({"id": "1", "name": "Bob Builder"})).unwrap(),
//! );
//! let identity = registry.authenticate(&response).unwrap().unwrap();
//!
//! assert_eq!(identity.provider, Provider::Facebook);
//! assert_eq!(identity.details.firstname.as_deref(), Some(""));
//! # }
//! ```

#[cfg(feature = "backends")]
pub use social_auth_backends as backends;
#[cfg(feature = "conf")]
pub use social_auth_conf as conf;

#[cfg(feature = "backends")]
pub use social_auth_backends::{
	BackendRegistry, Provider, ProviderResponse, SocialAuthBackend, SocialAuthError,
	SocialIdentity, UserDetails, UserIdentifier,
};
#[cfg(feature = "conf")]
pub use social_auth_conf::{ConfigError, SocialAuthSettings};

/// Commonly used types
pub mod prelude {
	#[cfg(feature = "backends")]
	pub use social_auth_backends::openid::{AxRecord, OpenIdResponse, SregRecord, SuccessResponse};
	#[cfg(feature = "backends")]
	pub use social_auth_backends::{
		Association, BackendRegistry, FacebookBackend, InMemorySocialAccountStore, OAuthResponse,
		OpenIdBackend, Provider, ProviderResponse, SocialAccountStore, SocialAuthBackend,
		SocialAuthError, SocialIdentity, SocialUserAssociation, TwitterBackend, UserDetails,
		UserIdentifier,
	};
	#[cfg(feature = "conf")]
	pub use social_auth_conf::{ConfigError, SocialAuthSettings};
}
