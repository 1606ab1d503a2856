//! # Social Auth Conf
//!
//! Settings for the social authentication backends.
//!
//! Settings are layered in priority order (environment variables > settings
//! file > defaults). Every field has a default, so an empty file or no file at
//! all yields a usable configuration with every backend enabled.
//!
//! ## Example
//!
//! ```
//! use social_auth_conf::SocialAuthSettings;
//!
//! let settings = SocialAuthSettings::from_toml_str(
//!     r#"
//!     backends = ["twitter", "openid"]
//!     create_users = false
//!     "#,
//! )
//! .unwrap();
//!
//! assert_eq!(settings.backends, vec!["twitter", "openid"]);
//! assert!(!settings.create_users);
//! assert_eq!(settings.default_username, "social");
//! ```
//!
//! ## Environment Variables
//!
//! | Variable | Field |
//! |----------|-------|
//! | `SOCIAL_AUTH_BACKENDS` | `backends` (comma separated) |
//! | `SOCIAL_AUTH_CREATE_USERS` | `create_users` |
//! | `SOCIAL_AUTH_UPDATE_USER_DETAILS` | `update_user_details` |
//! | `SOCIAL_AUTH_DEFAULT_USERNAME` | `default_username` |
//! | `SOCIAL_AUTH_USERNAME_MAX_LENGTH` | `username_max_length` |
//! | `SOCIAL_AUTH_USERNAME_SUFFIX_LENGTH` | `username_suffix_length` |

pub mod error;
pub mod settings;
pub mod sources;

pub use error::ConfigError;
pub use settings::SocialAuthSettings;
pub use sources::ENV_PREFIX;
