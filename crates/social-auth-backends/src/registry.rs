//! Backend registry: routes tagged provider responses to their backend

use crate::backend::{ProviderResponse, SocialAuthBackend};
use crate::details::SocialIdentity;
use crate::error::SocialAuthResult;
use crate::oauth::{FacebookBackend, TwitterBackend};
use crate::openid::OpenIdBackend;
use crate::provider::Provider;
use social_auth_conf::SocialAuthSettings;
use std::collections::HashMap;
use std::sync::Arc;

/// Lookup table of enabled backends
///
/// # Example
///
/// ```
/// use social_auth_backends::{BackendRegistry, OAuthResponse, ProviderResponse};
/// use social_auth_conf::SocialAuthSettings;
/// use serde_json::json;
///
/// let registry = BackendRegistry::from_settings(&SocialAuthSettings::default()).unwrap();
///
/// let response = ProviderResponse::Twitter(
///     OAuthResponse::from_value(json!({"id": 7, "screen_name": "alice", "name": "Alice A"}))
///         .unwrap(),
/// );
/// let identity = registry.authenticate(&response).unwrap().unwrap();
///
/// assert_eq!(identity.uid.as_str(), "7");
/// assert_eq!(identity.details.username.as_deref(), Some("alice"));
/// ```
#[derive(Clone, Default)]
pub struct BackendRegistry {
	backends: HashMap<Provider, Arc<dyn SocialAuthBackend>>,
}

impl BackendRegistry {
	/// Create an empty registry
	pub fn new() -> Self {
		Self::default()
	}

	/// Registry holding the built-in backend of every provider
	pub fn with_all_backends() -> Self {
		let mut registry = Self::new();
		for provider in Provider::ALL {
			registry.register(builtin(provider));
		}
		registry
	}

	/// Registry holding the built-in backends named in `settings.backends`
	///
	/// Fails with [`crate::SocialAuthError::UnknownBackend`] on a name that
	/// matches no provider.
	pub fn from_settings(settings: &SocialAuthSettings) -> SocialAuthResult<Self> {
		let mut registry = Self::new();
		for name in &settings.backends {
			let provider: Provider = name.parse()?;
			registry.register(builtin(provider));
		}
		tracing::debug!(backends = ?settings.backends, "social auth backends registered");
		Ok(registry)
	}

	/// Register a backend, replacing any backend of the same provider
	pub fn register(&mut self, backend: Arc<dyn SocialAuthBackend>) {
		self.backends.insert(backend.provider(), backend);
	}

	pub fn get(&self, provider: Provider) -> Option<Arc<dyn SocialAuthBackend>> {
		self.backends.get(&provider).cloned()
	}

	pub fn is_enabled(&self, provider: Provider) -> bool {
		self.backends.contains_key(&provider)
	}

	/// Enabled providers, in a stable order
	pub fn providers(&self) -> Vec<Provider> {
		Provider::ALL
			.into_iter()
			.filter(|provider| self.is_enabled(*provider))
			.collect()
	}

	/// Authenticate a response with the backend of its provider
	///
	/// Yields `Ok(None)` when no backend is registered for the provider.
	pub fn authenticate(
		&self,
		response: &ProviderResponse,
	) -> SocialAuthResult<Option<SocialIdentity>> {
		let provider = response.provider();
		match self.backends.get(&provider) {
			Some(backend) => backend.authenticate(response),
			None => {
				tracing::debug!(provider = %provider, "no backend enabled for provider");
				Ok(None)
			}
		}
	}
}

impl std::fmt::Debug for BackendRegistry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("BackendRegistry")
			.field("providers", &self.providers())
			.finish()
	}
}

fn builtin(provider: Provider) -> Arc<dyn SocialAuthBackend> {
	match provider {
		Provider::Twitter => Arc::new(TwitterBackend::new()),
		Provider::Facebook => Arc::new(FacebookBackend::new()),
		Provider::OpenId => Arc::new(OpenIdBackend::new()),
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::error::SocialAuthError;

	#[test]
	fn test_with_all_backends() {
		let registry = BackendRegistry::with_all_backends();
		assert_eq!(registry.providers(), Provider::ALL.to_vec());
	}

	#[test]
	fn test_from_settings_subset() {
		let settings = SocialAuthSettings {
			backends: vec!["openid".to_string()],
			..Default::default()
		};

		let registry = BackendRegistry::from_settings(&settings).unwrap();

		assert!(registry.is_enabled(Provider::OpenId));
		assert!(!registry.is_enabled(Provider::Twitter));
		assert!(registry.get(Provider::Facebook).is_none());
	}

	#[test]
	fn test_from_settings_unknown_backend() {
		let settings = SocialAuthSettings {
			backends: vec!["twitter".to_string(), "orkut".to_string()],
			..Default::default()
		};

		let result = BackendRegistry::from_settings(&settings);

		assert!(matches!(result, Err(SocialAuthError::UnknownBackend(name)) if name == "orkut"));
	}

	#[test]
	fn test_debug_lists_providers() {
		let registry = BackendRegistry::with_all_backends();
		assert_eq!(
			format!("{:?}", registry),
			"BackendRegistry { providers: [Twitter, Facebook, OpenId] }"
		);
	}
}
