//! Linking social identities to local user accounts
//!
//! A [`SocialIdentity`] only says who the provider believes the user is.
//! [`SocialUserAssociation`] turns it into a local user: an identity seen
//! before resolves to the user it was linked to, an unknown one creates a new
//! user with a unique username (unless user creation is disabled).

use crate::backend::ProviderResponse;
use crate::details::{SocialIdentity, UserDetails, UserIdentifier};
use crate::error::{SocialAuthError, SocialAuthResult};
use crate::provider::Provider;
use crate::registry::BackendRegistry;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use rand::Rng;
use rand::distributions::Alphanumeric;
use serde::{Deserialize, Serialize};
use social_auth_conf::SocialAuthSettings;
use std::collections::HashMap;
use std::sync::Arc;
use uuid::Uuid;

/// Attempts at finding a free username before giving up
const MAX_USERNAME_ATTEMPTS: usize = 32;

/// Local user account
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalUser {
	pub id: Uuid,
	pub username: String,
	pub email: String,
	pub first_name: String,
	pub last_name: String,
	pub is_active: bool,
	pub date_joined: DateTime<Utc>,
}

/// Social account linking a local user to a provider identity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialAccount {
	pub id: Uuid,
	pub user_id: Uuid,
	pub provider: Provider,
	pub uid: UserIdentifier,
	pub created_at: DateTime<Utc>,
	pub updated_at: DateTime<Utc>,
}

/// Social account storage trait
#[async_trait]
pub trait SocialAccountStore: Send + Sync {
	/// Account linked to `(provider, uid)`
	async fn find_account(
		&self,
		provider: Provider,
		uid: &UserIdentifier,
	) -> SocialAuthResult<Option<SocialAccount>>;

	async fn get_user(&self, id: Uuid) -> SocialAuthResult<Option<LocalUser>>;

	async fn username_exists(&self, username: &str) -> SocialAuthResult<bool>;

	/// Insert a new user; usernames are unique
	async fn create_user(&self, user: LocalUser) -> SocialAuthResult<LocalUser>;

	/// Replace an existing user
	async fn update_user(&self, user: LocalUser) -> SocialAuthResult<LocalUser>;

	/// Insert or replace the account keyed by `(provider, uid)`
	async fn link(&self, account: SocialAccount) -> SocialAuthResult<SocialAccount>;
}

/// In-memory account store
///
/// Primarily for tests and demonstrations; production hosts back
/// [`SocialAccountStore`] with their user table.
#[derive(Debug, Default, Clone)]
pub struct InMemorySocialAccountStore {
	users: Arc<RwLock<HashMap<Uuid, LocalUser>>>,
	accounts: Arc<RwLock<HashMap<(Provider, UserIdentifier), SocialAccount>>>,
}

impl InMemorySocialAccountStore {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn user_count(&self) -> usize {
		self.users.read().len()
	}

	pub fn account_count(&self) -> usize {
		self.accounts.read().len()
	}
}

#[async_trait]
impl SocialAccountStore for InMemorySocialAccountStore {
	async fn find_account(
		&self,
		provider: Provider,
		uid: &UserIdentifier,
	) -> SocialAuthResult<Option<SocialAccount>> {
		Ok(self.accounts.read().get(&(provider, uid.clone())).cloned())
	}

	async fn get_user(&self, id: Uuid) -> SocialAuthResult<Option<LocalUser>> {
		Ok(self.users.read().get(&id).cloned())
	}

	async fn username_exists(&self, username: &str) -> SocialAuthResult<bool> {
		Ok(self
			.users
			.read()
			.values()
			.any(|user| user.username == username))
	}

	async fn create_user(&self, user: LocalUser) -> SocialAuthResult<LocalUser> {
		let mut users = self.users.write();
		if users.values().any(|existing| existing.username == user.username) {
			return Err(SocialAuthError::Storage(format!(
				"username already taken: {}",
				user.username
			)));
		}
		users.insert(user.id, user.clone());
		Ok(user)
	}

	async fn update_user(&self, user: LocalUser) -> SocialAuthResult<LocalUser> {
		let mut users = self.users.write();
		match users.get_mut(&user.id) {
			Some(existing) => {
				*existing = user.clone();
				Ok(user)
			}
			None => Err(SocialAuthError::Storage(format!("user not found: {}", user.id))),
		}
	}

	async fn link(&self, account: SocialAccount) -> SocialAuthResult<SocialAccount> {
		if !self.users.read().contains_key(&account.user_id) {
			return Err(SocialAuthError::Storage(format!(
				"user not found: {}",
				account.user_id
			)));
		}
		self.accounts.write().insert(
			(account.provider, account.uid.clone()),
			account.clone(),
		);
		Ok(account)
	}
}

/// Outcome of associating an identity with a local user
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Association {
	/// The identity was already linked to this user
	Existing(LocalUser),
	/// A new user was created and linked
	Created(LocalUser),
}

impl Association {
	pub fn user(&self) -> &LocalUser {
		match self {
			Association::Existing(user) | Association::Created(user) => user,
		}
	}

	pub fn into_user(self) -> LocalUser {
		match self {
			Association::Existing(user) | Association::Created(user) => user,
		}
	}

	pub fn is_new(&self) -> bool {
		matches!(self, Association::Created(_))
	}
}

/// Resolves social identities to local users
pub struct SocialUserAssociation<S: SocialAccountStore> {
	store: Arc<S>,
	settings: SocialAuthSettings,
}

impl<S: SocialAccountStore> SocialUserAssociation<S> {
	/// Create an association service
	///
	/// The settings are validated so that generated usernames always fit.
	pub fn new(store: Arc<S>, settings: SocialAuthSettings) -> SocialAuthResult<Self> {
		settings.validate()?;
		Ok(Self { store, settings })
	}

	pub fn store(&self) -> &Arc<S> {
		&self.store
	}

	/// Authenticate a response and associate the resulting identity
	///
	/// `Ok(None)` when no backend handles the response, or when the identity
	/// is unknown and user creation is disabled.
	pub async fn authenticate(
		&self,
		registry: &BackendRegistry,
		response: &ProviderResponse,
	) -> SocialAuthResult<Option<Association>> {
		match registry.authenticate(response)? {
			Some(identity) => self.associate(&identity).await,
			None => Ok(None),
		}
	}

	/// Resolve an identity to its local user, creating one if allowed
	pub async fn associate(&self, identity: &SocialIdentity) -> SocialAuthResult<Option<Association>> {
		if let Some(mut account) = self
			.store
			.find_account(identity.provider, &identity.uid)
			.await?
		{
			let mut user = self.store.get_user(account.user_id).await?.ok_or_else(|| {
				SocialAuthError::Storage(format!("linked user not found: {}", account.user_id))
			})?;

			if self.settings.update_user_details && apply_details(&mut user, &identity.details) {
				user = self.store.update_user(user).await?;
				tracing::debug!(user_id = %user.id, "user details refreshed from provider");
			}

			account.updated_at = Utc::now();
			self.store.link(account).await?;

			return Ok(Some(Association::Existing(user)));
		}

		if !self.settings.create_users {
			tracing::debug!(
				provider = %identity.provider,
				uid = %identity.uid,
				"unknown identity and user creation disabled"
			);
			return Ok(None);
		}

		let username = self
			.unique_username(identity.details.username_or_empty())
			.await?;
		let now = Utc::now();
		let user = self
			.store
			.create_user(LocalUser {
				id: Uuid::new_v4(),
				username,
				email: identity.details.email.clone().unwrap_or_default(),
				first_name: identity.details.firstname.clone().unwrap_or_default(),
				last_name: identity.details.lastname.clone().unwrap_or_default(),
				is_active: true,
				date_joined: now,
			})
			.await?;

		self.store
			.link(SocialAccount {
				id: Uuid::new_v4(),
				user_id: user.id,
				provider: identity.provider,
				uid: identity.uid.clone(),
				created_at: now,
				updated_at: now,
			})
			.await?;

		tracing::info!(
			provider = %identity.provider,
			uid = %identity.uid,
			username = %user.username,
			"created user for social identity"
		);

		Ok(Some(Association::Created(user)))
	}

	/// Derive a free username from the one the provider suggested
	async fn unique_username(&self, requested: &str) -> SocialAuthResult<String> {
		let max_length = self.settings.username_max_length;
		let base = if requested.is_empty() {
			self.settings.default_username.as_str()
		} else {
			requested
		};

		let mut candidate: String = base.chars().take(max_length).collect();
		for _ in 0..MAX_USERNAME_ATTEMPTS {
			if !self.store.username_exists(&candidate).await? {
				return Ok(candidate);
			}
			tracing::warn!(username = %candidate, "username taken, appending random suffix");

			let suffix_length = self.settings.username_suffix_length;
			let prefix: String = base.chars().take(max_length - suffix_length).collect();
			candidate = format!("{}{}", prefix, random_suffix(suffix_length));
		}

		Err(SocialAuthError::Storage(format!(
			"no free username derived from {:?}",
			base
		)))
	}
}

/// Copy non-empty details onto the user; true when something changed
fn apply_details(user: &mut LocalUser, details: &UserDetails) -> bool {
	let mut changed = false;
	for (slot, value) in [
		(&mut user.email, &details.email),
		(&mut user.first_name, &details.firstname),
		(&mut user.last_name, &details.lastname),
	] {
		let Some(value) = value.as_deref().filter(|v| !v.is_empty()) else {
			continue;
		};
		if slot.as_str() != value {
			*slot = value.to_string();
			changed = true;
		}
	}
	changed
}

fn random_suffix(length: usize) -> String {
	rand::thread_rng()
		.sample_iter(&Alphanumeric)
		.take(length)
		.map(char::from)
		.collect()
}
