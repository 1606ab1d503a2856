//! Identity provider tags

use crate::error::SocialAuthError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identity provider a backend authenticates against
///
/// The provider tag is what routes a response to its backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Provider {
	Twitter,
	Facebook,
	#[serde(rename = "openid")]
	OpenId,
}

impl Provider {
	/// Every supported provider
	pub const ALL: [Provider; 3] = [Provider::Twitter, Provider::Facebook, Provider::OpenId];

	/// Stable provider name, used in settings and account links
	pub fn name(&self) -> &'static str {
		match self {
			Provider::Twitter => "twitter",
			Provider::Facebook => "facebook",
			Provider::OpenId => "openid",
		}
	}

	/// Check if the provider speaks OAuth (as opposed to OpenID)
	pub fn is_oauth(&self) -> bool {
		matches!(self, Provider::Twitter | Provider::Facebook)
	}
}

impl fmt::Display for Provider {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.name())
	}
}

impl FromStr for Provider {
	type Err = SocialAuthError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Provider::ALL
			.into_iter()
			.find(|provider| provider.name() == s)
			.ok_or_else(|| SocialAuthError::UnknownBackend(s.to_string()))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_name_round_trip() {
		for provider in Provider::ALL {
			assert_eq!(provider.name().parse::<Provider>().unwrap(), provider);
		}
	}

	#[test]
	fn test_unknown_name() {
		let result = "myspace".parse::<Provider>();
		assert_eq!(
			result,
			Err(SocialAuthError::UnknownBackend("myspace".to_string()))
		);
	}

	#[test]
	fn test_serde_names() {
		assert_eq!(
			serde_json::to_string(&Provider::OpenId).unwrap(),
			"\"openid\""
		);
		let provider: Provider = serde_json::from_str("\"facebook\"").unwrap();
		assert_eq!(provider, Provider::Facebook);
	}

	#[test]
	fn test_is_oauth() {
		assert!(Provider::Twitter.is_oauth());
		assert!(Provider::Facebook.is_oauth());
		assert!(!Provider::OpenId.is_oauth());
	}
}
