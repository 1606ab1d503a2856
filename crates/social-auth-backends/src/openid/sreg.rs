//! Simple Registration (SREG 1.1) payload

use serde::{Deserialize, Serialize};

/// Field names defined by SREG 1.1
pub const SREG_FIELDS: [&str; 9] = [
	"nickname", "email", "fullname", "dob", "gender", "postcode", "country", "language",
	"timezone",
];

/// Profile data returned through the Simple Registration extension
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SregRecord {
	pub nickname: Option<String>,
	pub email: Option<String>,
	pub fullname: Option<String>,
	pub dob: Option<String>,
	pub gender: Option<String>,
	pub postcode: Option<String>,
	pub country: Option<String>,
	pub language: Option<String>,
	pub timezone: Option<String>,
}

impl SregRecord {
	/// Collect a record from `(field, value)` pairs
	///
	/// Pairs naming a field outside SREG 1.1 are dropped.
	///
	/// # Examples
	///
	/// ```
	/// use social_auth_backends::openid::SregRecord;
	///
	/// let sreg = SregRecord::from_pairs([("nickname", "bob"), ("favourite_color", "blue")]);
	/// assert_eq!(sreg.get("nickname"), Some("bob"));
	/// assert_eq!(sreg.get("favourite_color"), None);
	/// ```
	pub fn from_pairs<I, K, V>(pairs: I) -> Self
	where
		I: IntoIterator<Item = (K, V)>,
		K: AsRef<str>,
		V: Into<String>,
	{
		let mut record = Self::default();
		for (field, value) in pairs {
			if let Some(slot) = record.slot_mut(field.as_ref()) {
				*slot = Some(value.into());
			} else {
				tracing::debug!(field = field.as_ref(), "ignoring unknown SREG field");
			}
		}
		record
	}

	/// Look a field up by its SREG name
	pub fn get(&self, field: &str) -> Option<&str> {
		let value = match field {
			"nickname" => &self.nickname,
			"email" => &self.email,
			"fullname" => &self.fullname,
			"dob" => &self.dob,
			"gender" => &self.gender,
			"postcode" => &self.postcode,
			"country" => &self.country,
			"language" => &self.language,
			"timezone" => &self.timezone,
			_ => return None,
		};
		value.as_deref()
	}

	fn slot_mut(&mut self, field: &str) -> Option<&mut Option<String>> {
		match field {
			"nickname" => Some(&mut self.nickname),
			"email" => Some(&mut self.email),
			"fullname" => Some(&mut self.fullname),
			"dob" => Some(&mut self.dob),
			"gender" => Some(&mut self.gender),
			"postcode" => Some(&mut self.postcode),
			"country" => Some(&mut self.country),
			"language" => Some(&mut self.language),
			"timezone" => Some(&mut self.timezone),
			_ => None,
		}
	}
}
