//! Name heuristics used when normalizing provider details

/// Split a full name at its last space
///
/// Returns `None` when the name holds no space at all. Only the rightmost
/// space separates the parts, so middle names stay with the first name.
///
/// # Examples
///
/// ```
/// use social_auth_backends::names::split_fullname;
///
/// assert_eq!(split_fullname("Jane Q Public"), Some(("Jane Q", "Public")));
/// assert_eq!(split_fullname("Cher"), None);
/// ```
pub fn split_fullname(fullname: &str) -> Option<(&str, &str)> {
	fullname.rsplit_once(' ')
}

/// Title-case every word of `value`
///
/// A letter directly following another letter is lower-cased, any other
/// letter is upper-cased. Non-letters pass through and break words.
///
/// # Examples
///
/// ```
/// use social_auth_backends::names::title_case;
///
/// assert_eq!(title_case("jANE q"), "Jane Q");
/// assert_eq!(title_case("o'neil"), "O'Neil");
/// assert_eq!(title_case(""), "");
/// ```
pub fn title_case(value: &str) -> String {
	let mut result = String::with_capacity(value.len());
	let mut previous_is_letter = false;

	for c in value.chars() {
		if c.is_alphabetic() {
			if previous_is_letter {
				result.extend(c.to_lowercase());
			} else {
				result.extend(c.to_uppercase());
			}
			previous_is_letter = true;
		} else {
			result.push(c);
			previous_is_letter = false;
		}
	}

	result
}
