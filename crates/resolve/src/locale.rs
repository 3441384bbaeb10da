//! Locale identifiers.

use std::fmt;

/// A (language, script, country, variant) tuple naming a locale.
///
/// Components are plain subtag strings; an empty string means "any".
/// Derived from a locale file's base name (`az_Arab_IR`), where a 4-letter
/// second subtag is a script code and shorter ones are country codes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct LocaleIdentifier {
	pub language: String,
	pub script: String,
	pub country: String,
	pub variant: String,
}

impl LocaleIdentifier {
	/// Splits an underscore-separated locale name into its components.
	pub fn parse(name: &str) -> Self {
		let mut id = Self::default();
		let mut items = name.split('_');

		if let Some(language) = items.next() {
			id.language = language.to_string();
		}
		let Some(second) = items.next() else {
			return id;
		};

		// A 4-letter alphabetic subtag in second position is a script code
		// ("az_Arab_IR"); anything else is a country ("de_DE").
		if second.len() == 4 && second.chars().all(|c| c.is_ascii_alphabetic()) {
			id.script = second.to_string();
			if let Some(country) = items.next() {
				id.country = country.to_string();
			}
		} else {
			id.country = second.to_string();
		}
		if let Some(variant) = items.next() {
			id.variant = variant.to_string();
		}
		id
	}

	/// The canonical underscore-joined name.
	pub fn name(&self) -> String {
		self.to_string()
	}
}

impl fmt::Display for LocaleIdentifier {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.language)?;
		for part in [&self.script, &self.country, &self.variant] {
			if !part.is_empty() {
				write!(f, "_{part}")?;
			}
		}
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_parse_language_only() {
		let id = LocaleIdentifier::parse("de");
		assert_eq!(id.language, "de");
		assert_eq!(id.script, "");
		assert_eq!(id.country, "");
	}

	#[test]
	fn test_parse_language_country() {
		let id = LocaleIdentifier::parse("de_DE");
		assert_eq!(id.language, "de");
		assert_eq!(id.country, "DE");
		assert_eq!(id.script, "");
	}

	#[test]
	fn test_parse_script_detected_by_length() {
		let id = LocaleIdentifier::parse("az_Arab_IR");
		assert_eq!(id.language, "az");
		assert_eq!(id.script, "Arab");
		assert_eq!(id.country, "IR");
	}

	#[test]
	fn test_parse_variant() {
		let id = LocaleIdentifier::parse("en_US_POSIX");
		assert_eq!(id.language, "en");
		assert_eq!(id.country, "US");
		assert_eq!(id.variant, "POSIX");
	}

	#[test]
	fn test_display_round_trip() {
		for name in ["root", "de", "de_DE", "az_Arab_IR", "en_US_POSIX"] {
			assert_eq!(LocaleIdentifier::parse(name).to_string(), name);
		}
	}
}
