//! Draft-quality levels.

/// Vetting status of a data point, from the `draft` attribute.
///
/// A lookup specifying a minimum level rejects nodes below it. Nodes with
/// no `draft` attribute are treated as fully vetted and always pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum DraftLevel {
	Unconfirmed = 1,
	Provisional = 2,
	Contributed = 3,
	Approved = 4,
}

impl DraftLevel {
	/// Parses a `draft` attribute value. Unknown values yield `None`;
	/// callers treat them as [`DraftLevel::Unconfirmed`].
	pub fn parse(value: &str) -> Option<Self> {
		match value {
			"unconfirmed" => Some(Self::Unconfirmed),
			"provisional" => Some(Self::Provisional),
			"contributed" => Some(Self::Contributed),
			"approved" => Some(Self::Approved),
			_ => None,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_levels_are_ordered() {
		assert!(DraftLevel::Unconfirmed < DraftLevel::Provisional);
		assert!(DraftLevel::Provisional < DraftLevel::Contributed);
		assert!(DraftLevel::Contributed < DraftLevel::Approved);
	}

	#[test]
	fn test_parse() {
		assert_eq!(DraftLevel::parse("contributed"), Some(DraftLevel::Contributed));
		assert_eq!(DraftLevel::parse("approved"), Some(DraftLevel::Approved));
		assert_eq!(DraftLevel::parse("true"), None);
	}
}
