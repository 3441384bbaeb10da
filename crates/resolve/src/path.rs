//! Path expressions.
//!
//! A path expression names a node in a locale document:
//! `dates/calendars/calendar[gregorian]/dateFormats`. Each segment is a tag
//! name with an optional attribute predicate; a bare `[value]` predicate
//! matches on the `type` attribute, `[name=value]` on an explicit one.
//! `..` segments only appear in alias paths, where they pop one level off
//! the already-resolved portion (see [`crate::alias`]).

use std::fmt;

use crate::error::{ResolveError, Result};

/// Attribute name a bare `[value]` predicate matches against.
pub const DEFAULT_ATTR: &str = "type";

/// One step of a path expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathSegment {
	/// Element tag to match, or `".."` for a parent pop in alias paths.
	pub tag: String,
	/// Attribute the predicate applies to. Defaults to `"type"`.
	pub attr_name: String,
	/// Required attribute value. Empty means "match any node with this
	/// tag, ignoring attributes".
	pub attr_value: String,
}

impl PathSegment {
	/// A segment matching any node with the given tag.
	pub fn any(tag: impl Into<String>) -> Self {
		Self {
			tag: tag.into(),
			attr_name: DEFAULT_ATTR.into(),
			attr_value: String::new(),
		}
	}

	/// A segment with an attribute predicate.
	pub fn with_attr(
		tag: impl Into<String>,
		attr_name: impl Into<String>,
		attr_value: impl Into<String>,
	) -> Self {
		Self {
			tag: tag.into(),
			attr_name: attr_name.into(),
			attr_value: attr_value.into(),
		}
	}

	/// Whether this segment is a `..` parent pop.
	pub fn is_parent(&self) -> bool {
		self.tag == ".."
	}
}

impl fmt::Display for PathSegment {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		if self.attr_value.is_empty() {
			write!(f, "{}", self.tag)
		} else if self.attr_name == DEFAULT_ATTR {
			write!(f, "{}[{}]", self.tag, self.attr_value)
		} else {
			write!(f, "{}[{}={}]", self.tag, self.attr_name, self.attr_value)
		}
	}
}

/// Parses a slash-separated path expression into segments.
///
/// Fails with [`ResolveError::MalformedPath`] on an empty tag name.
pub fn parse(path: &str) -> Result<Vec<PathSegment>> {
	path.split('/').map(|raw| segment(raw, path)).collect()
}

/// Renders a segment list back into a path string, for diagnostics.
pub fn format(segments: &[PathSegment]) -> String {
	let mut out = String::new();
	for (i, seg) in segments.iter().enumerate() {
		if i > 0 {
			out.push('/');
		}
		out.push_str(&seg.to_string());
	}
	out
}

fn segment(raw: &str, full: &str) -> Result<PathSegment> {
	let malformed = || ResolveError::MalformedPath(full.to_string());

	let Some((tag, predicate)) = raw.split_once('[') else {
		if raw.is_empty() {
			return Err(malformed());
		}
		return Ok(PathSegment::any(raw));
	};
	if tag.is_empty() {
		return Err(malformed());
	}

	let predicate = predicate.strip_suffix(']').unwrap_or(predicate);
	let (name, value) = match predicate.split_once('=') {
		Some((name, value)) => {
			let name = name.trim_start_matches('@').trim_matches(['"', '\'']);
			(name, value)
		}
		None => (DEFAULT_ATTR, predicate),
	};
	Ok(PathSegment::with_attr(tag, name, value))
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_parse_plain_segments() {
		let segments = parse("numbers/symbols/decimal").unwrap();
		assert_eq!(
			segments,
			vec![
				PathSegment::any("numbers"),
				PathSegment::any("symbols"),
				PathSegment::any("decimal"),
			]
		);
	}

	#[test]
	fn test_parse_default_attribute_predicate() {
		let segments = parse("calendar[gregorian]/months").unwrap();
		assert_eq!(
			segments[0],
			PathSegment::with_attr("calendar", "type", "gregorian")
		);
	}

	#[test]
	fn test_parse_named_attribute_predicate() {
		let segments = parse("weekData/firstDay[day=mon]").unwrap();
		assert_eq!(segments[1], PathSegment::with_attr("firstDay", "day", "mon"));
	}

	#[test]
	fn test_parse_strips_at_sign_and_quotes() {
		let segments = parse("currency[@'iso4217'=USD]").unwrap();
		assert_eq!(
			segments[0],
			PathSegment::with_attr("currency", "iso4217", "USD")
		);
	}

	#[test]
	fn test_empty_tag_is_malformed() {
		assert!(matches!(
			parse("numbers//decimal"),
			Err(ResolveError::MalformedPath(_))
		));
		assert!(matches!(
			parse("[gregorian]/months"),
			Err(ResolveError::MalformedPath(_))
		));
	}

	#[test]
	fn test_format_round_trip() {
		for path in [
			"numbers/symbols/decimal",
			"calendar[gregorian]/months",
			"weekData/firstDay[day=mon]",
		] {
			assert_eq!(format(&parse(path).unwrap()), path);
		}
	}
}
