//! Alias interpretation.
//!
//! An `<alias>` node declares that its parent's subtree is defined
//! elsewhere. Three shapes occur:
//!
//! - `source="locale"` with a `path`: the data lives at a different path,
//!   resolved against the locale's whole lookup chain again (handled by
//!   [`crate::resolver`], which restarts from the most specific locale).
//! - a `path` without `source="locale"`: a substitution within the current
//!   document only.
//! - a bare `source="xx"` file reference at the document root: the entire
//!   locale is an alias for a sibling file (legacy locales).
//!
//! In alias paths, `..` pops one segment off the already-resolved portion.

use std::path::{Path, PathBuf};

use cldr_document::{Document, Node};

use crate::error::{ResolveError, Result};
use crate::path::{self, PathSegment};

/// Rewrites a path around an alias discovered mid-resolution.
///
/// `consumed` is the already-resolved portion up to and including the
/// aliased node, `alias_path` the alias's declared path, and `remaining`
/// the un-consumed tail of the original request. Leading `..` segments in
/// the alias path pop off the consumed portion.
pub fn rewrite_path(
	consumed: &[PathSegment],
	alias_path: &str,
	remaining: &[PathSegment],
) -> Result<Vec<PathSegment>> {
	let mut base = consumed.to_vec();
	let mut tail: Vec<PathSegment> = Vec::new();

	for seg in path::parse(alias_path)? {
		if seg.is_parent() {
			if tail.pop().is_none() {
				base.pop();
			}
		} else {
			tail.push(seg);
		}
	}

	base.extend(tail);
	base.extend_from_slice(remaining);
	Ok(base)
}

/// Reports a whole-file alias: an `<alias source="xx"/>` child of the
/// document root with a file reference rather than `locale`.
pub fn file_alias(doc: &Document) -> Option<&str> {
	let alias = doc.root().children.iter().find(|c| c.tag == "alias")?;
	match alias.attr("source") {
		Some("locale") | None => None,
		Some(target) => Some(target),
	}
}

/// Resolves a whole-file alias target to a sibling document path.
///
/// Fails with [`ResolveError::DanglingAlias`] when the target file does
/// not exist next to the current document.
pub fn follow_file_alias(document_path: &Path, target: &str) -> Result<PathBuf> {
	let dir = document_path.parent().unwrap_or(Path::new(""));
	let candidate = dir.join(format!("{target}.xml"));
	if candidate.is_file() {
		Ok(candidate)
	} else {
		Err(ResolveError::DanglingAlias {
			file: document_path.to_owned(),
			target: target.to_string(),
		})
	}
}

/// Whether `node` is an alias with a `source="locale"` cross-locale
/// redirect.
pub fn is_locale_alias(node: &Node) -> bool {
	node.tag == "alias" && node.attr("source") == Some("locale")
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::path::parse;

	#[test]
	fn test_rewrite_pops_consumed_segments() {
		let consumed = parse("dates/calendars/calendar[gregorian]/months").unwrap();
		let remaining = parse("monthWidth[wide]/month[1]").unwrap();

		let rewritten = rewrite_path(&consumed, "../monthContext[format]", &remaining).unwrap();
		assert_eq!(
			path::format(&rewritten),
			"dates/calendars/calendar[gregorian]/monthContext[format]/monthWidth[wide]/month[1]"
		);
	}

	#[test]
	fn test_rewrite_multiple_pops() {
		let consumed = parse("a/b/c").unwrap();
		let rewritten = rewrite_path(&consumed, "../../x/y", &[]).unwrap();
		assert_eq!(path::format(&rewritten), "a/x/y");
	}

	#[test]
	fn test_rewrite_without_pops_appends() {
		let consumed = parse("a/b").unwrap();
		let remaining = parse("c").unwrap();
		let rewritten = rewrite_path(&consumed, "x", &remaining).unwrap();
		assert_eq!(path::format(&rewritten), "a/b/x/c");
	}

	#[test]
	fn test_dangling_file_alias() {
		let dir = tempfile::tempdir().unwrap();
		let doc_path = dir.path().join("de_AT.xml");

		let err = follow_file_alias(&doc_path, "de").unwrap_err();
		assert!(matches!(
			err,
			ResolveError::DanglingAlias { target, .. } if target == "de"
		));
	}

	#[test]
	fn test_file_alias_resolves_to_sibling() {
		let dir = tempfile::tempdir().unwrap();
		std::fs::write(dir.path().join("de.xml"), "<ldml/>").unwrap();

		let resolved = follow_file_alias(&dir.path().join("de_AT.xml"), "de").unwrap();
		assert_eq!(resolved, dir.path().join("de.xml"));
	}
}
