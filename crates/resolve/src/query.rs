//! Node lookup within a single document.
//!
//! [`resolve_path`] walks a parsed document level by level along a segment
//! list, applying attribute predicates and the optional draft floor, and
//! following same-document aliases as it goes. Cross-locale aliases abort
//! the walk and hand the rewritten path back to the caller.

use cldr_document::{Document, Node};
use rustc_hash::FxHashSet;
use tracing::trace;

use crate::alias;
use crate::draft::DraftLevel;
use crate::error::Result;
use crate::path::{self, PathSegment};

/// Outcome of resolving a path against one document.
#[derive(Debug)]
pub enum PathOutcome<'a> {
	/// The path matched this node.
	Found(&'a Node),
	/// Some segment had no match; the caller tries the next locale in the
	/// chain.
	NotFound,
	/// A `source="locale"` alias was hit. The caller must restart the whole
	/// chain search with this rewritten path, beginning from the most
	/// specific locale again.
	LocaleAlias(Vec<PathSegment>),
}

/// Finds the first child of `parent` matching tag, attribute predicate and
/// draft floor.
///
/// An empty `attr_value` matches any node with the tag. A node whose
/// effective draft level is below `min_draft` is reported as not found
/// outright; later siblings are not considered. Nodes without a `draft`
/// attribute always pass the filter.
pub fn find_child<'a>(
	parent: &'a Node,
	tag: &str,
	attr_name: &str,
	attr_value: &str,
	min_draft: Option<DraftLevel>,
) -> Option<&'a Node> {
	for child in &parent.children {
		if child.tag != tag {
			continue;
		}
		if !attr_value.is_empty() && child.attr(attr_name) != Some(attr_value) {
			continue;
		}
		if let (Some(min), Some(draft)) = (min_draft, child.attr("draft")) {
			let level = DraftLevel::parse(draft).unwrap_or(DraftLevel::Unconfirmed);
			if level < min {
				// Draft rejection behaves as "not found"; no sibling
				// backtracking.
				return None;
			}
		}
		return Some(child);
	}
	None
}

/// Walks `segments` from the document root.
///
/// Same-document aliases restart the walk within this file with the
/// substituted path; a repeated substitution (cyclic alias fixture) ends
/// the walk as not found.
pub fn resolve_path<'a>(
	doc: &'a Document,
	segments: &[PathSegment],
	min_draft: Option<DraftLevel>,
) -> Result<PathOutcome<'a>> {
	let mut segments = segments.to_vec();
	let mut seen: FxHashSet<String> = FxHashSet::default();

	'walk: loop {
		let mut node = doc.root();
		let mut consumed: Vec<PathSegment> = Vec::new();

		for i in 0..segments.len() {
			let seg = &segments[i];
			let Some(next) = find_child(node, &seg.tag, &seg.attr_name, &seg.attr_value, min_draft)
			else {
				return Ok(PathOutcome::NotFound);
			};
			node = next;
			consumed.push(seg.clone());

			let Some(alias_node) = find_child(node, "alias", "", "", None) else {
				continue;
			};
			let Some(alias_path) = alias_node.attr("path") else {
				continue;
			};
			let rewritten = alias::rewrite_path(&consumed, alias_path, &segments[i + 1..])?;

			if alias::is_locale_alias(alias_node) {
				trace!(
					from = %path::format(&segments),
					to = %path::format(&rewritten),
					"cross-locale alias"
				);
				return Ok(PathOutcome::LocaleAlias(rewritten));
			}

			if !seen.insert(path::format(&rewritten)) {
				return Ok(PathOutcome::NotFound);
			}
			trace!(
				from = %path::format(&segments),
				to = %path::format(&rewritten),
				"same-document alias"
			);
			segments = rewritten;
			continue 'walk;
		}

		return Ok(PathOutcome::Found(node));
	}
}
