//! Owned XML tree structures.
//!
//! A [`Document`] owns a single root [`Node`]. Nodes keep their attributes
//! and children in document order: child order is significant for un-keyed
//! lookups (first match wins), while attribute-qualified lookups match by
//! predicate regardless of position.

use std::path::{Path, PathBuf};

/// A single element in a locale document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
	/// Element tag name.
	pub tag: String,
	/// Attribute (name, value) pairs in document order. Names are unique
	/// within a node.
	pub attrs: Vec<(String, String)>,
	/// Child elements in document order.
	pub children: Vec<Node>,
	/// Text content. Empty for container elements.
	pub text: String,
}

impl Node {
	/// Creates an empty node with the given tag.
	pub fn new(tag: impl Into<String>) -> Self {
		Self {
			tag: tag.into(),
			attrs: Vec::new(),
			children: Vec::new(),
			text: String::new(),
		}
	}

	/// Returns the value of the named attribute, if present.
	pub fn attr(&self, name: &str) -> Option<&str> {
		self.attrs
			.iter()
			.find(|(n, _)| n == name)
			.map(|(_, v)| v.as_str())
	}
}

/// An immutable, fully parsed locale document.
#[derive(Debug, Clone)]
pub struct Document {
	root: Node,
	path: PathBuf,
}

impl Document {
	/// Wraps a parsed root node with the path it came from.
	pub fn new(root: Node, path: impl Into<PathBuf>) -> Self {
		Self {
			root,
			path: path.into(),
		}
	}

	/// The document's root element.
	pub fn root(&self) -> &Node {
		&self.root
	}

	/// The path this document was parsed from.
	pub fn path(&self) -> &Path {
		&self.path
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_attr_lookup() {
		let mut node = Node::new("month");
		node.attrs.push(("type".into(), "1".into()));
		node.attrs.push(("draft".into(), "contributed".into()));

		assert_eq!(node.attr("type"), Some("1"));
		assert_eq!(node.attr("draft"), Some("contributed"));
		assert_eq!(node.attr("yeartype"), None);
	}
}
