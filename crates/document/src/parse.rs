//! XML parsing into the owned [`Node`] tree.
//!
//! Locale documents are small (tens of kilobytes), so the whole file is read
//! into memory and parsed with `quick-xml`'s borrowing event reader.
//! Inter-element indentation is dropped; text inside leaf elements is kept
//! byte-for-byte, since separator fields carry meaningful non-ASCII
//! whitespace (no-break and narrow no-break spaces).

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

use crate::error::{DocumentError, Result};
use crate::node::{Document, Node};

/// Reads and parses the document at `path`.
///
/// Fails with [`DocumentError::NotFound`] when the file does not exist.
pub fn parse_file(path: &Path) -> Result<Document> {
	let input = fs::read_to_string(path).map_err(|error| {
		if error.kind() == ErrorKind::NotFound {
			DocumentError::NotFound(path.to_owned())
		} else {
			DocumentError::Io {
				path: path.to_owned(),
				error,
			}
		}
	})?;
	parse_str(&input, path)
}

/// Parses a document from an in-memory string. `origin` is only used for
/// error reporting and [`Document::path`].
pub fn parse_str(input: &str, origin: &Path) -> Result<Document> {
	let mut reader = Reader::from_str(input);
	let mut stack: Vec<Node> = Vec::new();
	let mut root: Option<Node> = None;

	loop {
		match reader.read_event() {
			Ok(Event::Start(start)) => stack.push(element(&start, origin)?),
			Ok(Event::Empty(start)) => {
				let node = element(&start, origin)?;
				attach(node, &mut stack, &mut root, origin)?;
			}
			Ok(Event::End(_)) => {
				let node = stack.pop().ok_or_else(|| DocumentError::Malformed {
					path: origin.to_owned(),
					reason: "unexpected closing tag".into(),
				})?;
				attach(node, &mut stack, &mut root, origin)?;
			}
			Ok(Event::Text(text)) => {
				let text = text.unescape().map_err(|error| DocumentError::Xml {
					path: origin.to_owned(),
					error,
				})?;
				if let Some(top) = stack.last_mut() {
					top.text.push_str(&text);
				}
			}
			Ok(Event::CData(data)) => {
				if let Some(top) = stack.last_mut() {
					top.text.push_str(&String::from_utf8_lossy(&data));
				}
			}
			// Declarations, comments, doctype and processing instructions
			// carry no locale data.
			Ok(Event::Decl(_) | Event::Comment(_) | Event::DocType(_) | Event::PI(_)) => {}
			Ok(Event::Eof) => break,
			Err(error) => {
				return Err(DocumentError::Xml {
					path: origin.to_owned(),
					error,
				});
			}
		}
	}

	if !stack.is_empty() {
		return Err(DocumentError::Malformed {
			path: origin.to_owned(),
			reason: "unclosed element at end of input".into(),
		});
	}
	let root = root.ok_or_else(|| DocumentError::Malformed {
		path: origin.to_owned(),
		reason: "no root element".into(),
	})?;
	Ok(Document::new(root, origin))
}

fn element(start: &BytesStart<'_>, path: &Path) -> Result<Node> {
	let tag = String::from_utf8_lossy(start.name().as_ref()).into_owned();
	let mut node = Node::new(tag);
	for attr in start.attributes() {
		let attr = attr.map_err(|error| DocumentError::Xml {
			path: path.to_owned(),
			error: error.into(),
		})?;
		let name = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
		let value = attr
			.unescape_value()
			.map_err(|error| DocumentError::Xml {
				path: path.to_owned(),
				error,
			})?
			.into_owned();
		node.attrs.push((name, value));
	}
	Ok(node)
}

fn attach(
	mut node: Node,
	stack: &mut Vec<Node>,
	root: &mut Option<Node>,
	origin: &Path,
) -> Result<()> {
	// Indentation between child elements accumulates as text on the
	// container; it is formatting noise, not data. Leaf text is preserved
	// exactly, including non-ASCII space characters.
	if !node.children.is_empty() && node.text.chars().all(|c| c.is_ascii_whitespace()) {
		node.text.clear();
	}

	match stack.last_mut() {
		Some(parent) => parent.children.push(node),
		None => {
			if root.is_some() {
				return Err(DocumentError::Malformed {
					path: origin.to_owned(),
					reason: "multiple root elements".into(),
				});
			}
			*root = Some(node);
		}
	}
	Ok(())
}

#[cfg(test)]
mod tests {
	use std::path::Path;

	use super::*;

	fn parse(input: &str) -> Document {
		parse_str(input, Path::new("test.xml")).unwrap()
	}

	#[test]
	fn test_parse_nested_elements() {
		let doc = parse(
			"<ldml>\n\t<numbers>\n\t\t<symbols>\n\t\t\t<decimal>,</decimal>\n\t\t</symbols>\n\t</numbers>\n</ldml>",
		);

		let root = doc.root();
		assert_eq!(root.tag, "ldml");
		assert_eq!(root.text, "");
		let decimal = &root.children[0].children[0].children[0];
		assert_eq!(decimal.tag, "decimal");
		assert_eq!(decimal.text, ",");
	}

	#[test]
	fn test_attributes_keep_document_order() {
		let doc = parse(r#"<ldml><month type="1" draft="contributed" yeartype="leap"/></ldml>"#);
		let month = &doc.root().children[0];

		assert_eq!(
			month.attrs,
			vec![
				("type".to_string(), "1".to_string()),
				("draft".to_string(), "contributed".to_string()),
				("yeartype".to_string(), "leap".to_string()),
			]
		);
	}

	#[test]
	fn test_leaf_whitespace_preserved() {
		// fr uses a narrow no-break space as group separator.
		let doc = parse("<ldml><group>\u{202f}</group></ldml>");
		assert_eq!(doc.root().children[0].text, "\u{202f}");
	}

	#[test]
	fn test_entities_unescaped() {
		let doc = parse("<ldml><quotationStart>&#171;</quotationStart></ldml>");
		assert_eq!(doc.root().children[0].text, "\u{ab}");
	}

	#[test]
	fn test_malformed_input_rejected() {
		let err = parse_str("<ldml><numbers>", Path::new("bad.xml")).unwrap_err();
		assert!(matches!(
			err,
			DocumentError::Xml { .. } | DocumentError::Malformed { .. }
		));
	}
}
