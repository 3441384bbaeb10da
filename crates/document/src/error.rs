//! Error types for document loading and parsing.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur when loading a locale document.
#[derive(Debug, Error)]
pub enum DocumentError {
	/// The document file does not exist.
	#[error("document not found: {}", .0.display())]
	NotFound(PathBuf),

	/// Error reading a document file.
	#[error("I/O error reading {}: {}", .path.display(), .error)]
	Io {
		/// Path to the file that failed to read.
		path: PathBuf,
		/// The underlying I/O error.
		error: std::io::Error,
	},

	/// Error parsing XML syntax.
	#[error("XML error in {}: {}", .path.display(), .error)]
	Xml {
		/// Path to the document that failed to parse.
		path: PathBuf,
		/// The underlying parse error.
		error: quick_xml::Error,
	},

	/// The document is well-formed XML but structurally unusable.
	#[error("malformed document {}: {}", .path.display(), .reason)]
	Malformed {
		/// Path to the offending document.
		path: PathBuf,
		/// What was wrong with it.
		reason: String,
	},
}

/// Result type for document operations.
pub type Result<T> = std::result::Result<T, DocumentError>;
