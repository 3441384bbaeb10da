//! Error types for locale resolution.

use std::path::PathBuf;

use cldr_document::DocumentError;
use thiserror::Error;

/// Errors that can occur while resolving locale data.
#[derive(Debug, Error)]
pub enum ResolveError {
	/// A path expression could not be parsed. Always a programming or
	/// configuration error; never recovered.
	#[error("malformed path expression: {0:?}")]
	MalformedPath(String),

	/// An alias points at a locale file that does not exist.
	#[error("dangling alias in {}: target {:?} does not exist", .file.display(), .target)]
	DanglingAlias {
		/// Document containing the alias.
		file: PathBuf,
		/// The alias target that could not be found.
		target: String,
	},

	/// A language, script or country code has no entry in the code table.
	#[error("unknown subtag: {0:?}")]
	UnknownSubtag(String),

	/// The entire lookup chain, including `root`, yielded no value.
	#[error("field {path:?} not found for locale {locale:?}")]
	FieldNotFound {
		/// The locale the resolution started from.
		locale: String,
		/// The field path that was requested.
		path: String,
	},

	/// A document failed to load or parse. Missing files encountered during
	/// chain traversal are skipped before reaching this variant.
	#[error(transparent)]
	Document(#[from] DocumentError),
}

/// Result type for resolution operations.
pub type Result<T> = std::result::Result<T, ResolveError>;
