//! Parsed-document cache.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use rustc_hash::FxHashMap;
use tracing::{debug, trace};

use crate::error::{DocumentError, Result};
use crate::node::Document;
use crate::parse;

/// Loads and caches parsed locale documents, keyed by canonicalized path.
///
/// Documents are read-only inputs; the cache is populated lazily and never
/// invalidated during a run. Repeated loads of the same path return a clone
/// of the same `Arc`, so callers comparing trees by identity
/// (`Arc::ptr_eq`) see the original parse, not a fresh one.
#[derive(Debug, Default)]
pub struct DocumentStore {
	cache: FxHashMap<PathBuf, Arc<Document>>,
}

impl DocumentStore {
	pub fn new() -> Self {
		Self::default()
	}

	/// Loads the document at `path`, parsing it on first access.
	///
	/// Fails with [`DocumentError::NotFound`] when the file does not exist;
	/// chain traversal treats that as "skip this entry".
	pub fn load(&mut self, path: &Path) -> Result<Arc<Document>> {
		let key = path
			.canonicalize()
			.map_err(|_| DocumentError::NotFound(path.to_owned()))?;

		if let Some(doc) = self.cache.get(&key) {
			trace!(path = %path.display(), "document cache hit");
			return Ok(doc.clone());
		}

		let doc = Arc::new(parse::parse_file(path)?);
		debug!(path = %path.display(), "parsed document");
		self.cache.insert(key, doc.clone());
		Ok(doc)
	}

	/// Number of parsed documents currently cached.
	pub fn len(&self) -> usize {
		self.cache.len()
	}

	pub fn is_empty(&self) -> bool {
		self.cache.is_empty()
	}
}

#[cfg(test)]
mod tests {
	use std::fs;
	use std::sync::Arc;

	use super::*;

	#[test]
	fn test_repeated_loads_return_identical_document() {
		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().join("en.xml");
		fs::write(&path, "<ldml><identity/></ldml>").unwrap();

		let mut store = DocumentStore::new();
		let first = store.load(&path).unwrap();
		let second = store.load(&path).unwrap();

		assert!(Arc::ptr_eq(&first, &second));
		assert_eq!(store.len(), 1);
	}

	#[test]
	fn test_missing_file_is_not_found() {
		let dir = tempfile::tempdir().unwrap();
		let mut store = DocumentStore::new();

		let err = store.load(&dir.path().join("zz.xml")).unwrap_err();
		assert!(matches!(err, DocumentError::NotFound(_)));
		assert!(store.is_empty());
	}

	#[test]
	fn test_unparsable_file_is_an_error() {
		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().join("broken.xml");
		fs::write(&path, "<ldml><unclosed>").unwrap();

		let mut store = DocumentStore::new();
		assert!(store.load(&path).is_err());
	}
}
