//! Chain-walking field resolution.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use cldr_document::{Document, DocumentError, DocumentStore, Node};
use rustc_hash::FxHashSet;
use tracing::{debug, trace};

use crate::alias;
use crate::chain::LookupChainBuilder;
use crate::draft::DraftLevel;
use crate::error::{ResolveError, Result};
use crate::path::{self, PathSegment};
use crate::query::{self, PathOutcome};

/// Resolves fields for locales by walking their lookup chains.
///
/// One `Resolver` serves a whole batch run. It owns every cache the
/// algorithm relies on: the parsed-document store and the memoized
/// lookup chains (which in turn hold the parent-locale override table).
#[derive(Debug)]
pub struct Resolver {
	main_dir: PathBuf,
	store: DocumentStore,
	chains: LookupChainBuilder,
}

impl Resolver {
	/// `main_dir` holds the per-locale documents (`<name>.xml`);
	/// `supplemental_path` is the supplemental data document.
	pub fn new(main_dir: impl Into<PathBuf>, supplemental_path: impl Into<PathBuf>) -> Self {
		Self {
			main_dir: main_dir.into(),
			store: DocumentStore::new(),
			chains: LookupChainBuilder::new(supplemental_path),
		}
	}

	/// The lookup chain for `locale`, exposed for diagnostics and tests.
	pub fn lookup_chain(&mut self, locale: &str) -> Result<Vec<String>> {
		self.chains.build(locale, &mut self.store)
	}

	/// Shared access to the underlying document store.
	pub fn store_mut(&mut self) -> &mut DocumentStore {
		&mut self.store
	}

	/// Resolves `field_path` for `locale`, returning the text content of
	/// the first match along the lookup chain.
	///
	/// Missing locale files are skipped; a legacy whole-file alias redirects
	/// to its sibling document; a `source="locale"` alias restarts the
	/// search from the most specific locale with the rewritten path.
	/// Fails with [`ResolveError::FieldNotFound`] when the whole chain,
	/// including `root`, yields nothing.
	pub fn resolve(
		&mut self,
		locale: &str,
		field_path: &str,
		min_draft: Option<DraftLevel>,
	) -> Result<String> {
		let segments = path::parse(field_path)?;
		self.resolve_value(locale, segments, min_draft, |node| node.text.clone())
	}

	/// Like [`Resolver::resolve`], but returns the named attribute of the
	/// found node instead of its text. A found node without the attribute
	/// yields an empty string.
	pub fn resolve_attr(
		&mut self,
		locale: &str,
		field_path: &str,
		attr_name: &str,
		min_draft: Option<DraftLevel>,
	) -> Result<String> {
		let segments = path::parse(field_path)?;
		self.resolve_value(locale, segments, min_draft, |node| {
			node.attr(attr_name).unwrap_or("").to_string()
		})
	}

	/// Resolves `field_path` against exactly one document, with no chain
	/// fallback. Used for supplemental documents.
	pub fn resolve_in_file(
		&mut self,
		file: &Path,
		field_path: &str,
		min_draft: Option<DraftLevel>,
	) -> Result<String> {
		let segments = path::parse(field_path)?;
		let doc = self.store.load(file)?;
		let doc = self.follow_whole_file_alias(doc)?;
		match query::resolve_path(&doc, &segments, min_draft)? {
			PathOutcome::Found(node) => Ok(node.text.clone()),
			PathOutcome::NotFound | PathOutcome::LocaleAlias(_) => {
				Err(ResolveError::FieldNotFound {
					locale: file.display().to_string(),
					path: field_path.to_string(),
				})
			}
		}
	}

	/// Single-document variant of [`Resolver::resolve_attr`].
	pub fn resolve_attr_in_file(
		&mut self,
		file: &Path,
		field_path: &str,
		attr_name: &str,
		min_draft: Option<DraftLevel>,
	) -> Result<String> {
		let segments = path::parse(field_path)?;
		let doc = self.store.load(file)?;
		let doc = self.follow_whole_file_alias(doc)?;
		match query::resolve_path(&doc, &segments, min_draft)? {
			PathOutcome::Found(node) => Ok(node.attr(attr_name).unwrap_or("").to_string()),
			PathOutcome::NotFound | PathOutcome::LocaleAlias(_) => {
				Err(ResolveError::FieldNotFound {
					locale: file.display().to_string(),
					path: field_path.to_string(),
				})
			}
		}
	}

	/// Enumerates the children of the node at `field_path` in one document
	/// as (tag, attributes) pairs. An unmatched path yields an empty list.
	pub fn tags_in_file(
		&mut self,
		file: &Path,
		field_path: &str,
	) -> Result<Vec<(String, Vec<(String, String)>)>> {
		let segments = path::parse(field_path)?;
		let doc = self.store.load(file)?;
		let doc = self.follow_whole_file_alias(doc)?;
		match query::resolve_path(&doc, &segments, None)? {
			PathOutcome::Found(node) => Ok(node
				.children
				.iter()
				.map(|child| (child.tag.clone(), child.attrs.clone()))
				.collect()),
			PathOutcome::NotFound | PathOutcome::LocaleAlias(_) => Ok(Vec::new()),
		}
	}

	/// Follows `<alias source="xx"/>` whole-file redirects to the sibling
	/// document, transitively. A repeated file ends the walk on whatever
	/// document was reached last.
	fn follow_whole_file_alias(&mut self, doc: Arc<Document>) -> Result<Arc<Document>> {
		let mut doc = doc;
		let mut visited: FxHashSet<PathBuf> = FxHashSet::default();
		visited.insert(doc.path().to_owned());

		while let Some(target) = alias::file_alias(&doc) {
			let next = alias::follow_file_alias(doc.path(), target)?;
			if !visited.insert(next.clone()) {
				break;
			}
			trace!(
				from = %doc.path().display(),
				to = %next.display(),
				"whole-file alias"
			);
			doc = self.store.load(&next)?;
		}
		Ok(doc)
	}

	fn resolve_value(
		&mut self,
		locale: &str,
		segments: Vec<PathSegment>,
		min_draft: Option<DraftLevel>,
		pick: impl Fn(&Node) -> String,
	) -> Result<String> {
		let chain = self.chains.build(locale, &mut self.store)?;
		let mut segments = segments;
		let mut tried: FxHashSet<String> = FxHashSet::default();
		tried.insert(path::format(&segments));

		'search: loop {
			for entry in &chain {
				let file = self.main_dir.join(format!("{entry}.xml"));
				let doc = match self.store.load(&file) {
					Ok(doc) => doc,
					Err(DocumentError::NotFound(_)) => {
						trace!(locale = entry.as_str(), "no document; skipping chain entry");
						continue;
					}
					Err(err) => return Err(err.into()),
				};
				// Legacy whole-file aliases redirect to a sibling document;
				// a dangling target is fatal, not a missing chain entry.
				let doc = self.follow_whole_file_alias(doc)?;

				match query::resolve_path(&doc, &segments, min_draft)? {
					PathOutcome::Found(node) => return Ok(pick(node)),
					PathOutcome::NotFound => continue,
					PathOutcome::LocaleAlias(residual) => {
						let key = path::format(&residual);
						debug!(
							locale = entry.as_str(),
							path = %key,
							"locale alias; restarting chain search"
						);
						// A repeated rewrite means the aliases form a
						// cycle; give up rather than loop.
						if !tried.insert(key) {
							break 'search;
						}
						segments = residual;
						continue 'search;
					}
				}
			}
			break;
		}

		Err(ResolveError::FieldNotFound {
			locale: locale.to_string(),
			path: path::format(&segments),
		})
	}
}
