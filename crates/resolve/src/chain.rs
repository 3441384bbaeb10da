//! Lookup-chain construction.
//!
//! The chain for a locale is the ordered list of locale names to consult
//! when a field is missing: subtag truncation (`az_Arab_IR` → `az_Arab` →
//! `az`) terminated by `root`. The supplemental data's `parentLocales`
//! table overrides truncation for locales whose linguistic parent is not
//! their prefix — certain script variants parent straight to `root`
//! instead of their bare language, and some regional Englishes parent to
//! `en_001` rather than `en`.

use std::path::PathBuf;

use cldr_document::{DocumentError, DocumentStore};
use rustc_hash::{FxHashMap, FxHashSet};
use tracing::debug;

use crate::error::Result;
use crate::path;
use crate::query::{self, PathOutcome};

/// Builds and memoizes lookup chains.
#[derive(Debug)]
pub struct LookupChainBuilder {
	supplemental_path: PathBuf,
	/// child locale -> explicit parent, from `parentLocales`. Loaded
	/// lazily on the first chain request.
	overrides: Option<FxHashMap<String, String>>,
	chains: FxHashMap<String, Vec<String>>,
}

impl LookupChainBuilder {
	/// `supplemental_path` points at the supplemental data document
	/// carrying the `parentLocales` table.
	pub fn new(supplemental_path: impl Into<PathBuf>) -> Self {
		Self {
			supplemental_path: supplemental_path.into(),
			overrides: None,
			chains: FxHashMap::default(),
		}
	}

	/// Returns the lookup chain for `locale`: most specific first, `root`
	/// last, no duplicates. Memoized per locale name.
	pub fn build(&mut self, locale: &str, store: &mut DocumentStore) -> Result<Vec<String>> {
		self.ensure_overrides(store)?;
		let mut splicing = FxHashSet::default();
		splicing.insert(locale.to_string());
		self.build_inner(locale, store, &mut splicing)
	}

	fn build_inner(
		&mut self,
		locale: &str,
		store: &mut DocumentStore,
		splicing: &mut FxHashSet<String>,
	) -> Result<Vec<String>> {
		if let Some(chain) = self.chains.get(locale) {
			return Ok(chain.clone());
		}

		let chain = self.compute(locale, store, splicing)?;
		debug!(locale, ?chain, "built lookup chain");
		self.chains.insert(locale.to_string(), chain.clone());
		Ok(chain)
	}

	fn compute(
		&mut self,
		locale: &str,
		store: &mut DocumentStore,
		splicing: &mut FxHashSet<String>,
	) -> Result<Vec<String>> {
		if locale == "root" {
			return Ok(vec!["root".to_string()]);
		}

		let candidates = truncated(locale);
		for (i, candidate) in candidates.iter().enumerate() {
			let parent = self
				.overrides
				.as_ref()
				.and_then(|map| map.get(candidate))
				.cloned();
			let Some(parent) = parent else {
				continue;
			};

			// Splice the override parent's own chain in place of further
			// truncation; a `root` parent just ends the chain here.
			let mut chain: Vec<String> = candidates[..=i].to_vec();
			if parent == "root" {
				push_unique(&mut chain, "root".to_string());
			} else if splicing.insert(parent.clone()) {
				for entry in self.build_inner(&parent, store, splicing)? {
					push_unique(&mut chain, entry);
				}
			} else {
				// The parent table loops back on itself; stop splicing and
				// finish this chain with plain truncation.
				debug!(locale, parent = parent.as_str(), "cyclic parent override");
				for entry in truncated(&parent) {
					push_unique(&mut chain, entry);
				}
				push_unique(&mut chain, "root".to_string());
			}
			return Ok(chain);
		}

		let mut chain = candidates;
		chain.push("root".to_string());
		Ok(chain)
	}

	fn ensure_overrides(&mut self, store: &mut DocumentStore) -> Result<()> {
		if self.overrides.is_some() {
			return Ok(());
		}

		let doc = match store.load(&self.supplemental_path) {
			Ok(doc) => doc,
			// No supplemental data means no overrides; plain truncation
			// still works.
			Err(DocumentError::NotFound(_)) => {
				debug!(
					path = %self.supplemental_path.display(),
					"no supplemental data; using plain truncation"
				);
				self.overrides = Some(FxHashMap::default());
				return Ok(());
			}
			Err(err) => return Err(err.into()),
		};

		let mut map = FxHashMap::default();
		let segments = path::parse("parentLocales")?;
		if let PathOutcome::Found(node) = query::resolve_path(&doc, &segments, None)? {
			for entry in node.children.iter().filter(|c| c.tag == "parentLocale") {
				let Some(parent) = entry.attr("parent") else {
					continue;
				};
				for child in entry.attr("locales").unwrap_or("").split_whitespace() {
					map.insert(child.to_string(), parent.to_string());
				}
			}
		}
		debug!(overrides = map.len(), "loaded parent-locale overrides");
		self.overrides = Some(map);
		Ok(())
	}
}

/// Right-truncated prefixes of a locale name, most specific first:
/// `az_Arab_IR` → `[az_Arab_IR, az_Arab, az]`.
pub fn truncated(locale: &str) -> Vec<String> {
	let mut out = vec![locale.to_string()];
	let mut cur = locale;
	while let Some(idx) = cur.rfind('_') {
		cur = &cur[..idx];
		out.push(cur.to_string());
	}
	out
}

fn push_unique(chain: &mut Vec<String>, entry: String) {
	if !chain.contains(&entry) {
		chain.push(entry);
	}
}
