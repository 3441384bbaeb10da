//! Code-table seam.
//!
//! The downstream table emitter maps subtag strings to small integer ids.
//! The resolution engine operates purely on strings and only needs the
//! table to reject locales it cannot represent, so the table itself stays
//! behind a trait implemented by the caller.

use crate::error::{ResolveError, Result};
use crate::locale::LocaleIdentifier;

/// Lookup of locale subtag codes to downstream integer identifiers.
pub trait CodeTable {
	fn language_id(&self, code: &str) -> Option<u16>;
	fn script_id(&self, code: &str) -> Option<u16>;
	fn country_id(&self, code: &str) -> Option<u16>;
}

/// Checks that every non-empty subtag of `id` is known to the table.
///
/// Fails with [`ResolveError::UnknownSubtag`] naming the first offending
/// code.
pub fn validate(id: &LocaleIdentifier, table: &impl CodeTable) -> Result<()> {
	if !id.language.is_empty() && table.language_id(&id.language).is_none() {
		return Err(ResolveError::UnknownSubtag(id.language.clone()));
	}
	if !id.script.is_empty() && table.script_id(&id.script).is_none() {
		return Err(ResolveError::UnknownSubtag(id.script.clone()));
	}
	if !id.country.is_empty() && table.country_id(&id.country).is_none() {
		return Err(ResolveError::UnknownSubtag(id.country.clone()));
	}
	Ok(())
}
