//! Locale data resolution engine.
//!
//! CLDR locale documents are sparse: most files override only a handful of
//! fields and inherit the rest from ancestor locales. Resolving a field for
//! a locale therefore means walking a lookup chain (`de_DE` → `de` → `root`)
//! and, within each document, following a slash-separated path with
//! attribute predicates, honoring alias redirects and a draft-quality floor
//! along the way.
//!
//! The pieces, leaves first:
//!
//! - [`path`] parses path expressions like
//!   `dates/calendars/calendar[gregorian]/months` into segments.
//! - [`query`] walks a parsed document along a segment list, applying
//!   attribute predicates and the draft filter, and detecting aliases.
//! - [`alias`] interprets alias nodes: same-document path substitution,
//!   cross-locale redirect, or whole-file alias.
//! - [`chain`] builds the ordered ancestor-locale list for an identifier,
//!   applying the supplemental parent-locale overrides that break naive
//!   subtag truncation.
//! - [`resolver`] ties the above together: [`Resolver::resolve`] is the
//!   entry point invoked once per (locale, field) pair.
//! - [`datetime`] converts CLDR date/time pattern tokens into the output
//!   pattern vocabulary.
//!
//! All caches (parsed documents, lookup chains, the parent-locale table)
//! are owned by the [`Resolver`], making a batch run re-entrant and each
//! test isolatable with its own fixture directory.

pub mod alias;
pub mod chain;
pub mod codes;
pub mod datetime;
pub mod draft;
pub mod error;
pub mod locale;
pub mod path;
pub mod query;
pub mod resolver;

pub use chain::LookupChainBuilder;
pub use codes::CodeTable;
pub use datetime::convert_date_pattern;
pub use draft::DraftLevel;
pub use error::{ResolveError, Result};
pub use locale::LocaleIdentifier;
pub use path::PathSegment;
pub use query::PathOutcome;
pub use resolver::Resolver;
