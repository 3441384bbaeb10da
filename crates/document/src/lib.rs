//! Locale document model.
//!
//! CLDR ships one XML document per locale plus a handful of supplemental
//! documents with cross-cutting data. This crate parses those documents into
//! an owned, immutable tree ([`Document`] / [`Node`]) and provides a
//! process-wide [`DocumentStore`] that caches parsed trees by path, so the
//! thousands of path lookups a resolution run performs against the same file
//! hit an already-parsed tree.
//!
//! Documents are never mutated after parsing; the store hands out
//! `Arc<Document>` clones, so repeated loads of the same path return the
//! identical in-memory tree.

pub mod error;
pub mod node;
pub mod parse;
pub mod store;

pub use error::{DocumentError, Result};
pub use node::{Document, Node};
pub use store::DocumentStore;
