//! `deskline-taxonomy` — classification domains attached to ticket entities.
//!
//! Three built-ins: hierarchical categories, flat tags, and flat
//! capability-gated priorities. The registry is configuration only; term
//! storage stays behind the host's `TermStore`.

pub mod attachments;
pub mod taxonomy;
pub mod term;

pub use taxonomy::{TaxonomyConfig, TaxonomyRegistry, TermCapabilities};
pub use term::{parent_chain, validate_parent, Term};
