//! `deskline-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no host/storage concerns):
//! errors, typed identifiers, slugs and field sanitization shared by the
//! ticketing crates.

pub mod entity;
pub mod error;
pub mod id;
pub mod sanitize;
pub mod slug;
pub mod value_object;

pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use id::{ActorId, EntityId, TermId};
pub use sanitize::{sanitize_multiline, sanitize_text};
pub use slug::Slug;
pub use value_object::ValueObject;
