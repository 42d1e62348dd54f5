//! `deskline-host` — host-platform collaborator boundary.
//!
//! The core never binds to concrete storage: it depends on the `EntityStore`
//! and `TermStore` traits here, and the in-memory implementations stand in
//! for the real content-management platform in tests and development.

pub mod entity_store;
pub mod error;
pub mod session;
pub mod term_store;


pub use entity_store::{EntityStore, InMemoryEntityStore};
pub use error::HostError;
pub use session::Session;
pub use term_store::{InMemoryTermStore, TermStore};
