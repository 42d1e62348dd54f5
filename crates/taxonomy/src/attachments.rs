//! Entity-type names the built-in taxonomies attach to.

use deskline_core::Slug;

/// The ticket entity type; all three built-in taxonomies attach here.
pub const TICKET: Slug = Slug::from_static("ticket");
