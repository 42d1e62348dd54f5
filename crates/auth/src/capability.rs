use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use deskline_core::{Slug, ValueObject};

/// Capability (action) identifier.
///
/// Capabilities are modeled as opaque action names (e.g. `"publish"`). A grant
/// pairs a capability with an optional scope — the entity type or taxonomy the
/// action applies to — so `publish` can be granted broadly or for tickets only.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Capability(Cow<'static, str>);

impl Capability {
    /// Edit content (includes creating new drafts).
    pub const EDIT: Capability = Capability::from_static("edit");
    /// Edit content authored by other actors.
    pub const EDIT_OTHERS: Capability = Capability::from_static("edit_others");
    /// Edit only content the actor authored.
    pub const EDIT_OWN: Capability = Capability::from_static("edit_own");
    /// Author new content.
    pub const WRITE: Capability = Capability::from_static("write");
    /// Move content from draft to published.
    pub const PUBLISH: Capability = Capability::from_static("publish");
    /// Attach file uploads.
    pub const UPLOAD: Capability = Capability::from_static("upload");
    /// Generic term management for taxonomies without custom capabilities.
    pub const MANAGE_CATEGORIES: Capability = Capability::from_static("manage_categories");

    /// Custom triad gating the ticket priority taxonomy. These replace the
    /// generic term-management capability for that taxonomy only.
    pub const MANAGE_TICKET_PRIORITY: Capability = Capability::from_static("manage_ticket_priority");
    pub const EDIT_TICKET_PRIORITY: Capability = Capability::from_static("edit_ticket_priority");
    pub const DELETE_TICKET_PRIORITY: Capability = Capability::from_static("delete_ticket_priority");

    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self(name.into())
    }

    pub const fn from_static(name: &'static str) -> Self {
        Self(Cow::Borrowed(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl ValueObject for Capability {}

impl core::fmt::Display for Capability {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A capability paired with its optional entity-type/taxonomy scope.
///
/// `scope = None` is an unscoped (blanket) grant. Grants have set semantics in
/// the role table: granting twice is one grant, revoking an absent grant is a
/// no-op.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Grant {
    pub capability: Capability,
    pub scope: Option<Slug>,
}

impl Grant {
    pub fn unscoped(capability: Capability) -> Self {
        Self {
            capability,
            scope: None,
        }
    }

    pub fn scoped(capability: Capability, scope: Slug) -> Self {
        Self {
            capability,
            scope: Some(scope),
        }
    }
}

impl core::fmt::Display for Grant {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match &self.scope {
            Some(scope) => write!(f, "{}:{}", self.capability, scope),
            None => write!(f, "{}", self.capability),
        }
    }
}
