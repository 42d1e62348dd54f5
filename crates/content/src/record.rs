//! Generic entity records: what the host actually stores.
//!
//! A record carries the structural fields every entity kind shares plus a
//! free-form metadata map and per-taxonomy term assignments. Typed views
//! (`Ticket`, `Reply`) project over this.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use deskline_core::{ActorId, Entity, EntityId, Slug, TermId};

/// Lifecycle status. Transitions between these are host-owned; the core only
/// gates who may invoke `publish`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum EntityStatus {
    #[default]
    Draft,
    Published,
    Trashed,
}

impl core::fmt::Display for EntityStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            EntityStatus::Draft => f.write_str("draft"),
            EntityStatus::Published => f.write_str("published"),
            EntityStatus::Trashed => f.write_str("trashed"),
        }
    }
}

/// A stored content entity of some registered type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityRecord {
    pub id: EntityId,
    pub entity_type: Slug,
    pub author: ActorId,
    pub title: String,
    pub body: String,
    pub status: EntityStatus,
    /// Host-managed association to a parent entity (reply → ticket).
    pub parent: Option<EntityId>,
    /// Arbitrary key/value metadata attached by form bindings.
    pub metadata: BTreeMap<String, JsonValue>,
    /// Term assignments keyed by taxonomy name.
    pub terms: BTreeMap<Slug, Vec<TermId>>,
    pub created_at: DateTime<Utc>,
}

impl EntityRecord {
    pub fn new(
        id: EntityId,
        entity_type: Slug,
        author: ActorId,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            entity_type,
            author,
            title: String::new(),
            body: String::new(),
            status: EntityStatus::Draft,
            parent: None,
            metadata: BTreeMap::new(),
            terms: BTreeMap::new(),
            created_at,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    pub fn with_parent(mut self, parent: EntityId) -> Self {
        self.parent = Some(parent);
        self
    }

    /// Set a metadata value (string values are by far the common case).
    pub fn set_meta(&mut self, key: impl Into<String>, value: impl Into<JsonValue>) {
        self.metadata.insert(key.into(), value.into());
    }

    pub fn meta(&self, key: &str) -> Option<&JsonValue> {
        self.metadata.get(key)
    }

    /// Metadata value as a string slice, when it is one.
    pub fn meta_str(&self, key: &str) -> Option<&str> {
        self.metadata.get(key).and_then(JsonValue::as_str)
    }

    /// Replace the term assignments for one taxonomy.
    pub fn assign_terms(&mut self, taxonomy: Slug, term_ids: Vec<TermId>) {
        if term_ids.is_empty() {
            self.terms.remove(&taxonomy);
        } else {
            self.terms.insert(taxonomy, term_ids);
        }
    }

    pub fn terms_in(&self, taxonomy: &Slug) -> &[TermId] {
        self.terms.get(taxonomy).map(Vec::as_slice).unwrap_or(&[])
    }
}

impl Entity for EntityRecord {
    type Id = EntityId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity_type::TICKET;

    fn record() -> EntityRecord {
        EntityRecord::new(EntityId::new(), TICKET, ActorId::new(), Utc::now())
    }

    #[test]
    fn metadata_round_trip() {
        let mut record = record();
        record.set_meta("subject", "Billing issue");
        assert_eq!(record.meta_str("subject"), Some("Billing issue"));
        assert_eq!(record.meta_str("missing"), None);
    }

    #[test]
    fn term_assignment_replaces_and_clears() {
        let mut record = record();
        let taxonomy = Slug::from_static("ticket_tag");
        let first = TermId::new();

        record.assign_terms(taxonomy.clone(), vec![first]);
        assert_eq!(record.terms_in(&taxonomy), &[first]);

        let second = TermId::new();
        record.assign_terms(taxonomy.clone(), vec![second]);
        assert_eq!(record.terms_in(&taxonomy), &[second]);

        record.assign_terms(taxonomy.clone(), vec![]);
        assert!(record.terms_in(&taxonomy).is_empty());
    }

    #[test]
    fn new_records_start_as_drafts() {
        assert_eq!(record().status, EntityStatus::Draft);
    }
}
