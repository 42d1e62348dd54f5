//! Typed reply view over a generic entity record.

use serde::{Deserialize, Serialize};

use deskline_core::{DomainError, DomainResult, EntityId};

use crate::entity_type::REPLY;
use crate::record::EntityRecord;
use crate::ticket::META_SUBJECT;

/// Structured view of a reply's metadata.
///
/// The parent association is host-managed; it is surfaced here read-only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reply {
    pub id: EntityId,
    pub subject: String,
    pub parent: Option<EntityId>,
}

impl Reply {
    pub fn from_record(record: &EntityRecord) -> DomainResult<Self> {
        if record.entity_type != REPLY {
            return Err(DomainError::invariant(format!(
                "expected a reply record, got '{}'",
                record.entity_type
            )));
        }
        Ok(Self {
            id: record.id,
            subject: record.meta_str(META_SUBJECT).unwrap_or_default().to_string(),
            parent: record.parent,
        })
    }
}
