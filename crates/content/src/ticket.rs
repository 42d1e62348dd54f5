//! Typed ticket view over a generic entity record.

use core::str::FromStr;

use serde::{Deserialize, Serialize};

use deskline_core::{DomainError, DomainResult, EntityId, Slug};

use crate::entity_type::TICKET;
use crate::record::EntityRecord;

/// Metadata key for a ticket's free-text subject.
pub const META_SUBJECT: &str = "subject";
/// Metadata key for a ticket's request type.
pub const META_TYPE: &str = "type";
/// Metadata key for the slug of the assigned priority term.
pub const META_PRIORITY: &str = "priority";

/// Closed set of ticket request types.
///
/// Unrecognized values are rejected at the boundary rather than stored as
/// free text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TicketType {
    Commercial,
    Technical,
    Presales,
    GdprRequests,
}

impl TicketType {
    /// All variants, in the order the form presents them.
    pub const ALL: [TicketType; 4] = [
        TicketType::Commercial,
        TicketType::Technical,
        TicketType::Presales,
        TicketType::GdprRequests,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TicketType::Commercial => "commercial",
            TicketType::Technical => "technical",
            TicketType::Presales => "presales",
            TicketType::GdprRequests => "gdpr_requests",
        }
    }

    /// Human-readable label for form rendering.
    pub fn label(&self) -> &'static str {
        match self {
            TicketType::Commercial => "Commercial",
            TicketType::Technical => "Technical",
            TicketType::Presales => "Presales",
            TicketType::GdprRequests => "GDPR Requests",
        }
    }
}

impl core::fmt::Display for TicketType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TicketType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| DomainError::validation(format!("unrecognized ticket type '{s}'")))
    }
}

/// Structured view of a ticket's metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ticket {
    pub id: EntityId,
    pub subject: String,
    pub ticket_type: Option<TicketType>,
    /// Slug of the assigned priority term, when one is set.
    pub priority: Option<Slug>,
}

impl Ticket {
    /// Project the typed view out of a generic record.
    ///
    /// Fails when the record is not a ticket or carries metadata that no
    /// longer parses (e.g. a type value written before the enum existed).
    pub fn from_record(record: &EntityRecord) -> DomainResult<Self> {
        if record.entity_type != TICKET {
            return Err(DomainError::invariant(format!(
                "expected a ticket record, got '{}'",
                record.entity_type
            )));
        }
        let ticket_type = record
            .meta_str(META_TYPE)
            .filter(|v| !v.is_empty())
            .map(TicketType::from_str)
            .transpose()?;
        let priority = record
            .meta_str(META_PRIORITY)
            .filter(|v| !v.is_empty())
            .map(Slug::new)
            .transpose()?;
        Ok(Self {
            id: record.id,
            subject: record.meta_str(META_SUBJECT).unwrap_or_default().to_string(),
            ticket_type,
            priority,
        })
    }
}
