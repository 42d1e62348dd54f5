//! Host storage error model.

use thiserror::Error;

use deskline_core::{DomainError, EntityId};

/// Failure at the host storage boundary.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum HostError {
    #[error("unknown entity type '{0}'")]
    UnknownEntityType(String),

    #[error("unknown taxonomy '{0}'")]
    UnknownTaxonomy(String),

    #[error("entity {0} not found")]
    EntityNotFound(EntityId),

    #[error("duplicate term slug '{0}' in taxonomy '{1}'")]
    DuplicateTerm(String, String),

    /// A domain rule rejected the write (hierarchy violation, bad value).
    #[error(transparent)]
    Domain(#[from] DomainError),
}
