//! Form submission: validate, authorize, persist into the entity record.
//!
//! Token or edit-authorization failures abort the whole submission with
//! nothing written. Past that point, field writes proceed independently: a
//! priority dropped for lack of capability does not disturb the subject and
//! type writes that preceded it.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use deskline_auth::{Actor, AuthorizationPolicy, Capability};
use deskline_content::{EntityRecord, TicketType, META_PRIORITY, META_SUBJECT, META_TYPE};
use deskline_core::{sanitize_multiline, sanitize_text, Slug};
use deskline_taxonomy::TaxonomyRegistry;

use crate::token::{FormToken, TokenIssuer};

const PRIORITY_TAXONOMY: Slug = Slug::from_static("ticket_priority");

/// Authorization-level submission failure. Aborts the whole operation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthorizationFailure {
    #[error("form token missing or mismatched")]
    InvalidToken,

    #[error("missing capability '{0}'")]
    InsufficientCapability(Capability),
}

/// Validation-level submission failure. Raised before anything is written.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationFailure {
    #[error("unrecognized value '{value}' for field '{field}'")]
    UnrecognizedEnumValue { field: String, value: String },
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FormError {
    #[error("authorization failed: {0}")]
    Authorization(#[from] AuthorizationFailure),

    #[error("validation failed: {0}")]
    Validation(#[from] ValidationFailure),
}

/// Where a submission came from.
///
/// Automated draft-preservation passes are not user intent; they are skipped
/// without error and without touching the record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmissionOrigin {
    UserSubmission,
    Autosave,
}

/// Raw field values as the host's form surface delivers them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawSubmission {
    pub token: Option<FormToken>,
    pub origin: SubmissionOrigin,
    pub fields: BTreeMap<String, String>,
}

impl RawSubmission {
    pub fn user(token: FormToken) -> Self {
        Self {
            token: Some(token),
            origin: SubmissionOrigin::UserSubmission,
            fields: BTreeMap::new(),
        }
    }

    pub fn autosave(token: FormToken) -> Self {
        Self {
            token: Some(token),
            origin: SubmissionOrigin::Autosave,
            fields: BTreeMap::new(),
        }
    }

    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.insert(key.into(), value.into());
        self
    }

    fn field(&self, key: &str) -> Option<&str> {
        self.fields.get(key).map(String::as_str)
    }
}

/// Outcome of a submission that did not fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Fields were written into the record.
    Updated,
    /// Autosave pass; nothing was written.
    Skipped,
}

/// Persist a ticket form submission into its record.
///
/// Pipeline: token check, autosave skip, edit authorization, type validation,
/// then the field writes — subject and type unconditionally, priority only
/// when the actor's role holds the Priority taxonomy's edit capability
/// (silently dropped otherwise). Consumes the token on success.
pub fn submit_ticket_form(
    record: &mut EntityRecord,
    actor: &Actor,
    policy: &AuthorizationPolicy<'_>,
    taxonomies: &TaxonomyRegistry,
    issuer: &TokenIssuer,
    raw: &RawSubmission,
) -> Result<SubmitOutcome, FormError> {
    let token = check_token(record, issuer, raw)?;
    if raw.origin == SubmissionOrigin::Autosave {
        tracing::debug!(entity = %record.id, "autosave pass, skipping persistence");
        return Ok(SubmitOutcome::Skipped);
    }
    check_can_modify(record, actor, policy)?;

    // Validate the closed type enum before any write so a rejected value
    // leaves the record untouched.
    let ticket_type = match raw.field(META_TYPE).map(sanitize_text) {
        Some(value) if !value.is_empty() => {
            Some(value.parse::<TicketType>().map_err(|_| {
                ValidationFailure::UnrecognizedEnumValue {
                    field: META_TYPE.to_string(),
                    value,
                }
            })?)
        }
        _ => None,
    };

    if let Some(subject) = raw.field(META_SUBJECT) {
        record.set_meta(META_SUBJECT, sanitize_multiline(subject));
    }
    if let Some(ticket_type) = ticket_type {
        record.set_meta(META_TYPE, ticket_type.as_str());
    }
    write_priority(record, actor, policy, taxonomies, raw);

    issuer.consume(record.id, token);
    Ok(SubmitOutcome::Updated)
}

/// Persist a reply form submission into its record (subject only).
pub fn submit_reply_form(
    record: &mut EntityRecord,
    actor: &Actor,
    policy: &AuthorizationPolicy<'_>,
    issuer: &TokenIssuer,
    raw: &RawSubmission,
) -> Result<SubmitOutcome, FormError> {
    let token = check_token(record, issuer, raw)?;
    if raw.origin == SubmissionOrigin::Autosave {
        tracing::debug!(entity = %record.id, "autosave pass, skipping persistence");
        return Ok(SubmitOutcome::Skipped);
    }
    check_can_modify(record, actor, policy)?;

    if let Some(subject) = raw.field(META_SUBJECT) {
        record.set_meta(META_SUBJECT, sanitize_text(subject));
    }

    issuer.consume(record.id, token);
    Ok(SubmitOutcome::Updated)
}

fn check_token(
    record: &EntityRecord,
    issuer: &TokenIssuer,
    raw: &RawSubmission,
) -> Result<FormToken, FormError> {
    match raw.token {
        Some(token) if issuer.verify(record.id, token) => Ok(token),
        _ => {
            tracing::debug!(entity = %record.id, "submission rejected: invalid form token");
            Err(AuthorizationFailure::InvalidToken.into())
        }
    }
}

fn check_can_modify(
    record: &EntityRecord,
    actor: &Actor,
    policy: &AuthorizationPolicy<'_>,
) -> Result<(), FormError> {
    if policy.can_modify(actor, &record.entity_type, record.author) {
        Ok(())
    } else {
        Err(AuthorizationFailure::InsufficientCapability(Capability::EDIT).into())
    }
}

/// Write the priority field, or drop it silently.
///
/// The capability check resolves the Priority taxonomy's term capabilities
/// (its custom edit name when configured). A missing grant is not an error:
/// the field is left unchanged and the rest of the submission stands.
fn write_priority(
    record: &mut EntityRecord,
    actor: &Actor,
    policy: &AuthorizationPolicy<'_>,
    taxonomies: &TaxonomyRegistry,
    raw: &RawSubmission,
) {
    let Some(value) = raw.field(META_PRIORITY) else {
        return;
    };
    let Some(config) = taxonomies.get(&PRIORITY_TAXONOMY) else {
        tracing::warn!("priority taxonomy is not registered; dropping priority field");
        return;
    };
    let required = config.term_capabilities().edit;
    if !policy.can_perform(actor, &required, Some(config.name())) {
        tracing::debug!(
            actor = %actor.id,
            role = %actor.role,
            "actor lacks '{required}'; dropping priority field"
        );
        return;
    }
    match Slug::new(sanitize_text(value)) {
        Ok(slug) => record.set_meta(META_PRIORITY, slug.as_str()),
        Err(_) => {
            tracing::debug!(entity = %record.id, "priority value is not a slug; dropped");
        }
    }
}
