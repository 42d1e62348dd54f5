//! Slug value object: lowercase machine identifiers for entity types,
//! taxonomies and terms.

use core::str::FromStr;
use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::value_object::ValueObject;

/// A validated lowercase identifier (`[a-z0-9]` plus `-`/`_`, starts
/// alphanumeric).
///
/// Slugs name entity types (`ticket`), taxonomies (`ticket_priority`) and
/// individual terms (`high`). They are compared by value and ordered
/// lexicographically so they can key deterministic maps.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Slug(Cow<'static, str>);

impl Slug {
    /// Validate and create a slug from arbitrary input.
    pub fn new(value: impl Into<String>) -> Result<Self, DomainError> {
        let value = value.into();
        if !Self::is_valid(&value) {
            return Err(DomainError::validation(format!("invalid slug '{value}'")));
        }
        Ok(Self(Cow::Owned(value)))
    }

    /// Create a slug from a known-good literal.
    ///
    /// Callers are responsible for the literal being in slug form; used for
    /// the built-in entity type and taxonomy names.
    pub const fn from_static(value: &'static str) -> Self {
        Self(Cow::Borrowed(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn is_valid(value: &str) -> bool {
        let mut chars = value.chars();
        let Some(first) = chars.next() else {
            return false;
        };
        if !first.is_ascii_lowercase() && !first.is_ascii_digit() {
            return false;
        }
        chars.all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' || c == '_')
    }
}

impl ValueObject for Slug {}

impl core::fmt::Display for Slug {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Slug {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_slug_shaped_input() {
        for ok in ["ticket", "ticket_priority", "ticket-category", "gdpr_requests", "2fa"] {
            assert!(Slug::new(ok).is_ok(), "expected '{ok}' to be accepted");
        }
    }

    #[test]
    fn rejects_non_slug_input() {
        for bad in ["", "Ticket", "has space", "-leading", "tab\there", "<b>"] {
            assert!(Slug::new(bad).is_err(), "expected '{bad}' to be rejected");
        }
    }

    #[test]
    fn static_and_parsed_compare_equal() {
        assert_eq!(Slug::from_static("ticket"), "ticket".parse().unwrap());
    }
}
