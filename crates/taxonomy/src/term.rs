//! Taxonomy terms and hierarchy validation.

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use deskline_core::{DomainError, DomainResult, Slug, TermId};

use crate::TaxonomyConfig;

/// One classification value within a taxonomy.
///
/// `parent` is only meaningful for hierarchical taxonomies (categories);
/// flat taxonomies (tags, priorities) keep it `None`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Term {
    pub id: TermId,
    pub taxonomy: Slug,
    pub slug: Slug,
    pub name: String,
    pub parent: Option<TermId>,
    pub created_at: DateTime<Utc>,
}

impl Term {
    pub fn new(
        id: TermId,
        taxonomy: Slug,
        slug: Slug,
        name: impl Into<String>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            taxonomy,
            slug,
            name: name.into(),
            parent: None,
            created_at,
        }
    }

    pub fn with_parent(mut self, parent: TermId) -> Self {
        self.parent = Some(parent);
        self
    }
}

/// Validate a term's parent link against its taxonomy and sibling terms.
///
/// Rules:
/// - only hierarchical taxonomies may parent terms;
/// - the parent must exist within the same taxonomy;
/// - linking must not close a cycle (the parent's chain may not pass through
///   the term itself).
pub fn validate_parent(
    config: &TaxonomyConfig,
    existing: &[Term],
    term: &Term,
) -> DomainResult<()> {
    let Some(parent_id) = term.parent else {
        return Ok(());
    };
    if !config.hierarchical() {
        return Err(DomainError::invariant(format!(
            "taxonomy '{}' is flat; terms cannot have parents",
            config.name()
        )));
    }
    let parent = existing
        .iter()
        .find(|t| t.id == parent_id && t.taxonomy == term.taxonomy)
        .ok_or_else(|| {
            DomainError::invariant(format!(
                "parent term not found in taxonomy '{}'",
                config.name()
            ))
        })?;
    let chain = parent_chain(existing, parent.id)?;
    if parent.id == term.id || chain.contains(&term.id) {
        return Err(DomainError::invariant(format!(
            "term '{}' would create a cycle in taxonomy '{}'",
            term.slug,
            config.name()
        )));
    }
    Ok(())
}

/// Walk a term's parent chain to the root.
///
/// Returns the chain starting at `start` (inclusive). Errors if a parent link
/// dangles or the chain revisits a term.
pub fn parent_chain(terms: &[Term], start: TermId) -> DomainResult<Vec<TermId>> {
    let mut chain = Vec::new();
    let mut seen = HashSet::new();
    let mut current = Some(start);
    while let Some(id) = current {
        if !seen.insert(id) {
            return Err(DomainError::invariant(format!(
                "cycle detected in term parent chain at {id}"
            )));
        }
        let term = terms
            .iter()
            .find(|t| t.id == id)
            .ok_or_else(|| DomainError::invariant(format!("dangling parent link to {id}")))?;
        chain.push(id);
        current = term.parent;
    }
    Ok(chain)
}
