//! Taxonomy term storage boundary.

use std::sync::{PoisonError, RwLock};

use deskline_core::{Slug, TermId};
use deskline_taxonomy::{validate_parent, TaxonomyRegistry, Term};

use crate::error::HostError;

/// Create/read access to taxonomy terms.
pub trait TermStore {
    fn insert(&self, term: Term) -> Result<(), HostError>;
    /// Terms of one taxonomy, in insertion order. Pure read, no side effects.
    fn terms(&self, taxonomy: &Slug) -> Result<Vec<Term>, HostError>;
    fn find(&self, taxonomy: &Slug, slug: &Slug) -> Result<Option<Term>, HostError>;
    fn get(&self, id: TermId) -> Result<Option<Term>, HostError>;
}

/// In-memory term store enforcing the registry's hierarchy rules.
#[derive(Debug)]
pub struct InMemoryTermStore {
    taxonomies: TaxonomyRegistry,
    terms: RwLock<Vec<Term>>,
}

impl InMemoryTermStore {
    pub fn new(taxonomies: TaxonomyRegistry) -> Self {
        Self {
            taxonomies,
            terms: RwLock::new(Vec::new()),
        }
    }

    pub fn taxonomies(&self) -> &TaxonomyRegistry {
        &self.taxonomies
    }
}

impl TermStore for InMemoryTermStore {
    fn insert(&self, term: Term) -> Result<(), HostError> {
        let config = self
            .taxonomies
            .get(&term.taxonomy)
            .ok_or_else(|| HostError::UnknownTaxonomy(term.taxonomy.to_string()))?;

        let mut terms = self.terms.write().unwrap_or_else(PoisonError::into_inner);
        if terms
            .iter()
            .any(|t| t.taxonomy == term.taxonomy && t.slug == term.slug)
        {
            return Err(HostError::DuplicateTerm(
                term.slug.to_string(),
                term.taxonomy.to_string(),
            ));
        }
        validate_parent(config, &terms, &term)?;
        terms.push(term);
        Ok(())
    }

    fn terms(&self, taxonomy: &Slug) -> Result<Vec<Term>, HostError> {
        if self.taxonomies.get(taxonomy).is_none() {
            return Err(HostError::UnknownTaxonomy(taxonomy.to_string()));
        }
        Ok(self
            .terms
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .filter(|t| &t.taxonomy == taxonomy)
            .cloned()
            .collect())
    }

    fn find(&self, taxonomy: &Slug, slug: &Slug) -> Result<Option<Term>, HostError> {
        Ok(self
            .terms(taxonomy)?
            .into_iter()
            .find(|t| &t.slug == slug))
    }

    fn get(&self, id: TermId) -> Result<Option<Term>, HostError> {
        Ok(self
            .terms
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .find(|t| t.id == id)
            .cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    const PRIORITY: Slug = Slug::from_static("ticket_priority");
    const CATEGORY: Slug = Slug::from_static("ticket_category");

    fn store() -> InMemoryTermStore {
        InMemoryTermStore::new(TaxonomyRegistry::standard())
    }

    fn term(taxonomy: Slug, slug: &'static str) -> Term {
        Term::new(
            TermId::new(),
            taxonomy,
            Slug::from_static(slug),
            slug,
            Utc::now(),
        )
    }

    #[test]
    fn listing_preserves_insertion_order() {
        let store = store();
        for slug in ["high", "medium", "low"] {
            store.insert(term(PRIORITY, slug)).unwrap();
        }

        let slugs: Vec<String> = store
            .terms(&PRIORITY)
            .unwrap()
            .iter()
            .map(|t| t.slug.to_string())
            .collect();
        assert_eq!(slugs, ["high", "medium", "low"]);
    }

    #[test]
    fn duplicate_slug_within_taxonomy_is_rejected() {
        let store = store();
        store.insert(term(PRIORITY, "high")).unwrap();
        assert!(matches!(
            store.insert(term(PRIORITY, "high")),
            Err(HostError::DuplicateTerm(_, _))
        ));
        // Same slug in a different taxonomy is fine.
        store.insert(term(CATEGORY, "high")).unwrap();
    }

    #[test]
    fn unregistered_taxonomy_is_rejected() {
        let store = store();
        let rogue = term(Slug::from_static("ticket_severity"), "blocker");
        assert!(matches!(
            store.insert(rogue),
            Err(HostError::UnknownTaxonomy(_))
        ));
    }

    #[test]
    fn hierarchy_rules_are_enforced_on_insert() {
        let store = store();
        let billing = term(CATEGORY, "billing");
        let billing_id = billing.id;
        store.insert(billing).unwrap();
        store
            .insert(term(CATEGORY, "invoices").with_parent(billing_id))
            .unwrap();

        // Flat taxonomy refuses parents.
        let high = term(PRIORITY, "high");
        let high_id = high.id;
        store.insert(high).unwrap();
        let child = term(PRIORITY, "higher").with_parent(high_id);
        assert!(store.insert(child).is_err());
    }

    #[test]
    fn find_by_slug() {
        let store = store();
        let high = term(PRIORITY, "high");
        store.insert(high.clone()).unwrap();

        assert_eq!(
            store.find(&PRIORITY, &Slug::from_static("high")).unwrap(),
            Some(high.clone())
        );
        assert_eq!(
            store.find(&PRIORITY, &Slug::from_static("low")).unwrap(),
            None
        );
        assert_eq!(store.get(high.id).unwrap(), Some(high));
    }
}
