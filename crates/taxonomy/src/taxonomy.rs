use serde::{Deserialize, Serialize};

use deskline_auth::Capability;
use deskline_core::{DomainError, DomainResult, Slug};

use crate::attachments::TICKET;

/// Capability names gating term management for one taxonomy.
///
/// When a taxonomy carries no custom set, [`TermCapabilities::default`]
/// applies: the generic term-management capability governs all three actions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TermCapabilities {
    pub manage: Capability,
    pub edit: Capability,
    pub delete: Capability,
}

impl Default for TermCapabilities {
    fn default() -> Self {
        Self {
            manage: Capability::MANAGE_CATEGORIES,
            edit: Capability::MANAGE_CATEGORIES,
            delete: Capability::MANAGE_CATEGORIES,
        }
    }
}

impl TermCapabilities {
    /// The custom triad replacing the defaults for the priority taxonomy.
    pub fn ticket_priority() -> Self {
        Self {
            manage: Capability::MANAGE_TICKET_PRIORITY,
            edit: Capability::EDIT_TICKET_PRIORITY,
            delete: Capability::DELETE_TICKET_PRIORITY,
        }
    }
}

/// Configuration of one classification domain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxonomyConfig {
    name: Slug,
    label: String,
    hierarchical: bool,
    attached_to: Vec<Slug>,
    term_capabilities: Option<TermCapabilities>,
    /// Whether the host should expose browse URLs for this taxonomy's terms.
    public_urls: bool,
}

impl TaxonomyConfig {
    pub fn new(
        name: Slug,
        label: impl Into<String>,
        hierarchical: bool,
        attached_to: Vec<Slug>,
    ) -> Self {
        Self {
            name,
            label: label.into(),
            hierarchical,
            attached_to,
            term_capabilities: None,
            public_urls: true,
        }
    }

    pub fn with_term_capabilities(mut self, capabilities: TermCapabilities) -> Self {
        self.term_capabilities = Some(capabilities);
        self
    }

    pub fn without_public_urls(mut self) -> Self {
        self.public_urls = false;
        self
    }

    /// Hierarchical ticket categories.
    pub fn ticket_category() -> Self {
        Self::new(
            Slug::from_static("ticket_category"),
            "Categories",
            true,
            vec![TICKET],
        )
    }

    /// Flat ticket tags.
    pub fn ticket_tag() -> Self {
        Self::new(
            Slug::from_static("ticket_tag"),
            "Tags",
            false,
            vec![TICKET],
        )
    }

    /// Flat, capability-gated ticket priorities. Not independently browsable.
    pub fn ticket_priority() -> Self {
        Self::new(
            Slug::from_static("ticket_priority"),
            "Priorities",
            false,
            vec![TICKET],
        )
        .with_term_capabilities(TermCapabilities::ticket_priority())
        .without_public_urls()
    }

    pub fn name(&self) -> &Slug {
        &self.name
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn hierarchical(&self) -> bool {
        self.hierarchical
    }

    pub fn public_urls(&self) -> bool {
        self.public_urls
    }

    pub fn attaches_to(&self, entity_type: &Slug) -> bool {
        self.attached_to.contains(entity_type)
    }

    /// Effective term capabilities: the custom set when present, otherwise
    /// the defaults.
    pub fn term_capabilities(&self) -> TermCapabilities {
        self.term_capabilities.clone().unwrap_or_default()
    }

    pub fn has_custom_capabilities(&self) -> bool {
        self.term_capabilities.is_some()
    }
}

/// Registry of taxonomies, preserving registration order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaxonomyRegistry {
    configs: Vec<TaxonomyConfig>,
}

impl TaxonomyRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// The three built-in ticket taxonomies: categories, tags, priorities.
    pub fn standard() -> Self {
        let mut registry = Self::new();
        for config in [
            TaxonomyConfig::ticket_category(),
            TaxonomyConfig::ticket_tag(),
            TaxonomyConfig::ticket_priority(),
        ] {
            // Built-in names are distinct; registration cannot fail here.
            let _ = registry.register(config);
        }
        registry
    }

    pub fn register(&mut self, config: TaxonomyConfig) -> DomainResult<()> {
        if self.get(config.name()).is_some() {
            return Err(DomainError::invariant(format!(
                "taxonomy '{}' is already registered",
                config.name()
            )));
        }
        self.configs.push(config);
        Ok(())
    }

    pub fn get(&self, name: &Slug) -> Option<&TaxonomyConfig> {
        self.configs.iter().find(|c| c.name() == name)
    }

    /// Registered taxonomies in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &TaxonomyConfig> {
        self.configs.iter()
    }

    /// Taxonomies attached to the given entity type, in registration order.
    pub fn attached_to<'a>(
        &'a self,
        entity_type: &'a Slug,
    ) -> impl Iterator<Item = &'a TaxonomyConfig> {
        self.configs.iter().filter(move |c| c.attaches_to(entity_type))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_registry_has_the_three_ticket_taxonomies() {
        let registry = TaxonomyRegistry::standard();
        let names: Vec<&str> = registry.iter().map(|c| c.name().as_str()).collect();
        assert_eq!(names, ["ticket_category", "ticket_tag", "ticket_priority"]);
    }

    #[test]
    fn category_is_hierarchical_with_default_capabilities() {
        let registry = TaxonomyRegistry::standard();
        let category = registry.get(&Slug::from_static("ticket_category")).unwrap();

        assert!(category.hierarchical());
        assert!(!category.has_custom_capabilities());
        assert!(category.public_urls());
        assert_eq!(
            category.term_capabilities().edit,
            Capability::MANAGE_CATEGORIES
        );
    }

    #[test]
    fn priority_is_flat_gated_and_not_browsable() {
        let registry = TaxonomyRegistry::standard();
        let priority = registry.get(&Slug::from_static("ticket_priority")).unwrap();

        assert!(!priority.hierarchical());
        assert!(!priority.public_urls());
        let caps = priority.term_capabilities();
        assert_eq!(caps.manage, Capability::MANAGE_TICKET_PRIORITY);
        assert_eq!(caps.edit, Capability::EDIT_TICKET_PRIORITY);
        assert_eq!(caps.delete, Capability::DELETE_TICKET_PRIORITY);
    }

    #[test]
    fn all_built_ins_attach_to_ticket_only() {
        let registry = TaxonomyRegistry::standard();
        let reply = Slug::from_static("reply");
        assert_eq!(registry.attached_to(&TICKET).count(), 3);
        assert_eq!(registry.attached_to(&reply).count(), 0);
    }

    #[test]
    fn duplicate_registration_is_rejected() {
        let mut registry = TaxonomyRegistry::standard();
        let err = registry.register(TaxonomyConfig::ticket_tag()).unwrap_err();
        assert!(matches!(err, DomainError::InvariantViolation(_)));
    }
}
