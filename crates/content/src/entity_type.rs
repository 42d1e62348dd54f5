//! Content-type registry: the entity kinds the host stores for us.

use serde::{Deserialize, Serialize};

use deskline_core::{DomainError, DomainResult, Slug};

/// The ticket entity type name.
pub const TICKET: Slug = Slug::from_static("ticket");
/// The reply entity type name.
pub const REPLY: Slug = Slug::from_static("reply");

/// Shape and visibility of one entity kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityTypeConfig {
    name: Slug,
    label: String,
    supports_title: bool,
    supports_body: bool,
    /// Publicly browsable on the host's front surface.
    public: bool,
    has_archive: bool,
    /// URL base path for public types.
    base_path: Option<String>,
    /// Manageable through the host's admin surface even when not public.
    show_in_admin: bool,
}

impl EntityTypeConfig {
    /// Tickets: title + editor body, public, archived, based at `/ticket`.
    pub fn ticket() -> Self {
        Self {
            name: TICKET,
            label: "Tickets".to_string(),
            supports_title: true,
            supports_body: true,
            public: true,
            has_archive: true,
            base_path: Some("ticket".to_string()),
            show_in_admin: true,
        }
    }

    /// Replies: editor body only, non-public, no archive or base path, still
    /// admin-manageable.
    pub fn reply() -> Self {
        Self {
            name: REPLY,
            label: "Replies".to_string(),
            supports_title: false,
            supports_body: true,
            public: false,
            has_archive: false,
            base_path: None,
            show_in_admin: true,
        }
    }

    pub fn name(&self) -> &Slug {
        &self.name
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn supports_title(&self) -> bool {
        self.supports_title
    }

    pub fn supports_body(&self) -> bool {
        self.supports_body
    }

    pub fn public(&self) -> bool {
        self.public
    }

    pub fn has_archive(&self) -> bool {
        self.has_archive
    }

    pub fn base_path(&self) -> Option<&str> {
        self.base_path.as_deref()
    }

    pub fn show_in_admin(&self) -> bool {
        self.show_in_admin
    }
}

/// Registry of entity types, preserving registration order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntityTypeRegistry {
    configs: Vec<EntityTypeConfig>,
}

impl EntityTypeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// The two built-in kinds: tickets and replies.
    pub fn standard() -> Self {
        let mut registry = Self::new();
        // Built-in names are distinct; registration cannot fail here.
        let _ = registry.register(EntityTypeConfig::ticket());
        let _ = registry.register(EntityTypeConfig::reply());
        registry
    }

    pub fn register(&mut self, config: EntityTypeConfig) -> DomainResult<()> {
        if self.get(config.name()).is_some() {
            return Err(DomainError::invariant(format!(
                "entity type '{}' is already registered",
                config.name()
            )));
        }
        self.configs.push(config);
        Ok(())
    }

    pub fn get(&self, name: &Slug) -> Option<&EntityTypeConfig> {
        self.configs.iter().find(|c| c.name() == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &EntityTypeConfig> {
        self.configs.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ticket_is_public_with_archive_and_base_path() {
        let ticket = EntityTypeConfig::ticket();
        assert!(ticket.supports_title());
        assert!(ticket.supports_body());
        assert!(ticket.public());
        assert!(ticket.has_archive());
        assert_eq!(ticket.base_path(), Some("ticket"));
    }

    #[test]
    fn reply_is_private_but_admin_manageable() {
        let reply = EntityTypeConfig::reply();
        assert!(!reply.supports_title());
        assert!(reply.supports_body());
        assert!(!reply.public());
        assert!(!reply.has_archive());
        assert_eq!(reply.base_path(), None);
        assert!(reply.show_in_admin());
    }

    #[test]
    fn standard_registry_lists_both_kinds_in_order() {
        let registry = EntityTypeRegistry::standard();
        let names: Vec<&str> = registry.iter().map(|c| c.name().as_str()).collect();
        assert_eq!(names, ["ticket", "reply"]);
    }

    #[test]
    fn duplicate_registration_is_rejected() {
        let mut registry = EntityTypeRegistry::standard();
        let err = registry.register(EntityTypeConfig::ticket()).unwrap_err();
        assert!(matches!(err, DomainError::InvariantViolation(_)));
    }
}
