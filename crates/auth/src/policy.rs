//! Authorization policy: pure capability checks over the role table.
//!
//! Every check is re-evaluated against the table on each call — no caching,
//! no memoized decisions shared across actors.

use deskline_core::{ActorId, Slug};

use crate::{Actor, Capability, RoleTable};

/// Read-only view over the initialized [`RoleTable`].
#[derive(Debug, Clone, Copy)]
pub struct AuthorizationPolicy<'a> {
    table: &'a RoleTable,
}

impl<'a> AuthorizationPolicy<'a> {
    pub fn new(table: &'a RoleTable) -> Self {
        Self { table }
    }

    /// May `actor` perform `capability`, optionally scoped to an entity type
    /// or taxonomy?
    pub fn can_perform(
        &self,
        actor: &Actor,
        capability: &Capability,
        scope: Option<&Slug>,
    ) -> bool {
        self.table.has_capability(&actor.role, capability, scope)
    }

    /// May `actor` create a new entity of the given type?
    pub fn can_create(&self, actor: &Actor, entity_type: &Slug) -> bool {
        self.can_perform(actor, &Capability::WRITE, Some(entity_type))
            || self.can_perform(actor, &Capability::EDIT, Some(entity_type))
    }

    /// May `actor` modify an existing entity authored by `author`?
    ///
    /// `edit_others` covers any entity; otherwise the actor must be the
    /// author and hold an own-content editing grant.
    pub fn can_modify(&self, actor: &Actor, entity_type: &Slug, author: ActorId) -> bool {
        if self.can_perform(actor, &Capability::EDIT_OTHERS, Some(entity_type)) {
            return true;
        }
        if actor.id != author {
            return false;
        }
        self.can_perform(actor, &Capability::EDIT_OWN, Some(entity_type))
            || self.can_perform(actor, &Capability::EDIT, Some(entity_type))
    }

    /// May `actor` publish an entity of the given type?
    pub fn can_publish(&self, actor: &Actor, entity_type: &Slug) -> bool {
        self.can_perform(actor, &Capability::PUBLISH, Some(entity_type))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{PolicyBootstrap, Role};

    const TICKET: Slug = Slug::from_static("ticket");
    const REPLY: Slug = Slug::from_static("reply");
    const POST: Slug = Slug::from_static("post");

    fn customer() -> Actor {
        Actor::new(ActorId::new(), Role::customer())
    }

    fn agent() -> Actor {
        Actor::new(ActorId::new(), Role::agent())
    }

    #[test]
    fn customer_edits_only_own_tickets() {
        let table = PolicyBootstrap::standard().build().unwrap();
        let policy = AuthorizationPolicy::new(&table);
        let customer = customer();
        let other = ActorId::new();

        assert!(policy.can_modify(&customer, &TICKET, customer.id));
        assert!(!policy.can_modify(&customer, &TICKET, other));
    }

    #[test]
    fn agent_edits_anyone() {
        let table = PolicyBootstrap::standard().build().unwrap();
        let policy = AuthorizationPolicy::new(&table);
        let agent = agent();

        assert!(policy.can_modify(&agent, &TICKET, agent.id));
        assert!(policy.can_modify(&agent, &TICKET, ActorId::new()));
        assert!(policy.can_modify(&agent, &REPLY, ActorId::new()));
    }

    #[test]
    fn customer_never_publishes_arbitrary_posts() {
        let table = PolicyBootstrap::standard().build().unwrap();
        let policy = AuthorizationPolicy::new(&table);
        let customer = customer();

        assert!(policy.can_publish(&customer, &TICKET));
        assert!(policy.can_publish(&customer, &REPLY));
        assert!(!policy.can_publish(&customer, &POST));
    }

    #[test]
    fn agent_publishes_anything() {
        let table = PolicyBootstrap::standard().build().unwrap();
        let policy = AuthorizationPolicy::new(&table);
        let agent = agent();

        assert!(policy.can_publish(&agent, &TICKET));
        assert!(policy.can_publish(&agent, &POST));
    }

    #[test]
    fn both_roles_can_create_tickets() {
        let table = PolicyBootstrap::standard().build().unwrap();
        let policy = AuthorizationPolicy::new(&table);

        assert!(policy.can_create(&customer(), &TICKET));
        assert!(policy.can_create(&agent(), &TICKET));
    }
}
