//! Declarative policy bootstrap.
//!
//! Roles start from broad templates (editor-like agent, author-like customer)
//! and are then narrowed by an explicit override list: revoke blanket publish
//! from customers, re-grant publish scoped to tickets and replies. Expressing
//! the adjustment as a diff against the templates keeps the policy auditable
//! and makes re-applying it a no-op.

use deskline_core::{DomainResult, Slug};

use crate::{Capability, Grant, Role, RoleTable};

const TICKET: Slug = Slug::from_static("ticket");
const REPLY: Slug = Slug::from_static("reply");

/// A role with its template grants (the broad phase of the bootstrap).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleTemplate {
    pub role: Role,
    pub grants: Vec<Grant>,
}

impl RoleTemplate {
    /// Editor-like defaults: edit anything, publish, manage terms, upload.
    pub fn agent() -> Self {
        Self {
            role: Role::agent(),
            grants: vec![
                Grant::unscoped(Capability::EDIT),
                Grant::unscoped(Capability::EDIT_OTHERS),
                Grant::unscoped(Capability::PUBLISH),
                Grant::unscoped(Capability::MANAGE_CATEGORIES),
                Grant::unscoped(Capability::UPLOAD),
            ],
        }
    }

    /// Author-like defaults: write and edit own content, upload.
    pub fn customer() -> Self {
        Self {
            role: Role::customer(),
            grants: vec![
                Grant::unscoped(Capability::WRITE),
                Grant::unscoped(Capability::EDIT_OWN),
                Grant::unscoped(Capability::UPLOAD),
            ],
        }
    }
}

/// One entry of the narrowing phase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CapabilityOverride {
    Grant {
        role: Role,
        capability: Capability,
        scope: Option<Slug>,
    },
    Revoke {
        role: Role,
        capability: Capability,
        scope: Option<Slug>,
    },
}

/// Templates plus overrides; building yields the initialized [`RoleTable`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PolicyBootstrap {
    pub templates: Vec<RoleTemplate>,
    pub overrides: Vec<CapabilityOverride>,
}

impl PolicyBootstrap {
    /// The standard ticketing policy.
    ///
    /// Overrides, in order:
    /// - drop the customer's blanket `publish` (template never grants it, so
    ///   this records intent and guards against template drift);
    /// - grant `publish` scoped to tickets and replies for both roles (the
    ///   agent additionally keeps the unscoped template grant);
    /// - grant the agent the priority-term capability triad;
    /// - drop `manage_ticket_priority` from the customer, keeping priority
    ///   term management agent-only.
    pub fn standard() -> Self {
        let mut overrides = vec![CapabilityOverride::Revoke {
            role: Role::customer(),
            capability: Capability::PUBLISH,
            scope: None,
        }];
        for role in [Role::agent(), Role::customer()] {
            for scope in [TICKET, REPLY] {
                overrides.push(CapabilityOverride::Grant {
                    role: role.clone(),
                    capability: Capability::PUBLISH,
                    scope: Some(scope),
                });
            }
        }
        for capability in [
            Capability::MANAGE_TICKET_PRIORITY,
            Capability::EDIT_TICKET_PRIORITY,
            Capability::DELETE_TICKET_PRIORITY,
        ] {
            overrides.push(CapabilityOverride::Grant {
                role: Role::agent(),
                capability,
                scope: None,
            });
        }
        overrides.push(CapabilityOverride::Revoke {
            role: Role::customer(),
            capability: Capability::MANAGE_TICKET_PRIORITY,
            scope: None,
        });

        Self {
            templates: vec![RoleTemplate::agent(), RoleTemplate::customer()],
            overrides,
        }
    }

    /// Build the role table: define every template role, then apply the
    /// override list.
    pub fn build(&self) -> DomainResult<RoleTable> {
        let mut table = RoleTable::new();
        for template in &self.templates {
            table.define_role(template.role.clone(), template.grants.iter().cloned())?;
        }
        self.apply_overrides(&mut table)?;
        Ok(table)
    }

    /// Apply the override list to an existing table.
    ///
    /// Grants and revokes have set semantics, so running this any number of
    /// times leaves the table identical to running it once.
    pub fn apply_overrides(&self, table: &mut RoleTable) -> DomainResult<()> {
        for entry in &self.overrides {
            match entry {
                CapabilityOverride::Grant {
                    role,
                    capability,
                    scope,
                } => table.grant(role, capability.clone(), scope.clone())?,
                CapabilityOverride::Revoke {
                    role,
                    capability,
                    scope,
                } => table.revoke(role, capability, scope.as_ref())?,
            }
        }
        Ok(())
    }
}
