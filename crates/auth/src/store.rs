//! Role/capability store.
//!
//! A [`RoleTable`] maps each role to its set of grants. Tables are mutated
//! only while policy is being assembled at initialization; afterwards callers
//! hold a shared reference and every check is a cheap set lookup.

use std::collections::{HashMap, HashSet};

use deskline_core::{DomainError, DomainResult, Slug};

use crate::{Capability, Grant, Role};

/// Role → capability-set table. Default-deny: anything not granted is refused.
///
/// There is no role hierarchy; a role holds exactly the grants recorded for
/// it. Roles are never deleted, only their grants change.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoleTable {
    roles: HashMap<Role, HashSet<Grant>>,
}

impl RoleTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Define a role with an initial set of grants.
    ///
    /// Redefining an existing role is an invariant violation: policy deltas
    /// go through [`grant`](Self::grant)/[`revoke`](Self::revoke) instead.
    pub fn define_role(
        &mut self,
        role: Role,
        grants: impl IntoIterator<Item = Grant>,
    ) -> DomainResult<()> {
        if self.roles.contains_key(&role) {
            return Err(DomainError::invariant(format!(
                "role '{role}' is already defined"
            )));
        }
        self.roles.insert(role, grants.into_iter().collect());
        Ok(())
    }

    /// Add a grant to a role. Granting an already-held grant is a no-op.
    pub fn grant(
        &mut self,
        role: &Role,
        capability: Capability,
        scope: Option<Slug>,
    ) -> DomainResult<()> {
        let grants = self
            .roles
            .get_mut(role)
            .ok_or_else(|| DomainError::invariant(format!("unknown role '{role}'")))?;
        grants.insert(Grant { capability, scope });
        Ok(())
    }

    /// Remove a grant from a role. Revoking an absent grant is a no-op.
    pub fn revoke(
        &mut self,
        role: &Role,
        capability: &Capability,
        scope: Option<&Slug>,
    ) -> DomainResult<()> {
        let grants = self
            .roles
            .get_mut(role)
            .ok_or_else(|| DomainError::invariant(format!("unknown role '{role}'")))?;
        grants.retain(|g| !(&g.capability == capability && g.scope.as_ref() == scope));
        Ok(())
    }

    /// Check whether a role holds a capability for the given scope.
    ///
    /// Lookup order: exact (capability, scope) match first, then the unscoped
    /// grant as a fallback. An unknown role holds nothing.
    pub fn has_capability(
        &self,
        role: &Role,
        capability: &Capability,
        scope: Option<&Slug>,
    ) -> bool {
        let Some(grants) = self.roles.get(role) else {
            return false;
        };
        if let Some(scope) = scope {
            if grants
                .iter()
                .any(|g| &g.capability == capability && g.scope.as_ref() == Some(scope))
            {
                return true;
            }
        }
        grants
            .iter()
            .any(|g| &g.capability == capability && g.scope.is_none())
    }

    pub fn is_defined(&self, role: &Role) -> bool {
        self.roles.contains_key(role)
    }

    /// Grants held by a role, sorted for stable display/audit output.
    pub fn grants_of(&self, role: &Role) -> Vec<Grant> {
        let mut grants: Vec<Grant> = self
            .roles
            .get(role)
            .map(|g| g.iter().cloned().collect())
            .unwrap_or_default();
        grants.sort_by_key(|g| g.to_string());
        grants
    }
}
