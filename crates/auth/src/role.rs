use std::borrow::Cow;

use serde::{Deserialize, Serialize};

/// Role identifier used for RBAC.
///
/// Capability sets are always role-scoped, never per-actor. The ticketing
/// bootstrap defines exactly two roles — [`Role::agent`] and
/// [`Role::customer`] — but the table itself is open to host-defined roles.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Role(Cow<'static, str>);

impl Role {
    /// Support agent: editor-like rights over tickets and replies.
    pub fn agent() -> Self {
        Self(Cow::Borrowed("agent"))
    }

    /// Customer: author-like rights over their own tickets and replies.
    pub fn customer() -> Self {
        Self(Cow::Borrowed("customer"))
    }

    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for Role {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}
