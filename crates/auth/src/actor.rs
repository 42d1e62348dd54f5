use serde::{Deserialize, Serialize};

use deskline_core::ActorId;

use crate::Role;

/// An authenticated actor: identity plus the single role it acts under.
///
/// The host's session layer resolves this; the domain core only ever reads it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Actor {
    pub id: ActorId,
    pub role: Role,
}

impl Actor {
    pub fn new(id: ActorId, role: Role) -> Self {
        Self { id, role }
    }
}
