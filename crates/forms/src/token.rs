//! Anti-replay form tokens.
//!
//! A token is issued per entity when a form is rendered and checked on
//! submission. A persisting user submission consumes the token, so replaying
//! the same submission fails; an autosave no-op leaves it valid for the real
//! submission that follows.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use deskline_core::EntityId;

/// Opaque token tying a rendered form to the submission that returns it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormToken(Uuid);

/// Per-session token issuer.
///
/// Issuing for an entity replaces any earlier token for it, so only the most
/// recently rendered form can submit.
#[derive(Debug, Default)]
pub struct TokenIssuer {
    issued: RwLock<HashMap<EntityId, FormToken>>,
}

impl TokenIssuer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue a fresh token for an entity's form.
    pub fn issue(&self, entity: EntityId) -> FormToken {
        let token = FormToken(Uuid::now_v7());
        self.issued
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(entity, token);
        token
    }

    /// Check a submitted token without consuming it.
    pub fn verify(&self, entity: EntityId, token: FormToken) -> bool {
        self.issued
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&entity)
            == Some(&token)
    }

    /// Consume a token after a persisting submission. Returns false when the
    /// token was absent or mismatched (nothing is removed in that case).
    pub fn consume(&self, entity: EntityId, token: FormToken) -> bool {
        let mut issued = self.issued.write().unwrap_or_else(PoisonError::into_inner);
        if issued.get(&entity) == Some(&token) {
            issued.remove(&entity);
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn issued_token_verifies_for_its_entity_only() {
        let issuer = TokenIssuer::new();
        let entity = EntityId::new();
        let other = EntityId::new();

        let token = issuer.issue(entity);
        assert!(issuer.verify(entity, token));
        assert!(!issuer.verify(other, token));
    }

    #[test]
    fn reissue_invalidates_the_previous_token() {
        let issuer = TokenIssuer::new();
        let entity = EntityId::new();

        let first = issuer.issue(entity);
        let second = issuer.issue(entity);
        assert!(!issuer.verify(entity, first));
        assert!(issuer.verify(entity, second));
    }

    #[test]
    fn consume_blocks_replay() {
        let issuer = TokenIssuer::new();
        let entity = EntityId::new();

        let token = issuer.issue(entity);
        assert!(issuer.consume(entity, token));
        assert!(!issuer.verify(entity, token));
        assert!(!issuer.consume(entity, token));
    }

    #[test]
    fn consume_with_wrong_token_keeps_the_issued_one() {
        let issuer = TokenIssuer::new();
        let entity = EntityId::new();
        let other_entity = EntityId::new();

        let token = issuer.issue(entity);
        let wrong = issuer.issue(other_entity);
        assert!(!issuer.consume(entity, wrong));
        assert!(issuer.verify(entity, token));
    }
}
