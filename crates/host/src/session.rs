//! Actor/session context.
//!
//! The host authenticates an actor and hands the core this context: who is
//! acting, and the per-session token issuer the form binding verifies
//! against.

use deskline_auth::Actor;
use deskline_forms::TokenIssuer;

/// One authenticated session.
#[derive(Debug)]
pub struct Session {
    pub actor: Actor,
    pub tokens: TokenIssuer,
}

impl Session {
    pub fn new(actor: Actor) -> Self {
        Self {
            actor,
            tokens: TokenIssuer::new(),
        }
    }
}
