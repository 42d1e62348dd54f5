//! `deskline-auth` — role/capability store and authorization policy.
//!
//! This crate is intentionally decoupled from storage and the host's session
//! layer: the role table is built once at initialization and shared read-only
//! afterwards, and every policy check is a pure lookup.

pub mod actor;
pub mod bootstrap;
pub mod capability;
pub mod policy;
pub mod role;
pub mod store;

pub use actor::Actor;
pub use bootstrap::{CapabilityOverride, PolicyBootstrap, RoleTemplate};
pub use capability::{Capability, Grant};
pub use policy::AuthorizationPolicy;
pub use role::Role;
pub use store::RoleTable;
