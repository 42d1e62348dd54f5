//! `deskline-content` — entity kinds and the generic records that hold them.
//!
//! The registry describes the two built-in kinds (ticket, reply); records are
//! the host-storage shape, and `Ticket`/`Reply` are typed projections over
//! their metadata.

pub mod entity_type;
pub mod record;
pub mod reply;
pub mod ticket;

pub use entity_type::{EntityTypeConfig, EntityTypeRegistry, REPLY, TICKET};
pub use record::{EntityRecord, EntityStatus};
pub use reply::Reply;
pub use ticket::{Ticket, TicketType, META_PRIORITY, META_SUBJECT, META_TYPE};
