//! `deskline-forms` — metadata form binding.
//!
//! Bridges entity-specific structured fields (subject, type, priority) and the
//! generic metadata the host stores: descriptors out, validated and
//! capability-checked writes in. Rendering itself is host-owned.

pub mod descriptor;
pub mod submit;
pub mod token;

pub use descriptor::{
    render_reply_form, render_ticket_form, FieldDescriptor, FieldOption, InputKind, RenderedForm,
};
pub use submit::{
    submit_reply_form, submit_ticket_form, AuthorizationFailure, FormError, RawSubmission,
    SubmissionOrigin, SubmitOutcome, ValidationFailure,
};
pub use token::{FormToken, TokenIssuer};
