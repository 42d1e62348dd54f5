//! Field descriptors: what the host renders as form HTML.
//!
//! The binding hands the host labels, input kinds, options and current
//! values; the host owns markup and invokes the submit functions on receipt.

use serde::{Deserialize, Serialize};

use deskline_content::{EntityRecord, TicketType, META_PRIORITY, META_SUBJECT, META_TYPE};
use deskline_taxonomy::Term;

use crate::token::{FormToken, TokenIssuer};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputKind {
    Text,
    TextArea,
    Select,
}

/// One choice of a select input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldOption {
    pub value: String,
    pub label: String,
}

/// One renderable form field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDescriptor {
    pub key: String,
    pub label: String,
    pub input: InputKind,
    /// Choices for select inputs; empty otherwise.
    pub options: Vec<FieldOption>,
    /// Current stored value, when present.
    pub value: Option<String>,
}

/// A rendered form: its fields plus the token the submission must return.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedForm {
    pub fields: Vec<FieldDescriptor>,
    pub token: FormToken,
}

/// Describe the ticket detail form: subject, type, priority.
///
/// `priority_terms` are the Priority taxonomy's terms as the caller listed
/// them; ordering is preserved into the select options.
pub fn render_ticket_form(
    record: &EntityRecord,
    priority_terms: &[Term],
    issuer: &TokenIssuer,
) -> RenderedForm {
    let fields = vec![
        FieldDescriptor {
            key: META_SUBJECT.to_string(),
            label: "Subject".to_string(),
            input: InputKind::TextArea,
            options: Vec::new(),
            value: record.meta_str(META_SUBJECT).map(str::to_string),
        },
        FieldDescriptor {
            key: META_TYPE.to_string(),
            label: "Type".to_string(),
            input: InputKind::Select,
            options: TicketType::ALL
                .iter()
                .map(|t| FieldOption {
                    value: t.as_str().to_string(),
                    label: t.label().to_string(),
                })
                .collect(),
            value: record.meta_str(META_TYPE).map(str::to_string),
        },
        FieldDescriptor {
            key: META_PRIORITY.to_string(),
            label: "Priority".to_string(),
            input: InputKind::Select,
            options: priority_terms
                .iter()
                .map(|term| FieldOption {
                    value: term.slug.to_string(),
                    label: term.name.clone(),
                })
                .collect(),
            value: record.meta_str(META_PRIORITY).map(str::to_string),
        },
    ];
    RenderedForm {
        fields,
        token: issuer.issue(record.id),
    }
}

/// Describe the reply detail form: a single subject input.
pub fn render_reply_form(record: &EntityRecord, issuer: &TokenIssuer) -> RenderedForm {
    let fields = vec![FieldDescriptor {
        key: META_SUBJECT.to_string(),
        label: "Subject".to_string(),
        input: InputKind::Text,
        options: Vec::new(),
        value: record.meta_str(META_SUBJECT).map(str::to_string),
    }];
    RenderedForm {
        fields,
        token: issuer.issue(record.id),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use deskline_core::{ActorId, EntityId, Slug, TermId};

    fn ticket_record() -> EntityRecord {
        EntityRecord::new(
            EntityId::new(),
            deskline_content::TICKET,
            ActorId::new(),
            Utc::now(),
        )
    }

    fn priority_term(slug: &'static str, name: &str) -> Term {
        Term::new(
            TermId::new(),
            Slug::from_static("ticket_priority"),
            Slug::from_static(slug),
            name,
            Utc::now(),
        )
    }

    #[test]
    fn ticket_form_has_subject_type_priority() {
        let issuer = TokenIssuer::new();
        let record = ticket_record();
        let terms = [priority_term("high", "High"), priority_term("low", "Low")];

        let form = render_ticket_form(&record, &terms, &issuer);
        let keys: Vec<&str> = form.fields.iter().map(|f| f.key.as_str()).collect();
        assert_eq!(keys, ["subject", "type", "priority"]);

        let type_field = &form.fields[1];
        assert_eq!(type_field.input, InputKind::Select);
        assert_eq!(type_field.options.len(), 4);
        assert_eq!(type_field.options[0].value, "commercial");

        let priority_field = &form.fields[2];
        let values: Vec<&str> = priority_field
            .options
            .iter()
            .map(|o| o.value.as_str())
            .collect();
        assert_eq!(values, ["high", "low"]);
    }

    #[test]
    fn rendered_token_verifies_for_the_record() {
        let issuer = TokenIssuer::new();
        let record = ticket_record();

        let form = render_ticket_form(&record, &[], &issuer);
        assert!(issuer.verify(record.id, form.token));
    }

    #[test]
    fn reply_form_is_a_single_text_input() {
        let issuer = TokenIssuer::new();
        let mut record = EntityRecord::new(
            EntityId::new(),
            deskline_content::REPLY,
            ActorId::new(),
            Utc::now(),
        );
        record.set_meta(META_SUBJECT, "Re: billing");

        let form = render_reply_form(&record, &issuer);
        assert_eq!(form.fields.len(), 1);
        assert_eq!(form.fields[0].input, InputKind::Text);
        assert_eq!(form.fields[0].value.as_deref(), Some("Re: billing"));
    }
}
