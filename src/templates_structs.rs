use askama::Template;

use crate::config::SiteConfig;
use crate::form::{Field, Form, HONEYPOT_FIELD, is_honeypot};
use crate::validate::FieldKind;

/// A field flattened for the template.
pub struct FieldView {
    pub name: String,
    pub label: String,
    pub value: String,
    pub input_type: &'static str,
    pub is_textarea: bool,
    pub required: bool,
    pub max_len: usize,
    pub has_error: bool,
    pub error_message: String,
}

impl From<&Field> for FieldView {
    fn from(field: &Field) -> Self {
        Self {
            name: field.name.clone(),
            label: field.label.clone(),
            value: field.value.clone(),
            input_type: field.rules.input_type.as_str(),
            is_textarea: field.rules.kind == FieldKind::Textarea,
            required: field.rules.required,
            max_len: field.rules.kind.max_len(),
            has_error: field.has_error(),
            error_message: field.error_message().to_string(),
        }
    }
}

/// Toast timing handed to the page's CSS animation.
pub struct Toast {
    pub message: String,
    pub display_ms: u64,
    pub fade_ms: u64,
}

#[derive(Template)]
#[template(path = "contact.html")]
pub struct ContactTemplate {
    pub fields: Vec<FieldView>,
    pub honeypot: FieldView,
    pub csrf_token: String,
    pub toast: Option<Toast>,
}

impl ContactTemplate {
    pub fn build(form: &Form, csrf_token: String, flash: Option<String>, config: &SiteConfig) -> Self {
        let fields = form
            .validated_fields()
            .map(FieldView::from)
            .collect();
        let honeypot = form
            .fields()
            .iter()
            .find(|f| is_honeypot(&f.name))
            .map(FieldView::from)
            .unwrap_or_else(|| FieldView::from(&Field::input(HONEYPOT_FIELD, "Website")));
        let toast = flash.map(|message| Toast {
            message,
            display_ms: config.toast_ms,
            fade_ms: config.toast_fade_ms,
        });
        Self { fields, honeypot, csrf_token, toast }
    }
}
