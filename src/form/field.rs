use crate::validate::{FieldKind, FieldRules, InputType};

/// One input or textarea together with its visible error indicator.
///
/// `has_error` and `error_message` are what a page renders: the `error` class on
/// the element and the sibling message block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub name: String,
    pub label: String,
    pub value: String,
    pub rules: FieldRules,
    has_error: bool,
    error_message: String,
}

impl Field {
    pub fn new(name: &str, label: &str, kind: FieldKind) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            value: String::new(),
            rules: FieldRules { required: false, input_type: InputType::Text, kind },
            has_error: false,
            error_message: String::new(),
        }
    }

    pub fn input(name: &str, label: &str) -> Self {
        Self::new(name, label, FieldKind::Input)
    }

    pub fn textarea(name: &str, label: &str) -> Self {
        Self::new(name, label, FieldKind::Textarea)
    }

    pub fn required(mut self) -> Self {
        self.rules.required = true;
        self
    }

    pub fn email(mut self) -> Self {
        self.rules.input_type = InputType::Email;
        self
    }

    pub fn with_value(mut self, value: &str) -> Self {
        self.value = value.to_string();
        self
    }

    pub fn has_error(&self) -> bool {
        self.has_error
    }

    pub fn error_message(&self) -> &str {
        &self.error_message
    }

    pub fn show_error(&mut self, message: &str) {
        self.has_error = true;
        self.error_message = message.to_string();
    }

    pub fn clear_error(&mut self) {
        self.has_error = false;
        self.error_message.clear();
    }
}
