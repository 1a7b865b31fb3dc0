//! In-memory form model and the validator that drives it.
//!
//! A `Form` stands in for the live page: handlers fill it from a request,
//! `FormValidator` mutates its error state, and templates render it back.

mod field;
mod validator;

pub use field::Field;
pub use validator::{FormValidator, SubmitOutcome, SuccessAction};

/// Name of the hidden bot-trap field. Never validated, never shown an error.
pub const HONEYPOT_FIELD: &str = "website";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Form {
    fields: Vec<Field>,
}

impl Form {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_field(mut self, field: Field) -> Self {
        self.fields.push(field);
        self
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    /// Fields that take part in validation, in form order.
    pub fn validated_fields(&self) -> impl Iterator<Item = &Field> {
        self.fields.iter().filter(|f| !is_honeypot(&f.name))
    }

    pub fn validated_fields_mut(&mut self) -> impl Iterator<Item = &mut Field> {
        self.fields.iter_mut().filter(|f| !is_honeypot(&f.name))
    }

    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name == name)
    }

    pub fn field_mut(&mut self, name: &str) -> Option<&mut Field> {
        self.fields.iter_mut().find(|f| f.name == name)
    }

    pub fn value(&self, name: &str) -> &str {
        self.field(name).map(|f| f.value.as_str()).unwrap_or("")
    }

    /// Returns false when no field has that name.
    pub fn set_value(&mut self, name: &str, value: &str) -> bool {
        match self.field_mut(name) {
            Some(field) => {
                field.value = value.to_string();
                true
            }
            None => false,
        }
    }

    /// Value of the honeypot, empty when the form has none.
    pub fn honeypot_value(&self) -> &str {
        self.value(HONEYPOT_FIELD)
    }

    /// Empties every value. Error indicators are left alone.
    pub fn reset(&mut self) {
        for field in &mut self.fields {
            field.value.clear();
        }
    }

    pub fn clear_errors(&mut self) {
        for field in &mut self.fields {
            field.clear_error();
        }
    }

    pub fn has_errors(&self) -> bool {
        self.fields.iter().any(Field::has_error)
    }
}

pub fn is_honeypot(name: &str) -> bool {
    name == HONEYPOT_FIELD
}
