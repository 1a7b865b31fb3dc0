use super::{Field, Form, is_honeypot};
use crate::validate;

/// Side effect run once for a submission that passed validation.
///
/// It sees the populated form; the validator resets the form afterwards.
pub trait SuccessAction {
    fn on_success(&mut self, form: &Form);
}

impl<F: FnMut(&Form)> SuccessAction for F {
    fn on_success(&mut self, form: &Form) {
        self(form)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Honeypot was filled. The form was reset and nothing was validated.
    Rejected,
    /// At least one field failed. Values and errors are left in place.
    Invalid,
    /// Success action fired, form reset and errors cleared.
    Accepted,
}

/// Drives field and form validation over a `Form` and gates the success action.
pub struct FormValidator<S> {
    success: S,
}

impl<S: SuccessAction> FormValidator<S> {
    pub fn new(success: S) -> Self {
        Self { success }
    }

    /// Returns whether the field is valid and syncs its error indicator with that.
    pub fn validate_field(&self, field: &mut Field) -> bool {
        match validate::check_value(&field.rules, &field.value) {
            Some(err) => {
                field.show_error(err.message());
                false
            }
            None => {
                field.clear_error();
                true
            }
        }
    }

    /// Validates every non-honeypot field, without stopping at the first failure.
    pub fn validate_form(&self, form: &mut Form) -> bool {
        let mut valid = true;
        for field in form.validated_fields_mut() {
            if !self.validate_field(field) {
                valid = false;
            }
        }
        valid
    }

    pub fn on_submit(&mut self, form: &mut Form) -> SubmitOutcome {
        if !form.honeypot_value().is_empty() {
            log::warn!("Honeypot field filled; dropping submission");
            form.reset();
            return SubmitOutcome::Rejected;
        }

        if !self.validate_form(form) {
            return SubmitOutcome::Invalid;
        }

        self.success.on_success(form);
        form.reset();
        form.clear_errors();
        SubmitOutcome::Accepted
    }

    /// Validates a single field when it loses focus.
    /// `None` for an unknown name or the honeypot.
    pub fn on_blur(&self, form: &mut Form, name: &str) -> Option<bool> {
        if is_honeypot(name) {
            return None;
        }
        let field = form.field_mut(name)?;
        Some(self.validate_field(field))
    }

    /// Stores a fresh value and hides that field's error without re-validating.
    /// Returns false for an unknown name.
    pub fn on_input(&self, form: &mut Form, name: &str, value: &str) -> bool {
        match form.field_mut(name) {
            Some(field) => {
                field.value = value.to_string();
                field.clear_error();
                true
            }
            None => false,
        }
    }
}
