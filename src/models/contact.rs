use serde::Deserialize;

use crate::form::{Field, Form, HONEYPOT_FIELD};

/// Shown as a toast after an accepted submission.
pub const SUCCESS_MESSAGE: &str = "Thanks for your message! We'll be in touch soon. 😊";

/// Build the empty contact form in display order.
pub fn contact_form() -> Form {
    Form::new()
        .with_field(Field::input("name", "Name").required())
        .with_field(Field::input("email", "Email").email().required())
        .with_field(Field::input("subject", "Subject"))
        .with_field(Field::textarea("message", "Message").required())
        .with_field(Field::input(HONEYPOT_FIELD, "Website"))
}

/// Url-encoded body of `POST /contact`. Missing fields arrive as empty strings.
#[derive(Debug, Default, Deserialize)]
pub struct ContactSubmission {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub website: String,
    #[serde(default)]
    pub csrf_token: String,
}

impl ContactSubmission {
    pub fn to_form(&self) -> Form {
        let mut form = contact_form();
        form.set_value("name", &self.name);
        form.set_value("email", &self.email);
        form.set_value("subject", &self.subject);
        form.set_value("message", &self.message);
        form.set_value(HONEYPOT_FIELD, &self.website);
        form
    }
}

/// Body of `POST /contact/validate`, sent when a field loses focus.
#[derive(Debug, Deserialize)]
pub struct FieldCheck {
    pub field: String,
    #[serde(default)]
    pub value: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contact_form_layout() {
        let form = contact_form();
        let names: Vec<&str> = form.fields().iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["name", "email", "subject", "message", "website"]);
        assert!(form.field("email").unwrap().rules.required);
        assert!(!form.field("subject").unwrap().rules.required);
    }

    #[test]
    fn submission_fills_form() {
        let submission = ContactSubmission {
            name: "Ada".into(),
            email: "ada@example.com".into(),
            message: "Hello".into(),
            website: "http://spam".into(),
            ..Default::default()
        };
        let form = submission.to_form();
        assert_eq!(form.value("name"), "Ada");
        assert_eq!(form.value("subject"), "");
        assert_eq!(form.honeypot_value(), "http://spam");
    }
}
