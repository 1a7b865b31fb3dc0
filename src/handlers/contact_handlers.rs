use actix_session::Session;
use actix_web::error::{InternalError, JsonPayloadError};
use actix_web::{web, HttpRequest, HttpResponse};

use crate::config::SiteConfig;
use crate::csrf;
use crate::errors::{AppError, render};
use crate::form::{Form, FormValidator, SubmitOutcome, is_honeypot};
use crate::models::contact::{ContactSubmission, FieldCheck, SUCCESS_MESSAGE, contact_form};
use crate::session::{set_flash, take_flash};
use crate::templates_structs::ContactTemplate;

fn back_to_form() -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header(("Location", "/contact"))
        .finish()
}

/// Stand-in for delivery: nothing leaves the process yet.
fn log_delivery(form: &Form) {
    log::info!(
        "Contact message from {} <{}> ({} chars)",
        form.value("name").trim(),
        form.value("email").trim(),
        form.value("message").trim().chars().count()
    );
}

pub async fn form(
    config: web::Data<SiteConfig>,
    session: Session,
) -> Result<HttpResponse, AppError> {
    let csrf_token = csrf::get_or_create_token(&session);
    let flash = take_flash(&session);
    render(ContactTemplate::build(&contact_form(), csrf_token, flash, &config))
}

pub async fn submit(
    config: web::Data<SiteConfig>,
    session: Session,
    body: web::Form<ContactSubmission>,
) -> Result<HttpResponse, AppError> {
    csrf::validate_csrf(&session, &body.csrf_token)?;

    let mut contact = body.to_form();
    let mut validator = FormValidator::new(log_delivery);

    match validator.on_submit(&mut contact) {
        // Same response as success minus the toast, so bots learn nothing.
        SubmitOutcome::Rejected => Ok(back_to_form()),
        SubmitOutcome::Invalid => {
            let csrf_token = csrf::get_or_create_token(&session);
            render(ContactTemplate::build(&contact, csrf_token, None, &config))
        }
        SubmitOutcome::Accepted => {
            set_flash(&session, SUCCESS_MESSAGE)?;
            Ok(back_to_form())
        }
    }
}

fn json_error(message: &str) -> HttpResponse {
    HttpResponse::BadRequest().json(serde_json::json!({
        "error": message
    }))
}

/// Keeps malformed bodies on `/contact/validate` in the same `{error}` shape.
pub fn json_body_error(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    log::debug!("Rejected field check body: {err}");
    InternalError::from_response(err, json_error("Invalid request body")).into()
}

/// Blur-time check for a single field. Answers `{valid, message}`.
///
/// The rendered page posts the whole form and ships no script, so nothing in
/// this crate calls this route; it is there for clients that validate per field.
pub async fn check_field(body: web::Json<FieldCheck>) -> HttpResponse {
    let unknown = || json_error("Unknown field");

    if is_honeypot(&body.field) {
        return unknown();
    }

    let mut contact = contact_form();
    let validator = FormValidator::new(|_: &Form| {});
    if !validator.on_input(&mut contact, &body.field, &body.value) {
        return unknown();
    }

    match validator.on_blur(&mut contact, &body.field) {
        Some(valid) => {
            let message = contact
                .field(&body.field)
                .map(|f| f.error_message().to_string())
                .unwrap_or_default();
            HttpResponse::Ok().json(serde_json::json!({
                "valid": valid,
                "message": message
            }))
        }
        None => unknown(),
    }
}
