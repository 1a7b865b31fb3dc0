use actix_session::Session;
use rand::Rng;

use crate::errors::AppError;

const SESSION_KEY: &str = "csrf_token";

/// Token for the contact form's hidden input. Created on first visit and kept
/// for the life of the session.
pub fn get_or_create_token(session: &Session) -> String {
    if let Ok(Some(token)) = session.get::<String>(SESSION_KEY) {
        return token;
    }
    let token = new_token();
    let _ = session.insert(SESSION_KEY, &token);
    token
}

/// A session without a token never passes, whatever was submitted.
pub fn validate_csrf(session: &Session, submitted: &str) -> Result<(), AppError> {
    let expected = match session.get::<String>(SESSION_KEY) {
        Ok(Some(token)) if !token.is_empty() => token,
        _ => return Err(AppError::Csrf),
    };
    if tokens_match(&expected, submitted) {
        Ok(())
    } else {
        Err(AppError::Csrf)
    }
}

fn new_token() -> String {
    let bytes: [u8; 32] = rand::rng().random();
    hex::encode(bytes)
}

// Touches every byte regardless of where the first mismatch is.
fn tokens_match(expected: &str, submitted: &str) -> bool {
    expected.len() == submitted.len()
        && expected
            .bytes()
            .zip(submitted.bytes())
            .fold(0u8, |diff, (a, b)| diff | (a ^ b))
            == 0
}
