//! Shared helpers for HTTP-level tests.

use actix_web::cookie::{Cookie, Key};
use actix_web::dev::ServiceResponse;
use actix_web::test;
use regex::Regex;

use contact_site::config::SiteConfig;

pub const VALID_NAME: &str = "Ada Lovelace";
pub const VALID_EMAIL: &str = "ada@example.com";
pub const VALID_MESSAGE: &str = "I would like to know more about the engine.";

pub fn test_config() -> SiteConfig {
    SiteConfig::default()
}

pub fn test_key() -> Key {
    Key::generate()
}

/// First cookie set on a response, detached from it.
pub fn session_cookie(resp: &ServiceResponse) -> Option<Cookie<'static>> {
    resp.response().cookies().next().map(|c| c.into_owned())
}

pub async fn body_string(resp: ServiceResponse) -> String {
    let bytes = test::read_body(resp).await;
    String::from_utf8(bytes.to_vec()).expect("utf-8 body")
}

pub fn extract_csrf(html: &str) -> String {
    let re = Regex::new(r#"name="csrf_token" value="([0-9a-f]{64})""#).expect("regex");
    re.captures(html)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string())
        .expect("csrf token in page")
}
