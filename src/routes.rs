use actix_session::{SessionMiddleware, storage::CookieSessionStore};
use actix_web::{cookie::Key, web};

use crate::config::SiteConfig;
use crate::handlers::{contact_handlers, pages};

/// Large enough that an overlong message still reaches the validator and
/// comes back as a field error instead of a 413.
pub const FORM_BODY_LIMIT: usize = 1024 * 1024;

/// Cookie session carrying the CSRF token and the one-shot flash toast.
pub fn session_middleware(key: Key) -> SessionMiddleware<CookieSessionStore> {
    SessionMiddleware::builder(CookieSessionStore::default(), key)
        .cookie_secure(false)
        .cookie_http_only(true)
        .build()
}

/// Register shared state, static files, pages and the 404 fallback.
pub fn configure(cfg: &mut web::ServiceConfig, config: &SiteConfig) {
    cfg.app_data(web::Data::new(config.clone()))
        .app_data(web::FormConfig::default().limit(FORM_BODY_LIMIT))
        .app_data(web::JsonConfig::default().error_handler(contact_handlers::json_body_error))
        .service(actix_files::Files::new("/static", &config.static_dir))
        .route("/", web::get().to(pages::index))
        .route("/contact", web::get().to(contact_handlers::form))
        .route("/contact", web::post().to(contact_handlers::submit))
        .route("/contact/validate", web::post().to(contact_handlers::check_field))
        .default_service(web::to(pages::not_found));
}
