use actix_files::NamedFile;
use actix_web::{web, HttpResponse};
use std::path::Path;

use crate::config::SiteConfig;
use crate::errors::AppError;

pub async fn index(config: web::Data<SiteConfig>) -> actix_web::Result<NamedFile> {
    let path = Path::new(&config.static_dir).join("index.html");
    Ok(NamedFile::open_async(path).await?)
}

/// Fallback for every unregistered route.
pub async fn not_found() -> Result<HttpResponse, AppError> {
    Err(AppError::NotFound)
}
