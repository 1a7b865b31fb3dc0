use actix_web::{App, HttpServer, middleware};

use contact_site::config::SiteConfig;
use contact_site::routes;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // A missing .env is fine; real environment variables still apply.
    let _ = dotenvy::dotenv();
    env_logger::init();

    let config = SiteConfig::from_env();
    let secret_key = config.cookie_key();
    let bind = config.bind.clone();

    log::info!("Serving {} at http://{bind}", config.static_dir);

    HttpServer::new(move || {
        App::new()
            .wrap(routes::session_middleware(secret_key.clone()))
            .wrap(middleware::Logger::default())
            .configure(|cfg| routes::configure(cfg, &config))
    })
    .bind(bind)?
    .run()
    .await
}
