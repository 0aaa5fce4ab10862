use actix_session::{SessionMiddleware, storage::CookieSessionStore};
use actix_web::{App, HttpServer, cookie::Key, middleware, web};

use kursverwaltung::config::Config;
use kursverwaltung::dashboard::DashboardController;
use kursverwaltung::handlers;
use kursverwaltung::livingapps::LivingAppsClient;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // .env is optional; real environment variables win
    let _ = dotenvy::dotenv();
    env_logger::init();

    let cfg = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            log::error!("Invalid configuration: {e}");
            std::process::exit(1);
        }
    };

    let client = LivingAppsClient::new(cfg.location.clone(), cfg.timeout)
        .map_err(|e| std::io::Error::other(e.to_string()))?;
    let dashboard = web::Data::new(DashboardController::new(client));
    log::info!("Using LivingApps at {}", cfg.location.base_url);

    // Session encryption key, from SESSION_KEY for sessions that survive restarts
    let secret_key = match std::env::var("SESSION_KEY") {
        Ok(val) if val.len() >= 64 => {
            log::info!("Using SESSION_KEY from environment");
            Key::from(val.as_bytes())
        }
        Ok(val) => {
            log::warn!("SESSION_KEY too short ({} bytes, need 64+), generating random key", val.len());
            Key::generate()
        }
        Err(_) => {
            log::warn!("No SESSION_KEY set, generating random key (sessions lost on restart)");
            Key::generate()
        }
    };

    log::info!("Starting server at http://{}", cfg.bind_addr);

    HttpServer::new(move || {
        let session_mw = SessionMiddleware::builder(
            CookieSessionStore::default(),
            secret_key.clone(),
        )
        .cookie_secure(false)
        .cookie_http_only(true)
        .build();

        App::new()
            .wrap(session_mw)
            .wrap(middleware::Logger::default())
            .app_data(dashboard.clone())
            .service(actix_files::Files::new("/static", "./static"))
            .configure(handlers::configure)
            // Default 404 handler (must be registered last)
            .default_service(web::to(|| async {
                actix_web::HttpResponse::NotFound()
                    .content_type("text/html; charset=utf-8")
                    .body(include_str!("../templates/errors/404.html"))
            }))
    })
    .bind(&cfg.bind_addr)?
    .run()
    .await
}
