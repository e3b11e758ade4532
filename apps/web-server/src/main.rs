//! # SockTalk Web Server
//!
//! The main entry point for the Actix-web HTTP server.

use actix_session::SessionMiddleware;
use actix_session::storage::CookieSessionStore;
use actix_web::cookie::Key;
use actix_web::{App, HttpServer, web};
use tracing_actix_web::TracingLogger;

mod assets;
mod config;
mod handlers;
mod state;
mod templates;

use config::AppConfig;
use state::AppState;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    // Initialize tracing
    init_tracing();
    install_panic_logging();

    // Load configuration
    let config = AppConfig::from_env();

    tracing::info!(
        "Starting SockTalk web server on {}:{}",
        config.host,
        config.port
    );

    // Build application state
    let state = AppState::new(&config).await;

    // Cookie sessions are keyed by the configured secret; session lifecycle
    // and cookie policy are delegated to the middleware entirely.
    let session_key = Key::derive_from(config.session_secret.as_bytes());

    // Start HTTP server
    HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .wrap(SessionMiddleware::new(
                CookieSessionStore::default(),
                session_key.clone(),
            ))
            .app_data(web::Data::new(state.clone()))
            .configure(assets::configure)
            .configure(handlers::configure_routes)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}

fn init_tracing() {
    use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,web_server=debug,socktalk_infra=debug"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().pretty())
        .init();
}

/// Route panics through tracing before the default hook runs. A panicking
/// worker task is logged and the process keeps serving.
fn install_panic_logging() {
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        tracing::error!("panic: {info}");
        default_hook(info);
    }));
}
