use std::sync::Arc;

use trip_planner::config::AppConfig;
use trip_planner::{build_router, AppState};

#[tokio::main]
async fn main() {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    init_logging().expect("Failed to initialize logging");

    let config = AppConfig::from_env().expect("Invalid configuration");
    tracing::info!(
        "Configuration - Gemini AI: {}, Google Places: {}, request delay: {:?}",
        if config.gemini_api_key.is_some() { "✅" } else { "❌" },
        if config.places_api_key.is_some() { "✅" } else { "❌" },
        config.request_delay
    );

    let shared_state = Arc::new(AppState::from_config(&config));
    let app = build_router(shared_state);

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .expect("Failed to bind listener");
    tracing::info!("listening on {}", config.bind_addr);
    axum::serve(listener, app.into_make_service_with_connect_info::<std::net::SocketAddr>())
        .await
        .expect("Server error");
}

fn init_logging() -> Result<(), Box<dyn std::error::Error>> {
    use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

    let log_level = std::env::var("RUST_LOG").unwrap_or_else(|_| {
        if cfg!(debug_assertions) {
            "debug,trip_planner=trace,reqwest=info,hyper=info,tower_http=info".to_string()
        } else {
            "info,trip_planner=info,reqwest=warn,hyper=warn,tower_http=warn".to_string()
        }
    });

    let env_filter = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(&log_level))?;

    // LOG_FORMAT=json for log aggregation, human-readable otherwise
    let fmt_layer = if std::env::var("LOG_FORMAT").as_deref() == Ok("json") {
        fmt::layer()
            .json()
            .with_current_span(true)
            .with_span_list(false)
            .with_target(true)
            .boxed()
    } else {
        fmt::layer()
            .with_target(true)
            .with_file(true)
            .with_line_number(true)
            .boxed()
    };

    tracing_subscriber::registry().with(env_filter).with(fmt_layer).init();

    tracing::info!("🧳 Trip planner starting up...");
    tracing::info!("Version: {}", env!("CARGO_PKG_VERSION"));
    tracing::info!("Build mode: {}", if cfg!(debug_assertions) { "development" } else { "production" });
    tracing::info!("Log level: {}", log_level);

    Ok(())
}
