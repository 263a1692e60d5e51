use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use dental_booking::config::AppConfig;
use dental_booking::handlers;
use dental_booking::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = AppConfig::from_env();
    tracing::info!(
        default_lang = %config.default_lang,
        toast_dismiss_ms = config.toast_dismiss.as_millis() as u64,
        "bookings are kept in memory only"
    );

    let state = Arc::new(AppState::new(config.clone()));
    let app = handlers::router(state);

    let addr = format!("0.0.0.0:{}", config.port);
    tracing::info!("starting server on {addr}");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
