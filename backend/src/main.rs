use std::sync::Arc;
use anyhow::Context;
use launchpad_server::{
    app_state::AppState, build_app, data_access::data_context::DataContext, settings::Settings,
};
use tracing::{error, info};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    // ── Boot ───────────────────────────────────────────────────
    let settings = Settings::load().context("Failed to load settings")?;
    let data_context = DataContext::new(&settings.database_path)
        .with_context(|| format!("Failed to open database {}", settings.database_path))?;
    data_context
        .ensure_default_user(&settings)
        .context("Failed to seed default admin")?;

    // ── Router ─────────────────────────────────────────────────
    let address = settings.bind_address();
    let state = Arc::new(AppState { data_context, settings });
    let app = build_app(state);

    // ── Start ──────────────────────────────────────────────────
    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .with_context(|| format!("Failed to bind {address}"))?;
    info!("Server running on http://{address}");
    info!("  Register: POST http://{address}/api/auth/register");
    info!("  Login:    POST http://{address}/api/auth/login");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;
    info!("Server stopped");
    Ok(())
}

#[cfg(feature = "profile-console")]
fn init_tracing() {
    console_subscriber::init();
}

#[cfg(not(feature = "profile-console"))]
fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Cannot listen for Ctrl-C: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown requested");
}
