//! Entry point for the `bike-dashboard` binary.
//!
//! Startup sequence:
//! - load `.env` if present, then read `DASHBOARD_*` settings
//! - install `env_logger` (`RUST_LOG`, default `info`)
//! - bind the configured address and serve the dashboard router
use bike_rentals_dashboard::{config, server, BikeDashboard, DashboardError};
use log::info;
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<(), DashboardError> {
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cfg = config::load_from_env()?;
    cfg.log_config();

    let dashboard = Arc::new(BikeDashboard::from_config(&cfg));
    let app = server::router(dashboard);

    let listener = tokio::net::TcpListener::bind(cfg.bind_addr)
        .await
        .map_err(|e| DashboardError::Bind(cfg.bind_addr.to_string(), e))?;
    info!("Listening on http://{}", cfg.bind_addr);

    axum::serve(listener, app)
        .await
        .map_err(DashboardError::Serve)?;

    Ok(())
}
