use crate::charts::ChartError;
use crate::config::ConfigError;
use crate::rental_data::error::RentalDataError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DashboardError {
    #[error(transparent)]
    RentalData(#[from] RentalDataError),

    #[error(transparent)]
    Chart(#[from] ChartError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Failed to bind dashboard server to '{0}'")]
    Bind(String, #[source] std::io::Error),

    #[error("Dashboard server stopped unexpectedly")]
    Serve(#[source] std::io::Error),
}
