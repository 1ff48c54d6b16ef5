use crate::types::dataset::Dataset;
use polars::error::PolarsError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RentalDataError {
    #[error("Network request failed for {0}")]
    NetworkRequest(String, #[source] reqwest::Error),

    #[error("HTTP request failed for {url} with status {status}")]
    HttpStatus {
        url: String,
        status: reqwest::StatusCode,
        #[source]
        source: reqwest::Error,
    },

    #[error("Failed to read dataset file '{0}'")]
    FileRead(PathBuf, #[source] std::io::Error),

    // Errors during CSV reading (inside blocking task)
    #[error("Parsing error processing CSV data for the {dataset} dataset")]
    CsvRead {
        dataset: Dataset,
        #[source]
        source: PolarsError,
    },

    #[error("The {0} dataset contains no rows")]
    EmptyDataset(Dataset),

    #[error("Missing required column '{column}' in the {dataset} dataset")]
    MissingColumn { dataset: Dataset, column: String },

    #[error("Unrecognised season value '{value}'")]
    InvalidSeason { value: String },

    #[error("Unexpected data in the {dataset} dataset: {message}")]
    UnexpectedData { dataset: Dataset, message: String },

    #[error("Background task failed to complete")]
    TaskJoin(#[from] tokio::task::JoinError),

    #[error("Failed processing DataFrame: {0}")]
    DataFrameProcessing(#[from] PolarsError),
}
