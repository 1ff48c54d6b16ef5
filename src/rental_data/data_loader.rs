use crate::rental_data::error::RentalDataError;
use crate::types::dataset::{DataSource, Dataset};
use log::{info, warn};
use polars::frame::DataFrame;
use polars::prelude::*;
use reqwest::Client;
use std::io::Cursor;
use std::path::Path;
use tokio::{fs, task};

/// Fetches a rental dataset and parses it into a polars `DataFrame`.
///
/// Nothing is cached: each call performs a fresh download or file read.
#[derive(Debug, Clone, Default)]
pub struct RentalDataLoader {
    download_client: Client,
}

impl RentalDataLoader {
    pub fn new() -> RentalDataLoader {
        RentalDataLoader {
            download_client: Client::new(),
        }
    }

    /// Loads `dataset` from `source`, checking that its required columns exist.
    pub async fn get_frame(
        &self,
        dataset: Dataset,
        source: &DataSource,
    ) -> Result<DataFrame, RentalDataError> {
        let raw_bytes = match source {
            DataSource::Remote(url) => self.download(dataset, url).await?,
            DataSource::Local(path) => Self::read_file(dataset, path).await?,
        };

        let df = Self::csv_to_dataframe(raw_bytes, dataset).await?;
        info!(
            "Loaded {} rows x {} columns for the {} dataset from {}",
            df.height(),
            df.width(),
            dataset,
            source
        );
        Ok(df)
    }

    async fn download(&self, dataset: Dataset, url: &str) -> Result<Vec<u8>, RentalDataError> {
        info!("Downloading {} data from {}", dataset, url);

        let response = self
            .download_client
            .get(url)
            .send()
            .await
            .map_err(|e| RentalDataError::NetworkRequest(url.to_string(), e))?;

        let response = match response.error_for_status() {
            Ok(resp) => resp,
            Err(e) => {
                warn!("HTTP error for {}: {:?}", url, e);
                return Err(if let Some(status) = e.status() {
                    RentalDataError::HttpStatus {
                        url: url.to_string(),
                        status,
                        source: e,
                    }
                } else {
                    RentalDataError::NetworkRequest(url.to_string(), e)
                });
            }
        };

        let bytes = response
            .bytes()
            .await
            .map_err(|e| RentalDataError::NetworkRequest(url.to_string(), e))?;
        Ok(bytes.to_vec())
    }

    async fn read_file(dataset: Dataset, path: &Path) -> Result<Vec<u8>, RentalDataError> {
        info!("Reading {} data from {}", dataset, path.display());
        fs::read(path)
            .await
            .map_err(|e| RentalDataError::FileRead(path.to_path_buf(), e))
    }

    /// Parses raw CSV bytes (with header) into a DataFrame on a blocking task.
    async fn csv_to_dataframe(
        bytes: Vec<u8>,
        dataset: Dataset,
    ) -> Result<DataFrame, RentalDataError> {
        if bytes.iter().all(|b| b.is_ascii_whitespace()) {
            return Err(RentalDataError::EmptyDataset(dataset));
        }

        task::spawn_blocking(move || {
            let df = CsvReadOptions::default()
                .with_has_header(true)
                .into_reader_with_file_handle(Cursor::new(bytes))
                .finish()
                .map_err(|source| RentalDataError::CsvRead { dataset, source })?;

            if let Some(missing) = dataset
                .required_columns()
                .iter()
                .find(|name| df.get_column_index(name).is_none())
            {
                warn!("The {} dataset has no '{}' column", dataset, missing);
                return Err(RentalDataError::MissingColumn {
                    dataset,
                    column: missing.to_string(),
                });
            }

            if df.height() == 0 {
                return Err(RentalDataError::EmptyDataset(dataset));
            }

            Ok(df)
        })
        .await?
    }
}
