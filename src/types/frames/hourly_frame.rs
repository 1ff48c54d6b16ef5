use crate::rental_data::error::RentalDataError;
use crate::types::dataset::Dataset;
use crate::types::frames::*;
use crate::types::records::HourlyRecord;
use polars::prelude::*;

/// Hour-level rental data. Loaded alongside the day dataset but not charted.
#[derive(Clone)]
pub struct HourlyLazyFrame {
    pub frame: LazyFrame,
}

impl HourlyLazyFrame {
    pub fn new(frame: LazyFrame) -> Self {
        Self { frame }
    }

    /// Normalizes `dteday` to `Date`, `hr` to `Int32` and `cnt` to `Int64`.
    pub fn from_raw(df: DataFrame) -> Result<Self, RentalDataError> {
        let date = date_expr(&df, Dataset::Hour)?;
        let normalized = df
            .lazy()
            .with_columns([
                date.alias(COL_DATE),
                col(COL_HOUR).cast(DataType::Int32),
                col(COL_COUNT).cast(DataType::Int64),
            ])
            .collect()?;
        Ok(Self::new(normalized.lazy()))
    }

    pub fn height(&self) -> Result<usize, RentalDataError> {
        let df = self.frame.clone().select([col(COL_COUNT)]).collect()?;
        Ok(df.height())
    }

    pub fn records(&self) -> Result<Vec<HourlyRecord>, RentalDataError> {
        let df = self
            .frame
            .clone()
            .select([
                col(COL_DATE).cast(DataType::Int32).alias(COL_DAYS),
                col(COL_HOUR),
                col(COL_COUNT),
            ])
            .collect()?;

        let days = df.column(COL_DAYS)?.i32()?;
        let hours = df.column(COL_HOUR)?.i32()?;
        let counts = df.column(COL_COUNT)?.i64()?;

        (0..df.height())
            .map(|idx| {
                let missing = |column: &str| RentalDataError::UnexpectedData {
                    dataset: Dataset::Hour,
                    message: format!("row {} has no valid '{}' value", idx, column),
                };
                Ok(HourlyRecord {
                    date: days
                        .get(idx)
                        .and_then(date_from_epoch_days)
                        .ok_or_else(|| missing(COL_DATE))?,
                    hour: hours
                        .get(idx)
                        .and_then(|h| u32::try_from(h).ok())
                        .filter(|h| *h < 24)
                        .ok_or_else(|| missing(COL_HOUR))?,
                    count: counts.get(idx).ok_or_else(|| missing(COL_COUNT))?,
                })
            })
            .collect()
    }
}
