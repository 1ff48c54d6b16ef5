pub mod daily_frame;
pub mod hourly_frame;

use crate::rental_data::error::RentalDataError;
use crate::types::dataset::Dataset;
use chrono::NaiveDate;
use polars::prelude::*;

// Shared
pub(crate) const COL_DATE: &str = "dteday";
pub(crate) const COL_COUNT: &str = "cnt";

// Daily Specific
pub(crate) const COL_SEASON: &str = "season";
pub(crate) const COL_HOLIDAY: &str = "holiday";
pub(crate) const COL_TEMP: &str = "temp";
pub(crate) const COL_TEMP_CATEGORY: &str = "temp_category";

// Hourly Specific
pub(crate) const COL_HOUR: &str = "hr";

// Aggregation outputs
pub(crate) const COL_YEAR: &str = "year";
pub(crate) const COL_MONTH: &str = "month";
pub(crate) const COL_TOTAL: &str = "total";
pub(crate) const COL_MEAN: &str = "mean_cnt";
pub(crate) const COL_DAYS: &str = "days_since_epoch";

const DATE_FORMAT: &str = "%Y-%m-%d";
// 1970-01-01 counted from 0001-01-01 as day 1.
const UNIX_EPOCH_DAYS_FROM_CE: i32 = 719_163;

/// Expression turning the raw `dteday` column into a `Date`, whether the CSV
/// reader already inferred dates or left ISO strings.
pub(crate) fn date_expr(df: &DataFrame, dataset: Dataset) -> Result<Expr, RentalDataError> {
    match df.column(COL_DATE)?.dtype() {
        DataType::Date => Ok(col(COL_DATE)),
        DataType::String => Ok(col(COL_DATE).str().to_date(StrptimeOptions {
            format: Some(DATE_FORMAT.into()),
            ..Default::default()
        })),
        other => Err(RentalDataError::UnexpectedData {
            dataset,
            message: format!("column '{}' has type {} instead of a date", COL_DATE, other),
        }),
    }
}

/// Converts days since the Unix epoch, as stored by polars `Date`, into a `NaiveDate`.
pub(crate) fn date_from_epoch_days(days: i32) -> Option<NaiveDate> {
    NaiveDate::from_num_days_from_ce_opt(days.checked_add(UNIX_EPOCH_DAYS_FROM_CE)?)
}

/// Retrieves a column from a collected frame, cast to `dtype`.
pub(crate) fn cast_column(
    df: &DataFrame,
    name: &str,
    dtype: &DataType,
) -> Result<Column, RentalDataError> {
    Ok(df.column(name)?.cast(dtype)?)
}
