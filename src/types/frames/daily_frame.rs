//! Contains the `DailyLazyFrame` structure holding the day-level rental dataset
//! and the aggregations behind each dashboard tab.

use crate::analysis::aggregates::{fill_missing_months, GroupDistribution, MonthlyTotal, SeasonMean};
use crate::analysis::temperature::TemperatureThresholds;
use crate::rental_data::error::RentalDataError;
use crate::types::dataset::Dataset;
use crate::types::frames::*;
use crate::types::records::DailyRecord;
use crate::types::season::Season;
use crate::types::temperature_category::TemperatureCategory;
use log::debug;
use polars::prelude::*;

/// Label of the non-holiday group in the holiday distribution.
pub const WORKING_DAY_LABEL: &str = "Working day";
/// Label of the holiday group in the holiday distribution.
pub const HOLIDAY_LABEL: &str = "Holiday";

/// A wrapper around a polars `LazyFrame` holding normalized day-level rental data.
///
/// After [`DailyLazyFrame::from_raw`] the frame has at least these columns:
///
/// | column    | type      |
/// |-----------|-----------|
/// | `dteday`  | `Date`    |
/// | `season`  | `Int32` (1..=4) |
/// | `holiday` | `Boolean` |
/// | `temp`    | `Float64` |
/// | `cnt`     | `Int64`   |
///
/// Aggregation methods collect the lazy plan, so they can return a
/// [`RentalDataError::DataFrameProcessing`] if polars fails.
#[derive(Clone)]
pub struct DailyLazyFrame {
    /// The underlying polars LazyFrame containing the daily data.
    pub frame: LazyFrame,
}

impl DailyLazyFrame {
    /// Wraps a frame that already has the normalized schema.
    ///
    /// Use [`DailyLazyFrame::from_raw`] for a frame straight out of the CSV reader.
    ///
    /// # Arguments
    ///
    /// * `frame` - A `LazyFrame` with the columns listed on [`DailyLazyFrame`].
    pub fn new(frame: LazyFrame) -> Self {
        Self { frame }
    }

    /// Normalizes a freshly parsed day CSV.
    ///
    /// Accepts `dteday` as a date or a `YYYY-MM-DD` string and `season` as an
    /// integer code or a season name. `holiday` becomes a boolean (`1` is a holiday).
    ///
    /// Every day must carry a temperature: the temperature category is defined
    /// for every row, so a missing `temp` is rejected here rather than bucketed.
    ///
    /// # Arguments
    ///
    /// * `df` - The day dataset as parsed from CSV. Extra columns are kept.
    ///
    /// # Returns
    ///
    /// A `DailyLazyFrame` over the collected, normalized data.
    ///
    /// # Example
    ///
    /// ```
    /// use bike_rentals_dashboard::DailyLazyFrame;
    /// use polars::prelude::*;
    ///
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let raw = df!(
    ///     "dteday" => ["2011-01-01", "2011-06-21"],
    ///     "season" => ["spring", "summer"],
    ///     "holiday" => [0i64, 0],
    ///     "temp" => [0.34f64, 0.71],
    ///     "cnt" => [985i64, 5312],
    /// )?;
    /// let daily = DailyLazyFrame::from_raw(raw)?;
    /// assert_eq!(daily.height()?, 2);
    /// # Ok(())
    /// # }
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`RentalDataError::InvalidSeason`] for a season value outside the
    /// four known seasons, and [`RentalDataError::UnexpectedData`] when `dteday`
    /// is neither a date nor a string or when a `temp` value is missing.
    pub fn from_raw(mut df: DataFrame) -> Result<Self, RentalDataError> {
        let codes = season_codes(&df)?;
        df.with_column(Series::new(COL_SEASON.into(), codes))?;
        let date = date_expr(&df, Dataset::Day)?;

        let normalized = df
            .lazy()
            .with_columns([
                date.alias(COL_DATE),
                col(COL_HOLIDAY)
                    .cast(DataType::Int32)
                    .eq(lit(1i32))
                    .alias(COL_HOLIDAY),
                col(COL_TEMP).cast(DataType::Float64),
                col(COL_COUNT).cast(DataType::Int64),
            ])
            .collect()?;

        let missing_temps = normalized.column(COL_TEMP)?.null_count();
        if missing_temps > 0 {
            return Err(RentalDataError::UnexpectedData {
                dataset: Dataset::Day,
                message: format!("column '{}' has {} missing values", COL_TEMP, missing_temps),
            });
        }

        Ok(Self::new(normalized.lazy()))
    }

    /// Filters the daily data based on a polars predicate expression.
    ///
    /// Returns a *new* `DailyLazyFrame` with the filter applied lazily; `self`
    /// is left unchanged. Aggregations on the result, including
    /// [`DailyLazyFrame::temperature_thresholds`], only see the matching days.
    ///
    /// # Arguments
    ///
    /// * `predicate` - A polars [`Expr`] over the normalized columns.
    ///
    /// # Example
    ///
    /// ```
    /// use bike_rentals_dashboard::DailyLazyFrame;
    /// use polars::prelude::*;
    ///
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let daily = DailyLazyFrame::from_raw(df!(
    ///     "dteday" => ["2011-07-04", "2011-07-05", "2011-07-06"],
    ///     "season" => [3i64, 3, 3],
    ///     "holiday" => [1i64, 0, 0],
    ///     "temp" => [0.80f64, 0.75, 0.70],
    ///     "cnt" => [6043i64, 6304, 5120],
    /// )?)?;
    ///
    /// // Working days only
    /// let working = daily.filter(col("holiday").not());
    /// assert_eq!(working.height()?, 2);
    /// # Ok(())
    /// # }
    /// ```
    pub fn filter(&self, predicate: Expr) -> DailyLazyFrame {
        DailyLazyFrame::new(self.frame.clone().filter(predicate))
    }

    /// Number of days in the frame.
    pub fn height(&self) -> Result<usize, RentalDataError> {
        let df = self.frame.clone().select([col(COL_COUNT)]).collect()?;
        Ok(df.height())
    }

    /// All non-null normalized temperatures, in row order.
    pub fn temperatures(&self) -> Result<Vec<f64>, RentalDataError> {
        let df = self.frame.clone().select([col(COL_TEMP)]).collect()?;
        Ok(df.column(COL_TEMP)?.f64()?.into_iter().flatten().collect())
    }

    /// The 25th/75th percentile cut points of the current temperature distribution.
    ///
    /// # Errors
    ///
    /// Returns [`RentalDataError::EmptyDataset`] when no temperature is available.
    pub fn temperature_thresholds(&self) -> Result<TemperatureThresholds, RentalDataError> {
        let thresholds = TemperatureThresholds::from_values(&self.temperatures()?)
            .ok_or(RentalDataError::EmptyDataset(Dataset::Day))?;
        debug!(
            "Temperature thresholds: low < {:.4}, high >= {:.4}",
            thresholds.low, thresholds.high
        );
        Ok(thresholds)
    }

    /// Adds a `temp_category` column holding `Low`, `Medium` or `High` per day.
    ///
    /// Applying it again with the same thresholds replaces the column with
    /// identical values.
    ///
    /// # Arguments
    ///
    /// * `thresholds` - Cut points, normally from [`DailyLazyFrame::temperature_thresholds`]
    ///   on the same data.
    pub fn with_temperature_category(&self, thresholds: &TemperatureThresholds) -> DailyLazyFrame {
        DailyLazyFrame::new(
            self.frame
                .clone()
                .with_column(thresholds.category_expr(col(COL_TEMP)).alias(COL_TEMP_CATEGORY)),
        )
    }

    /// The temperature category of every day, in row order.
    pub fn temperature_categories(
        &self,
        thresholds: &TemperatureThresholds,
    ) -> Result<Vec<TemperatureCategory>, RentalDataError> {
        let df = self
            .with_temperature_category(thresholds)
            .frame
            .select([col(COL_TEMP_CATEGORY)])
            .collect()?;
        df.column(COL_TEMP_CATEGORY)?
            .str()?
            .into_iter()
            .map(|label| {
                label
                    .and_then(TemperatureCategory::from_label)
                    .ok_or_else(|| RentalDataError::UnexpectedData {
                        dataset: Dataset::Day,
                        message: format!("uncategorised temperature row ({:?})", label),
                    })
            })
            .collect()
    }

    /// Mean daily rentals per season, ordered spring to winter.
    ///
    /// Seasons without any day are omitted.
    ///
    /// # Returns
    ///
    /// One [`SeasonMean`] per season present in the data.
    ///
    /// # Example
    ///
    /// ```
    /// use bike_rentals_dashboard::{DailyLazyFrame, Season};
    /// use polars::prelude::*;
    ///
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let daily = DailyLazyFrame::from_raw(df!(
    ///     "dteday" => ["2011-01-01", "2011-01-02", "2011-07-01"],
    ///     "season" => [1i64, 1, 3],
    ///     "holiday" => [0i64, 0, 0],
    ///     "temp" => [0.2f64, 0.3, 0.8],
    ///     "cnt" => [1000i64, 2000, 6000],
    /// )?)?;
    ///
    /// let means = daily.season_means()?;
    /// assert_eq!(means[0].season, Season::Spring);
    /// assert_eq!(means[0].mean_count, 1500.0);
    /// assert_eq!(means[1].season, Season::Fall);
    /// # Ok(())
    /// # }
    /// ```
    pub fn season_means(&self) -> Result<Vec<SeasonMean>, RentalDataError> {
        let df = self
            .frame
            .clone()
            .group_by([col(COL_SEASON)])
            .agg([col(COL_COUNT).mean().alias(COL_MEAN)])
            .sort([COL_SEASON], SortMultipleOptions::default())
            .collect()?;

        let seasons = df.column(COL_SEASON)?.i32()?;
        let means = df.column(COL_MEAN)?.f64()?;

        seasons
            .into_iter()
            .zip(means.into_iter())
            .filter_map(|(season, mean)| Some((season?, mean?)))
            .map(|(code, mean_count)| {
                let season = Season::from_code(code as i64).ok_or_else(|| {
                    RentalDataError::InvalidSeason {
                        value: code.to_string(),
                    }
                })?;
                Ok(SeasonMean { season, mean_count })
            })
            .collect()
    }

    /// Total rentals per calendar month, with empty months in between filled with zero.
    ///
    /// # Returns
    ///
    /// Months in calendar order, from the first to the last month with data.
    ///
    /// # Example
    ///
    /// ```
    /// use bike_rentals_dashboard::DailyLazyFrame;
    /// use polars::prelude::*;
    ///
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let daily = DailyLazyFrame::from_raw(df!(
    ///     "dteday" => ["2011-01-10", "2011-01-20", "2011-03-05"],
    ///     "season" => [1i64, 1, 1],
    ///     "holiday" => [0i64, 0, 0],
    ///     "temp" => [0.2f64, 0.25, 0.3],
    ///     "cnt" => [100i64, 150, 400],
    /// )?)?;
    ///
    /// let totals: Vec<(String, i64)> = daily
    ///     .monthly_totals()?
    ///     .iter()
    ///     .map(|m| (m.label(), m.total))
    ///     .collect();
    /// assert_eq!(
    ///     totals,
    ///     vec![
    ///         ("2011-01".to_string(), 250),
    ///         ("2011-02".to_string(), 0),
    ///         ("2011-03".to_string(), 400),
    ///     ]
    /// );
    /// # Ok(())
    /// # }
    /// ```
    pub fn monthly_totals(&self) -> Result<Vec<MonthlyTotal>, RentalDataError> {
        let df = self
            .frame
            .clone()
            .filter(col(COL_DATE).is_not_null())
            .group_by([
                col(COL_DATE).dt().year().cast(DataType::Int32).alias(COL_YEAR),
                col(COL_DATE).dt().month().cast(DataType::Int32).alias(COL_MONTH),
            ])
            .agg([col(COL_COUNT).sum().alias(COL_TOTAL)])
            .sort([COL_YEAR, COL_MONTH], SortMultipleOptions::default())
            .collect()?;

        let years = df.column(COL_YEAR)?.i32()?;
        let months = df.column(COL_MONTH)?.i32()?;
        let totals = cast_column(&df, COL_TOTAL, &DataType::Int64)?;
        let totals = totals.i64()?;

        let sparse: Vec<MonthlyTotal> = years
            .into_iter()
            .zip(months.into_iter())
            .zip(totals.into_iter())
            .filter_map(|((year, month), total)| {
                Some(MonthlyTotal {
                    year: year?,
                    month: u32::try_from(month?).ok()?,
                    total: total.unwrap_or(0),
                })
            })
            .collect();

        Ok(fill_missing_months(sparse))
    }

    /// Rental count distributions for working days and holidays, in that order.
    pub fn holiday_distributions(&self) -> Result<Vec<GroupDistribution>, RentalDataError> {
        [(false, WORKING_DAY_LABEL), (true, HOLIDAY_LABEL)]
            .into_iter()
            .map(|(is_holiday, label)| {
                let values = count_values(self.filter(col(COL_HOLIDAY).eq(lit(is_holiday))))?;
                Ok(GroupDistribution::new(label, values))
            })
            .collect()
    }

    /// Rental count distributions per temperature category, low to high.
    pub fn temperature_distributions(
        &self,
        thresholds: &TemperatureThresholds,
    ) -> Result<Vec<GroupDistribution>, RentalDataError> {
        let categorized = self.with_temperature_category(thresholds);
        TemperatureCategory::ALL
            .into_iter()
            .map(|category| {
                let values = count_values(
                    categorized.filter(col(COL_TEMP_CATEGORY).eq(lit(category.label()))),
                )?;
                Ok(GroupDistribution::new(category.label(), values))
            })
            .collect()
    }

    /// Collects the frame into typed rows.
    ///
    /// # Errors
    ///
    /// Returns [`RentalDataError::UnexpectedData`] if a required value is null.
    pub fn records(&self) -> Result<Vec<DailyRecord>, RentalDataError> {
        let df = self
            .frame
            .clone()
            .select([
                col(COL_DATE).cast(DataType::Int32).alias(COL_DAYS),
                col(COL_SEASON),
                col(COL_HOLIDAY),
                col(COL_TEMP),
                col(COL_COUNT),
            ])
            .collect()?;

        let days = df.column(COL_DAYS)?.i32()?;
        let seasons = df.column(COL_SEASON)?.i32()?;
        let holidays = df.column(COL_HOLIDAY)?.bool()?;
        let temps = df.column(COL_TEMP)?.f64()?;
        let counts = df.column(COL_COUNT)?.i64()?;

        (0..df.height())
            .map(|idx| {
                let missing = |column: &str| RentalDataError::UnexpectedData {
                    dataset: Dataset::Day,
                    message: format!("row {} has no valid '{}' value", idx, column),
                };
                Ok(DailyRecord {
                    date: days
                        .get(idx)
                        .and_then(date_from_epoch_days)
                        .ok_or_else(|| missing(COL_DATE))?,
                    season: seasons
                        .get(idx)
                        .and_then(|code| Season::from_code(code as i64))
                        .ok_or_else(|| missing(COL_SEASON))?,
                    holiday: holidays.get(idx).ok_or_else(|| missing(COL_HOLIDAY))?,
                    temperature: temps.get(idx).ok_or_else(|| missing(COL_TEMP))?,
                    count: counts.get(idx).ok_or_else(|| missing(COL_COUNT))?,
                })
            })
            .collect()
    }
}

/// Maps the raw `season` column to season codes, accepting codes or names.
fn season_codes(df: &DataFrame) -> Result<Vec<i32>, RentalDataError> {
    let column = df.column(COL_SEASON)?;
    let invalid = |value: String| RentalDataError::InvalidSeason { value };

    if column.dtype() == &DataType::String {
        column
            .str()?
            .into_iter()
            .map(|value| {
                let value = value.ok_or_else(|| invalid("null".to_string()))?;
                Season::from_name(value)
                    .or_else(|| value.trim().parse::<i64>().ok().and_then(Season::from_code))
                    .map(|season| season.code())
                    .ok_or_else(|| invalid(value.to_string()))
            })
            .collect()
    } else {
        let codes = column.cast(&DataType::Int64)?;
        codes
            .i64()?
            .into_iter()
            .map(|code| {
                code.and_then(Season::from_code)
                    .map(|season| season.code())
                    .ok_or_else(|| invalid(code.map_or_else(|| "null".to_string(), |c| c.to_string())))
            })
            .collect()
    }
}

/// Collects the rental counts of `frame` as floats for distribution statistics.
fn count_values(frame: DailyLazyFrame) -> Result<Vec<f64>, RentalDataError> {
    let df = frame
        .frame
        .select([col(COL_COUNT).cast(DataType::Float64)])
        .collect()?;
    Ok(df.column(COL_COUNT)?.f64()?.into_iter().flatten().collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    /// Three months of hand-picked days spanning all four seasons.
    fn fixture() -> Result<DailyLazyFrame, Box<dyn std::error::Error>> {
        let df = df!(
            "dteday" => [
                "2011-01-01", "2011-01-15", "2011-01-31",
                "2011-02-01", "2011-02-14",
                "2011-03-01", "2011-03-10", "2011-03-20",
            ],
            "season" => [1i64, 1, 2, 2, 3, 3, 3, 4],
            "holiday" => [0i64, 1, 0, 0, 1, 0, 0, 0],
            "temp" => [0.10f64, 0.20, 0.30, 0.40, 0.50, 0.60, 0.70, 0.80],
            "cnt" => [100i64, 200, 300, 500, 400, 600, 800, 50],
        )?;
        Ok(DailyLazyFrame::from_raw(df)?)
    }

    #[test]
    fn test_from_raw_normalizes_schema() -> Result<(), Box<dyn std::error::Error>> {
        let daily = fixture()?;
        let df = daily.frame.collect()?;

        assert_eq!(df.column("dteday")?.dtype(), &DataType::Date);
        assert_eq!(df.column("season")?.dtype(), &DataType::Int32);
        assert_eq!(df.column("holiday")?.dtype(), &DataType::Boolean);
        assert_eq!(df.column("temp")?.dtype(), &DataType::Float64);
        assert_eq!(df.column("cnt")?.dtype(), &DataType::Int64);
        Ok(())
    }

    #[test]
    fn test_from_raw_accepts_season_names() -> Result<(), Box<dyn std::error::Error>> {
        let df = df!(
            "dteday" => ["2012-06-01", "2012-12-01"],
            "season" => ["Summer", "winter"],
            "holiday" => [0i64, 0],
            "temp" => [0.7f64, 0.2],
            "cnt" => [5000i64, 1500],
        )?;
        let records = DailyLazyFrame::from_raw(df)?.records()?;

        assert_eq!(records[0].season, Season::Summer);
        assert_eq!(records[1].season, Season::Winter);
        Ok(())
    }

    #[test]
    fn test_from_raw_rejects_unknown_season() -> Result<(), Box<dyn std::error::Error>> {
        let df = df!(
            "dteday" => ["2012-06-01"],
            "season" => [7i64],
            "holiday" => [0i64],
            "temp" => [0.7f64],
            "cnt" => [5000i64],
        )?;

        match DailyLazyFrame::from_raw(df) {
            Err(RentalDataError::InvalidSeason { value }) => assert_eq!(value, "7"),
            Err(other) => panic!("unexpected error: {:?}", other),
            Ok(_) => panic!("season 7 should be rejected"),
        }
        Ok(())
    }

    #[test]
    fn test_from_raw_accepts_parsed_dates() -> Result<(), Box<dyn std::error::Error>> {
        // 2011-01-01 and 2011-01-31 as days since the Unix epoch
        let dates = Series::new("dteday".into(), [14_975i32, 15_005]).cast(&DataType::Date)?;
        let mut df = df!(
            "season" => [1i64, 1],
            "holiday" => [0i64, 1],
            "temp" => [0.2f64, 0.3],
            "cnt" => [985i64, 1100],
        )?;
        df.with_column(dates)?;

        let records = DailyLazyFrame::from_raw(df)?.records()?;
        assert_eq!(records[0].date, NaiveDate::from_ymd_opt(2011, 1, 1).unwrap());
        assert_eq!(records[1].date, NaiveDate::from_ymd_opt(2011, 1, 31).unwrap());
        Ok(())
    }

    #[test]
    fn test_from_raw_rejects_non_date_dteday() -> Result<(), Box<dyn std::error::Error>> {
        let df = df!(
            "dteday" => [20110101i64],
            "season" => [1i64],
            "holiday" => [0i64],
            "temp" => [0.2f64],
            "cnt" => [985i64],
        )?;

        match DailyLazyFrame::from_raw(df) {
            Err(RentalDataError::UnexpectedData { dataset, message }) => {
                assert_eq!(dataset, Dataset::Day);
                assert!(message.contains("dteday"));
            }
            Err(other) => panic!("unexpected error: {:?}", other),
            Ok(_) => panic!("integer dteday should be rejected"),
        }
        Ok(())
    }

    #[test]
    fn test_from_raw_rejects_missing_temperature() -> Result<(), Box<dyn std::error::Error>> {
        let df = df!(
            "dteday" => ["2011-01-01", "2011-01-02", "2011-01-03", "2011-01-04", "2011-01-05"],
            "season" => [1i64, 1, 1, 1, 1],
            "holiday" => [0i64, 0, 0, 0, 0],
            "temp" => [Some(0.1f64), Some(0.3), None, Some(0.5), Some(0.9)],
            "cnt" => [100i64, 200, 300, 400, 500],
        )?;

        match DailyLazyFrame::from_raw(df) {
            Err(RentalDataError::UnexpectedData { message, .. }) => {
                assert!(message.contains("'temp' has 1 missing"));
            }
            Err(other) => panic!("unexpected error: {:?}", other),
            Ok(_) => panic!("a day without temperature should be rejected"),
        }
        Ok(())
    }

    #[test]
    fn test_records_are_typed() -> Result<(), Box<dyn std::error::Error>> {
        let records = fixture()?.records()?;

        assert_eq!(records.len(), 8);
        assert_eq!(
            records[1],
            DailyRecord {
                date: NaiveDate::from_ymd_opt(2011, 1, 15).unwrap(),
                season: Season::Spring,
                holiday: true,
                temperature: 0.20,
                count: 200,
            }
        );
        Ok(())
    }

    #[test]
    fn test_season_means_match_arithmetic_means() -> Result<(), Box<dyn std::error::Error>> {
        let means = fixture()?.season_means()?;

        let expected = [
            (Season::Spring, (100.0 + 200.0) / 2.0),
            (Season::Summer, (300.0 + 500.0) / 2.0),
            (Season::Fall, (400.0 + 600.0 + 800.0) / 3.0),
            (Season::Winter, 50.0),
        ];
        assert_eq!(means.len(), expected.len());
        for (actual, (season, mean)) in means.iter().zip(expected) {
            assert_eq!(actual.season, season);
            assert!((actual.mean_count - mean).abs() < 1e-9);
        }
        Ok(())
    }

    #[test]
    fn test_monthly_totals_match_manual_sums() -> Result<(), Box<dyn std::error::Error>> {
        let totals = fixture()?.monthly_totals()?;

        assert_eq!(
            totals,
            vec![
                MonthlyTotal { year: 2011, month: 1, total: 100 + 200 + 300 },
                MonthlyTotal { year: 2011, month: 2, total: 500 + 400 },
                MonthlyTotal { year: 2011, month: 3, total: 600 + 800 + 50 },
            ]
        );
        Ok(())
    }

    #[test]
    fn test_monthly_totals_include_empty_months() -> Result<(), Box<dyn std::error::Error>> {
        let df = df!(
            "dteday" => ["2011-11-30", "2012-01-02"],
            "season" => [4i64, 1],
            "holiday" => [0i64, 0],
            "temp" => [0.3f64, 0.2],
            "cnt" => [10i64, 20],
        )?;
        let totals = DailyLazyFrame::from_raw(df)?.monthly_totals()?;

        let labels: Vec<(String, i64)> = totals.iter().map(|m| (m.label(), m.total)).collect();
        assert_eq!(
            labels,
            vec![
                ("2011-11".to_string(), 10),
                ("2011-12".to_string(), 0),
                ("2012-01".to_string(), 20),
            ]
        );
        Ok(())
    }

    #[test]
    fn test_every_day_gets_exactly_one_category() -> Result<(), Box<dyn std::error::Error>> {
        let daily = fixture()?;
        let thresholds = daily.temperature_thresholds()?;
        let categories = daily.temperature_categories(&thresholds)?;
        let temperatures = daily.temperatures()?;

        assert_eq!(categories.len(), temperatures.len());
        for (temp, category) in temperatures.iter().zip(&categories) {
            let expected = if *temp < thresholds.low {
                TemperatureCategory::Low
            } else if *temp >= thresholds.high {
                TemperatureCategory::High
            } else {
                TemperatureCategory::Medium
            };
            assert_eq!(*category, expected, "temperature {}", temp);
        }
        Ok(())
    }

    #[test]
    fn test_thresholds_follow_the_data() -> Result<(), Box<dyn std::error::Error>> {
        let daily = fixture()?;
        let thresholds = daily.temperature_thresholds()?;
        // 8 values 0.1..=0.8: q25 at rank 1.75, q75 at rank 5.25
        assert!((thresholds.low - 0.275).abs() < 1e-9);
        assert!((thresholds.high - 0.625).abs() < 1e-9);

        let warmer = daily.filter(col("temp").gt(lit(0.45f64)));
        let warmer_thresholds = warmer.temperature_thresholds()?;
        assert!(warmer_thresholds.low > thresholds.low);
        Ok(())
    }

    #[test]
    fn test_categorization_is_idempotent() -> Result<(), Box<dyn std::error::Error>> {
        let daily = fixture()?;
        let first_thresholds = daily.temperature_thresholds()?;
        let first = daily.temperature_categories(&first_thresholds)?;

        let recategorized = daily.with_temperature_category(&first_thresholds);
        let second_thresholds = recategorized.temperature_thresholds()?;
        let second = recategorized.temperature_categories(&second_thresholds)?;

        assert_eq!(first_thresholds, second_thresholds);
        assert_eq!(first, second);
        Ok(())
    }

    #[test]
    fn test_holiday_distributions() -> Result<(), Box<dyn std::error::Error>> {
        let groups = fixture()?.holiday_distributions()?;

        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].label, WORKING_DAY_LABEL);
        assert_eq!(groups[1].label, HOLIDAY_LABEL);
        assert_eq!(groups[1].values, vec![200.0, 400.0]);
        assert_eq!(groups[0].values.len(), 6);
        Ok(())
    }

    #[test]
    fn test_temperature_distributions_cover_all_days() -> Result<(), Box<dyn std::error::Error>> {
        let daily = fixture()?;
        let thresholds = daily.temperature_thresholds()?;
        let groups = daily.temperature_distributions(&thresholds)?;

        let labels: Vec<&str> = groups.iter().map(|g| g.label.as_str()).collect();
        assert_eq!(labels, ["Low", "Medium", "High"]);
        // temps 0.1, 0.2 are low; 0.3..0.6 medium; 0.7, 0.8 high
        assert_eq!(groups[0].values, vec![100.0, 200.0]);
        assert_eq!(groups[1].values, vec![300.0, 500.0, 400.0, 600.0]);
        assert_eq!(groups[2].values, vec![800.0, 50.0]);
        Ok(())
    }
}
