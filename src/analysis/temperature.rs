//! Quantile-based temperature bucketing.

use crate::analysis::stats::quantile;
use crate::types::temperature_category::TemperatureCategory;
use polars::prelude::{lit, when, Expr};

/// Lower quantile: temperatures strictly below it are `Low`.
pub const LOW_QUANTILE: f64 = 0.25;
/// Upper quantile: temperatures at or above it are `High`.
pub const HIGH_QUANTILE: f64 = 0.75;

/// The two cut points separating low, medium and high temperature days.
///
/// Always computed from the dataset currently in memory, so the boundaries
/// move with the source data.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TemperatureThresholds {
    /// 25th percentile of the daily temperature distribution.
    pub low: f64,
    /// 75th percentile of the daily temperature distribution.
    pub high: f64,
}

impl TemperatureThresholds {
    /// Computes the thresholds from raw temperatures. `None` if there are none.
    ///
    /// # Examples
    ///
    /// ```
    /// use bike_rentals_dashboard::{TemperatureCategory, TemperatureThresholds};
    ///
    /// let thresholds = TemperatureThresholds::from_values(&[0.1, 0.2, 0.3, 0.4, 0.5]).unwrap();
    /// assert_eq!(thresholds.categorize(0.1), TemperatureCategory::Low);
    /// assert_eq!(thresholds.categorize(0.3), TemperatureCategory::Medium);
    /// assert_eq!(thresholds.categorize(0.4), TemperatureCategory::High);
    /// ```
    pub fn from_values(temperatures: &[f64]) -> Option<Self> {
        Some(Self {
            low: quantile(temperatures, LOW_QUANTILE)?,
            high: quantile(temperatures, HIGH_QUANTILE)?,
        })
    }

    /// Assigns a single temperature to its bucket.
    pub fn categorize(&self, temperature: f64) -> TemperatureCategory {
        if temperature < self.low {
            TemperatureCategory::Low
        } else if temperature >= self.high {
            TemperatureCategory::High
        } else {
            TemperatureCategory::Medium
        }
    }

    /// The same rule as [`Self::categorize`], as a polars expression producing
    /// the category label for each row of `column`.
    ///
    /// A null input would fall through to `Medium`; daily frames never hold a
    /// null temperature, as `DailyLazyFrame::from_raw` rejects them.
    pub fn category_expr(&self, column: Expr) -> Expr {
        when(column.clone().lt(lit(self.low)))
            .then(lit(TemperatureCategory::Low.label()))
            .when(column.gt_eq(lit(self.high)))
            .then(lit(TemperatureCategory::High.label()))
            .otherwise(lit(TemperatureCategory::Medium.label()))
    }
}
