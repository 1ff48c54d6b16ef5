//! Result types for the dashboard's aggregations, one per tab.

use crate::analysis::stats::BoxStats;
use crate::types::season::Season;

/// Mean daily rentals within one season (tab 1).
#[derive(Debug, Clone, PartialEq)]
pub struct SeasonMean {
    pub season: Season,
    pub mean_count: f64,
}

/// Total rentals within one calendar month (tab 2).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthlyTotal {
    pub year: i32,
    pub month: u32, // 1-12
    pub total: i64,
}

impl MonthlyTotal {
    /// `YYYY-MM` label used on the chart axis.
    pub fn label(&self) -> String {
        format!("{:04}-{:02}", self.year, self.month)
    }

    fn next_month(year: i32, month: u32) -> (i32, u32) {
        if month >= 12 {
            (year + 1, 1)
        } else {
            (year, month + 1)
        }
    }
}

/// Inserts zero totals for months absent between the first and last entry,
/// matching calendar resampling. Input must be sorted by `(year, month)`.
///
/// # Examples
///
/// ```
/// use bike_rentals_dashboard::{fill_missing_months, MonthlyTotal};
///
/// let sparse = vec![
///     MonthlyTotal { year: 2011, month: 11, total: 5 },
///     MonthlyTotal { year: 2012, month: 2, total: 7 },
/// ];
/// let filled = fill_missing_months(sparse);
/// let labels: Vec<String> = filled.iter().map(|m| m.label()).collect();
/// assert_eq!(labels, ["2011-11", "2011-12", "2012-01", "2012-02"]);
/// assert_eq!(filled[1].total, 0);
/// ```
pub fn fill_missing_months(sorted: Vec<MonthlyTotal>) -> Vec<MonthlyTotal> {
    let mut filled: Vec<MonthlyTotal> = Vec::with_capacity(sorted.len());
    for entry in sorted {
        if let Some(last) = filled.last().copied() {
            let (mut year, mut month) = MonthlyTotal::next_month(last.year, last.month);
            while (year, month) < (entry.year, entry.month) {
                filled.push(MonthlyTotal {
                    year,
                    month,
                    total: 0,
                });
                (year, month) = MonthlyTotal::next_month(year, month);
            }
        }
        filled.push(entry);
    }
    filled
}

/// Rental counts for one group of days, summarised as a box (tabs 3 and 4).
#[derive(Debug, Clone, PartialEq)]
pub struct GroupDistribution {
    pub label: String,
    pub values: Vec<f64>,
}

impl GroupDistribution {
    pub fn new(label: impl Into<String>, values: Vec<f64>) -> Self {
        Self {
            label: label.into(),
            values,
        }
    }

    /// Box summary of the group. `None` when the group has no days.
    pub fn box_stats(&self) -> Option<BoxStats> {
        BoxStats::from_values(&self.values)
    }
}
