//! Descriptive statistics used by the dashboard's charts.

/// Computes the `q`-th quantile of `values` using linear interpolation between
/// the two closest ranks (`pos = (n - 1) * q`).
///
/// NaN values are ignored. Returns `None` for an empty input or a `q` outside `0.0..=1.0`.
///
/// # Examples
///
/// ```
/// use bike_rentals_dashboard::quantile;
///
/// let values = [1.0, 2.0, 3.0, 4.0];
/// assert_eq!(quantile(&values, 0.5), Some(2.5));
/// assert_eq!(quantile(&values, 0.25), Some(1.75));
/// assert_eq!(quantile(&[], 0.5), None);
/// ```
pub fn quantile(values: &[f64], q: f64) -> Option<f64> {
    let mut sorted: Vec<f64> = values.iter().copied().filter(|v| !v.is_nan()).collect();
    sorted.sort_by(f64::total_cmp);
    quantile_sorted(&sorted, q)
}

/// Same as [`quantile`] but assumes `sorted` is already ascending and NaN-free.
pub(crate) fn quantile_sorted(sorted: &[f64], q: f64) -> Option<f64> {
    if sorted.is_empty() || !(0.0..=1.0).contains(&q) {
        return None;
    }
    let pos = (sorted.len() - 1) as f64 * q;
    let lower = pos.floor() as usize;
    let upper = pos.ceil() as usize;
    let fraction = pos - lower as f64;
    Some(sorted[lower] + (sorted[upper] - sorted[lower]) * fraction)
}

/// Five-number summary plus Tukey whiskers for one box in a box plot.
///
/// Whiskers reach the most extreme observations that lie within 1.5 × IQR of
/// the box; anything beyond them is listed in `outliers`.
#[derive(Debug, Clone, PartialEq)]
pub struct BoxStats {
    pub min: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub max: f64,
    pub whisker_low: f64,
    pub whisker_high: f64,
    pub outliers: Vec<f64>,
}

impl BoxStats {
    const WHISKER_IQR_FACTOR: f64 = 1.5;

    /// Summarises `values`, ignoring NaNs. Returns `None` when nothing is left.
    pub fn from_values(values: &[f64]) -> Option<BoxStats> {
        let mut sorted: Vec<f64> = values.iter().copied().filter(|v| !v.is_nan()).collect();
        sorted.sort_by(f64::total_cmp);

        let q1 = quantile_sorted(&sorted, 0.25)?;
        let median = quantile_sorted(&sorted, 0.5)?;
        let q3 = quantile_sorted(&sorted, 0.75)?;
        let iqr = q3 - q1;
        let lower_fence = q1 - Self::WHISKER_IQR_FACTOR * iqr;
        let upper_fence = q3 + Self::WHISKER_IQR_FACTOR * iqr;

        let within = |v: &f64| (lower_fence..=upper_fence).contains(v);
        let whisker_low = sorted.iter().copied().find(|v| within(v)).unwrap_or(q1);
        let whisker_high = sorted.iter().copied().rev().find(|v| within(v)).unwrap_or(q3);
        let outliers = sorted.iter().copied().filter(|v| !within(v)).collect();

        Some(BoxStats {
            min: sorted[0],
            q1,
            median,
            q3,
            max: sorted[sorted.len() - 1],
            whisker_low,
            whisker_high,
            outliers,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quantile_single_value() {
        assert_eq!(quantile(&[7.0], 0.0), Some(7.0));
        assert_eq!(quantile(&[7.0], 0.75), Some(7.0));
    }

    #[test]
    fn test_quantile_is_order_independent() {
        let a = quantile(&[5.0, 1.0, 3.0, 2.0, 4.0], 0.75);
        let b = quantile(&[1.0, 2.0, 3.0, 4.0, 5.0], 0.75);
        assert_eq!(a, Some(4.0));
        assert_eq!(a, b);
    }

    #[test]
    fn test_quantile_ignores_nan_and_rejects_bad_q() {
        assert_eq!(quantile(&[f64::NAN, 2.0, 4.0], 0.5), Some(3.0));
        assert_eq!(quantile(&[1.0, 2.0], 1.5), None);
        assert_eq!(quantile(&[f64::NAN], 0.5), None);
    }

    #[test]
    fn test_box_stats_without_outliers() {
        let stats = BoxStats::from_values(&[1.0, 2.0, 3.0, 4.0, 5.0]).unwrap();
        assert_eq!(stats.q1, 2.0);
        assert_eq!(stats.median, 3.0);
        assert_eq!(stats.q3, 4.0);
        assert_eq!(stats.whisker_low, 1.0);
        assert_eq!(stats.whisker_high, 5.0);
        assert!(stats.outliers.is_empty());
    }

    #[test]
    fn test_box_stats_flags_outliers() {
        let stats = BoxStats::from_values(&[10.0, 11.0, 12.0, 13.0, 14.0, 100.0]).unwrap();
        // q1 = 11.25, q3 = 13.75, upper fence = 17.5
        assert_eq!(stats.outliers, vec![100.0]);
        assert_eq!(stats.whisker_high, 14.0);
        assert_eq!(stats.whisker_low, 10.0);
        assert_eq!(stats.max, 100.0);
    }

    #[test]
    fn test_box_stats_empty_is_none() {
        assert!(BoxStats::from_values(&[]).is_none());
    }
}
