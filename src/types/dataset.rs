//! Defines the two bike rental datasets the dashboard reads and where they can
//! be loaded from.

use std::fmt;
use std::path::PathBuf;

const DAY_DATA_URL: &str =
    "https://raw.githubusercontent.com/aldakurniaputri/Tugas_Akhir/main/dashboard/day_data.csv";
const HOUR_DATA_URL: &str =
    "https://raw.githubusercontent.com/aldakurniaputri/Tugas_Akhir/main/dashboard/hour_data.csv";

/// Identifies one of the pre-aggregated rental datasets.
///
/// Each variant knows its default remote location and the columns the dashboard
/// relies on. Extra columns in the CSV are carried along untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dataset {
    /// One row per calendar day with season, holiday and weather metadata.
    Day,
    /// One row per hour. Loaded with the day dataset but not charted.
    Hour,
}

impl Dataset {
    pub(crate) fn name(&self) -> &'static str {
        match self {
            Dataset::Day => "day",
            Dataset::Hour => "hour",
        }
    }

    /// The fixed remote CSV location used when no other source is configured.
    pub fn default_url(&self) -> &'static str {
        match self {
            Dataset::Day => DAY_DATA_URL,
            Dataset::Hour => HOUR_DATA_URL,
        }
    }

    pub(crate) fn required_columns(&self) -> &'static [&'static str] {
        match self {
            Dataset::Day => &["dteday", "season", "holiday", "temp", "cnt"],
            Dataset::Hour => &["dteday", "hr", "cnt"],
        }
    }
}

/// Allows formatting a `Dataset` using its short name.
///
/// # Examples
///
/// ```
/// use bike_rentals_dashboard::Dataset;
///
/// assert_eq!(Dataset::Day.to_string(), "day");
/// assert_eq!(format!("{}", Dataset::Hour), "hour");
/// ```
impl fmt::Display for Dataset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Where a dataset's CSV bytes come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataSource {
    /// Fetched with a single HTTP GET.
    Remote(String),
    /// Read from the local filesystem.
    Local(PathBuf),
}

impl DataSource {
    /// The source used when nothing else is configured for `dataset`.
    pub fn default_for(dataset: Dataset) -> Self {
        DataSource::Remote(dataset.default_url().to_string())
    }

    /// Interprets a configuration string as a source.
    ///
    /// `http://` and `https://` values are remote, a `file://` prefix is stripped,
    /// and anything else is treated as a filesystem path.
    ///
    /// # Examples
    ///
    /// ```
    /// use bike_rentals_dashboard::DataSource;
    /// use std::path::PathBuf;
    ///
    /// assert_eq!(
    ///     DataSource::parse("https://example.com/day.csv"),
    ///     DataSource::Remote("https://example.com/day.csv".to_string())
    /// );
    /// assert_eq!(
    ///     DataSource::parse("file:///tmp/day.csv"),
    ///     DataSource::Local(PathBuf::from("/tmp/day.csv"))
    /// );
    /// ```
    pub fn parse(value: &str) -> Self {
        let value = value.trim();
        if value.starts_with("http://") || value.starts_with("https://") {
            DataSource::Remote(value.to_string())
        } else if let Some(path) = value.strip_prefix("file://") {
            DataSource::Local(PathBuf::from(path))
        } else {
            DataSource::Local(PathBuf::from(value))
        }
    }
}

impl fmt::Display for DataSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataSource::Remote(url) => write!(f, "{}", url),
            DataSource::Local(path) => write!(f, "{}", path.display()),
        }
    }
}
