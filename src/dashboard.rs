use crate::analysis::temperature::TemperatureThresholds;
use crate::charts::ChartStyle;
use crate::config::DashboardConfig;
use crate::error::DashboardError;
use crate::page::content::DEFAULT_SIDEBAR_IMAGE;
use crate::page::DashboardPage;
use crate::rental_data::data_loader::RentalDataLoader;
use crate::types::dataset::{DataSource, Dataset};
use crate::types::frames::daily_frame::DailyLazyFrame;
use crate::types::frames::hourly_frame::HourlyLazyFrame;
use bon::bon;
use log::info;

/// Both datasets after normalization, plus the temperature cut points derived
/// from the day data.
#[derive(Clone)]
pub struct DashboardData {
    pub daily: DailyLazyFrame,
    pub hourly: HourlyLazyFrame,
    pub thresholds: TemperatureThresholds,
}

/// Loads the rental datasets and turns them into the dashboard page.
///
/// Every call to [`BikeDashboard::load`] or [`BikeDashboard::render_page`]
/// fetches both CSVs again; nothing is kept between requests.
///
/// # Examples
///
/// ```rust
/// # use bike_rentals_dashboard::{BikeDashboard, DataSource, Dataset};
/// // Stock dashboard: remote CSVs and the default sidebar logo
/// let stock = BikeDashboard::default();
/// assert_eq!(stock.hour_source(), &DataSource::default_for(Dataset::Hour));
///
/// // Local copy of the day data, everything else default
/// let local = BikeDashboard::builder()
///     .day_source(DataSource::parse("data/day_data.csv"))
///     .build();
/// assert_eq!(local.day_source(), &DataSource::parse("data/day_data.csv"));
/// ```
#[derive(Debug, Clone)]
pub struct BikeDashboard {
    loader: RentalDataLoader,
    day_source: DataSource,
    hour_source: DataSource,
    sidebar_image: String,
    style: ChartStyle,
}

#[bon]
impl BikeDashboard {
    /// Creates a dashboard. Every argument is optional and falls back to the
    /// stock setup: remote CSVs, default logo and the default chart style.
    #[builder]
    pub fn new(
        loader: Option<RentalDataLoader>,
        day_source: Option<DataSource>,
        hour_source: Option<DataSource>,
        sidebar_image: Option<String>,
        style: Option<ChartStyle>,
    ) -> Self {
        Self {
            loader: loader.unwrap_or_default(),
            day_source: day_source.unwrap_or_else(|| DataSource::default_for(Dataset::Day)),
            hour_source: hour_source.unwrap_or_else(|| DataSource::default_for(Dataset::Hour)),
            sidebar_image: sidebar_image.unwrap_or_else(|| DEFAULT_SIDEBAR_IMAGE.to_string()),
            style: style.unwrap_or_default(),
        }
    }

    /// Creates a dashboard from the binary's environment configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - Loaded [`DashboardConfig`]; its sources and sidebar image
    ///   are used, the bind address is left to the caller.
    pub fn from_config(config: &DashboardConfig) -> Self {
        Self::builder()
            .day_source(config.day_source.clone())
            .hour_source(config.hour_source.clone())
            .sidebar_image(config.sidebar_image.clone())
            .build()
    }

    pub fn day_source(&self) -> &DataSource {
        &self.day_source
    }

    pub fn hour_source(&self) -> &DataSource {
        &self.hour_source
    }

    /// Fetches both datasets concurrently and normalizes them.
    ///
    /// # Errors
    ///
    /// Any [`RentalDataError`](crate::RentalDataError) from fetching, parsing
    /// or validating either dataset. A failure in one dataset fails the whole
    /// load.
    pub async fn load(&self) -> Result<DashboardData, DashboardError> {
        let (day_df, hour_df) = tokio::try_join!(
            self.loader.get_frame(Dataset::Day, &self.day_source),
            self.loader.get_frame(Dataset::Hour, &self.hour_source),
        )?;

        let daily = DailyLazyFrame::from_raw(day_df)?;
        let hourly = HourlyLazyFrame::from_raw(hour_df)?;
        let thresholds = daily.temperature_thresholds()?;

        info!(
            "Dashboard data ready: {} days, {} hourly rows, temperature cut points {:.3}/{:.3}",
            daily.height()?,
            hourly.height()?,
            thresholds.low,
            thresholds.high
        );
        Ok(DashboardData {
            daily,
            hourly,
            thresholds,
        })
    }

    /// Builds the page model from already loaded data.
    ///
    /// # Arguments
    ///
    /// * `data` - The bundle returned by [`BikeDashboard::load`].
    ///
    /// # Returns
    ///
    /// A [`DashboardPage`] with the season, monthly, holiday and temperature
    /// tabs, each chart already rendered to SVG.
    ///
    /// # Errors
    ///
    /// A [`DashboardError::Chart`] when a chart has nothing to draw, or a
    /// [`DashboardError::RentalData`] when an aggregation fails.
    pub fn build_page(&self, data: &DashboardData) -> Result<DashboardPage, DashboardError> {
        DashboardPage::build(&data.daily, &data.thresholds, &self.style, &self.sidebar_image)
    }

    /// Runs the full pipeline and returns the page as an HTML document.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use bike_rentals_dashboard::{BikeDashboard, DashboardError};
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), DashboardError> {
    /// let html = BikeDashboard::default().render_page().await?;
    /// assert!(html.starts_with("<!DOCTYPE html>"));
    /// # Ok(())
    /// # }
    /// ```
    pub async fn render_page(&self) -> Result<String, DashboardError> {
        let data = self.load().await?;
        let page = self.build_page(&data)?;
        Ok(page.render_html())
    }
}

impl Default for BikeDashboard {
    fn default() -> Self {
        Self::builder().build()
    }
}
