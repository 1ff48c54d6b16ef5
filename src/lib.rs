mod analysis;
mod charts;
pub mod config;
mod dashboard;
mod error;
mod page;
mod rental_data;
pub mod server;
mod types;

pub use config::{ConfigError, DashboardConfig};
pub use dashboard::*;
pub use error::DashboardError;

pub use analysis::aggregates::*;
pub use analysis::stats::*;
pub use analysis::temperature::*;

pub use charts::bar::BarChart;
pub use charts::boxplot::BoxPlotChart;
pub use charts::line::MonthlyLineChart;
pub use charts::{ChartError, ChartRenderer, ChartStyle};

pub use page::content;
pub use page::{escape_html, DashboardPage, Sidebar, Tab};

pub use rental_data::data_loader::RentalDataLoader;
pub use rental_data::error::RentalDataError;

pub use types::dataset::{DataSource, Dataset};
pub use types::records::{DailyRecord, HourlyRecord};
pub use types::season::Season;
pub use types::temperature_category::TemperatureCategory;

pub use types::frames::daily_frame::*;
pub use types::frames::hourly_frame::*;
