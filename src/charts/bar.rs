//! Vertical bar chart, used for mean rentals per season.

use crate::analysis::aggregates::SeasonMean;
use crate::charts::{categorical_label, padded_max, ChartError, ChartRenderer, ChartStyle};
use log::debug;
use plotters::prelude::*;

/// Bar chart with one bar per category.
#[derive(Debug, Clone)]
pub struct BarChart {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub bars: Vec<(String, f64)>,
    /// Fraction of each category slot covered by its bar.
    pub bar_width: f64,
}

impl BarChart {
    pub fn new(title: &str, x_label: &str, y_label: &str) -> Self {
        Self {
            title: title.to_string(),
            x_label: x_label.to_string(),
            y_label: y_label.to_string(),
            bars: Vec::new(),
            bar_width: 0.8,
        }
    }

    pub fn add_bar(&mut self, label: impl Into<String>, value: f64) {
        if value.is_finite() {
            self.bars.push((label.into(), value));
        }
    }

    /// Mean daily rentals per season, one bar per season.
    pub fn from_season_means(means: &[SeasonMean]) -> Self {
        let mut chart = Self::new(
            "Average Bike Rentals by Season",
            "Season",
            "Average Number of Bike Rentals",
        );
        for mean in means {
            chart.add_bar(mean.season.label(), mean.mean_count);
        }
        chart
    }
}

impl ChartRenderer for BarChart {
    fn render_svg(&self, style: &ChartStyle) -> Result<String, ChartError> {
        if self.bars.is_empty() {
            return Err(ChartError::NoData("bar"));
        }

        let labels: Vec<String> = self.bars.iter().map(|(label, _)| label.clone()).collect();
        let y_max = padded_max(self.bars.iter().map(|(_, v)| *v).fold(0.0, f64::max));
        let half = self.bar_width / 2.0;

        let mut svg = String::new();
        {
            let root = SVGBackend::with_string(&mut svg, (style.width, style.height))
                .into_drawing_area();
            root.fill(&style.background)?;

            let mut chart = ChartBuilder::on(&root)
                .caption(&self.title, style.title_font())
                .margin(style.margin)
                .x_label_area_size(50)
                .y_label_area_size(80)
                .build_cartesian_2d(-0.5f64..(self.bars.len() as f64 - 0.5), 0f64..y_max)?;

            chart.plotting_area().fill(&style.plot_background)?;
            chart
                .configure_mesh()
                .disable_x_mesh()
                .bold_line_style(style.grid.stroke_width(1))
                .max_light_lines(0)
                .x_labels(self.bars.len())
                .x_label_formatter(&|x| categorical_label(&labels, *x))
                .y_label_formatter(&|y| format!("{:.0}", y))
                .x_desc(self.x_label.as_str())
                .y_desc(self.y_label.as_str())
                .label_style(style.label_font())
                .axis_desc_style(style.label_font())
                .draw()?;

            chart.draw_series(self.bars.iter().enumerate().map(|(i, (_, value))| {
                let x = i as f64;
                Rectangle::new([(x - half, 0.0), (x + half, *value)], style.color(i).filled())
            }))?;

            root.present()?;
        }
        debug!("Rendered bar chart '{}' ({} bars)", self.title, self.bars.len());
        Ok(svg)
    }
}
