//! Monthly rentals line chart implementation

use crate::analysis::aggregates::MonthlyTotal;
use crate::charts::{categorical_label, padded_max, ChartError, ChartRenderer, ChartStyle};
use log::debug;
use plotters::prelude::*;

/// Line chart of monthly rental totals, one point per month.
#[derive(Debug, Clone)]
pub struct MonthlyLineChart {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub data: Vec<MonthlyTotal>,
    /// Whether to mark each month with a circle
    pub show_data_points: bool,
}

impl MonthlyLineChart {
    pub fn new(data: Vec<MonthlyTotal>) -> Self {
        Self {
            title: "Monthly Bike Rental Pattern".to_string(),
            x_label: "Month".to_string(),
            y_label: "Number of Bike Rentals".to_string(),
            data,
            show_data_points: true,
        }
    }

    fn points(&self) -> Vec<(f64, f64)> {
        self.data
            .iter()
            .enumerate()
            .map(|(i, m)| (i as f64, m.total as f64))
            .collect()
    }
}

impl ChartRenderer for MonthlyLineChart {
    fn render_svg(&self, style: &ChartStyle) -> Result<String, ChartError> {
        if self.data.is_empty() {
            return Err(ChartError::NoData("monthly line"));
        }

        let labels: Vec<String> = self.data.iter().map(MonthlyTotal::label).collect();
        let points = self.points();
        let y_max = padded_max(points.iter().map(|(_, y)| *y).fold(0.0, f64::max));
        let color = style.color(0);

        let mut svg = String::new();
        {
            let root = SVGBackend::with_string(&mut svg, (style.width, style.height))
                .into_drawing_area();
            root.fill(&style.background)?;

            let mut chart = ChartBuilder::on(&root)
                .caption(&self.title, style.title_font())
                .margin(style.margin)
                .x_label_area_size(60)
                .y_label_area_size(90)
                .build_cartesian_2d(-0.5f64..(points.len() as f64 - 0.5), 0f64..y_max)?;

            chart.plotting_area().fill(&style.plot_background)?;
            chart
                .configure_mesh()
                .bold_line_style(style.grid.stroke_width(1))
                .max_light_lines(0)
                .x_labels(labels.len().min(12))
                .x_label_formatter(&|x| categorical_label(&labels, *x))
                .y_label_formatter(&|y| format!("{:.0}", y))
                .x_desc(self.x_label.as_str())
                .y_desc(self.y_label.as_str())
                .label_style(style.label_font())
                .axis_desc_style(style.label_font())
                .draw()?;

            chart.draw_series(LineSeries::new(points.clone(), color.stroke_width(2)))?;

            if self.show_data_points {
                chart.draw_series(
                    points
                        .iter()
                        .map(|&(x, y)| Circle::new((x, y), 4, color.filled())),
                )?;
            }

            root.present()?;
        }
        debug!("Rendered monthly line chart ({} months)", self.data.len());
        Ok(svg)
    }
}
