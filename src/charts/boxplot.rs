//! Box plot of rental count distributions, one box per group.

use crate::analysis::aggregates::GroupDistribution;
use crate::analysis::stats::BoxStats;
use crate::charts::{categorical_label, padded_max, ChartError, ChartRenderer, ChartStyle};
use log::debug;
use plotters::prelude::*;

#[derive(Debug, Clone)]
pub struct BoxPlotChart {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    /// One entry per group; `None` stats leave an empty slot on the axis.
    pub groups: Vec<(String, Option<BoxStats>)>,
    pub box_width: f64,
}

impl BoxPlotChart {
    pub fn new(title: &str, x_label: &str, y_label: &str) -> Self {
        Self {
            title: title.to_string(),
            x_label: x_label.to_string(),
            y_label: y_label.to_string(),
            groups: Vec::new(),
            box_width: 0.6,
        }
    }

    pub fn with_distributions(mut self, distributions: &[GroupDistribution]) -> Self {
        self.groups = distributions
            .iter()
            .map(|d| (d.label.clone(), d.box_stats()))
            .collect();
        self
    }

    fn value_range(&self) -> Option<(f64, f64)> {
        let (mut low, mut high) = (f64::INFINITY, f64::NEG_INFINITY);
        for stats in self.groups.iter().filter_map(|(_, s)| s.as_ref()) {
            low = low.min(stats.min);
            high = high.max(stats.max);
        }
        (low <= high).then_some((low, high))
    }
}

impl ChartRenderer for BoxPlotChart {
    fn render_svg(&self, style: &ChartStyle) -> Result<String, ChartError> {
        let (low, high) = self.value_range().ok_or(ChartError::NoData("box plot"))?;
        let y_min = if low >= 0.0 { 0.0 } else { low * 1.1 };
        let y_max = padded_max(high);

        let labels: Vec<String> = self.groups.iter().map(|(label, _)| label.clone()).collect();
        let boxes: Vec<(f64, &BoxStats, RGBColor)> = self
            .groups
            .iter()
            .enumerate()
            .filter_map(|(i, (_, stats))| Some((i as f64, stats.as_ref()?, style.color(i))))
            .collect();
        let half = self.box_width / 2.0;
        let cap = half / 2.0;
        let edge = style.text.stroke_width(1);

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
                .build_cartesian_2d(-0.5f64..(self.groups.len() as f64 - 0.5), y_min..y_max)?;

            chart.plotting_area().fill(&style.plot_background)?;
            chart
                .configure_mesh()
                .disable_x_mesh()
                .bold_line_style(style.grid.stroke_width(1))
                .max_light_lines(0)
                .x_labels(self.groups.len())
                .x_label_formatter(&|x| categorical_label(&labels, *x))
                .y_label_formatter(&|y| format!("{:.0}", y))
                .x_desc(self.x_label.as_str())
                .y_desc(self.y_label.as_str())
                .label_style(style.label_font())
                .axis_desc_style(style.label_font())
                .draw()?;

            // Whiskers, drawn first so the box covers their inner ends
            chart.draw_series(boxes.iter().flat_map(|&(x, s, _)| {
                [
                    PathElement::new(vec![(x, s.whisker_low), (x, s.q1)], edge),
                    PathElement::new(vec![(x, s.q3), (x, s.whisker_high)], edge),
                    PathElement::new(vec![(x - cap, s.whisker_low), (x + cap, s.whisker_low)], edge),
                    PathElement::new(vec![(x - cap, s.whisker_high), (x + cap, s.whisker_high)], edge),
                ]
            }))?;

            chart.draw_series(boxes.iter().map(|&(x, s, color)| {
                Rectangle::new([(x - half, s.q1), (x + half, s.q3)], color.filled())
            }))?;
            chart.draw_series(boxes.iter().map(|&(x, s, _)| {
                Rectangle::new([(x - half, s.q1), (x + half, s.q3)], edge)
            }))?;

            chart.draw_series(boxes.iter().map(|&(x, s, _)| {
                PathElement::new(vec![(x - half, s.median), (x + half, s.median)], style.text.stroke_width(2))
            }))?;

            chart.draw_series(boxes.iter().flat_map(|&(x, s, _)| {
                s.outliers
                    .iter()
                    .map(move |&y| Circle::new((x, y), 3, edge))
            }))?;

            root.present()?;
        }
        debug!(
            "Rendered box plot '{}' ({} groups, {} drawn)",
            self.title,
            self.groups.len(),
            boxes.len()
        );
        Ok(svg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn holiday_groups() -> Vec<GroupDistribution> {
        vec![
            GroupDistribution::new("Working day", vec![3000.0, 4000.0, 4500.0, 5000.0, 9000.0]),
            GroupDistribution::new("Holiday", vec![1000.0, 3500.0, 6000.0]),
        ]
    }

    #[test]
    fn test_with_distributions_computes_stats() {
        let chart = BoxPlotChart::new("t", "x", "y").with_distributions(&holiday_groups());

        assert_eq!(chart.groups.len(), 2);
        let working = chart.groups[0].1.as_ref().unwrap();
        assert_eq!(working.median, 4500.0);
        assert_eq!(working.outliers, vec![9000.0]);
    }

    #[test]
    fn test_empty_group_keeps_its_slot() {
        let groups = vec![
            GroupDistribution::new("Low", vec![1.0, 2.0]),
            GroupDistribution::new("Medium", Vec::new()),
        ];
        let chart = BoxPlotChart::new("t", "x", "y").with_distributions(&groups);

        assert_eq!(chart.groups.len(), 2);
        assert!(chart.groups[1].1.is_none());
        assert!(chart.render_svg(&ChartStyle::default()).is_ok());
    }

    #[test]
    fn test_render_svg() -> Result<(), ChartError> {
        let chart = BoxPlotChart::new("Effect of Holidays on Bike Rentals", "Day type", "Rentals")
            .with_distributions(&holiday_groups());
        let svg = chart.render_svg(&ChartStyle::default())?;

        assert!(svg.contains("Effect of Holidays on Bike Rentals"));
        assert!(svg.contains("<rect"));
        assert!(svg.contains("<circle"));
        Ok(())
    }

    #[test]
    fn test_all_groups_empty_is_error() {
        let chart = BoxPlotChart::new("t", "x", "y")
            .with_distributions(&[GroupDistribution::new("Holiday", Vec::new())]);
        assert!(matches!(
            chart.render_svg(&ChartStyle::default()),
            Err(ChartError::NoData(_))
        ));
    }
}
