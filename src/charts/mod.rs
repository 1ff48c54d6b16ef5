//! SVG chart rendering for the dashboard tabs.

pub mod bar;
pub mod boxplot;
pub mod line;

use plotters::drawing::DrawingAreaErrorKind;
use plotters::style::RGBColor;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("No data available for the {0} chart")]
    NoData(&'static str),

    #[error("Failed to draw chart: {0}")]
    Drawing(String),
}

impl<E: std::error::Error + Send + Sync> From<DrawingAreaErrorKind<E>> for ChartError {
    fn from(err: DrawingAreaErrorKind<E>) -> Self {
        ChartError::Drawing(err.to_string())
    }
}

/// Something that can be drawn as a standalone SVG document.
pub trait ChartRenderer {
    /// Renders the chart into an SVG string.
    fn render_svg(&self, style: &ChartStyle) -> Result<String, ChartError>;
}

/// Size, palette and fonts shared by every chart on the page.
///
/// The default mimics a dark-grid look: a grey-blue plotting area with white
/// grid lines on a white canvas.
#[derive(Debug, Clone)]
pub struct ChartStyle {
    pub width: u32,
    pub height: u32,
    pub margin: u32,
    pub background: RGBColor,
    pub plot_background: RGBColor,
    pub grid: RGBColor,
    pub text: RGBColor,
    pub palette: Vec<RGBColor>,
    pub font_family: &'static str,
    pub title_size: u32,
    pub label_size: u32,
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            width: 1000,
            height: 600,
            margin: 20,
            background: RGBColor(255, 255, 255),
            plot_background: RGBColor(234, 234, 242),
            grid: RGBColor(255, 255, 255),
            text: RGBColor(38, 38, 38),
            palette: vec![
                RGBColor(76, 114, 176),  // Blue
                RGBColor(221, 132, 82),  // Orange
                RGBColor(85, 168, 104),  // Green
                RGBColor(196, 78, 82),   // Red
                RGBColor(129, 114, 179), // Purple
                RGBColor(147, 120, 96),  // Brown
            ],
            font_family: "sans-serif",
            title_size: 22,
            label_size: 15,
        }
    }
}

impl ChartStyle {
    /// Palette colour for the `index`-th series, cycling when exhausted.
    pub fn color(&self, index: usize) -> RGBColor {
        if self.palette.is_empty() {
            return self.text;
        }
        self.palette[index % self.palette.len()]
    }

    pub(crate) fn title_font(&self) -> (&'static str, u32) {
        (self.font_family, self.title_size)
    }

    pub(crate) fn label_font(&self) -> (&'static str, u32) {
        (self.font_family, self.label_size)
    }
}

/// Tick label for a categorical axis laid out at integer positions `0..labels.len()`.
/// Non-integer ticks get an empty label.
pub(crate) fn categorical_label(labels: &[String], x: f64) -> String {
    let nearest = x.round();
    if (x - nearest).abs() > 1e-6 || nearest < 0.0 {
        return String::new();
    }
    labels.get(nearest as usize).cloned().unwrap_or_default()
}

/// Upper bound for a value axis starting at zero, with 10% headroom.
pub(crate) fn padded_max(max: f64) -> f64 {
    if max.is_finite() && max > 0.0 {
        max * 1.1
    } else {
        1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_categorical_label() {
        let labels = vec!["Spring".to_string(), "Summer".to_string()];
        assert_eq!(categorical_label(&labels, 0.0), "Spring");
        assert_eq!(categorical_label(&labels, 1.0000000001), "Summer");
        assert_eq!(categorical_label(&labels, 0.5), "");
        assert_eq!(categorical_label(&labels, 2.0), "");
        assert_eq!(categorical_label(&labels, -1.0), "");
    }

    #[test]
    fn test_palette_cycles() {
        let style = ChartStyle::default();
        assert_eq!(style.color(0), style.color(style.palette.len()));
    }

    #[test]
    fn test_padded_max() {
        assert_eq!(padded_max(0.0), 1.0);
        assert!((padded_max(100.0) - 110.0).abs() < 1e-9);
        assert_eq!(padded_max(f64::NAN), 1.0);
    }
}
