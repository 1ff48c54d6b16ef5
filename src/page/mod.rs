//! Page layout: title, sidebar and a tab strip with one chart per tab.

pub mod content;

use crate::analysis::temperature::TemperatureThresholds;
use crate::charts::bar::BarChart;
use crate::charts::boxplot::BoxPlotChart;
use crate::charts::line::MonthlyLineChart;
use crate::charts::{ChartRenderer, ChartStyle};
use crate::error::DashboardError;
use crate::types::frames::daily_frame::DailyLazyFrame;
use content::*;

#[derive(Debug, Clone, PartialEq)]
pub struct Sidebar {
    pub image_url: String,
    pub text: String,
}

/// One entry of the tab strip.
#[derive(Debug, Clone, PartialEq)]
pub struct Tab {
    pub label: String,
    pub header: String,
    /// Standalone `<svg>` document, embedded as is.
    pub chart_svg: String,
    pub explanation: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardPage {
    pub title: String,
    pub sidebar: Sidebar,
    pub tabs: Vec<Tab>,
}

impl DashboardPage {
    /// Runs every tab's aggregation and renders its chart, in tab order:
    /// season, monthly, holiday, temperature.
    pub fn build(
        daily: &DailyLazyFrame,
        thresholds: &TemperatureThresholds,
        style: &ChartStyle,
        sidebar_image: &str,
    ) -> Result<Self, DashboardError> {
        let season_chart = BarChart::from_season_means(&daily.season_means()?);
        let monthly_chart = MonthlyLineChart::new(daily.monthly_totals()?);
        let holiday_chart = BoxPlotChart::new(HOLIDAY_CHART_TITLE, HOLIDAY_AXIS, COUNT_AXIS)
            .with_distributions(&daily.holiday_distributions()?);
        let temperature_chart =
            BoxPlotChart::new(TEMPERATURE_CHART_TITLE, TEMPERATURE_AXIS, COUNT_AXIS)
                .with_distributions(&daily.temperature_distributions(thresholds)?);

        let tabs = vec![
            Tab::new("Season", SEASON_HEADER, &season_chart, style, SEASON_EXPLANATION)?,
            Tab::new("Monthly", MONTHLY_HEADER, &monthly_chart, style, MONTHLY_EXPLANATION)?,
            Tab::new("Holiday", HOLIDAY_HEADER, &holiday_chart, style, HOLIDAY_EXPLANATION)?,
            Tab::new(
                "Temperature",
                TEMPERATURE_HEADER,
                &temperature_chart,
                style,
                TEMPERATURE_EXPLANATION,
            )?,
        ];

        Ok(Self {
            title: PAGE_TITLE.to_string(),
            sidebar: Sidebar {
                image_url: sidebar_image.to_string(),
                text: SIDEBAR_TEXT.to_string(),
            },
            tabs,
        })
    }

    /// Renders the page as a self-contained HTML document. Tabs switch with
    /// CSS only; the first tab is selected initially.
    pub fn render_html(&self) -> String {
        let mut html = String::with_capacity(
            4096 + self.tabs.iter().map(|t| t.chart_svg.len()).sum::<usize>(),
        );
        html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n");
        html.push_str(&format!("<title>{}</title>\n", escape_html(&self.title)));
        html.push_str(&format!("<style>\n{}{}</style>\n", BASE_CSS, self.tab_css()));
        html.push_str("</head>\n<body>\n");

        html.push_str("<aside class=\"sidebar\">\n");
        html.push_str(&format!(
            "<img src=\"{}\" alt=\"Bike rental logo\">\n<p>{}</p>\n",
            escape_html(&self.sidebar.image_url),
            escape_html(&self.sidebar.text)
        ));
        html.push_str("</aside>\n<main>\n");
        html.push_str(&format!("<h1>{}</h1>\n<div class=\"tabs\">\n", escape_html(&self.title)));

        for (i, _) in self.tabs.iter().enumerate() {
            html.push_str(&format!(
                "<input type=\"radio\" name=\"tab\" id=\"tab-{i}\"{}>\n",
                if i == 0 { " checked" } else { "" }
            ));
        }
        html.push_str("<nav>\n");
        for (i, tab) in self.tabs.iter().enumerate() {
            html.push_str(&format!(
                "<label for=\"tab-{i}\">{}</label>\n",
                escape_html(&tab.label)
            ));
        }
        html.push_str("</nav>\n");
        for (i, tab) in self.tabs.iter().enumerate() {
            html.push_str(&format!(
                "<section class=\"panel\" id=\"panel-{i}\">\n<h2>{}</h2>\n<div class=\"chart\">{}</div>\n\
                 <details>\n<summary>{}</summary>\n<p>{}</p>\n</details>\n</section>\n",
                escape_html(&tab.header),
                tab.chart_svg,
                EXPLANATION_SUMMARY,
                escape_html(&tab.explanation)
            ));
        }

        html.push_str("</div>\n</main>\n</body>\n</html>\n");
        html
    }

    fn tab_css(&self) -> String {
        (0..self.tabs.len())
            .map(|i| {
                format!(
                    "#tab-{i}:checked ~ #panel-{i} {{ display: block; }}\n\
                     #tab-{i}:checked ~ nav label[for=\"tab-{i}\"] {{ border-bottom-color: #ff4b4b; color: #ff4b4b; }}\n"
                )
            })
            .collect()
    }
}

impl Tab {
    fn new(
        label: &str,
        header: &str,
        chart: &dyn ChartRenderer,
        style: &ChartStyle,
        explanation: &str,
    ) -> Result<Self, DashboardError> {
        Ok(Self {
            label: label.to_string(),
            header: header.to_string(),
            chart_svg: chart.render_svg(style)?,
            explanation: explanation.to_string(),
        })
    }
}

const BASE_CSS: &str = "\
body { margin: 0; display: flex; font-family: sans-serif; color: #262730; }
.sidebar { width: 18rem; min-height: 100vh; padding: 1.5rem; background: #f0f2f6; box-sizing: border-box; }
.sidebar img { width: 100%; }
main { flex: 1; padding: 1.5rem 3rem; }
.tabs > input { display: none; }
.tabs nav { display: flex; gap: 1.5rem; border-bottom: 1px solid #e6e6e6; }
.tabs nav label { padding: 0.5rem 0; cursor: pointer; border-bottom: 2px solid transparent; }
.panel { display: none; }
.chart svg { max-width: 100%; height: auto; }
details { margin-top: 1rem; border: 1px solid #e6e6e6; border-radius: 0.5rem; padding: 0.5rem 1rem; }
summary { cursor: pointer; }
";

/// Escapes text for use in HTML element content and quoted attributes.
///
/// # Examples
///
/// ```
/// use bike_rentals_dashboard::escape_html;
///
/// assert_eq!(escape_html("<b>\"Fall\" & 'Winter'</b>"),
///            "&lt;b&gt;&quot;Fall&quot; &amp; &#39;Winter&#39;&lt;/b&gt;");
/// ```
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
