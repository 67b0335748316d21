//! Chart payloads in the shape the browser charting library expects.
//!
//! These types only describe *what* to draw. Layout, scaling and painting
//! stay inside the library; the frontend hands a serialised [`ChartConfig`]
//! to its constructor and keeps the returned handle for `resize()`.

use serde::Serialize;

pub const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Bar,
    Line,
    Doughnut,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartConfig {
    #[serde(rename = "type")]
    pub kind: ChartKind,
    pub data: ChartData,
    pub options: ChartOptions,
    /// Format y-axis ticks with [`format_compact_tick`]. Tick callbacks are
    /// functions on the JS side, so the adapter installs this one itself.
    #[serde(skip)]
    pub compact_y_ticks: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub datasets: Vec<ChartDataset>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartDataset {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    pub data: Vec<f64>,
    #[serde(flatten)]
    pub style: DatasetStyle,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DatasetStyle {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stack: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tension: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub point_radius: Option<u32>,
}

/// One colour for the whole dataset, or one per data point.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Color {
    Single(String),
    PerPoint(Vec<String>),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartOptions {
    pub responsive: bool,
    pub maintain_aspect_ratio: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interaction: Option<Interaction>,
    pub plugins: Plugins,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scales: Option<Scales>,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            responsive: true,
            maintain_aspect_ratio: false,
            interaction: None,
            plugins: Plugins::default(),
            scales: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Interaction {
    pub mode: String,
    pub intersect: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Plugins {
    pub legend: Legend,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Legend {
    pub display: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Scales {
    pub x: Axis,
    pub y: Axis,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Axis {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stacked: Option<bool>,
    pub grid: Grid,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Grid {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl Scales {
    /// Hidden vertical grid lines, light horizontal ones.
    pub fn dashboard(stacked: bool) -> Self {
        let stacked = stacked.then_some(true);
        Self {
            x: Axis {
                stacked,
                grid: Grid {
                    display: Some(false),
                    color: None,
                },
            },
            y: Axis {
                stacked,
                grid: Grid {
                    display: None,
                    color: Some("#f0f3f7".to_string()),
                },
            },
        }
    }
}

pub fn month_labels() -> Vec<String> {
    MONTHS.iter().map(|m| m.to_string()).collect()
}

/// `11000 -> "11k"`, `2500 -> "2.5k"`, values below 1000 unchanged.
pub fn format_compact_tick(value: f64) -> String {
    if value >= 1000.0 {
        format!("{}k", value / 1000.0)
    } else {
        format!("{}", value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_format_compact_tick() {
        assert_eq!(format_compact_tick(0.0), "0");
        assert_eq!(format_compact_tick(800.0), "800");
        assert_eq!(format_compact_tick(1000.0), "1k");
        assert_eq!(format_compact_tick(2500.0), "2.5k");
        assert_eq!(format_compact_tick(11000.0), "11k");
    }

    #[test]
    fn test_serialized_shape() {
        let config = ChartConfig {
            kind: ChartKind::Doughnut,
            data: ChartData {
                labels: vec!["A".into(), "B".into()],
                datasets: vec![ChartDataset {
                    label: None,
                    data: vec![1.0, 2.0],
                    style: DatasetStyle {
                        background_color: Some(Color::PerPoint(vec!["#fff".into(), "#000".into()])),
                        ..Default::default()
                    },
                }],
            },
            options: ChartOptions::default(),
            compact_y_ticks: true,
        };

        let value = serde_json::to_value(&config).unwrap();
        assert_eq!(
            value,
            json!({
                "type": "doughnut",
                "data": {
                    "labels": ["A", "B"],
                    "datasets": [{ "data": [1.0, 2.0], "backgroundColor": ["#fff", "#000"] }]
                },
                "options": {
                    "responsive": true,
                    "maintainAspectRatio": false,
                    "plugins": { "legend": { "display": false } }
                }
            })
        );
    }

    #[test]
    fn test_dashboard_scales() {
        let value = serde_json::to_value(Scales::dashboard(true)).unwrap();
        assert_eq!(value["x"]["stacked"], json!(true));
        assert_eq!(value["x"]["grid"]["display"], json!(false));
        assert_eq!(value["y"]["grid"]["color"], json!("#f0f3f7"));

        let flat = serde_json::to_value(Scales::dashboard(false)).unwrap();
        assert!(flat["x"].get("stacked").is_none());
    }
}
