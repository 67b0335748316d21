//! Sales page widgets: channel revenue chart and recent orders feed.

pub mod dto;

use once_cell::sync::Lazy;

use crate::shared::chart::{
    month_labels, ChartConfig, ChartData, ChartDataset, ChartKind, ChartOptions, Color,
    DatasetStyle, Legend, Plugins, Scales,
};
pub use dto::SalesActivityEntry;

const DIRECT: [f64; 12] = [
    8000.0, 12000.0, 9000.0, 15000.0, 8000.0, 11000.0, 14000.0, 9000.0, 16000.0, 10000.0,
    20000.0, 22000.0,
];
const RETAIL: [f64; 12] = [
    5000.0, 8000.0, 7000.0, 9000.0, 6500.0, 7000.0, 8000.0, 6000.0, 12000.0, 8000.0, 9000.0,
    10000.0,
];
const WHOLESALE: [f64; 12] = [
    6000.0, 6500.0, 7000.0, 8000.0, 7200.0, 6800.0, 7500.0, 14000.0, 11000.0, 9500.0, 12000.0,
    15000.0,
];

static RECENT_SALES: Lazy<Vec<SalesActivityEntry>> = Lazy::new(|| {
    vec![
        SalesActivityEntry::new("Ordered 11 Products", "Grace Moreta", "1 m ago"),
        SalesActivityEntry::new("Ordered 24 Products", "Allison Siphron", "12 m ago"),
        SalesActivityEntry::new("Ordered 4 Products", "Makenna Doman", "23 m ago"),
        SalesActivityEntry::new("Ordered 24 Products", "Makenna Doman", "42 m ago"),
        SalesActivityEntry::new("Ordered 16 Products", "Ahmad Vetrovs", "2 h ago"),
    ]
});

pub fn recent_sales() -> &'static [SalesActivityEntry] {
    &RECENT_SALES
}

/// `rgb` is the bare `r,g,b` triple; the fill uses it at 6% opacity.
fn channel(label: &str, data: &[f64], rgb: &str) -> ChartDataset {
    ChartDataset {
        label: Some(label.to_string()),
        data: data.to_vec(),
        style: DatasetStyle {
            border_color: Some(format!("rgba({},1)", rgb)),
            background_color: Some(Color::Single(format!("rgba({},0.06)", rgb))),
            tension: Some(0.32),
            point_radius: Some(3),
            ..Default::default()
        },
    }
}

pub fn sales_chart() -> ChartConfig {
    ChartConfig {
        kind: ChartKind::Line,
        data: ChartData {
            labels: month_labels(),
            datasets: vec![
                channel("Direct Sales", &DIRECT, "58,160,255"),
                channel("Retail", &RETAIL, "123,97,255"),
                channel("Wholesale", &WHOLESALE, "219,50,111"),
            ],
        },
        options: ChartOptions {
            plugins: Plugins {
                legend: Legend {
                    display: true,
                    position: Some("top".to_string()),
                },
            },
            scales: Some(Scales::dashboard(false)),
            ..Default::default()
        },
        compact_y_ticks: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sales_chart_json() {
        let value = serde_json::to_value(sales_chart()).unwrap();
        assert_eq!(value["type"], "line");
        assert_eq!(value["data"]["datasets"].as_array().map(|d| d.len()), Some(3));
        assert_eq!(value["data"]["datasets"][2]["borderColor"], "rgba(219,50,111,1)");
        assert_eq!(value["data"]["datasets"][0]["backgroundColor"], "rgba(58,160,255,0.06)");
        assert_eq!(value["data"]["datasets"][0]["pointRadius"], 3);
        assert_eq!(value["options"]["plugins"]["legend"]["position"], "top");
    }

    #[test]
    fn test_recent_sales() {
        assert_eq!(recent_sales().len(), 5);
        assert_eq!(recent_sales()[4].actor, "Ahmad Vetrovs");
    }
}
