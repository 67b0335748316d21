//! Dashboard landing page: monthly stock movement and fast-moving items.

pub mod dto;

use once_cell::sync::Lazy;

use crate::shared::chart::{
    month_labels, ChartConfig, ChartData, ChartDataset, ChartKind, ChartOptions, Color,
    DatasetStyle, Interaction, Scales,
};
pub use dto::FastMovingItem;

const STOCK_OUT: [f64; 12] = [
    2000.0, 3000.0, 2500.0, 3800.0, 1200.0, 2800.0, 4200.0, 5100.0, 3600.0, 4200.0, 2300.0, 1800.0,
];
const STOCK_IN: [f64; 12] = [
    4000.0, 11000.0, 16000.0, 17000.0, 8000.0, 9000.0, 11000.0, 16000.0, 14000.0, 12000.0,
    15000.0, 10500.0,
];

static FAST_MOVING: Lazy<Vec<FastMovingItem>> = Lazy::new(|| {
    vec![
        FastMovingItem::new("Macbook Pro", "laptop"),
        FastMovingItem::new("iPhone 14 pro", "phone"),
        FastMovingItem::new("Zoom75", "camera"),
        FastMovingItem::new("Airpods Pro", "headphones"),
    ]
});

pub fn fast_moving_items() -> &'static [FastMovingItem] {
    &FAST_MOVING
}

fn stacked(label: &str, data: &[f64], color: &str) -> ChartDataset {
    ChartDataset {
        label: Some(label.to_string()),
        data: data.to_vec(),
        style: DatasetStyle {
            background_color: Some(Color::Single(color.to_string())),
            stack: Some("Stack 0".to_string()),
            ..Default::default()
        },
    }
}

/// Stacked monthly bars, stock out under stock in.
pub fn stock_chart() -> ChartConfig {
    ChartConfig {
        kind: ChartKind::Bar,
        data: ChartData {
            labels: month_labels(),
            datasets: vec![
                stacked("Stock Out", &STOCK_OUT, "rgba(123,97,255,0.85)"),
                stacked("Stock In", &STOCK_IN, "rgba(58,160,255,0.95)"),
            ],
        },
        options: ChartOptions {
            interaction: Some(Interaction {
                mode: "index".to_string(),
                intersect: false,
            }),
            scales: Some(Scales::dashboard(true)),
            ..Default::default()
        },
        compact_y_ticks: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stock_chart_series() {
        let chart = stock_chart();
        assert_eq!(chart.data.labels.len(), 12);
        assert_eq!(chart.data.datasets.len(), 2);
        for dataset in &chart.data.datasets {
            assert_eq!(dataset.data.len(), 12);
            assert_eq!(dataset.style.stack.as_deref(), Some("Stack 0"));
        }
        assert!(!chart.options.plugins.legend.display);
    }

    #[test]
    fn test_stock_chart_json() {
        let value = serde_json::to_value(stock_chart()).unwrap();
        assert_eq!(value["type"], "bar");
        assert_eq!(value["data"]["datasets"][1]["label"], "Stock In");
        assert_eq!(value["data"]["datasets"][1]["backgroundColor"], "rgba(58,160,255,0.95)");
        assert_eq!(value["options"]["interaction"]["mode"], "index");
        assert_eq!(value["options"]["scales"]["y"]["stacked"], true);
    }

    #[test]
    fn test_fast_moving_items() {
        let names: Vec<&str> = fast_moving_items().iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["Macbook Pro", "iPhone 14 pro", "Zoom75", "Airpods Pro"]);
    }
}
