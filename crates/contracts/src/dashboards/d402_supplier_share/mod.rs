//! Top suppliers doughnut and its legend list.

use serde::{Deserialize, Serialize};

use crate::domain::a003_supplier::{top_by_share, Supplier};
use crate::shared::chart::{
    ChartConfig, ChartData, ChartDataset, ChartKind, ChartOptions, Color, DatasetStyle,
};

pub const TOP_SUPPLIERS: usize = 4;

pub const PALETTE: [&str; TOP_SUPPLIERS] = ["#3aa0ff", "#ef3b83", "#59c24a", "#7b61ff"];

/// One legend line: supplier, share and the slice colour.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupplierShare {
    pub name: String,
    pub share: u8,
    pub color: String,
}

impl SupplierShare {
    pub fn percent_label(&self) -> String {
        format!("{}%", self.share)
    }
}

/// Largest suppliers by share, coloured in palette order.
pub fn top_supplier_shares(suppliers: &[Supplier]) -> Vec<SupplierShare> {
    top_by_share(suppliers, TOP_SUPPLIERS)
        .into_iter()
        .zip(PALETTE)
        .map(|(supplier, color)| SupplierShare {
            name: supplier.name.clone(),
            share: supplier.share,
            color: color.to_string(),
        })
        .collect()
}

pub fn supplier_share_chart(shares: &[SupplierShare]) -> ChartConfig {
    ChartConfig {
        kind: ChartKind::Doughnut,
        data: ChartData {
            labels: shares.iter().map(|s| s.name.clone()).collect(),
            datasets: vec![ChartDataset {
                label: None,
                data: shares.iter().map(|s| f64::from(s.share)).collect(),
                style: DatasetStyle {
                    background_color: Some(Color::PerPoint(
                        shares.iter().map(|s| s.color.clone()).collect(),
                    )),
                    ..Default::default()
                },
            }],
        },
        options: ChartOptions::default(),
        compact_y_ticks: false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a003_supplier::suppliers;

    #[test]
    fn test_top_supplier_shares() {
        let shares = top_supplier_shares(suppliers());
        let legend: Vec<(String, String, String)> = shares
            .iter()
            .map(|s| (s.name.clone(), s.percent_label(), s.color.clone()))
            .collect();
        assert_eq!(
            legend,
            vec![
                ("Apple".to_string(), "61%".to_string(), "#3aa0ff".to_string()),
                ("Samsung".to_string(), "15%".to_string(), "#ef3b83".to_string()),
                ("Mugna Tech".to_string(), "11%".to_string(), "#59c24a".to_string()),
                ("Logitech".to_string(), "5%".to_string(), "#7b61ff".to_string()),
            ]
        );
    }

    #[test]
    fn test_supplier_share_chart() {
        let chart = supplier_share_chart(&top_supplier_shares(suppliers()));
        let value = serde_json::to_value(&chart).unwrap();
        assert_eq!(value["type"], "doughnut");
        assert_eq!(
            value["data"]["labels"],
            serde_json::json!(["Apple", "Samsung", "Mugna Tech", "Logitech"])
        );
        assert_eq!(
            value["data"]["datasets"][0]["data"],
            serde_json::json!([61.0, 15.0, 11.0, 5.0])
        );
        assert_eq!(value["data"]["datasets"][0]["backgroundColor"][3], "#7b61ff");
        assert!(!chart.compact_y_ticks);
    }
}
