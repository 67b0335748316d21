use serde::{Deserialize, Serialize};

// ============================================================================
// ID Type
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SaleOrderId(pub u32);

impl SaleOrderId {
    pub fn value(&self) -> u32 {
        self.0
    }
}

// ============================================================================
// Aggregate
// ============================================================================

/// Order line on the sales page.
///
/// `code` is not checked against the product list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaleOrder {
    pub id: SaleOrderId,
    pub product: String,
    pub code: String,
    pub category: String,
    pub quantity: u32,
    /// Preformatted display total, e.g. `$2,998`.
    pub total: String,
}

impl SaleOrder {
    pub fn new(id: u32, product: &str, code: &str, category: &str, quantity: u32, total: &str) -> Self {
        Self {
            id: SaleOrderId(id),
            product: product.to_string(),
            code: code.to_string(),
            category: category.to_string(),
            quantity,
            total: total.to_string(),
        }
    }
}
