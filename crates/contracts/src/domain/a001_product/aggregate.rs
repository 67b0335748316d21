use serde::{Deserialize, Serialize};

// ============================================================================
// ID Type
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ProductId(pub u32);

impl ProductId {
    pub fn value(&self) -> u32 {
        self.0
    }
}

// ============================================================================
// Aggregate
// ============================================================================

/// Stocked product shown on the inventory page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    /// Catalogue code such as `#0001`.
    pub code: String,
    #[serde(rename = "type")]
    pub product_type: String,
    /// Preformatted display price, e.g. `$1,241`.
    pub price: String,
    pub qty: u32,
    pub image: String,
}

impl Product {
    pub fn new(
        id: u32,
        name: &str,
        code: &str,
        product_type: &str,
        price: &str,
        qty: u32,
        image: &str,
    ) -> Self {
        Self {
            id: ProductId(id),
            name: name.to_string(),
            code: code.to_string(),
            product_type: product_type.to_string(),
            price: price.to_string(),
            qty,
            image: image.to_string(),
        }
    }
}
