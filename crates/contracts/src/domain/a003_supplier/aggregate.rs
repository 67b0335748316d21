use serde::{Deserialize, Serialize};

// ============================================================================
// ID Type
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SupplierId(pub u32);

impl SupplierId {
    pub fn value(&self) -> u32 {
        self.0
    }
}

// ============================================================================
// Aggregate
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Supplier {
    pub id: SupplierId,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub logo: String,
    /// Share of purchases in percent, 0..=100.
    pub share: u8,
}

impl Supplier {
    pub fn new(id: u32, name: &str, email: &str, phone: &str, logo: &str, share: u8) -> Self {
        Self {
            id: SupplierId(id),
            name: name.to_string(),
            email: email.to_string(),
            phone: phone.to_string(),
            logo: logo.to_string(),
            share: share.min(100),
        }
    }
}
