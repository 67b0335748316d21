use serde::{Deserialize, Serialize};

/// Right-rail entry on the dashboard page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FastMovingItem {
    pub name: String,
    /// Icon key understood by the frontend icon set.
    pub icon: String,
}

impl FastMovingItem {
    pub fn new(name: &str, icon: &str) -> Self {
        Self {
            name: name.to_string(),
            icon: icon.to_string(),
        }
    }
}
