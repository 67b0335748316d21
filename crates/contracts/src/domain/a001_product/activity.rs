use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// Entry of the inventory "Recent Activity" rail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityEntry {
    pub text: String,
    /// Product and relative time, e.g. `Macbook Pro • 1m ago`.
    pub detail: String,
    pub thumb: String,
}

impl ActivityEntry {
    fn new(text: &str, detail: &str, thumb: &str) -> Self {
        Self {
            text: text.to_string(),
            detail: detail.to_string(),
            thumb: thumb.to_string(),
        }
    }
}

static RECENT: Lazy<Vec<ActivityEntry>> = Lazy::new(|| {
    vec![
        ActivityEntry::new("Restocked 6 Products", "Macbook Pro • 1m ago", "https://via.placeholder.com/60?text=MBP"),
        ActivityEntry::new("Sold 2 Products", "iPhone 14 pro • 12m ago", "https://via.placeholder.com/60?text=Phone"),
        ActivityEntry::new("Sold 1 Product", "Zoom75 • 23m ago", "https://via.placeholder.com/60?text=Zoom"),
        ActivityEntry::new("Restocked 12 Product", "Zoom75 • 42m ago", "https://via.placeholder.com/60?text=Zoom"),
    ]
});

pub fn recent_activity() -> &'static [ActivityEntry] {
    &RECENT
}
