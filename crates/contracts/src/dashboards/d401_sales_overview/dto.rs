use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalesActivityEntry {
    pub text: String,
    pub actor: String,
    /// Relative time label, e.g. `12 m ago`.
    pub time: String,
}

impl SalesActivityEntry {
    pub fn new(text: &str, actor: &str, time: &str) -> Self {
        Self {
            text: text.to_string(),
            actor: actor.to_string(),
            time: time.to_string(),
        }
    }
}
