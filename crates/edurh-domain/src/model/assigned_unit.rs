use serde::{Deserialize, Serialize};

/// A typed assignment record carrying a period count
///
/// Built directly by callers that already know the counts. Raw backend
/// payloads stay as `serde_json::Value` and are read by the calculator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssignedUnit {
    #[serde(default)]
    pub periods: Option<u32>,
}

impl AssignedUnit {
    pub fn new(periods: u32) -> Self {
        Self {
            periods: Some(periods),
        }
    }

    /// A record with no period count (counts as 0)
    pub fn empty() -> Self {
        Self { periods: None }
    }
}

impl From<u32> for AssignedUnit {
    fn from(periods: u32) -> Self {
        Self::new(periods)
    }
}
