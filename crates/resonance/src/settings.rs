use crate::aspects::AspectSettings;
use crate::ephemeris::Body;
use serde::{Deserialize, Serialize};

/// Fixed tables a run is scored with
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringConfig {
    /// Bodies fetched and compared, in iteration order
    pub bodies: Vec<Body>,
    pub aspects: AspectSettings,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            bodies: Body::ALL.to_vec(),
            aspects: AspectSettings::default(),
        }
    }
}
