// Request body for POST /api/latency

use serde::{Deserialize, Deserializer, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LatencyQuery {
    #[serde(default)]
    pub regions: Vec<String>,
    /// Falls back to `metrics.default_threshold_ms` when absent. An explicit
    /// `null` is rejected.
    #[serde(
        default,
        deserialize_with = "present_f64",
        skip_serializing_if = "Option::is_none"
    )]
    pub threshold_ms: Option<f64>,
}

fn present_f64<'de, D: Deserializer<'de>>(d: D) -> Result<Option<f64>, D::Error> {
    f64::deserialize(d).map(Some)
}

impl LatencyQuery {
    pub fn threshold_or(&self, default_threshold_ms: f64) -> f64 {
        self.threshold_ms.unwrap_or(default_threshold_ms)
    }
}
