// One telemetry record as loaded from the data file

use serde::{Deserialize, Serialize};

/// A single latency/uptime measurement for a region. Immutable once loaded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    pub region: String,
    pub latency_ms: f64,
    /// Fraction (0..=1) or percentage (0..=100) depending on the data source.
    /// Some sources call this field `uptime_pct`.
    #[serde(alias = "uptime_pct")]
    pub uptime: f64,
}

impl Sample {
    pub fn new(region: impl Into<String>, latency_ms: f64, uptime: f64) -> Self {
        Self {
            region: region.into(),
            latency_ms,
            uptime,
        }
    }
}
