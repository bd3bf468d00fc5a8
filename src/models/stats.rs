// Aggregated output: per-region statistics and dataset summary

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Statistics for one region. `None` fields serialize as `null` and mean the
/// region had no matching samples.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct RegionStats {
    pub avg_latency: Option<f64>,
    pub p95_latency: Option<f64>,
    pub avg_uptime: Option<f64>,
    pub breaches: u64,
}

impl RegionStats {
    /// Entry emitted for a requested region with no samples.
    pub const EMPTY: RegionStats = RegionStats {
        avg_latency: None,
        p95_latency: None,
        avg_uptime: None,
        breaches: 0,
    };
}

/// Region name -> stats, in request order.
pub type RegionReport = IndexMap<String, RegionStats>;

/// Static description of the loaded sample set; served by GET /api/info.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetInfo {
    pub sample_count: usize,
    /// Region -> number of samples, in order of first appearance in the data file.
    pub regions: IndexMap<String, usize>,
}
