// Domain models: telemetry samples, request query, aggregated stats

mod query;
mod sample;
mod stats;

pub use query::LatencyQuery;
pub use sample::Sample;
pub use stats::{DatasetInfo, RegionReport, RegionStats};
