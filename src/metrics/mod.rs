// Latency statistics: percentile calculation and per-region aggregation

pub mod aggregation;
mod percentile;

pub use aggregation::{
    AggregationOptions, MissingRegionPolicy, P95, Rounding, aggregate, aggregate_with,
};
pub use percentile::percentile;
