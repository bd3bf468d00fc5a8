// Per-region aggregation over the loaded sample set.
// Pure: no I/O, no shared mutable state; safe to call from any number of handlers.

use std::collections::{HashMap, HashSet};

use serde::Deserialize;

use super::percentile::percentile_sorted;
use crate::models::{RegionReport, RegionStats, Sample};

/// Percentile reported as `p95_latency`.
pub const P95: f64 = 95.0;

/// What to emit for a requested region that has no samples.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MissingRegionPolicy {
    /// Emit an entry with null statistics and zero breaches.
    #[default]
    EmitNull,
    /// Leave the region out of the report.
    Omit,
}

/// Decimal places applied to the final figures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rounding {
    pub latency_decimals: u32,
    pub uptime_decimals: u32,
}

impl Default for Rounding {
    fn default() -> Self {
        Self {
            latency_decimals: 2,
            uptime_decimals: 3,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AggregationOptions {
    /// A sample breaches when `latency_ms > threshold_ms`.
    pub threshold_ms: f64,
    pub missing_region_policy: MissingRegionPolicy,
    /// `None` returns unrounded values.
    pub rounding: Option<Rounding>,
}

impl AggregationOptions {
    pub fn new(threshold_ms: f64) -> Self {
        Self {
            threshold_ms,
            missing_region_policy: MissingRegionPolicy::default(),
            rounding: Some(Rounding::default()),
        }
    }
}

/// Aggregates `samples` for each of `regions` with null entries for unknown
/// regions and default rounding.
pub fn aggregate(samples: &[Sample], regions: &[String], threshold_ms: f64) -> RegionReport {
    aggregate_with(samples, regions, &AggregationOptions::new(threshold_ms))
}

/// Aggregates `samples` for each of `regions`.
///
/// Keys follow the order of first appearance in `regions`; a repeated region
/// yields a single entry. Region matching is exact and case-sensitive.
pub fn aggregate_with(
    samples: &[Sample],
    regions: &[String],
    options: &AggregationOptions,
) -> RegionReport {
    let by_region = group_by_region(samples, regions);

    let mut report = RegionReport::with_capacity(regions.len());
    for region in regions {
        let stats = match by_region.get(region.as_str()) {
            Some(group) => region_stats(group, options),
            None => match options.missing_region_policy {
                MissingRegionPolicy::EmitNull => RegionStats::EMPTY,
                MissingRegionPolicy::Omit => continue,
            },
        };
        report.insert(region.clone(), stats);
    }
    report
}

/// Single pass over `samples`, keeping only requested regions.
fn group_by_region<'a>(
    samples: &'a [Sample],
    regions: &[String],
) -> HashMap<&'a str, Vec<&'a Sample>> {
    let wanted: HashSet<&str> = regions.iter().map(String::as_str).collect();
    let mut by_region: HashMap<&str, Vec<&Sample>> = HashMap::with_capacity(wanted.len());
    for s in samples {
        if wanted.contains(s.region.as_str()) {
            by_region.entry(s.region.as_str()).or_default().push(s);
        }
    }
    by_region
}

/// Statistics for a non-empty group.
fn region_stats(group: &[&Sample], options: &AggregationOptions) -> RegionStats {
    let mut latencies: Vec<f64> = group.iter().map(|s| s.latency_ms).collect();
    let uptimes: Vec<f64> = group.iter().map(|s| s.uptime).collect();

    let avg_latency = mean_f64(&latencies);
    let avg_uptime = mean_f64(&uptimes);
    let breaches = latencies
        .iter()
        .filter(|&&l| l > options.threshold_ms)
        .count() as u64;

    latencies.sort_by(f64::total_cmp);
    let p95_latency = percentile_sorted(&latencies, P95);

    let (avg_latency, p95_latency, avg_uptime) = match options.rounding {
        Some(r) => (
            round_to(avg_latency, r.latency_decimals),
            round_to(p95_latency, r.latency_decimals),
            round_to(avg_uptime, r.uptime_decimals),
        ),
        None => (avg_latency, p95_latency, avg_uptime),
    };

    RegionStats {
        avg_latency: Some(avg_latency),
        p95_latency: Some(p95_latency),
        avg_uptime: Some(avg_uptime),
        breaches,
    }
}

fn mean_f64(v: &[f64]) -> f64 {
    if v.is_empty() {
        return 0.0;
    }
    v.iter().sum::<f64>() / (v.len() as f64)
}

/// Half away from zero on the scaled f64. Ties follow the binary value, not
/// decimal half-up: 1.005 is stored below the tie and rounds to 1.0.
fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}
