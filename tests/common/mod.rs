// Shared test helpers

#![allow(dead_code)]

use region_latency::config::AppConfig;
use region_latency::models::Sample;

pub const TEST_CONFIG: &str = r#"
[server]
port = 8000
host = "0.0.0.0"

[telemetry]
path = "data/telemetry.json"

[metrics]
default_threshold_ms = 180
missing_region_policy = "emit_null"
"#;

pub fn test_app_config() -> AppConfig {
    AppConfig::load_from_str(TEST_CONFIG).unwrap()
}

pub fn sample(region: &str, latency_ms: f64, uptime: f64) -> Sample {
    Sample::new(region, latency_ms, uptime)
}

/// Two regions with exactly representable values so sums are order-independent.
pub fn fixture_samples() -> Vec<Sample> {
    vec![
        sample("emea", 120.0, 0.5),
        sample("apac", 200.0, 1.0),
        sample("emea", 180.0, 1.0),
        sample("apac", 100.0, 0.75),
        sample("apac", 300.0, 0.25),
        sample("emea", 150.0, 0.75),
    ]
}

pub fn regions(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| s.to_string()).collect()
}
