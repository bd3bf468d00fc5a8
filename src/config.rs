use serde::Deserialize;

use crate::metrics::{AggregationOptions, MissingRegionPolicy, Rounding};

/// Upper bound on configured decimal places.
const MAX_DECIMALS: u32 = 10;

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub telemetry: TelemetryConfig,
    #[serde(default)]
    pub metrics: MetricsConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub port: u16,
    pub host: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TelemetryConfig {
    /// JSON array of samples, read once at startup.
    pub path: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MetricsConfig {
    /// Used when a request omits `threshold_ms`.
    #[serde(default = "default_threshold_ms")]
    pub default_threshold_ms: f64,
    #[serde(default)]
    pub missing_region_policy: MissingRegionPolicy,
    /// Round latency and uptime figures in responses.
    #[serde(default = "default_round_output")]
    pub round_output: bool,
    #[serde(default = "default_latency_decimals")]
    pub latency_decimals: u32,
    #[serde(default = "default_uptime_decimals")]
    pub uptime_decimals: u32,
}

fn default_threshold_ms() -> f64 {
    180.0
}

fn default_round_output() -> bool {
    true
}

fn default_latency_decimals() -> u32 {
    2
}

fn default_uptime_decimals() -> u32 {
    3
}

impl Default for MetricsConfig {
    fn default() -> Self {
        Self {
            default_threshold_ms: default_threshold_ms(),
            missing_region_policy: MissingRegionPolicy::default(),
            round_output: default_round_output(),
            latency_decimals: default_latency_decimals(),
            uptime_decimals: default_uptime_decimals(),
        }
    }
}

impl MetricsConfig {
    /// Engine options for one request with the given threshold.
    pub fn aggregation_options(&self, threshold_ms: f64) -> AggregationOptions {
        AggregationOptions {
            threshold_ms,
            missing_region_policy: self.missing_region_policy,
            rounding: self.round_output.then_some(Rounding {
                latency_decimals: self.latency_decimals,
                uptime_decimals: self.uptime_decimals,
            }),
        }
    }
}

impl AppConfig {
    pub fn load() -> anyhow::Result<Self> {
        let path = std::env::var("CONFIG_FILE").unwrap_or_else(|_| "config.toml".into());
        let s = std::fs::read_to_string(&path)
            .map_err(|e| anyhow::anyhow!("config file {}: {}", path, e))?;
        Self::load_from_str(&s)
    }

    /// Parse and validate config from a string (e.g. for tests).
    pub fn load_from_str(s: &str) -> anyhow::Result<Self> {
        let config: AppConfig = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(
            self.server.port > 0,
            "server.port must be between 1 and 65535, got {}",
            self.server.port
        );
        anyhow::ensure!(!self.server.host.is_empty(), "server.host must be non-empty");
        anyhow::ensure!(
            !self.telemetry.path.is_empty(),
            "telemetry.path must be non-empty"
        );
        anyhow::ensure!(
            self.metrics.default_threshold_ms.is_finite()
                && self.metrics.default_threshold_ms >= 0.0,
            "metrics.default_threshold_ms must be a finite number >= 0, got {}",
            self.metrics.default_threshold_ms
        );
        anyhow::ensure!(
            self.metrics.latency_decimals <= MAX_DECIMALS,
            "metrics.latency_decimals must be <= {}, got {}",
            MAX_DECIMALS,
            self.metrics.latency_decimals
        );
        anyhow::ensure!(
            self.metrics.uptime_decimals <= MAX_DECIMALS,
            "metrics.uptime_decimals must be <= {}, got {}",
            MAX_DECIMALS,
            self.metrics.uptime_decimals
        );
        Ok(())
    }
}
