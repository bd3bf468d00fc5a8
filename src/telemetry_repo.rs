// Telemetry sample set: loaded once at startup, validated, then shared read-only.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use indexmap::IndexMap;
use thiserror::Error;
use tracing::instrument;

use crate::models::{DatasetInfo, Sample};

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read telemetry file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed telemetry data: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid sample at index {index}: {reason}")]
    InvalidSample { index: usize, reason: String },
}

/// Immutable sample set. Cloning shares the same backing slice.
#[derive(Debug, Clone)]
pub struct TelemetryRepo {
    samples: Arc<[Sample]>,
}

impl TelemetryRepo {
    /// Reads a JSON array of samples from `path`.
    #[instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn load(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let s = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let repo = Self::load_from_str(&s)?;
        tracing::info!(
            samples = repo.len(),
            regions = repo.info().regions.len(),
            "telemetry loaded"
        );
        Ok(repo)
    }

    /// Parse and validate samples from a JSON string (e.g. for tests).
    pub fn load_from_str(s: &str) -> Result<Self, LoadError> {
        let samples: Vec<Sample> = serde_json::from_str(s)?;
        Self::from_samples(samples)
    }

    pub fn from_samples(samples: Vec<Sample>) -> Result<Self, LoadError> {
        for (index, sample) in samples.iter().enumerate() {
            validate(sample).map_err(|reason| LoadError::InvalidSample { index, reason })?;
        }
        Ok(Self {
            samples: samples.into(),
        })
    }

    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Sample count overall and per region, regions in first-seen order.
    pub fn info(&self) -> DatasetInfo {
        let mut regions: IndexMap<String, usize> = IndexMap::new();
        for s in self.samples.iter() {
            *regions.entry(s.region.clone()).or_default() += 1;
        }
        DatasetInfo {
            sample_count: self.samples.len(),
            regions,
        }
    }
}

fn validate(sample: &Sample) -> Result<(), String> {
    if sample.region.is_empty() {
        return Err("region must be non-empty".into());
    }
    if !sample.latency_ms.is_finite() || sample.latency_ms < 0.0 {
        return Err(format!(
            "latency_ms must be a finite non-negative number, got {}",
            sample.latency_ms
        ));
    }
    if !(0.0..=100.0).contains(&sample.uptime) {
        return Err(format!(
            "uptime must be a finite number in 0..=100, got {}",
            sample.uptime
        ));
    }
    Ok(())
}
