//! Recording configuration.
//!
//! Reads optional overrides from environment variables:
//! - `SORTRACE_SNAPSHOTS`: `full` (default) or `indices`
//! - `SORTRACE_MAX_COUNTING_RANGE`: largest counting table a run may allocate

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Whether frames carry a copy of the sequence.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SnapshotMode {
    /// Every frame stores the whole sequence. Memory grows as frames x length.
    #[default]
    Full,
    /// Frames store only phase, highlights and bounds. The caller still gets
    /// the sorted sequence.
    IndicesOnly,
}

impl FromStr for SnapshotMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "full" => Ok(SnapshotMode::Full),
            "indices" | "indices_only" | "indices-only" => Ok(SnapshotMode::IndicesOnly),
            other => Err(format!("unknown snapshot mode '{}'", other)),
        }
    }
}

/// Configuration for a sorting run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraceConfig {
    /// Whether frames carry full snapshots. Default: `Full`.
    pub snapshots: SnapshotMode,
    /// Maximum counting table size (`max + 1`) counting sort may allocate.
    /// Default: 2^20.
    pub max_counting_range: usize,
}

impl Default for TraceConfig {
    fn default() -> Self {
        TraceConfig {
            snapshots: SnapshotMode::Full,
            max_counting_range: 1 << 20,
        }
    }
}

impl TraceConfig {
    pub fn with_snapshots(mut self, snapshots: SnapshotMode) -> Self {
        self.snapshots = snapshots;
        self
    }

    pub fn with_max_counting_range(mut self, limit: usize) -> Self {
        self.max_counting_range = limit;
        self
    }

    /// Builds a config from the defaults plus any environment overrides.
    ///
    /// Unparseable values are ignored with a warning.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = TraceConfig::default();

        if let Some(raw) = lookup("SORTRACE_SNAPSHOTS") {
            match raw.parse() {
                Ok(mode) => config.snapshots = mode,
                Err(e) => tracing::warn!("ignoring SORTRACE_SNAPSHOTS: {}", e),
            }
        }

        if let Some(raw) = lookup("SORTRACE_MAX_COUNTING_RANGE") {
            match raw.trim().parse::<usize>() {
                Ok(limit) => config.max_counting_range = limit,
                Err(e) => tracing::warn!("ignoring SORTRACE_MAX_COUNTING_RANGE={:?}: {}", raw, e),
            }
        }

        config
    }
}
