//! Pipeline configuration.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::params::ParameterRanges;

/// Tunables for a pipeline run.
///
/// Parsed from TOML; any missing key keeps its default:
///
/// ```toml
/// parallel_threshold = 4096
///
/// [ranges]
/// scale = [0.5, 2.0]
/// rotation_y = [0, 360]
/// translation = [0, 50]
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Ranges the per-batch parameters are drawn from.
    pub ranges: ParameterRanges,
    /// Batches at least this long are transformed on the rayon pool.
    pub parallel_threshold: usize,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            ranges: ParameterRanges::default(),
            parallel_threshold: 1024,
        }
    }
}

impl PipelineConfig {
    /// Parse and validate a TOML configuration.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let config: Self = toml::from_str(s)?;
        config.ranges.validate()?;
        Ok(config)
    }
}
