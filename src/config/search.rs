use super::traits::ConfigSection;
use crate::error::BlockseekError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    /// First candidate visited (inclusive).
    pub upper_bound: u64,
    /// Scan stops once candidates reach this value (exclusive).
    pub lower_bound: u64,
    /// Visited-candidate cadence between progress reports.
    pub progress_interval: u64,
    /// Candidates per rayon batch in the parallel runner.
    pub chunk_size: u64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            upper_bound: 99_999_999_999_999,
            lower_bound: 9_999_999_999_999,
            progress_interval: 10_000_000,
            chunk_size: 1_000_000,
        }
    }
}

impl ConfigSection for SearchConfig {
    fn section_name() -> &'static str {
        "search"
    }

    fn validate(&self) -> Result<(), BlockseekError> {
        if self.upper_bound <= self.lower_bound {
            return Err(BlockseekError::Configuration(format!(
                "Upper bound {} must exceed lower bound {}",
                self.upper_bound, self.lower_bound
            )));
        }
        if self.progress_interval == 0 {
            return Err(BlockseekError::Configuration(
                "Progress interval must be at least 1".to_string(),
            ));
        }
        if self.chunk_size == 0 {
            return Err(BlockseekError::Configuration(
                "Chunk size must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
