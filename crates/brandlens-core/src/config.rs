use std::time::Duration;

use crate::error::{BrandlensError, Result};

pub const API_KEY_ENV_VAR: &str = "MEMORIES_API_KEY";

/// Tunable knobs of the analysis pipeline.
///
/// The defaults are the values the pipeline has always shipped with; no
/// rationale exists for them beyond field behavior, so they stay
/// configurable rather than baked in.
#[derive(Debug, Clone)]
pub struct AnalysisOptions {
    /// Visual hits at or below this similarity are discarded.
    pub similarity_threshold: f64,
    /// Same-category events starting closer than this are deduplicated.
    pub dedup_window_secs: f64,
    /// Delay between transcript polling attempts.
    pub poll_interval: Duration,
    /// Polling attempts before degrading to transcript-less analysis.
    pub max_poll_attempts: u32,
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        Self {
            similarity_threshold: 0.6,
            dedup_window_secs: 5.0,
            poll_interval: Duration::from_secs(1),
            max_poll_attempts: 30,
        }
    }
}

/// Read the API key from the environment, failing early if unset.
pub fn api_key_from_env() -> Result<String> {
    std::env::var(API_KEY_ENV_VAR).map_err(|_| BrandlensError::MissingApiKey {
        env_var: API_KEY_ENV_VAR.to_string(),
    })
}
