use serde::{Deserialize, Serialize};

use crate::scoring::ScoringConfig;

#[derive(Debug, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Channel table overrides; absent means the built-in table
    #[serde(default)]
    pub scoring: Option<ScoringConfig>,
}

impl Config {
    /// The channel table to score with, after overrides.
    pub fn effective_scoring(&self) -> ScoringConfig {
        self.scoring.clone().unwrap_or_default()
    }
}
