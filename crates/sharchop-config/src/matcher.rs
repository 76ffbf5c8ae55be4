use serde::{Deserialize, Serialize};

fn default_threshold() -> u8 {
    60
}

fn default_candidates() -> usize {
    3
}

#[derive(Serialize, Deserialize, Clone, Copy)]
#[serde(default)]
pub struct MatcherConfig {
    /// Best candidate must score strictly above this to count as a match
    #[serde(default = "default_threshold")]
    pub threshold: u8,
    /// How many ranked candidates to keep per query
    #[serde(default = "default_candidates")]
    pub candidates: usize,
}

impl Default for MatcherConfig {
    fn default() -> Self {
        Self {
            threshold: default_threshold(),
            candidates: default_candidates(),
        }
    }
}
