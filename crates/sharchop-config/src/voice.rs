use serde::{Deserialize, Serialize};

fn default_listen_timeout_secs() -> u64 {
    5
}

#[derive(Serialize, Deserialize, Clone, Copy)]
#[serde(default)]
pub struct VoiceConfig {
    /// Microphone listen timeout before the capture is abandoned
    #[serde(default = "default_listen_timeout_secs")]
    pub listen_timeout_secs: u64,
}

impl Default for VoiceConfig {
    fn default() -> Self {
        Self {
            listen_timeout_secs: default_listen_timeout_secs(),
        }
    }
}
