use std::env;

use serde::{Deserialize, Serialize};

use self::audio::AudioConfig;
use self::dataset::DatasetConfig;
use self::matcher::MatcherConfig;
use self::voice::VoiceConfig;

pub mod audio;
pub mod dataset;
pub mod matcher;
pub mod voice;

#[derive(Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct Config {
    pub dataset: DatasetConfig,
    pub matcher: MatcherConfig,
    pub audio: AudioConfig,
    pub voice: VoiceConfig,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            dataset: DatasetConfig::default(),
            matcher: MatcherConfig::default(),
            audio: AudioConfig::default(),
            voice: VoiceConfig::default(),
        }
    }
}

impl Config {
    /// Defaults with environment overrides applied
    pub fn new() -> Self {
        let mut config = Config::default();

        if let Ok(path) = env::var("DATASET_XLSX") {
            config.dataset.spreadsheet_path = path;
        }
        if let Ok(path) = env::var("DATASET_CSV") {
            config.dataset.csv_path = path;
        }
        if let Some(threshold) = env::var("MATCH_THRESHOLD")
            .ok()
            .and_then(|v| v.parse().ok())
        {
            config.matcher.threshold = threshold;
        }
        if let Some(candidates) = env::var("MATCH_CANDIDATES")
            .ok()
            .and_then(|v| v.parse().ok())
        {
            config.matcher.candidates = candidates;
        }
        if let Ok(root) = env::var("AUDIO_ROOT") {
            config.audio.root = root;
        }
        if let Some(secs) = env::var("LISTEN_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
        {
            config.voice.listen_timeout_secs = secs;
        }

        config
    }
}
