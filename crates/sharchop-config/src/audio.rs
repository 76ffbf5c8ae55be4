use serde::{Deserialize, Serialize};

fn default_root() -> String {
    ".".to_string()
}

#[derive(Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct AudioConfig {
    /// Directory containing Tshangla_Audio/ and English_Audio/
    #[serde(default = "default_root")]
    pub root: String,
}

impl Default for AudioConfig {
    fn default() -> Self {
        Self {
            root: default_root(),
        }
    }
}
