use serde::{Deserialize, Serialize};

fn default_spreadsheet_path() -> String {
    "tshangla_english.xlsx".to_string()
}

fn default_csv_path() -> String {
    "tshangla_english.csv".to_string()
}

#[derive(Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct DatasetConfig {
    /// Tried first as .xlsx, then with the .xls reader
    #[serde(default = "default_spreadsheet_path")]
    pub spreadsheet_path: String,
    /// Plain-text fallback when both spreadsheet readers fail
    #[serde(default = "default_csv_path")]
    pub csv_path: String,
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            spreadsheet_path: default_spreadsheet_path(),
            csv_path: default_csv_path(),
        }
    }
}
