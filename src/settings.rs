use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::categorize::CategoryRule;
use crate::error::{BillfoldError, Result};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Directory where downloaded statement PDFs land.
    #[serde(default = "default_statements_dir")]
    pub statements_dir: String,
    /// User category rules, evaluated before the built-in table.
    #[serde(default)]
    pub rules: Vec<CategoryRule>,
}

fn default_statements_dir() -> String {
    ".".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            statements_dir: default_statements_dir(),
            rules: Vec::new(),
        }
    }
}

fn config_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config")
        .join("billfold")
}

fn settings_path() -> PathBuf {
    config_dir().join("settings.json")
}

pub fn load_settings() -> Settings {
    let path = settings_path();
    if path.exists() {
        let content = std::fs::read_to_string(&path).unwrap_or_default();
        serde_json::from_str(&content).unwrap_or_default()
    } else {
        Settings::default()
    }
}

#[allow(dead_code)]
pub fn save_settings(settings: &Settings) -> Result<()> {
    let dir = config_dir();
    std::fs::create_dir_all(&dir)?;
    let json = serde_json::to_string_pretty(settings)
        .map_err(|e| BillfoldError::Settings(e.to_string()))?;
    std::fs::write(settings_path(), format!("{json}\n"))?;
    Ok(())
}
