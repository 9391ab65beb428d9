use crate::record::DEFAULT_DELIMITER;
use crate::table::TableLabels;
use crate::walker::DEFAULT_EXTENSION;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub search: SearchConfig,
    pub display: DisplayConfig,
    pub table: TableConfig,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    pub extension: String,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            extension: DEFAULT_EXTENSION.to_string(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub show_progress: bool,
    pub show_table: bool,
    pub show_timing: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            show_progress: true,
            show_table: false,
            show_timing: true,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct TableConfig {
    pub delimiter: String,
    pub headers: [String; 3],
    pub yes_label: String,
    pub no_label: String,
}

impl Default for TableConfig {
    fn default() -> Self {
        let labels = TableLabels::default();
        Self {
            delimiter: DEFAULT_DELIMITER.to_string(),
            headers: labels.headers,
            yes_label: labels.yes,
            no_label: labels.no,
        }
    }
}

impl TableConfig {
    pub fn labels(&self) -> TableLabels {
        TableLabels {
            headers: self.headers.clone(),
            yes: self.yes_label.clone(),
            no: self.no_label.clone(),
        }
    }
}

impl Config {
    /// Loads the first config file found, or the defaults when there is none.
    pub fn load() -> Result<Self> {
        match Self::find_config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    fn find_config_path() -> Option<PathBuf> {
        if let Some(xdg_config) = dirs::config_dir() {
            let xdg_path = xdg_config.join("docsift/config.toml");
            if xdg_path.exists() {
                return Some(xdg_path);
            }
        }

        if let Some(home) = dirs::home_dir() {
            let home_path = home.join(".docsift.toml");
            if home_path.exists() {
                return Some(home_path);
            }
        }

        let current_path = Path::new(".docsift.toml");
        if current_path.exists() {
            return Some(current_path.to_path_buf());
        }

        None
    }
}
