//! Dashboard configuration.
//!
//! Read once at startup from `bioregen.json` in the working directory, or
//! from the file named by `BIOREGEN_CONFIG`. Every field is optional.

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use serde::Deserialize;

pub const CONFIG_ENV: &str = "BIOREGEN_CONFIG";
const DEFAULT_FILE: &str = "bioregen.json";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Initial window size in logical pixels.
    pub window_size: [f32; 2],
    pub min_window_size: [f32; 2],
    /// Simulated analysis time before a prediction is shown.
    pub prediction_delay_ms: u64,
    /// Simulated lookup time before search results are shown.
    pub search_delay_ms: u64,
    /// Fixed seed for the trend jitter; random per run when absent.
    pub seed: Option<u64>,
    /// Initial dashboard selectors, by key. Unknown keys fall back.
    pub biomarker_type: String,
    pub disease_filter: String,
    pub age_range: String,
    /// Cell type preselected in the protocol form.
    pub cell_type: Option<String>,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            window_size: [1200.0, 800.0],
            min_window_size: [600.0, 400.0],
            prediction_delay_ms: 1500,
            search_delay_ms: 1000,
            seed: None,
            biomarker_type: "epigenetic".into(),
            disease_filter: "all".into(),
            age_range: "all".into(),
            cell_type: None,
        }
    }
}

impl DashboardConfig {
    pub fn prediction_delay(&self) -> Duration {
        Duration::from_millis(self.prediction_delay_ms)
    }

    pub fn search_delay(&self) -> Duration {
        Duration::from_millis(self.search_delay_ms)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        let config = serde_json::from_str(&text)
            .with_context(|| format!("parsing {}", path.display()))?;
        Ok(config)
    }

    /// Locate and read the config file. A missing default file is silent; any
    /// other problem is logged and the defaults are used.
    pub fn load() -> Self {
        let explicit = std::env::var_os(CONFIG_ENV).map(PathBuf::from);
        let path = explicit
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_FILE));

        if explicit.is_none() && !path.exists() {
            return Self::default();
        }

        match Self::from_file(&path) {
            Ok(config) => {
                log::info!("Loaded configuration from {}", path.display());
                config
            }
            Err(e) => {
                log::warn!("Ignoring configuration: {e:#}");
                Self::default()
            }
        }
    }
}
