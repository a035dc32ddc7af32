//! Configuration management for machmon.
//!
//! Settings are stored as pretty-printed JSON (`config.json`) in the platform
//! data directory resolved by [`DataStorage`]. Every section is optional; a
//! missing file or a missing section falls back to defaults, so the tool runs
//! against the built-in sample data without any setup.
//!
//! ## Sections
//!
//! - **data**: which record source to read (`sample`, `json` catalog file or
//!   the `sqlite` store) and the catalog path for the `json` source.
//! - **thresholds**: classification limits for downtime severity and stock
//!   urgency.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use machmon::libs::config::Config;
//!
//! let config = Config::read()?;
//! let thresholds = config.thresholds();
//! println!("critical from {} min", thresholds.downtime_critical_from);
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::data_storage::DataStorage;
use super::source::SourceKind;
use crate::libs::messages::Message;
use crate::{msg_bail_anyhow, msg_print};
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input, MultiSelect, Select};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::path::PathBuf;

pub const CONFIG_FILE_NAME: &str = "config.json";

/// A configurable section offered by the setup wizard.
#[derive(Debug, Clone)]
pub struct ConfigModule {
    pub key: String,
    pub name: String,
}

/// Where list views read their records from.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct DataConfig {
    pub source: SourceKind,

    /// Catalog file for the `json` source.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

impl Default for DataConfig {
    fn default() -> Self {
        DataConfig {
            source: SourceKind::Sample,
            path: None,
        }
    }
}

/// Classification limits.
///
/// Downtime values are minutes. A machine is CRITICAL from
/// `downtime_critical_from` up, MAJOR above `downtime_major_above`, MINOR
/// otherwise. A spare part is URGENT at or below
/// `min_threshold * stock_urgent_factor` and LOW at or below `min_threshold`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ThresholdConfig {
    pub downtime_critical_from: f64,
    pub downtime_major_above: f64,
    pub stock_urgent_factor: f64,
}

impl ThresholdConfig {
    /// Severity tiers must not overlap and every stock tier must stay reachable.
    pub fn validate(&self) -> Result<()> {
        if self.downtime_critical_from <= self.downtime_major_above {
            msg_bail_anyhow!(Message::ThresholdsInvalid(self.downtime_critical_from, self.downtime_major_above));
        }
        if !(0.0..=1.0).contains(&self.stock_urgent_factor) {
            msg_bail_anyhow!(Message::StockFactorInvalid(self.stock_urgent_factor));
        }
        Ok(())
    }
}

impl Default for ThresholdConfig {
    fn default() -> Self {
        ThresholdConfig {
            downtime_critical_from: 120.0,
            downtime_major_above: 60.0,
            stock_urgent_factor: 0.5,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Config {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<DataConfig>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub thresholds: Option<ThresholdConfig>,
}

impl Config {
    pub fn read() -> Result<Config> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        if !config_file_path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(config_file_path)?;
        let config: Config = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        let config_file = File::create(config_file_path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    pub fn data(&self) -> DataConfig {
        self.data.clone().unwrap_or_default()
    }

    pub fn thresholds(&self) -> ThresholdConfig {
        self.thresholds.clone().unwrap_or_default()
    }

    /// Interactive setup wizard behind `machmon init`.
    pub fn init() -> Result<Self> {
        let mut config = Self::read().unwrap_or_default();

        let modules = vec![
            ConfigModule {
                key: "data".to_string(),
                name: "Data source".to_string(),
            },
            ConfigModule {
                key: "thresholds".to_string(),
                name: "Classification thresholds".to_string(),
            },
        ];

        let selected = MultiSelect::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptSelectModules.to_string())
            .items(&modules.iter().map(|module| &module.name).collect::<Vec<_>>())
            .interact()?;

        for &selection in &selected {
            match modules[selection].key.as_str() {
                "data" => {
                    let default = config.data();
                    msg_print!(Message::ConfigModuleData);
                    let kinds = [SourceKind::Sample, SourceKind::Json, SourceKind::Sqlite];
                    let current = kinds.iter().position(|kind| *kind == default.source).unwrap_or(0);
                    let choice = Select::with_theme(&ColorfulTheme::default())
                        .with_prompt(Message::PromptSourceKind.to_string())
                        .items(&kinds.iter().map(|kind| kind.as_str()).collect::<Vec<_>>())
                        .default(current)
                        .interact()?;
                    let source = kinds[choice];
                    let path = if source == SourceKind::Json {
                        let default_path = default.path.map(|p| p.display().to_string()).unwrap_or_default();
                        let path: String = Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptCatalogPath.to_string())
                            .default(default_path)
                            .interact_text()?;
                        Some(PathBuf::from(path))
                    } else {
                        None
                    };
                    config.data = Some(DataConfig { source, path });
                }
                "thresholds" => {
                    let default = config.thresholds();
                    msg_print!(Message::ConfigModuleThresholds);
                    config.thresholds = Some(ThresholdConfig {
                        downtime_critical_from: Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptDowntimeCritical.to_string())
                            .default(default.downtime_critical_from)
                            .interact_text()?,
                        downtime_major_above: Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptDowntimeMajor.to_string())
                            .default(default.downtime_major_above)
                            .interact_text()?,
                        stock_urgent_factor: Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptStockUrgentFactor.to_string())
                            .default(default.stock_urgent_factor)
                            .interact_text()?,
                    });
                }
                _ => {}
            }
        }

        Ok(config)
    }
}
