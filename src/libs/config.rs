//! Configuration management for the application.
//!
//! Settings are stored as JSON in the platform data directory and follow the
//! optional-module pattern: each section is an `Option`, absent sections fall
//! back to defaults, and unconfigured modules are omitted from the file
//! entirely. [`Config::init`] runs the interactive setup wizard.

use super::data_storage::DataStorage;
use crate::libs::export::ExportFormat;
use crate::libs::messages::Message;
use crate::msg_print;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Confirm, Input, MultiSelect, Select};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};

pub const CONFIG_FILE_NAME: &str = "config.json";

/// A configurable module shown in the interactive setup.
#[derive(Debug, Clone)]
pub struct ConfigModule {
    pub key: String,
    pub name: String,
}

/// Settings for the matrix board and stats views.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct DisplayConfig {
    /// Show completed one-shot tasks on the matrix board.
    pub show_completed: bool,
    /// Number of trailing weeks rendered in the stats heatmap.
    pub heatmap_weeks: u16,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        DisplayConfig {
            show_completed: true,
            heatmap_weeks: 12,
        }
    }
}

/// Settings for data export.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExportConfig {
    /// Format used when `--format` is not given.
    pub default_format: ExportFormat,
}

impl Default for ExportConfig {
    fn default() -> Self {
        ExportConfig {
            default_format: ExportFormat::Csv,
        }
    }
}

/// Root configuration object.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct Config {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display: Option<DisplayConfig>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub export: Option<ExportConfig>,
}

impl Config {
    /// Reads the configuration file, falling back to defaults when it does
    /// not exist.
    pub fn read() -> Result<Config> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        if !config_file_path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(config_file_path)?;
        let config: Config = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    /// Writes the configuration as pretty-printed JSON.
    pub fn save(&self) -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        let config_file = File::create(config_file_path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Runs the interactive configuration wizard. Existing values are used as
    /// prompt defaults, so re-running only updates what the user changes.
    pub fn init() -> Result<Self> {
        let mut config = match Self::read() {
            Ok(config) => config,
            Err(_) => Config::default(),
        };

        let modules = vec![
            ConfigModule {
                key: "display".to_string(),
                name: "Display".to_string(),
            },
            ConfigModule {
                key: "export".to_string(),
                name: "Export".to_string(),
            },
        ];

        let selected = MultiSelect::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptSelectModules.to_string())
            .items(&modules.iter().map(|module| &module.name).collect::<Vec<_>>())
            .interact()?;

        for &selection in &selected {
            match modules[selection].key.as_str() {
                "display" => {
                    let default = config.display.clone().unwrap_or_default();
                    msg_print!(Message::ConfigModuleDisplay);
                    config.display = Some(DisplayConfig {
                        show_completed: Confirm::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptShowCompleted.to_string())
                            .default(default.show_completed)
                            .interact()?,

                        heatmap_weeks: Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptHeatmapWeeks.to_string())
                            .default(default.heatmap_weeks)
                            .interact_text()?,
                    });
                }

                "export" => {
                    let default = config.export.clone().unwrap_or_default();
                    msg_print!(Message::ConfigModuleExport);
                    let formats = [ExportFormat::Csv, ExportFormat::Json, ExportFormat::Excel];
                    let default_index = formats.iter().position(|f| *f == default.default_format).unwrap_or(0);
                    let selection = Select::with_theme(&ColorfulTheme::default())
                        .with_prompt(Message::PromptDefaultExportFormat.to_string())
                        .items(&["csv", "json", "excel"])
                        .default(default_index)
                        .interact()?;
                    config.export = Some(ExportConfig {
                        default_format: formats[selection],
                    });
                }
                _ => {}
            }
        }

        Ok(config)
    }
}
