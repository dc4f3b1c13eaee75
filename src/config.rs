use crate::model::ConfigError;
use chrono::NaiveDate;
use serde::Deserialize;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Json,
    Text,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ItemConfig {
    pub report_id: String,
    pub section: String,
    #[serde(default)]
    pub item_description: Option<String>,
    pub view_start: NaiveDate,
    pub view_end: NaiveDate,
}

impl ItemConfig {
    /// Display name: the item, or the section when no item is selected.
    pub fn label(&self) -> &str {
        self.item_description.as_deref().unwrap_or(&self.section)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub data_dir: PathBuf,
    #[serde(default)]
    pub output: OutputFormat,
    pub items: Vec<ItemConfig>,
}

pub fn load_config(path: &str) -> Result<AppConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    parse_config(&content)
}

pub fn parse_config(content: &str) -> Result<AppConfig, ConfigError> {
    let config: AppConfig = serde_json::from_str(content)?;
    validate(&config)?;
    Ok(config)
}

fn validate(config: &AppConfig) -> Result<(), ConfigError> {
    if config.items.is_empty() {
        return Err(ConfigError::Invalid("no items configured".into()));
    }
    for item in &config.items {
        if item.view_start > item.view_end {
            return Err(ConfigError::Invalid(format!(
                "{}: view_start {} is after view_end {}",
                item.label(),
                item.view_start,
                item.view_end
            )));
        }
    }
    Ok(())
}
