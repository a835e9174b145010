use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf};

use crate::{
    errors::Result,
    utils::{app_data_dir, config_file_in, ensure_dir},
};

/// How the cheque date is rendered on the leaf.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum DateDisplayStyle {
    /// `14/03/2026`, the convention pre-printed cheque stationery expects.
    #[default]
    DayFirst,
    /// `2026-03-14`.
    Iso,
    /// `03/14/2026`.
    MonthFirst,
}

impl DateDisplayStyle {
    pub fn render(&self, date: NaiveDate) -> String {
        match self {
            DateDisplayStyle::DayFirst => date.format("%d/%m/%Y").to_string(),
            DateDisplayStyle::Iso => date.format("%Y-%m-%d").to_string(),
            DateDisplayStyle::MonthFirst => date.format("%m/%d/%Y").to_string(),
        }
    }
}

/// User-tunable application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// Currency code shown next to the figures; the words stay
    /// currency-agnostic.
    pub currency: String,
    #[serde(default)]
    pub date_format: DateDisplayStyle,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            currency: "KES".into(),
            date_format: DateDisplayStyle::DayFirst,
        }
    }
}

pub struct ConfigManager {
    path: PathBuf,
}

impl ConfigManager {
    pub fn new() -> Result<Self> {
        Self::from_base(app_data_dir())
    }

    pub fn with_base_dir(base: PathBuf) -> Result<Self> {
        Self::from_base(base)
    }

    fn from_base(base: PathBuf) -> Result<Self> {
        ensure_dir(&base)?;
        Ok(Self {
            path: config_file_in(&base),
        })
    }

    /// Loads the stored settings, falling back to defaults when absent.
    pub fn load(&self) -> Result<Config> {
        if self.path.exists() {
            let data = fs::read_to_string(&self.path)?;
            Ok(serde_json::from_str(&data)?)
        } else {
            Ok(Config::default())
        }
    }

    pub fn save(&self, config: &Config) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            ensure_dir(parent)?;
        }
        let json = serde_json::to_string_pretty(config)?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, json)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}
