use crate::configuration::constants::common::{DEFAULT_OUTPUT, ENV_PREFIX};
use crate::error::{Error, Result};
use crate::output::Level;
use config::{Config, Environment, File};
use serde_derive::Deserialize;
use serde_json::{Map, Value};
use std::path::PathBuf;

#[derive(Debug, Deserialize)]
pub struct Settings {
    #[serde(default = "default_output")]
    pub output: PathBuf,
    /// Threshold of messages written into the primary output.
    #[serde(default)]
    pub log_level: Level,
    #[serde(default)]
    pub debug_file: Option<PathBuf>,
    #[serde(default = "default_debug_level")]
    pub debug_level: Level,
    #[serde(default)]
    pub listeners: Vec<String>,
    #[serde(default)]
    pub split_threshold: Option<usize>,
    #[serde(default)]
    pub separator: Option<String>,
    /// Emitted as the `settings` statement of the report data.
    #[serde(default)]
    pub report: Map<String, Value>,
}

fn default_output() -> PathBuf {
    PathBuf::from(DEFAULT_OUTPUT)
}

fn default_debug_level() -> Level {
    Level::Debug
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            output: default_output(),
            log_level: Level::default(),
            debug_file: None,
            debug_level: default_debug_level(),
            listeners: Vec::new(),
            split_threshold: None,
            separator: None,
            report: Map::new(),
        }
    }
}

impl Settings {
    /// Loads settings from an optional file overridden by `CANNON_*` environment variables.
    pub fn load(file: Option<PathBuf>) -> Result<Self> {
        let mut config = Config::new();
        if let Some(file) = file {
            config.merge(File::from(file))?;
        }
        config.merge(Environment::with_prefix(ENV_PREFIX))?;
        let settings: Settings = config.try_into()?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<()> {
        if self.split_threshold == Some(0) {
            return Err(Error::InvalidSplitThreshold);
        }
        Ok(())
    }
}
