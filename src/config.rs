//! Demo configuration, loaded from TOML.
//!
//! ```toml
//! [logging]
//! origin = "patterns"
//! colors = true
//! level = "info"
//!
//! [factory]
//! style = "class"
//! ```

use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::diagnostics::{Level, LocalLogger, LoggerAdapter};
use crate::error::ConfigError;
use crate::factory::{record_restaurants, restaurants, Dispatcher, Restaurant};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub logging: LoggingConfig,
    pub factory: FactoryConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub origin: String,
    pub colors: bool,
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            origin: "patterns".to_string(),
            colors: true,
            level: "info".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FactoryConfig {
    pub style: FactoryStyle,
}

/// Which dispatcher table the demos resolve restaurants from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FactoryStyle {
    #[default]
    Class,
    Record,
}

impl FactoryStyle {
    pub fn dispatcher(&self) -> Dispatcher<Box<dyn Restaurant>> {
        match self {
            FactoryStyle::Class => restaurants(),
            FactoryStyle::Record => record_restaurants(),
        }
    }
}

impl fmt::Display for FactoryStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FactoryStyle::Class => f.write_str("class"),
            FactoryStyle::Record => f.write_str("record"),
        }
    }
}

impl FromStr for FactoryStyle {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "class" => Ok(FactoryStyle::Class),
            "record" => Ok(FactoryStyle::Record),
            other => Err(ConfigError::invalid_value(
                "factory.style",
                format!("unknown style '{other}', expected class or record"),
            )),
        }
    }
}

impl Config {
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Loads `path` when given, otherwise returns the defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.logging.origin.trim().is_empty() {
            return Err(ConfigError::invalid_value("logging.origin", "must not be empty"));
        }
        self.min_level()?;
        Ok(())
    }

    pub fn min_level(&self) -> Result<Level, ConfigError> {
        self.logging
            .level
            .parse::<Level>()
            .map_err(|err| ConfigError::invalid_value("logging.level", err.to_string()))
    }

    pub fn logger(&self) -> Result<LoggerAdapter, ConfigError> {
        let local = LocalLogger::new(self.logging.origin.clone()).with_colors(self.logging.colors);
        Ok(LoggerAdapter::new(local).with_min_level(self.min_level()?))
    }
}
