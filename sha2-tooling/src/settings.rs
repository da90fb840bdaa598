use anyhow::Result;
use config::{Config, ConfigError, Environment, File};
use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use sha2_engine::Variant;

use crate::report::OutputFormat;

lazy_static! {
    pub static ref SETTINGS: Settings = Settings::new().expect("invalid configuration");
}

const SETTINGS_PATH: &str = "./sha2-tooling.config.toml";
const PREFIX: &str = "SHA2_TOOLING";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub default_variant: String,
    pub output_format: String,
    pub read_buffer_size: usize,
    pub parallel_files: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            default_variant: "sha256".to_string(),
            output_format: "hex".to_string(),
            read_buffer_size: 64 * 1024,
            parallel_files: true,
        }
    }
}

impl Settings {
    fn new() -> Result<Settings, ConfigError> {
        Settings::load(SETTINGS_PATH)
    }

    /// Reads the optional TOML file at `path`, then environment overrides.
    pub fn load(path: &str) -> Result<Settings, ConfigError> {
        Config::builder()
            .add_source(File::with_name(path).required(false))
            .add_source(Environment::with_prefix(PREFIX))
            .build()?
            .try_deserialize()
    }

    pub fn variant(&self) -> Result<Variant> {
        Ok(self.default_variant.parse()?)
    }

    pub fn format(&self) -> Result<OutputFormat> {
        self.output_format.parse()
    }
}
