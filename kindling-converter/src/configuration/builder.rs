//! Configuration builder
//!
//! Sources are applied in call order. A configuration file replaces whole
//! sections, so load it before applying CLI flags.

use super::{Configuration, ConverterConfig, OutputConfig, UnrecognizedPolicy};
use crate::errors::ConvertError;
use std::fs;
use std::path::Path;

#[derive(Debug, Default)]
pub struct ConfigurationBuilder {
    converter: ConverterConfig,
    output: OutputConfig,
}

impl ConfigurationBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Configure from CLI-style arguments. Unknown arguments are ignored.
    pub fn from_cli_args(mut self, args: &[&str]) -> Result<Self, ConvertError> {
        let mut i = 0;
        while i < args.len() {
            match args[i] {
                "--unrecognized" => {
                    let value = args.get(i + 1).ok_or_else(|| ConvertError::ConfigError {
                        message: "Missing value for --unrecognized".to_string(),
                    })?;
                    self.converter.unrecognized = value
                        .parse()
                        .map_err(|message| ConvertError::ConfigError { message })?;
                    i += 2;
                }
                "--drop-unrecognized" => {
                    self.converter.unrecognized = UnrecognizedPolicy::Drop;
                    i += 1;
                }
                "--short-container-id" => {
                    self.converter.short_container_id = true;
                    i += 1;
                }
                "--pretty" => {
                    self.output.pretty = true;
                    i += 1;
                }
                "--verbose" | "-v" => {
                    self.output.verbose = true;
                    i += 1;
                }
                "--quiet" | "-q" => {
                    self.output.quiet = true;
                    i += 1;
                }
                _ => {
                    i += 1;
                }
            }
        }

        Ok(self)
    }

    /// Configure from a JSON, YAML or TOML file, chosen by extension and
    /// falling back to sniffing the content.
    pub fn from_config_file<P: AsRef<Path>>(self, path: P) -> Result<Self, ConvertError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| ConvertError::ConfigError {
            message: format!("Failed to read config file {}: {}", path.display(), e),
        })?;

        match path.extension().and_then(|s| s.to_str()) {
            Some("json") => self.from_json_str(&content),
            Some("toml") => self.from_toml_str(&content),
            Some("yaml") | Some("yml") => self.from_yaml_str(&content),
            _ if content.trim_start().starts_with('{') => self.from_json_str(&content),
            _ => self.from_yaml_str(&content),
        }
    }

    pub fn from_yaml_str(self, yaml: &str) -> Result<Self, ConvertError> {
        let config: Configuration =
            serde_yaml::from_str(yaml).map_err(|e| ConvertError::ConfigError {
                message: format!("Failed to parse YAML config: {}", e),
            })?;
        Ok(self.merge(config))
    }

    pub fn from_json_str(self, json: &str) -> Result<Self, ConvertError> {
        let config: Configuration =
            serde_json::from_str(json).map_err(|e| ConvertError::ConfigError {
                message: format!("Failed to parse JSON config: {}", e),
            })?;
        Ok(self.merge(config))
    }

    pub fn from_toml_str(self, toml: &str) -> Result<Self, ConvertError> {
        let config: Configuration = toml::from_str(toml).map_err(|e| ConvertError::ConfigError {
            message: format!("Failed to parse TOML config: {}", e),
        })?;
        Ok(self.merge(config))
    }

    fn merge(mut self, config: Configuration) -> Self {
        self.converter = config.converter;
        self.output = config.output;
        self
    }

    pub fn build(self) -> Result<Configuration, ConvertError> {
        let config = Configuration {
            converter: self.converter,
            output: self.output,
        };

        config.validate()?;
        Ok(config)
    }
}
