//! Converter configuration
//!
//! Settings come from CLI arguments and an optional configuration file
//! (JSON, YAML or TOML) and are combined into one validated
//! `Configuration`.
//!
//! ```rust
//! use kindling_converter::configuration::{Configuration, UnrecognizedPolicy};
//!
//! let config = Configuration::builder()
//!     .from_cli_args(&["--drop-unrecognized", "--pretty"])
//!     .unwrap()
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.converter.unrecognized, UnrecognizedPolicy::Drop);
//! assert!(config.output.pretty);
//! ```

pub mod builder;
pub mod types;
mod validation;

pub use builder::ConfigurationBuilder;
pub use types::*;

use crate::errors::ConvertError;
use log::LevelFilter;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Configuration {
    pub converter: ConverterConfig,
    pub output: OutputConfig,
}

impl Configuration {
    pub fn builder() -> ConfigurationBuilder {
        ConfigurationBuilder::new()
    }

    pub fn validate(&self) -> Result<(), ConvertError> {
        self.validate_output_config()
    }

    pub fn is_verbose(&self) -> bool {
        self.output.verbose
    }

    /// Log level implied by the output flags.
    pub fn log_level(&self) -> LevelFilter {
        if self.output.verbose {
            LevelFilter::Debug
        } else if self.output.quiet {
            LevelFilter::Warn
        } else {
            LevelFilter::Info
        }
    }
}
