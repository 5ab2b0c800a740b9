//! Configuration validation

use super::Configuration;
use crate::errors::ConvertError;

impl Configuration {
    pub fn validate_output_config(&self) -> Result<(), ConvertError> {
        if self.output.verbose && self.output.quiet {
            return Err(ConvertError::ConfigError {
                message: "Cannot specify both verbose and quiet modes".to_string(),
            });
        }
        Ok(())
    }
}
