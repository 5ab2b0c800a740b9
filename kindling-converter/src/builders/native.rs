use super::AttributeBuilder;
use crate::context::RawEvent;
use crate::errors::{ConvertError, Result};
use crate::event::OutputEvent;
use crate::value::decode_value;
use log::debug;

/// Copies every raw parameter onto the event under its engine name.
///
/// A parameter that does not decode is skipped; the rest are still written.
pub fn add_native_attributes(event: &mut OutputEvent, raw: &dyn RawEvent) -> Result<usize> {
    let mut written = 0;
    let mut failures = Vec::new();

    for param in raw.params() {
        match decode_value(param.tag, param.data) {
            Ok(value) => {
                event.set_attribute(param.name, value);
                written += 1;
            }
            Err(source) => {
                debug!(
                    "Skipping parameter {} of {}: {}",
                    param.name,
                    event.name(),
                    source
                );
                failures.push(ConvertError::Decode {
                    param: param.name.to_string(),
                    source,
                });
            }
        }
    }

    if failures.is_empty() {
        Ok(written)
    } else {
        Err(ConvertError::Attributes {
            builder: AttributeBuilder::Native,
            failures,
        })
    }
}
