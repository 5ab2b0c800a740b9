//! Raw event to kindling event conversion
//!
//! A conversion classifies the event header first and then runs every
//! attribute builder in order. Builder failures degrade the event (counted
//! in `OutputEvent::issues`) but never drop it. Only an unrecognized code
//! under the drop policy, or a header that cannot be classified at all,
//! ends the conversion with an error.

use crate::builders::AttributeBuilder;
use crate::classifier::{get_category, get_name, get_source, is_recognized, UNRECOGNIZED_NAME};
use crate::configuration::{ConverterConfig, UnrecognizedPolicy};
use crate::context::{ContextSource, RawEvent};
use crate::errors::{ConvertError, Result};
use crate::event::{Category, OutputEvent, Source};
use log::{debug, warn};

/// Stateless apart from the context handle; safe to share across threads
/// when the context is.
#[derive(Debug, Clone)]
pub struct Converter<C: ContextSource> {
    context: C,
    config: ConverterConfig,
}

impl<C: ContextSource> Converter<C> {
    pub fn new(context: C, config: ConverterConfig) -> Self {
        Self { context, config }
    }

    pub fn context(&self) -> &C {
        &self.context
    }

    pub fn config(&self) -> &ConverterConfig {
        &self.config
    }

    pub fn convert(&self, raw: &dyn RawEvent) -> Result<OutputEvent> {
        let mut event = self.header(raw)?;

        for builder in AttributeBuilder::ALL {
            match builder.apply(&mut event, raw, &self.context, &self.config) {
                Ok(written) => {
                    debug!("{} builder wrote {} attribute(s) on {}", builder, written, event.name());
                }
                Err(err) => {
                    warn!("{} (event {} at {})", err, event.name(), event.timestamp());
                    if let ConvertError::Attributes { failures, .. } = &err {
                        for failure in failures {
                            debug!("  {}", failure);
                        }
                    }
                    event.record_issue();
                }
            }
        }

        Ok(event)
    }

    /// Converts a batch in order. Events that fail to convert are logged and
    /// left out.
    pub fn convert_all<'a, I, E>(&self, events: I) -> Vec<OutputEvent>
    where
        I: IntoIterator<Item = &'a E>,
        E: RawEvent + 'a,
    {
        events
            .into_iter()
            .filter_map(|raw| match self.convert(raw) {
                Ok(event) => Some(event),
                Err(err) => {
                    debug!("Dropping event: {}", err);
                    None
                }
            })
            .collect()
    }

    fn header(&self, raw: &dyn RawEvent) -> Result<OutputEvent> {
        let code = raw.event_type();

        if !is_recognized(code) {
            return match self.config.unrecognized {
                UnrecognizedPolicy::Emit => Ok(OutputEvent::new(
                    Source::Unknown,
                    Category::Unknown,
                    UNRECOGNIZED_NAME,
                    raw.timestamp(),
                )),
                UnrecognizedPolicy::Drop => {
                    warn!("Dropping event with unrecognized type code {}", code);
                    Err(ConvertError::UnrecognizedEvent { code })
                }
            };
        }

        let classified = get_name(raw).and_then(|name| {
            get_category(raw).map(|category| (name, category))
        });
        let (name, category) = classified.map_err(|err| {
            warn!("{}", err);
            err
        })?;

        Ok(OutputEvent::new(get_source(code), category, name, raw.timestamp()))
    }
}
