//! Attribute builders
//!
//! Each builder reads one aspect of the raw event (or its context) and writes
//! attributes onto an `OutputEvent`. Builders return the number of attributes
//! they wrote. An error means the builder finished with gaps; whatever it
//! could write is already on the event.

pub mod fd;
pub mod native;
pub mod thread;
pub mod user;

pub use fd::add_fd_info;
pub use native::add_native_attributes;
pub use thread::add_thread_info;
pub use user::{add_user_attributes, set_tuple};

use crate::configuration::ConverterConfig;
use crate::context::{ContextSource, RawEvent};
use crate::errors::Result;
use crate::event::OutputEvent;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttributeBuilder {
    Native,
    User,
    FdInfo,
    ThreadInfo,
}

impl AttributeBuilder {
    /// Every builder, in the order a conversion runs them.
    pub const ALL: [AttributeBuilder; 4] = [
        AttributeBuilder::Native,
        AttributeBuilder::User,
        AttributeBuilder::FdInfo,
        AttributeBuilder::ThreadInfo,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AttributeBuilder::Native => "native",
            AttributeBuilder::User => "user",
            AttributeBuilder::FdInfo => "fd",
            AttributeBuilder::ThreadInfo => "thread",
        }
    }

    pub fn apply(
        &self,
        event: &mut OutputEvent,
        raw: &dyn RawEvent,
        context: &dyn ContextSource,
        config: &ConverterConfig,
    ) -> Result<usize> {
        match self {
            AttributeBuilder::Native => add_native_attributes(event, raw),
            AttributeBuilder::User => add_user_attributes(event, raw),
            AttributeBuilder::FdInfo => add_fd_info(event, raw, context),
            AttributeBuilder::ThreadInfo => {
                add_thread_info(event, raw, context, config.short_container_id)
            }
        }
    }
}

impl fmt::Display for AttributeBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
