//! Configuration type definitions

use serde::{Deserialize, Serialize};

/// What to do with events whose type code has no descriptor.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnrecognizedPolicy {
    /// Convert anyway, with unknown source and category.
    #[default]
    Emit,
    Drop,
}

impl UnrecognizedPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            UnrecognizedPolicy::Emit => "emit",
            UnrecognizedPolicy::Drop => "drop",
        }
    }
}

impl std::str::FromStr for UnrecognizedPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "emit" => Ok(UnrecognizedPolicy::Emit),
            "drop" => Ok(UnrecognizedPolicy::Drop),
            _ => Err(format!("Invalid unrecognized-event policy: {}", s)),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConverterConfig {
    pub unrecognized: UnrecognizedPolicy,
    /// Truncate container ids to their 12 character short form.
    pub short_container_id: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub pretty: bool,
    pub verbose: bool,
    pub quiet: bool,
}
