//! Recorded captures
//!
//! A capture is a snapshot of the engine's thread and fd tables plus a list
//! of raw events, stored as JSON or YAML. It lets the converter run without
//! a live engine.
//!
//! ```yaml
//! threads:
//!   - { tid: 1201, pid: 1200, comm: curl }
//! fds:
//!   - pid: 1200
//!     fd: { num: 3, fd_type: ipv4_sock, l4proto: 2 }
//! events:
//!   - type: 23
//!     ts: 1700000000000000000
//!     tid: 1201
//!     params:
//!       - { name: res, type: 11, data: [0, 0, 0, 0, 0, 0, 0, 0] }
//! ```

use crate::context::{fd_param, ContextTables, FdInfo, RawEvent, RawParam, ThreadInfo};
use crate::errors::ConvertError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordedParam {
    pub name: String,
    #[serde(rename = "type")]
    pub tag: u8,
    #[serde(default)]
    pub data: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordedEvent {
    #[serde(rename = "type")]
    pub event_type: u16,
    pub ts: u64,
    pub tid: u64,
    #[serde(default)]
    pub params: Vec<RecordedParam>,
    /// Fd the engine associated with the event, when it is not a parameter
    /// (exit events of read/write, for instance).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fd: Option<i64>,
}

impl RecordedEvent {
    pub fn new(event_type: u16, ts: u64, tid: u64) -> Self {
        Self {
            event_type,
            ts,
            tid,
            params: Vec::new(),
            fd: None,
        }
    }

    pub fn param(mut self, name: &str, tag: u8, data: impl Into<Vec<u8>>) -> Self {
        self.params.push(RecordedParam {
            name: name.to_string(),
            tag,
            data: data.into(),
        });
        self
    }

    pub fn with_fd(mut self, fd: i64) -> Self {
        self.fd = Some(fd);
        self
    }
}

impl RawEvent for RecordedEvent {
    fn event_type(&self) -> u16 {
        self.event_type
    }

    fn timestamp(&self) -> u64 {
        self.ts
    }

    fn tid(&self) -> u64 {
        self.tid
    }

    fn param_count(&self) -> usize {
        self.params.len()
    }

    fn param(&self, index: usize) -> Option<RawParam<'_>> {
        self.params.get(index).map(|p| RawParam {
            name: &p.name,
            tag: p.tag,
            data: &p.data,
        })
    }

    fn fd(&self) -> Option<i64> {
        self.fd.or_else(|| fd_param(self))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FdEntry {
    pub pid: u64,
    pub fd: FdInfo,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Capture {
    #[serde(default)]
    pub threads: Vec<ThreadInfo>,
    #[serde(default)]
    pub fds: Vec<FdEntry>,
    #[serde(default)]
    pub events: Vec<RecordedEvent>,
}

impl Capture {
    /// Loads a capture file. `.json` files and content starting with `{` are
    /// read as JSON, everything else as YAML.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConvertError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| ConvertError::CaptureError {
            message: format!("Failed to read capture {}: {}", path.display(), e),
        })?;

        if path.extension().and_then(|s| s.to_str()) == Some("json")
            || content.trim_start().starts_with('{')
        {
            Self::from_json_str(&content)
        } else {
            Self::from_yaml_str(&content)
        }
    }

    pub fn from_json_str(json: &str) -> Result<Self, ConvertError> {
        serde_json::from_str(json).map_err(|e| ConvertError::CaptureError {
            message: format!("Failed to parse JSON capture: {}", e),
        })
    }

    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConvertError> {
        serde_yaml::from_str(yaml).map_err(|e| ConvertError::CaptureError {
            message: format!("Failed to parse YAML capture: {}", e),
        })
    }

    pub fn context(&self) -> ContextTables {
        let mut tables = ContextTables::new();
        for thread in &self.threads {
            tables.insert_thread(thread.clone());
        }
        for entry in &self.fds {
            tables.insert_fd(entry.pid, entry.fd.clone());
        }
        tables
    }

    pub fn into_parts(self) -> (ContextTables, Vec<RecordedEvent>) {
        let tables = self.context();
        (tables, self.events)
    }
}
