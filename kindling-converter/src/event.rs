//! Converted event representation
//!
//! `OutputEvent` is what downstream consumers see. Its header (source,
//! category, name, timestamp) is fixed at construction; attributes are added
//! afterwards by the builders and keep their insertion order.

use crate::value::AnyValue;
use chrono::{DateTime, TimeZone, Utc};
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use std::fmt;

/// Subsystem that produced an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Source {
    Unknown,
    SyscallEnter,
    SyscallExit,
    Tracepoint,
    Kprobe,
    Kretprobe,
    Uprobe,
    Uretprobe,
}

impl Source {
    pub fn as_str(&self) -> &'static str {
        match self {
            Source::Unknown => "unknown",
            Source::SyscallEnter => "syscall_enter",
            Source::SyscallExit => "syscall_exit",
            Source::Tracepoint => "tracepoint",
            Source::Kprobe => "kprobe",
            Source::Kretprobe => "kretprobe",
            Source::Uprobe => "uprobe",
            Source::Uretprobe => "uretprobe",
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Coarse operation class of an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Unknown,
    Other,
    File,
    Net,
    Ipc,
    Wait,
    Signal,
    Sleep,
    Time,
    Process,
    Scheduler,
    Memory,
    User,
    System,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Unknown => "unknown",
            Category::Other => "other",
            Category::File => "file",
            Category::Net => "net",
            Category::Ipc => "ipc",
            Category::Wait => "wait",
            Category::Signal => "signal",
            Category::Sleep => "sleep",
            Category::Time => "time",
            Category::Process => "process",
            Category::Scheduler => "scheduler",
            Category::Memory => "memory",
            Category::User => "user",
            Category::System => "system",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Transport protocol, independent of the engine's numeric codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum L4Proto {
    Unknown,
    Tcp,
    Udp,
    Icmp,
    Raw,
}

impl L4Proto {
    pub fn as_str(&self) -> &'static str {
        match self {
            L4Proto::Unknown => "UNKNOWN",
            L4Proto::Tcp => "TCP",
            L4Proto::Udp => "UDP",
            L4Proto::Icmp => "ICMP",
            L4Proto::Raw => "RAW",
        }
    }
}

impl fmt::Display for L4Proto {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Insertion-ordered attribute set with unique keys.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Attributes {
    entries: Vec<(String, AnyValue)>,
}

impl Attributes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces. A replaced key keeps its original position and
    /// the previous value is returned.
    pub fn insert(&mut self, key: impl Into<String>, value: AnyValue) -> Option<AnyValue> {
        let key = key.into();
        match self.entries.iter().position(|(k, _)| *k == key) {
            Some(index) => Some(std::mem::replace(&mut self.entries[index].1, value)),
            None => {
                self.entries.push((key, value));
                None
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<&AnyValue> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &AnyValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl Serialize for Attributes {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

/// A converted ("kindling") event.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OutputEvent {
    source: Source,
    category: Category,
    name: String,
    timestamp: u64,
    attributes: Attributes,
    #[serde(skip_serializing_if = "is_zero")]
    issues: usize,
}

fn is_zero(n: &usize) -> bool {
    *n == 0
}

impl OutputEvent {
    pub fn new(source: Source, category: Category, name: impl Into<String>, timestamp: u64) -> Self {
        Self {
            source,
            category,
            name: name.into(),
            timestamp,
            attributes: Attributes::new(),
            issues: 0,
        }
    }

    pub fn source(&self) -> Source {
        self.source
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Nanoseconds since the epoch, as stamped by the engine.
    pub fn timestamp(&self) -> u64 {
        self.timestamp
    }

    pub fn datetime(&self) -> DateTime<Utc> {
        Utc.timestamp_nanos(i64::try_from(self.timestamp).unwrap_or(i64::MAX))
    }

    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    pub fn attribute(&self, key: &str) -> Option<&AnyValue> {
        self.attributes.get(key)
    }

    pub fn set_attribute(&mut self, key: impl Into<String>, value: AnyValue) -> Option<AnyValue> {
        self.attributes.insert(key, value)
    }

    /// Number of builder steps that reported a failure for this event.
    pub fn issues(&self) -> usize {
        self.issues
    }

    pub(crate) fn record_issue(&mut self) {
        self.issues += 1;
    }

    pub fn is_enter(&self) -> bool {
        self.source == Source::SyscallEnter
    }

    pub fn is_exit(&self) -> bool {
        self.source == Source::SyscallExit
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod attribute_set {
        use super::*;

        #[test]
        fn should_preserve_insertion_order() {
            let mut attrs = Attributes::new();
            attrs.insert("fd", AnyValue::Int64(3));
            attrs.insert("addr", AnyValue::from("x"));
            attrs.insert("res", AnyValue::Int64(0));

            let keys: Vec<&str> = attrs.keys().collect();
            assert_eq!(keys, vec!["fd", "addr", "res"]);
        }

        #[test]
        fn should_supersede_existing_key_in_place() {
            let mut attrs = Attributes::new();
            attrs.insert("fd", AnyValue::Int64(3));
            attrs.insert("res", AnyValue::Int64(0));

            let previous = attrs.insert("fd", AnyValue::Int64(4));

            assert_eq!(previous, Some(AnyValue::Int64(3)));
            assert_eq!(attrs.len(), 2);
            assert_eq!(attrs.get("fd"), Some(&AnyValue::Int64(4)));
            assert_eq!(attrs.keys().next(), Some("fd"));
        }

        #[test]
        fn should_serialize_as_ordered_map() {
            let mut attrs = Attributes::new();
            attrs.insert("z", AnyValue::Uint8(1));
            attrs.insert("a", AnyValue::Bool(true));

            let json = serde_json::to_string(&attrs).unwrap();

            assert_eq!(
                json,
                r#"{"z":{"type":"uint8","value":1},"a":{"type":"bool","value":true}}"#
            );
        }
    }

    mod output_event_header {
        use super::*;

        #[test]
        fn should_carry_header_from_construction() {
            let event = OutputEvent::new(Source::SyscallExit, Category::Net, "connect", 42);

            assert_eq!(event.source(), Source::SyscallExit);
            assert_eq!(event.category(), Category::Net);
            assert_eq!(event.name(), "connect");
            assert_eq!(event.timestamp(), 42);
            assert!(event.attributes().is_empty());
            assert!(event.is_exit());
        }

        #[test]
        fn should_render_timestamp_as_utc() {
            let event = OutputEvent::new(
                Source::Tracepoint,
                Category::Scheduler,
                "switch",
                1_700_000_000_000_000_123,
            );

            assert_eq!(
                event.datetime().to_rfc3339(),
                "2023-11-14T22:13:20.000000123+00:00"
            );
        }

        #[test]
        fn should_omit_issue_count_when_clean() {
            let event = OutputEvent::new(Source::SyscallEnter, Category::File, "open", 1);

            let json = serde_json::to_value(&event).unwrap();

            assert_eq!(json["name"], "open");
            assert_eq!(json["category"], "file");
            assert_eq!(json["source"], "syscall_enter");
            assert!(json.get("issues").is_none());
        }
    }

    #[test]
    fn should_render_protocol_names_in_uppercase() {
        assert_eq!(L4Proto::Tcp.to_string(), "TCP");
        assert_eq!(serde_json::to_string(&L4Proto::Udp).unwrap(), r#""UDP""#);
    }
}
