//! Converts raw tracing-engine events into kindling events.
//!
//! The engine hands over one raw event at a time, together with read access
//! to its thread and fd tables. [`Converter::convert`] turns that into an
//! [`OutputEvent`]: a classified header plus a flat, ordered attribute set.

pub mod builders;
pub mod capture;
pub mod classifier;
pub mod cli;
pub mod configuration;
pub mod context;
pub mod converter;
pub mod errors;
pub mod event;
pub mod report;
pub mod socket;
pub mod value;

pub use capture::{Capture, RecordedEvent};
pub use cli::Args;
pub use context::{ContextSource, ContextTables, FdInfo, RawEvent, RawParam, ThreadInfo};
pub use converter::Converter;
pub use errors::{ConvertError, DecodeError};
pub use event::{Category, L4Proto, OutputEvent, Source};
pub use value::{decode_value, map_type, AnyValue, ValueType};

/// Reads a NUL-terminated string, lossily. Without a terminator the whole
/// buffer is used.
pub fn extract_string(bytes: &[u8]) -> String {
    let end = bytes.iter().position(|&b| b == 0).unwrap_or(bytes.len());
    String::from_utf8_lossy(&bytes[..end]).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    mod string_extraction {
        use super::*;

        #[test]
        fn should_stop_at_first_nul() {
            assert_eq!(extract_string(b"/etc/passwd\0garbage"), "/etc/passwd");
        }

        #[test]
        fn should_use_whole_buffer_without_terminator() {
            assert_eq!(extract_string(b"nginx"), "nginx");
        }

        #[test]
        fn should_handle_empty_input() {
            assert_eq!(extract_string(b""), "");
            assert_eq!(extract_string(b"\0"), "");
        }

        #[test]
        fn should_replace_invalid_utf8() {
            assert_eq!(extract_string(&[0x66, 0xff, 0x6f, 0]), "f\u{fffd}o");
        }
    }
}
