//! Replaying recorded captures through the converter

use std::io::Write;

use assert_matches::assert_matches;
use kindling_converter::configuration::ConverterConfig;
use kindling_converter::report::ConversionReport;
use kindling_converter::{AnyValue, Capture, Category, ConvertError, Converter, Source};
use tempfile::NamedTempFile;

const CAPTURE_YAML: &str = r#"
threads:
  - { tid: 1201, pid: 1200, ppid: 1, comm: curl, exe: /usr/bin/curl }
fds:
  - pid: 1200
    fd: { num: 3, fd_type: ipv4_sock, l4proto: 2 }
  - pid: 1200
    fd: { num: 4, fd_type: file, name: /tmp/out.html }
events:
  - type: 23
    ts: 1700000000000000000
    tid: 1201
    params:
      - { name: res, type: 11, data: [0, 0, 0, 0, 0, 0, 0, 0] }
      - { name: fd, type: 14, data: [3, 0, 0, 0, 0, 0, 0, 0] }
  - type: 9
    ts: 1700000000500000000
    tid: 1201
    fd: 4
    params:
      - { name: res, type: 11, data: [0, 2, 0, 0, 0, 0, 0, 0] }
  - type: 9999
    ts: 1700000001000000000
    tid: 1201
"#;

fn capture_file(suffix: &str, content: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
    write!(file, "{}", content).unwrap();
    file
}

mod capture_loading {
    use super::*;

    #[test]
    fn should_load_yaml_capture_from_file() {
        let file = capture_file(".yaml", CAPTURE_YAML);

        let capture = Capture::load(file.path()).unwrap();

        assert_eq!(capture.threads.len(), 1);
        assert_eq!(capture.fds.len(), 2);
        assert_eq!(capture.events.len(), 3);
        assert_eq!(capture.events[1].fd, Some(4));
    }

    #[test]
    fn should_load_json_capture_written_from_yaml() {
        let capture = Capture::from_yaml_str(CAPTURE_YAML).unwrap();
        let file = capture_file(".json", &serde_json::to_string(&capture).unwrap());

        let reloaded = Capture::load(file.path()).unwrap();

        assert_eq!(reloaded, capture);
    }

    #[test]
    fn should_reject_capture_with_bad_event() {
        let file = capture_file(".yaml", "events:\n  - { type: nope, ts: 1, tid: 1 }\n");

        assert_matches!(Capture::load(file.path()), Err(ConvertError::CaptureError { .. }));
    }
}

mod capture_replay {
    use super::*;

    #[test]
    fn should_convert_every_recorded_event() {
        let (context, events) = Capture::from_yaml_str(CAPTURE_YAML).unwrap().into_parts();
        let converter = Converter::new(context, ConverterConfig::default());

        let converted = converter.convert_all(&events);

        assert_eq!(converted.len(), 3);
        assert_eq!(converted[0].name(), "connect");
        assert_eq!(converted[0].category(), Category::Net);
        assert_eq!(converted[1].name(), "write");
        assert_eq!(converted[1].source(), Source::SyscallExit);
        assert_eq!(converted[1].category(), Category::File);
        assert_eq!(converted[1].attribute("io_bytes"), Some(&AnyValue::Uint64(512)));
        assert_eq!(converted[1].attribute("fd.filename"), Some(&AnyValue::from("out.html")));
        assert_eq!(converted[2].category(), Category::Unknown);
    }

    #[test]
    fn should_summarize_replay() {
        let (context, events) = Capture::from_yaml_str(CAPTURE_YAML).unwrap().into_parts();
        let converter = Converter::new(context, ConverterConfig::default());
        let mut report = ConversionReport::new();

        for event in converter.convert_all(&events) {
            report.record(&event);
        }

        assert_eq!(report.converted_events, 3);
        assert_eq!(report.category_breakdown.get("file"), Some(&1));
        assert_eq!(report.category_breakdown.get("unknown"), Some(&1));
        assert!(report.summary().contains("2023-11-14T22:13:20"));
    }
}
