//! Derived attributes
//!
//! Flattens socket tuples and addresses into individual endpoint fields and
//! turns the raw syscall result into `errno`/`is_error` or `io_bytes`.

use super::AttributeBuilder;
use crate::classifier::transfers_data;
use crate::context::RawEvent;
use crate::errors::{ConvertError, Result};
use crate::event::OutputEvent;
use crate::socket::{SockAddr, SockTuple};
use crate::value::{decode_value, AnyValue};
use kindling_converter_common::param_type::{PT_ERRNO, PT_SOCKADDR, PT_SOCKTUPLE};
use log::{debug, warn};
use std::net::SocketAddr;

pub const SRC_IP: &str = "src_ip";
pub const SRC_PORT: &str = "src_port";
pub const DST_IP: &str = "dst_ip";
pub const DST_PORT: &str = "dst_port";
pub const SRC_PATH: &str = "src_path";
pub const DST_PATH: &str = "dst_path";
pub const PROTOCOL: &str = "protocol";
pub const ERRNO: &str = "errno";
pub const IS_ERROR: &str = "is_error";
pub const IO_BYTES: &str = "io_bytes";

pub fn add_user_attributes(event: &mut OutputEvent, raw: &dyn RawEvent) -> Result<usize> {
    let mut written = 0;
    let mut failures = Vec::new();
    let mut result_seen = false;

    for param in raw.params() {
        let outcome = match param.tag {
            PT_SOCKTUPLE => set_tuple(event, param.name, param.data),
            PT_SOCKADDR => set_sockaddr(event, param.name, param.data),
            PT_ERRNO if !result_seen => {
                result_seen = true;
                Ok(set_result(event, raw.event_type(), param.data))
            }
            _ => continue,
        };
        match outcome {
            Ok(count) => written += count,
            Err(err) => failures.push(err),
        }
    }

    if failures.is_empty() {
        Ok(written)
    } else {
        Err(ConvertError::Attributes {
            builder: AttributeBuilder::User,
            failures,
        })
    }
}

/// Writes the endpoint fields of a socket tuple.
///
/// The layout is picked by payload length and must agree with the family
/// byte. A malformed tuple writes nothing.
pub fn set_tuple(event: &mut OutputEvent, param: &str, data: &[u8]) -> Result<usize> {
    let tuple = SockTuple::parse(data).map_err(|err| {
        warn!(
            "Malformed socket tuple in {} of {} ({} bytes): {}",
            param,
            event.name(),
            data.len(),
            err
        );
        ConvertError::Tuple {
            param: param.to_string(),
            reason: err.to_string(),
        }
    })?;

    match &tuple {
        SockTuple::Inet { src, dst, .. } => {
            set_endpoint(event, SRC_IP, SRC_PORT, src);
            set_endpoint(event, DST_IP, DST_PORT, dst);
            event.set_attribute(PROTOCOL, AnyValue::from(tuple.protocol().as_str()));
            Ok(5)
        }
        SockTuple::Unix { path, .. } => {
            event.set_attribute(SRC_PATH, AnyValue::from(path.as_str()));
            Ok(1)
        }
    }
}

fn set_sockaddr(event: &mut OutputEvent, param: &str, data: &[u8]) -> Result<usize> {
    let addr = SockAddr::parse(data).map_err(|source| ConvertError::Decode {
        param: param.to_string(),
        source,
    })?;
    match addr {
        SockAddr::Inet { addr } => {
            set_endpoint(event, DST_IP, DST_PORT, &addr);
            Ok(2)
        }
        SockAddr::Unix { path } => {
            event.set_attribute(DST_PATH, AnyValue::Charbuf(path));
            Ok(1)
        }
        SockAddr::Unspec => Ok(0),
    }
}

fn set_endpoint(event: &mut OutputEvent, ip_key: &str, port_key: &str, addr: &SocketAddr) {
    event.set_attribute(ip_key, AnyValue::IpAddr(addr.ip()));
    event.set_attribute(port_key, AnyValue::Uint16(addr.port()));
}

// Undecodable results are already reported by the native builder.
fn set_result(event: &mut OutputEvent, code: u16, data: &[u8]) -> usize {
    let Some(res) = decode_value(PT_ERRNO, data).ok().and_then(|v| v.as_i64()) else {
        debug!("No usable result on {}", event.name());
        return 0;
    };
    if res < 0 {
        event.set_attribute(ERRNO, AnyValue::Int64(res.saturating_neg()));
        event.set_attribute(IS_ERROR, AnyValue::Bool(true));
        2
    } else if transfers_data(code) {
        event.set_attribute(IO_BYTES, AnyValue::Uint64(res.unsigned_abs()));
        1
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builders::testing::StubEvent;
    use crate::event::{Category, Source};
    use assert_matches::assert_matches;
    use kindling_converter_common::event_type::*;
    use kindling_converter_common::l4_proto;
    use kindling_converter_common::socket_family::{AF_INET, AF_INET6, AF_UNIX};
    use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

    fn event(name: &str) -> OutputEvent {
        OutputEvent::new(Source::SyscallExit, Category::Net, name, 1_000)
    }

    fn ipv4_tuple(src: [u8; 4], sport: u16, dst: [u8; 4], dport: u16, proto: Option<u8>) -> Vec<u8> {
        let mut buf = vec![AF_INET];
        buf.extend_from_slice(&src);
        buf.extend_from_slice(&sport.to_ne_bytes());
        buf.extend_from_slice(&dst);
        buf.extend_from_slice(&dport.to_ne_bytes());
        buf.extend(proto);
        buf
    }

    mod tuples {
        use super::*;

        #[test]
        fn should_flatten_ipv4_tuple() {
            let mut out = event("connect");
            let data = ipv4_tuple([10, 0, 0, 1], 5555, [10, 0, 0, 2], 80, Some(l4_proto::TCP));

            let written = set_tuple(&mut out, "tuple", &data).unwrap();

            assert_eq!(written, 5);
            assert_eq!(
                out.attribute(SRC_IP),
                Some(&AnyValue::IpAddr(IpAddr::V4(Ipv4Addr::new(10, 0, 0, 1))))
            );
            assert_eq!(out.attribute(SRC_PORT), Some(&AnyValue::Uint16(5555)));
            assert_eq!(
                out.attribute(DST_IP),
                Some(&AnyValue::IpAddr(IpAddr::V4(Ipv4Addr::new(10, 0, 0, 2))))
            );
            assert_eq!(out.attribute(DST_PORT), Some(&AnyValue::Uint16(80)));
            assert_eq!(out.attribute(PROTOCOL), Some(&AnyValue::from("TCP")));
        }

        #[test]
        fn should_report_unknown_protocol_without_trailing_byte() {
            let mut out = event("connect");
            let data = ipv4_tuple([10, 0, 0, 1], 5555, [10, 0, 0, 2], 80, None);

            set_tuple(&mut out, "tuple", &data).unwrap();

            assert_eq!(out.attribute(PROTOCOL), Some(&AnyValue::from("UNKNOWN")));
        }

        #[test]
        fn should_flatten_ipv6_tuple() {
            let mut data = vec![AF_INET6];
            data.extend_from_slice(&Ipv6Addr::LOCALHOST.octets());
            data.extend_from_slice(&40000u16.to_ne_bytes());
            data.extend_from_slice(&Ipv6Addr::LOCALHOST.octets());
            data.extend_from_slice(&6379u16.to_ne_bytes());
            data.push(l4_proto::TCP);
            let mut out = event("accept4");

            set_tuple(&mut out, "tuple", &data).unwrap();

            assert_eq!(
                out.attribute(DST_IP).and_then(|v| v.as_ip()),
                Some(IpAddr::V6(Ipv6Addr::LOCALHOST))
            );
            assert_eq!(out.attribute(DST_PORT), Some(&AnyValue::Uint16(6379)));
        }

        #[test]
        fn should_write_path_for_unix_tuple() {
            let mut data = vec![AF_UNIX];
            data.extend_from_slice(&[0u8; 16]);
            data.extend_from_slice(b"/run/app.sock\0");
            let mut out = event("connect");

            assert_eq!(set_tuple(&mut out, "tuple", &data).unwrap(), 1);
            assert_eq!(out.attribute(SRC_PATH), Some(&AnyValue::from("/run/app.sock")));
        }

        #[test]
        fn should_write_nothing_for_truncated_tuple() {
            let mut out = event("connect");
            let data = ipv4_tuple([10, 0, 0, 1], 5555, [10, 0, 0, 2], 80, None);

            let err = set_tuple(&mut out, "tuple", &data[..9]).unwrap_err();

            assert_matches!(err, ConvertError::Tuple { param, .. } if param == "tuple");
            assert!(out.attributes().is_empty());
        }
    }

    mod results {
        use super::*;

        #[test]
        fn should_report_negative_result_as_errno() {
            let raw = StubEvent::new(SOCKET_CONNECT_X).param("res", PT_ERRNO, (-111i64).to_ne_bytes());
            let mut out = event("connect");

            let written = add_user_attributes(&mut out, &raw).unwrap();

            assert_eq!(written, 2);
            assert_eq!(out.attribute(ERRNO), Some(&AnyValue::Int64(111)));
            assert_eq!(out.attribute(IS_ERROR), Some(&AnyValue::Bool(true)));
        }

        #[test]
        fn should_report_transferred_bytes() {
            let raw = StubEvent::new(SYSCALL_READ_X).param("res", PT_ERRNO, 512i64.to_ne_bytes());
            let mut out = event("read");

            add_user_attributes(&mut out, &raw).unwrap();

            assert_eq!(out.attribute(IO_BYTES), Some(&AnyValue::Uint64(512)));
            assert!(!out.attributes().contains_key(IS_ERROR));
        }

        #[test]
        fn should_not_count_bytes_for_non_transfer_events() {
            let raw = StubEvent::new(SOCKET_CONNECT_X).param("res", PT_ERRNO, 0i64.to_ne_bytes());
            let mut out = event("connect");

            assert_eq!(add_user_attributes(&mut out, &raw).unwrap(), 0);
            assert!(out.attributes().is_empty());
        }
    }

    mod addresses {
        use super::*;

        #[test]
        fn should_take_destination_from_connect_address() {
            let mut addr = vec![AF_INET, 192, 168, 1, 10];
            addr.extend_from_slice(&8443u16.to_ne_bytes());
            let raw = StubEvent::new(SOCKET_CONNECT_E)
                .param("fd", kindling_converter_common::param_type::PT_FD, 4i64.to_ne_bytes())
                .param("addr", PT_SOCKADDR, addr);
            let mut out = event("connect");

            add_user_attributes(&mut out, &raw).unwrap();

            assert_eq!(
                out.attribute(DST_IP),
                Some(&AnyValue::IpAddr(IpAddr::V4(Ipv4Addr::new(192, 168, 1, 10))))
            );
            assert_eq!(out.attribute(DST_PORT), Some(&AnyValue::Uint16(8443)));
        }

        #[test]
        fn should_collect_failures_and_keep_going() {
            let raw = StubEvent::new(SOCKET_CONNECT_X)
                .param("res", PT_ERRNO, (-2i64).to_ne_bytes())
                .param("tuple", PT_SOCKTUPLE, vec![AF_INET, 1, 2]);
            let mut out = event("connect");

            let err = add_user_attributes(&mut out, &raw).unwrap_err();

            assert_matches!(err, ConvertError::Attributes { builder: AttributeBuilder::User, failures } => {
                assert_eq!(failures.len(), 1);
            });
            assert_eq!(out.attribute(ERRNO), Some(&AnyValue::Int64(2)));
        }
    }
}
