//! Socket address and socket tuple layouts
//!
//! Both start with the engine's family byte. Addresses are stored in network
//! order, ports in host order. An inet tuple may carry one trailing byte with
//! the engine's transport protocol code.

use crate::classifier::get_protocol;
use crate::errors::DecodeError;
use crate::event::L4Proto;
use crate::extract_string;
use crate::value::ValueType;
use kindling_converter_common::socket_family::{AF_INET, AF_INET6, AF_UNIX, AF_UNSPEC};
use kindling_converter_common::socket_layout::{
    IPV4_SOCKADDR_LEN, IPV4_TUPLE_LEN, IPV6_SOCKADDR_LEN, IPV6_TUPLE_LEN, UNIX_TUPLE_HEADER_LEN,
};
use serde::Serialize;
use std::fmt;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr, SocketAddr};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "family", rename_all = "snake_case")]
pub enum SockAddr {
    Unspec,
    Inet { addr: SocketAddr },
    Unix { path: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "family", rename_all = "snake_case")]
pub enum SockTuple {
    Inet {
        src: SocketAddr,
        dst: SocketAddr,
        /// Raw engine protocol code, when the tuple carries one.
        l4proto: Option<u8>,
    },
    Unix {
        src: u64,
        dst: u64,
        path: String,
    },
}

pub(crate) fn ip_from_bytes(data: &[u8]) -> Option<IpAddr> {
    match data.len() {
        4 => <[u8; 4]>::try_from(data).ok().map(|b| IpAddr::V4(Ipv4Addr::from(b))),
        16 => <[u8; 16]>::try_from(data).ok().map(|b| IpAddr::V6(Ipv6Addr::from(b))),
        _ => None,
    }
}

/// Reads one `addr + port` endpoint and returns the remainder.
fn endpoint(data: &[u8], addr_len: usize) -> Option<(SocketAddr, &[u8])> {
    let ip = ip_from_bytes(data.get(..addr_len)?)?;
    let port = data.get(addr_len..addr_len + 2)?;
    let port = u16::from_ne_bytes([port[0], port[1]]);
    Some((SocketAddr::new(ip, port), &data[addr_len + 2..]))
}

impl SockAddr {
    pub fn parse(data: &[u8]) -> Result<Self, DecodeError> {
        let value_type = ValueType::SockAddr;
        let (&family, rest) = data
            .split_first()
            .ok_or_else(|| DecodeError::malformed(value_type, "empty payload"))?;

        match family {
            AF_INET | AF_INET6 => {
                let (expected, addr_len) = if family == AF_INET {
                    (IPV4_SOCKADDR_LEN, 4)
                } else {
                    (IPV6_SOCKADDR_LEN, 16)
                };
                if data.len() != expected {
                    return Err(DecodeError::LengthMismatch {
                        value_type,
                        expected,
                        actual: data.len(),
                    });
                }
                let (addr, _) = endpoint(rest, addr_len)
                    .ok_or_else(|| DecodeError::malformed(value_type, "truncated endpoint"))?;
                Ok(SockAddr::Inet { addr })
            }
            AF_UNIX => Ok(SockAddr::Unix {
                path: extract_string(rest),
            }),
            AF_UNSPEC => Ok(SockAddr::Unspec),
            other => Err(DecodeError::malformed(
                value_type,
                format!("unsupported address family {}", other),
            )),
        }
    }
}

impl SockTuple {
    /// Parses a tuple, choosing the IPv4 or IPv6 layout by payload length.
    /// The family byte has to agree with the chosen layout.
    pub fn parse(data: &[u8]) -> Result<Self, DecodeError> {
        let value_type = ValueType::SockTuple;
        let (&family, rest) = data
            .split_first()
            .ok_or_else(|| DecodeError::malformed(value_type, "empty payload"))?;

        if family == AF_UNIX {
            return Self::parse_unix(data);
        }

        let (layout_family, addr_len) = match data.len() {
            n if n == IPV4_TUPLE_LEN || n == IPV4_TUPLE_LEN + 1 => (AF_INET, 4),
            n if n == IPV6_TUPLE_LEN || n == IPV6_TUPLE_LEN + 1 => (AF_INET6, 16),
            n => {
                return Err(DecodeError::malformed(
                    value_type,
                    format!("{} bytes fits neither the IPv4 nor the IPv6 layout", n),
                ))
            }
        };
        if family != layout_family {
            return Err(DecodeError::malformed(
                value_type,
                format!(
                    "family {} disagrees with a {} byte payload",
                    family,
                    data.len()
                ),
            ));
        }

        let truncated = || DecodeError::malformed(value_type, "truncated endpoint");
        let (src, rest) = endpoint(rest, addr_len).ok_or_else(truncated)?;
        let (dst, rest) = endpoint(rest, addr_len).ok_or_else(truncated)?;
        Ok(SockTuple::Inet {
            src,
            dst,
            l4proto: rest.first().copied(),
        })
    }

    fn parse_unix(data: &[u8]) -> Result<Self, DecodeError> {
        if data.len() < UNIX_TUPLE_HEADER_LEN {
            return Err(DecodeError::LengthMismatch {
                value_type: ValueType::SockTuple,
                expected: UNIX_TUPLE_HEADER_LEN,
                actual: data.len(),
            });
        }
        let word = |range: std::ops::Range<usize>| {
            data.get(range)
                .and_then(|b| <[u8; 8]>::try_from(b).ok())
                .map(u64::from_ne_bytes)
                .unwrap_or_default()
        };
        Ok(SockTuple::Unix {
            src: word(1..9),
            dst: word(9..17),
            path: extract_string(&data[UNIX_TUPLE_HEADER_LEN..]),
        })
    }

    /// Transport protocol carried by the tuple, `Unknown` when absent.
    pub fn protocol(&self) -> L4Proto {
        match self {
            SockTuple::Inet {
                l4proto: Some(code),
                ..
            } => get_protocol(*code),
            _ => L4Proto::Unknown,
        }
    }
}

impl fmt::Display for SockAddr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SockAddr::Unspec => write!(f, "<unspec>"),
            SockAddr::Inet { addr } => write!(f, "{}", addr),
            SockAddr::Unix { path } => write!(f, "unix:{}", path),
        }
    }
}

impl fmt::Display for SockTuple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SockTuple::Inet { src, dst, .. } => write!(f, "{}->{}", src, dst),
            SockTuple::Unix { src, dst, path } => {
                write!(f, "{:#x}->{:#x} {}", src, dst, path)
            }
        }
    }
}
