//! Value model and type mapper
//!
//! `ValueType` is the converter's own type enumeration. Engine parameter tags
//! are mapped onto it by `map_type`, so the output schema does not move when
//! the engine adds or renumbers parameter types. `AnyValue` owns its payload;
//! its type tag is derived from the variant and cannot disagree with it.

use crate::errors::DecodeError;
use crate::extract_string;
use crate::socket::{ip_from_bytes, SockAddr, SockTuple};
use bytes::Bytes;
use kindling_converter_common::param_type::*;
use serde::Serialize;
use std::fmt;
use std::net::IpAddr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueType {
    None,
    Int8,
    Int16,
    Int32,
    Int64,
    Uint8,
    Uint16,
    Uint32,
    Uint64,
    Bool,
    Double,
    Charbuf,
    Bytebuf,
    Flags,
    RelTime,
    AbsTime,
    IpAddr,
    SockAddr,
    SockTuple,
    /// Tag the converter does not understand; bytes are kept verbatim.
    Opaque,
}

impl ValueType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ValueType::None => "none",
            ValueType::Int8 => "int8",
            ValueType::Int16 => "int16",
            ValueType::Int32 => "int32",
            ValueType::Int64 => "int64",
            ValueType::Uint8 => "uint8",
            ValueType::Uint16 => "uint16",
            ValueType::Uint32 => "uint32",
            ValueType::Uint64 => "uint64",
            ValueType::Bool => "bool",
            ValueType::Double => "double",
            ValueType::Charbuf => "charbuf",
            ValueType::Bytebuf => "bytebuf",
            ValueType::Flags => "flags",
            ValueType::RelTime => "rel_time",
            ValueType::AbsTime => "abs_time",
            ValueType::IpAddr => "ip_addr",
            ValueType::SockAddr => "sock_addr",
            ValueType::SockTuple => "sock_tuple",
            ValueType::Opaque => "opaque",
        }
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Maps an engine parameter tag onto the value model. Total: tags the
/// converter does not know map to `ValueType::Opaque`.
pub fn map_type(tag: u8) -> ValueType {
    match tag {
        PT_NONE => ValueType::None,
        PT_INT8 => ValueType::Int8,
        PT_INT16 => ValueType::Int16,
        PT_INT32 => ValueType::Int32,
        PT_INT64 | PT_ERRNO | PT_FD | PT_PID => ValueType::Int64,
        PT_UINT8 | PT_SIGTYPE | PT_L4PROTO | PT_SOCKFAMILY => ValueType::Uint8,
        PT_UINT16 | PT_SYSCALLID | PT_PORT => ValueType::Uint16,
        PT_UINT32 | PT_UID | PT_GID | PT_SIGSET | PT_MODE => ValueType::Uint32,
        PT_UINT64 => ValueType::Uint64,
        PT_CHARBUF | PT_FSPATH | PT_FSRELPATH => ValueType::Charbuf,
        PT_BYTEBUF | PT_FDLIST | PT_CHARBUFARRAY | PT_CHARBUF_PAIR_ARRAY | PT_IPV4NET
        | PT_IPV6NET | PT_IPNET => ValueType::Bytebuf,
        PT_FLAGS8 | PT_FLAGS16 | PT_FLAGS32 => ValueType::Flags,
        PT_RELTIME => ValueType::RelTime,
        PT_ABSTIME => ValueType::AbsTime,
        PT_BOOL => ValueType::Bool,
        PT_DOUBLE => ValueType::Double,
        PT_IPV4ADDR | PT_IPV6ADDR | PT_IPADDR => ValueType::IpAddr,
        PT_SOCKADDR => ValueType::SockAddr,
        PT_SOCKTUPLE => ValueType::SockTuple,
        _ => ValueType::Opaque,
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum AnyValue {
    None,
    Int8(i8),
    Int16(i16),
    Int32(i32),
    Int64(i64),
    Uint8(u8),
    Uint16(u16),
    Uint32(u32),
    Uint64(u64),
    Bool(bool),
    Double(f64),
    Charbuf(String),
    Bytebuf(Bytes),
    Flags(u32),
    RelTime(u64),
    AbsTime(u64),
    IpAddr(IpAddr),
    SockAddr(SockAddr),
    SockTuple(SockTuple),
    Opaque { tag: u8, data: Bytes },
}

impl AnyValue {
    pub fn value_type(&self) -> ValueType {
        match self {
            AnyValue::None => ValueType::None,
            AnyValue::Int8(_) => ValueType::Int8,
            AnyValue::Int16(_) => ValueType::Int16,
            AnyValue::Int32(_) => ValueType::Int32,
            AnyValue::Int64(_) => ValueType::Int64,
            AnyValue::Uint8(_) => ValueType::Uint8,
            AnyValue::Uint16(_) => ValueType::Uint16,
            AnyValue::Uint32(_) => ValueType::Uint32,
            AnyValue::Uint64(_) => ValueType::Uint64,
            AnyValue::Bool(_) => ValueType::Bool,
            AnyValue::Double(_) => ValueType::Double,
            AnyValue::Charbuf(_) => ValueType::Charbuf,
            AnyValue::Bytebuf(_) => ValueType::Bytebuf,
            AnyValue::Flags(_) => ValueType::Flags,
            AnyValue::RelTime(_) => ValueType::RelTime,
            AnyValue::AbsTime(_) => ValueType::AbsTime,
            AnyValue::IpAddr(_) => ValueType::IpAddr,
            AnyValue::SockAddr(_) => ValueType::SockAddr,
            AnyValue::SockTuple(_) => ValueType::SockTuple,
            AnyValue::Opaque { .. } => ValueType::Opaque,
        }
    }

    /// Signed view of any integer-like value.
    pub fn as_i64(&self) -> Option<i64> {
        match *self {
            AnyValue::Int8(v) => Some(v.into()),
            AnyValue::Int16(v) => Some(v.into()),
            AnyValue::Int32(v) => Some(v.into()),
            AnyValue::Int64(v) => Some(v),
            AnyValue::Uint8(v) => Some(v.into()),
            AnyValue::Uint16(v) => Some(v.into()),
            AnyValue::Uint32(v) => Some(v.into()),
            AnyValue::Uint64(v) => i64::try_from(v).ok(),
            _ => None,
        }
    }

    /// Unsigned view of any non-negative integer-like value.
    pub fn as_u64(&self) -> Option<u64> {
        match *self {
            AnyValue::Uint8(v) => Some(v.into()),
            AnyValue::Uint16(v) => Some(v.into()),
            AnyValue::Uint32(v) | AnyValue::Flags(v) => Some(v.into()),
            AnyValue::Uint64(v) | AnyValue::RelTime(v) | AnyValue::AbsTime(v) => Some(v),
            AnyValue::Int8(_) | AnyValue::Int16(_) | AnyValue::Int32(_) | AnyValue::Int64(_) => {
                self.as_i64().and_then(|v| u64::try_from(v).ok())
            }
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            AnyValue::Charbuf(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_ip(&self) -> Option<IpAddr> {
        match self {
            AnyValue::IpAddr(ip) => Some(*ip),
            _ => None,
        }
    }

    /// Re-encodes fixed-width scalars in native byte order, the layout
    /// `decode_value` reads them from.
    pub fn to_ne_bytes(&self) -> Option<Vec<u8>> {
        let bytes = match *self {
            AnyValue::Int8(v) => v.to_ne_bytes().to_vec(),
            AnyValue::Int16(v) => v.to_ne_bytes().to_vec(),
            AnyValue::Int32(v) => v.to_ne_bytes().to_vec(),
            AnyValue::Int64(v) => v.to_ne_bytes().to_vec(),
            AnyValue::Uint8(v) => v.to_ne_bytes().to_vec(),
            AnyValue::Uint16(v) => v.to_ne_bytes().to_vec(),
            AnyValue::Uint32(v) => v.to_ne_bytes().to_vec(),
            AnyValue::Uint64(v) | AnyValue::RelTime(v) | AnyValue::AbsTime(v) => {
                v.to_ne_bytes().to_vec()
            }
            AnyValue::Double(v) => v.to_ne_bytes().to_vec(),
            _ => return None,
        };
        Some(bytes)
    }
}

impl fmt::Display for AnyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnyValue::None => write!(f, "<none>"),
            AnyValue::Int8(v) => write!(f, "{}", v),
            AnyValue::Int16(v) => write!(f, "{}", v),
            AnyValue::Int32(v) => write!(f, "{}", v),
            AnyValue::Int64(v) => write!(f, "{}", v),
            AnyValue::Uint8(v) => write!(f, "{}", v),
            AnyValue::Uint16(v) => write!(f, "{}", v),
            AnyValue::Uint32(v) => write!(f, "{}", v),
            AnyValue::Uint64(v) => write!(f, "{}", v),
            AnyValue::Bool(v) => write!(f, "{}", v),
            AnyValue::Double(v) => write!(f, "{}", v),
            AnyValue::Charbuf(s) => write!(f, "{}", s),
            AnyValue::Bytebuf(b) => write!(f, "<{} bytes>", b.len()),
            AnyValue::Flags(v) => write!(f, "{:#x}", v),
            AnyValue::RelTime(v) => write!(f, "{}ns", v),
            AnyValue::AbsTime(v) => write!(f, "{}", v),
            AnyValue::IpAddr(ip) => write!(f, "{}", ip),
            AnyValue::SockAddr(addr) => write!(f, "{}", addr),
            AnyValue::SockTuple(tuple) => write!(f, "{}", tuple),
            AnyValue::Opaque { tag, data } => write!(f, "<tag {}: {} bytes>", tag, data.len()),
        }
    }
}

impl From<&str> for AnyValue {
    fn from(value: &str) -> Self {
        AnyValue::Charbuf(value.to_string())
    }
}

impl From<String> for AnyValue {
    fn from(value: String) -> Self {
        AnyValue::Charbuf(value)
    }
}

/// Decodes a parameter's bytes according to its engine tag.
///
/// Fixed-width types must match their width exactly; nothing is truncated
/// or padded.
pub fn decode_value(tag: u8, data: &[u8]) -> Result<AnyValue, DecodeError> {
    let value_type = map_type(tag);
    let value = match value_type {
        ValueType::None => AnyValue::None,
        ValueType::Int8 => AnyValue::Int8(i8::from_ne_bytes(fixed(value_type, data)?)),
        ValueType::Int16 => AnyValue::Int16(i16::from_ne_bytes(fixed(value_type, data)?)),
        ValueType::Int32 => AnyValue::Int32(i32::from_ne_bytes(fixed(value_type, data)?)),
        ValueType::Int64 => AnyValue::Int64(i64::from_ne_bytes(fixed(value_type, data)?)),
        ValueType::Uint8 => AnyValue::Uint8(u8::from_ne_bytes(fixed(value_type, data)?)),
        ValueType::Uint16 => AnyValue::Uint16(u16::from_ne_bytes(fixed(value_type, data)?)),
        ValueType::Uint32 => AnyValue::Uint32(u32::from_ne_bytes(fixed(value_type, data)?)),
        ValueType::Uint64 => AnyValue::Uint64(u64::from_ne_bytes(fixed(value_type, data)?)),
        ValueType::RelTime => AnyValue::RelTime(u64::from_ne_bytes(fixed(value_type, data)?)),
        ValueType::AbsTime => AnyValue::AbsTime(u64::from_ne_bytes(fixed(value_type, data)?)),
        ValueType::Double => AnyValue::Double(f64::from_ne_bytes(fixed(value_type, data)?)),
        ValueType::Flags => AnyValue::Flags(decode_flags(tag, data)?),
        ValueType::Bool => AnyValue::Bool(decode_bool(data)?),
        ValueType::Charbuf => AnyValue::Charbuf(extract_string(data)),
        ValueType::Bytebuf => AnyValue::Bytebuf(Bytes::copy_from_slice(data)),
        ValueType::IpAddr => AnyValue::IpAddr(ip_from_bytes(data).ok_or_else(|| {
            DecodeError::malformed(
                value_type,
                format!("{} bytes is neither an IPv4 nor an IPv6 address", data.len()),
            )
        })?),
        ValueType::SockAddr => AnyValue::SockAddr(SockAddr::parse(data)?),
        ValueType::SockTuple => AnyValue::SockTuple(SockTuple::parse(data)?),
        ValueType::Opaque => AnyValue::Opaque {
            tag,
            data: Bytes::copy_from_slice(data),
        },
    };
    Ok(value)
}

fn fixed<const N: usize>(value_type: ValueType, data: &[u8]) -> Result<[u8; N], DecodeError> {
    <[u8; N]>::try_from(data).map_err(|_| DecodeError::LengthMismatch {
        value_type,
        expected: N,
        actual: data.len(),
    })
}

fn decode_flags(tag: u8, data: &[u8]) -> Result<u32, DecodeError> {
    let flags = match tag {
        PT_FLAGS8 => u8::from_ne_bytes(fixed(ValueType::Flags, data)?).into(),
        PT_FLAGS16 => u16::from_ne_bytes(fixed(ValueType::Flags, data)?).into(),
        _ => u32::from_ne_bytes(fixed(ValueType::Flags, data)?),
    };
    Ok(flags)
}

// The engine has shipped both one-byte and four-byte booleans.
fn decode_bool(data: &[u8]) -> Result<bool, DecodeError> {
    match data.len() {
        1 => Ok(data[0] != 0),
        4 => Ok(u32::from_ne_bytes(fixed(ValueType::Bool, data)?) != 0),
        actual => Err(DecodeError::malformed(
            ValueType::Bool,
            format!("expected 1 or 4 bytes, got {}", actual),
        )),
    }
}
