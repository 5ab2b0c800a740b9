use crate::classifier::get_protocol;
use crate::context::{ContextSource, RawEvent};
use crate::errors::Result;
use crate::event::OutputEvent;
use crate::value::AnyValue;
use log::debug;

/// Describes the fd the event refers to, from the engine's fd table.
///
/// Events without an fd, and fds the table does not know (already closed,
/// opened before the capture started), write nothing.
pub fn add_fd_info(
    event: &mut OutputEvent,
    raw: &dyn RawEvent,
    context: &dyn ContextSource,
) -> Result<usize> {
    let Some(fd) = raw.fd() else {
        return Ok(0);
    };
    let Some(info) = context.fd(raw.tid(), fd) else {
        debug!("fd {} of tid {} not in fd table", fd, raw.tid());
        return Ok(0);
    };

    let mut attrs = vec![
        ("fd.num", AnyValue::Int64(info.num)),
        ("fd.type", AnyValue::from(info.fd_type.as_str())),
        ("fd.name", AnyValue::from(info.name.as_str())),
        ("fd.flags", AnyValue::Flags(info.open_flags)),
    ];

    if let Some((directory, filename)) = info.directory_and_filename() {
        attrs.push(("fd.directory", AnyValue::from(directory)));
        attrs.push(("fd.filename", AnyValue::from(filename)));
    }

    if info.fd_type.is_inet_socket() {
        let role = if info.is_server { "server" } else { "client" };
        attrs.push(("fd.protocol", AnyValue::from(get_protocol(info.l4proto).as_str())));
        attrs.push(("fd.role", AnyValue::from(role)));
        if let Some(endpoints) = info.endpoints {
            attrs.push(("fd.sip", AnyValue::IpAddr(endpoints.sip)));
            attrs.push(("fd.sport", AnyValue::Uint16(endpoints.sport)));
            attrs.push(("fd.dip", AnyValue::IpAddr(endpoints.dip)));
            attrs.push(("fd.dport", AnyValue::Uint16(endpoints.dport)));
        }
    }

    let written = attrs.len();
    for (key, value) in attrs {
        event.set_attribute(key, value);
    }
    Ok(written)
}
