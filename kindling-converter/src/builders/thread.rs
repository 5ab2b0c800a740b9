use crate::context::{ContextSource, RawEvent};
use crate::errors::Result;
use crate::event::OutputEvent;
use crate::value::AnyValue;
use log::debug;

const SHORT_CONTAINER_ID_LEN: usize = 12;

/// Describes the thread that produced the event, from the engine's thread
/// table. An unknown thread writes nothing.
pub fn add_thread_info(
    event: &mut OutputEvent,
    raw: &dyn RawEvent,
    context: &dyn ContextSource,
    short_container_id: bool,
) -> Result<usize> {
    let Some(thread) = context.thread(raw.tid()) else {
        debug!("tid {} not in thread table", raw.tid());
        return Ok(0);
    };

    let mut attrs = vec![
        ("thread.tid", AnyValue::Uint64(thread.tid)),
        ("thread.pid", AnyValue::Uint64(thread.pid)),
        ("thread.ppid", AnyValue::Uint64(thread.ppid)),
        ("thread.comm", AnyValue::Charbuf(thread.comm)),
        ("thread.exe", AnyValue::Charbuf(thread.exe)),
        ("thread.uid", AnyValue::Uint32(thread.uid)),
        ("thread.gid", AnyValue::Uint32(thread.gid)),
    ];

    if !thread.container_id.is_empty() {
        let container_id: String = if short_container_id {
            thread.container_id.chars().take(SHORT_CONTAINER_ID_LEN).collect()
        } else {
            thread.container_id
        };
        attrs.push(("thread.container_id", AnyValue::Charbuf(container_id)));
    }

    let written = attrs.len();
    for (key, value) in attrs {
        event.set_attribute(key, value);
    }
    Ok(written)
}
