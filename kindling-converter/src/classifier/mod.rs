//! Event classification
//!
//! Maps a raw event type code onto the converted header: source, category
//! and stable name. The mapping is table driven; lookups go through an index
//! that is built once per process.

mod events;
mod syscalls;

use crate::context::RawEvent;
use crate::errors::{ConvertError, Result};
use crate::event::{Category, L4Proto, Source};
use crate::value::decode_value;
use kindling_converter_common::event_type::{exit_of, is_enter};
use kindling_converter_common::l4_proto;
use kindling_converter_common::param_type::PT_SYSCALLID;
use std::collections::HashMap;
use std::sync::OnceLock;

/// Name given to events whose type code has no descriptor.
pub const UNRECOGNIZED_NAME: &str = "unknown";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    /// Enter/exit pair; the descriptor covers both codes.
    Syscall,
    Tracepoint,
    Kprobe,
    /// Engine bookkeeping with no kernel source.
    Internal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameRule {
    Fixed(&'static str),
    /// Resolved from the syscall id in the first parameter.
    BySyscallId,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryRule {
    Fixed(Category),
    BySyscallId,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EventDescriptor {
    /// Enter code of the event.
    pub code: u16,
    pub name: NameRule,
    pub kind: EventKind,
    pub category: CategoryRule,
    /// A non-negative result counts transferred bytes.
    pub transfers_data: bool,
}

impl EventDescriptor {
    /// Every raw code this descriptor answers for.
    pub fn codes(&self) -> impl Iterator<Item = u16> {
        let exit = match self.kind {
            EventKind::Syscall | EventKind::Internal => Some(exit_of(self.code)),
            EventKind::Tracepoint | EventKind::Kprobe => None,
        };
        std::iter::once(self.code).chain(exit)
    }

    pub fn source_for(&self, code: u16) -> Source {
        match self.kind {
            EventKind::Syscall if is_enter(code) => Source::SyscallEnter,
            EventKind::Syscall => Source::SyscallExit,
            EventKind::Tracepoint => Source::Tracepoint,
            EventKind::Kprobe => Source::Kprobe,
            EventKind::Internal => Source::Unknown,
        }
    }
}

fn descriptor_index() -> &'static HashMap<u16, &'static EventDescriptor> {
    static INDEX: OnceLock<HashMap<u16, &'static EventDescriptor>> = OnceLock::new();
    INDEX.get_or_init(|| {
        let mut index = HashMap::with_capacity(events::EVENT_TABLE.len() * 2);
        for descriptor in events::EVENT_TABLE {
            for code in descriptor.codes() {
                index.insert(code, descriptor);
            }
        }
        index
    })
}

fn syscall_index() -> &'static HashMap<u16, (&'static str, Category)> {
    static INDEX: OnceLock<HashMap<u16, (&'static str, Category)>> = OnceLock::new();
    INDEX.get_or_init(|| {
        syscalls::SYSCALL_TABLE
            .iter()
            .map(|&(id, name, category)| (id, (name, category)))
            .collect()
    })
}

pub fn descriptor(code: u16) -> Option<&'static EventDescriptor> {
    descriptor_index().get(&code).copied()
}

pub fn is_recognized(code: u16) -> bool {
    descriptor(code).is_some()
}

pub fn transfers_data(code: u16) -> bool {
    descriptor(code).is_some_and(|d| d.transfers_data)
}

/// Name and category of a syscall id carried by a generic event.
pub fn syscall_info(id: u16) -> Option<(&'static str, Category)> {
    syscall_index().get(&id).copied()
}

fn generic_syscall_id(raw: &dyn RawEvent) -> Result<u16> {
    let code = raw.event_type();
    let param = raw.param(0).ok_or_else(|| ConvertError::Classification {
        code,
        reason: "generic event carries no syscall id".to_string(),
    })?;
    if param.tag != PT_SYSCALLID {
        return Err(ConvertError::Classification {
            code,
            reason: format!("first parameter {} is not a syscall id", param.name),
        });
    }
    let value = decode_value(param.tag, param.data).map_err(|err| ConvertError::Classification {
        code,
        reason: format!("undecodable syscall id: {}", err),
    })?;
    value
        .as_u64()
        .and_then(|id| u16::try_from(id).ok())
        .ok_or_else(|| ConvertError::Classification {
            code,
            reason: format!("syscall id {} out of range", value),
        })
}

pub fn get_source(code: u16) -> Source {
    descriptor(code)
        .map(|d| d.source_for(code))
        .unwrap_or(Source::Unknown)
}

/// Category of the event, from the type code and its parameters only. The fd
/// table never changes the header; what the fd refers to is reported by the
/// fd attributes instead.
pub fn get_category(raw: &dyn RawEvent) -> Result<Category> {
    let Some(descriptor) = descriptor(raw.event_type()) else {
        return Ok(Category::Unknown);
    };
    match descriptor.category {
        CategoryRule::Fixed(category) => Ok(category),
        CategoryRule::BySyscallId => {
            let id = generic_syscall_id(raw)?;
            Ok(syscall_info(id)
                .map(|(_, category)| category)
                .unwrap_or(Category::Other))
        }
    }
}

pub fn get_name(raw: &dyn RawEvent) -> Result<String> {
    let Some(descriptor) = descriptor(raw.event_type()) else {
        return Ok(UNRECOGNIZED_NAME.to_string());
    };
    match descriptor.name {
        NameRule::Fixed(name) => Ok(name.to_string()),
        NameRule::BySyscallId => {
            let id = generic_syscall_id(raw)?;
            Ok(syscall_info(id)
                .map(|(name, _)| name.to_string())
                .unwrap_or_else(|| format!("syscall_{}", id)))
        }
    }
}

pub fn get_protocol(code: u8) -> L4Proto {
    match code {
        l4_proto::TCP => L4Proto::Tcp,
        l4_proto::UDP => L4Proto::Udp,
        l4_proto::ICMP => L4Proto::Icmp,
        l4_proto::RAW => L4Proto::Raw,
        _ => L4Proto::Unknown,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::RawParam;
    use assert_matches::assert_matches;
    use kindling_converter_common::event_type::*;
    use kindling_converter_common::param_type::{PT_ERRNO, PT_FD};
    use std::collections::HashSet;

    struct SampleEvent {
        code: u16,
        params: Vec<(&'static str, u8, Vec<u8>)>,
    }

    impl SampleEvent {
        fn new(code: u16) -> Self {
            Self {
                code,
                params: Vec::new(),
            }
        }

        fn param(mut self, name: &'static str, tag: u8, data: Vec<u8>) -> Self {
            self.params.push((name, tag, data));
            self
        }
    }

    impl RawEvent for SampleEvent {
        fn event_type(&self) -> u16 {
            self.code
        }

        fn timestamp(&self) -> u64 {
            0
        }

        fn tid(&self) -> u64 {
            42
        }

        fn param_count(&self) -> usize {
            self.params.len()
        }

        fn param(&self, index: usize) -> Option<RawParam<'_>> {
            self.params.get(index).map(|(name, tag, data)| RawParam {
                name,
                tag: *tag,
                data,
            })
        }
    }

    mod descriptor_table {
        use super::*;

        #[test]
        fn should_not_register_a_code_twice() {
            let mut seen = HashSet::new();
            for descriptor in events::EVENT_TABLE {
                for code in descriptor.codes() {
                    assert!(seen.insert(code), "code {} registered twice", code);
                }
            }
        }

        #[test]
        fn should_only_use_even_enter_codes() {
            for descriptor in events::EVENT_TABLE {
                assert!(is_enter(descriptor.code), "{:?}", descriptor);
            }
        }

        #[test]
        fn should_not_repeat_syscall_ids() {
            let ids: HashSet<u16> = syscalls::SYSCALL_TABLE.iter().map(|row| row.0).collect();

            assert_eq!(ids.len(), syscalls::SYSCALL_TABLE.len());
        }

        #[test]
        fn should_mark_data_transfers_in_both_directions() {
            assert!(transfers_data(SYSCALL_READ_E));
            assert!(transfers_data(SYSCALL_READ_X));
            assert!(transfers_data(SOCKET_SENDTO_X));
            assert!(!transfers_data(SOCKET_CONNECT_X));
            assert!(!transfers_data(SYSCALL_CLOSE_X));
            assert!(!transfers_data(9999));
        }
    }

    mod sources {
        use super::*;

        #[test]
        fn should_split_syscall_pairs_by_direction() {
            assert_eq!(get_source(SOCKET_CONNECT_E), Source::SyscallEnter);
            assert_eq!(get_source(SOCKET_CONNECT_X), Source::SyscallExit);
        }

        #[test]
        fn should_mark_probe_sources() {
            assert_eq!(get_source(SCHEDSWITCH_6_E), Source::Tracepoint);
            assert_eq!(get_source(PAGE_FAULT_E), Source::Tracepoint);
            assert_eq!(get_source(TCP_RETRANSMIT_SKB_E), Source::Kprobe);
        }

        #[test]
        fn should_leave_engine_and_unknown_codes_unknown() {
            assert_eq!(get_source(CONTAINER_E), Source::Unknown);
            assert_eq!(get_source(9999), Source::Unknown);
            assert_eq!(get_source(TCP_CLOSE_E + 1), Source::Unknown);
        }
    }

    mod names {
        use super::*;

        #[test]
        fn should_give_both_directions_the_same_name() {
            assert_eq!(get_name(&SampleEvent::new(SOCKET_CONNECT_E)).unwrap(), "connect");
            assert_eq!(get_name(&SampleEvent::new(SOCKET_CONNECT_X)).unwrap(), "connect");
        }

        #[test]
        fn should_collapse_versioned_events() {
            assert_eq!(get_name(&SampleEvent::new(SYSCALL_EXECVE_8_E)).unwrap(), "execve");
            assert_eq!(
                get_name(&SampleEvent::new(exit_of(SYSCALL_EXECVE_19_E))).unwrap(),
                "execve"
            );
        }

        #[test]
        fn should_name_generic_events_by_syscall_id() {
            let raw = SampleEvent::new(GENERIC_E).param("ID", PT_SYSCALLID, 168u16.to_ne_bytes().to_vec());

            assert_eq!(get_name(&raw).unwrap(), "clock_gettime");
        }

        #[test]
        fn should_name_unlisted_syscall_ids_by_number() {
            let raw = SampleEvent::new(GENERIC_X).param("ID", PT_SYSCALLID, 4000u16.to_ne_bytes().to_vec());

            assert_eq!(get_name(&raw).unwrap(), "syscall_4000");
        }

        #[test]
        fn should_fail_generic_event_without_syscall_id() {
            let raw = SampleEvent::new(GENERIC_E).param("res", PT_ERRNO, 0i64.to_ne_bytes().to_vec());

            assert_matches!(
                get_name(&raw),
                Err(ConvertError::Classification { code: GENERIC_E, .. })
            );
            assert_matches!(
                get_name(&SampleEvent::new(GENERIC_E)),
                Err(ConvertError::Classification { .. })
            );
        }

        #[test]
        fn should_fail_generic_event_with_truncated_syscall_id() {
            let raw = SampleEvent::new(GENERIC_E).param("ID", PT_SYSCALLID, vec![1]);

            assert_matches!(get_name(&raw), Err(ConvertError::Classification { reason, .. }) => {
                assert!(reason.contains("undecodable"));
            });
        }

        #[test]
        fn should_report_unrecognized_codes() {
            assert_eq!(get_name(&SampleEvent::new(9998)).unwrap(), UNRECOGNIZED_NAME);
        }
    }

    mod categories {
        use super::*;

        fn fd_param(fd: i64) -> Vec<u8> {
            fd.to_ne_bytes().to_vec()
        }

        #[test]
        fn should_use_fixed_categories() {
            assert_eq!(get_category(&SampleEvent::new(SOCKET_CONNECT_X)).unwrap(), Category::Net);
            assert_eq!(get_category(&SampleEvent::new(SYSCALL_OPENAT_2_E)).unwrap(), Category::File);
            assert_eq!(
                get_category(&SampleEvent::new(SCHEDSWITCH_6_E)).unwrap(),
                Category::Scheduler
            );
        }

        #[test]
        fn should_classify_io_families_by_code() {
            let read = SampleEvent::new(SYSCALL_READ_E).param("fd", PT_FD, fd_param(3));
            let write = SampleEvent::new(SYSCALL_WRITE_X).param("res", PT_ERRNO, fd_param(12));
            let send = SampleEvent::new(SOCKET_SENDTO_E).param("fd", PT_FD, fd_param(3));
            let recv = SampleEvent::new(SOCKET_RECVFROM_X).param("res", PT_ERRNO, fd_param(12));

            assert_eq!(get_category(&read).unwrap(), Category::File);
            assert_eq!(get_category(&write).unwrap(), Category::File);
            assert_eq!(get_category(&send).unwrap(), Category::Net);
            assert_eq!(get_category(&recv).unwrap(), Category::Net);
        }

        #[test]
        fn should_not_depend_on_fd_number() {
            let on_three = SampleEvent::new(SYSCALL_READ_E).param("fd", PT_FD, fd_param(3));
            let on_nine = SampleEvent::new(SYSCALL_READ_E).param("fd", PT_FD, fd_param(9));
            let without_fd = SampleEvent::new(SYSCALL_READ_E);

            assert_eq!(get_category(&on_three).unwrap(), get_category(&on_nine).unwrap());
            assert_eq!(get_category(&on_three).unwrap(), get_category(&without_fd).unwrap());
        }

        #[test]
        fn should_take_generic_category_from_syscall_table() {
            let raw = SampleEvent::new(GENERIC_E).param("ID", PT_SYSCALLID, 99u16.to_ne_bytes().to_vec());

            assert_eq!(get_category(&raw).unwrap(), Category::Scheduler);
        }

        #[test]
        fn should_put_unlisted_syscalls_in_other() {
            let raw = SampleEvent::new(GENERIC_E).param("ID", PT_SYSCALLID, 4000u16.to_ne_bytes().to_vec());

            assert_eq!(get_category(&raw).unwrap(), Category::Other);
        }

        #[test]
        fn should_report_unknown_for_unrecognized_codes() {
            assert_eq!(get_category(&SampleEvent::new(9998)).unwrap(), Category::Unknown);
        }
    }

    #[test]
    fn should_map_protocol_codes() {
        assert_eq!(get_protocol(l4_proto::TCP), L4Proto::Tcp);
        assert_eq!(get_protocol(l4_proto::UDP), L4Proto::Udp);
        assert_eq!(get_protocol(l4_proto::ICMP), L4Proto::Icmp);
        assert_eq!(get_protocol(l4_proto::RAW), L4Proto::Raw);
        assert_eq!(get_protocol(l4_proto::NA), L4Proto::Unknown);
        assert_eq!(get_protocol(77), L4Proto::Unknown);
    }
}
