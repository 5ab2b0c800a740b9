//! Raw event accessors and context lookups
//!
//! The tracing engine owns the raw event buffer and the live thread/fd
//! tables. The converter only reads them through the traits in this module
//! and treats every lookup miss as "absent".

use kindling_converter_common::fd_type;
use kindling_converter_common::param_type::PT_FD;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::net::IpAddr;
use std::sync::Arc;

/// One positional parameter of a raw event, borrowed from the engine buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawParam<'a> {
    pub name: &'a str,
    pub tag: u8,
    pub data: &'a [u8],
}

/// Accessor interface over the engine's current event.
///
/// Implementations are only borrowed for the duration of one conversion.
pub trait RawEvent {
    fn event_type(&self) -> u16;

    fn timestamp(&self) -> u64;

    fn tid(&self) -> u64;

    fn param_count(&self) -> usize;

    fn param(&self, index: usize) -> Option<RawParam<'_>>;

    fn params(&self) -> Vec<RawParam<'_>> {
        (0..self.param_count())
            .filter_map(|index| self.param(index))
            .collect()
    }

    /// File descriptor the event refers to.
    ///
    /// Defaults to the first fd-typed parameter. Engines that track the fd of
    /// exit events elsewhere override this.
    fn fd(&self) -> Option<i64> {
        fd_param(self)
    }
}

/// First fd-typed parameter holding a valid (non-negative) descriptor.
pub fn fd_param<E: RawEvent + ?Sized>(raw: &E) -> Option<i64> {
    raw.params()
        .into_iter()
        .find(|param| param.tag == PT_FD)
        .and_then(|param| <[u8; 8]>::try_from(param.data).ok())
        .map(i64::from_ne_bytes)
        .filter(|fd| *fd >= 0)
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThreadInfo {
    pub tid: u64,
    pub pid: u64,
    #[serde(default)]
    pub ppid: u64,
    #[serde(default)]
    pub comm: String,
    #[serde(default)]
    pub exe: String,
    #[serde(default)]
    pub uid: u32,
    #[serde(default)]
    pub gid: u32,
    #[serde(default)]
    pub container_id: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FdType {
    #[default]
    Unknown,
    File,
    Directory,
    Ipv4Sock,
    Ipv6Sock,
    Ipv4ServerSock,
    Ipv6ServerSock,
    Fifo,
    UnixSock,
    Event,
    Signalfd,
    Eventpoll,
    Inotify,
    Timerfd,
    Netlink,
    Unsupported,
}

impl FdType {
    pub const ALL: [FdType; 16] = [
        FdType::Unknown,
        FdType::File,
        FdType::Directory,
        FdType::Ipv4Sock,
        FdType::Ipv6Sock,
        FdType::Ipv4ServerSock,
        FdType::Ipv6ServerSock,
        FdType::Fifo,
        FdType::UnixSock,
        FdType::Event,
        FdType::Signalfd,
        FdType::Eventpoll,
        FdType::Inotify,
        FdType::Timerfd,
        FdType::Netlink,
        FdType::Unsupported,
    ];

    pub fn from_raw(code: u8) -> Self {
        match code {
            fd_type::FILE | fd_type::FILE_V2 => FdType::File,
            fd_type::DIRECTORY => FdType::Directory,
            fd_type::IPV4_SOCK => FdType::Ipv4Sock,
            fd_type::IPV6_SOCK => FdType::Ipv6Sock,
            fd_type::IPV4_SERVSOCK => FdType::Ipv4ServerSock,
            fd_type::IPV6_SERVSOCK => FdType::Ipv6ServerSock,
            fd_type::FIFO => FdType::Fifo,
            fd_type::UNIX_SOCK => FdType::UnixSock,
            fd_type::EVENT => FdType::Event,
            fd_type::SIGNALFD => FdType::Signalfd,
            fd_type::EVENTPOLL => FdType::Eventpoll,
            fd_type::INOTIFY => FdType::Inotify,
            fd_type::TIMERFD => FdType::Timerfd,
            fd_type::NETLINK => FdType::Netlink,
            fd_type::UNSUPPORTED => FdType::Unsupported,
            _ => FdType::Unknown,
        }
    }

    /// Same names as the serialized form.
    pub fn as_str(&self) -> &'static str {
        match self {
            FdType::Unknown => "unknown",
            FdType::File => "file",
            FdType::Directory => "directory",
            FdType::Ipv4Sock => "ipv4_sock",
            FdType::Ipv6Sock => "ipv6_sock",
            FdType::Ipv4ServerSock => "ipv4_server_sock",
            FdType::Ipv6ServerSock => "ipv6_server_sock",
            FdType::Fifo => "fifo",
            FdType::UnixSock => "unix_sock",
            FdType::Event => "event",
            FdType::Signalfd => "signalfd",
            FdType::Eventpoll => "eventpoll",
            FdType::Inotify => "inotify",
            FdType::Timerfd => "timerfd",
            FdType::Netlink => "netlink",
            FdType::Unsupported => "unsupported",
        }
    }

    /// IPv4/IPv6 sockets, client or server side.
    pub fn is_inet_socket(&self) -> bool {
        matches!(
            self,
            FdType::Ipv4Sock | FdType::Ipv6Sock | FdType::Ipv4ServerSock | FdType::Ipv6ServerSock
        )
    }

    pub fn is_file(&self) -> bool {
        matches!(self, FdType::File | FdType::Directory)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocketEndpoints {
    pub sip: IpAddr,
    pub sport: u16,
    pub dip: IpAddr,
    pub dport: u16,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FdInfo {
    pub num: i64,
    #[serde(default)]
    pub fd_type: FdType,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub open_flags: u32,
    /// Raw engine transport protocol code.
    #[serde(default)]
    pub l4proto: u8,
    #[serde(default)]
    pub endpoints: Option<SocketEndpoints>,
    #[serde(default)]
    pub is_server: bool,
}

impl FdInfo {
    /// Splits a file path into directory and file name.
    pub fn directory_and_filename(&self) -> Option<(&str, &str)> {
        if !self.fd_type.is_file() || self.name.is_empty() {
            return None;
        }
        match self.name.rfind('/') {
            Some(0) => Some(("/", &self.name[1..])),
            Some(pos) => Some((&self.name[..pos], &self.name[pos + 1..])),
            None => Some(("", self.name.as_str())),
        }
    }
}

/// Read-only view of the engine's thread and fd tables.
pub trait ContextSource {
    fn thread(&self, tid: u64) -> Option<ThreadInfo>;

    fn fd(&self, tid: u64, fd: i64) -> Option<FdInfo>;
}

impl<T: ContextSource + ?Sized> ContextSource for &T {
    fn thread(&self, tid: u64) -> Option<ThreadInfo> {
        (**self).thread(tid)
    }

    fn fd(&self, tid: u64, fd: i64) -> Option<FdInfo> {
        (**self).fd(tid, fd)
    }
}

impl<T: ContextSource + ?Sized> ContextSource for Arc<T> {
    fn thread(&self, tid: u64) -> Option<ThreadInfo> {
        (**self).thread(tid)
    }

    fn fd(&self, tid: u64, fd: i64) -> Option<FdInfo> {
        (**self).fd(tid, fd)
    }
}

/// In-memory thread and fd tables.
///
/// Fd tables are per thread group: an fd lookup resolves the thread's pid
/// first and falls back to the tid when the thread is not known.
#[derive(Debug, Clone, Default)]
pub struct ContextTables {
    threads: HashMap<u64, ThreadInfo>,
    fds: HashMap<(u64, i64), FdInfo>,
}

impl ContextTables {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_thread(mut self, thread: ThreadInfo) -> Self {
        self.insert_thread(thread);
        self
    }

    pub fn with_fd(mut self, pid: u64, fd: FdInfo) -> Self {
        self.insert_fd(pid, fd);
        self
    }

    pub fn insert_thread(&mut self, thread: ThreadInfo) {
        self.threads.insert(thread.tid, thread);
    }

    pub fn insert_fd(&mut self, pid: u64, fd: FdInfo) {
        self.fds.insert((pid, fd.num), fd);
    }

    pub fn remove_fd(&mut self, pid: u64, fd: i64) -> Option<FdInfo> {
        self.fds.remove(&(pid, fd))
    }

    pub fn thread_count(&self) -> usize {
        self.threads.len()
    }

    pub fn fd_count(&self) -> usize {
        self.fds.len()
    }
}

impl ContextSource for ContextTables {
    fn thread(&self, tid: u64) -> Option<ThreadInfo> {
        self.threads.get(&tid).cloned()
    }

    fn fd(&self, tid: u64, fd: i64) -> Option<FdInfo> {
        let pid = self.threads.get(&tid).map(|t| t.pid).unwrap_or(tid);
        self.fds.get(&(pid, fd)).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct TwoParams;

    impl RawEvent for TwoParams {
        fn event_type(&self) -> u16 {
            0
        }

        fn timestamp(&self) -> u64 {
            0
        }

        fn tid(&self) -> u64 {
            1
        }

        fn param_count(&self) -> usize {
            2
        }

        fn param(&self, index: usize) -> Option<RawParam<'_>> {
            static NEG: [u8; 8] = (-1i64).to_ne_bytes();
            static SEVEN: [u8; 8] = 7i64.to_ne_bytes();
            match index {
                0 => Some(RawParam {
                    name: "res",
                    tag: kindling_converter_common::param_type::PT_ERRNO,
                    data: &NEG,
                }),
                1 => Some(RawParam {
                    name: "fd",
                    tag: PT_FD,
                    data: &SEVEN,
                }),
                _ => None,
            }
        }
    }

    mod raw_event_defaults {
        use super::*;

        #[test]
        fn should_collect_params_in_order() {
            let names: Vec<&str> = TwoParams.params().iter().map(|p| p.name).collect();

            assert_eq!(names, vec!["res", "fd"]);
        }

        #[test]
        fn should_find_fd_by_parameter_type() {
            assert_eq!(TwoParams.fd(), Some(7));
        }
    }

    mod fd_types {
        use super::*;

        #[test]
        fn should_map_raw_codes() {
            assert_eq!(FdType::from_raw(fd_type::IPV4_SOCK), FdType::Ipv4Sock);
            assert_eq!(FdType::from_raw(fd_type::FILE_V2), FdType::File);
            assert_eq!(FdType::from_raw(200), FdType::Unknown);
        }

        #[test]
        fn should_name_types_as_they_are_serialized() {
            for fd_type in FdType::ALL {
                assert_eq!(
                    serde_json::to_value(fd_type).unwrap(),
                    serde_json::Value::from(fd_type.as_str()),
                    "{:?}",
                    fd_type
                );
            }
        }

        #[test]
        fn should_round_trip_names_through_deserialization() {
            for fd_type in FdType::ALL {
                let json = format!("\"{}\"", fd_type.as_str());

                assert_eq!(serde_json::from_str::<FdType>(&json).unwrap(), fd_type);
            }
        }

        #[test]
        fn should_split_file_paths() {
            let fd = FdInfo {
                num: 3,
                fd_type: FdType::File,
                name: "/var/log/app.log".to_string(),
                ..FdInfo::default()
            };

            assert_eq!(fd.directory_and_filename(), Some(("/var/log", "app.log")));
        }

        #[test]
        fn should_not_split_socket_names() {
            let fd = FdInfo {
                num: 3,
                fd_type: FdType::Ipv4Sock,
                name: "10.0.0.1:5555->10.0.0.2:80".to_string(),
                ..FdInfo::default()
            };

            assert_eq!(fd.directory_and_filename(), None);
        }
    }

    mod context_tables {
        use super::*;

        fn tables() -> ContextTables {
            ContextTables::new()
                .with_thread(ThreadInfo {
                    tid: 101,
                    pid: 100,
                    comm: "nginx".to_string(),
                    ..ThreadInfo::default()
                })
                .with_fd(
                    100,
                    FdInfo {
                        num: 5,
                        fd_type: FdType::File,
                        name: "/etc/nginx/nginx.conf".to_string(),
                        ..FdInfo::default()
                    },
                )
        }

        #[test]
        fn should_resolve_fd_through_thread_group() {
            let tables = tables();

            let fd = tables.fd(101, 5).unwrap();

            assert_eq!(fd.name, "/etc/nginx/nginx.conf");
        }

        #[test]
        fn should_treat_missing_entries_as_absent() {
            let tables = tables();

            assert!(tables.thread(999).is_none());
            assert!(tables.fd(101, 6).is_none());
            assert!(tables.fd(999, 5).is_none());
        }

        #[test]
        fn should_forget_closed_fd() {
            let mut tables = tables();

            assert!(tables.remove_fd(100, 5).is_some());

            assert!(tables.fd(101, 5).is_none());
            assert_eq!(tables.fd_count(), 0);
        }

        #[test]
        fn should_serve_lookups_through_arc() {
            let shared = Arc::new(tables());

            assert_eq!(shared.thread(101).map(|t| t.pid), Some(100));
        }
    }
}
