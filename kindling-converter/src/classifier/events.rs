//! Event descriptor table
//!
//! One row per engine event. Syscall rows cover both the enter code and the
//! exit code that follows it. Versioned engine events (`execve` has been
//! renumbered many times) share one stable name.

use super::{CategoryRule, EventDescriptor, EventKind, NameRule};
use crate::event::Category::{self, *};
use kindling_converter_common::event_type::*;

const fn syscall(code: u16, name: &'static str, category: Category) -> EventDescriptor {
    EventDescriptor {
        code,
        name: NameRule::Fixed(name),
        kind: EventKind::Syscall,
        category: CategoryRule::Fixed(category),
        transfers_data: false,
    }
}

/// fd-based I/O syscalls. The category is the family's, whatever the fd
/// turns out to be.
const fn io(code: u16, name: &'static str, category: Category) -> EventDescriptor {
    syscall(code, name, category)
}

/// Like `io`, for syscalls whose non-negative result is a byte count.
const fn transfer(code: u16, name: &'static str, category: Category) -> EventDescriptor {
    EventDescriptor {
        transfers_data: true,
        ..io(code, name, category)
    }
}

const fn tracepoint(code: u16, name: &'static str, category: Category) -> EventDescriptor {
    EventDescriptor {
        code,
        name: NameRule::Fixed(name),
        kind: EventKind::Tracepoint,
        category: CategoryRule::Fixed(category),
        transfers_data: false,
    }
}

const fn kprobe(code: u16, name: &'static str) -> EventDescriptor {
    EventDescriptor {
        code,
        name: NameRule::Fixed(name),
        kind: EventKind::Kprobe,
        category: CategoryRule::Fixed(Net),
        transfers_data: false,
    }
}

/// Engine bookkeeping events that do not correspond to a kernel source.
const fn internal(code: u16, name: &'static str) -> EventDescriptor {
    EventDescriptor {
        code,
        name: NameRule::Fixed(name),
        kind: EventKind::Internal,
        category: CategoryRule::Fixed(Other),
        transfers_data: false,
    }
}

pub(super) static EVENT_TABLE: &[EventDescriptor] = &[
    EventDescriptor {
        code: GENERIC_E,
        name: NameRule::BySyscallId,
        kind: EventKind::Syscall,
        category: CategoryRule::BySyscallId,
        transfers_data: false,
    },
    // file
    syscall(SYSCALL_OPEN_E, "open", File),
    syscall(SYSCALL_OPENAT_E, "openat", File),
    syscall(SYSCALL_OPENAT_2_E, "openat", File),
    syscall(SYSCALL_OPENAT2_E, "openat2", File),
    syscall(SYSCALL_CREAT_E, "creat", File),
    io(SYSCALL_CLOSE_E, "close", File),
    transfer(SYSCALL_READ_E, "read", File),
    transfer(SYSCALL_WRITE_E, "write", File),
    transfer(SYSCALL_PREAD_E, "pread", File),
    transfer(SYSCALL_PWRITE_E, "pwrite", File),
    transfer(SYSCALL_READV_E, "readv", File),
    transfer(SYSCALL_WRITEV_E, "writev", File),
    transfer(SYSCALL_PREADV_E, "preadv", File),
    transfer(SYSCALL_PWRITEV_E, "pwritev", File),
    transfer(SYSCALL_SENDFILE_E, "sendfile", File),
    transfer(SYSCALL_SPLICE_E, "splice", File),
    io(SYSCALL_IOCTL_2_E, "ioctl", File),
    io(SYSCALL_IOCTL_3_E, "ioctl", File),
    io(SYSCALL_FCNTL_E, "fcntl", File),
    io(SYSCALL_DUP_E, "dup", File),
    syscall(SYSCALL_STAT_E, "stat", File),
    syscall(SYSCALL_LSTAT_E, "lstat", File),
    syscall(SYSCALL_FSTAT_E, "fstat", File),
    syscall(SYSCALL_STAT64_E, "stat64", File),
    syscall(SYSCALL_LSTAT64_E, "lstat64", File),
    syscall(SYSCALL_FSTAT64_E, "fstat64", File),
    syscall(SYSCALL_LSEEK_E, "lseek", File),
    syscall(SYSCALL_LLSEEK_E, "llseek", File),
    syscall(SYSCALL_GETCWD_E, "getcwd", File),
    syscall(SYSCALL_CHDIR_E, "chdir", File),
    syscall(SYSCALL_FCHDIR_E, "fchdir", File),
    syscall(SYSCALL_MKDIR_E, "mkdir", File),
    syscall(SYSCALL_MKDIR_2_E, "mkdir", File),
    syscall(SYSCALL_MKDIRAT_E, "mkdirat", File),
    syscall(SYSCALL_RMDIR_E, "rmdir", File),
    syscall(SYSCALL_RMDIR_2_E, "rmdir", File),
    syscall(SYSCALL_LINK_E, "link", File),
    syscall(SYSCALL_LINK_2_E, "link", File),
    syscall(SYSCALL_LINKAT_E, "linkat", File),
    syscall(SYSCALL_LINKAT_2_E, "linkat", File),
    syscall(SYSCALL_UNLINK_E, "unlink", File),
    syscall(SYSCALL_UNLINK_2_E, "unlink", File),
    syscall(SYSCALL_UNLINKAT_E, "unlinkat", File),
    syscall(SYSCALL_UNLINKAT_2_E, "unlinkat", File),
    syscall(SYSCALL_RENAME_E, "rename", File),
    syscall(SYSCALL_RENAMEAT_E, "renameat", File),
    syscall(SYSCALL_RENAMEAT2_E, "renameat2", File),
    syscall(SYSCALL_SYMLINK_E, "symlink", File),
    syscall(SYSCALL_SYMLINKAT_E, "symlinkat", File),
    syscall(SYSCALL_CHMOD_E, "chmod", File),
    syscall(SYSCALL_FCHMOD_E, "fchmod", File),
    syscall(SYSCALL_FCHMODAT_E, "fchmodat", File),
    syscall(SYSCALL_ACCESS_E, "access", File),
    syscall(SYSCALL_GETDENTS_E, "getdents", File),
    syscall(SYSCALL_GETDENTS64_E, "getdents64", File),
    syscall(SYSCALL_FLOCK_E, "flock", File),
    syscall(SYSCALL_MOUNT_E, "mount", File),
    syscall(SYSCALL_UMOUNT_E, "umount", File),
    syscall(SYSCALL_CHROOT_E, "chroot", File),
    syscall(SYSCALL_QUOTACTL_E, "quotactl", File),
    syscall(SYSCALL_INOTIFY_INIT_E, "inotify_init", File),
    syscall(SYSCALL_COPY_FILE_RANGE_E, "copy_file_range", File),
    // network
    syscall(SOCKET_SOCKET_E, "socket", Net),
    syscall(SOCKET_BIND_E, "bind", Net),
    syscall(SOCKET_CONNECT_E, "connect", Net),
    syscall(SOCKET_LISTEN_E, "listen", Net),
    syscall(SOCKET_ACCEPT_E, "accept", Net),
    syscall(SOCKET_ACCEPT_5_E, "accept", Net),
    syscall(SOCKET_ACCEPT4_E, "accept4", Net),
    syscall(SOCKET_ACCEPT4_5_E, "accept4", Net),
    syscall(SOCKET_SHUTDOWN_E, "shutdown", Net),
    syscall(SOCKET_GETSOCKNAME_E, "getsockname", Net),
    syscall(SOCKET_GETPEERNAME_E, "getpeername", Net),
    syscall(SOCKET_SOCKETPAIR_E, "socketpair", Net),
    syscall(SOCKET_SETSOCKOPT_E, "setsockopt", Net),
    syscall(SOCKET_GETSOCKOPT_E, "getsockopt", Net),
    transfer(SOCKET_SEND_E, "send", Net),
    transfer(SOCKET_SENDTO_E, "sendto", Net),
    transfer(SOCKET_RECV_E, "recv", Net),
    transfer(SOCKET_RECVFROM_E, "recvfrom", Net),
    transfer(SOCKET_SENDMSG_E, "sendmsg", Net),
    transfer(SOCKET_SENDMMSG_E, "sendmmsg", Net),
    transfer(SOCKET_RECVMSG_E, "recvmsg", Net),
    transfer(SOCKET_RECVMMSG_E, "recvmmsg", Net),
    // ipc, waiting, time
    syscall(SYSCALL_PIPE_E, "pipe", Ipc),
    syscall(SYSCALL_EVENTFD_E, "eventfd", Ipc),
    syscall(SYSCALL_FUTEX_E, "futex", Ipc),
    syscall(SYSCALL_SEMOP_E, "semop", Ipc),
    syscall(SYSCALL_SEMCTL_E, "semctl", Ipc),
    syscall(SYSCALL_SEMGET_E, "semget", Ipc),
    syscall(SYSCALL_EPOLLWAIT_E, "epoll_wait", Wait),
    syscall(SYSCALL_POLL_E, "poll", Wait),
    syscall(SYSCALL_PPOLL_E, "ppoll", Wait),
    syscall(SYSCALL_SELECT_E, "select", Wait),
    syscall(SYSCALL_NEWSELECT_E, "select", Wait),
    syscall(SYSCALL_NANOSLEEP_E, "nanosleep", Sleep),
    syscall(SYSCALL_TIMERFD_CREATE_E, "timerfd_create", Time),
    // signals
    syscall(SYSCALL_SIGNALFD_E, "signalfd", Signal),
    syscall(SYSCALL_KILL_E, "kill", Signal),
    syscall(SYSCALL_TKILL_E, "tkill", Signal),
    syscall(SYSCALL_TGKILL_E, "tgkill", Signal),
    // process
    syscall(SYSCALL_EXECVE_8_E, "execve", Process),
    syscall(SYSCALL_EXECVE_13_E, "execve", Process),
    syscall(SYSCALL_EXECVE_14_E, "execve", Process),
    syscall(SYSCALL_EXECVE_15_E, "execve", Process),
    syscall(SYSCALL_EXECVE_16_E, "execve", Process),
    syscall(SYSCALL_EXECVE_17_E, "execve", Process),
    syscall(SYSCALL_EXECVE_18_E, "execve", Process),
    syscall(SYSCALL_EXECVE_19_E, "execve", Process),
    syscall(SYSCALL_EXECVEAT_E, "execveat", Process),
    syscall(SYSCALL_CLONE_11_E, "clone", Process),
    syscall(SYSCALL_CLONE_16_E, "clone", Process),
    syscall(SYSCALL_CLONE_17_E, "clone", Process),
    syscall(SYSCALL_CLONE_20_E, "clone", Process),
    syscall(SYSCALL_CLONE3_E, "clone3", Process),
    syscall(SYSCALL_FORK_E, "fork", Process),
    syscall(SYSCALL_FORK_17_E, "fork", Process),
    syscall(SYSCALL_FORK_20_E, "fork", Process),
    syscall(SYSCALL_VFORK_E, "vfork", Process),
    syscall(SYSCALL_VFORK_17_E, "vfork", Process),
    syscall(SYSCALL_VFORK_20_E, "vfork", Process),
    syscall(SYSCALL_PTRACE_E, "ptrace", Process),
    syscall(SYSCALL_GETRLIMIT_E, "getrlimit", Process),
    syscall(SYSCALL_SETRLIMIT_E, "setrlimit", Process),
    syscall(SYSCALL_PRLIMIT_E, "prlimit", Process),
    syscall(SYSCALL_SETNS_E, "setns", Process),
    syscall(SYSCALL_UNSHARE_E, "unshare", Process),
    syscall(SYSCALL_SETSID_E, "setsid", Process),
    syscall(SYSCALL_SETPGID_E, "setpgid", Process),
    // credentials
    syscall(SYSCALL_SETUID_E, "setuid", User),
    syscall(SYSCALL_SETGID_E, "setgid", User),
    syscall(SYSCALL_SETRESUID_E, "setresuid", User),
    syscall(SYSCALL_SETRESGID_E, "setresgid", User),
    syscall(SYSCALL_GETUID_E, "getuid", User),
    syscall(SYSCALL_GETEUID_E, "geteuid", User),
    syscall(SYSCALL_GETGID_E, "getgid", User),
    syscall(SYSCALL_GETEGID_E, "getegid", User),
    syscall(SYSCALL_GETRESUID_E, "getresuid", User),
    syscall(SYSCALL_GETRESGID_E, "getresgid", User),
    // memory
    syscall(SYSCALL_BRK_1_E, "brk", Memory),
    syscall(SYSCALL_BRK_4_E, "brk", Memory),
    syscall(SYSCALL_MMAP_E, "mmap", Memory),
    syscall(SYSCALL_MMAP2_E, "mmap2", Memory),
    syscall(SYSCALL_MUNMAP_E, "munmap", Memory),
    syscall(SYSCALL_MPROTECT_E, "mprotect", Memory),
    syscall(SYSCALL_USERFAULTFD_E, "userfaultfd", Memory),
    // system
    syscall(SYSCALL_BPF_E, "bpf", System),
    syscall(SYSCALL_SECCOMP_E, "seccomp", System),
    // tracepoints
    tracepoint(PROCEXIT_E, "procexit", Process),
    tracepoint(PROCEXIT_1_E, "procexit", Process),
    tracepoint(SCHEDSWITCH_1_E, "switch", Scheduler),
    tracepoint(SCHEDSWITCH_6_E, "switch", Scheduler),
    tracepoint(SIGNALDELIVER_E, "signaldeliver", Signal),
    tracepoint(PAGE_FAULT_E, "page_fault", Memory),
    // kindling kprobes
    kprobe(TCP_RCV_ESTABLISHED_E, "tcp_rcv_established"),
    kprobe(TCP_CLOSE_E, "tcp_close"),
    kprobe(TCP_DROP_E, "tcp_drop"),
    kprobe(TCP_RETRANSMIT_SKB_E, "tcp_retransmit_skb"),
    kprobe(TCP_CONNECT_E, "tcp_connect"),
    kprobe(TCP_SET_STATE_E, "tcp_set_state"),
    // engine bookkeeping
    internal(DROP_E, "drop"),
    internal(SYSDIGEVENT_E, "sysdigevent"),
    internal(CONTAINER_E, "container"),
    internal(CONTAINER_JSON_E, "container"),
    internal(CONTAINER_JSON_2_E, "container"),
    internal(PROCINFO_E, "procinfo"),
    internal(CPU_HOTPLUG_E, "cpu_hotplug"),
    internal(K8S_E, "k8s"),
    internal(TRACER_E, "tracer"),
    internal(MESOS_E, "mesos"),
    internal(NOTIFICATION_E, "notification"),
    internal(INFRASTRUCTURE_EVENT_E, "infra"),
];
