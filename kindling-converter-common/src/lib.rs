#![no_std]

//! Tracing-engine ABI shared between the capture side and the converter.
//!
//! Every constant here is a raw engine code. The converter never exposes
//! these values to downstream consumers; it maps them onto its own enums.

#[cfg(test)]
extern crate std;

/// Parameter type tags (`ppm_param_type`).
pub mod param_type {
    pub const PT_NONE: u8 = 0;
    pub const PT_INT8: u8 = 1;
    pub const PT_INT16: u8 = 2;
    pub const PT_INT32: u8 = 3;
    pub const PT_INT64: u8 = 4;
    pub const PT_UINT8: u8 = 5;
    pub const PT_UINT16: u8 = 6;
    pub const PT_UINT32: u8 = 7;
    pub const PT_UINT64: u8 = 8;
    pub const PT_CHARBUF: u8 = 9;
    pub const PT_BYTEBUF: u8 = 10;
    pub const PT_ERRNO: u8 = 11;
    pub const PT_SOCKADDR: u8 = 12;
    pub const PT_SOCKTUPLE: u8 = 13;
    pub const PT_FD: u8 = 14;
    pub const PT_PID: u8 = 15;
    pub const PT_FDLIST: u8 = 16;
    pub const PT_FSPATH: u8 = 17;
    pub const PT_SYSCALLID: u8 = 18;
    pub const PT_SIGTYPE: u8 = 19;
    pub const PT_RELTIME: u8 = 20;
    pub const PT_ABSTIME: u8 = 21;
    pub const PT_PORT: u8 = 22;
    pub const PT_L4PROTO: u8 = 23;
    pub const PT_SOCKFAMILY: u8 = 24;
    pub const PT_BOOL: u8 = 25;
    pub const PT_IPV4ADDR: u8 = 26;
    pub const PT_DYN: u8 = 27;
    pub const PT_FLAGS8: u8 = 28;
    pub const PT_FLAGS16: u8 = 29;
    pub const PT_FLAGS32: u8 = 30;
    pub const PT_UID: u8 = 31;
    pub const PT_GID: u8 = 32;
    pub const PT_DOUBLE: u8 = 33;
    pub const PT_SIGSET: u8 = 34;
    pub const PT_CHARBUFARRAY: u8 = 35;
    pub const PT_CHARBUF_PAIR_ARRAY: u8 = 36;
    pub const PT_IPV4NET: u8 = 37;
    pub const PT_IPV6ADDR: u8 = 38;
    pub const PT_IPV6NET: u8 = 39;
    pub const PT_IPADDR: u8 = 40;
    pub const PT_IPNET: u8 = 41;
    pub const PT_MODE: u8 = 42;
    pub const PT_FSRELPATH: u8 = 43;

    /// Highest tag the engine currently defines.
    pub const PT_MAX: u8 = PT_FSRELPATH;
}

/// Raw event type codes (`ppm_event_type`).
///
/// Syscall events come in enter/exit pairs: the enter code is even and the
/// exit code is the enter code plus one. Engine-internal and probe events
/// only define the enter code.
pub mod event_type {
    pub const GENERIC_E: u16 = 0;
    pub const GENERIC_X: u16 = 1;
    pub const SYSCALL_OPEN_E: u16 = 2;
    pub const SYSCALL_CLOSE_E: u16 = 4;
    pub const SYSCALL_CLOSE_X: u16 = 5;
    pub const SYSCALL_READ_E: u16 = 6;
    pub const SYSCALL_READ_X: u16 = 7;
    pub const SYSCALL_WRITE_E: u16 = 8;
    pub const SYSCALL_WRITE_X: u16 = 9;
    pub const SYSCALL_BRK_1_E: u16 = 10;
    pub const SYSCALL_EXECVE_8_E: u16 = 12;
    pub const SYSCALL_CLONE_11_E: u16 = 14;
    pub const PROCEXIT_E: u16 = 16;
    pub const SOCKET_SOCKET_E: u16 = 18;
    pub const SOCKET_BIND_E: u16 = 20;
    pub const SOCKET_CONNECT_E: u16 = 22;
    pub const SOCKET_CONNECT_X: u16 = 23;
    pub const SOCKET_LISTEN_E: u16 = 24;
    pub const SOCKET_ACCEPT_E: u16 = 26;
    pub const SOCKET_SEND_E: u16 = 28;
    pub const SOCKET_SENDTO_E: u16 = 30;
    pub const SOCKET_SENDTO_X: u16 = 31;
    pub const SOCKET_RECV_E: u16 = 32;
    pub const SOCKET_RECVFROM_E: u16 = 34;
    pub const SOCKET_RECVFROM_X: u16 = 35;
    pub const SOCKET_SHUTDOWN_E: u16 = 36;
    pub const SOCKET_GETSOCKNAME_E: u16 = 38;
    pub const SOCKET_GETPEERNAME_E: u16 = 40;
    pub const SOCKET_SOCKETPAIR_E: u16 = 42;
    pub const SOCKET_SETSOCKOPT_E: u16 = 44;
    pub const SOCKET_GETSOCKOPT_E: u16 = 46;
    pub const SOCKET_SENDMSG_E: u16 = 48;
    pub const SOCKET_SENDMMSG_E: u16 = 50;
    pub const SOCKET_RECVMSG_E: u16 = 52;
    pub const SOCKET_RECVMMSG_E: u16 = 54;
    pub const SOCKET_ACCEPT4_E: u16 = 56;
    pub const SYSCALL_CREAT_E: u16 = 58;
    pub const SYSCALL_PIPE_E: u16 = 60;
    pub const SYSCALL_EVENTFD_E: u16 = 62;
    pub const SYSCALL_FUTEX_E: u16 = 64;
    pub const SYSCALL_STAT_E: u16 = 66;
    pub const SYSCALL_LSTAT_E: u16 = 68;
    pub const SYSCALL_FSTAT_E: u16 = 70;
    pub const SYSCALL_STAT64_E: u16 = 72;
    pub const SYSCALL_LSTAT64_E: u16 = 74;
    pub const SYSCALL_FSTAT64_E: u16 = 76;
    pub const SYSCALL_EPOLLWAIT_E: u16 = 78;
    pub const SYSCALL_POLL_E: u16 = 80;
    pub const SYSCALL_SELECT_E: u16 = 82;
    pub const SYSCALL_NEWSELECT_E: u16 = 84;
    pub const SYSCALL_LSEEK_E: u16 = 86;
    pub const SYSCALL_LLSEEK_E: u16 = 88;
    pub const SYSCALL_IOCTL_2_E: u16 = 90;
    pub const SYSCALL_GETCWD_E: u16 = 92;
    pub const SYSCALL_CHDIR_E: u16 = 94;
    pub const SYSCALL_FCHDIR_E: u16 = 96;
    pub const SYSCALL_MKDIR_E: u16 = 98;
    pub const SYSCALL_RMDIR_E: u16 = 100;
    pub const SYSCALL_OPENAT_E: u16 = 102;
    pub const SYSCALL_LINK_E: u16 = 104;
    pub const SYSCALL_LINKAT_E: u16 = 106;
    pub const SYSCALL_UNLINK_E: u16 = 108;
    pub const SYSCALL_UNLINKAT_E: u16 = 110;
    pub const SYSCALL_PREAD_E: u16 = 112;
    pub const SYSCALL_PWRITE_E: u16 = 114;
    pub const SYSCALL_READV_E: u16 = 116;
    pub const SYSCALL_WRITEV_E: u16 = 118;
    pub const SYSCALL_PREADV_E: u16 = 120;
    pub const SYSCALL_PWRITEV_E: u16 = 122;
    pub const SYSCALL_DUP_E: u16 = 124;
    pub const SYSCALL_SIGNALFD_E: u16 = 126;
    pub const SYSCALL_KILL_E: u16 = 128;
    pub const SYSCALL_TKILL_E: u16 = 130;
    pub const SYSCALL_TGKILL_E: u16 = 132;
    pub const SYSCALL_NANOSLEEP_E: u16 = 134;
    pub const SYSCALL_TIMERFD_CREATE_E: u16 = 136;
    pub const SYSCALL_INOTIFY_INIT_E: u16 = 138;
    pub const SYSCALL_GETRLIMIT_E: u16 = 140;
    pub const SYSCALL_SETRLIMIT_E: u16 = 142;
    pub const SYSCALL_PRLIMIT_E: u16 = 144;
    pub const SCHEDSWITCH_1_E: u16 = 146;
    pub const DROP_E: u16 = 148;
    pub const SYSCALL_FCNTL_E: u16 = 150;
    pub const SCHEDSWITCH_6_E: u16 = 152;
    pub const SYSCALL_EXECVE_13_E: u16 = 154;
    pub const SYSCALL_CLONE_16_E: u16 = 156;
    pub const SYSCALL_BRK_4_E: u16 = 158;
    pub const SYSCALL_MMAP_E: u16 = 160;
    pub const SYSCALL_MMAP2_E: u16 = 162;
    pub const SYSCALL_MUNMAP_E: u16 = 164;
    pub const SYSCALL_SPLICE_E: u16 = 166;
    pub const SYSCALL_PTRACE_E: u16 = 168;
    pub const SYSCALL_IOCTL_3_E: u16 = 170;
    pub const SYSCALL_EXECVE_14_E: u16 = 172;
    pub const SYSCALL_RENAME_E: u16 = 174;
    pub const SYSCALL_RENAMEAT_E: u16 = 176;
    pub const SYSCALL_SYMLINK_E: u16 = 178;
    pub const SYSCALL_SYMLINKAT_E: u16 = 180;
    pub const SYSCALL_FORK_E: u16 = 182;
    pub const SYSCALL_VFORK_E: u16 = 184;
    pub const PROCEXIT_1_E: u16 = 186;
    pub const SYSCALL_SENDFILE_E: u16 = 188;
    pub const SYSCALL_QUOTACTL_E: u16 = 190;
    pub const SYSCALL_SETRESUID_E: u16 = 192;
    pub const SYSCALL_SETRESGID_E: u16 = 194;
    pub const SYSDIGEVENT_E: u16 = 196;
    pub const SYSCALL_SETUID_E: u16 = 198;
    pub const SYSCALL_SETGID_E: u16 = 200;
    pub const SYSCALL_GETUID_E: u16 = 202;
    pub const SYSCALL_GETEUID_E: u16 = 204;
    pub const SYSCALL_GETGID_E: u16 = 206;
    pub const SYSCALL_GETEGID_E: u16 = 208;
    pub const SYSCALL_GETRESUID_E: u16 = 210;
    pub const SYSCALL_GETRESGID_E: u16 = 212;
    pub const SYSCALL_EXECVE_15_E: u16 = 214;
    pub const SYSCALL_CLONE_17_E: u16 = 216;
    pub const SYSCALL_FORK_17_E: u16 = 218;
    pub const SYSCALL_VFORK_17_E: u16 = 220;
    pub const SYSCALL_CLONE_20_E: u16 = 222;
    pub const SYSCALL_FORK_20_E: u16 = 224;
    pub const SYSCALL_VFORK_20_E: u16 = 226;
    pub const CONTAINER_E: u16 = 228;
    pub const SYSCALL_EXECVE_16_E: u16 = 230;
    pub const SIGNALDELIVER_E: u16 = 232;
    pub const PROCINFO_E: u16 = 234;
    pub const SYSCALL_GETDENTS_E: u16 = 236;
    pub const SYSCALL_GETDENTS64_E: u16 = 238;
    pub const SYSCALL_SETNS_E: u16 = 240;
    pub const SYSCALL_FLOCK_E: u16 = 242;
    pub const CPU_HOTPLUG_E: u16 = 244;
    pub const SOCKET_ACCEPT_5_E: u16 = 246;
    pub const SOCKET_ACCEPT4_5_E: u16 = 248;
    pub const SOCKET_ACCEPT4_5_X: u16 = 249;
    pub const SYSCALL_SEMOP_E: u16 = 250;
    pub const SYSCALL_SEMCTL_E: u16 = 252;
    pub const SYSCALL_PPOLL_E: u16 = 254;
    pub const SYSCALL_MOUNT_E: u16 = 256;
    pub const SYSCALL_UMOUNT_E: u16 = 258;
    pub const K8S_E: u16 = 260;
    pub const SYSCALL_SEMGET_E: u16 = 262;
    pub const SYSCALL_ACCESS_E: u16 = 264;
    pub const SYSCALL_CHROOT_E: u16 = 266;
    pub const TRACER_E: u16 = 268;
    pub const MESOS_E: u16 = 270;
    pub const CONTAINER_JSON_E: u16 = 272;
    pub const SYSCALL_SETSID_E: u16 = 274;
    pub const SYSCALL_MKDIR_2_E: u16 = 276;
    pub const SYSCALL_RMDIR_2_E: u16 = 278;
    pub const NOTIFICATION_E: u16 = 280;
    pub const SYSCALL_EXECVE_17_E: u16 = 282;
    pub const SYSCALL_UNSHARE_E: u16 = 284;
    pub const INFRASTRUCTURE_EVENT_E: u16 = 286;
    pub const SYSCALL_EXECVE_18_E: u16 = 288;
    pub const PAGE_FAULT_E: u16 = 290;
    pub const SYSCALL_EXECVE_19_E: u16 = 292;
    pub const SYSCALL_SETPGID_E: u16 = 294;
    pub const SYSCALL_BPF_E: u16 = 296;
    pub const SYSCALL_SECCOMP_E: u16 = 298;
    pub const SYSCALL_UNLINK_2_E: u16 = 300;
    pub const SYSCALL_UNLINKAT_2_E: u16 = 302;
    pub const SYSCALL_MKDIRAT_E: u16 = 304;
    pub const SYSCALL_OPENAT_2_E: u16 = 306;
    pub const SYSCALL_OPENAT_2_X: u16 = 307;
    pub const SYSCALL_LINK_2_E: u16 = 308;
    pub const SYSCALL_LINKAT_2_E: u16 = 310;
    pub const SYSCALL_FCHMODAT_E: u16 = 312;
    pub const SYSCALL_CHMOD_E: u16 = 314;
    pub const SYSCALL_FCHMOD_E: u16 = 316;
    pub const SYSCALL_RENAMEAT2_E: u16 = 318;
    pub const SYSCALL_USERFAULTFD_E: u16 = 320;
    pub const CONTAINER_JSON_2_E: u16 = 324;
    pub const SYSCALL_OPENAT2_E: u16 = 326;
    pub const SYSCALL_MPROTECT_E: u16 = 328;
    pub const SYSCALL_EXECVEAT_E: u16 = 330;
    pub const SYSCALL_COPY_FILE_RANGE_E: u16 = 332;
    pub const SYSCALL_CLONE3_E: u16 = 334;

    // Kprobe events emitted by the kindling driver. Enter-only.
    pub const TCP_RCV_ESTABLISHED_E: u16 = 400;
    pub const TCP_CLOSE_E: u16 = 402;
    pub const TCP_DROP_E: u16 = 404;
    pub const TCP_RETRANSMIT_SKB_E: u16 = 406;
    pub const TCP_CONNECT_E: u16 = 408;
    pub const TCP_SET_STATE_E: u16 = 410;

    pub fn is_enter(code: u16) -> bool {
        code & 1 == 0
    }

    pub fn is_exit(code: u16) -> bool {
        !is_enter(code)
    }

    /// Returns the exit code paired with an enter code.
    pub fn exit_of(enter: u16) -> u16 {
        enter | 1
    }
}

/// Socket address families as encoded by the engine (`PPM_AF_*`).
pub mod socket_family {
    pub const AF_UNSPEC: u8 = 0;
    pub const AF_UNIX: u8 = 1;
    pub const AF_INET: u8 = 2;
    pub const AF_INET6: u8 = 10;
}

/// Transport protocol codes (`scap_l4_proto`).
pub mod l4_proto {
    pub const UNKNOWN: u8 = 0;
    pub const NA: u8 = 1;
    pub const TCP: u8 = 2;
    pub const UDP: u8 = 3;
    pub const ICMP: u8 = 4;
    pub const RAW: u8 = 5;
}

/// File descriptor type codes (`scap_fd_type`).
pub mod fd_type {
    pub const UNKNOWN: u8 = 0;
    pub const FILE: u8 = 1;
    pub const DIRECTORY: u8 = 2;
    pub const IPV4_SOCK: u8 = 3;
    pub const IPV6_SOCK: u8 = 4;
    pub const IPV4_SERVSOCK: u8 = 5;
    pub const IPV6_SERVSOCK: u8 = 6;
    pub const FIFO: u8 = 7;
    pub const UNIX_SOCK: u8 = 8;
    pub const EVENT: u8 = 9;
    pub const UNSUPPORTED: u8 = 10;
    pub const SIGNALFD: u8 = 11;
    pub const EVENTPOLL: u8 = 12;
    pub const INOTIFY: u8 = 13;
    pub const TIMERFD: u8 = 14;
    pub const NETLINK: u8 = 15;
    pub const FILE_V2: u8 = 16;
}

/// Wire sizes of the fixed socket layouts, family byte included.
pub mod socket_layout {
    pub const IPV4_TUPLE_LEN: usize = 1 + 4 + 2 + 4 + 2;
    pub const IPV6_TUPLE_LEN: usize = 1 + 16 + 2 + 16 + 2;
    pub const IPV4_SOCKADDR_LEN: usize = 1 + 4 + 2;
    pub const IPV6_SOCKADDR_LEN: usize = 1 + 16 + 2;
    /// Family byte plus two kernel socket pointers.
    pub const UNIX_TUPLE_HEADER_LEN: usize = 1 + 8 + 8;
}
