//! Syscall ids carried by generic syscall events
//!
//! Generic events cover syscalls the engine has no dedicated event for. The
//! first parameter is the engine's syscall id; name and category of the
//! event both come from the same row here.

use crate::event::Category::{self, *};

pub(super) static SYSCALL_TABLE: &[(u16, &str, Category)] = &[
    (1, "restart_syscall", Other),
    (2, "exit", Process),
    (3, "read", File),
    (4, "write", File),
    (5, "open", File),
    (6, "close", File),
    (7, "creat", File),
    (8, "link", File),
    (9, "unlink", File),
    (10, "chdir", File),
    (11, "time", Time),
    (12, "mknod", File),
    (13, "chmod", File),
    (14, "stat", File),
    (15, "lseek", File),
    (16, "getpid", Process),
    (17, "mount", File),
    (18, "ptrace", Process),
    (19, "alarm", Signal),
    (20, "fstat", File),
    (21, "pause", Signal),
    (22, "utime", File),
    (23, "access", File),
    (24, "sync", File),
    (25, "kill", Signal),
    (26, "rename", File),
    (27, "mkdir", File),
    (28, "rmdir", File),
    (29, "dup", File),
    (30, "pipe", Ipc),
    (31, "times", Time),
    (32, "brk", Memory),
    (33, "acct", System),
    (34, "ioctl", File),
    (35, "fcntl", File),
    (36, "setpgid", Process),
    (37, "umask", File),
    (38, "chroot", File),
    (39, "ustat", File),
    (40, "dup2", File),
    (41, "getppid", Process),
    (42, "getpgrp", Process),
    (43, "setsid", Process),
    (44, "sethostname", System),
    (45, "setrlimit", Process),
    (46, "getrusage", Process),
    (47, "gettimeofday", Time),
    (48, "settimeofday", Time),
    (49, "symlink", File),
    (50, "lstat", File),
    (51, "readlink", File),
    (52, "uselib", System),
    (53, "swapon", System),
    (54, "reboot", System),
    (55, "mmap", Memory),
    (56, "munmap", Memory),
    (57, "truncate", File),
    (58, "ftruncate", File),
    (59, "fchmod", File),
    (60, "getpriority", Process),
    (61, "setpriority", Process),
    (62, "statfs", File),
    (63, "fstatfs", File),
    (64, "syslog", System),
    (65, "setitimer", Time),
    (66, "getitimer", Time),
    (67, "uname", System),
    (68, "vhangup", System),
    (69, "wait4", Process),
    (70, "swapoff", System),
    (71, "sysinfo", System),
    (72, "fsync", File),
    (73, "setdomainname", System),
    (74, "adjtimex", Time),
    (75, "mprotect", Memory),
    (76, "init_module", System),
    (77, "delete_module", System),
    (78, "quotactl", File),
    (79, "getpgid", Process),
    (80, "fchdir", File),
    (81, "sysfs", System),
    (82, "personality", Process),
    (83, "getdents", File),
    (84, "select", Wait),
    (85, "flock", File),
    (86, "msync", Memory),
    (87, "readv", File),
    (88, "writev", File),
    (89, "getsid", Process),
    (90, "fdatasync", File),
    (91, "mlock", Memory),
    (92, "munlock", Memory),
    (93, "mlockall", Memory),
    (94, "munlockall", Memory),
    (95, "sched_setparam", Scheduler),
    (96, "sched_getparam", Scheduler),
    (97, "sched_setscheduler", Scheduler),
    (98, "sched_getscheduler", Scheduler),
    (99, "sched_yield", Scheduler),
    (100, "sched_get_priority_max", Scheduler),
    (101, "sched_get_priority_min", Scheduler),
    (102, "sched_rr_get_interval", Scheduler),
    (103, "nanosleep", Sleep),
    (104, "mremap", Memory),
    (105, "poll", Wait),
    (106, "prctl", Process),
    (107, "rt_sigaction", Signal),
    (108, "rt_sigprocmask", Signal),
    (109, "rt_sigpending", Signal),
    (110, "rt_sigtimedwait", Signal),
    (111, "rt_sigqueueinfo", Signal),
    (112, "rt_sigsuspend", Signal),
    (113, "getcwd", File),
    (114, "capget", User),
    (115, "capset", User),
    (116, "sendfile", File),
    (117, "getrlimit", Process),
    (118, "lchown", File),
    (119, "getuid", User),
    (120, "getgid", User),
    (121, "geteuid", User),
    (122, "getegid", User),
    (123, "setreuid", User),
    (124, "setregid", User),
    (125, "getgroups", User),
    (126, "setgroups", User),
    (127, "fchown", File),
    (128, "setresuid", User),
    (129, "getresuid", User),
    (130, "setresgid", User),
    (131, "getresgid", User),
    (132, "chown", File),
    (133, "setuid", User),
    (134, "setgid", User),
    (135, "setfsuid", User),
    (136, "setfsgid", User),
    (137, "pivot_root", File),
    (138, "mincore", Memory),
    (139, "madvise", Memory),
    (140, "gettid", Process),
    (141, "setxattr", File),
    (142, "getxattr", File),
    (143, "listxattr", File),
    (144, "removexattr", File),
    (145, "tkill", Signal),
    (146, "futex", Ipc),
    (147, "sched_setaffinity", Scheduler),
    (148, "sched_getaffinity", Scheduler),
    (149, "set_thread_area", Process),
    (150, "get_thread_area", Process),
    (151, "io_setup", File),
    (152, "io_destroy", File),
    (153, "io_getevents", File),
    (154, "io_submit", File),
    (155, "io_cancel", File),
    (156, "exit_group", Process),
    (157, "epoll_create", Wait),
    (158, "epoll_ctl", Wait),
    (159, "epoll_wait", Wait),
    (160, "remap_file_pages", Memory),
    (161, "set_tid_address", Process),
    (162, "timer_create", Time),
    (163, "timer_settime", Time),
    (164, "timer_gettime", Time),
    (165, "timer_getoverrun", Time),
    (166, "timer_delete", Time),
    (167, "clock_settime", Time),
    (168, "clock_gettime", Time),
    (169, "clock_getres", Time),
    (170, "clock_nanosleep", Sleep),
    (171, "tgkill", Signal),
    (172, "utimes", File),
    (173, "mq_open", Ipc),
    (174, "mq_unlink", Ipc),
    (175, "mq_timedsend", Ipc),
    (176, "mq_timedreceive", Ipc),
    (177, "mq_notify", Ipc),
    (178, "mq_getsetattr", Ipc),
    (179, "kexec_load", System),
    (180, "waitid", Process),
    (181, "add_key", System),
    (182, "request_key", System),
    (183, "keyctl", System),
    (184, "ioprio_set", Scheduler),
    (185, "ioprio_get", Scheduler),
    (186, "inotify_init", File),
    (187, "inotify_add_watch", File),
    (188, "inotify_rm_watch", File),
    (189, "openat", File),
    (190, "mkdirat", File),
    (191, "mknodat", File),
    (192, "fchownat", File),
    (193, "futimesat", File),
    (194, "unlinkat", File),
    (195, "renameat", File),
    (196, "linkat", File),
    (197, "symlinkat", File),
    (198, "readlinkat", File),
    (199, "fchmodat", File),
    (200, "faccessat", File),
    (201, "pselect6", Wait),
    (202, "ppoll", Wait),
    (203, "unshare", Process),
    (204, "set_robust_list", Ipc),
    (205, "get_robust_list", Ipc),
    (206, "splice", File),
    (207, "tee", File),
    (208, "vmsplice", File),
    (209, "getcpu", Scheduler),
    (210, "epoll_pwait", Wait),
    (211, "utimensat", File),
    (212, "signalfd", Signal),
    (213, "timerfd_create", Time),
    (214, "eventfd", Ipc),
    (215, "timerfd_settime", Time),
    (216, "timerfd_gettime", Time),
    (217, "signalfd4", Signal),
    (218, "eventfd2", Ipc),
    (219, "epoll_create1", Wait),
    (220, "dup3", File),
    (221, "pipe2", Ipc),
    (222, "inotify_init1", File),
    (223, "preadv", File),
    (224, "pwritev", File),
    (225, "rt_tgsigqueueinfo", Signal),
    (226, "perf_event_open", System),
    (227, "fanotify_init", File),
    (228, "prlimit64", Process),
    (229, "clock_adjtime", Time),
    (230, "syncfs", File),
    (231, "setns", Process),
    (232, "getdents64", File),
    (233, "socket", Net),
    (234, "bind", Net),
    (235, "connect", Net),
    (236, "listen", Net),
    (237, "accept", Net),
    (238, "getsockname", Net),
    (239, "getpeername", Net),
    (240, "socketpair", Net),
    (241, "sendto", Net),
    (242, "recvfrom", Net),
    (243, "shutdown", Net),
    (244, "setsockopt", Net),
    (245, "getsockopt", Net),
    (246, "sendmsg", Net),
    (247, "sendmmsg", Net),
    (248, "recvmsg", Net),
    (249, "recvmmsg", Net),
    (250, "accept4", Net),
    (251, "semop", Ipc),
    (252, "semget", Ipc),
    (253, "semctl", Ipc),
    (254, "msgsnd", Ipc),
    (255, "msgrcv", Ipc),
    (256, "msgget", Ipc),
    (257, "msgctl", Ipc),
    (258, "shmdt", Ipc),
    (259, "shmget", Ipc),
    (260, "shmctl", Ipc),
    (261, "statfs64", File),
    (262, "fstatfs64", File),
    (263, "fstatat64", File),
    (264, "sendfile64", File),
    (265, "ugetrlimit", Process),
    (266, "bdflush", System),
    (267, "sigprocmask", Signal),
    (268, "ipc", Ipc),
    (269, "socketcall", Net),
    (270, "stat64", File),
    (271, "lstat64", File),
    (272, "fstat64", File),
    (273, "fcntl64", File),
    (274, "mmap2", Memory),
    (275, "_newselect", Wait),
    (276, "sgetmask", Signal),
    (277, "ssetmask", Signal),
    (278, "sigpending", Signal),
    (279, "olduname", System),
    (280, "umount", File),
    (281, "signal", Signal),
    (282, "nice", Process),
    (283, "stime", Time),
    (284, "_llseek", File),
    (285, "waitpid", Process),
    (286, "pread64", File),
    (287, "pwrite64", File),
    (288, "arch_prctl", Process),
    (289, "shmat", Ipc),
    (290, "rt_sigreturn", Signal),
    (291, "fallocate", File),
    (292, "newfstatat", File),
    (293, "process_vm_readv", Memory),
    (294, "process_vm_writev", Memory),
    (295, "fork", Process),
    (296, "vfork", Process),
    (297, "setuid32", User),
    (298, "getuid32", User),
    (299, "setgid32", User),
    (300, "geteuid32", User),
    (301, "getgid32", User),
    (302, "setresuid32", User),
    (303, "setresgid32", User),
    (304, "getresuid32", User),
    (305, "getresgid32", User),
    (306, "finit_module", System),
    (307, "bpf", System),
    (308, "seccomp", System),
    (309, "sigaltstack", Signal),
    (310, "getrandom", Other),
    (311, "fadvise64", File),
    (312, "renameat2", File),
    (313, "userfaultfd", Memory),
    (314, "openat2", File),
    (315, "umount2", File),
    (316, "execve", Process),
    (317, "execveat", Process),
    (318, "copy_file_range", File),
    (319, "clone", Process),
    (320, "clone3", Process),
    (321, "open_by_handle_at", File),
    (322, "io_uring_setup", File),
    (323, "io_uring_enter", File),
    (324, "io_uring_register", File),
    (325, "mlock2", Memory),
    (326, "membarrier", Memory),
    (327, "memfd_create", Memory),
    (328, "pidfd_open", Process),
    (329, "pidfd_getfd", Process),
    (330, "pidfd_send_signal", Signal),
    (331, "statx", File),
    (332, "close_range", File),
];
