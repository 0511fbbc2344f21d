#![allow(non_upper_case_globals, non_camel_case_types, dead_code)]

// Subset of `include/uapi/linux/perf_event.h` needed for system-wide counting.
//
// Only `PERF_ATTR_SIZE_VER0` of the attribute struct is declared, the kernel
// accepts any size it knows about and zero-extends the rest.

pub type perf_type_id = u32;
pub const PERF_TYPE_HARDWARE: perf_type_id = 0;
pub const PERF_TYPE_SOFTWARE: perf_type_id = 1;
pub const PERF_TYPE_TRACEPOINT: perf_type_id = 2;
pub const PERF_TYPE_HW_CACHE: perf_type_id = 3;
pub const PERF_TYPE_RAW: perf_type_id = 4;

pub type perf_hw_id = u32;
pub const PERF_COUNT_HW_CPU_CYCLES: perf_hw_id = 0;
pub const PERF_COUNT_HW_INSTRUCTIONS: perf_hw_id = 1;
pub const PERF_COUNT_HW_CACHE_REFERENCES: perf_hw_id = 2;
pub const PERF_COUNT_HW_CACHE_MISSES: perf_hw_id = 3;
pub const PERF_COUNT_HW_BRANCH_INSTRUCTIONS: perf_hw_id = 4;
pub const PERF_COUNT_HW_BRANCH_MISSES: perf_hw_id = 5;
pub const PERF_COUNT_HW_BUS_CYCLES: perf_hw_id = 6;
pub const PERF_COUNT_HW_STALLED_CYCLES_FRONTEND: perf_hw_id = 7;
pub const PERF_COUNT_HW_STALLED_CYCLES_BACKEND: perf_hw_id = 8;
pub const PERF_COUNT_HW_REF_CPU_CYCLES: perf_hw_id = 9;

pub type perf_hw_cache_id = u32;
pub const PERF_COUNT_HW_CACHE_L1D: perf_hw_cache_id = 0;
pub const PERF_COUNT_HW_CACHE_L1I: perf_hw_cache_id = 1;
pub const PERF_COUNT_HW_CACHE_LL: perf_hw_cache_id = 2;
pub const PERF_COUNT_HW_CACHE_DTLB: perf_hw_cache_id = 3;
pub const PERF_COUNT_HW_CACHE_ITLB: perf_hw_cache_id = 4;
pub const PERF_COUNT_HW_CACHE_BPU: perf_hw_cache_id = 5;
pub const PERF_COUNT_HW_CACHE_NODE: perf_hw_cache_id = 6;

pub type perf_hw_cache_op_id = u32;
pub const PERF_COUNT_HW_CACHE_OP_READ: perf_hw_cache_op_id = 0;
pub const PERF_COUNT_HW_CACHE_OP_WRITE: perf_hw_cache_op_id = 1;
pub const PERF_COUNT_HW_CACHE_OP_PREFETCH: perf_hw_cache_op_id = 2;

pub type perf_hw_cache_op_result_id = u32;
pub const PERF_COUNT_HW_CACHE_RESULT_ACCESS: perf_hw_cache_op_result_id = 0;
pub const PERF_COUNT_HW_CACHE_RESULT_MISS: perf_hw_cache_op_result_id = 1;

pub const PERF_FLAG_FD_NO_GROUP: u32 = 1 << 0;
pub const PERF_FLAG_FD_OUTPUT: u32 = 1 << 1;
pub const PERF_FLAG_PID_CGROUP: u32 = 1 << 2;
pub const PERF_FLAG_FD_CLOEXEC: u32 = 1 << 3;

pub const PERF_IOC_FLAG_GROUP: u32 = 1;

pub const PERF_ATTR_SIZE_VER0: u32 = 64;

// Masks of the `perf_event_attr` flag bitfield. C bitfields are allocated
// from the least significant bit on little-endian targets and from the most
// significant bit on big-endian ones.
const fn attr_flag(n: u32) -> u64 {
    if cfg!(target_endian = "big") {
        1 << (63 - n)
    } else {
        1 << n
    }
}

pub const ATTR_FLAG_DISABLED: u64 = attr_flag(0);
pub const ATTR_FLAG_INHERIT: u64 = attr_flag(1);
pub const ATTR_FLAG_PINNED: u64 = attr_flag(2);
pub const ATTR_FLAG_EXCLUSIVE: u64 = attr_flag(3);
pub const ATTR_FLAG_EXCLUDE_USER: u64 = attr_flag(4);
pub const ATTR_FLAG_EXCLUDE_KERNEL: u64 = attr_flag(5);
pub const ATTR_FLAG_EXCLUDE_HV: u64 = attr_flag(6);
pub const ATTR_FLAG_EXCLUDE_IDLE: u64 = attr_flag(7);

#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct perf_event_attr {
    pub type_: u32,
    pub size: u32,
    pub config: u64,
    pub sample_period: u64,
    pub sample_type: u64,
    pub read_format: u64,
    pub flags: u64,
    pub wakeup_events: u32,
    pub bp_type: u32,
    pub config1: u64,
}

const _: () = assert!(size_of::<perf_event_attr>() == PERF_ATTR_SIZE_VER0 as usize);

macro_rules! flag {
    ($get:ident, $set:ident, $bit:ident) => {
        #[inline]
        pub fn $get(&self) -> bool {
            self.flags & $bit != 0
        }

        #[inline]
        pub fn $set(&mut self, val: bool) {
            if val {
                self.flags |= $bit;
            } else {
                self.flags &= !$bit;
            }
        }
    };
}

impl perf_event_attr {
    flag!(disabled, set_disabled, ATTR_FLAG_DISABLED);
    flag!(inherit, set_inherit, ATTR_FLAG_INHERIT);
    flag!(pinned, set_pinned, ATTR_FLAG_PINNED);
    flag!(exclusive, set_exclusive, ATTR_FLAG_EXCLUSIVE);
    flag!(exclude_user, set_exclude_user, ATTR_FLAG_EXCLUDE_USER);
    flag!(exclude_kernel, set_exclude_kernel, ATTR_FLAG_EXCLUDE_KERNEL);
    flag!(exclude_hv, set_exclude_hv, ATTR_FLAG_EXCLUDE_HV);
    flag!(exclude_idle, set_exclude_idle, ATTR_FLAG_EXCLUDE_IDLE);
}

// `_IO('$', nr)` from `include/uapi/asm-generic/ioctl.h`. The "none" direction
// is encoded differently on a few architectures.
#[cfg(any(
    target_arch = "powerpc",
    target_arch = "powerpc64",
    target_arch = "mips",
    target_arch = "mips64",
    target_arch = "sparc",
    target_arch = "sparc64",
))]
const IOC_NONE: u64 = 1 << 29;
#[cfg(not(any(
    target_arch = "powerpc",
    target_arch = "powerpc64",
    target_arch = "mips",
    target_arch = "mips64",
    target_arch = "sparc",
    target_arch = "sparc64",
)))]
const IOC_NONE: u64 = 0;

const fn io(nr: u64) -> u64 {
    IOC_NONE | ((b'$' as u64) << 8) | nr
}

pub type perf_ioc_ops = u64;
pub const PERF_IOC_OP_ENABLE: perf_ioc_ops = io(0);
pub const PERF_IOC_OP_DISABLE: perf_ioc_ops = io(1);
pub const PERF_IOC_OP_REFRESH: perf_ioc_ops = io(2);
pub const PERF_IOC_OP_RESET: perf_ioc_ops = io(3);
