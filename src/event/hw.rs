use std::fmt;

use super::EventConfig;
use crate::ffi::bindings as b;


/// Hardware event, the unit every counter in a session is opened for.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Hardware {
    CpuCycle,
    BusCycle,
    RefCpuCycle,

    Cache(Type, Op, OpResult),
    CacheMiss,
    CacheAccess,

    BranchMiss,
    BranchInstr,

    BackendStalledCycle,
    FrontendStalledCycle,

    Instr,
}

/// Cache the generalized cache event is counted on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Type {
    L1d,
    L1i,
    Ll,
    Dtlb,
    Itlb,
    Bpu,
    Node,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Op {
    Read,
    Write,
    Prefetch,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OpResult {
    Miss,
    Access,
}

impl Hardware {
    pub(crate) fn config(&self) -> EventConfig {
        let (ty, config) = match self {
            Hardware::CpuCycle => (b::PERF_TYPE_HARDWARE, b::PERF_COUNT_HW_CPU_CYCLES as _),
            Hardware::BusCycle => (b::PERF_TYPE_HARDWARE, b::PERF_COUNT_HW_BUS_CYCLES as _),
            Hardware::RefCpuCycle => (b::PERF_TYPE_HARDWARE, b::PERF_COUNT_HW_REF_CPU_CYCLES as _),

            Hardware::Cache(ty, op, result) => {
                let id = ty.id() as u64;
                let op = op.id() as u64;
                let op_result = result.id() as u64;
                (b::PERF_TYPE_HW_CACHE, id | (op << 8) | (op_result << 16))
            }

            Hardware::CacheMiss => (b::PERF_TYPE_HARDWARE, b::PERF_COUNT_HW_CACHE_MISSES as _),
            Hardware::CacheAccess => (b::PERF_TYPE_HARDWARE, b::PERF_COUNT_HW_CACHE_REFERENCES as _),

            Hardware::BranchMiss => (b::PERF_TYPE_HARDWARE, b::PERF_COUNT_HW_BRANCH_MISSES as _),
            Hardware::BranchInstr => (
                b::PERF_TYPE_HARDWARE,
                b::PERF_COUNT_HW_BRANCH_INSTRUCTIONS as _,
            ),

            Hardware::BackendStalledCycle => (
                b::PERF_TYPE_HARDWARE,
                b::PERF_COUNT_HW_STALLED_CYCLES_BACKEND as _,
            ),
            Hardware::FrontendStalledCycle => (
                b::PERF_TYPE_HARDWARE,
                b::PERF_COUNT_HW_STALLED_CYCLES_FRONTEND as _,
            ),

            Hardware::Instr => (b::PERF_TYPE_HARDWARE, b::PERF_COUNT_HW_INSTRUCTIONS as _),
        };

        EventConfig {
            ty,
            config,
            config1: 0,
        }
    }
}

super::try_from!(Hardware, value, Ok(Self(value.config())));

impl Type {
    fn id(self) -> b::perf_hw_cache_id {
        match self {
            Type::L1d => b::PERF_COUNT_HW_CACHE_L1D,
            Type::L1i => b::PERF_COUNT_HW_CACHE_L1I,
            Type::Ll => b::PERF_COUNT_HW_CACHE_LL,
            Type::Dtlb => b::PERF_COUNT_HW_CACHE_DTLB,
            Type::Itlb => b::PERF_COUNT_HW_CACHE_ITLB,
            Type::Bpu => b::PERF_COUNT_HW_CACHE_BPU,
            Type::Node => b::PERF_COUNT_HW_CACHE_NODE,
        }
    }

    fn name(self) -> &'static str {
        match self {
            Type::L1d => "PERF_COUNT_HW_CACHE_L1D",
            Type::L1i => "PERF_COUNT_HW_CACHE_L1I",
            Type::Ll => "PERF_COUNT_HW_CACHE_LL",
            Type::Dtlb => "PERF_COUNT_HW_CACHE_DTLB",
            Type::Itlb => "PERF_COUNT_HW_CACHE_ITLB",
            Type::Bpu => "PERF_COUNT_HW_CACHE_BPU",
            Type::Node => "PERF_COUNT_HW_CACHE_NODE",
        }
    }
}

impl Op {
    fn id(self) -> b::perf_hw_cache_op_id {
        match self {
            Op::Read => b::PERF_COUNT_HW_CACHE_OP_READ,
            Op::Write => b::PERF_COUNT_HW_CACHE_OP_WRITE,
            Op::Prefetch => b::PERF_COUNT_HW_CACHE_OP_PREFETCH,
        }
    }

    fn name(self) -> &'static str {
        match self {
            Op::Read => "PERF_COUNT_HW_CACHE_OP_READ",
            Op::Write => "PERF_COUNT_HW_CACHE_OP_WRITE",
            Op::Prefetch => "PERF_COUNT_HW_CACHE_OP_PREFETCH",
        }
    }
}

impl OpResult {
    fn id(self) -> b::perf_hw_cache_op_result_id {
        match self {
            OpResult::Miss => b::PERF_COUNT_HW_CACHE_RESULT_MISS,
            OpResult::Access => b::PERF_COUNT_HW_CACHE_RESULT_ACCESS,
        }
    }

    fn name(self) -> &'static str {
        match self {
            OpResult::Miss => "PERF_COUNT_HW_CACHE_RESULT_MISS",
            OpResult::Access => "PERF_COUNT_HW_CACHE_RESULT_ACCESS",
        }
    }
}

/// Formats the event with the kernel's constant names, e.g.
/// `PERF_COUNT_HW_CACHE_DTLB | PERF_COUNT_HW_CACHE_OP_READ | PERF_COUNT_HW_CACHE_RESULT_MISS`.
impl fmt::Display for Hardware {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Hardware::CpuCycle => "PERF_COUNT_HW_CPU_CYCLES",
            Hardware::BusCycle => "PERF_COUNT_HW_BUS_CYCLES",
            Hardware::RefCpuCycle => "PERF_COUNT_HW_REF_CPU_CYCLES",
            Hardware::Cache(ty, op, result) => {
                return write!(f, "{} | {} | {}", ty.name(), op.name(), result.name());
            }
            Hardware::CacheMiss => "PERF_COUNT_HW_CACHE_MISSES",
            Hardware::CacheAccess => "PERF_COUNT_HW_CACHE_REFERENCES",
            Hardware::BranchMiss => "PERF_COUNT_HW_BRANCH_MISSES",
            Hardware::BranchInstr => "PERF_COUNT_HW_BRANCH_INSTRUCTIONS",
            Hardware::BackendStalledCycle => "PERF_COUNT_HW_STALLED_CYCLES_BACKEND",
            Hardware::FrontendStalledCycle => "PERF_COUNT_HW_STALLED_CYCLES_FRONTEND",
            Hardware::Instr => "PERF_COUNT_HW_INSTRUCTIONS",
        };
        f.write_str(name)
    }
}
