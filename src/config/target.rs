#[derive(Clone, Copy, Debug)]
pub struct All;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct Cpu(pub u32);

/// Only system-wide counting is supported, so the sole process target is
/// every process.
#[derive(Clone, Copy, Debug)]
pub struct Proc;

impl Proc {
    pub const ALL: All = All;
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Target {
    pub(crate) pid: i32,
    pub(crate) cpu: i32,
    pub(crate) flags: u64,
}

macro_rules! into_target {
    ($ty: ty, $destruct: tt, $pid: expr, $cpu: expr, $flags: expr) => {
        impl From<$ty> for Target {
            fn from($destruct: $ty) -> Self {
                Target {
                    pid: $pid as _,
                    cpu: $cpu as _,
                    flags: $flags as _,
                }
            }
        }
    };
}

into_target!((Cpu, All), (Cpu(cpu), _), -1, cpu, 0);

// `(All, All)` has no `From` impl: `pid == -1 && cpu == -1` is rejected by
// `perf_event_open` with `EINVAL`.
