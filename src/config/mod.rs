pub(crate) mod attr;
mod target;

pub use target::*;

/// Options every counter of a session is opened with.
#[derive(Clone, Debug, Default)]
pub struct Opts {
    pub exclude: Priv,

    /// Start counting as soon as the counter is opened.
    ///
    /// Counter sets open their counters disabled and enable them together
    /// after a reset, so the first reading carries no pre-session history.
    pub enable: bool,
}

/// Privilege levels.
#[derive(Clone, Debug, Default)]
pub struct Priv {
    /// User space.
    pub user: bool,

    /// Kernel space.
    pub kernel: bool,

    /// Hypervisor.
    pub hv: bool,

    /// Idle task.
    pub idle: bool,
}
