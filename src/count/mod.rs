use std::borrow::Borrow;
use std::fs::File;
use std::io::{self, Result};

use crate::config::attr::from;
use crate::config::{Cpu, Opts, Proc, Target};
use crate::event::hw::Hardware;
use crate::event::Event;
use crate::ffi::bindings as b;
use crate::ffi::syscall::{ioctl, perf_event_open, read};

#[cfg(test)]
pub(crate) mod mock;
mod set;

pub use set::*;

/// A single counter, bound to one event on one target.
///
/// The counter is closed when dropped.
#[derive(Debug)]
pub struct Counter {
    pub(crate) perf: File,
}

impl Counter {
    pub fn new(
        event: impl TryInto<Event, Error = io::Error>,
        target: impl Into<Target>,
        opts: impl Borrow<Opts>,
    ) -> Result<Self> {
        let target = target.into();
        let Event(event_cfg) = event.try_into()?;
        let attr = from(event_cfg, opts.borrow());
        let flags = target.flags | b::PERF_FLAG_FD_CLOEXEC as u64;
        let perf = perf_event_open(&attr, target.pid, target.cpu, -1, flags)?;

        Ok(Self { perf })
    }

    pub fn enable(&self) -> Result<()> {
        ioctl(&self.perf, b::PERF_IOC_OP_ENABLE)?;
        Ok(())
    }

    pub fn disable(&self) -> Result<()> {
        ioctl(&self.perf, b::PERF_IOC_OP_DISABLE)?;
        Ok(())
    }

    pub fn clear_count(&self) -> Result<()> {
        ioctl(&self.perf, b::PERF_IOC_OP_RESET)?;
        Ok(())
    }

    /// Returns the raw cumulative count.
    pub fn count(&self) -> Result<u64> {
        // With an empty `read_format` the kernel hands back a bare `u64`.
        let mut buf = [0; size_of::<u64>()];
        let len = read(&self.perf, &mut buf)?;
        if len != buf.len() {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                format!("short counter read: {} of {} bytes", len, buf.len()),
            ));
        }
        Ok(u64::from_ne_bytes(buf))
    }
}

/// One live counting resource of a [`CounterSet`].
pub trait Handle {
    fn enable(&self) -> Result<()>;
    fn disable(&self) -> Result<()>;
    fn clear_count(&self) -> Result<()>;
    fn count(&self) -> Result<u64>;
}

/// Opens the per-core counters a [`CounterSet`] is made of.
pub trait Backend {
    type Handle: Handle;

    fn open(&self, event: &Hardware, cpu: Cpu) -> Result<Self::Handle>;
}

/// System-wide `perf_event_open` counters.
#[derive(Clone, Debug, Default)]
pub struct PerfEvent {
    pub opts: Opts,
}

impl Backend for PerfEvent {
    type Handle = Counter;

    fn open(&self, event: &Hardware, cpu: Cpu) -> Result<Counter> {
        Counter::new(event, (cpu, Proc::ALL), &self.opts)
    }
}

impl Handle for Counter {
    fn enable(&self) -> Result<()> {
        Counter::enable(self)
    }

    fn disable(&self) -> Result<()> {
        Counter::disable(self)
    }

    fn clear_count(&self) -> Result<()> {
        Counter::clear_count(self)
    }

    fn count(&self) -> Result<u64> {
        Counter::count(self)
    }
}
