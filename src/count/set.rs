use std::io;

use tracing::debug;

use super::{Backend, Counter, Handle};
use crate::config::Cpu;
use crate::error::{Error, Result};
use crate::event::hw::Hardware;
use crate::sampler::{Reading, MAX_EVENTS};

/// One counter per (core, event) pair, read back as one value per event.
///
/// Counters are laid out core-major in event order, so counter `k` counts
/// event `k % events.len()` on core `cpus[k / events.len()]`.
///
/// Reads are not atomic across counters: the per-core values of one reading
/// may be taken microseconds apart, which is fine for a visual monitor.
///
/// Dropping the set closes every counter, whether or not it was disabled.
///
/// # Examples
///
/// ```no_run
/// use std::thread;
/// use std::time::Duration;
///
/// use perf_counter_monitor::count::{CounterSet, PerfEvent};
/// use perf_counter_monitor::event::hw::Hardware;
///
/// let mut set = CounterSet::open(&PerfEvent::default(), &[Hardware::CpuCycle], None).unwrap();
///
/// set.reset().unwrap();
/// set.enable().unwrap();
/// thread::sleep(Duration::from_millis(100));
///
/// let cycles = set.read().unwrap().values()[0];
/// println!("{} cycles across all cores", cycles);
/// ```
pub struct CounterSet<H = Counter> {
    events: Vec<Hardware>,
    cpus: Vec<u32>,
    handles: Vec<H>,
    enabled: bool,
}

impl<H: Handle> CounterSet<H> {
    /// Opens `events` on the cores with the ids in `cpus`, every online core
    /// if `None`.
    ///
    /// Fails on the first counter that cannot be opened, the counters opened
    /// before it are closed again.
    pub fn open<B>(backend: &B, events: &[Hardware], cpus: Option<&[u32]>) -> Result<Self>
    where
        B: Backend<Handle = H>,
    {
        if events.is_empty() {
            return Err(Error::Config("no events to count".into()));
        }
        if events.len() > MAX_EVENTS {
            return Err(Error::Config(format!(
                "at most {} events can be counted at once, got {}",
                MAX_EVENTS,
                events.len()
            )));
        }
        let cpus = cpus.unwrap_or(crate::ffi::ONLINE_CPUS.as_slice()).to_vec();
        if cpus.is_empty() {
            return Err(Error::Config("no cores to count on".into()));
        }

        let mut handles = Vec::with_capacity(cpus.len() * events.len());
        for &cpu in &cpus {
            for event in events {
                let handle = backend.open(event, Cpu(cpu)).map_err(|source| Error::Open {
                    event: event.clone(),
                    cpu,
                    source,
                })?;
                handles.push(handle);
            }
        }

        debug!(events = events.len(), cpus = ?cpus, counters = handles.len(), "opened counter set");

        Ok(Self {
            events: events.to_vec(),
            cpus,
            handles,
            enabled: false,
        })
    }

    pub fn events(&self) -> &[Hardware] {
        &self.events
    }

    /// Ids of the cores counted on.
    pub fn cpus(&self) -> &[u32] {
        &self.cpus
    }

    /// Number of live counters.
    pub fn len(&self) -> usize {
        self.handles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Starts counting on every core.
    pub fn enable(&mut self) -> Result<()> {
        self.each(H::enable, |event, cpu, source| Error::Enable {
            event,
            cpu,
            source,
        })?;
        self.enabled = true;
        debug!("counter set enabled");
        Ok(())
    }

    /// Stops counting on every core, the counters stay open.
    pub fn disable(&mut self) -> Result<()> {
        self.each(H::disable, |event, cpu, source| Error::Disable {
            event,
            cpu,
            source,
        })?;
        self.enabled = false;
        debug!("counter set disabled");
        Ok(())
    }

    /// Zeroes every counter.
    pub fn reset(&mut self) -> Result<()> {
        self.each(H::clear_count, |event, cpu, source| Error::Reset {
            event,
            cpu,
            source,
        })
    }

    /// Reads every counter and sums the counts per event.
    pub fn read(&self) -> Result<Reading> {
        let dims = self.events.len();
        let mut reading = Reading::zero(dims);

        for (k, handle) in self.handles.iter().enumerate() {
            let count = handle.count().map_err(|source| {
                let (event, cpu) = self.locate(k);
                Error::Read { event, cpu, source }
            })?;
            reading.add(k % dims, count);
        }

        Ok(reading)
    }

    fn each(
        &self,
        op: impl Fn(&H) -> io::Result<()>,
        err: impl Fn(Hardware, u32, io::Error) -> Error,
    ) -> Result<()> {
        for (k, handle) in self.handles.iter().enumerate() {
            op(handle).map_err(|source| {
                let (event, cpu) = self.locate(k);
                err(event, cpu, source)
            })?;
        }
        Ok(())
    }

    fn locate(&self, k: usize) -> (Hardware, u32) {
        let dims = self.events.len();
        (self.events[k % dims].clone(), self.cpus[k / dims])
    }
}
