use std::io::{self, Result};
use std::sync::atomic::{AtomicBool, AtomicU64, AtomicUsize, Ordering::SeqCst};
use std::sync::{Arc, Mutex};

use super::{Backend, Handle};
use crate::config::Cpu;
use crate::event::hw::Hardware;

/// In-memory counters for exercising counter sets without `perf_event_open`.
#[derive(Clone, Default)]
#[allow(dead_code, reason = "this is a testing utility.")]
pub(crate) struct MockBackend {
    shared: Arc<Shared>,
}

#[derive(Default)]
struct Shared {
    open: AtomicUsize,
    reads: AtomicUsize,
    fail_open: Mutex<Option<(Hardware, u32)>>,
    fail_enable: Mutex<Option<(Hardware, u32)>>,
    fail_read: Mutex<Option<(Hardware, u32)>>,
    fail_every_read: AtomicBool,
    counters: Mutex<Vec<(Hardware, u32, Arc<AtomicU64>)>>,
}

pub(crate) struct MockHandle {
    shared: Arc<Shared>,
    event: Hardware,
    cpu: u32,
    count: Arc<AtomicU64>,
    enabled: AtomicBool,
}

#[allow(dead_code, reason = "this is a testing utility.")]
impl MockBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Counters currently open.
    pub fn open_count(&self) -> usize {
        self.shared.open.load(SeqCst)
    }

    /// Individual counter reads so far.
    pub fn reads(&self) -> usize {
        self.shared.reads.load(SeqCst)
    }

    pub fn fail_open_on(&self, event: Hardware, cpu: u32) {
        *self.shared.fail_open.lock().unwrap() = Some((event, cpu));
    }

    pub fn fail_enable_on(&self, event: Hardware, cpu: u32) {
        *self.shared.fail_enable.lock().unwrap() = Some((event, cpu));
    }

    pub fn fail_read_on(&self, event: Hardware, cpu: u32) {
        *self.shared.fail_read.lock().unwrap() = Some((event, cpu));
    }

    /// Makes every counter fail its reads.
    pub fn fail_reads(&self) {
        self.shared.fail_every_read.store(true, SeqCst);
    }

    /// Sets the raw count of every counter of `event` on `cpu`.
    pub fn set(&self, event: &Hardware, cpu: u32, value: u64) {
        for (ev, c, count) in self.shared.counters.lock().unwrap().iter() {
            if ev == event && *c == cpu {
                count.store(value, SeqCst);
            }
        }
    }
}

impl Backend for MockBackend {
    type Handle = MockHandle;

    fn open(&self, event: &Hardware, Cpu(cpu): Cpu) -> Result<MockHandle> {
        if matches(&self.shared.fail_open, event, cpu) {
            return Err(io::Error::from(io::ErrorKind::PermissionDenied));
        }

        let count = Arc::new(AtomicU64::new(0));
        self.shared
            .counters
            .lock()
            .unwrap()
            .push((event.clone(), cpu, Arc::clone(&count)));
        self.shared.open.fetch_add(1, SeqCst);

        Ok(MockHandle {
            shared: Arc::clone(&self.shared),
            event: event.clone(),
            cpu,
            count,
            enabled: AtomicBool::new(false),
        })
    }
}

#[allow(dead_code, reason = "this is a testing utility.")]
impl MockHandle {
    pub fn is_enabled(&self) -> bool {
        self.enabled.load(SeqCst)
    }
}

impl Handle for MockHandle {
    fn enable(&self) -> Result<()> {
        if matches(&self.shared.fail_enable, &self.event, self.cpu) {
            return Err(io::Error::other("mock enable failure"));
        }
        self.enabled.store(true, SeqCst);
        Ok(())
    }

    fn disable(&self) -> Result<()> {
        self.enabled.store(false, SeqCst);
        Ok(())
    }

    fn clear_count(&self) -> Result<()> {
        self.count.store(0, SeqCst);
        Ok(())
    }

    fn count(&self) -> Result<u64> {
        if self.shared.fail_every_read.load(SeqCst)
            || matches(&self.shared.fail_read, &self.event, self.cpu)
        {
            return Err(io::Error::other("mock read failure"));
        }
        self.shared.reads.fetch_add(1, SeqCst);
        Ok(self.count.load(SeqCst))
    }
}

impl Drop for MockHandle {
    fn drop(&mut self) {
        self.shared.open.fetch_sub(1, SeqCst);
    }
}

fn matches(target: &Mutex<Option<(Hardware, u32)>>, event: &Hardware, cpu: u32) -> bool {
    match &*target.lock().unwrap() {
        Some((ev, c)) => ev == event && *c == cpu,
        None => false,
    }
}

/// Core ids `0..n`.
#[allow(dead_code, reason = "this is a testing utility.")]
pub(crate) fn cores(n: u32) -> Vec<u32> {
    (0..n).collect()
}
