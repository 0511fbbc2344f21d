use std::sync::mpsc::Sender;
use std::thread;
use std::time::Duration;

use tracing::{info, trace, warn};

use crate::count::{Counter, CounterSet, Handle};
use crate::error::Result;
use crate::history::SharedHistory;
use crate::stop::StopToken;

mod reading;

pub use reading::*;

/// Drives periodic sampling: every period it reads the counter set, turns
/// the cumulative counts into a [`Delta`] and pushes it into the history.
///
/// The sampler owns the counter set, so the counters are closed when it
/// is dropped, on every exit path of [`run`](Self::run).
pub struct Sampler<H = Counter> {
    set: CounterSet<H>,
    history: SharedHistory,
    period: Duration,
    last: Reading,
}

impl<H: Handle> Sampler<H> {
    /// Resets and enables `set`.
    ///
    /// The reset makes the first delta start from the all-zero reading rather
    /// than from whatever the counters held before the session.
    pub fn start(mut set: CounterSet<H>, history: SharedHistory, period: Duration) -> Result<Self> {
        set.reset()?;
        set.enable()?;
        let last = Reading::zero(set.events().len());

        Ok(Self {
            set,
            history,
            period,
            last,
        })
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    pub fn counters(&self) -> &CounterSet<H> {
        &self.set
    }

    /// Samples once: read, diff against the previous reading, push.
    pub fn tick(&mut self) -> Result<Delta> {
        let now = self.set.read()?;
        let delta = now.delta(&self.last);
        self.last = now;

        trace!(delta = ?delta.values(), "tick");
        self.history.push(delta.clone());
        Ok(delta)
    }

    /// Samples until `stop` is observed, notifying `redraw` after every tick.
    ///
    /// The token is checked after each sleep, so stopping takes at most one
    /// period and never interrupts a read. A failed read stops the token too,
    /// so the renderer goes down with the sampler.
    pub fn run(mut self, stop: &StopToken, redraw: &Sender<()>) -> Result<()> {
        info!(period = ?self.period, counters = self.set.len(), "sampling");

        let sampled = self.sample(stop, redraw);
        if sampled.is_err() {
            stop.stop();
        }
        let disabled = self.set.disable();
        if let (Err(_), Err(e)) = (&sampled, &disabled) {
            // Only the first error is reported.
            warn!(error = %e, "failed to disable counters after sampling failed");
        }

        info!("sampling stopped");
        sampled.and(disabled)
    }

    fn sample(&mut self, stop: &StopToken, redraw: &Sender<()>) -> Result<()> {
        loop {
            thread::sleep(self.period);
            if stop.is_stopped() {
                return Ok(());
            }

            self.tick()?;
            // The renderer may already be gone.
            let _ = redraw.send(());
        }
    }
}
