use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use tracing::info;

use crate::cli::Cli;
use crate::count::{Counter, CounterSet, PerfEvent};
use crate::error::{Error, Result};
use crate::history::{History, SharedHistory};
use crate::mode::Mode;
use crate::render::{self, Tui, View};
use crate::sampler::Sampler;
use crate::stop::{signal, StopToken};


/// Validated session settings.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Config {
    pub mode: Mode,
    pub period: Duration,
    pub buffer_size: usize,
}

impl Config {
    pub fn new(mode: Mode, period: Duration, buffer_size: usize) -> Result<Self> {
        if period.is_zero() {
            return Err(Error::Config("sampling period must be positive".into()));
        }
        if buffer_size == 0 {
            return Err(Error::Config("buffer size must be positive".into()));
        }
        Ok(Self {
            mode,
            period,
            buffer_size,
        })
    }
}

impl TryFrom<&Cli> for Config {
    type Error = Error;

    fn try_from(cli: &Cli) -> Result<Self> {
        let buffer_size = usize::try_from(cli.buffer_size)
            .map_err(|_| Error::Config(format!("buffer size {} is too large", cli.buffer_size)))?;
        Self::new(cli.event, Duration::from_millis(cli.period_ms), buffer_size)
    }
}

/// A monitoring session: counters open on every core, not yet counting.
pub struct Session {
    config: Config,
    set: CounterSet<Counter>,
}

impl Session {
    /// Opens the mode's events on every online core.
    pub fn open(config: Config) -> Result<Self> {
        let set = CounterSet::open(&PerfEvent::default(), config.mode.events(), None)?;
        Ok(Self { config, set })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn cpus(&self) -> &[u32] {
        self.set.cpus()
    }

    /// Samples and charts until the user quits or sampling fails.
    ///
    /// The counters are closed before the terminal is restored.
    pub fn run(self) -> Result<()> {
        let Self { config, set } = self;
        info!(mode = config.mode.name(), cpus = set.cpus().len(), "starting session");

        signal::watch_for(&[libc::SIGINT, libc::SIGTERM]);

        let history = SharedHistory::new(History::new(config.buffer_size, set.events().len()));
        let view = View {
            mode: config.mode,
            period: config.period,
        };
        let stop = StopToken::new();
        let (tx, rx) = mpsc::channel();

        let mut tui = Tui::enter()?;
        let sampler = Sampler::start(set, history.clone(), config.period)?;

        let handle = {
            let stop = stop.clone();
            thread::Builder::new()
                .name("sampler".into())
                .spawn(move || sampler.run(&stop, &tx))
                .map_err(Error::Spawn)?
        };

        let rendered = render::run(&mut tui, &view, &history, &rx, &stop);
        stop.stop();
        let sampled = handle.join().unwrap_or(Err(Error::Sampler));
        drop(tui);

        info!("session ended");
        sampled.and(rendered)
    }
}
