use std::io;

use thiserror::Error;

use crate::event::hw::Hardware;

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Errors of a monitoring session.
///
/// Every counter failure names the event and the core it happened on, none
/// of them is recoverable: a counter that silently stops counting would draw
/// a wrong chart.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("perf_event_open failed for event {event} on core {cpu}")]
    Open {
        event: Hardware,
        cpu: u32,
        #[source]
        source: io::Error,
    },

    #[error("failed to enable event {event} on core {cpu}")]
    Enable {
        event: Hardware,
        cpu: u32,
        #[source]
        source: io::Error,
    },

    #[error("failed to disable event {event} on core {cpu}")]
    Disable {
        event: Hardware,
        cpu: u32,
        #[source]
        source: io::Error,
    },

    #[error("failed to reset event {event} on core {cpu}")]
    Reset {
        event: Hardware,
        cpu: u32,
        #[source]
        source: io::Error,
    },

    #[error("failed to read event {event} on core {cpu}")]
    Read {
        event: Hardware,
        cpu: u32,
        #[source]
        source: io::Error,
    },

    #[error("terminal error")]
    Terminal(#[from] io::Error),

    #[error("failed to spawn the sampler thread")]
    Spawn(#[source] io::Error),

    #[error("sampler thread panicked")]
    Sampler,
}
