use clap::{value_parser, Parser};
use itertools::Itertools;

use crate::mode::Mode;

#[cfg(test)]
mod test;

/// Live chart of machine-wide hardware performance counters.
#[derive(Debug, Parser)]
#[command(name = "monitor", disable_version_flag = true, after_help = events_help())]
pub struct Cli {
    /// What to monitor, see the list below.
    #[arg(short, long, value_enum, value_name = "EVENT", hide_possible_values = true)]
    pub event: Mode,

    /// Sampling period in milliseconds.
    #[arg(
        short = 'p',
        long = "period-ms",
        value_name = "N",
        default_value_t = 100,
        value_parser = value_parser!(u64).range(1..),
    )]
    pub period_ms: u64,

    /// Number of samples kept and charted.
    #[arg(
        long,
        value_name = "N",
        default_value_t = 100,
        value_parser = value_parser!(u64).range(1..),
    )]
    pub buffer_size: u64,
}

fn events_help() -> String {
    let events = Mode::all()
        .iter()
        .map(|mode| {
            let counters = mode.events().iter().join(", ");
            format!("  {:<16}{}\n  {:<16}({})", mode.name(), mode.title(), "", counters)
        })
        .join("\n");

    format!(
        "Events:\n{}\n\nCounting on every core needs root, CAP_PERFMON or a permissive \
         kernel.perf_event_paranoid.",
        events
    )
}
