use clap::ValueEnum;

use crate::event::hw::{Hardware, Op, OpResult, Type};
use crate::sampler::Delta;


/// What to monitor. Each mode fixes the events to count and how their deltas
/// are charted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    /// CPU cycles, summed over every core.
    CpuCycles,
    /// Share of dTLB read and write accesses that missed.
    DtlbMissRate,
}

/// One chart of the monitor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Panel {
    /// Sum of `dims` per tick.
    Value {
        title: &'static str,
        dims: &'static [usize],
    },
    /// `100 * sum(numerator) / sum(denominator)` per tick.
    Ratio {
        title: &'static str,
        numerator: &'static [usize],
        denominator: &'static [usize],
    },
}

struct Entry {
    mode: Mode,
    name: &'static str,
    title: &'static str,
    events: &'static [Hardware],
    panels: &'static [Panel],
}

// Indexed by `Mode as usize`.
const TABLE: &[Entry] = &[
    Entry {
        mode: Mode::CpuCycles,
        name: "cpu-cycles",
        title: "CPU cycles",
        events: &[Hardware::CpuCycle],
        panels: &[Panel::Value {
            title: "CPU cycles",
            dims: &[0],
        }],
    },
    Entry {
        mode: Mode::DtlbMissRate,
        name: "dtlb-miss-rate",
        title: "dTLB miss rate",
        events: &[
            Hardware::Cache(Type::Dtlb, Op::Read, OpResult::Miss),
            Hardware::Cache(Type::Dtlb, Op::Write, OpResult::Miss),
            Hardware::Cache(Type::Dtlb, Op::Read, OpResult::Access),
            Hardware::Cache(Type::Dtlb, Op::Write, OpResult::Access),
            Hardware::CacheMiss,
            Hardware::CacheAccess,
        ],
        panels: &[
            Panel::Ratio {
                title: "dTLB miss rate",
                numerator: &[0, 1],
                denominator: &[2, 3],
            },
            Panel::Value {
                title: "dTLB accesses",
                dims: &[2, 3],
            },
        ],
    },
];

impl Mode {
    pub fn all() -> &'static [Mode] {
        Mode::value_variants()
    }

    fn entry(self) -> &'static Entry {
        let entry = &TABLE[self as usize];
        debug_assert_eq!(entry.mode, self);
        entry
    }

    /// Name on the command line.
    pub fn name(self) -> &'static str {
        self.entry().name
    }

    /// Human-readable name.
    pub fn title(self) -> &'static str {
        self.entry().title
    }

    /// Events to count, in delta dimension order.
    pub fn events(self) -> &'static [Hardware] {
        self.entry().events
    }

    /// Charts to draw, top to bottom.
    pub fn panels(self) -> &'static [Panel] {
        self.entry().panels
    }
}

impl Panel {
    pub fn title(&self) -> &'static str {
        match *self {
            Panel::Value { title, .. } | Panel::Ratio { title, .. } => title,
        }
    }

    /// The plotted value of one tick.
    pub fn value(&self, delta: &Delta) -> f64 {
        match *self {
            Panel::Value { dims, .. } => delta.sum(dims) as f64,
            Panel::Ratio {
                numerator,
                denominator,
                ..
            } => ratio(delta.sum(numerator), delta.sum(denominator)),
        }
    }
}

/// `numerator` as a percentage of `denominator`, 0 when there is nothing to
/// divide by.
pub fn ratio(numerator: u64, denominator: u64) -> f64 {
    if denominator == 0 {
        return 0.0;
    }
    100.0 * numerator as f64 / denominator as f64
}
