//! Live terminal chart of machine-wide hardware performance counters.
//!
//! A [`count::CounterSet`] opens one `perf_event_open` counter per core for
//! every event of a [`mode::Mode`]. A [`sampler::Sampler`] reads the set once
//! per period, sums the counts over the cores and pushes the difference to
//! the previous reading into a fixed-size [`history::History`], which the
//! [`render`] loop charts.
//!
//! ## Example
//!
//! ```no_run
//! use std::time::Duration;
//!
//! use perf_counter_monitor::app::{Config, Session};
//! use perf_counter_monitor::mode::Mode;
//!
//! let config = Config::new(Mode::CpuCycles, Duration::from_millis(100), 100).unwrap();
//! Session::open(config).unwrap().run().unwrap();
//! ```
//!
//! ## Privileges
//!
//! Counting every process on a core needs root, `CAP_PERFMON`, or
//! `kernel.perf_event_paranoid` set to 0 or lower.

#[cfg(not(any(target_os = "linux", target_os = "android")))]
compile_error!("perf_event_open is only available on Linux");

pub mod app;
pub mod cli;
pub mod config;
pub mod count;
pub mod error;
pub mod event;
mod ffi;
pub mod history;
pub mod mode;
pub mod render;
pub mod sampler;
pub mod stop;
