use std::fs;
use std::sync::LazyLock;

pub mod bindings;
pub mod syscall;
#[cfg(test)]
mod test;

const ONLINE_PATH: &str = "/sys/devices/system/cpu/online";

/// Ids of the online CPUs, the default cores of a system-wide counter set.
///
/// Ids may have gaps when cores are offline, so they come from the kernel's
/// online mask rather than a count.
pub static ONLINE_CPUS: LazyLock<Vec<u32>> = LazyLock::new(|| {
    fs::read_to_string(ONLINE_PATH)
        .ok()
        .and_then(|list| parse_cpu_list(&list))
        .unwrap_or_else(|| (0..online_count()).collect())
});

fn online_count() -> u32 {
    let name = libc::_SC_NPROCESSORS_ONLN;
    let n = unsafe { libc::sysconf(name) };
    // `sysconf` reports -1 when the value is unavailable, fall back to what
    // the scheduler lets us see.
    match n {
        n if n > 0 => n as _,
        _ => std::thread::available_parallelism().map_or(1, |n| n.get() as _),
    }
}

/// Parses a kernel cpu list such as `0-3,5,7-8`.
pub(crate) fn parse_cpu_list(list: &str) -> Option<Vec<u32>> {
    let mut cpus = vec![];
    for range in list.trim().split(',') {
        match range.split_once('-') {
            Some((lo, hi)) => {
                let (lo, hi) = (lo.parse::<u32>().ok()?, hi.parse::<u32>().ok()?);
                if lo > hi {
                    return None;
                }
                cpus.extend(lo..=hi);
            }
            None => cpus.push(range.parse().ok()?),
        }
    }
    Some(cpus)
}

pub type Attr = bindings::perf_event_attr;
