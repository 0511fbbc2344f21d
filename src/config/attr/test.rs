use super::from;
use crate::config::{Opts, Priv};
use crate::event::hw::{Hardware, Op, OpResult, Type};
use crate::ffi::bindings as b;

#[test]
fn test_default_opts_open_disabled() {
    let attr = from(Hardware::CpuCycle.config(), &Opts::default());
    assert_eq!(attr.size, b::PERF_ATTR_SIZE_VER0);
    assert_eq!(attr.type_, b::PERF_TYPE_HARDWARE);
    assert_eq!(attr.config, 0);
    assert!(attr.disabled());
    assert!(!attr.inherit());
    assert!(!attr.exclude_kernel());
    assert_eq!(attr.flags, b::ATTR_FLAG_DISABLED);
}

#[test]
fn test_enabled_exclusions() {
    let opts = Opts {
        exclude: Priv {
            kernel: true,
            hv: true,
            ..Default::default()
        },
        enable: true,
    };
    let attr = from(
        Hardware::Cache(Type::Dtlb, Op::Read, OpResult::Access).config(),
        &opts,
    );
    assert_eq!(attr.type_, b::PERF_TYPE_HW_CACHE);
    assert!(!attr.disabled());
    assert!(!attr.pinned());
    assert!(attr.exclude_kernel());
    assert!(attr.exclude_hv());
    assert!(!attr.exclude_user());
    assert!(!attr.exclude_idle());
}
