use super::bindings as b;
use super::{parse_cpu_list, Attr, ONLINE_CPUS};

#[test]
fn test_parse_contiguous() {
    assert_eq!(parse_cpu_list("0-3\n"), Some(vec![0, 1, 2, 3]));
    assert_eq!(parse_cpu_list("0"), Some(vec![0]));
}

#[test]
fn test_parse_with_gaps() {
    // CPU 1 offline.
    assert_eq!(parse_cpu_list("0,2-3"), Some(vec![0, 2, 3]));
    assert_eq!(parse_cpu_list("0-1,4,6-7\n"), Some(vec![0, 1, 4, 6, 7]));
}

#[test]
fn test_parse_rejects_garbage() {
    assert_eq!(parse_cpu_list(""), None);
    assert_eq!(parse_cpu_list("0-"), None);
    assert_eq!(parse_cpu_list("3-1"), None);
    assert_eq!(parse_cpu_list("a,b"), None);
}

#[test]
fn test_online_cpus() {
    assert!(!ONLINE_CPUS.is_empty());
    assert!(ONLINE_CPUS.windows(2).all(|w| w[0] < w[1]));
}

#[test]
#[cfg(target_endian = "little")]
fn test_attr_flags_from_low_bit() {
    assert_eq!(b::ATTR_FLAG_DISABLED, 1);
    assert_eq!(b::ATTR_FLAG_EXCLUDE_IDLE, 1 << 7);
}

#[test]
#[cfg(target_endian = "big")]
fn test_attr_flags_from_high_bit() {
    assert_eq!(b::ATTR_FLAG_DISABLED, 1 << 63);
    assert_eq!(b::ATTR_FLAG_EXCLUDE_IDLE, 1 << 56);
}

#[test]
fn test_attr_flags_are_distinct() {
    let mut attr = Attr::default();
    attr.set_disabled(true);
    attr.set_exclude_kernel(true);
    assert!(attr.disabled() && attr.exclude_kernel());
    assert!(!attr.inherit() && !attr.exclude_user());

    attr.set_disabled(false);
    assert_eq!(attr.flags, b::ATTR_FLAG_EXCLUDE_KERNEL);
}
