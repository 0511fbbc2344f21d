const UNITS: [(u64, &str); 4] = [
    (1_000_000_000_000, "T"),
    (1_000_000_000, "G"),
    (1_000_000, "M"),
    (1_000, "K"),
];

/// Shortens `value` to its leading digits and a unit suffix, rounding down:
/// `999`, `1K`, `12M`.
pub fn human_readable(value: u64) -> String {
    for (scale, unit) in UNITS {
        if value >= scale {
            return format!("{}{}", value / scale, unit);
        }
    }
    value.to_string()
}

#[cfg(test)]
mod test {
    use super::human_readable;

    #[test]
    fn test_below_thousand() {
        assert_eq!(human_readable(0), "0");
        assert_eq!(human_readable(999), "999");
    }

    #[test]
    fn test_unit_boundaries() {
        assert_eq!(human_readable(1_000), "1K");
        assert_eq!(human_readable(999_999), "999K");
        assert_eq!(human_readable(1_000_000), "1M");
        assert_eq!(human_readable(12_345_678), "12M");
        assert_eq!(human_readable(1_000_000_000), "1G");
        assert_eq!(human_readable(1_000_000_000_000), "1T");
    }

    #[test]
    fn test_terabytes_do_not_roll_over() {
        assert_eq!(human_readable(u64::MAX), "18446744T");
    }
}
