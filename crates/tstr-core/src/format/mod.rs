//! Value formatting for the display layer.

/// SI units for [`humanize_bytes`]; indices past the end clamp to the last.
pub const BYTE_UNITS: [&str; 7] = ["B", "kB", "MB", "GB", "TB", "PB", "WOOT"];

/// Render a byte count with decimal (powers of 1000) units.
///
/// Divides by 1000 while the integer quotient is at least one, then rounds to
/// two decimals and drops trailing zeros: `1_500_000.0` becomes `"1.5 MB"`.
pub fn humanize_bytes(value: f64) -> String {
    if !value.is_finite() {
        return format!("{} {}", value, BYTE_UNITS[0]);
    }

    let mut scaled = value;
    let mut idx = 0usize;
    while (scaled / 1000.0).floor() > 0.0 {
        scaled /= 1000.0;
        idx += 1;
    }

    let rounded = ((scaled + f64::EPSILON) * 100.0).round() / 100.0;
    let unit = BYTE_UNITS[idx.min(BYTE_UNITS.len() - 1)];
    format!("{} {}", rounded, unit)
}

/// [`humanize_bytes`] with a per-second suffix, for throughput columns.
pub fn humanize_rate(bytes_per_sec: f64) -> String {
    format!("{}/s", humanize_bytes(bytes_per_sec))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_humanize_bytes_examples() {
        assert_eq!(humanize_bytes(1_500_000.0), "1.5 MB");
        assert_eq!(humanize_bytes(999.0), "999 B");
        assert_eq!(humanize_bytes(0.0), "0 B");
    }

    #[test]
    fn test_humanize_bytes_boundaries() {
        assert_eq!(humanize_bytes(1000.0), "1 kB");
        assert_eq!(humanize_bytes(1234.0), "1.23 kB");
        assert_eq!(humanize_bytes(4_917_248.0), "4.92 MB");
        assert_eq!(humanize_bytes(2.5e12), "2.5 TB");
    }

    #[test]
    fn test_humanize_bytes_rounds_to_two_decimals() {
        assert_eq!(humanize_bytes(1.005), "1.01 B");
        assert_eq!(humanize_bytes(12.3456), "12.35 B");
    }

    #[test]
    fn test_humanize_bytes_clamps_to_last_unit() {
        assert_eq!(humanize_bytes(3e18), "3 WOOT");
        assert_eq!(humanize_bytes(3e21), "3 WOOT");
    }

    #[test]
    fn test_humanize_bytes_non_finite_terminates() {
        assert_eq!(humanize_bytes(f64::INFINITY), "inf B");
        assert_eq!(humanize_bytes(f64::NAN), "NaN B");
    }

    #[test]
    fn test_humanize_rate() {
        assert_eq!(humanize_rate(2_000_000.0), "2 MB/s");
    }
}
