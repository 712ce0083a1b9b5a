//! Formatting utilities for byte sizes, percentages and addresses.

const BYTE_UNITS: [&str; 5] = ["Bytes", "KiB", "MiB", "GiB", "TiB"];

/// Bytes per megabyte as the panel counts them (binary).
pub const BYTES_PER_MB: u64 = 1024 * 1024;

/// Convert a megabyte limit into bytes.
#[inline]
pub fn mb_to_bytes(megabytes: u64) -> u64 {
    megabytes.saturating_mul(BYTES_PER_MB)
}

/// Format a byte count with binary units (e.g. "1.5 KiB", "512 Bytes").
///
/// Values are rounded to two decimals and trailing zeros are dropped.
pub fn bytes_to_string(bytes: u64) -> String {
    if bytes < 1 {
        return "0 Bytes".to_string();
    }

    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < BYTE_UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }

    format!("{} {}", trim_decimals(value, 2), BYTE_UNITS[unit])
}

/// Round to `decimals` places and strip trailing zeros ("1.50" -> "1.5").
pub fn trim_decimals(value: f64, decimals: usize) -> String {
    let fixed = format!("{:.*}", decimals, value);
    if fixed.contains('.') {
        fixed.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        fixed
    }
}

/// Format a CPU usage percentage for display (e.g. "12.34 %").
pub fn format_percent(value: f64) -> String {
    format!("{:.2} %", value)
}

/// Wrap IPv6 addresses in brackets so a port can follow them.
pub fn ip(value: &str) -> String {
    if value.contains(':') {
        format!("[{}]", value)
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bytes_to_string() {
        assert_eq!(bytes_to_string(0), "0 Bytes");
        assert_eq!(bytes_to_string(512), "512 Bytes");
        assert_eq!(bytes_to_string(1024), "1 KiB");
        assert_eq!(bytes_to_string(1536), "1.5 KiB");
        assert_eq!(bytes_to_string(mb_to_bytes(1024)), "1 GiB");
        assert_eq!(bytes_to_string(mb_to_bytes(2560)), "2.5 GiB");
    }

    #[test]
    fn test_bytes_to_string_caps_at_tib() {
        assert_eq!(bytes_to_string(mb_to_bytes(1024 * 1024 * 2048)), "2048 TiB");
    }

    #[test]
    fn test_trim_decimals() {
        assert_eq!(trim_decimals(1.0, 2), "1");
        assert_eq!(trim_decimals(1.256, 2), "1.26");
        assert_eq!(trim_decimals(10.25, 0), "10");
    }

    #[test]
    fn test_ip() {
        assert_eq!(ip("192.168.1.1"), "192.168.1.1");
        assert_eq!(ip("2001:db8::1"), "[2001:db8::1]");
    }

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(12.3456), "12.35 %");
    }
}
