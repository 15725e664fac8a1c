const GIB: f64 = 1_073_741_824.0;

/// Format bytes/s into a human-readable string: "12.5 MB/s"
pub fn fmt_rate(bytes_per_sec: f64) -> String {
    fmt_bytes_f(bytes_per_sec) + "/s"
}

/// Always in gigabytes with one decimal: "15.6GB". Used by the bar labels so
/// columns line up.
pub fn fmt_gb(bytes: u64) -> String {
    format!("{:.1}GB", bytes as f64 / GIB)
}

fn fmt_bytes_f(b: f64) -> String {
    const TB: f64 = 1_099_511_627_776.0;
    const MB: f64 = 1_048_576.0;
    const KB: f64 = 1_024.0;
    if b >= TB       { format!("{:.1} TB", b / TB) }
    else if b >= GIB { format!("{:.1} GB", b / GIB) }
    else if b >= MB  { format!("{:.1} MB", b / MB) }
    else if b >= KB  { format!("{:.1} KB", b / KB) }
    else             { format!("{:.0} B",  b) }
}

/// Percentage with two decimals: "84.52%"
pub fn fmt_pct(pct: f64) -> String {
    format!("{:.2}%", pct)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fmt_rate_units() {
        assert_eq!(fmt_rate(512.0), "512 B/s");
        assert_eq!(fmt_rate(1536.0), "1.5 KB/s");
        assert_eq!(fmt_rate(5.0 * 1_048_576.0), "5.0 MB/s");
        assert_eq!(fmt_rate(2_147_483_648.0), "2.0 GB/s");
    }

    #[test]
    fn test_fmt_gb_and_pct() {
        assert_eq!(fmt_gb(16 * 1_073_741_824), "16.0GB");
        assert_eq!(fmt_gb(0), "0.0GB");
        assert_eq!(fmt_pct(7.5), "7.50%");
        assert_eq!(fmt_pct(99.999), "100.00%");
    }
}
