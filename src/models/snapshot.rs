use crate::models::volume::DeviceKey;
use chrono::{DateTime, Local};
use serde::Serialize;
use std::time::Instant;

/// One cumulative I/O counter reading for a device key.
#[derive(Debug, Clone, PartialEq)]
pub struct IoCounterSample {
    pub key:         DeviceKey,
    pub read_bytes:  u64,
    pub write_bytes: u64,
    pub busy_ms:     u64,
    pub taken_at:    Instant,
}

/// Windowed I/O rates for one device over one tick.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct IoRate {
    pub read_bytes_per_sec:  f64,
    pub write_bytes_per_sec: f64,
    pub util_pct:            f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct MemoryStats {
    pub total_bytes:     u64,
    pub used_bytes:      u64,
    pub available_bytes: u64,
    pub used_pct:        f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct VolumeUsage {
    pub total_bytes: u64,
    pub used_bytes:  u64,
    pub free_bytes:  u64,
    pub used_pct:    f64,
    pub free_pct:    f64,
}

/// Per-volume result within one tick. `usage` and `io` are independently
/// optional: a failed usage query does not suppress the I/O rate and vice versa.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VolumeResult {
    pub device:       String,
    pub mountpoint:   String,
    pub display_name: String,
    pub key:          DeviceKey,
    pub usage:        Option<VolumeUsage>,
    pub io:           Option<IoRate>,
}

/// Everything one sampling tick produced.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricSnapshot {
    pub cpu_pct:  f64,
    pub memory:   MemoryStats,
    pub volumes:  Vec<VolumeResult>,
    pub taken_at: DateTime<Local>,
}

/// Clamp a percentage into [0, 100]. NaN becomes 0.
pub fn clamp_pct(pct: f64) -> f64 {
    if pct.is_nan() { return 0.0; }
    pct.clamp(0.0, 100.0)
}

/// `part / whole` as a clamped percentage; 0 when `whole` is 0.
pub fn ratio_pct(part: u64, whole: u64) -> f64 {
    if whole == 0 { return 0.0; }
    clamp_pct(part as f64 / whole as f64 * 100.0)
}

impl MemoryStats {
    /// Used percentage follows the "not available" convention: memory that is
    /// merely cached still counts as available.
    pub fn new(total_bytes: u64, used_bytes: u64, available_bytes: u64) -> Self {
        Self {
            total_bytes,
            used_bytes,
            available_bytes,
            used_pct: ratio_pct(total_bytes.saturating_sub(available_bytes), total_bytes),
        }
    }
}

impl VolumeUsage {
    pub fn new(total_bytes: u64, used_bytes: u64, free_bytes: u64) -> Self {
        Self {
            total_bytes,
            used_bytes,
            free_bytes,
            used_pct: ratio_pct(used_bytes, total_bytes),
            free_pct: ratio_pct(free_bytes, total_bytes),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_pct() {
        assert_eq!(clamp_pct(-3.0), 0.0);
        assert_eq!(clamp_pct(42.5), 42.5);
        assert_eq!(clamp_pct(180.0), 100.0);
        assert_eq!(clamp_pct(f64::NAN), 0.0);
    }

    #[test]
    fn test_memory_percent_uses_available() {
        let mem = MemoryStats::new(1000, 300, 600);
        assert!((mem.used_pct - 40.0).abs() < 1e-9);
        assert_eq!(MemoryStats::new(0, 0, 0).used_pct, 0.0);
    }

    #[test]
    fn test_volume_usage_percentages() {
        let u = VolumeUsage::new(200, 150, 40);
        assert!((u.used_pct - 75.0).abs() < 1e-9);
        assert!((u.free_pct - 20.0).abs() < 1e-9);
        assert_eq!(VolumeUsage::new(0, 0, 0).used_pct, 0.0);
    }
}
