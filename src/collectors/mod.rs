pub mod diskstats;
pub mod host;
pub mod label;
pub mod mounts;
pub mod usage;

use crate::error::ProbeError;
use crate::models::volume::DeviceKey;
use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};

pub use host::HostProvider;

/// One entry of the platform's partition listing.
#[derive(Debug, Clone, PartialEq)]
pub struct PartitionInfo {
    pub device:     String,
    pub mountpoint: String,
    pub fs_type:    String,
    /// Comma-separated mount options, as the platform reports them.
    pub opts:       String,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MemoryInfo {
    pub total:     u64,
    pub used:      u64,
    pub available: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DiskUsage {
    pub total: u64,
    pub used:  u64,
    pub free:  u64,
}

/// Cumulative I/O counters for one device, as read from the platform.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RawIoCounters {
    pub read_bytes:  u64,
    pub write_bytes: u64,
    pub busy_ms:     u64,
}

/// Source of raw host metrics. The sampling core only ever talks to this
/// trait, so it can be driven by fakes in tests.
pub trait MetricsProvider {
    /// Whole-system CPU utilisation since the previous call, 0–100.
    fn cpu_percent(&mut self) -> f64;

    fn memory_stats(&mut self) -> MemoryInfo;

    fn list_partitions(&self) -> Vec<PartitionInfo>;

    fn disk_usage(&self, mountpoint: &str) -> Result<DiskUsage, ProbeError>;

    /// All per-device cumulative counters, keyed by normalized device key.
    fn disk_io_counters(&mut self) -> Result<HashMap<DeviceKey, RawIoCounters>, ProbeError>;

    /// Volume label for a mount point. Only drive-letter platforms have one.
    fn volume_label(&self, mountpoint: &str) -> Option<String>;

    fn resolve_symlink(&self, path: &Path) -> io::Result<PathBuf>;
}
