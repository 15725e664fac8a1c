use super::{label, usage, DiskUsage, MemoryInfo, MetricsProvider, PartitionInfo, RawIoCounters};
use crate::error::ProbeError;
use crate::models::volume::DeviceKey;
use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};
use sysinfo::System;

/// `MetricsProvider` backed by the running host.
///
/// Linux reads the mount table and diskstats straight from /proc; other
/// platforms go through sysinfo's disk list, which carries no busy-time
/// counter (utilisation then reads 0).
pub struct HostProvider {
    system: System,
}

impl HostProvider {
    pub fn new() -> Self {
        let mut system = System::new();
        // Baseline so the first cpu_percent() call has something to diff against
        system.refresh_cpu_usage();
        system.refresh_memory();
        Self { system }
    }
}

impl Default for HostProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl MetricsProvider for HostProvider {
    fn cpu_percent(&mut self) -> f64 {
        self.system.refresh_cpu_usage();
        self.system.global_cpu_usage() as f64
    }

    fn memory_stats(&mut self) -> MemoryInfo {
        self.system.refresh_memory();
        MemoryInfo {
            total:     self.system.total_memory(),
            used:      self.system.used_memory(),
            available: self.system.available_memory(),
        }
    }

    #[cfg(target_os = "linux")]
    fn list_partitions(&self) -> Vec<PartitionInfo> {
        match super::mounts::read_partitions() {
            Ok(parts) => parts,
            Err(e) => {
                log::warn!("cannot read mount table: {}", e);
                Vec::new()
            }
        }
    }

    #[cfg(not(target_os = "linux"))]
    fn list_partitions(&self) -> Vec<PartitionInfo> {
        let disks = sysinfo::Disks::new_with_refreshed_list();
        disks
            .list()
            .iter()
            .map(|d| {
                let mount = d.mount_point().to_string_lossy().into_owned();
                let device = if cfg!(windows) {
                    mount.clone()
                } else {
                    d.name().to_string_lossy().into_owned()
                };
                PartitionInfo {
                    device,
                    mountpoint: mount,
                    fs_type:    d.file_system().to_string_lossy().into_owned(),
                    opts:       if d.is_removable() { "removable".into() } else { "fixed".into() },
                }
            })
            .collect()
    }

    #[cfg(unix)]
    fn disk_usage(&self, mountpoint: &str) -> Result<DiskUsage, ProbeError> {
        usage::statvfs_usage(mountpoint)
    }

    #[cfg(not(unix))]
    fn disk_usage(&self, mountpoint: &str) -> Result<DiskUsage, ProbeError> {
        let disks = sysinfo::Disks::new_with_refreshed_list();
        usage::sysinfo_usage(&disks, mountpoint)
    }

    #[cfg(target_os = "linux")]
    fn disk_io_counters(&mut self) -> Result<HashMap<DeviceKey, RawIoCounters>, ProbeError> {
        super::diskstats::read_diskstats().map_err(|e| ProbeError::other(e.to_string()))
    }

    #[cfg(not(target_os = "linux"))]
    fn disk_io_counters(&mut self) -> Result<HashMap<DeviceKey, RawIoCounters>, ProbeError> {
        let disks = sysinfo::Disks::new_with_refreshed_list();
        let mut map = HashMap::new();
        for d in disks.list() {
            let raw = if cfg!(windows) {
                d.mount_point().to_string_lossy().into_owned()
            } else {
                d.name().to_string_lossy().into_owned()
            };
            let name = raw.rsplit('/').next().unwrap_or(&raw).to_string();
            let u = d.usage();
            map.insert(DeviceKey::new(&name), RawIoCounters {
                read_bytes:  u.total_read_bytes,
                write_bytes: u.total_written_bytes,
                busy_ms:     0,
            });
        }
        Ok(map)
    }

    fn volume_label(&self, mountpoint: &str) -> Option<String> {
        label::volume_label(mountpoint)
    }

    fn resolve_symlink(&self, path: &Path) -> io::Result<PathBuf> {
        std::fs::canonicalize(path)
    }
}
