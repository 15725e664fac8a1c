use super::identity::{resolve_identity, Platform};
use crate::collectors::{MetricsProvider, PartitionInfo};
use crate::models::volume::{parse_opts, VolumeDescriptor};
use std::collections::HashSet;

/// Directories Windows keeps on every drive for its own bookkeeping.
const RESERVED_DIRS: &[&str] = &["system volume information", "$recycle.bin"];

/// Build the fixed list of volumes to track, in partition-listing order.
///
/// Runs once at startup. Anything excluded here (pseudo filesystems, optical
/// or removable media, reserved volumes, volumes whose usage can't be read)
/// is never looked at again.
pub fn enumerate_volumes<P: MetricsProvider + ?Sized>(
    provider: &P,
    platform: Platform,
) -> Vec<VolumeDescriptor> {
    let mut out: Vec<VolumeDescriptor> = Vec::new();
    let mut seen = HashSet::new();

    for part in provider.list_partitions() {
        if let Some(reason) = exclusion(&part, platform) {
            log::debug!("skipping {} on {}: {}", part.device, part.mountpoint, reason);
            continue;
        }
        if let Err(e) = provider.disk_usage(&part.mountpoint) {
            log::debug!("skipping {}: usage probe failed: {}", part.mountpoint, e);
            continue;
        }

        let id = resolve_identity(provider, platform, &part.device, &part.mountpoint);
        if !seen.insert(id.key.clone()) {
            log::debug!("skipping {}: {} is already tracked", part.mountpoint, id.key);
            continue;
        }

        out.push(VolumeDescriptor {
            device:       part.device,
            mountpoint:   part.mountpoint,
            fs_type:      part.fs_type,
            opts:         parse_opts(&part.opts),
            key:          id.key,
            display_name: id.display_name,
        });
    }
    out
}

/// Static filter rules; `Some(reason)` means the partition is excluded.
fn exclusion(part: &PartitionInfo, platform: Platform) -> Option<&'static str> {
    if part.fs_type.trim().is_empty() {
        return Some("no filesystem type");
    }
    let opts = parse_opts(&part.opts);
    if opts.contains("cdrom") {
        return Some("optical media");
    }
    if platform == Platform::DriveLetter {
        if opts.contains("removable") {
            return Some("removable media");
        }
        let mount = part.mountpoint.to_ascii_lowercase();
        if RESERVED_DIRS.iter().any(|d| mount.contains(d)) {
            return Some("reserved system volume");
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collectors::{DiskUsage, MemoryInfo, RawIoCounters};
    use crate::error::ProbeError;
    use crate::models::volume::DeviceKey;
    use std::collections::HashMap;
    use std::io;
    use std::path::{Path, PathBuf};

    #[derive(Default)]
    struct ListProvider {
        parts:  Vec<PartitionInfo>,
        denied: Vec<String>,
        links:  HashMap<String, String>,
    }

    impl ListProvider {
        fn part(mut self, device: &str, mount: &str, fs: &str, opts: &str) -> Self {
            self.parts.push(PartitionInfo {
                device:     device.into(),
                mountpoint: mount.into(),
                fs_type:    fs.into(),
                opts:       opts.into(),
            });
            self
        }
    }

    impl MetricsProvider for ListProvider {
        fn cpu_percent(&mut self) -> f64 { 0.0 }
        fn memory_stats(&mut self) -> MemoryInfo { MemoryInfo::default() }
        fn list_partitions(&self) -> Vec<PartitionInfo> { self.parts.clone() }
        fn disk_usage(&self, m: &str) -> Result<DiskUsage, ProbeError> {
            if self.denied.iter().any(|d| d == m) {
                return Err(ProbeError::PermissionDenied(m.to_string()));
            }
            Ok(DiskUsage { total: 100, used: 40, free: 60 })
        }
        fn disk_io_counters(&mut self) -> Result<HashMap<DeviceKey, RawIoCounters>, ProbeError> {
            Ok(HashMap::new())
        }
        fn volume_label(&self, _m: &str) -> Option<String> { None }
        fn resolve_symlink(&self, path: &Path) -> io::Result<PathBuf> {
            self.links
                .get(path.to_str().unwrap_or(""))
                .map(PathBuf::from)
                .ok_or_else(|| io::Error::from(io::ErrorKind::NotFound))
        }
    }

    fn mounts(v: &[VolumeDescriptor]) -> Vec<&str> {
        v.iter().map(|d| d.mountpoint.as_str()).collect()
    }

    #[test]
    fn test_empty_fstype_is_excluded() {
        let p = ListProvider::default()
            .part("/dev/sda1", "/", "ext4", "rw")
            .part("/dev/sdb", "/mnt/raw", "", "rw");
        let vols = enumerate_volumes(&p, Platform::Unix);
        assert_eq!(mounts(&vols), vec!["/"]);
    }

    #[test]
    fn test_permission_denied_probe_is_excluded() {
        let mut p = ListProvider::default()
            .part("/dev/sda1", "/", "ext4", "rw")
            .part("/dev/sdc1", "/secret", "xfs", "rw");
        p.denied.push("/secret".into());
        let vols = enumerate_volumes(&p, Platform::Unix);
        assert_eq!(mounts(&vols), vec!["/"]);
    }

    #[test]
    fn test_cdrom_excluded_everywhere_removable_only_on_drive_letters() {
        let unix = ListProvider::default()
            .part("/dev/sr0", "/media/cd", "iso9660", "ro,cdrom")
            .part("/dev/sdb1", "/media/usb", "vfat", "rw,removable");
        assert_eq!(mounts(&enumerate_volumes(&unix, Platform::Unix)), vec!["/media/usb"]);

        let win = ListProvider::default()
            .part("C:\\", "C:\\", "NTFS", "rw,fixed")
            .part("D:\\", "D:\\", "CDFS", "cdrom")
            .part("E:\\", "E:\\", "FAT32", "rw,removable");
        assert_eq!(mounts(&enumerate_volumes(&win, Platform::DriveLetter)), vec!["C:\\"]);
    }

    #[test]
    fn test_reserved_system_volume_excluded() {
        let win = ListProvider::default()
            .part("C:\\", "C:\\", "NTFS", "rw,fixed")
            .part("\\\\?\\Volume{1}", "C:\\System Volume Information\\x", "NTFS", "rw,fixed");
        assert_eq!(mounts(&enumerate_volumes(&win, Platform::DriveLetter)), vec!["C:\\"]);
    }

    #[test]
    fn test_order_preserved_and_keys_resolved() {
        let mut p = ListProvider::default()
            .part("/dev/mapper/vg0-root", "/", "ext4", "rw,relatime")
            .part("/dev/nvme0n1p1", "/boot/efi", "vfat", "rw")
            .part("/dev/sda1", "/data", "xfs", "rw");
        p.links.insert("/dev/mapper/vg0-root".into(), "/dev/dm-0".into());

        let vols = enumerate_volumes(&p, Platform::Unix);
        assert_eq!(mounts(&vols), vec!["/", "/boot/efi", "/data"]);
        assert_eq!(vols[0].key.as_str(), "dm-0");
        assert_eq!(vols[0].display_name, "vg0-root");
        assert!(vols[0].opts.contains("relatime"));
        assert_eq!(vols[1].key.as_str(), "nvme0n1p1");
    }

    #[test]
    fn test_duplicate_device_keeps_first_mount() {
        let p = ListProvider::default()
            .part("/dev/sda2", "/", "btrfs", "rw,subvol=/@")
            .part("/dev/sda2", "/home", "btrfs", "rw,subvol=/@home");
        let vols = enumerate_volumes(&p, Platform::Unix);
        assert_eq!(mounts(&vols), vec!["/"]);
    }
}
