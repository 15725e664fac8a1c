use super::DiskUsage;
use crate::error::ProbeError;

/// Space figures for the filesystem mounted at `mount`.
///
/// `free` is what an unprivileged user can still allocate; `used` counts
/// every allocated block. The reserved root blocks are in neither.
#[cfg(unix)]
pub fn statvfs_usage(mount: &str) -> Result<DiskUsage, ProbeError> {
    use nix::sys::statvfs::statvfs;
    let stat = statvfs(mount)?;

    let frsize = stat.fragment_size() as u64;
    let total  = stat.blocks()           as u64 * frsize;
    let free   = stat.blocks_available() as u64 * frsize;
    let used   = (stat.blocks() as u64).saturating_sub(stat.blocks_free() as u64) * frsize;

    Ok(DiskUsage { total, used, free })
}

/// Usage for a mount point from a sysinfo disk list.
#[cfg(not(unix))]
pub fn sysinfo_usage(disks: &sysinfo::Disks, mount: &str) -> Result<DiskUsage, ProbeError> {
    let disk = disks
        .list()
        .iter()
        .find(|d| d.mount_point().to_string_lossy() == mount)
        .ok_or_else(|| ProbeError::NotFound(mount.to_string()))?;

    let total = disk.total_space();
    let free  = disk.available_space();
    Ok(DiskUsage { total, used: total.saturating_sub(free), free })
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    #[test]
    fn test_statvfs_usage_on_tempdir() {
        let dir = tempfile::tempdir().unwrap();
        let usage = statvfs_usage(dir.path().to_str().unwrap()).unwrap();
        assert!(usage.total > 0);
        assert!(usage.free <= usage.total);
        assert!(usage.used <= usage.total);
    }

    #[test]
    fn test_statvfs_missing_path_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("does-not-exist");
        let err = statvfs_usage(missing.to_str().unwrap()).unwrap_err();
        assert!(matches!(err, ProbeError::NotFound(_)));
    }
}
