use super::PartitionInfo;
use anyhow::Result;
use std::collections::HashSet;

/// Pseudo filesystems to skip when /proc/filesystems can't be read.
const SKIP_FS: &[&str] = &[
    "proc", "sysfs", "devpts", "tmpfs", "devtmpfs", "cgroup", "cgroup2",
    "pstore", "efivarfs", "securityfs", "debugfs", "tracefs", "bpf",
    "hugetlbfs", "mqueue", "fusectl", "configfs", "binfmt_misc",
    "overlay", "nsfs", "rpc_pipefs", "autofs", "ramfs",
];

/// Physical (block-backed) partitions from /proc/mounts, in mount-table order.
pub fn read_partitions() -> Result<Vec<PartitionInfo>> {
    let content = std::fs::read_to_string("/proc/mounts")?;
    let physical = std::fs::read_to_string("/proc/filesystems")
        .ok()
        .map(|s| physical_filesystems(&s));
    Ok(parse_mounts(&content, physical.as_ref()))
}

/// Filesystem types without the `nodev` marker in /proc/filesystems.
pub fn physical_filesystems(content: &str) -> HashSet<String> {
    content
        .lines()
        .filter(|l| !l.starts_with("nodev"))
        .map(|l| l.trim().to_string())
        .filter(|l| !l.is_empty())
        .collect()
}

pub fn parse_mounts(content: &str, physical: Option<&HashSet<String>>) -> Vec<PartitionInfo> {
    let mut v = Vec::new();
    for line in content.lines() {
        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.len() < 4 { continue; }

        let fs_type = fields[2];
        let keep = match physical {
            // zfs registers as nodev but is block-backed
            Some(set) => set.contains(fs_type) || fs_type == "zfs",
            None      => !SKIP_FS.contains(&fs_type),
        };
        if !keep { continue; }

        v.push(PartitionInfo {
            device:     unescape(fields[0]),
            mountpoint: unescape(fields[1]),
            fs_type:    fs_type.to_string(),
            opts:       fields[3].to_string(),
        });
    }
    v
}

/// Decode the octal escapes the kernel uses for whitespace in mount fields (`\040`).
fn unescape(field: &str) -> String {
    if !field.contains('\\') {
        return field.to_string();
    }
    let bytes = field.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'\\' && i + 4 <= bytes.len() {
            let digits = &bytes[i + 1..i + 4];
            if digits.iter().all(|d| (b'0'..=b'7').contains(d)) {
                let v = digits.iter().fold(0u32, |acc, d| acc * 8 + u32::from(d - b'0'));
                out.push(v as u8);
                i += 4;
                continue;
            }
        }
        out.push(bytes[i]);
        i += 1;
    }
    String::from_utf8_lossy(&out).into_owned()
}
