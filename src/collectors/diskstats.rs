use super::RawIoCounters;
use crate::models::volume::DeviceKey;
use anyhow::Result;
use std::collections::HashMap;

/// The kernel always reports diskstats sectors in 512-byte units.
const SECTOR_SIZE: u64 = 512;

/// Read /proc/diskstats and return a map of device key → cumulative counters.
///
/// Partitions are kept: a volume mounted from `sda1` is correlated against the
/// `sda1` line, not the whole disk.
pub fn read_diskstats() -> Result<HashMap<DeviceKey, RawIoCounters>> {
    let content = std::fs::read_to_string("/proc/diskstats")?;
    Ok(parse_diskstats(&content))
}

pub fn parse_diskstats(content: &str) -> HashMap<DeviceKey, RawIoCounters> {
    let mut map = HashMap::new();

    for line in content.lines() {
        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.len() < 14 { continue; }

        let name = fields[2];
        if name.starts_with("loop") || name.starts_with("ram") {
            continue;
        }

        let entry = RawIoCounters {
            read_bytes:  parse(fields[5]).saturating_mul(SECTOR_SIZE),
            write_bytes: parse(fields[9]).saturating_mul(SECTOR_SIZE),
            busy_ms:     parse(fields[12]),   // "time spent doing I/Os"
        };
        map.insert(DeviceKey::new(name), entry);
    }
    map
}

fn parse(s: &str) -> u64 {
    s.parse().unwrap_or(0)
}
