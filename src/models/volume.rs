use serde::Serialize;
use std::collections::BTreeSet;
use std::fmt;

/// Stable identity used to correlate I/O counters tick-to-tick.
///
/// Every key, whether derived from a volume's device path or read from the
/// provider's counter map, goes through [`DeviceKey::new`]: trailing path
/// separators are trimmed and the text is ASCII-lowercased. `sda1`, `dm-2`
/// and `c:` are typical results.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct DeviceKey(String);

impl DeviceKey {
    pub fn new(raw: &str) -> Self {
        let trimmed = raw.trim().trim_end_matches(&['/', '\\'][..]);
        Self(trimmed.to_ascii_lowercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DeviceKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One trackable storage volume. Built once during enumeration.
#[derive(Debug, Clone, PartialEq)]
pub struct VolumeDescriptor {
    pub device:       String,
    pub mountpoint:   String,
    pub fs_type:      String,
    pub opts:         BTreeSet<String>,
    pub key:          DeviceKey,
    pub display_name: String,
}

/// Split a comma-separated mount option string into a set.
pub fn parse_opts(opts: &str) -> BTreeSet<String> {
    opts.split(',')
        .map(str::trim)
        .filter(|o| !o.is_empty())
        .map(str::to_string)
        .collect()
}
