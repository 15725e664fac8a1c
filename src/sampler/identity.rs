use crate::collectors::{label::non_blank, MetricsProvider};
use crate::models::volume::DeviceKey;
use std::path::Path;

/// How the host names its volumes. Drive-letter hosts index I/O counters by
/// the drive itself; everything else uses kernel block-device names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Unix,
    DriveLetter,
}

impl Platform {
    pub fn current() -> Self {
        if cfg!(windows) { Platform::DriveLetter } else { Platform::Unix }
    }
}

/// Stable counter key and display name for one volume.
#[derive(Debug, Clone, PartialEq)]
pub struct Identity {
    pub key:          DeviceKey,
    pub display_name: String,
}

/// Resolve the I/O-counter key and display name for `device` mounted at
/// `mountpoint`. Never fails: every lookup error falls back to naming by path.
pub fn resolve_identity<P: MetricsProvider + ?Sized>(
    provider:   &P,
    platform:   Platform,
    device:     &str,
    mountpoint: &str,
) -> Identity {
    match platform {
        Platform::DriveLetter => {
            let display_name = provider
                .volume_label(mountpoint)
                .and_then(non_blank)
                .unwrap_or_else(|| mountpoint.to_string());
            Identity { key: DeviceKey::new(device), display_name }
        }
        Platform::Unix => {
            let fallback = last_segment(device);
            let key = if is_device_mapper_alias(device) {
                match provider.resolve_symlink(Path::new(device)) {
                    Ok(target) => {
                        let resolved = last_segment(&target.to_string_lossy()).to_string();
                        if resolved.is_empty() { fallback.to_string() } else { resolved }
                    }
                    Err(e) => {
                        log::debug!("cannot resolve {}: {}; keying by {}", device, e, fallback);
                        fallback.to_string()
                    }
                }
            } else {
                fallback.to_string()
            };
            Identity { key: DeviceKey::new(&key), display_name: fallback.to_string() }
        }
    }
}

/// `/dev/mapper/<name>` or an LVM-style `/dev/<vg>/<lv>` path.
pub fn is_device_mapper_alias(device: &str) -> bool {
    if device.starts_with("/dev/mapper/") {
        return true;
    }
    match device.strip_prefix("/dev/") {
        Some(rest) => {
            let parts: Vec<&str> = rest.split('/').collect();
            parts.len() == 2
                && parts.iter().all(|p| !p.is_empty())
                && !matches!(parts[0], "disk" | "block" | "md" | "mapper")
        }
        None => false,
    }
}

/// Final path segment; the input itself if there is no separator.
fn last_segment(path: &str) -> &str {
    let trimmed = path.trim_end_matches('/');
    trimmed.rsplit('/').next().unwrap_or(trimmed)
}
