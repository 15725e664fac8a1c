use crate::models::snapshot::{IoRate, MemoryStats, MetricSnapshot, VolumeResult};
use crate::util::color::color_for;
use crate::util::human::{fmt_gb, fmt_pct, fmt_rate};
use std::fmt::Write;

// ── Label text shared by the TUI bars and the plain-text report ────────

pub fn cpu_label(cpu_pct: f64) -> String {
    format!("CPU Usage: {}", fmt_pct(cpu_pct))
}

pub fn ram_label(mem: &MemoryStats) -> String {
    format!(
        "RAM Usage: {} | Total: {}, Used: {}, Available: {}",
        fmt_pct(mem.used_pct),
        fmt_gb(mem.total_bytes),
        fmt_gb(mem.used_bytes),
        fmt_gb(mem.available_bytes),
    )
}

pub fn volume_label(vol: &VolumeResult) -> String {
    match &vol.usage {
        Some(u) => format!(
            "{} ({}) - Used: {}, Free: {} | Total: {}, Free: {}",
            vol.display_name,
            vol.mountpoint,
            fmt_pct(u.used_pct),
            fmt_pct(u.free_pct),
            fmt_gb(u.total_bytes),
            fmt_gb(u.free_bytes),
        ),
        None => format!("{} ({}) - unavailable", vol.display_name, vol.mountpoint),
    }
}

pub fn io_label(io: Option<&IoRate>) -> String {
    match io {
        Some(io) => format!(
            "R: {}  W: {}  busy {:.0}%",
            fmt_rate(io.read_bytes_per_sec),
            fmt_rate(io.write_bytes_per_sec),
            io.util_pct,
        ),
        None => "R: -  W: -  busy -".to_string(),
    }
}

/// Plain-text rendering of one snapshot, each line tagged with its bar color.
pub fn generate(snap: &MetricSnapshot, show_io: bool) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "resmon snapshot  {}", snap.taken_at.format("%Y-%m-%d %H:%M:%S"));
    let _ = writeln!(out);
    let _ = writeln!(out, "[{}] {}", color_for(snap.cpu_pct).to_hex(), cpu_label(snap.cpu_pct));
    let _ = writeln!(out, "[{}] {}", color_for(snap.memory.used_pct).to_hex(), ram_label(&snap.memory));

    for vol in &snap.volumes {
        let tag = vol
            .usage
            .map(|u| color_for(u.used_pct).to_hex())
            .unwrap_or_else(|| "-------".to_string());
        let _ = writeln!(out, "[{}] {}", tag, volume_label(vol));
        if show_io {
            let _ = writeln!(out, "          {}", io_label(vol.io.as_ref()));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::snapshot::VolumeUsage;
    use crate::models::volume::DeviceKey;

    const GIB: u64 = 1 << 30;

    fn volume(usage: Option<VolumeUsage>, io: Option<IoRate>) -> VolumeResult {
        VolumeResult {
            device:       "/dev/sda1".into(),
            mountpoint:   "/".into(),
            display_name: "sda1".into(),
            key:          DeviceKey::new("sda1"),
            usage,
            io,
        }
    }

    #[test]
    fn test_volume_label_format() {
        let v = volume(Some(VolumeUsage::new(100 * GIB, 25 * GIB, 75 * GIB)), None);
        assert_eq!(
            volume_label(&v),
            "sda1 (/) - Used: 25.00%, Free: 75.00% | Total: 100.0GB, Free: 75.0GB"
        );
        assert_eq!(volume_label(&volume(None, None)), "sda1 (/) - unavailable");
    }

    #[test]
    fn test_ram_label_format() {
        let mem = MemoryStats::new(16 * GIB, 6 * GIB, 8 * GIB);
        assert_eq!(
            ram_label(&mem),
            "RAM Usage: 50.00% | Total: 16.0GB, Used: 6.0GB, Available: 8.0GB"
        );
    }

    #[test]
    fn test_generate_tags_lines_with_colors() {
        let snap = MetricSnapshot {
            cpu_pct:  100.0,
            memory:   MemoryStats::new(16 * GIB, 6 * GIB, 8 * GIB),
            volumes:  vec![
                volume(Some(VolumeUsage::new(100 * GIB, 25 * GIB, 75 * GIB)), None),
                volume(None, Some(IoRate { read_bytes_per_sec: 2048.0, write_bytes_per_sec: 0.0, util_pct: 3.0 })),
            ],
            taken_at: chrono::Local::now(),
        };
        let text = generate(&snap, true);
        assert!(text.contains("[#ff0000] CPU Usage: 100.00%"));
        assert!(text.contains("[-------] sda1 (/) - unavailable"));
        assert!(text.contains("R: 2.0 KB/s  W: 0 B/s  busy 3%"));
        assert!(!generate(&snap, false).contains("busy"));
    }
}
