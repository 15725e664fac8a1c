use super::enumerate::enumerate_volumes;
use super::identity::Platform;
use super::rate::RateSampler;
use crate::collectors::MetricsProvider;
use crate::models::snapshot::{
    clamp_pct, IoCounterSample, MemoryStats, MetricSnapshot, VolumeResult, VolumeUsage,
};
use crate::models::volume::VolumeDescriptor;
use std::collections::HashMap;
use std::time::Instant;

/// Owns the tracked volume list and the rate state; produces one
/// `MetricSnapshot` per call. Ticks must be fed strictly in order.
#[derive(Debug)]
pub struct Sampler {
    volumes: Vec<VolumeDescriptor>,
    rates:   RateSampler,
}

impl Sampler {
    /// Enumerate volumes once. The list is fixed for the sampler's lifetime.
    pub fn new<P: MetricsProvider + ?Sized>(provider: &P, platform: Platform) -> Self {
        let volumes = enumerate_volumes(provider, platform);
        log::info!("tracking {} volume(s)", volumes.len());
        for v in &volumes {
            let opts: Vec<&str> = v.opts.iter().map(String::as_str).collect();
            log::debug!("  {} on {} ({}, {}) key={}", v.device, v.mountpoint, v.fs_type, opts.join(","), v.key.as_str());
        }
        Self { volumes, rates: RateSampler::new() }
    }

    #[cfg(test)]
    pub fn volumes(&self) -> &[VolumeDescriptor] {
        &self.volumes
    }

    /// Run one tick now. Returns the snapshot and the time to pass in as
    /// `previous_tick` next time.
    pub fn sample_tick<P: MetricsProvider + ?Sized>(
        &mut self,
        provider: &mut P,
        previous_tick: Option<Instant>,
    ) -> (MetricSnapshot, Instant) {
        self.sample_tick_at(provider, previous_tick, Instant::now())
    }

    /// Run one tick as if the clock read `now`.
    pub fn sample_tick_at<P: MetricsProvider + ?Sized>(
        &mut self,
        provider: &mut P,
        previous_tick: Option<Instant>,
        now: Instant,
    ) -> (MetricSnapshot, Instant) {
        let cpu_pct = clamp_pct(provider.cpu_percent());

        let mem = provider.memory_stats();
        let memory = MemoryStats::new(mem.total, mem.used, mem.available);

        let usages: Vec<Option<VolumeUsage>> = self
            .volumes
            .iter()
            .map(|vol| match provider.disk_usage(&vol.mountpoint) {
                Ok(u) => Some(VolumeUsage::new(u.total, u.used, u.free)),
                Err(e) => {
                    log::warn!("usage for {} unavailable this tick: {}", vol.mountpoint, e);
                    None
                }
            })
            .collect();

        // One bulk read per tick, shared by every volume
        let counters = match provider.disk_io_counters() {
            Ok(c) => c,
            Err(e) => {
                log::warn!("disk I/O counters unavailable this tick: {}", e);
                HashMap::new()
            }
        };

        let elapsed = previous_tick
            .map(|t| now.saturating_duration_since(t).as_secs_f64())
            .unwrap_or(0.0);

        let mut volumes = Vec::with_capacity(self.volumes.len());
        for (vol, usage) in self.volumes.iter().zip(usages) {
            let current = counters.get(&vol.key).map(|c| IoCounterSample {
                key:         vol.key.clone(),
                read_bytes:  c.read_bytes,
                write_bytes: c.write_bytes,
                busy_ms:     c.busy_ms,
                taken_at:    now,
            });
            let io = self.rates.update(&vol.key, current, elapsed);

            volumes.push(VolumeResult {
                device:       vol.device.clone(),
                mountpoint:   vol.mountpoint.clone(),
                display_name: vol.display_name.clone(),
                key:          vol.key.clone(),
                usage,
                io,
            });
        }

        let snapshot = MetricSnapshot {
            cpu_pct,
            memory,
            volumes,
            taken_at: chrono::Local::now(),
        };
        (snapshot, now)
    }
}
