use crate::models::snapshot::{clamp_pct, IoCounterSample, IoRate};
use crate::models::volume::DeviceKey;
use std::collections::HashMap;

/// Turns cumulative I/O counters into per-tick rates.
///
/// Holds exactly one "last sample" per device key. Elapsed time is supplied
/// by the caller; nothing in here reads a clock.
#[derive(Debug, Default)]
pub struct RateSampler {
    last: HashMap<DeviceKey, IoCounterSample>,
}

impl RateSampler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed the current reading for `key` and get the rate since the previous one.
    ///
    /// Returns `None` when there is no usable baseline: first observation,
    /// a counter that went backwards (reset or a different device behind the
    /// same key), or a non-positive window. A missing reading forgets the
    /// baseline so a later reappearance starts fresh.
    pub fn update(
        &mut self,
        key: &DeviceKey,
        current: Option<IoCounterSample>,
        elapsed_secs: f64,
    ) -> Option<IoRate> {
        let current = match current {
            Some(c) => c,
            None => {
                self.last.remove(key);
                return None;
            }
        };

        let prev = self.last.insert(key.clone(), current.clone())?;
        debug_assert!(
            current.taken_at >= prev.taken_at,
            "{}: samples fed out of order",
            current.key
        );

        if current.read_bytes < prev.read_bytes
            || current.write_bytes < prev.write_bytes
            || current.busy_ms < prev.busy_ms
        {
            log::debug!("{}: counters went backwards, resetting baseline", current.key);
            return None;
        }
        if !elapsed_secs.is_finite() || elapsed_secs <= 0.0 {
            return None;
        }

        let d_read  = current.read_bytes  - prev.read_bytes;
        let d_write = current.write_bytes - prev.write_bytes;
        let d_busy  = current.busy_ms     - prev.busy_ms;

        Some(IoRate {
            read_bytes_per_sec:  d_read  as f64 / elapsed_secs,
            write_bytes_per_sec: d_write as f64 / elapsed_secs,
            util_pct:            clamp_pct(d_busy as f64 / (elapsed_secs * 1000.0) * 100.0),
        })
    }

    #[cfg(test)]
    pub fn baseline(&self, key: &DeviceKey) -> Option<&IoCounterSample> {
        self.last.get(key)
    }
}
