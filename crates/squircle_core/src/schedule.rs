//! Per-ring angular offsets.
//!
//! Rings are rotated by a triangular wave: the offset climbs from zero to
//! the peak over the first half of a period and falls back over the second
//! half. With period `p` the schedule holds `p - 2` entries, because the
//! falling half drops both of its endpoints (the peak is already the last
//! rising entry, and zero is the first entry of the next cycle).
//!
//! For `p = 8` and peak `o`:
//!
//! ```text
//! index  0    1     2      3   4      5
//! value  0   o/3  2o/3    o  2o/3   o/3
//! ```

use crate::error::PatternResult;
use crate::params::validate_rotation_period;

/// Triangular offset wave applied to successive rings.
#[derive(Clone, Debug, PartialEq)]
pub struct OffsetSchedule {
    offsets: Vec<f64>,
}

impl OffsetSchedule {
    /// Build the schedule for `rotation_period` rings peaking at `rotation_offset`.
    ///
    /// Fails for periods below 4 or odd periods.
    pub fn new(rotation_period: u32, rotation_offset: f64) -> PatternResult<Self> {
        validate_rotation_period(rotation_period)?;

        let half = rotation_period as usize / 2;
        let mut offsets = Vec::with_capacity(rotation_period as usize - 2);
        offsets.extend((0..half).map(|k| linspace(0.0, rotation_offset, half, k)));
        offsets.extend((1..half - 1).map(|k| linspace(rotation_offset, 0.0, half, k)));

        Ok(Self { offsets })
    }

    /// Offset for ring `index`, repeating every `len()` rings.
    pub fn offset_for_ring(&self, index: usize) -> f64 {
        self.offsets[index % self.offsets.len()]
    }

    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }

    pub fn values(&self) -> &[f64] {
        &self.offsets
    }
}

/// `k`-th of `n` evenly spaced samples over [start, end]. The last sample is
/// exactly `end`.
fn linspace(start: f64, end: f64, n: usize, k: usize) -> f64 {
    if k + 1 == n {
        return end;
    }
    start + (end - start) / (n - 1) as f64 * k as f64
}
