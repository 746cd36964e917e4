//! Parameter set for the squircle ring pattern.
//!
//! `PatternParams` is the only input besides the gradient. Every field is
//! checked by [`PatternParams::validate`] before any geometry is built, so
//! bad combinations surface as a [`PatternError`] instead of a division by
//! zero deep inside the ring builder.

use bevy::prelude::Resource;
use serde::{Deserialize, Serialize};
use std::f64::consts::TAU;

use crate::error::{PatternError, PatternResult};

/// Widest bump that keeps every inner radius at or above zero.
pub const MAX_BUMP_WIDTH: f64 = 2.0;

/// Numeric controls for the pattern.
#[derive(Resource, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PatternParams {
    /// Bumps per ring. Each bump is an inner and an outer vertex, so a ring
    /// has `2 * bump_count` vertices.
    pub bump_count: u32,
    /// Number of concentric rings.
    pub ring_count: u32,
    /// Rings per rotation cycle. Even, at least 4.
    pub rotation_period: u32,
    /// Peak angular offset of the cycle, in radians.
    pub rotation_offset: f64,
    /// Radius added per ring.
    pub radial_step: f64,
    /// Distance between the inner and outer vertex radii. At most 2, so the
    /// innermost ring's inner radius `1 - bump_width / 2` stays non-negative.
    pub bump_width: f64,
}

impl Default for PatternParams {
    fn default() -> Self {
        Self {
            bump_count: 20,
            ring_count: 40,
            rotation_period: 20,
            rotation_offset: 0.1,
            radial_step: 0.05,
            bump_width: 0.1,
        }
    }
}

impl PatternParams {
    pub fn with_bump_count(mut self, bump_count: u32) -> Self {
        self.bump_count = bump_count;
        self
    }

    pub fn with_ring_count(mut self, ring_count: u32) -> Self {
        self.ring_count = ring_count;
        self
    }

    pub fn with_rotation(mut self, period: u32, offset: f64) -> Self {
        self.rotation_period = period;
        self.rotation_offset = offset;
        self
    }

    pub fn with_radial_step(mut self, radial_step: f64) -> Self {
        self.radial_step = radial_step;
        self
    }

    pub fn with_bump_width(mut self, bump_width: f64) -> Self {
        self.bump_width = bump_width;
        self
    }

    /// Vertices per ring (inner and outer alternate).
    pub fn vertex_count(&self) -> usize {
        self.bump_count as usize * 2
    }

    /// Base radius of ring `index`.
    pub fn ring_radius(&self, index: usize) -> f64 {
        1.0 + self.radial_step * index as f64
    }

    /// Check every field, returning the first violation.
    pub fn validate(&self) -> PatternResult<()> {
        if self.bump_count < 2 {
            return Err(PatternError::BumpCountTooSmall(self.bump_count));
        }
        if self.ring_count == 0 {
            return Err(PatternError::RingCountZero);
        }
        validate_rotation_period(self.rotation_period)?;
        if !self.rotation_offset.is_finite() || !(0.0..=TAU).contains(&self.rotation_offset) {
            return Err(PatternError::RotationOffsetOutOfRange(self.rotation_offset));
        }
        require_positive("radial_step", self.radial_step)?;
        require_positive("bump_width", self.bump_width)?;
        if self.bump_width > MAX_BUMP_WIDTH {
            return Err(PatternError::BumpWidthTooLarge(self.bump_width));
        }
        Ok(())
    }
}

pub(crate) fn validate_rotation_period(period: u32) -> PatternResult<()> {
    if period < 4 {
        return Err(PatternError::RotationPeriodTooSmall(period));
    }
    if period % 2 != 0 {
        return Err(PatternError::RotationPeriodOdd(period));
    }
    Ok(())
}

fn require_positive(field: &'static str, value: f64) -> PatternResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(PatternError::NonPositive { field, value })
    }
}
