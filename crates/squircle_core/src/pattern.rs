//! Full-pattern generation.
//!
//! `generate_pattern` turns a parameter set and a gradient into the ordered
//! list of rings a renderer draws, innermost first. It holds no state: the
//! same inputs always give bit-identical output.

use bevy::math::DVec2;

use crate::error::PatternResult;
use crate::gradient::{Gradient, Rgba};
use crate::params::PatternParams;
use crate::ring::squircle_ring;
use crate::schedule::OffsetSchedule;

/// One closed zig-zag ring and its colour.
#[derive(Clone, Debug, PartialEq)]
pub struct Ring {
    /// Position from the centre (0 = innermost).
    pub index: usize,
    /// Base radius, midway between inner and outer vertices.
    pub radius: f64,
    /// Angle of the first vertex, in radians.
    pub angle_offset: f64,
    /// Closed polyline; last point repeats the first.
    pub points: Vec<DVec2>,
    pub color: Rgba,
}

/// Generated rings, innermost first.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Pattern {
    pub rings: Vec<Ring>,
}

impl Pattern {
    pub fn ring_count(&self) -> usize {
        self.rings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rings.is_empty()
    }

    /// Largest absolute x or y over all points. A square of half-size
    /// `extent()` around the origin frames the whole pattern.
    pub fn extent(&self) -> f64 {
        self.rings
            .iter()
            .flat_map(|ring| ring.points.iter())
            .map(|p| p.x.abs().max(p.y.abs()))
            .fold(0.0, f64::max)
    }
}

/// Build every ring for `params`, coloured from `gradient`.
///
/// Parameters are validated up front; nothing is built if any is invalid.
pub fn generate_pattern(params: &PatternParams, gradient: &Gradient) -> PatternResult<Pattern> {
    params.validate()?;

    let schedule = OffsetSchedule::new(params.rotation_period, params.rotation_offset)?;
    let ring_count = params.ring_count as usize;
    let vertex_count = params.vertex_count();

    let mut rings = Vec::with_capacity(ring_count);
    for index in 0..ring_count {
        let radius = params.ring_radius(index);
        let angle_offset = schedule.offset_for_ring(index);
        let points = squircle_ring(radius, params.bump_width, angle_offset, vertex_count)?;
        let color = gradient.sample(index as f32 / ring_count as f32);

        rings.push(Ring {
            index,
            radius,
            angle_offset,
            points,
            color,
        });
    }

    Ok(Pattern { rings })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PatternError;
    use crate::ring::circle_point;
    use std::f64::consts::FRAC_PI_4;

    #[test]
    fn test_small_octagon_example() {
        let params = PatternParams {
            bump_count: 4,
            ring_count: 2,
            rotation_period: 4,
            rotation_offset: 0.0,
            radial_step: 0.1,
            bump_width: 0.1,
        };
        let pattern = generate_pattern(&params, &Gradient::default()).unwrap();
        assert_eq!(pattern.ring_count(), 2);

        for (ring, base) in pattern.rings.iter().zip([1.0, 1.1]) {
            assert_eq!(ring.points.len(), 9);
            assert_eq!(ring.angle_offset, 0.0);
            for (idx, point) in ring.points[..8].iter().enumerate() {
                let r = if idx % 2 == 0 { base - 0.05 } else { base + 0.05 };
                let expected = circle_point(r, FRAC_PI_4 * idx as f64);
                assert!(
                    (*point - expected).length() < 1e-9,
                    "ring {} vertex {}: {:?} != {:?}",
                    ring.index,
                    idx,
                    point,
                    expected
                );
            }
        }
    }

    #[test]
    fn test_offsets_follow_schedule() {
        let params = PatternParams::default()
            .with_ring_count(10)
            .with_rotation(6, 0.3);
        let pattern = generate_pattern(&params, &Gradient::default()).unwrap();
        let offsets: Vec<f64> = pattern.rings.iter().map(|r| r.angle_offset).collect();
        let schedule = OffsetSchedule::new(6, 0.3).unwrap();
        for (idx, offset) in offsets.iter().enumerate() {
            assert_eq!(*offset, schedule.offset_for_ring(idx));
        }
        assert_eq!(offsets[0], offsets[4]);
    }

    #[test]
    fn test_colors_walk_the_gradient() {
        let red = [1.0, 0.0, 0.0, 1.0];
        let blue = [0.0, 0.0, 1.0, 1.0];
        let params = PatternParams::default().with_ring_count(4);
        let pattern = generate_pattern(&params, &Gradient::two_color(red, blue)).unwrap();

        assert_eq!(pattern.rings[0].color, red);
        let last = pattern.rings[3].color;
        assert!((last[2] - 0.75).abs() < 1e-6);
    }

    #[test]
    fn test_invalid_params_fail_fast() {
        let params = PatternParams::default().with_rotation(2, 0.1);
        assert_eq!(
            generate_pattern(&params, &Gradient::default()),
            Err(PatternError::RotationPeriodTooSmall(2))
        );
    }

    #[test]
    fn test_wide_bumps_rejected() {
        let params = PatternParams {
            bump_count: 4,
            ring_count: 1,
            rotation_period: 4,
            rotation_offset: 0.0,
            radial_step: 0.1,
            bump_width: 3.0,
        };
        assert_eq!(
            generate_pattern(&params, &Gradient::default()),
            Err(PatternError::BumpWidthTooLarge(3.0))
        );

        // Width 2 puts the first ring's inner vertices exactly on the centre.
        let pattern = generate_pattern(&params.with_bump_width(2.0), &Gradient::default()).unwrap();
        assert!(pattern.rings[0].points[0].length() < 1e-12);
    }

    #[test]
    fn test_extent() {
        let params = PatternParams::default()
            .with_ring_count(3)
            .with_radial_step(0.5)
            .with_bump_width(0.2)
            .with_rotation(4, 0.0);
        let pattern = generate_pattern(&params, &Gradient::default()).unwrap();
        // Outer vertices of the last ring reach radius 2.1; with 40
        // vertices from angle 0 the odd ones never land on an axis.
        let extent = pattern.extent();
        assert!(extent > 1.9 && extent <= 2.1 + 1e-9, "extent {}", extent);
        assert_eq!(Pattern::default().extent(), 0.0);
    }
}
