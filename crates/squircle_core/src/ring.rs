//! Circle sampling and zig-zag ring construction.
//!
//! A squircle ring is a closed polyline whose vertices alternate between an
//! inner and an outer circle:
//!
//! ```text
//!        outer   outer
//!       /    \  /    \
//!  inner      inner     ...
//! ```
//!
//! Vertices are spaced evenly in angle, starting at the ring's offset, and
//! the first vertex is repeated at the end so consumers can draw the loop
//! as a plain line strip.

use bevy::math::DVec2;
use std::f64::consts::TAU;

use crate::error::{PatternError, PatternResult};

/// Point on a circle of `radius` centred at the origin, at `angle` radians.
///
/// The angle is reduced into [0, 2π) first, so any real angle is accepted.
#[inline]
pub fn circle_point(radius: f64, angle: f64) -> DVec2 {
    let angle = angle.rem_euclid(TAU);
    DVec2::new(radius * angle.cos(), radius * angle.sin())
}

/// Build a closed zig-zag ring.
///
/// Even-indexed vertices sit at `ring_radius - bump_width / 2`, odd ones at
/// `ring_radius + bump_width / 2`. Returns `vertex_count + 1` points.
///
/// An odd `vertex_count` is accepted; its closing segment joins two inner
/// vertices.
pub fn squircle_ring(
    ring_radius: f64,
    bump_width: f64,
    angle_offset: f64,
    vertex_count: usize,
) -> PatternResult<Vec<DVec2>> {
    if vertex_count < 2 {
        return Err(PatternError::VertexCountTooSmall(vertex_count));
    }

    let inner = ring_radius - bump_width / 2.0;
    let outer = ring_radius + bump_width / 2.0;
    let step = TAU / vertex_count as f64;

    let mut points = Vec::with_capacity(vertex_count + 1);
    for idx in 0..vertex_count {
        let angle = angle_offset + step * idx as f64;
        let radius = if idx % 2 == 0 { inner } else { outer };
        points.push(circle_point(radius, angle));
    }
    points.push(points[0]);

    Ok(points)
}
