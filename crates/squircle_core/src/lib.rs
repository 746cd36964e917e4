//! Core geometry and colouring for Squircle Ring Studio.
//!
//! This crate provides:
//! - Circle sampling and zig-zag "squircle" ring construction
//! - The triangular offset schedule that staggers successive rings
//! - Colour gradients sampled per ring
//! - Full-pattern generation from a parameter set and a gradient
//! - JSON config save/load
//! - A Bevy plugin that regenerates the pattern when its inputs change
//!
//! # Example
//!
//! ```ignore
//! use squircle_core::{generate_pattern, Gradient, PatternParams};
//!
//! let pattern = generate_pattern(&PatternParams::default(), &Gradient::rainbow())?;
//! for ring in &pattern.rings {
//!     draw_line_strip(&ring.points, ring.color);
//! }
//! ```

pub mod config;
pub mod error;
pub mod gradient;
pub mod params;
pub mod pattern;
pub mod plugin;
pub mod ring;
pub mod schedule;

pub use config::{load_config, save_config, ConfigError, ConfigResult, PatternConfig, CONFIG_PATH};
pub use error::{PatternError, PatternResult};
pub use gradient::{from_hex, to_hex, Gradient, GradientStop, Rgba};
pub use params::{PatternParams, MAX_BUMP_WIDTH};
pub use pattern::{generate_pattern, Pattern, Ring};
pub use plugin::{regenerate_pattern, GeneratedPattern, SquirclePatternPlugin};
pub use ring::{circle_point, squircle_ring};
pub use schedule::OffsetSchedule;
