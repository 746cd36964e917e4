//! Bevy plugin that keeps a generated pattern in sync with its inputs.
//!
//! `PatternParams` and `Gradient` are resources. Whenever either changes,
//! `regenerate_pattern` rebuilds `GeneratedPattern`. A renderer reads
//! `GeneratedPattern` and never calls the generator itself.
//!
//! # Example
//!
//! ```ignore
//! App::new()
//!     .add_plugins(DefaultPlugins)
//!     .add_plugins(SquirclePatternPlugin)
//!     .insert_resource(PatternParams::default().with_ring_count(60))
//!     .run();
//! ```

use bevy::prelude::*;

use crate::error::PatternError;
use crate::gradient::Gradient;
use crate::params::PatternParams;
use crate::pattern::{generate_pattern, Pattern};

/// Latest pattern built from the current parameters and gradient.
#[derive(Resource, Default)]
pub struct GeneratedPattern {
    /// Last successful pattern. Kept when newer inputs fail validation.
    pub pattern: Pattern,
    /// Error from the most recent attempt, cleared on success.
    pub last_error: Option<PatternError>,
    /// Number of successful regenerations.
    pub generation: u64,
}

impl GeneratedPattern {
    pub fn is_valid(&self) -> bool {
        self.last_error.is_none()
    }
}

/// Rebuild the pattern when parameters or gradient changed.
pub fn regenerate_pattern(
    params: Res<PatternParams>,
    gradient: Res<Gradient>,
    mut generated: ResMut<GeneratedPattern>,
) {
    if !params.is_changed() && !gradient.is_changed() {
        return;
    }

    match generate_pattern(&params, &gradient) {
        Ok(pattern) => {
            generated.pattern = pattern;
            generated.last_error = None;
            generated.generation += 1;
            debug!(
                "Regenerated pattern #{}: {} rings x {} vertices",
                generated.generation,
                params.ring_count,
                params.vertex_count()
            );
        }
        Err(e) => {
            error!("Pattern parameters rejected, keeping previous pattern: {}", e);
            generated.last_error = Some(e);
        }
    }
}

/// Registers pattern resources and the regeneration system.
///
/// Resources inserted before the plugin is added are kept.
pub struct SquirclePatternPlugin;

impl Plugin for SquirclePatternPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<PatternParams>()
            .init_resource::<Gradient>()
            .init_resource::<GeneratedPattern>()
            .add_systems(Update, regenerate_pattern);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_app() -> App {
        let mut app = App::new();
        app.add_plugins(SquirclePatternPlugin);
        app
    }

    #[test]
    fn test_generates_on_first_update() {
        let mut app = test_app();
        app.update();

        let generated = app.world().resource::<GeneratedPattern>();
        assert_eq!(generated.generation, 1);
        assert_eq!(
            generated.pattern.ring_count(),
            PatternParams::default().ring_count as usize
        );
        assert!(generated.is_valid());
    }

    #[test]
    fn test_no_regeneration_without_changes() {
        let mut app = test_app();
        app.update();
        app.update();
        app.update();

        assert_eq!(app.world().resource::<GeneratedPattern>().generation, 1);
    }

    #[test]
    fn test_param_change_regenerates() {
        let mut app = test_app();
        app.update();

        app.world_mut().resource_mut::<PatternParams>().ring_count = 7;
        app.update();

        let generated = app.world().resource::<GeneratedPattern>();
        assert_eq!(generated.generation, 2);
        assert_eq!(generated.pattern.ring_count(), 7);
    }

    #[test]
    fn test_gradient_change_regenerates() {
        let mut app = test_app();
        app.update();

        let white = [1.0, 1.0, 1.0, 1.0];
        app.insert_resource(Gradient::two_color(white, white));
        app.update();

        let generated = app.world().resource::<GeneratedPattern>();
        assert_eq!(generated.generation, 2);
        assert!(generated.pattern.rings.iter().all(|r| r.color == white));
    }

    #[test]
    fn test_invalid_params_keep_previous_pattern() {
        let mut app = test_app();
        app.update();
        let before = app.world().resource::<GeneratedPattern>().pattern.clone();

        app.world_mut().resource_mut::<PatternParams>().rotation_period = 3;
        app.update();

        let generated = app.world().resource::<GeneratedPattern>();
        assert_eq!(generated.generation, 1);
        assert_eq!(
            generated.last_error,
            Some(PatternError::RotationPeriodTooSmall(3))
        );
        assert_eq!(generated.pattern, before);

        app.world_mut().resource_mut::<PatternParams>().rotation_period = 4;
        app.update();
        let generated = app.world().resource::<GeneratedPattern>();
        assert!(generated.is_valid());
        assert_eq!(generated.generation, 2);
    }

    #[test]
    fn test_preinserted_params_are_kept() {
        let mut app = App::new();
        app.insert_resource(PatternParams::default().with_ring_count(3));
        app.add_plugins(SquirclePatternPlugin);
        app.update();

        let generated = app.world().resource::<GeneratedPattern>();
        assert_eq!(generated.pattern.ring_count(), 3);
    }
}
