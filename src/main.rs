//! Headless pattern preview.
//!
//! Boots a minimal Bevy app, loads the pattern config if one exists at
//! `CONFIG_PATH`, generates the pattern once and logs what a renderer would
//! draw.

use bevy::app::ScheduleRunnerPlugin;
use bevy::log::LogPlugin;
use bevy::prelude::*;
use squircle_core::{
    load_config, GeneratedPattern, Gradient, PatternParams, SquirclePatternPlugin, CONFIG_PATH,
};
use std::path::Path;

fn main() -> AppExit {
    App::new()
        .add_plugins(MinimalPlugins.set(ScheduleRunnerPlugin::run_once()))
        .add_plugins(LogPlugin::default())
        .add_plugins(SquirclePatternPlugin)
        .add_systems(Startup, load_pattern_config)
        .add_systems(PostUpdate, report_pattern)
        .run()
}

/// Replace the default parameters and gradient with the config file's.
fn load_pattern_config(mut params: ResMut<PatternParams>, mut gradient: ResMut<Gradient>) {
    if !Path::new(CONFIG_PATH).exists() {
        info!("No config at {}, using default pattern", CONFIG_PATH);
        return;
    }

    match load_config(CONFIG_PATH) {
        Ok(config) => {
            *params = config.params;
            *gradient = config.gradient;
        }
        Err(e) => warn!("Ignoring {}: {}", CONFIG_PATH, e),
    }
}

fn report_pattern(generated: Res<GeneratedPattern>) {
    if !generated.is_changed() {
        return;
    }
    if let Some(e) = &generated.last_error {
        error!("No pattern generated: {}", e);
        return;
    }

    let pattern = &generated.pattern;
    info!(
        "Pattern ready: {} rings, extent {:.3}",
        pattern.ring_count(),
        pattern.extent()
    );
    for ring in &pattern.rings {
        debug!(
            "ring {:>3}: radius {:.3}, offset {:.4} rad, {} points, color {:?}",
            ring.index,
            ring.radius,
            ring.angle_offset,
            ring.points.len(),
            ring.color
        );
    }
}
