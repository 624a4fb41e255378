use crate::domain::settings::WorldSettings;

use super::perf_stats::PerfStats;
use super::WorldCore;

pub(super) fn enable_perf_metrics(world: &mut WorldCore, enabled: bool) {
    world.perf_enabled = enabled;
}

pub(super) fn get_perf_stats(world: &WorldCore) -> PerfStats {
    world.perf_stats.clone()
}

pub(super) fn set_gravity(world: &mut WorldCore, x: f32, y: f32) {
    world.settings.gravity_x = x;
    world.settings.gravity_y = y;
}

pub(super) fn set_collide_all(world: &mut WorldCore, enabled: bool) {
    world.settings.collide_all = enabled;
}

/// Replace the settings wholesale, then refresh the per-body bounds
/// snapshots so `move_x`/`move_y` clamp against the new rectangle.
pub(super) fn load_settings_json(world: &mut WorldCore, json: &str) -> Result<(), String> {
    let settings = WorldSettings::from_json(json)?;
    world.settings = settings;
    for body in &mut world.bodies {
        if body.bounds.is_some() {
            body.bounds = Some(settings.bounds);
        }
    }
    Ok(())
}
