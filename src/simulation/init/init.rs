use crate::domain::settings::WorldSettings;
use crate::domain::types::RectBounds;

use super::perf_stats::PerfStats;
use super::{EventBuffer, WorldCore};

pub(super) fn create_world_core(width: f32, height: f32) -> WorldCore {
    let mut settings = WorldSettings::default();
    settings.bounds = RectBounds::new(0.0, 0.0, width, height);

    WorldCore {
        bodies: Vec::new(),
        colliders: Vec::new(),
        settings,
        events: EventBuffer::new(),
        frame: 0,
        perf_enabled: false,
        perf_stats: PerfStats::default(),
    }
}
