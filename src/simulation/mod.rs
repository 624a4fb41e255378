//! World - arcade physics simulation
//!
//! Orchestration only: the world owns the body store, the collider
//! list and the settings, and delegates the actual work to the
//! systems/ module. The per-step pipeline lives in step/step.rs:
//!
//!   reset flags -> integrate -> world bounds -> blocking -> separation -> events
//!
//! Body motion is in systems/motion.rs
//! World edge handling is in systems/bounds.rs
//! Pair separation is in systems/separation/

use crate::domain::body::Body;
use crate::domain::settings::WorldSettings;

#[path = "perf/perf_timer.rs"]
mod perf_timer;
#[path = "perf/perf_stats.rs"]
mod perf_stats;
#[path = "step/step.rs"]
mod step;
#[path = "commands/commands.rs"]
mod commands;
#[path = "init/init.rs"]
mod init;
#[path = "init/settings.rs"]
mod settings;
mod events;
mod facade;

pub use events::{CollisionEvent, EventBuffer, EventKind};
pub use facade::World;
pub use perf_stats::PerfStats;

use perf_timer::PerfTimer;

/// A registered body pair the step pipeline tests every frame.
///
/// `overlap_only` pairs report contact but are never separated.
#[derive(Clone, Copy)]
pub struct ColliderPair {
    pub a: u32,
    pub b: u32,
    pub overlap_only: bool,
    pub enable: bool,
}

/// The simulation world
pub struct WorldCore {
    bodies: Vec<Body>,
    colliders: Vec<ColliderPair>,
    settings: WorldSettings,
    events: EventBuffer,

    // State
    frame: u64,

    // Perf metrics
    perf_enabled: bool,
    perf_stats: PerfStats,
}

impl WorldCore {
    /// Create a new world with given bounds
    pub fn new(width: f32, height: f32) -> Self {
        init::create_world_core(width, height)
    }

    pub fn width(&self) -> f32 { self.settings.bounds.width }

    pub fn height(&self) -> f32 { self.settings.bounds.height }

    pub fn body_count(&self) -> u32 {
        self.bodies.iter().filter(|b| b.enable).count() as u32
    }

    pub fn frame(&self) -> u64 { self.frame }

    pub fn settings(&self) -> &WorldSettings { &self.settings }

    /// Replace the world settings from a JSON document
    pub fn load_settings_json(&mut self, json: &str) -> Result<(), String> {
        settings::load_settings_json(self, json)
    }

    pub fn set_gravity(&mut self, x: f32, y: f32) {
        settings::set_gravity(self, x, y);
    }

    /// Test every enabled pair of bodies, ignoring the collider list
    pub fn set_collide_all(&mut self, enabled: bool) {
        settings::set_collide_all(self, enabled);
    }

    /// Enable or disable per-step perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        settings::enable_perf_metrics(self, enabled);
    }

    /// Get last step perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        settings::get_perf_stats(self)
    }

    /// Spawn a dynamic body, returns its id
    pub fn spawn_body(&mut self, x: f32, y: f32, width: f32, height: f32) -> u32 {
        commands::spawn_body(self, x, y, width, height)
    }

    /// Spawn a static body (never moves, never repositioned), returns its id
    pub fn spawn_static_body(&mut self, x: f32, y: f32, width: f32, height: f32) -> u32 {
        commands::spawn_static_body(self, x, y, width, height)
    }

    /// Disable a body; its id stays allocated and is never reused
    pub fn remove_body(&mut self, id: u32) {
        commands::remove_body(self, id)
    }

    pub fn body(&self, id: u32) -> Option<&Body> {
        self.bodies.get(id as usize)
    }

    pub fn body_mut(&mut self, id: u32) -> Option<&mut Body> {
        self.bodies.get_mut(id as usize)
    }

    /// Register a separating collider between two bodies
    pub fn add_collider(&mut self, a: u32, b: u32) -> bool {
        commands::add_pair(self, a, b, false)
    }

    /// Register a report-only overlap probe between two bodies
    pub fn add_overlap(&mut self, a: u32, b: u32) -> bool {
        commands::add_pair(self, a, b, true)
    }

    /// Remove all bodies and colliders
    pub fn clear(&mut self) {
        commands::clear(self)
    }

    pub fn events(&self) -> &[CollisionEvent] {
        self.events.events()
    }

    pub fn events_json(&self) -> String {
        self.events.to_json()
    }

    /// Step the simulation forward by `dt` seconds
    pub fn step(&mut self, dt: f32) {
        step::step(self, dt);
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
