use wasm_bindgen::prelude::*;

use super::perf_stats::PerfStats;
use super::WorldCore;

#[wasm_bindgen]
pub struct World {
    core: WorldCore,
}

#[wasm_bindgen]
impl World {
    /// Create a new world with given bounds (pixels)
    #[wasm_bindgen(constructor)]
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            core: WorldCore::new(width, height),
        }
    }

    #[wasm_bindgen(getter)]
    pub fn width(&self) -> f32 { self.core.width() }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> f32 { self.core.height() }

    #[wasm_bindgen(getter)]
    pub fn body_count(&self) -> u32 { self.core.body_count() }

    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> u64 { self.core.frame() }

    /// Enable or disable per-step perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        self.core.enable_perf_metrics(enabled);
    }

    /// Get last step perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        self.core.get_perf_stats()
    }

    pub fn set_gravity(&mut self, x: f32, y: f32) {
        self.core.set_gravity(x, y);
    }

    pub fn set_collide_all(&mut self, enabled: bool) {
        self.core.set_collide_all(enabled);
    }

    /// Replace the world settings from a JSON document
    #[cfg(target_arch = "wasm32")]
    pub fn load_settings_json(&mut self, json: &str) -> Result<(), JsValue> {
        self.core
            .load_settings_json(json)
            .map_err(|e| JsValue::from_str(&e))
    }

    /// Replace the world settings from a JSON document
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_settings_json(&mut self, json: &str) -> Result<(), String> {
        self.core.load_settings_json(json)
    }

    /// Spawn a dynamic body, returns its id
    pub fn spawn_body(&mut self, x: f32, y: f32, width: f32, height: f32) -> u32 {
        self.core.spawn_body(x, y, width, height)
    }

    /// Spawn a static body (never moves, never repositioned), returns its id
    pub fn spawn_static_body(&mut self, x: f32, y: f32, width: f32, height: f32) -> u32 {
        self.core.spawn_static_body(x, y, width, height)
    }

    pub fn remove_body(&mut self, id: u32) {
        self.core.remove_body(id);
    }

    /// Register a separating collider between two bodies
    pub fn add_collider(&mut self, a: u32, b: u32) -> bool {
        self.core.add_collider(a, b)
    }

    /// Register a report-only overlap probe between two bodies
    pub fn add_overlap(&mut self, a: u32, b: u32) -> bool {
        self.core.add_overlap(a, b)
    }

    /// Remove all bodies and colliders
    pub fn clear(&mut self) {
        self.core.clear();
    }

    /// Step the simulation forward by `dt` seconds
    pub fn step(&mut self, dt: f32) {
        self.core.step(dt);
    }

    /// Contact events recorded by the last step, as a JSON array
    pub fn events_json(&self) -> String {
        self.core.events_json()
    }

    // === BODY ACCESSORS ===
    // Flat scalar getters/setters; JS reads body state per id instead
    // of holding references into wasm memory.

    pub fn body_x(&self, id: u32) -> f32 {
        self.core.body(id).map_or(0.0, |b| b.x())
    }

    pub fn body_y(&self, id: u32) -> f32 {
        self.core.body(id).map_or(0.0, |b| b.y())
    }

    pub fn body_velocity_x(&self, id: u32) -> f32 {
        self.core.body(id).map_or(0.0, |b| b.velocity.x)
    }

    pub fn body_velocity_y(&self, id: u32) -> f32 {
        self.core.body(id).map_or(0.0, |b| b.velocity.y)
    }

    pub fn body_blocked_down(&self, id: u32) -> bool {
        self.core.body(id).is_some_and(|b| b.blocked.down)
    }

    pub fn body_blocked_up(&self, id: u32) -> bool {
        self.core.body(id).is_some_and(|b| b.blocked.up)
    }

    pub fn body_blocked_left(&self, id: u32) -> bool {
        self.core.body(id).is_some_and(|b| b.blocked.left)
    }

    pub fn body_blocked_right(&self, id: u32) -> bool {
        self.core.body(id).is_some_and(|b| b.blocked.right)
    }

    pub fn body_embedded(&self, id: u32) -> bool {
        self.core.body(id).is_some_and(|b| b.embedded)
    }

    pub fn body_touching_up(&self, id: u32) -> bool {
        self.core.body(id).is_some_and(|b| b.touching.up)
    }

    pub fn body_touching_down(&self, id: u32) -> bool {
        self.core.body(id).is_some_and(|b| b.touching.down)
    }

    pub fn body_touching_left(&self, id: u32) -> bool {
        self.core.body(id).is_some_and(|b| b.touching.left)
    }

    pub fn body_touching_right(&self, id: u32) -> bool {
        self.core.body(id).is_some_and(|b| b.touching.right)
    }

    // Previous step's contact flags; diffing against the current ones
    // gives contact-started / contact-ended edges.

    pub fn body_was_touching_up(&self, id: u32) -> bool {
        self.core.body(id).is_some_and(|b| b.was_touching.up)
    }

    pub fn body_was_touching_down(&self, id: u32) -> bool {
        self.core.body(id).is_some_and(|b| b.was_touching.down)
    }

    pub fn body_was_touching_left(&self, id: u32) -> bool {
        self.core.body(id).is_some_and(|b| b.was_touching.left)
    }

    pub fn body_was_touching_right(&self, id: u32) -> bool {
        self.core.body(id).is_some_and(|b| b.was_touching.right)
    }

    pub fn set_body_position(&mut self, id: u32, x: f32, y: f32) {
        if let Some(body) = self.core.body_mut(id) {
            body.set_x(x);
            body.set_y(y);
            body.prev = body.pos;
        }
    }

    pub fn set_body_velocity(&mut self, id: u32, x: f32, y: f32) {
        if let Some(body) = self.core.body_mut(id) {
            body.velocity.x = x;
            body.velocity.y = y;
        }
    }

    pub fn set_body_acceleration(&mut self, id: u32, x: f32, y: f32) {
        if let Some(body) = self.core.body_mut(id) {
            body.acceleration.x = x;
            body.acceleration.y = y;
        }
    }

    pub fn set_body_bounce(&mut self, id: u32, x: f32, y: f32) {
        if let Some(body) = self.core.body_mut(id) {
            body.bounce.x = x;
            body.bounce.y = y;
        }
    }

    pub fn set_body_drag(&mut self, id: u32, x: f32, y: f32) {
        if let Some(body) = self.core.body_mut(id) {
            body.drag.x = x;
            body.drag.y = y;
        }
    }

    pub fn set_body_max_velocity(&mut self, id: u32, x: f32, y: f32) {
        if let Some(body) = self.core.body_mut(id) {
            body.max_velocity.x = x;
            body.max_velocity.y = y;
        }
    }

    pub fn set_body_friction(&mut self, id: u32, x: f32, y: f32) {
        if let Some(body) = self.core.body_mut(id) {
            body.friction.x = x;
            body.friction.y = y;
        }
    }

    pub fn set_body_mass(&mut self, id: u32, mass: f32) {
        if let Some(body) = self.core.body_mut(id) {
            body.set_mass(mass);
        }
    }

    pub fn set_body_immovable(&mut self, id: u32, immovable: bool) {
        if let Some(body) = self.core.body_mut(id) {
            body.immovable = immovable;
        }
    }

    pub fn set_body_collide_world_bounds(&mut self, id: u32, enabled: bool) {
        if let Some(body) = self.core.body_mut(id) {
            body.collide_world_bounds = enabled;
        }
    }

    pub fn set_body_allow_gravity(&mut self, id: u32, enabled: bool) {
        if let Some(body) = self.core.body_mut(id) {
            body.allow_gravity = enabled;
        }
    }

    /// Opt the body out of the built-in separation resolver per axis
    pub fn set_body_custom_separate(&mut self, id: u32, x: bool, y: bool) {
        if let Some(body) = self.core.body_mut(id) {
            body.custom_separate_x = x;
            body.custom_separate_y = y;
        }
    }

    /// Per-face collision opt-out (one-way platforms and the like)
    pub fn set_body_check_collision(&mut self, id: u32, up: bool, down: bool, left: bool, right: bool) {
        if let Some(body) = self.core.body_mut(id) {
            body.check_collision.up = up;
            body.check_collision.down = down;
            body.check_collision.left = left;
            body.check_collision.right = right;
        }
    }
}
