//! World settings - JSON-loadable configuration for the simulation
//!
//! Mirrors the engine defaults when fields are omitted, so a partial
//! bundle like `{"gravity_y": 600}` is valid.

use serde::{Deserialize, Serialize};

use crate::domain::types::{RectBounds, OVERLAP_BIAS};

#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldSettings {
    pub gravity_x: f32,
    pub gravity_y: f32,
    /// World bounds rectangle bodies are clamped against
    pub bounds: RectBounds,
    /// Restitution applied when rebounding off the world bounds
    pub world_bounce_x: f32,
    pub world_bounce_y: f32,
    /// Slack added to the overlap test to suppress tunneling
    pub overlap_bias: f32,
    /// Which world edges are solid
    pub check_up: bool,
    pub check_down: bool,
    pub check_left: bool,
    pub check_right: bool,
    /// Collide every dynamic pair without explicit collider registration
    pub collide_all: bool,
}

impl Default for WorldSettings {
    fn default() -> Self {
        WorldSettings {
            gravity_x: 0.0,
            gravity_y: 0.0,
            bounds: RectBounds::new(0.0, 0.0, 800.0, 600.0),
            world_bounce_x: 0.0,
            world_bounce_y: 0.0,
            overlap_bias: OVERLAP_BIAS,
            check_up: true,
            check_down: true,
            check_left: true,
            check_right: true,
            collide_all: false,
        }
    }
}

impl WorldSettings {
    pub fn from_json(json: &str) -> Result<Self, String> {
        serde_json::from_str(json).map_err(|e| e.to_string())
    }
}
