//! Arcadia Engine - Arcade-style 2D physics in WASM
//!
//! Simplified, deterministic, non-rotational rigid-body physics for
//! real-time browser games (platformers, top-down games). Not a general
//! rigid-body dynamics solver: no rotation, no contact manifolds, just
//! fast axis-aligned rectangle separation tuned for game feel.
//!
//! Architecture:
//! - core/       - Math primitives
//! - domain/     - Body model and world settings
//! - systems/    - Motion, bounds, blocking and separation passes
//! - simulation/ - World orchestration and the WASM facade

pub mod core;
pub mod domain;
pub mod systems;
pub mod simulation;

pub use crate::core::vec2::Vec2;
pub use crate::domain::body::Body;
pub use crate::domain::settings::WorldSettings;
pub use crate::domain::types::{Blocked, CollisionFaces, PhysicsType, RectBounds, Touching};
pub use crate::simulation::{CollisionEvent, EventKind, PerfStats, World, WorldCore};
pub use crate::systems::separation::{get_overlap_x, get_overlap_y, separate_x, separate_y};

use wasm_bindgen::prelude::*;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    web_sys::console::log_1(&"🦀 Arcadia WASM Engine initialized!".into());
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
