//! Shared physics types: classification enums, per-step contact flags
//! and the world bounds rectangle.

use serde::{Deserialize, Serialize};

use crate::domain::body::Body;

/// Default slack added to the overlap test to suppress tunneling (pixels)
pub const OVERLAP_BIAS: f32 = 4.0;

/// Smallest mass a body may be configured with; participation in the
/// mass-weighted exchange divides by mass, so zero is rejected upstream.
pub const MIN_MASS: f32 = 0.1;

/// How a body participates in the simulation
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum PhysicsType {
    /// Moved by physics (gravity, separation, impulses)
    Dynamic = 0,
    /// Never moves
    Static = 1,
}

/// Pair classification for the separation resolver.
///
/// A body counts as immovable when it is `Static` or carries the
/// `immovable` flag. The resolver branches on this exhaustively instead
/// of re-testing boolean combinations inline.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mobility {
    BothMovable,
    Body1Immovable,
    Body2Immovable,
    BothImmovable,
}

impl Mobility {
    pub fn classify(body1: &Body, body2: &Body) -> Self {
        match (body1.is_immovable(), body2.is_immovable()) {
            (false, false) => Mobility::BothMovable,
            (true, false) => Mobility::Body1Immovable,
            (false, true) => Mobility::Body2Immovable,
            (true, true) => Mobility::BothImmovable,
        }
    }
}

/// Whether a pair can take the unobstructed 50/50 separation path or
/// must honor recorded blocked state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BlockState {
    /// Neither body carries a directional block this step
    FreePair,
    /// At least one body was blocked by the bounds/blocking pass
    Obstructed,
}

impl BlockState {
    pub fn classify(body1: &Body, body2: &Body) -> Self {
        if body1.blocked.none() && body2.blocked.none() {
            BlockState::FreePair
        } else {
            BlockState::Obstructed
        }
    }
}

/// Per-direction "cannot move further" flags, valid for the current
/// step only. `by` names the body that caused the block (`None` for
/// world bounds).
#[derive(Clone, Copy, Debug, Default)]
pub struct Blocked {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
    pub by: Option<u32>,
}

impl Blocked {
    pub fn none(&self) -> bool {
        !(self.up || self.down || self.left || self.right)
    }

    pub fn reset(&mut self) {
        *self = Blocked::default();
    }
}

/// Per-face contact flags set by the overlap probes
#[derive(Clone, Copy, Debug)]
pub struct Touching {
    pub none: bool,
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

impl Default for Touching {
    fn default() -> Self {
        Touching {
            none: true,
            up: false,
            down: false,
            left: false,
            right: false,
        }
    }
}

impl Touching {
    pub fn reset(&mut self) {
        *self = Touching::default();
    }
}

/// Per-face collision opt-out consumed by the overlap probes
#[derive(Clone, Copy, Debug)]
pub struct CollisionFaces {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

impl Default for CollisionFaces {
    fn default() -> Self {
        CollisionFaces {
            up: true,
            down: true,
            left: true,
            right: true,
        }
    }
}

/// Axis-aligned world bounds rectangle
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct RectBounds {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl RectBounds {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }
}
