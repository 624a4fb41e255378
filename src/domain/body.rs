//! Body - a movable or fixed axis-aligned rectangle in the simulation
//!
//! Position is top-left based; `bottom()`/`right()` are derived and the
//! setters keep `bottom - y == height` and `right - x == width` intact.
//! The separation resolver only ever moves a body through these
//! accessors or through `move_x`/`move_y`, never by editing one edge
//! independently.

use crate::core::vec2::Vec2;
use crate::domain::types::{
    Blocked, CollisionFaces, PhysicsType, RectBounds, Touching, MIN_MASS,
};

pub struct Body {
    /// Stable handle, assigned by the world
    pub id: u32,
    /// Disabled bodies are skipped by every pass
    pub enable: bool,

    /// Top-left corner position (pixels)
    pub pos: Vec2,
    /// Position snapshot taken at the start of this step's integration
    pub prev: Vec2,
    pub width: f32,
    pub height: f32,

    /// Velocity (pixels per second)
    pub velocity: Vec2,
    pub acceleration: Vec2,
    /// Linear deceleration applied when there is no acceleration input
    pub drag: Vec2,
    /// Per-axis speed cap
    pub max_velocity: Vec2,
    /// Per-axis restitution retained after collision
    pub bounce: Vec2,
    /// Carry-along factor when this body is a moving platform
    pub friction: Vec2,

    mass: f32,
    pub gravity_scale: f32,
    pub allow_gravity: bool,

    pub physics_type: PhysicsType,
    /// Immovable bodies never receive position or velocity changes
    /// from the separation resolver, regardless of physics type
    pub immovable: bool,
    /// Immovable platforms with `moves` set carry riders along
    pub moves: bool,

    /// Per-step blocked snapshot (bounds + blocking pass)
    pub blocked: Blocked,
    pub touching: Touching,
    pub was_touching: Touching,
    pub check_collision: CollisionFaces,

    /// Opt out of the built-in separation resolver per axis
    pub custom_separate_x: bool,
    pub custom_separate_y: bool,

    /// Set by the overlap probes when penetration predates this step
    pub embedded: bool,

    pub collide_world_bounds: bool,
    /// World bounds snapshot used by `move_x`/`move_y`; kept in sync by
    /// the world when bounds change
    pub bounds: Option<RectBounds>,
}

impl Body {
    pub fn new(id: u32, x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            id,
            enable: true,
            pos: Vec2::new(x, y),
            prev: Vec2::new(x, y),
            width,
            height,
            velocity: Vec2::zero(),
            acceleration: Vec2::zero(),
            drag: Vec2::zero(),
            max_velocity: Vec2::new(10000.0, 10000.0),
            bounce: Vec2::zero(),
            friction: Vec2::new(1.0, 0.0),
            mass: 1.0,
            gravity_scale: 1.0,
            allow_gravity: true,
            physics_type: PhysicsType::Dynamic,
            immovable: false,
            moves: true,
            blocked: Blocked::default(),
            touching: Touching::default(),
            was_touching: Touching::default(),
            check_collision: CollisionFaces::default(),
            custom_separate_x: false,
            custom_separate_y: false,
            embedded: false,
            collide_world_bounds: false,
            bounds: None,
        }
    }

    pub fn new_static(id: u32, x: f32, y: f32, width: f32, height: f32) -> Self {
        let mut body = Self::new(id, x, y, width, height);
        body.physics_type = PhysicsType::Static;
        body.allow_gravity = false;
        body.moves = false;
        body
    }

    // === POSITION ===

    pub fn x(&self) -> f32 {
        self.pos.x
    }

    pub fn y(&self) -> f32 {
        self.pos.y
    }

    pub fn right(&self) -> f32 {
        self.pos.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.pos.y + self.height
    }

    pub fn set_x(&mut self, x: f32) {
        self.pos.x = x;
    }

    pub fn set_y(&mut self, y: f32) {
        self.pos.y = y;
    }

    pub fn set_right(&mut self, right: f32) {
        self.pos.x = right - self.width;
    }

    pub fn set_bottom(&mut self, bottom: f32) {
        self.pos.y = bottom - self.height;
    }

    // === MOTION QUERIES ===

    /// Signed distance moved along x this step
    pub fn delta_x(&self) -> f32 {
        self.pos.x - self.prev.x
    }

    /// Signed distance moved along y this step
    pub fn delta_y(&self) -> f32 {
        self.pos.y - self.prev.y
    }

    pub fn delta_abs_x(&self) -> f32 {
        self.delta_x().abs()
    }

    pub fn delta_abs_y(&self) -> f32 {
        self.delta_y().abs()
    }

    // === CLASSIFICATION ===

    pub fn is_immovable(&self) -> bool {
        self.physics_type == PhysicsType::Static || self.immovable
    }

    pub fn mass(&self) -> f32 {
        self.mass
    }

    /// Set mass, rejecting non-positive values at configuration time.
    /// The resolver divides by mass and does not defend against zero.
    pub fn set_mass(&mut self, mass: f32) {
        if mass < MIN_MASS {
            #[cfg(target_arch = "wasm32")]
            web_sys::console::warn_1(
                &format!("Body {}: mass {} clamped to {}", self.id, mass, MIN_MASS).into(),
            );
            self.mass = MIN_MASS;
        } else {
            self.mass = mass;
        }
    }

    // === MOVEMENT HELPERS ===

    /// Apply a requested x delta, clamped against the world bounds when
    /// `collide_world_bounds` is set. Returns the actually-applied delta.
    pub fn move_x(&mut self, amount: f32) -> f32 {
        if amount == 0.0 {
            return 0.0;
        }

        let mut applied = amount;

        if self.collide_world_bounds {
            if let Some(bounds) = self.bounds {
                let target = (self.pos.x + amount)
                    .clamp(bounds.x, bounds.right() - self.width);
                applied = target - self.pos.x;
            }
        }

        self.pos.x += applied;
        applied
    }

    /// Apply a requested y delta, clamped against the world bounds when
    /// `collide_world_bounds` is set. Returns the actually-applied delta.
    pub fn move_y(&mut self, amount: f32) -> f32 {
        if amount == 0.0 {
            return 0.0;
        }

        let mut applied = amount;

        if self.collide_world_bounds {
            if let Some(bounds) = self.bounds {
                let target = (self.pos.y + amount)
                    .clamp(bounds.y, bounds.bottom() - self.height);
                applied = target - self.pos.y;
            }
        }

        self.pos.y += applied;
        applied
    }

    // === INTERSECTION ===

    pub fn intersects(body1: &Body, body2: &Body) -> bool {
        body1.pos.x < body2.right()
            && body1.right() > body2.pos.x
            && body1.pos.y < body2.bottom()
            && body1.bottom() > body2.pos.y
    }

    /// Reset per-step contact state; called by the world at the start
    /// of every step
    pub fn reset_step_flags(&mut self) {
        self.was_touching = self.touching;
        self.touching.reset();
        self.blocked.reset();
        self.embedded = false;
    }
}
