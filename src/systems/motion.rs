//! Motion integration - per-step Euler update
//!
//! Applies gravity, acceleration, drag and the per-axis speed cap, then
//! advances position. The previous position snapshot taken here is what
//! the separation pass later reads as "motion this step".

use crate::core::vec2::Vec2;
use crate::domain::body::Body;
use crate::domain::types::PhysicsType;

pub fn integrate(body: &mut Body, gravity: Vec2, dt: f32) {
    if !body.enable {
        return;
    }

    body.prev = body.pos;

    if body.physics_type != PhysicsType::Dynamic || !body.moves {
        return;
    }

    let mut accel = body.acceleration;
    if body.allow_gravity {
        accel += gravity * body.gravity_scale;
    }

    body.velocity += accel * dt;

    // Drag only decelerates axes without acceleration input
    if body.acceleration.x == 0.0 && body.drag.x > 0.0 {
        body.velocity.x = decelerate(body.velocity.x, body.drag.x * dt);
    }
    if body.acceleration.y == 0.0 && body.drag.y > 0.0 {
        body.velocity.y = decelerate(body.velocity.y, body.drag.y * dt);
    }

    body.velocity = body.velocity.clamp_axes(body.max_velocity);
    body.pos += body.velocity * dt;
}

fn decelerate(velocity: f32, amount: f32) -> f32 {
    if velocity > 0.0 {
        (velocity - amount).max(0.0)
    } else {
        (velocity + amount).min(0.0)
    }
}
