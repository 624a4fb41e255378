//! World bounds pass - clamp, rebound and record blocked state
//!
//! Runs after integration and before separation. A body pushed outside
//! the world rectangle is clamped back onto the edge, its velocity is
//! rebounded with the world bounce (falling back to the body's own
//! bounce), and the matching `blocked` flag is raised for this step
//! with no blocking body (`by = None` means "the world").

use crate::domain::body::Body;
use crate::domain::settings::WorldSettings;

pub fn check_world_bounds(body: &mut Body, settings: &WorldSettings) {
    if !body.enable || !body.collide_world_bounds || body.is_immovable() {
        return;
    }

    let bounds = settings.bounds;
    let bounce_x = if settings.world_bounce_x > 0.0 {
        settings.world_bounce_x
    } else {
        body.bounce.x
    };
    let bounce_y = if settings.world_bounce_y > 0.0 {
        settings.world_bounce_y
    } else {
        body.bounce.y
    };

    if body.x() < bounds.x && settings.check_left {
        body.set_x(bounds.x);
        body.velocity.x = -body.velocity.x * bounce_x;
        body.blocked.left = true;
        body.blocked.by = None;
    } else if body.right() > bounds.right() && settings.check_right {
        body.set_right(bounds.right());
        body.velocity.x = -body.velocity.x * bounce_x;
        body.blocked.right = true;
        body.blocked.by = None;
    }

    if body.y() < bounds.y && settings.check_up {
        body.set_y(bounds.y);
        body.velocity.y = -body.velocity.y * bounce_y;
        body.blocked.up = true;
        body.blocked.by = None;
    } else if body.bottom() > bounds.bottom() && settings.check_down {
        body.set_bottom(bounds.bottom());
        body.velocity.y = -body.velocity.y * bounce_y;
        body.blocked.down = true;
        body.blocked.by = None;
    }
}
