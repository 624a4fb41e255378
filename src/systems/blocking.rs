//! Blocking pass - record "blocked by partner" state for body pairs
//!
//! Runs after the world bounds pass and before separation. A body
//! pressing into a partner that cannot yield in that direction (the
//! partner is immovable, or was itself blocked on its far side) cannot
//! move further: the matching `blocked` flag is raised with a reference
//! to the blocking body. The separation resolver consumes this snapshot
//! to snap edges exactly instead of splitting the overlap.

use crate::domain::body::Body;

/// Record directional blocks on `body` caused by `partner`.
///
/// Called once per ordered direction of every candidate pair; pure
/// per-step bookkeeping, positions are not touched here.
pub fn record_pair_blocks(body: &mut Body, partner: &Body) {
    if body.is_immovable() || !Body::intersects(body, partner) {
        return;
    }

    let body_cx = body.x() + body.width * 0.5;
    let body_cy = body.y() + body.height * 0.5;
    let partner_cx = partner.x() + partner.width * 0.5;
    let partner_cy = partner.y() + partner.height * 0.5;

    let dy = body.delta_y();
    if dy > 0.0 && partner_cy > body_cy && (partner.is_immovable() || partner.blocked.down) {
        body.blocked.down = true;
        body.blocked.by = Some(partner.id);
    } else if dy < 0.0 && partner_cy < body_cy && (partner.is_immovable() || partner.blocked.up) {
        body.blocked.up = true;
        body.blocked.by = Some(partner.id);
    }

    let dx = body.delta_x();
    if dx > 0.0 && partner_cx > body_cx && (partner.is_immovable() || partner.blocked.right) {
        body.blocked.right = true;
        body.blocked.by = Some(partner.id);
    } else if dx < 0.0 && partner_cx < body_cx && (partner.is_immovable() || partner.blocked.left) {
        body.blocked.left = true;
        body.blocked.by = Some(partner.id);
    }
}
