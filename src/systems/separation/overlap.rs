//! Overlap probes - signed penetration depth and contact face per axis
//!
//! Pure queries except for the documented flag bookkeeping: touching
//! flags on accepted contact, `embedded` when the penetration predates
//! this step's motion. The `max_overlap` guard (sum of both per-step
//! deltas plus the bias) rejects penetrations too deep to have happened
//! this step; outside overlap-only mode those flag both bodies as
//! embedded instead of producing a huge correction.

use crate::domain::body::Body;

/// Signed vertical overlap between two bodies.
///
/// Returns `(overlap, face_top)`. `face_top` is true when body1's top
/// face is the contact face (body1 rising into body2); the overlap is
/// then negative. When body1's bottom face is in contact the overlap is
/// positive.
pub fn get_overlap_y(
    body1: &mut Body,
    body2: &mut Body,
    overlap_only: bool,
    bias: f32,
) -> (f32, bool) {
    if !Body::intersects(body1, body2) {
        return (0.0, false);
    }

    let mut overlap = 0.0;
    let mut face_top = false;
    let max_overlap = body1.delta_abs_y() + body2.delta_abs_y() + bias;

    let delta1 = body1.delta_y();
    let delta2 = body2.delta_y();

    if delta1 == 0.0 && delta2 == 0.0 {
        // Overlapping but neither body moved this step
        body1.embedded = true;
        body2.embedded = true;
    } else if delta1 > delta2 {
        // Body1 is moving down relative to body2: contact is body1's
        // bottom face against body2's top face
        overlap = body1.bottom() - body2.y();

        if overlap > max_overlap && !overlap_only {
            body1.embedded = true;
            body2.embedded = true;
            overlap = 0.0;
        } else if !body1.check_collision.down || !body2.check_collision.up {
            overlap = 0.0;
        } else {
            body1.touching.none = false;
            body1.touching.down = true;
            body2.touching.none = false;
            body2.touching.up = true;
        }
    } else {
        // Body1 is moving up relative to body2: contact is body1's top
        // face against body2's bottom face
        face_top = true;
        overlap = -(body2.bottom() - body1.y());

        if -overlap > max_overlap && !overlap_only {
            body1.embedded = true;
            body2.embedded = true;
            overlap = 0.0;
        } else if !body1.check_collision.up || !body2.check_collision.down {
            overlap = 0.0;
        } else {
            body1.touching.none = false;
            body1.touching.up = true;
            body2.touching.none = false;
            body2.touching.down = true;
        }
    }

    (overlap, face_top)
}

/// Signed horizontal overlap between two bodies.
///
/// Returns `(overlap, face_left)`. `face_left` is true when body1's
/// left face is the contact face (body1 moving left into body2); the
/// overlap is then negative.
pub fn get_overlap_x(
    body1: &mut Body,
    body2: &mut Body,
    overlap_only: bool,
    bias: f32,
) -> (f32, bool) {
    if !Body::intersects(body1, body2) {
        return (0.0, false);
    }

    let mut overlap = 0.0;
    let mut face_left = false;
    let max_overlap = body1.delta_abs_x() + body2.delta_abs_x() + bias;

    let delta1 = body1.delta_x();
    let delta2 = body2.delta_x();

    if delta1 == 0.0 && delta2 == 0.0 {
        body1.embedded = true;
        body2.embedded = true;
    } else if delta1 > delta2 {
        // Body1 moving right relative to body2
        overlap = body1.right() - body2.x();

        if overlap > max_overlap && !overlap_only {
            body1.embedded = true;
            body2.embedded = true;
            overlap = 0.0;
        } else if !body1.check_collision.right || !body2.check_collision.left {
            overlap = 0.0;
        } else {
            body1.touching.none = false;
            body1.touching.right = true;
            body2.touching.none = false;
            body2.touching.left = true;
        }
    } else {
        // Body1 moving left relative to body2
        face_left = true;
        overlap = -(body2.right() - body1.x());

        if -overlap > max_overlap && !overlap_only {
            body1.embedded = true;
            body2.embedded = true;
            overlap = 0.0;
        } else if !body1.check_collision.left || !body2.check_collision.right {
            overlap = 0.0;
        } else {
            body1.touching.none = false;
            body1.touching.left = true;
            body2.touching.none = false;
            body2.touching.right = true;
        }
    }

    (overlap, face_left)
}
