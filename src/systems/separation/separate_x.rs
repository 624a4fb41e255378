//! Horizontal axis separator
//!
//! Mirror of `separate_y` on the orthogonal axis: left/right faces,
//! `blocked.left`/`blocked.right`, `bounce.x`, and a vertical
//! carry-along for riders of vertically moving immovable platforms.

use crate::domain::body::Body;
use crate::domain::types::{BlockState, Mobility};

use super::overlap::get_overlap_x;
use super::{separation_share, sign};

/// Resolve horizontal overlap between two bodies.
///
/// Same contract as `separate_y`: exclusive mutable access to both
/// bodies, true iff nonzero penetration or both embedded.
pub fn separate_x(body1: &mut Body, body2: &mut Body, overlap_only: bool, bias: f32) -> bool {
    let (overlap, face_left) = get_overlap_x(body1, body2, overlap_only, bias);

    let v1 = body1.velocity.x;
    let v2 = body2.velocity.x;

    let mobility = Mobility::classify(body1, body2);

    if overlap_only
        || overlap == 0.0
        || mobility == Mobility::BothImmovable
        || body1.custom_separate_x
        || body2.custom_separate_x
    {
        return overlap != 0.0 || (body1.embedded && body2.embedded);
    }

    let mut nx1 = v1;
    let mut nx2 = v2;

    match mobility {
        Mobility::BothMovable => {
            let mass1 = body1.mass();
            let mass2 = body2.mass();

            let mut nv1 = ((v2 * v2 * mass2) / mass1).sqrt() * sign(v2);
            let mut nv2 = ((v1 * v1 * mass1) / mass2).sqrt() * sign(v1);

            let avg = (nv1 + nv2) * 0.5;

            nv1 -= avg;
            nv2 -= avg;

            nx1 = avg + nv1 * body1.bounce.x;
            nx2 = avg + nv2 * body2.bounce.x;
        }
        Mobility::Body1Immovable => {
            nx2 = v1 - v2 * body2.bounce.x;
        }
        Mobility::Body2Immovable => {
            nx1 = v2 - v1 * body1.bounce.x;
        }
        Mobility::BothImmovable => {}
    }

    match BlockState::classify(body1, body2) {
        BlockState::FreePair => {
            let half = overlap.abs() * 0.5;

            let mut share1 = separation_share(half, body1.delta_x(), overlap);
            let mut share2 = separation_share(half, body2.delta_x(), overlap);

            match mobility {
                Mobility::Body1Immovable => {
                    share2 *= 2.0;
                    share1 = 0.0;
                }
                Mobility::Body2Immovable => {
                    share1 *= 2.0;
                    share2 = 0.0;
                }
                _ => {}
            }

            body1.move_x(share1);
            body2.move_x(share2);
        }
        BlockState::Obstructed => {
            let delta1 = body1.delta_x();
            if !body1.is_immovable() {
                if delta1 < 0.0 {
                    if body1.blocked.left && body1.blocked.by == Some(body2.id) {
                        snap_body1(body1, body2, face_left);
                        if nx1 < 0.0 {
                            nx1 = 0.0;
                        }
                        carry_along_y(body1, body2);
                    }
                } else if delta1 > 0.0 {
                    if body1.blocked.right && body1.blocked.by == Some(body2.id) {
                        snap_body1(body1, body2, face_left);
                        if nx1 > 0.0 {
                            nx1 = 0.0;
                        }
                        carry_along_y(body1, body2);
                    }
                } else {
                    nx1 = 0.0;
                }
            }

            let delta2 = body2.delta_x();
            if !body2.is_immovable() {
                if delta2 < 0.0 {
                    if body2.blocked.left && body2.blocked.by == Some(body1.id) {
                        snap_body2(body1, body2, face_left);
                        if nx2 < 0.0 {
                            nx2 = 0.0;
                        }
                        carry_along_y(body2, body1);
                    }
                } else if delta2 > 0.0 {
                    if body2.blocked.right && body2.blocked.by == Some(body1.id) {
                        snap_body2(body1, body2, face_left);
                        if nx2 > 0.0 {
                            nx2 = 0.0;
                        }
                        carry_along_y(body2, body1);
                    }
                } else {
                    nx2 = 0.0;
                }
            }
        }
    }

    if !body1.is_immovable() {
        body1.velocity.x = nx1;
    }
    if !body2.is_immovable() {
        body2.velocity.x = nx2;
    }

    true
}

fn snap_body1(body1: &mut Body, body2: &Body, face_left: bool) {
    if face_left {
        body1.set_x(body2.right());
    } else {
        body1.set_right(body2.x());
    }
}

fn snap_body2(body1: &Body, body2: &mut Body, face_left: bool) {
    if face_left {
        body2.set_right(body1.x());
    } else {
        body2.set_x(body1.right());
    }
}

/// Riding a vertically moving immovable platform (elevator walls):
/// the rider inherits the platform's vertical delta scaled by the
/// platform's friction.
fn carry_along_y(rider: &mut Body, platform: &Body) {
    if platform.is_immovable() && platform.moves {
        rider.pos.y += platform.delta_y() * platform.friction.y;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// body1 moved right into body2 this step, 4px of penetration
    fn pushing_pair() -> (Body, Body) {
        let mut body1 = Body::new(0, 10.0, 0.0, 10.0, 10.0);
        body1.prev.x = 6.0;
        body1.velocity.x = 4.0;
        let body2 = Body::new(1, 16.0, 0.0, 10.0, 10.0);
        (body1, body2)
    }

    #[test]
    fn overlap_only_never_mutates() {
        let (mut body1, mut body2) = pushing_pair();
        let pos = body1.pos;
        let vel = body1.velocity;

        assert!(separate_x(&mut body1, &mut body2, true, 4.0));
        assert_eq!(body1.pos, pos);
        assert_eq!(body1.velocity, vel);
    }

    #[test]
    fn unblocked_split_shares_the_overlap_evenly() {
        let (mut body1, mut body2) = pushing_pair();

        assert!(separate_x(&mut body1, &mut body2, false, 4.0));
        assert_eq!(body1.right(), 18.0);
        assert_eq!(body2.x(), 18.0);
    }

    #[test]
    fn wall_stops_body_against_it() {
        let (mut body1, mut body2) = pushing_pair();
        body2.immovable = true;
        body1.blocked.right = true;
        body1.blocked.by = Some(body2.id);

        separate_x(&mut body1, &mut body2, false, 4.0);

        assert_eq!(body1.right(), body2.x());
        assert_eq!(body1.velocity.x, 0.0);
        assert_eq!(body2.velocity.x, 0.0);
    }

    #[test]
    fn leftward_contact_snaps_to_the_right_edge() {
        let mut body1 = Body::new(0, 16.0, 0.0, 10.0, 10.0);
        body1.prev.x = 20.0;
        body1.velocity.x = -4.0;
        let mut body2 = Body::new(1, 10.0, 0.0, 10.0, 10.0);
        body2.immovable = true;
        body1.blocked.left = true;
        body1.blocked.by = Some(body2.id);

        separate_x(&mut body1, &mut body2, false, 4.0);

        assert_eq!(body1.x(), body2.right());
        assert_eq!(body1.velocity.x, 0.0);
    }

    #[test]
    fn resolved_pair_is_idempotent() {
        let (mut body1, mut body2) = pushing_pair();
        assert!(separate_x(&mut body1, &mut body2, false, 4.0));

        let pos1 = body1.pos;
        let pos2 = body2.pos;

        assert!(!separate_x(&mut body1, &mut body2, false, 4.0));
        assert_eq!(body1.pos, pos1);
        assert_eq!(body2.pos, pos2);
    }
}
