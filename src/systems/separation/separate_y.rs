//! Vertical axis separator
//!
//! The collision-response core: decides whether separation should occur
//! at all, computes post-collision velocities from a mass- and
//! restitution-weighted elastic approximation, and repositions the pair
//! consistently with the blocked state recorded earlier in the step.

use crate::domain::body::Body;
use crate::domain::types::{BlockState, Mobility};

use super::overlap::get_overlap_y;
use super::{separation_share, sign};

/// Resolve vertical overlap between two bodies.
///
/// `body1` is the priority body: it only breaks direction-convention
/// ties, it has no physical precedence. Returns true iff the bodies have
/// nonzero penetration along the axis, or both are flagged embedded.
///
/// Takes exclusive mutable access to both bodies for the duration of
/// the call; no other code may observe either body while it runs.
pub fn separate_y(body1: &mut Body, body2: &mut Body, overlap_only: bool, bias: f32) -> bool {
    let (overlap, face_top) = get_overlap_y(body1, body2, overlap_only, bias);

    let v1 = body1.velocity.y;
    let v2 = body2.velocity.y;

    let mobility = Mobility::classify(body1, body2);

    // Nothing to mutate: report-only mode, nothing to separate, a pair
    // that cannot move, or a body that separates itself.
    if overlap_only
        || overlap == 0.0
        || mobility == Mobility::BothImmovable
        || body1.custom_separate_y
        || body2.custom_separate_y
    {
        return overlap != 0.0 || (body1.embedded && body2.embedded);
    }

    // Proposed post-collision velocities. The position phase below may
    // still zero them when a body is pressed against a surface.
    let mut ny1 = v1;
    let mut ny2 = v2;

    match mobility {
        Mobility::BothMovable => {
            // Restitution-scaled elastic exchange weighted by mass.
            // Deliberately approximate: tuned for game feel, not for
            // physical accuracy.
            let mass1 = body1.mass();
            let mass2 = body2.mass();

            let mut nv1 = ((v2 * v2 * mass2) / mass1).sqrt() * sign(v2);
            let mut nv2 = ((v1 * v1 * mass1) / mass2).sqrt() * sign(v1);

            let avg = (nv1 + nv2) * 0.5;

            nv1 -= avg;
            nv2 -= avg;

            ny1 = avg + nv1 * body1.bounce.y;
            ny2 = avg + nv2 * body2.bounce.y;
        }
        Mobility::Body1Immovable => {
            // Body2 rebounds off the unmoving body1
            ny2 = v1 - v2 * body2.bounce.y;
        }
        Mobility::Body2Immovable => {
            ny1 = v2 - v1 * body1.bounce.y;
        }
        Mobility::BothImmovable => {}
    }

    match BlockState::classify(body1, body2) {
        BlockState::FreePair => {
            // The common unobstructed case: split the overlap 50/50.
            // An immovable body never yields, so its share goes to the
            // movable partner instead.
            let half = overlap.abs() * 0.5;

            let mut share1 = separation_share(half, body1.delta_y(), overlap);
            let mut share2 = separation_share(half, body2.delta_y(), overlap);

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

            body1.move_y(share1);
            body2.move_y(share2);
        }
        BlockState::Obstructed => {
            // Position was already constrained by the bounds/blocking
            // passes. Only snap a body against the partner that was
            // recorded as blocking it, in the direction it moved.
            let delta1 = body1.delta_y();
            if !body1.is_immovable() {
                if delta1 < 0.0 {
                    if body1.blocked.up && body1.blocked.by == Some(body2.id) {
                        snap_body1(body1, body2, face_top);
                        if ny1 < 0.0 {
                            ny1 = 0.0;
                        }
                    }
                } else if delta1 > 0.0 {
                    if body1.blocked.down && body1.blocked.by == Some(body2.id) {
                        snap_body1(body1, body2, face_top);
                        if ny1 > 0.0 {
                            ny1 = 0.0;
                        }
                        carry_along_x(body1, body2);
                    }
                } else {
                    // A resting body must not drift off the exchange
                    ny1 = 0.0;
                }
            }

            let delta2 = body2.delta_y();
            if !body2.is_immovable() {
                if delta2 < 0.0 {
                    if body2.blocked.up && body2.blocked.by == Some(body1.id) {
                        snap_body2(body1, body2, face_top);
                        if ny2 < 0.0 {
                            ny2 = 0.0;
                        }
                    }
                } else if delta2 > 0.0 {
                    if body2.blocked.down && body2.blocked.by == Some(body1.id) {
                        snap_body2(body1, body2, face_top);
                        if ny2 > 0.0 {
                            ny2 = 0.0;
                        }
                        carry_along_x(body2, body1);
                    }
                } else {
                    ny2 = 0.0;
                }
            }
        }
    }

    if !body1.is_immovable() {
        body1.velocity.y = ny1;
    }
    if !body2.is_immovable() {
        body2.velocity.y = ny2;
    }

    true
}

fn snap_body1(body1: &mut Body, body2: &Body, face_top: bool) {
    if face_top {
        body1.set_y(body2.bottom());
    } else {
        body1.set_bottom(body2.y());
    }
}

fn snap_body2(body1: &Body, body2: &mut Body, face_top: bool) {
    if face_top {
        body2.set_bottom(body1.y());
    } else {
        body2.set_y(body1.bottom());
    }
}

/// Riding a horizontally moving immovable platform: the rider inherits
/// the platform's horizontal delta scaled by the platform's friction.
/// Only the riding (blocked-down) contact carries; bonking the
/// underside of a platform does not.
fn carry_along_x(rider: &mut Body, platform: &Body) {
    if platform.is_immovable() && platform.moves {
        rider.pos.x += platform.delta_x() * platform.friction.x;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::vec2::Vec2;

    /// body1 fell onto body2 this step, 4px of penetration
    fn falling_pair() -> (Body, Body) {
        let mut body1 = Body::new(0, 0.0, 10.0, 10.0, 10.0);
        body1.prev.y = 6.0;
        body1.velocity.y = 4.0;
        let mut body2 = Body::new(1, 0.0, 16.0, 10.0, 10.0);
        body2.prev.y = 16.0;
        (body1, body2)
    }

    fn snapshot(body: &Body) -> (Vec2, Vec2) {
        (body.pos, body.velocity)
    }

    #[test]
    fn overlap_only_never_mutates() {
        let (mut body1, mut body2) = falling_pair();
        let before1 = snapshot(&body1);
        let before2 = snapshot(&body2);

        let hit = separate_y(&mut body1, &mut body2, true, 4.0);

        assert!(hit);
        assert_eq!(snapshot(&body1), before1);
        assert_eq!(snapshot(&body2), before2);
    }

    #[test]
    fn overlap_only_reports_false_without_contact() {
        let mut body1 = Body::new(0, 0.0, 0.0, 10.0, 10.0);
        let mut body2 = Body::new(1, 0.0, 50.0, 10.0, 10.0);
        assert!(!separate_y(&mut body1, &mut body2, true, 4.0));
    }

    #[test]
    fn both_immovable_never_mutates() {
        let (mut body1, mut body2) = falling_pair();
        body1.immovable = true;
        body2.immovable = true;
        let before1 = snapshot(&body1);
        let before2 = snapshot(&body2);

        let hit = separate_y(&mut body1, &mut body2, false, 4.0);

        assert!(hit);
        assert_eq!(snapshot(&body1), before1);
        assert_eq!(snapshot(&body2), before2);
    }

    #[test]
    fn custom_separation_opt_out_skips_mutation() {
        let (mut body1, mut body2) = falling_pair();
        body2.custom_separate_y = true;
        let before1 = snapshot(&body1);

        let hit = separate_y(&mut body1, &mut body2, false, 4.0);

        assert!(hit);
        assert_eq!(snapshot(&body1), before1);
    }

    #[test]
    fn equal_mass_zero_bounce_exchange_meets_in_the_middle() {
        // v1 = 3 falling, v2 = -2 rising, masses 1, bounce 0:
        // avg = (sqrt(4)*-1 + sqrt(9)*1) / 2 = 0.5
        let mut body1 = Body::new(0, 0.0, 10.0, 10.0, 10.0);
        body1.prev.y = 7.0;
        body1.velocity.y = 3.0;
        let mut body2 = Body::new(1, 0.0, 16.0, 10.0, 10.0);
        body2.prev.y = 18.0;
        body2.velocity.y = -2.0;

        let hit = separate_y(&mut body1, &mut body2, false, 4.0);

        assert!(hit);
        assert!((body1.velocity.y - 0.5).abs() < 1e-6);
        assert!((body2.velocity.y - 0.5).abs() < 1e-6);
    }

    #[test]
    fn immovable_body_keeps_its_velocity_exactly() {
        // Full-bounce rider on an unmoving platform rebounds at -5
        let mut platform = Body::new(0, 0.0, 20.0, 50.0, 10.0);
        platform.immovable = true;
        platform.prev.y = 20.0;

        let mut rider = Body::new(1, 0.0, 14.0, 10.0, 10.0);
        rider.prev.y = 10.0;
        rider.velocity.y = 5.0;
        rider.bounce.y = 1.0;

        let hit = separate_y(&mut rider, &mut platform, false, 4.0);

        assert!(hit);
        assert_eq!(rider.velocity.y, -5.0);
        assert_eq!(platform.velocity.y, 0.0);
        assert_eq!(platform.y(), 20.0);
    }

    #[test]
    fn unblocked_split_shares_the_overlap_evenly() {
        let (mut body1, mut body2) = falling_pair();
        body1.velocity.y = 0.0;

        let hit = separate_y(&mut body1, &mut body2, false, 4.0);

        assert!(hit);
        // 4px overlap: body1 moved up 2, stationary body2 moved down 2
        assert_eq!(body1.bottom(), 18.0);
        assert_eq!(body2.y(), 18.0);
    }

    #[test]
    fn blocked_snap_overrides_free_split() {
        let (mut body1, mut body2) = falling_pair();
        body1.blocked.down = true;
        body1.blocked.by = Some(body2.id);

        let hit = separate_y(&mut body1, &mut body2, false, 4.0);

        assert!(hit);
        // Exact edge contact, not an approximation
        assert_eq!(body1.bottom(), body2.y());
        // Approach velocity was still downward: zeroed, not reversed
        assert_eq!(body1.velocity.y, 0.0);
    }

    #[test]
    fn blocked_by_third_party_is_not_snapped() {
        let (mut body1, mut body2) = falling_pair();
        body1.blocked.down = true;
        body1.blocked.by = Some(99);
        let y_before = body1.y();

        let hit = separate_y(&mut body1, &mut body2, false, 4.0);

        assert!(hit);
        // Obstructed path, but the block belongs to another body: no
        // position correction beyond velocity adjustment
        assert_eq!(body1.y(), y_before);
    }

    #[test]
    fn bounce_already_applied_is_not_zeroed() {
        let (mut body1, mut body2) = falling_pair();
        body1.blocked.down = true;
        body1.blocked.by = Some(body2.id);
        body1.bounce.y = 1.0;
        body2.immovable = true;

        separate_y(&mut body1, &mut body2, false, 4.0);

        // ny1 = v2 - v1 * bounce = 0 - 4 = -4: already reversed, kept
        assert_eq!(body1.velocity.y, -4.0);
        assert_eq!(body1.bottom(), body2.y());
    }

    #[test]
    fn resting_body_in_obstructed_pair_does_not_drift() {
        let (mut body1, mut body2) = falling_pair();
        body2.prev.y = 16.0;
        body2.velocity.y = 0.0;
        body1.blocked.down = true;
        body1.blocked.by = Some(body2.id);

        separate_y(&mut body1, &mut body2, false, 4.0);

        // body2 had zero motion this step: no silent drift from the
        // exchange formula
        assert_eq!(body2.velocity.y, 0.0);
    }

    #[test]
    fn resolved_pair_is_idempotent() {
        let (mut body1, mut body2) = falling_pair();
        assert!(separate_y(&mut body1, &mut body2, false, 4.0));

        let before1 = snapshot(&body1);
        let before2 = snapshot(&body2);

        let hit = separate_y(&mut body1, &mut body2, false, 4.0);

        assert!(!hit);
        assert_eq!(snapshot(&body1), before1);
        assert_eq!(snapshot(&body2), before2);
    }

    #[test]
    fn rider_carried_along_by_moving_platform() {
        let mut platform = Body::new(0, 0.0, 20.0, 50.0, 10.0);
        platform.immovable = true;
        platform.prev.x = -3.0; // moved 3px right this step
        platform.friction.x = 1.0;

        let mut rider = Body::new(1, 10.0, 14.0, 10.0, 10.0);
        rider.prev.y = 10.0;
        rider.velocity.y = 5.0;
        rider.blocked.down = true;
        rider.blocked.by = Some(platform.id);

        separate_y(&mut rider, &mut platform, false, 4.0);

        assert_eq!(rider.bottom(), platform.y());
        assert_eq!(rider.x(), 13.0);
    }

    #[test]
    fn underside_bonk_is_not_carried_along() {
        let mut platform = Body::new(0, 0.0, 10.0, 50.0, 10.0);
        platform.immovable = true;
        platform.prev.x = -3.0; // moved 3px right this step

        let mut jumper = Body::new(1, 10.0, 16.0, 10.0, 10.0);
        jumper.prev.y = 22.0;
        jumper.velocity.y = -6.0;
        jumper.blocked.up = true;
        jumper.blocked.by = Some(platform.id);

        separate_y(&mut jumper, &mut platform, false, 4.0);

        // snapped under the platform, stopped, but not dragged sideways
        assert_eq!(jumper.y(), platform.bottom());
        assert_eq!(jumper.velocity.y, 0.0);
        assert_eq!(jumper.x(), 10.0);
    }

    #[test]
    fn embedded_pair_reports_overlap_without_mutation() {
        // Both stationary and intersecting: embedded, nothing to do
        let mut body1 = Body::new(0, 0.0, 10.0, 10.0, 10.0);
        let mut body2 = Body::new(1, 0.0, 15.0, 10.0, 10.0);
        let before1 = snapshot(&body1);

        let hit = separate_y(&mut body1, &mut body2, false, 4.0);

        assert!(hit);
        assert!(body1.embedded && body2.embedded);
        assert_eq!(snapshot(&body1), before1);
    }
}
