//! Separation - overlap resolution between two rectangle bodies
//!
//! One resolver per axis, invoked once per overlapping pair per step by
//! the sequential pair loop. Each resolver queries the overlap probe for
//! the signed penetration and contact face, exchanges velocities using a
//! restitution-scaled elastic approximation, then repositions the bodies
//! consistently with the blocked state recorded by the bounds/blocking
//! passes earlier in the step.
//!
//! Both resolvers take exclusive `&mut` access to both bodies for the
//! duration of the call and mutate them in place. Because of that,
//! processing order across pairs in the same step is observable and is
//! part of the engine's contract.

mod overlap;
mod separate_x;
mod separate_y;

pub use overlap::{get_overlap_x, get_overlap_y};
pub use separate_x::separate_x;
pub use separate_y::separate_y;

/// Sign with zero treated as positive, so a non-moving body contributes
/// a non-negative root to the velocity exchange.
#[inline]
fn sign(v: f32) -> f32 {
    if v >= 0.0 {
        1.0
    } else {
        -1.0
    }
}

/// Direction a body moves during the unobstructed 50/50 split: opposite
/// to its own motion this step, falling back to the signed overlap
/// direction when it did not move at all.
#[inline]
fn separation_share(half: f32, delta: f32, overlap: f32) -> f32 {
    if delta > 0.0 {
        -half
    } else if delta < 0.0 {
        half
    } else {
        half * overlap.signum()
    }
}
