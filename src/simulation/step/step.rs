//! Per-step pipeline
//!
//! Fixed pass order, all sequential:
//!
//! 1. reset per-step contact flags
//! 2. integrate motion (gravity, drag, velocity)
//! 3. world bounds (clamp + rebound + blocked flags)
//! 4. blocking pass over the candidate pairs
//! 5. separation, x axis first, then y
//! 6. event recording
//!
//! The blocking pass must see post-bounds positions and the separation
//! pass must see the full blocked snapshot, so the order is load-bearing.

use crate::core::vec2::Vec2;
use crate::domain::body::Body;
use crate::systems::blocking::record_pair_blocks;
use crate::systems::bounds::check_world_bounds;
use crate::systems::motion::integrate;
use crate::systems::separation::{separate_x, separate_y};

use super::events::EventKind;
use super::{PerfTimer, WorldCore};

/// Candidate pair resolved to body indices for this step
struct Candidate {
    a: usize,
    b: usize,
    overlap_only: bool,
}

pub(super) fn step(world: &mut WorldCore, dt: f32) {
    let perf_on = world.perf_enabled;
    if perf_on {
        world.perf_stats.reset();
        world.perf_stats.body_count = world.body_count();
    }
    let step_start = if perf_on { Some(PerfTimer::start()) } else { None };

    world.events.begin_frame();

    for body in &mut world.bodies {
        if body.enable {
            body.reset_step_flags();
        }
    }

    // === MOTION ===
    let gravity = Vec2::new(world.settings.gravity_x, world.settings.gravity_y);
    if perf_on {
        let t0 = PerfTimer::start();
        integrate_all(world, gravity, dt);
        world.perf_stats.integrate_ms = t0.elapsed_ms();
    } else {
        integrate_all(world, gravity, dt);
    }

    // === WORLD BOUNDS ===
    if perf_on {
        let t0 = PerfTimer::start();
        bounds_all(world);
        world.perf_stats.bounds_ms = t0.elapsed_ms();
    } else {
        bounds_all(world);
    }

    let candidates = collect_candidates(world);

    // === BLOCKING PASS ===
    // Both directions of every separating pair, so chains of resting
    // bodies propagate the block before any position is corrected.
    if perf_on {
        let t0 = PerfTimer::start();
        blocking_pass(world, &candidates);
        world.perf_stats.blocking_ms = t0.elapsed_ms();
    } else {
        blocking_pass(world, &candidates);
    }

    // === SEPARATION ===
    if perf_on {
        let t0 = PerfTimer::start();
        separation_pass(world, &candidates);
        world.perf_stats.separate_ms = t0.elapsed_ms();
    } else {
        separation_pass(world, &candidates);
    }

    if perf_on {
        world.perf_stats.pairs_tested = candidates.len() as u32;
        world.perf_stats.event_count = world.events.len() as u32;
        if let Some(t) = step_start {
            world.perf_stats.step_ms = t.elapsed_ms();
        }
    }

    world.frame += 1;
}

fn integrate_all(world: &mut WorldCore, gravity: Vec2, dt: f32) {
    for body in &mut world.bodies {
        if body.enable {
            integrate(body, gravity, dt);
        }
    }
}

fn bounds_all(world: &mut WorldCore) {
    for body in &mut world.bodies {
        check_world_bounds(body, &world.settings);
    }
}

/// Resolve the pair list for this step. With `collide_all` set, every
/// enabled pair is a separating candidate and the collider list is
/// ignored; explicit registration wins otherwise.
fn collect_candidates(world: &WorldCore) -> Vec<Candidate> {
    let mut candidates = Vec::new();

    if world.settings.collide_all {
        for a in 0..world.bodies.len() {
            if !world.bodies[a].enable {
                continue;
            }
            for b in (a + 1)..world.bodies.len() {
                if world.bodies[b].enable {
                    candidates.push(Candidate { a, b, overlap_only: false });
                }
            }
        }
        return candidates;
    }

    for pair in &world.colliders {
        if !pair.enable {
            continue;
        }
        let (a, b) = (pair.a as usize, pair.b as usize);
        if a == b || a >= world.bodies.len() || b >= world.bodies.len() {
            continue;
        }
        if world.bodies[a].enable && world.bodies[b].enable {
            candidates.push(Candidate { a, b, overlap_only: pair.overlap_only });
        }
    }

    candidates
}

fn blocking_pass(world: &mut WorldCore, candidates: &[Candidate]) {
    for candidate in candidates {
        if candidate.overlap_only {
            continue;
        }
        let Some((body_a, body_b)) = pair_mut(&mut world.bodies, candidate.a, candidate.b)
        else {
            continue;
        };
        record_pair_blocks(body_a, body_b);
        record_pair_blocks(body_b, body_a);
    }
}

fn separation_pass(world: &mut WorldCore, candidates: &[Candidate]) {
    let bias = world.settings.overlap_bias;
    for candidate in candidates {
        let Some((body_a, body_b)) = pair_mut(&mut world.bodies, candidate.a, candidate.b)
        else {
            continue;
        };

        let touched_x = separate_x(body_a, body_b, candidate.overlap_only, bias);
        let touched_y = separate_y(body_a, body_b, candidate.overlap_only, bias);
        let (id_a, id_b) = (body_a.id, body_b.id);

        if touched_x || touched_y {
            if candidate.overlap_only {
                if world.perf_enabled {
                    world.perf_stats.overlaps += 1;
                }
                world.events.push(EventKind::Overlap, id_a, id_b);
            } else {
                if world.perf_enabled {
                    world.perf_stats.collisions += 1;
                }
                world.events.push(EventKind::Collide, id_a, id_b);
            }
        }
    }
}

/// Borrow two distinct bodies mutably out of the store.
fn pair_mut(bodies: &mut [Body], a: usize, b: usize) -> Option<(&mut Body, &mut Body)> {
    if a == b || a >= bodies.len() || b >= bodies.len() {
        return None;
    }
    if a < b {
        let (left, right) = bodies.split_at_mut(b);
        Some((&mut left[a], &mut right[0]))
    } else {
        let (left, right) = bodies.split_at_mut(a);
        Some((&mut right[0], &mut left[b]))
    }
}
