use crate::domain::body::Body;

use super::{ColliderPair, WorldCore};

pub(super) fn spawn_body(world: &mut WorldCore, x: f32, y: f32, width: f32, height: f32) -> u32 {
    let id = world.bodies.len() as u32;
    let mut body = Body::new(id, x, y, width, height);
    body.bounds = Some(world.settings.bounds);
    world.bodies.push(body);
    id
}

pub(super) fn spawn_static_body(
    world: &mut WorldCore,
    x: f32,
    y: f32,
    width: f32,
    height: f32,
) -> u32 {
    let id = world.bodies.len() as u32;
    let mut body = Body::new_static(id, x, y, width, height);
    body.bounds = Some(world.settings.bounds);
    world.bodies.push(body);
    id
}

/// Ids are Vec indices, so removal only disables the slot. Colliders
/// referencing the body stay registered and are skipped by the step.
pub(super) fn remove_body(world: &mut WorldCore, id: u32) {
    if let Some(body) = world.bodies.get_mut(id as usize) {
        body.enable = false;
    }
}

pub(super) fn add_pair(world: &mut WorldCore, a: u32, b: u32, overlap_only: bool) -> bool {
    if a == b {
        return false;
    }
    let valid = world.bodies.get(a as usize).is_some() && world.bodies.get(b as usize).is_some();
    if !valid {
        return false;
    }
    world.colliders.push(ColliderPair { a, b, overlap_only, enable: true });
    true
}

pub(super) fn clear(world: &mut WorldCore) {
    world.bodies.clear();
    world.colliders.clear();
    world.events.begin_frame();
    world.frame = 0;
}
