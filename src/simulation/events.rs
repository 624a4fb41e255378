//! Collision events - per-step contact reporting
//!
//! The pair loop records one event per touching pair per step; the
//! buffer is cleared at the start of every step and drained by the
//! caller (as JSON on the JS side).

use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EventKind {
    /// Pair was separated this step
    Collide,
    /// Pair overlapped in report-only mode
    Overlap,
}

#[derive(Clone, Copy, Debug, Serialize)]
pub struct CollisionEvent {
    pub kind: EventKind,
    /// Body ids, in registration order of the pair
    pub a: u32,
    pub b: u32,
}

#[derive(Default)]
pub struct EventBuffer {
    events: Vec<CollisionEvent>,
}

impl EventBuffer {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn begin_frame(&mut self) {
        self.events.clear();
    }

    pub fn push(&mut self, kind: EventKind, a: u32, b: u32) {
        self.events.push(CollisionEvent { kind, a, b });
    }

    pub fn events(&self) -> &[CollisionEvent] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(&self.events).unwrap_or_else(|_| "[]".to_string())
    }
}
