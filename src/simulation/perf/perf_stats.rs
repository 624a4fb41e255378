use wasm_bindgen::prelude::*;

/// Per-step timing and counter snapshot; zeros when perf is disabled.
#[wasm_bindgen]
#[derive(Clone, Default)]
pub struct PerfStats {
    pub(crate) step_ms: f64,
    pub(crate) integrate_ms: f64,
    pub(crate) bounds_ms: f64,
    pub(crate) blocking_ms: f64,
    pub(crate) separate_ms: f64,
    pub(crate) pairs_tested: u32,
    pub(crate) collisions: u32,
    pub(crate) overlaps: u32,
    pub(crate) body_count: u32,
    pub(crate) event_count: u32,
}

impl PerfStats {
    pub(crate) fn reset(&mut self) {
        *self = PerfStats::default();
    }
}

#[wasm_bindgen]
impl PerfStats {
    #[wasm_bindgen(getter)]
    pub fn step_ms(&self) -> f64 { self.step_ms }
    #[wasm_bindgen(getter)]
    pub fn integrate_ms(&self) -> f64 { self.integrate_ms }
    #[wasm_bindgen(getter)]
    pub fn bounds_ms(&self) -> f64 { self.bounds_ms }
    #[wasm_bindgen(getter)]
    pub fn blocking_ms(&self) -> f64 { self.blocking_ms }
    #[wasm_bindgen(getter)]
    pub fn separate_ms(&self) -> f64 { self.separate_ms }
    #[wasm_bindgen(getter)]
    pub fn pairs_tested(&self) -> u32 { self.pairs_tested }
    #[wasm_bindgen(getter)]
    pub fn collisions(&self) -> u32 { self.collisions }
    #[wasm_bindgen(getter)]
    pub fn overlaps(&self) -> u32 { self.overlaps }
    #[wasm_bindgen(getter)]
    pub fn body_count(&self) -> u32 { self.body_count }
    #[wasm_bindgen(getter)]
    pub fn event_count(&self) -> u32 { self.event_count }
}
