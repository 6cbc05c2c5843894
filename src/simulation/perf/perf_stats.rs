use wasm_bindgen::prelude::*;

/// Timings and counters for the last step
#[wasm_bindgen]
#[derive(Clone, Debug, Default)]
pub struct PerfStats {
    pub(super) step_ms: f64,
    pub(super) advance_ms: f64,
    pub(super) collision_ms: f64,
    pub(super) reset_ms: f64,
    pub(super) particle_count: u32,
    pub(super) pairs_checked: u32,
    pub(super) collisions_resolved: u32,
    pub(super) corrections_skipped: u32,
    pub(super) draw_failures: u32,
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
    /// Advance + draw pass
    #[wasm_bindgen(getter)]
    pub fn advance_ms(&self) -> f64 { self.advance_ms }
    #[wasm_bindgen(getter)]
    pub fn collision_ms(&self) -> f64 { self.collision_ms }
    #[wasm_bindgen(getter)]
    pub fn reset_ms(&self) -> f64 { self.reset_ms }
    #[wasm_bindgen(getter)]
    pub fn particle_count(&self) -> u32 { self.particle_count }
    #[wasm_bindgen(getter)]
    pub fn pairs_checked(&self) -> u32 { self.pairs_checked }
    #[wasm_bindgen(getter)]
    pub fn collisions_resolved(&self) -> u32 { self.collisions_resolved }
    /// Collisions where the pair was touching or concentric, so no push-apart
    #[wasm_bindgen(getter)]
    pub fn corrections_skipped(&self) -> u32 { self.corrections_skipped }
    #[wasm_bindgen(getter)]
    pub fn draw_failures(&self) -> u32 { self.draw_failures }
}
