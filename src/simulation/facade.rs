use wasm_bindgen::prelude::*;
use web_sys::CanvasRenderingContext2d;

use crate::render::NullSurface;

use super::perf_stats::PerfStats;
use super::WorldCore;

#[wasm_bindgen]
pub struct World {
    core: WorldCore,
}

#[wasm_bindgen]
impl World {
    /// Create a new world with given dimensions
    #[wasm_bindgen(constructor)]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            core: WorldCore::new(width, height),
        }
    }

    /// Create a world from a JSON settings object (see `SimulationSettings`)
    #[wasm_bindgen(js_name = withSettings)]
    pub fn with_settings(width: u32, height: u32, json: String) -> Result<World, JsValue> {
        let core = WorldCore::from_settings_json(width, height, &json).map_err(|e| JsValue::from_str(&e))?;
        Ok(Self { core })
    }

    #[wasm_bindgen(getter)]
    pub fn width(&self) -> f64 { self.core.width() }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> f64 { self.core.height() }

    #[wasm_bindgen(getter)]
    pub fn particle_count(&self) -> u32 { self.core.particle_count() as u32 }

    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> u64 { self.core.frame() }

    /// Number of particles the host should generate at startup
    #[wasm_bindgen(getter)]
    pub fn initial_count(&self) -> u32 { self.core.settings().initial_count }

    /// Enable or disable per-step perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        self.core.enable_perf_metrics(enabled);
    }

    /// Get last step perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        self.core.get_perf_stats()
    }

    /// Spawn `n` particles below the bottom edge
    pub fn generate(&mut self, n: u32) {
        self.core.generate(n);
    }

    /// Run one tick and draw it onto `ctx`
    pub fn step(&mut self, ctx: &CanvasRenderingContext2d) {
        let mut ctx = ctx.clone();
        self.core.step(&mut ctx);
    }

    /// Run one tick without drawing
    pub fn step_headless(&mut self) {
        self.core.step(&mut NullSurface);
    }

    /// Remove particles under a click. Returns how many were removed.
    pub fn remove_at(&mut self, x: f64, y: f64) -> u32 {
        self.core.remove_at(x, y) as u32
    }

    /// Clear all particles
    pub fn clear(&mut self) {
        self.core.clear();
    }

    /// JSON snapshot of every particle, in draw order
    pub fn particles_json(&self) -> Result<String, JsValue> {
        self.core.snapshot_json().map_err(|e| JsValue::from_str(&e))
    }

    /// Active settings as JSON
    pub fn settings_json(&self) -> Result<String, JsValue> {
        self.core.settings().to_json().map_err(|e| JsValue::from_str(&e))
    }

    /// Background color for the host to paint behind the canvas
    pub fn background_css(&self) -> String {
        self.core.settings().background.to_css()
    }
}

impl World {
    pub fn core(&self) -> &WorldCore {
        &self.core
    }

    pub fn core_mut(&mut self) -> &mut WorldCore {
        &mut self.core
    }
}
