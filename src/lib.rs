//! Bubble Engine - rising, bouncing, colliding circles in WASM
//!
//! Architecture:
//! - core/        - logging macros, vector math
//! - domain/      - Particle, Color
//! - systems/     - pairwise collision detection and response
//! - render/      - Surface trait and its canvas/recording/null backends
//! - simulation/  - World: spawning, the tick, commands, settings, perf
//! - api/         - browser driver (frame loop, click removal)

// Logging macros (must be first for macro export!)
#[macro_use]
pub mod core;
pub mod domain;
pub mod systems;
pub mod render;
pub mod simulation;
pub mod api;

use wasm_bindgen::prelude::*;

#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    console_log!("🫧 Bubble WASM Engine v{} initialized", env!("CARGO_PKG_VERSION"));
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// Re-export main types
pub use api::{start, Animation};
pub use domain::{Bounds, Color, DrawStyle, Particle};
pub use render::{RecordingSurface, Surface};
pub use simulation::{PerfStats, SimulationSettings, World, WorldCore};
