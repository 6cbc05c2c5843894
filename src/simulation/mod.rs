//! World - owns the particles and runs one tick at a time
//!
//! WorldCore only orchestrates; the work lives next to it:
//! - step/      - the tick (advance + draw, pair scan, visual reset)
//! - spawn/     - randomized particle construction
//! - commands/  - click removal, clear
//! - init/      - construction, settings, RNG
//! - perf/      - opt-in per-step metrics
//! - snapshot/  - serde views of the world
//!
//! Nothing here is global: the host owns a WorldCore (or the wasm `World`
//! facade) and calls `step` once per display refresh. Removal takes
//! `&mut self` like `step` does, so it can never land in the middle of a tick.

use crate::domain::{Bounds, DrawStyle, Particle};
use crate::render::Surface;

#[path = "perf/perf_timer.rs"]
mod perf_timer;
#[path = "perf/perf_stats.rs"]
mod perf_stats;
#[path = "init/random.rs"]
mod random;
#[path = "init/init.rs"]
mod init;
#[path = "init/settings.rs"]
mod settings;
#[path = "spawn/spawner.rs"]
mod spawner;
#[path = "step/step.rs"]
mod step;
#[path = "commands/commands.rs"]
mod commands;
#[path = "snapshot/snapshot.rs"]
mod snapshot;
mod facade;

pub use facade::World;
pub use perf_stats::PerfStats;
pub use random::Xorshift32;
pub use settings::SimulationSettings;
pub use snapshot::{ParticleSnapshot, WorldSnapshot};
pub use step::{scan_pairs, PairScan};

use perf_timer::PerfTimer;

/// The simulation world
pub struct WorldCore {
    bounds: Bounds,
    /// Draw order and pair-scan order
    particles: Vec<Particle>,
    settings: SimulationSettings,
    style: DrawStyle,

    // State
    rng: Xorshift32,
    next_label: u32,
    frame: u64,

    // Perf metrics
    perf_enabled: bool,
    perf_stats: PerfStats,
}

impl WorldCore {
    /// Create an empty world with default settings
    pub fn new(width: u32, height: u32) -> Self {
        init::create_world_core(width, height, SimulationSettings::default())
    }

    /// Create an empty world; fails if `settings` does not validate
    pub fn with_settings(width: u32, height: u32, settings: SimulationSettings) -> Result<Self, String> {
        settings.validate()?;
        Ok(init::create_world_core(width, height, settings))
    }

    pub fn from_settings_json(width: u32, height: u32, json: &str) -> Result<Self, String> {
        let settings = SimulationSettings::from_json(json)?;
        Ok(init::create_world_core(width, height, settings))
    }

    pub fn width(&self) -> f64 { self.bounds.width }

    pub fn height(&self) -> f64 { self.bounds.height }

    pub fn bounds(&self) -> Bounds { self.bounds }

    pub fn settings(&self) -> &SimulationSettings { &self.settings }

    pub fn particles(&self) -> &[Particle] { &self.particles }

    pub fn particle_count(&self) -> usize { self.particles.len() }

    pub fn frame(&self) -> u64 { self.frame }

    /// Enable or disable per-step perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        settings::enable_perf_metrics(self, enabled);
    }

    /// Get last step perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        settings::get_perf_stats(self)
    }

    /// Append `n` randomized particles just below the bottom edge
    pub fn generate(&mut self, n: u32) {
        spawner::generate(self, n);
    }

    /// Append an already built particle (scripted scenes, tests)
    pub fn add_particle(&mut self, particle: Particle) {
        commands::add_particle(self, particle);
    }

    /// Remove every particle containing the point. Returns how many went.
    pub fn remove_at(&mut self, x: f64, y: f64) -> usize {
        commands::remove_at(self, x, y)
    }

    /// Clear all particles
    pub fn clear(&mut self) {
        commands::clear(self);
    }

    /// Run one tick, drawing onto `surface`
    pub fn step<S: Surface + ?Sized>(&mut self, surface: &mut S) {
        step::step(self, surface);
    }

    pub fn snapshot(&self) -> WorldSnapshot {
        snapshot::snapshot(self)
    }

    pub fn snapshot_json(&self) -> Result<String, String> {
        snapshot::snapshot_json(self)
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
