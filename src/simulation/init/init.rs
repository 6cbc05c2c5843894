use crate::domain::Bounds;

use super::perf_stats::PerfStats;
use super::random::{entropy_seed, Xorshift32};
use super::settings::SimulationSettings;
use super::WorldCore;

pub(super) fn create_world_core(width: u32, height: u32, settings: SimulationSettings) -> WorldCore {
    let seed = settings.seed.unwrap_or_else(entropy_seed);
    let style = settings.draw_style();

    WorldCore {
        bounds: Bounds::new(width as f64, height as f64),
        particles: Vec::with_capacity(settings.initial_count as usize),
        settings,
        style,
        rng: Xorshift32::new(seed),
        next_label: 1,
        frame: 0,
        perf_enabled: false,
        perf_stats: PerfStats::default(),
    }
}
