use crate::domain::{Color, Particle};
use crate::render::Surface;
use crate::systems::collision::{detect, pair_mut, resolve, Resolution};

use super::{PerfTimer, WorldCore};

/// Counters from one pass over all pairs
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PairScan {
    pub pairs_checked: u32,
    pub collisions_resolved: u32,
    pub corrections_skipped: u32,
}

/// Check every unordered pair `(i, j)`, `i < j`, and resolve overlaps on the
/// spot. A particle pushed by an earlier pair is tested at its new position
/// against later partners, so the outcome depends on collection order.
pub fn scan_pairs(particles: &mut [Particle], collision_color: Color) -> PairScan {
    let mut scan = PairScan::default();
    let n = particles.len();

    for i in 0..n {
        for j in (i + 1)..n {
            scan.pairs_checked += 1;
            let (a, b) = pair_mut(particles, i, j);
            if !detect(a, b) {
                continue;
            }
            scan.collisions_resolved += 1;
            if resolve(a, b, collision_color) == Resolution::CorrectionSkipped {
                scan.corrections_skipped += 1;
            }
        }
    }

    scan
}

pub(super) fn step<S: Surface + ?Sized>(world: &mut WorldCore, surface: &mut S) {
    let perf_on = world.perf_enabled;
    if perf_on {
        world.perf_stats.reset();
        world.perf_stats.particle_count = world.particles.len() as u32;
    }
    let step_start = PerfTimer::start_if(perf_on);

    surface.clear_rect(0.0, 0.0, world.bounds.width, world.bounds.height);

    // === ADVANCE + DRAW ===
    let t0 = PerfTimer::start_if(perf_on);
    let mut draw_failures = 0u32;
    let mut first_draw_error = None;
    for particle in world.particles.iter_mut() {
        particle.advance(world.bounds);
        if let Err(e) = particle.draw(&mut *surface, &world.style) {
            draw_failures += 1;
            first_draw_error.get_or_insert(e);
        }
    }
    if let Some(e) = first_draw_error {
        console_warn!("frame {}: {} particle(s) failed to draw: {}", world.frame, draw_failures, e);
    }
    if let Some(t) = t0 {
        world.perf_stats.advance_ms = t.elapsed_ms();
        world.perf_stats.draw_failures = draw_failures;
    }

    // === COLLISIONS ===
    let t0 = PerfTimer::start_if(perf_on);
    let scan = scan_pairs(&mut world.particles, world.settings.collision_color);
    if let Some(t) = t0 {
        world.perf_stats.collision_ms = t.elapsed_ms();
        world.perf_stats.pairs_checked = scan.pairs_checked;
        world.perf_stats.collisions_resolved = scan.collisions_resolved;
        world.perf_stats.corrections_skipped = scan.corrections_skipped;
    }

    // === VISUAL RESET ===
    // Only after every pair is done, so a flag set late in the scan still counts
    let t0 = PerfTimer::start_if(perf_on);
    for particle in world.particles.iter_mut() {
        particle.reset_visual_state();
    }
    if let Some(t) = t0 {
        world.perf_stats.reset_ms = t.elapsed_ms();
    }

    if let Some(start) = step_start {
        world.perf_stats.step_ms = start.elapsed_ms();
    }

    world.frame += 1;
}
