use crate::core::Vec2;
use crate::domain::color::MAX_RGB;
use crate::domain::{Bounds, Color, Particle};

use super::random::Xorshift32;
use super::settings::SimulationSettings;
use super::WorldCore;

pub(super) fn generate(world: &mut WorldCore, n: u32) {
    world.particles.reserve(n as usize);
    for _ in 0..n {
        let label = format!("C{}", world.next_label);
        world.next_label += 1;
        let particle = spawn_particle(&mut world.rng, world.bounds, &world.settings, label);
        world.particles.push(particle);
    }
    console_log!("spawned {} particles ({} active)", n, world.particles.len());
}

/// One particle just below the bottom edge, heading up.
///
/// Draw order from the RNG: radius, x, color, speed, dx, dy.
/// `x` lands in [radius, width - radius] as long as the surface is at least
/// one diameter wide.
pub(super) fn spawn_particle(
    rng: &mut Xorshift32,
    bounds: Bounds,
    settings: &SimulationSettings,
    label: String,
) -> Particle {
    let radius = rng.range(settings.radius_min, settings.radius_max);
    let x = radius + rng.next_f64() * (bounds.width - radius * 2.0);
    let y = bounds.height + radius;
    let color = Color::from_u32(rng.next_u32() & MAX_RGB);
    let speed = rng.range(settings.speed_min, settings.speed_max);

    let dx = (rng.next_f64() - 0.5) * speed * 2.0;
    let dy = -rng.next_f64() * speed;

    Particle::new(Vec2::new(x, y), Vec2::new(dx, dy), radius, color, label)
}
