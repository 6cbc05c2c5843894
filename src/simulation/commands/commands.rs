use crate::domain::Particle;

use super::WorldCore;

pub(super) fn add_particle(world: &mut WorldCore, particle: Particle) {
    world.particles.push(particle);
}

/// Filters out every particle under the point; survivors keep their order
pub(super) fn remove_at(world: &mut WorldCore, x: f64, y: f64) -> usize {
    let before = world.particles.len();
    world.particles.retain(|p| !p.contains_point(x, y));
    before - world.particles.len()
}

pub(super) fn clear(world: &mut WorldCore) {
    world.particles.clear();
    world.next_label = 1;
    world.frame = 0;
}
