//! Pairwise circle overlap: detection and response
//!
//! The response is deliberately simple: separate the pair along the line
//! between centers, invert both velocities, recolor both. Momentum is not
//! conserved and a pair in sustained contact is re-resolved every tick, which
//! shows up as jitter.

use crate::domain::{Color, Particle};

/// Below this center distance the separation direction is undefined
const MIN_SEPARATION_DISTANCE: f64 = f64::EPSILON;

/// What `resolve` did to the pair
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Resolution {
    /// Positions were pushed apart
    Separated,
    /// No usable overlap (touching, or coincident centers); only velocity
    /// and color were changed
    CorrectionSkipped,
}

/// Boundary-inclusive and symmetric
#[inline]
pub fn detect(a: &Particle, b: &Particle) -> bool {
    a.pos.distance(b.pos) <= a.radius + b.radius
}

/// Respond to an overlap reported by [`detect`].
///
/// Each particle moves half the overlap away from the other, leaving the
/// centers exactly `a.radius + b.radius` apart. Then both velocity vectors
/// are negated and both particles take `collision_color` and the collision
/// flag.
pub fn resolve(a: &mut Particle, b: &mut Particle, collision_color: Color) -> Resolution {
    let delta = b.pos - a.pos;
    let distance = delta.length();
    let overlap = (a.radius + b.radius) - distance;

    let resolution = if overlap > 0.0 && distance > MIN_SEPARATION_DISTANCE {
        let correction = delta * (overlap / distance / 2.0);
        a.pos -= correction;
        b.pos += correction;
        Resolution::Separated
    } else {
        Resolution::CorrectionSkipped
    };

    a.velocity = -a.velocity;
    b.velocity = -b.velocity;
    a.mark_colliding(collision_color);
    b.mark_colliding(collision_color);

    resolution
}

/// Two distinct mutable entries of one slice, `i < j`
#[inline]
pub fn pair_mut(particles: &mut [Particle], i: usize, j: usize) -> (&mut Particle, &mut Particle) {
    debug_assert!(i < j, "pair_mut expects i < j, got {} and {}", i, j);
    let (head, tail) = particles.split_at_mut(j);
    (&mut head[i], &mut tail[0])
}
