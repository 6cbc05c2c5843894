//! Domain types: what a particle is and how it looks

pub mod color;
pub mod particle;

pub use color::Color;
pub use particle::{Bounds, DrawStyle, Particle};
