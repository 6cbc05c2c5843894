use serde::{Deserialize, Serialize};

use crate::domain::{Color, Particle};

use super::WorldCore;

/// Plain-data view of one particle
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ParticleSnapshot {
    pub label: String,
    pub x: f64,
    pub y: f64,
    pub dx: f64,
    pub dy: f64,
    pub radius: f64,
    pub base_color: Color,
    pub color: Color,
    pub colliding: bool,
}

impl From<&Particle> for ParticleSnapshot {
    fn from(p: &Particle) -> Self {
        Self {
            label: p.label().to_string(),
            x: p.pos.x,
            y: p.pos.y,
            dx: p.velocity.x,
            dy: p.velocity.y,
            radius: p.radius,
            base_color: p.base_color(),
            color: p.color(),
            colliding: p.is_colliding(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WorldSnapshot {
    pub width: f64,
    pub height: f64,
    pub frame: u64,
    /// Collection order
    pub particles: Vec<ParticleSnapshot>,
}

pub(super) fn snapshot(world: &WorldCore) -> WorldSnapshot {
    WorldSnapshot {
        width: world.bounds.width,
        height: world.bounds.height,
        frame: world.frame,
        particles: world.particles.iter().map(ParticleSnapshot::from).collect(),
    }
}

pub(super) fn snapshot_json(world: &WorldCore) -> Result<String, String> {
    serde_json::to_string(&snapshot(world)).map_err(|e| e.to_string())
}
