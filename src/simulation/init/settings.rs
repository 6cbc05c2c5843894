use serde::{Deserialize, Serialize};

use crate::domain::{Color, DrawStyle};

use super::perf_stats::PerfStats;
use super::WorldCore;

/// Tunables for spawning and drawing. Every field is optional in JSON.
///
/// ```json
/// {
///   "radius_min": 20, "radius_max": 50,
///   "speed_min": 3, "speed_max": 7,
///   "collision_color": "#0000FF",
///   "font": "20px Arial", "line_width": 2,
///   "background": "#ff8",
///   "initial_count": 10,
///   "seed": 42
/// }
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SimulationSettings {
    /// Spawn radius range, [min, max)
    pub radius_min: f64,
    pub radius_max: f64,
    /// Per-particle speed factor range, [min, max)
    pub speed_min: f64,
    pub speed_max: f64,
    /// Outline color of particles that collided this tick
    pub collision_color: Color,
    /// CSS font for labels
    pub font: String,
    pub line_width: f64,
    /// Canvas background, applied by the driver
    pub background: Color,
    /// Particles generated by the driver at startup
    pub initial_count: u32,
    /// Fixed RNG seed; random per run when absent
    pub seed: Option<u32>,
}

impl Default for SimulationSettings {
    fn default() -> Self {
        Self {
            radius_min: 20.0,
            radius_max: 50.0,
            speed_min: 3.0,
            speed_max: 7.0,
            collision_color: Color::BLUE,
            font: "20px Arial".to_string(),
            line_width: 2.0,
            background: Color::from_rgb(0xff, 0xff, 0x88),
            initial_count: 10,
            seed: None,
        }
    }
}

impl SimulationSettings {
    pub fn from_json(json: &str) -> Result<Self, String> {
        let settings: SimulationSettings = serde_json::from_str(json).map_err(|e| e.to_string())?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn to_json(&self) -> Result<String, String> {
        serde_json::to_string(self).map_err(|e| e.to_string())
    }

    pub fn validate(&self) -> Result<(), String> {
        let numbers = [
            ("radius_min", self.radius_min),
            ("radius_max", self.radius_max),
            ("speed_min", self.speed_min),
            ("speed_max", self.speed_max),
            ("line_width", self.line_width),
        ];
        if let Some((name, value)) = numbers.iter().find(|(_, v)| !v.is_finite()) {
            return Err(format!("{} must be finite, got {}", name, value));
        }

        if self.radius_min <= 0.0 {
            return Err(format!("radius_min must be positive, got {}", self.radius_min));
        }
        if self.radius_min > self.radius_max {
            return Err(format!(
                "radius_min ({}) is larger than radius_max ({})",
                self.radius_min, self.radius_max
            ));
        }
        if self.speed_min < 0.0 {
            return Err(format!("speed_min must not be negative, got {}", self.speed_min));
        }
        if self.speed_min > self.speed_max {
            return Err(format!(
                "speed_min ({}) is larger than speed_max ({})",
                self.speed_min, self.speed_max
            ));
        }
        if self.line_width <= 0.0 {
            return Err(format!("line_width must be positive, got {}", self.line_width));
        }
        Ok(())
    }

    pub fn draw_style(&self) -> DrawStyle {
        DrawStyle {
            font: self.font.clone(),
            line_width: self.line_width,
        }
    }
}

pub(super) fn enable_perf_metrics(world: &mut WorldCore, enabled: bool) {
    world.perf_enabled = enabled;
    if !enabled {
        world.perf_stats.reset();
    }
}

pub(super) fn get_perf_stats(world: &WorldCore) -> PerfStats {
    world.perf_stats.clone()
}
