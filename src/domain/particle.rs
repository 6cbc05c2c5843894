//! Particle - a labelled circle that rises, bounces and changes color on contact

use std::f64::consts::TAU;

use crate::core::Vec2;
use crate::render::{Surface, TextAlign, TextBaseline};

use super::Color;

/// Drawing surface extent. Origin is top-left, y grows down.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Stroke and label styling shared by every particle
#[derive(Clone, Debug, PartialEq)]
pub struct DrawStyle {
    pub font: String,
    pub line_width: f64,
}

impl Default for DrawStyle {
    fn default() -> Self {
        Self {
            font: "20px Arial".to_string(),
            line_width: 2.0,
        }
    }
}

#[derive(Clone, Debug)]
pub struct Particle {
    /// Center (canvas pixels)
    pub pos: Vec2,
    /// Displacement per tick
    pub velocity: Vec2,
    /// Always > 0
    pub radius: f64,

    base_color: Color,
    color: Color,
    label: String,
    /// Set by collision resolution, consumed by `reset_visual_state`
    colliding: bool,
}

impl Particle {
    pub fn new(pos: Vec2, velocity: Vec2, radius: f64, color: Color, label: impl Into<String>) -> Self {
        debug_assert!(radius > 0.0, "particle radius must be positive, got {}", radius);
        Self {
            pos,
            velocity,
            radius,
            base_color: color,
            color,
            label: label.into(),
            colliding: false,
        }
    }

    pub fn base_color(&self) -> Color {
        self.base_color
    }

    /// Color used by the next `draw`
    pub fn color(&self) -> Color {
        self.color
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn is_colliding(&self) -> bool {
        self.colliding
    }

    /// Recolor and flag as taking part in a collision this tick
    pub fn mark_colliding(&mut self, color: Color) {
        self.color = color;
        self.colliding = true;
    }

    /// Label centered on the particle, then its outline in the current color.
    /// Does not mutate the particle.
    pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S, style: &DrawStyle) -> Result<(), String> {
        surface.begin_path();
        surface.set_stroke_style(&self.color.to_css());
        surface.set_text_align(TextAlign::Center);
        surface.set_text_baseline(TextBaseline::Middle);
        surface.set_font(&style.font);
        surface.fill_text(&self.label, self.pos.x, self.pos.y)?;
        surface.set_line_width(style.line_width);
        surface.arc(self.pos.x, self.pos.y, self.radius, 0.0, TAU)?;
        surface.stroke();
        surface.close_path();
        Ok(())
    }

    /// Move one step, then bounce off the edges using the new position.
    ///
    /// Horizontal contact negates `dx`. Vertically the sign is forced rather
    /// than flipped: past the bottom edge the particle always heads up, past
    /// the top edge it always heads down (bottom wins if both hold).
    pub fn advance(&mut self, bounds: Bounds) {
        self.pos += self.velocity;

        if self.pos.x + self.radius > bounds.width || self.pos.x - self.radius < 0.0 {
            self.velocity.x = -self.velocity.x;
        }

        if self.pos.y + self.radius > bounds.height {
            self.velocity.y = -self.velocity.y.abs();
        } else if self.pos.y - self.radius < 0.0 {
            self.velocity.y = self.velocity.y.abs();
        }
    }

    /// Boundary-inclusive hit test
    pub fn contains_point(&self, x: f64, y: f64) -> bool {
        self.pos.distance(Vec2::new(x, y)) <= self.radius
    }

    /// End-of-tick bookkeeping: base color comes back only if nothing hit
    /// this particle during the tick. The flag is always cleared, so a
    /// particle keeps the collision color for exactly one extra draw.
    pub fn reset_visual_state(&mut self) {
        if !self.colliding {
            self.color = self.base_color;
        }
        self.colliding = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::{DrawCommand, RecordingSurface};

    const RED: Color = Color::from_rgb(0xff, 0, 0);

    fn particle_at(x: f64, y: f64, dx: f64, dy: f64, radius: f64) -> Particle {
        Particle::new(Vec2::new(x, y), Vec2::new(dx, dy), radius, RED, "C1")
    }

    #[test]
    fn advance_integrates_velocity() {
        let mut p = particle_at(100.0, 100.0, 3.0, -4.0, 10.0);
        p.advance(Bounds::new(800.0, 600.0));
        assert_eq!(p.pos, Vec2::new(103.0, 96.0));
        assert_eq!(p.velocity, Vec2::new(3.0, -4.0));
    }

    #[test]
    fn moving_down_near_bottom_turns_upward_in_one_step() {
        let mut p = particle_at(100.0, 578.0, 0.0, 5.0, 20.0);
        p.advance(Bounds::new(800.0, 600.0));
        assert_eq!(p.pos.y, 583.0);
        assert_eq!(p.velocity.y, -5.0);
    }

    #[test]
    fn bottom_contact_never_makes_velocity_downward() {
        // Already heading up: stays up instead of flipping
        let mut p = particle_at(100.0, 650.0, 0.0, -5.0, 20.0);
        p.advance(Bounds::new(800.0, 600.0));
        assert_eq!(p.velocity.y, -5.0);
    }

    #[test]
    fn top_contact_forces_downward() {
        let mut p = particle_at(100.0, 22.0, 0.0, -5.0, 20.0);
        p.advance(Bounds::new(800.0, 600.0));
        assert_eq!(p.velocity.y, 5.0);

        // Already heading down stays down
        let mut q = particle_at(100.0, 10.0, 0.0, 2.0, 20.0);
        q.advance(Bounds::new(800.0, 600.0));
        assert_eq!(q.velocity.y, 2.0);
    }

    #[test]
    fn side_contact_negates_dx() {
        let mut right = particle_at(778.0, 300.0, 4.0, 0.0, 20.0);
        right.advance(Bounds::new(800.0, 600.0));
        assert_eq!(right.velocity.x, -4.0);

        let mut left = particle_at(22.0, 300.0, -4.0, 0.0, 20.0);
        left.advance(Bounds::new(800.0, 600.0));
        assert_eq!(left.velocity.x, 4.0);
    }

    #[test]
    fn both_axes_can_bounce_in_one_step() {
        let mut p = particle_at(778.0, 578.0, 4.0, 4.0, 20.0);
        p.advance(Bounds::new(800.0, 600.0));
        assert_eq!(p.velocity, Vec2::new(-4.0, -4.0));
    }

    #[test]
    fn exact_edge_contact_does_not_bounce() {
        let mut p = particle_at(776.0, 300.0, 4.0, 0.0, 20.0);
        p.advance(Bounds::new(800.0, 600.0));
        assert_eq!(p.pos.x, 780.0);
        assert_eq!(p.velocity.x, 4.0);
    }

    #[test]
    fn contains_point_is_boundary_inclusive() {
        let p = particle_at(100.0, 100.0, 0.0, 0.0, 20.0);
        assert!(p.contains_point(115.0, 100.0));
        assert!(!p.contains_point(125.0, 100.0));
        assert!(p.contains_point(120.0, 100.0));
        assert!(p.contains_point(100.0, 80.0));
    }

    #[test]
    fn reset_restores_base_color_only_without_collision() {
        let mut p = particle_at(100.0, 100.0, 0.0, 0.0, 20.0);
        p.mark_colliding(Color::BLUE);

        p.reset_visual_state();
        assert_eq!(p.color(), Color::BLUE);
        assert!(!p.is_colliding());

        p.reset_visual_state();
        assert_eq!(p.color(), RED);
        assert!(!p.is_colliding());
    }

    #[test]
    fn reset_is_idempotent_without_collisions() {
        let mut p = particle_at(100.0, 100.0, 0.0, 0.0, 20.0);
        p.reset_visual_state();
        let after_first = (p.color(), p.is_colliding());
        p.reset_visual_state();
        assert_eq!((p.color(), p.is_colliding()), after_first);
        assert_eq!(after_first, (RED, false));
    }

    #[test]
    fn draw_emits_label_then_outline() {
        let p = particle_at(50.0, 60.0, 1.0, 1.0, 25.0);
        let mut surface = RecordingSurface::new();
        p.draw(&mut surface, &DrawStyle::default()).unwrap();

        assert_eq!(
            surface.commands,
            vec![
                DrawCommand::BeginPath,
                DrawCommand::StrokeStyle("#ff0000".to_string()),
                DrawCommand::TextAlign(TextAlign::Center),
                DrawCommand::TextBaseline(TextBaseline::Middle),
                DrawCommand::Font("20px Arial".to_string()),
                DrawCommand::FillText { text: "C1".to_string(), x: 50.0, y: 60.0 },
                DrawCommand::LineWidth(2.0),
                DrawCommand::Arc { x: 50.0, y: 60.0, radius: 25.0, start: 0.0, end: TAU },
                DrawCommand::Stroke,
                DrawCommand::ClosePath,
            ]
        );
        // Drawing is read-only
        assert_eq!(p.pos, Vec2::new(50.0, 60.0));
    }

    #[test]
    fn draw_surfaces_arc_errors() {
        let p = particle_at(50.0, 60.0, 1.0, 1.0, 25.0);
        let mut surface = RecordingSurface { fail_arcs: true, ..Default::default() };
        assert!(p.draw(&mut surface, &DrawStyle::default()).is_err());
    }
}
