use super::*;
use crate::core::Vec2;
use crate::domain::Color;
use crate::render::{DrawCommand, NullSurface, RecordingSurface};

const RED: Color = Color::from_rgb(0xff, 0, 0);

fn seeded_world(width: u32, height: u32, seed: u32) -> WorldCore {
    let settings = SimulationSettings {
        seed: Some(seed),
        ..SimulationSettings::default()
    };
    WorldCore::with_settings(width, height, settings).expect("default settings are valid")
}

fn still(x: f64, y: f64, radius: f64, label: &str) -> Particle {
    Particle::new(Vec2::new(x, y), Vec2::zero(), radius, RED, label)
}

#[test]
fn generate_spawns_below_bottom_edge_heading_up() {
    let mut world = seeded_world(800, 600, 1);
    world.generate(10);

    assert_eq!(world.particle_count(), 10);
    for p in world.particles() {
        assert!((20.0..=50.0).contains(&p.radius), "radius {}", p.radius);
        assert!(p.pos.x >= p.radius && p.pos.x <= 800.0 - p.radius, "x {}", p.pos.x);
        assert_eq!(p.pos.y, 600.0 + p.radius);
        assert!(p.velocity.y <= 0.0);
        assert!(p.velocity.x.abs() <= 7.0);
        assert_eq!(p.color(), p.base_color());
        assert!(!p.is_colliding());
    }
}

#[test]
fn generate_labels_keep_counting_across_calls() {
    let mut world = seeded_world(800, 600, 2);
    world.generate(2);
    world.generate(1);

    let labels: Vec<&str> = world.particles().iter().map(|p| p.label()).collect();
    assert_eq!(labels, vec!["C1", "C2", "C3"]);
}

#[test]
fn same_seed_spawns_identical_worlds() {
    let mut a = seeded_world(640, 480, 99);
    let mut b = seeded_world(640, 480, 99);
    a.generate(5);
    b.generate(5);
    assert_eq!(a.snapshot(), b.snapshot());
}

#[test]
fn step_clears_then_draws_every_particle_in_order() {
    let mut world = seeded_world(800, 600, 3);
    world.add_particle(still(100.0, 100.0, 20.0, "A"));
    world.add_particle(still(300.0, 100.0, 20.0, "B"));

    let mut surface = RecordingSurface::new();
    world.step(&mut surface);

    assert_eq!(
        surface.commands.first(),
        Some(&DrawCommand::ClearRect { x: 0.0, y: 0.0, width: 800.0, height: 600.0 })
    );
    assert_eq!(surface.texts(), vec!["A", "B"]);
    assert_eq!(surface.arc_count(), 2);
    assert_eq!(world.frame(), 1);
}

#[test]
fn step_draws_after_advancing() {
    let mut world = seeded_world(800, 600, 4);
    world.add_particle(Particle::new(Vec2::new(100.0, 300.0), Vec2::new(5.0, -2.0), 20.0, RED, "A"));

    let mut surface = RecordingSurface::new();
    world.step(&mut surface);

    assert!(surface
        .commands
        .contains(&DrawCommand::FillText { text: "A".to_string(), x: 105.0, y: 298.0 }));
}

#[test]
fn colliding_pair_shows_collision_color_on_the_next_draw_only() {
    let mut world = seeded_world(800, 600, 5);
    world.add_particle(Particle::new(Vec2::new(100.0, 300.0), Vec2::new(1.0, 0.0), 20.0, RED, "A"));
    world.add_particle(Particle::new(Vec2::new(128.0, 300.0), Vec2::new(-1.0, 0.0), 20.0, RED, "B"));

    // Tick 1: drawn red, then they overlap (distance 26 < 40) and get resolved
    let mut surface = RecordingSurface::new();
    world.step(&mut surface);
    assert_eq!(surface.stroke_styles(), vec!["#ff0000", "#ff0000"]);
    assert_eq!(world.particles()[0].color(), Color::BLUE);
    assert!(!world.particles()[0].is_colliding());
    let gap = world.particles()[0].pos.distance(world.particles()[1].pos);
    assert!((gap - 40.0).abs() < 1e-9);
    assert_eq!(world.particles()[0].velocity, Vec2::new(-1.0, 0.0));
    assert_eq!(world.particles()[1].velocity, Vec2::new(1.0, 0.0));

    // Tick 2: drawn blue, moving apart so no new collision, back to red afterwards
    surface.clear();
    world.step(&mut surface);
    assert_eq!(surface.stroke_styles(), vec!["#0000ff", "#0000ff"]);
    assert_eq!(world.particles()[0].color(), RED);
    assert_eq!(world.particles()[1].color(), RED);
}

#[test]
fn scan_resolves_each_unordered_pair_once() {
    // Resolving a pair twice would flip the velocities back
    let mut particles = vec![
        Particle::new(Vec2::new(0.0, 0.0), Vec2::new(2.0, 3.0), 20.0, RED, "A"),
        Particle::new(Vec2::new(30.0, 0.0), Vec2::new(-2.0, 1.0), 20.0, RED, "B"),
    ];

    let scan = scan_pairs(&mut particles, Color::BLUE);

    assert_eq!(scan, PairScan { pairs_checked: 1, collisions_resolved: 1, corrections_skipped: 0 });
    assert_eq!(particles[0].velocity, Vec2::new(-2.0, -3.0));
    assert_eq!(particles[1].velocity, Vec2::new(2.0, -1.0));
}

#[test]
fn scan_is_sequential_not_simultaneous() {
    // B overlaps A and C. A-B is resolved first and pushes B right, deeper
    // into C; the B-C check then uses B's new position.
    let mut particles = vec![
        still(0.0, 0.0, 10.0, "A"),
        still(15.0, 0.0, 10.0, "B"),
        still(34.0, 0.0, 10.0, "C"),
    ];

    let scan = scan_pairs(&mut particles, Color::BLUE);

    assert_eq!(scan.pairs_checked, 3);
    // A-B: overlap 5, B moves to 17.5. A-C: far apart. B-C: distance 16.5, overlap 3.5.
    assert_eq!(scan.collisions_resolved, 2);
    assert!((particles[0].pos.x - -2.5).abs() < 1e-9);
    assert!((particles[1].pos.x - 15.75).abs() < 1e-9);
    assert!((particles[2].pos.x - 35.75).abs() < 1e-9);
    assert!(particles.iter().all(|p| p.is_colliding()));
}

#[test]
fn concentric_pair_is_counted_as_skipped_correction() {
    let mut particles = vec![still(50.0, 50.0, 20.0, "A"), still(50.0, 50.0, 25.0, "B")];
    let scan = scan_pairs(&mut particles, Color::BLUE);
    assert_eq!(scan.corrections_skipped, 1);
    assert!(particles.iter().all(|p| p.pos.x.is_finite() && p.pos.y.is_finite()));
}

#[test]
fn remove_at_filters_every_hit_and_keeps_order() {
    let mut world = seeded_world(800, 600, 6);
    world.add_particle(still(100.0, 100.0, 20.0, "A"));
    world.add_particle(still(110.0, 100.0, 20.0, "B"));
    world.add_particle(still(400.0, 400.0, 20.0, "C"));
    world.add_particle(still(500.0, 100.0, 20.0, "D"));

    assert_eq!(world.remove_at(105.0, 100.0), 2);
    let labels: Vec<&str> = world.particles().iter().map(|p| p.label()).collect();
    assert_eq!(labels, vec!["C", "D"]);

    // Boundary counts as a hit
    assert_eq!(world.remove_at(420.0, 400.0), 1);
    // Empty space does nothing
    assert_eq!(world.remove_at(10.0, 10.0), 0);
    assert_eq!(world.particle_count(), 1);
}

#[test]
fn clear_resets_particles_frame_and_labels() {
    let mut world = seeded_world(800, 600, 7);
    world.generate(3);
    world.step(&mut NullSurface);
    world.clear();

    assert_eq!(world.particle_count(), 0);
    assert_eq!(world.frame(), 0);
    world.generate(1);
    assert_eq!(world.particles()[0].label(), "C1");
}

#[test]
fn lone_particle_never_overshoots_an_edge_by_more_than_one_step() {
    let mut world = seeded_world(400, 300, 8);
    world.add_particle(Particle::new(Vec2::new(200.0, 150.0), Vec2::new(7.0, -6.5), 20.0, RED, "A"));

    let slack = 1e-9;
    for _ in 0..2_000 {
        world.step(&mut NullSurface);
        let p = &world.particles()[0];
        assert!(p.pos.x - p.radius >= -7.0 - slack, "left overshoot at x {}", p.pos.x);
        assert!(p.pos.x + p.radius <= 407.0 + slack, "right overshoot at x {}", p.pos.x);
        assert!(p.pos.y - p.radius >= -6.5 - slack, "top overshoot at y {}", p.pos.y);
        assert!(p.pos.y + p.radius <= 306.5 + slack, "bottom overshoot at y {}", p.pos.y);
        assert_eq!(p.velocity.x.abs(), 7.0);
        assert_eq!(p.velocity.y.abs(), 6.5);
    }
}

#[test]
fn draw_failures_do_not_stop_the_tick() {
    let mut world = seeded_world(800, 600, 9);
    world.enable_perf_metrics(true);
    world.add_particle(Particle::new(Vec2::new(100.0, 300.0), Vec2::new(1.0, 0.0), 20.0, RED, "A"));
    world.add_particle(Particle::new(Vec2::new(120.0, 300.0), Vec2::new(-1.0, 0.0), 20.0, RED, "B"));

    let mut surface = RecordingSurface { fail_arcs: true, ..Default::default() };
    world.step(&mut surface);

    assert_eq!(world.frame(), 1);
    assert_eq!(world.particles()[0].color(), Color::BLUE);
    let stats = world.get_perf_stats();
    assert_eq!(stats.draw_failures(), 2);
    assert_eq!(stats.collisions_resolved(), 1);
}

#[test]
fn perf_stats_count_pairs_when_enabled() {
    let mut world = seeded_world(800, 600, 10);
    world.generate(5);

    world.step(&mut NullSurface);
    assert_eq!(world.get_perf_stats().pairs_checked(), 0);

    world.enable_perf_metrics(true);
    world.step(&mut NullSurface);
    let stats = world.get_perf_stats();
    assert_eq!(stats.particle_count(), 5);
    assert_eq!(stats.pairs_checked(), 10);
    assert!(stats.step_ms() >= 0.0);

    world.enable_perf_metrics(false);
    assert_eq!(world.get_perf_stats().particle_count(), 0);
}

#[test]
fn snapshot_json_lists_particles_in_order() {
    let mut world = seeded_world(800, 600, 11);
    world.add_particle(still(10.0, 20.0, 30.0, "A"));
    world.add_particle(still(40.0, 50.0, 25.0, "B"));

    let json = world.snapshot_json().unwrap();
    let parsed: WorldSnapshot = serde_json::from_str(&json).unwrap();

    assert_eq!(parsed.width, 800.0);
    assert_eq!(parsed.particles.len(), 2);
    assert_eq!(parsed.particles[0].label, "A");
    assert_eq!(parsed.particles[1].radius, 25.0);
    assert_eq!(parsed.particles[0].color, RED);
    assert!(json.contains("\"base_color\":\"#ff0000\""));
}

#[test]
fn invalid_settings_are_rejected() {
    let settings = SimulationSettings {
        radius_min: -1.0,
        ..SimulationSettings::default()
    };
    assert!(WorldCore::with_settings(800, 600, settings).is_err());
    assert!(WorldCore::from_settings_json(800, 600, "not json").is_err());
}
