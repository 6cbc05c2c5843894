use bubble_engine::World;

#[test]
fn perf_smoke_step() {
    let mut world = World::new(1280, 720);
    world.enable_perf_metrics(true);
    world.generate(40);
    for _ in 0..120 {
        world.step_headless();
    }
    let stats = world.get_perf_stats();
    assert!(stats.step_ms() >= 0.0);
    assert_eq!(stats.particle_count(), 40);
    assert_eq!(stats.pairs_checked(), 40 * 39 / 2);
    assert_eq!(world.frame(), 120);
}
