use arcadia_engine::World;

#[test]
fn perf_smoke_step() {
    let mut world = World::new(800.0, 600.0);
    world.enable_perf_metrics(true);
    world.set_gravity(0.0, 900.0);

    let floor = world.spawn_static_body(0.0, 560.0, 800.0, 40.0);
    for i in 0..32 {
        let body = world.spawn_body((i * 24) as f32, (i * 8) as f32, 16.0, 16.0);
        world.add_collider(body, floor);
    }

    world.step(1.0 / 60.0);
    let stats = world.get_perf_stats();
    assert!(stats.step_ms() >= 0.0);
    assert_eq!(stats.body_count(), 33);
    assert_eq!(stats.pairs_tested(), 32);
}
