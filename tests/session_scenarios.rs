use glyph_drop_engine::systems::stepper::{integrate_body, resolve_pair};
use glyph_drop_engine::core::SessionRng;
use glyph_drop_engine::{Body, Bounds, PhysicsConfig, Vec2, WorldCore};

const EPS: f32 = 1e-4;

#[test]
fn dropped_body_comes_to_rest_on_the_floor() {
    let mut world = WorldCore::new(400.0, 300.0);
    let size = 40.0;
    let id = world.place_body(Body::new(200.0 - size / 2.0, -size, size));

    let mut ticks = 0;
    while !world.body(id).unwrap().settled {
        world.step();
        ticks += 1;
        assert!(ticks < 2_000, "body never settled");
    }

    let body = world.body(id).unwrap();
    assert_eq!(body.pos.y, 300.0 - size);
    assert_eq!(body.velocity, Vec2::zero());
    assert_eq!(body.rotation_speed, 0.0);
    assert_eq!(world.settled_count(), 1);
}

#[test]
fn head_on_equal_bodies_exchange_velocity_scaled_by_restitution() {
    let mut world = WorldCore::new(400.0, 300.0);
    // 39px apart: one pixel of overlap
    let a = world.place_body(Body::new(100.0, 100.0, 40.0).with_velocity(2.0, 0.0));
    let b = world.place_body(Body::new(139.0, 100.0, 40.0).with_velocity(-2.0, 0.0));

    world.step();

    let a = world.body(a).unwrap();
    let b = world.body(b).unwrap();
    assert!((a.velocity.x - -1.4).abs() < EPS, "a.vx = {}", a.velocity.x);
    assert!((b.velocity.x - 1.4).abs() < EPS, "b.vx = {}", b.velocity.x);
    assert!((a.velocity.y - b.velocity.y).abs() < EPS);
    let distance = (a.center() - b.center()).length();
    assert!(distance >= 40.0 - EPS);
}

#[test]
fn settled_obstacle_is_never_moved() {
    let mut world = WorldCore::new(400.0, 300.0);
    // pairs are led by the earlier body, so the obstacle goes second
    let falling = world.place_body(Body::new(182.0, 200.0, 40.0).with_velocity(0.0, 4.0));
    let floor = world.place_body(Body::new(180.0, 260.0, 40.0).settled());
    let before = world.body(floor).unwrap().clone();

    for _ in 0..300 {
        world.step();
        assert_eq!(world.body(floor).unwrap(), &before);
    }

    let falling = world.body(falling).unwrap();
    let distance = (falling.center() - before.center()).length();
    assert!(distance >= 40.0 - 0.5, "rested inside the obstacle: {distance}");
}

#[test]
fn dynamic_body_hitting_settled_body_takes_whole_impulse() {
    let config = PhysicsConfig::default();
    let mut rng = SessionRng::seeded(11);
    let mut moving = Body::new(0.0, 0.0, 40.0).with_velocity(3.0, 0.0);
    let mut resting = Body::new(39.0, 0.0, 40.0).settled();
    let resting_before = resting.clone();

    resolve_pair(&mut moving, &mut resting, &config, &mut rng);

    assert_eq!(resting, resting_before);
    assert!((moving.velocity.x - -2.1).abs() < EPS);
    assert!((moving.pos.x - -1.0).abs() < EPS);
}

#[test]
fn floor_bounce_never_amplifies() {
    let config = PhysicsConfig::default();
    let bounds = Bounds::new(400.0, 300.0);

    for incoming in [1.0_f32, 3.0, 7.5, 14.0] {
        let mut body = Body::new(100.0, 259.0, 40.0).with_velocity(0.0, incoming);
        integrate_body(&mut body, &config, bounds);

        let pre_bounce = incoming + config.gravity;
        assert!(body.velocity.y <= 0.0);
        assert!(body.velocity.y.abs() <= pre_bounce * config.bounce_factor + EPS);
    }
}

#[test]
fn invariants_hold_over_a_long_session() {
    let mut world = WorldCore::with_config(640.0, 360.0, PhysicsConfig::default(), 2024).unwrap();
    let max_speed = world.config().max_speed;
    let mut settled_ids: Vec<u32> = Vec::new();

    for frame in 0..1_500 {
        if frame % 6 == 0 {
            world.spawn();
        }
        world.step();

        for body in world.bodies() {
            assert!(body.pos.is_finite() && body.velocity.is_finite());
            assert!(body.velocity.x.abs() <= max_speed);
            assert!(body.velocity.y.abs() <= max_speed);
            assert!(body.pos.x >= 0.0 && body.pos.x <= 640.0 - body.size + EPS);
            assert!(body.pos.y <= 360.0 - body.size + EPS);
            assert!((0.0..360.0).contains(&body.rotation));
        }

        for id in &settled_ids {
            assert!(world.body(*id).unwrap().settled, "body {id} unsettled");
        }
        settled_ids = world.bodies().iter().filter(|b| b.settled).map(|b| b.id).collect();
    }

    assert_eq!(world.body_count(), 250);
}

#[test]
fn same_seed_gives_identical_sessions() {
    let run = |seed: u64| {
        let mut world = WorldCore::with_config(500.0, 400.0, PhysicsConfig::default(), seed).unwrap();
        for frame in 0..400 {
            if frame % 10 == 0 {
                world.spawn();
            }
            world.step();
        }
        world.snapshot_json()
    };

    assert_eq!(run(77), run(77));
    assert_ne!(run(77), run(78));
}

#[test]
fn ids_are_unique_and_increasing() {
    let mut world = WorldCore::new(300.0, 300.0);
    let mut last = 0;
    for _ in 0..50 {
        let id = world.spawn().unwrap();
        assert!(id > last);
        last = id;
        world.step();
    }
    let ids: Vec<u32> = world.bodies().iter().map(|b| b.id).collect();
    assert_eq!(ids, (1..=50).collect::<Vec<_>>());
}

#[test]
fn zero_size_container_freezes_everything() {
    let mut world = WorldCore::new(0.0, 0.0);
    assert!(world.spawn().is_none());

    world.place_body(Body::new(5.0, 5.0, 30.0).with_velocity(1.0, 1.0));
    world.step();

    assert_eq!(world.frame(), 0);
    assert_eq!(world.bodies()[0].pos, Vec2::new(5.0, 5.0));
}

#[test]
fn coincident_bodies_stay_finite_through_a_session() {
    let mut world = WorldCore::new(400.0, 300.0);
    for _ in 0..4 {
        world.place_body(Body::new(180.0, 100.0, 40.0));
    }

    for _ in 0..200 {
        world.step();
    }

    for body in world.bodies() {
        assert!(body.pos.is_finite());
        assert!(body.velocity.is_finite());
        assert!(body.rotation_speed.is_finite());
    }
}
