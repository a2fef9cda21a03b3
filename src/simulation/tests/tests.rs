use super::*;
use crate::core::Vec2;

fn world() -> WorldCore {
    WorldCore::new(400.0, 300.0)
}

#[test]
fn ids_start_at_one_and_increase() {
    let mut world = world();
    let a = world.spawn().unwrap();
    let b = world.spawn().unwrap();
    let c = world.place_body(Body::new(10.0, 10.0, 30.0));

    assert_eq!((a, b, c), (1, 2, 3));
    assert_eq!(world.next_id, 4);
    assert_eq!(world.body(2).map(|b| b.id), Some(2));
    assert!(world.body(99).is_none());
}

#[test]
fn step_without_known_size_is_a_no_op() {
    let mut world = WorldCore::new(0.0, 300.0);
    world.place_body(Body::new(10.0, 10.0, 30.0).with_velocity(1.0, 1.0));
    let before = world.bodies.clone();

    world.step();

    assert_eq!(world.frame, 0);
    assert_eq!(world.bodies, before);
    assert_eq!(world.stats, StepStats::default());
}

#[test]
fn spawn_waits_for_container_size() {
    let mut world = WorldCore::new(0.0, 0.0);
    assert_eq!(world.spawn(), None);

    world.resize(400.0, 300.0);
    assert_eq!(world.spawn(), Some(1));
}

#[test]
fn capacity_refuses_spawns_but_not_placement() {
    let config = PhysicsConfig {
        max_bodies: Some(2),
        ..PhysicsConfig::default()
    };
    let mut world = WorldCore::with_config(400.0, 300.0, config, 7).unwrap();

    assert!(world.spawn().is_some());
    assert!(world.spawn().is_some());
    assert_eq!(world.spawn(), None);
    assert_eq!(world.body_count(), 2);
    // ids are not consumed by refused spawns
    assert_eq!(world.next_id, 3);

    world.place_body(Body::new(0.0, 0.0, 30.0));
    assert_eq!(world.body_count(), 3);
}

#[test]
fn step_stats_track_the_last_frame() {
    let mut world = world();
    world.place_body(Body::new(100.0, 259.5, 40.0).with_velocity(0.0, 0.5));
    world.place_body(Body::new(10.0, 20.0, 40.0));
    world.place_body(Body::new(300.0, 260.0, 40.0).settled());

    world.step();
    let stats = world.step_stats();

    assert_eq!(stats.frame(), 1);
    assert_eq!(stats.body_count(), 3);
    assert_eq!(stats.active(), 2);
    assert_eq!(stats.floor_contacts(), 1);
    // the first body settles while integrating, leaving one live pair
    assert_eq!(stats.pair_checks(), 1);
    assert_eq!(stats.contacts(), 0);
    assert_eq!(stats.newly_settled(), 1);
    assert!(stats.step_ms() >= 0.0);
}

#[test]
fn render_buffer_layout() {
    let mut world = world();
    world.place_body(Body::new(12.0, 34.0, 40.0).with_rotation(90.0, 1.0).with_color(3));
    world.place_body(Body::new(50.0, 260.0, 40.0).with_color(20).settled());

    let len = world.extract_render_buffer();
    assert_eq!(len, 2 * RENDER_STRIDE);

    let first = &world.render_buffer()[..RENDER_STRIDE];
    assert_eq!(first[SLOT_X], 12.0);
    assert_eq!(first[SLOT_Y], 34.0);
    assert_eq!(first[SLOT_SIZE], 40.0);
    assert_eq!(first[SLOT_ROTATION], 90.0);
    assert_eq!(first[SLOT_OPACITY], 1.0);
    assert_eq!(first[SLOT_COLOR], 3.0);
    assert_eq!(first[SLOT_SETTLED], 0.0);
    assert_eq!(first[SLOT_ID], 1.0);

    let second = &world.render_buffer()[RENDER_STRIDE..];
    assert_eq!(second[SLOT_OPACITY], 0.7);
    assert_eq!(second[SLOT_SETTLED], 1.0);
    // out-of-palette index placed by a caller wraps around
    assert_eq!(second[SLOT_COLOR], 3.0);
    assert_eq!(second[SLOT_ID], 2.0);
}

#[test]
fn render_buffer_shrinks_with_collection() {
    let mut world = world();
    for _ in 0..5 {
        world.spawn();
    }
    assert_eq!(world.extract_render_buffer(), 5 * RENDER_STRIDE);

    world.bodies.truncate(1);
    assert_eq!(world.extract_render_buffer(), RENDER_STRIDE);
    assert_eq!(world.render_buffer().len(), RENDER_STRIDE);
}

#[test]
fn set_config_rejects_invalid_and_keeps_previous() {
    let mut world = world();
    let bad = PhysicsConfig {
        bounce_factor: 2.0,
        ..PhysicsConfig::default()
    };

    assert!(world.set_config(bad).is_err());
    assert_eq!(world.config().bounce_factor, 0.5);

    let heavier = PhysicsConfig {
        gravity: 1.0,
        ..PhysicsConfig::default()
    };
    world.set_config(heavier).unwrap();
    world.place_body(Body::new(10.0, 10.0, 30.0));
    world.step();
    assert_eq!(world.bodies[0].velocity, Vec2::new(0.0, 1.0));
}

#[test]
fn reseed_replays_the_spawn_sequence() {
    let mut world = world();
    world.reseed(42);
    world.spawn();
    let first = world.bodies[0].clone();

    world.reseed(42);
    world.spawn();
    let replay = &world.bodies[1];

    assert_eq!(replay.pos, first.pos);
    assert_eq!(replay.velocity, first.velocity);
    assert_eq!(replay.size, first.size);
    assert_eq!(replay.color, first.color);
    assert_ne!(replay.id, first.id);
}

#[test]
fn resize_confines_bodies_on_next_step() {
    let mut world = world();
    world.place_body(Body::new(350.0, 100.0, 40.0));

    world.resize(200.0, 300.0);
    assert_eq!(world.bodies[0].pos.x, 350.0);

    world.step();
    assert!(world.bodies[0].pos.x <= 160.0);
}

#[test]
fn snapshot_json_uses_camel_case() {
    let mut world = world();
    world.place_body(Body::new(1.0, 2.0, 30.0).with_rotation(0.0, 1.5));

    let json = world.snapshot_json();
    assert!(json.starts_with('['));
    assert!(json.contains("\"rotationSpeed\":1.5"));
    assert!(json.contains("\"settled\":false"));
    assert!(json.contains("\"id\":1"));
}
