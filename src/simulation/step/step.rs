use crate::systems::stepper::{integrate_all, resolve_pairs, settle_pass};

use super::{StepTimer, WorldCore};

pub(super) fn step(world: &mut WorldCore) {
    // No physics until the host has measured the container
    if !world.bounds.is_known() {
        return;
    }

    let timer = StepTimer::start();
    world.stats.reset();

    // === PASS 1: INTEGRATE ===
    let integrated = integrate_all(&mut world.bodies, &world.config, world.bounds);

    // === PASS 2: PAIRWISE CONTACTS ===
    let collisions = resolve_pairs(&mut world.bodies, &world.config, &mut world.rng);

    // === PASS 3: CONFINE + SETTLE ===
    let settled_late = settle_pass(&mut world.bodies, &world.config, world.bounds);

    world.frame += 1;

    let stats = &mut world.stats;
    stats.frame = world.frame;
    stats.body_count = world.bodies.len() as u32;
    stats.active = integrated.stepped;
    stats.floor_contacts = integrated.floor_contacts;
    stats.pair_checks = collisions.pair_checks;
    stats.contacts = collisions.contacts;
    stats.impulses = collisions.impulses;
    stats.newly_settled = integrated.settled + settled_late;
    stats.step_ms = timer.elapsed_ms();
}
