use crate::systems::spawner::spawn_body;
use crate::systems::{Body, Bounds};

use super::WorldCore;

pub(super) fn spawn(world: &mut WorldCore) -> Option<u32> {
    if let Some(max) = world.config.max_bodies {
        if world.bodies.len() >= max {
            log::debug!(target: "glyph_drop::spawn", "refused: at capacity ({max})");
            return None;
        }
    }

    let body = spawn_body(&world.config, world.bounds, &mut world.rng)?;
    let id = place_body(world, body);
    log::trace!(target: "glyph_drop::spawn", "body {id} spawned");
    Some(id)
}

pub(super) fn place_body(world: &mut WorldCore, mut body: Body) -> u32 {
    let id = world.next_id;
    world.next_id = world.next_id.wrapping_add(1).max(1);

    body.id = id;
    if body.color >= world.config.palette.len() {
        body.color %= world.config.palette.len();
    }
    world.bodies.push(body);
    id
}

pub(super) fn resize(world: &mut WorldCore, width: f32, height: f32) {
    let bounds = Bounds::new(width, height);
    if bounds == world.bounds {
        return;
    }
    log::debug!(
        target: "glyph_drop::resize",
        "{}x{} -> {}x{}",
        world.bounds.width,
        world.bounds.height,
        width,
        height
    );
    world.bounds = bounds;
}
