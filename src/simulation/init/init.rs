use crate::core::SessionRng;
use crate::domain::PhysicsConfig;
use crate::systems::Bounds;

use super::step_stats::StepStats;
use super::RENDER_STRIDE;
use super::WorldCore;

/// Initial room in the body collection and render buffer
const INITIAL_BODY_CAPACITY: usize = 64;

pub(super) fn create_world_core(width: f32, height: f32, config: PhysicsConfig, seed: u64) -> WorldCore {
    let capacity = config
        .max_bodies
        .map_or(INITIAL_BODY_CAPACITY, |max| max.min(INITIAL_BODY_CAPACITY));

    WorldCore {
        config,
        bounds: Bounds::new(width, height),
        bodies: Vec::with_capacity(capacity),
        next_id: 1,
        rng: SessionRng::seeded(seed),
        frame: 0,
        stats: StepStats::default(),
        // Grows on demand in `extract_render_buffer`
        render_buffer: Vec::with_capacity(capacity * RENDER_STRIDE),
    }
}
