//! Spawner - builds a new body just above the container's top edge
//!
//! Bodies drop in around the horizontal center with a jitter of ±width/8,
//! carrying a mild downward drift and a random spin.

use crate::core::SessionRng;
use crate::domain::PhysicsConfig;

use super::bounds::Bounds;
use super::glyph::Body;

/// Roll a new body for the given container.
///
/// Returns `None` while the container size is unknown. The returned body has
/// no ID yet; the session assigns one on insertion.
pub fn spawn_body(config: &PhysicsConfig, bounds: Bounds, rng: &mut SessionRng) -> Option<Body> {
    if !bounds.is_known() {
        return None;
    }

    let size = rng.uniform(config.size_min, config.size_max);

    let jitter = rng.centered(bounds.width / 8.0);
    let spawn_x = bounds.width / 2.0 - size / 2.0 + jitter;
    let x = spawn_x.min(bounds.right_wall_for(size)).max(0.0);

    let vx = rng.uniform(config.vx_min, config.vx_max);
    let vy = rng.uniform(0.0, config.spawn_vy_max);
    let rotation = rng.uniform(0.0, 360.0);
    let rotation_speed = rng.uniform(config.rotation_speed_min, config.rotation_speed_max);
    let color = rng.index(config.palette.len());

    Some(
        Body::new(x, -size, size)
            .with_velocity(vx, vy)
            .with_rotation(rotation, rotation_speed)
            .with_color(color)
            .with_glyph(config.glyph),
    )
}
