use super::WorldCore;

/// Floats per body in the render buffer
pub const RENDER_STRIDE: usize = 8;

pub const SLOT_X: usize = 0;
pub const SLOT_Y: usize = 1;
pub const SLOT_SIZE: usize = 2;
pub const SLOT_ROTATION: usize = 3;
pub const SLOT_OPACITY: usize = 4;
pub const SLOT_COLOR: usize = 5;
pub const SLOT_SETTLED: usize = 6;
pub const SLOT_ID: usize = 7;

/// Rewrite the render buffer in collection order (later bodies draw on top).
/// The buffer is exactly `body_count * RENDER_STRIDE` long afterwards.
pub(super) fn extract_render_buffer(world: &mut WorldCore) -> usize {
    let palette_len = world.config.palette.len().max(1);
    let settled_opacity = world.config.settled_opacity;

    let buffer = &mut world.render_buffer;
    buffer.clear();
    buffer.reserve(world.bodies.len() * RENDER_STRIDE);

    for body in &world.bodies {
        let (opacity, settled) = if body.settled {
            (settled_opacity, 1.0)
        } else {
            (1.0, 0.0)
        };
        buffer.extend_from_slice(&[
            body.pos.x,
            body.pos.y,
            body.size,
            body.rotation,
            opacity,
            (body.color % palette_len) as f32,
            settled,
            body.id as f32,
        ]);
    }

    debug_assert_eq!(buffer.len(), world.bodies.len() * RENDER_STRIDE);
    buffer.len()
}

pub(super) fn snapshot_json(world: &WorldCore) -> String {
    serde_json::to_string(&world.bodies).unwrap_or_else(|err| {
        log::warn!(target: "glyph_drop::render", "snapshot serialization failed: {err}");
        "[]".to_string()
    })
}
