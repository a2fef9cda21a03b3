#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::core::Vec2;
use crate::domain::PhysicsConfig;
use crate::systems::bounds::Bounds;
use crate::systems::glyph::Body;

use super::IntegrateCounters;

/// Integrate every unsettled body by one frame.
pub fn integrate_all(bodies: &mut [Body], config: &PhysicsConfig, bounds: Bounds) -> IntegrateCounters {
    #[cfg(feature = "parallel")]
    {
        bodies
            .par_iter_mut()
            .filter(|b| !b.settled)
            .map(|b| integrate_body(b, config, bounds))
            .reduce(IntegrateCounters::default, IntegrateCounters::merge)
    }
    #[cfg(not(feature = "parallel"))]
    {
        bodies
            .iter_mut()
            .filter(|b| !b.settled)
            .fold(IntegrateCounters::default(), |acc, b| {
                acc.merge(integrate_body(b, config, bounds))
            })
    }
}

/// Advance one body: gravity, floor, walls, ceiling, speed cap.
///
/// The body may settle here when a floor bounce leaves it slow enough.
/// Settled bodies are returned untouched.
pub fn integrate_body(body: &mut Body, config: &PhysicsConfig, bounds: Bounds) -> IntegrateCounters {
    let mut counters = IntegrateCounters::default();
    if body.settled {
        return counters;
    }
    counters.stepped = 1;

    let prev_vy = body.velocity.y;
    let mut vx = body.velocity.x;
    let mut vy = prev_vy + config.gravity;
    let mut x = body.pos.x + vx;
    let mut y = body.pos.y + vy;
    let mut rotation_speed = body.rotation_speed;
    body.rotation = wrap_degrees(body.rotation + rotation_speed);

    let mut comes_to_rest = false;

    // Floor
    if y + body.size > bounds.height {
        let floor = bounds.floor_for(body.size);
        y = floor;
        vy *= -config.bounce_factor;
        vx *= config.floor_friction;
        rotation_speed *= config.floor_friction;
        counters.floor_contacts = 1;

        if vy.abs() < config.settle_velocity && y >= floor - config.settle_distance {
            vy = 0.0;
            if vx.abs() < config.settle_horizontal_velocity() {
                vx = 0.0;
            }
            if rotation_speed.abs() < config.settle_rotation_speed {
                rotation_speed = 0.0;
            }
            comes_to_rest = vx == 0.0 && rotation_speed == 0.0;
        }
    }

    // Walls
    if x < 0.0 {
        x = 0.0;
        vx *= -config.bounce_factor;
    } else if x + body.size > bounds.width {
        x = bounds.right_wall_for(body.size);
        vx *= -config.bounce_factor;
    }

    // Ceiling, only while still rising (spawns enter from above with vy >= 0)
    if y < 0.0 && prev_vy < 0.0 {
        y = 0.0;
        vy *= -config.bounce_factor;
    }

    body.pos = Vec2::new(x, y);
    body.velocity = Vec2::new(vx, vy).clamp_components(config.max_speed);
    body.rotation_speed = rotation_speed.clamp(-config.max_speed, config.max_speed);

    if comes_to_rest {
        body.settle();
        counters.settled = 1;
    }

    counters
}

#[inline]
pub(crate) fn wrap_degrees(angle: f32) -> f32 {
    let wrapped = angle.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360.0 for tiny negative inputs
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}
