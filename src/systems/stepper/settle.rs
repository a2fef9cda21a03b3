use crate::domain::PhysicsConfig;
use crate::systems::bounds::Bounds;
use crate::systems::glyph::Body;

/// Re-confine every unsettled body after collision correction and freeze
/// the ones that came to rest on the floor. Returns how many settled.
pub fn settle_pass(bodies: &mut [Body], config: &PhysicsConfig, bounds: Bounds) -> u32 {
    let mut settled = 0;
    for body in bodies.iter_mut().filter(|b| !b.settled) {
        confine(body, config, bounds);
        if is_at_rest(body, config, bounds) {
            body.pos.y = bounds.floor_for(body.size);
            body.settle();
            settled += 1;
        }
    }
    settled
}

/// Pull a body back inside the walls and above the floor, and cap its speed.
/// Velocities are not reflected here.
pub fn confine(body: &mut Body, config: &PhysicsConfig, bounds: Bounds) {
    let right = bounds.right_wall_for(body.size);
    body.pos.x = body.pos.x.min(right).max(0.0);
    body.pos.y = body.pos.y.min(bounds.floor_for(body.size));
    body.velocity = body.velocity.clamp_components(config.max_speed);
    body.rotation_speed = body.rotation_speed.clamp(-config.max_speed, config.max_speed);
}

/// Near the floor and slow on every axis
pub fn is_at_rest(body: &Body, config: &PhysicsConfig, bounds: Bounds) -> bool {
    body.velocity.y.abs() < config.settle_velocity
        && body.pos.y >= bounds.floor_for(body.size) - config.settle_distance
        && body.velocity.x.abs() < config.settle_horizontal_velocity()
        && body.rotation_speed.abs() < config.settle_rotation_speed
}
