use crate::core::SessionRng;
use crate::domain::{ConfigError, PhysicsConfig};

use super::WorldCore;

pub(super) fn config(world: &WorldCore) -> &PhysicsConfig {
    &world.config
}

pub(super) fn set_config(world: &mut WorldCore, config: PhysicsConfig) -> Result<(), ConfigError> {
    config.validate()?;

    log::debug!(
        target: "glyph_drop::settings",
        "config replaced (gravity={}, bodies={})",
        config.gravity,
        world.bodies.len()
    );
    world.config = config;
    Ok(())
}

pub(super) fn reseed(world: &mut WorldCore, seed: u64) {
    world.rng = SessionRng::seeded(seed);
}
