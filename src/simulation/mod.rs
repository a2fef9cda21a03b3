//! WorldCore - one glyph drop session
//!
//! Owns everything a session mutates: the ordered body collection, the
//! container bounds, the physics config, the seeded RNG and the frame
//! counter. Nothing is global; the WASM facade owns one `WorldCore`.
//!
//! Operations are split by concern:
//! - commands/ - spawn, placement, resize
//! - step/     - the per-frame pipeline
//! - render/   - flat buffer / JSON extraction for the host
//! - perf/     - step statistics and timing
//! - init/     - construction and settings

use crate::core::SessionRng;
use crate::domain::{ConfigError, PhysicsConfig};
use crate::systems::{Body, Bounds};

#[path = "perf/perf_timer.rs"]
mod perf_timer;
#[path = "perf/step_stats.rs"]
mod step_stats;
#[path = "step/step.rs"]
mod step;
#[path = "commands/commands.rs"]
mod commands;
#[path = "render/render_extract.rs"]
mod render_extract;
#[path = "init/init.rs"]
mod init;
#[path = "init/settings.rs"]
mod settings;
mod facade;

pub use facade::World;
pub use render_extract::{RENDER_STRIDE, SLOT_COLOR, SLOT_ID, SLOT_OPACITY, SLOT_ROTATION, SLOT_SETTLED, SLOT_SIZE, SLOT_X, SLOT_Y};
pub use step_stats::StepStats;

pub(crate) use perf_timer::{now_ms, StepTimer};

/// The simulation session
pub struct WorldCore {
    config: PhysicsConfig,
    bounds: Bounds,
    bodies: Vec<Body>,
    next_id: u32,
    rng: SessionRng,

    // State
    frame: u64,
    stats: StepStats,

    // Render transfer buffer (RENDER_STRIDE floats per body)
    render_buffer: Vec<f32>,
}

impl WorldCore {
    /// Create a session with default physics and a fixed seed
    pub fn new(width: f32, height: f32) -> Self {
        init::create_world_core(width, height, PhysicsConfig::default(), crate::core::DEFAULT_SEED)
    }

    /// Create a session with an explicit config and seed
    pub fn with_config(
        width: f32,
        height: f32,
        config: PhysicsConfig,
        seed: u64,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(init::create_world_core(width, height, config, seed))
    }

    pub fn width(&self) -> f32 { self.bounds.width }

    pub fn height(&self) -> f32 { self.bounds.height }

    pub fn bounds(&self) -> Bounds { self.bounds }

    pub fn frame(&self) -> u64 { self.frame }

    pub fn body_count(&self) -> usize { self.bodies.len() }

    pub fn settled_count(&self) -> usize {
        self.bodies.iter().filter(|b| b.settled).count()
    }

    /// Bodies in insertion (= render) order
    pub fn bodies(&self) -> &[Body] { &self.bodies }

    pub fn body(&self, id: u32) -> Option<&Body> {
        self.bodies.iter().find(|b| b.id == id)
    }

    pub fn config(&self) -> &PhysicsConfig {
        settings::config(self)
    }

    /// Replace the physics config. Existing bodies keep their size and state.
    pub fn set_config(&mut self, config: PhysicsConfig) -> Result<(), ConfigError> {
        settings::set_config(self, config)
    }

    /// Restart the random sequence used by spawns and collision spin
    pub fn reseed(&mut self, seed: u64) {
        settings::reseed(self, seed)
    }

    /// Stats of the last completed step
    pub fn step_stats(&self) -> StepStats {
        self.stats.clone()
    }

    /// Update the container size (host resize). Out-of-bounds bodies are
    /// pulled back in by the next step.
    pub fn resize(&mut self, width: f32, height: f32) {
        commands::resize(self, width, height)
    }

    /// Spawn one randomized body above the container.
    /// Returns `None` while the container size is unknown or at capacity.
    pub fn spawn(&mut self) -> Option<u32> {
        commands::spawn(self)
    }

    /// Append a caller-built body; its ID is assigned here
    pub fn place_body(&mut self, body: Body) -> u32 {
        commands::place_body(self, body)
    }

    /// Advance the simulation by one frame
    pub fn step(&mut self) {
        step::step(self);
    }

    /// Fill the render buffer from the current bodies; returns its length
    pub fn extract_render_buffer(&mut self) -> usize {
        render_extract::extract_render_buffer(self)
    }

    pub fn render_buffer(&self) -> &[f32] {
        &self.render_buffer
    }

    pub fn render_buffer_ptr(&self) -> *const f32 {
        self.render_buffer.as_ptr()
    }

    /// Bodies as a JSON array (camelCase)
    pub fn snapshot_json(&self) -> String {
        render_extract::snapshot_json(self)
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
