//! Glyph Drop Engine - falling-glyph physics toy in WASM
//!
//! Glyphs spawn above a container, fall under gravity, bounce off the floor
//! and walls, collide as circles and eventually come to rest on the floor.
//!
//! Architecture:
//! - core/       - vector math, seeded RNG, console logging
//! - domain/     - physics config, palette, errors
//! - systems/    - bodies, spawner, per-frame stepper
//! - simulation/ - WorldCore session + wasm `World` facade
//! - api/        - frame loop, public wasm surface

pub mod core;
pub mod domain;
pub mod systems;
pub mod simulation;
pub mod api;

use wasm_bindgen::prelude::*;

// Re-export wasm-bindgen-rayon for thread pool initialization
#[cfg(feature = "parallel")]
pub use wasm_bindgen_rayon::init_thread_pool;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine: panic hook and console logging
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    crate::core::logging::init_console_logger(log::LevelFilter::Info);
    log::info!(target: "glyph_drop", "engine {} initialized", env!("CARGO_PKG_VERSION"));
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Floats per body in the render buffer
#[wasm_bindgen]
pub fn render_stride() -> usize {
    simulation::RENDER_STRIDE
}

// Re-export main types
pub use api::wasm::{FrameLoop, StepStats, World};
pub use crate::core::Vec2;
pub use domain::{ConfigError, PhysicsConfig};
pub use simulation::WorldCore;
pub use systems::{Body, Bounds};
