//! Shared building blocks: vector math, seeded randomness, console logging.

pub mod logging;
pub mod random;
pub mod vec2;

pub use random::{SessionRng, DEFAULT_SEED};
pub use vec2::Vec2;
