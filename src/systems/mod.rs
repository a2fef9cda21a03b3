//! Simulation systems: the body type, the spawner and the per-frame stepper.

pub mod bounds;
pub mod glyph;
pub mod spawner;
pub mod stepper;

pub use bounds::Bounds;
pub use glyph::Body;
