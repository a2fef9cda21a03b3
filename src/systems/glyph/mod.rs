//! Glyph bodies - the only simulated entity
//!
//! Stored as an axis-aligned square (top-left `pos`, side `size`) for
//! rendering and treated as a circle of radius `size / 2` for collisions.

mod body;

pub use body::Body;
