//! Domain types: tunable physics constants, palette, configuration errors.

pub mod config;
pub mod error;
pub mod palette;

pub use config::PhysicsConfig;
pub use error::ConfigError;
