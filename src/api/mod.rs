//! Browser-facing surface: the `World` facade and its animation-frame driver.

mod frame_loop;

pub use frame_loop::FrameLoop;

pub mod wasm {
    pub use crate::simulation::{StepStats, World};
    pub use super::FrameLoop;
}
