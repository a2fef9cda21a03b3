use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;

use crate::api::FrameLoop;
use crate::domain::PhysicsConfig;

use super::step_stats::StepStats;
use super::{now_ms, WorldCore, RENDER_STRIDE};

fn clock_seed() -> u64 {
    now_ms() as u64
}

#[wasm_bindgen]
pub struct World {
    core: Rc<RefCell<WorldCore>>,
}

impl World {
    pub(crate) fn from_core(core: WorldCore) -> Self {
        Self {
            core: Rc::new(RefCell::new(core)),
        }
    }

    /// Shared handle to the session, for Rust-side drivers
    pub fn core(&self) -> Rc<RefCell<WorldCore>> {
        Rc::clone(&self.core)
    }
}

#[wasm_bindgen]
impl World {
    /// Create a world with default physics, seeded from the clock
    #[wasm_bindgen(constructor)]
    pub fn new(width: f32, height: f32) -> Self {
        Self::from_core(init_core(width, height, PhysicsConfig::default(), clock_seed()))
    }

    /// Reproducible world: the same seed gives the same spawn sequence
    #[wasm_bindgen(js_name = withSeed)]
    pub fn with_seed(width: f32, height: f32, seed: u32) -> Self {
        Self::from_core(init_core(width, height, PhysicsConfig::default(), u64::from(seed)))
    }

    /// World from a (partial) camelCase JSON config
    #[wasm_bindgen(js_name = withConfigJson)]
    pub fn with_config_json(
        width: f32,
        height: f32,
        json: &str,
        seed: Option<u32>,
    ) -> Result<World, JsValue> {
        let config = PhysicsConfig::from_json(json).map_err(|e| JsValue::from_str(&e.to_string()))?;
        let seed = seed.map_or_else(clock_seed, u64::from);
        let core = WorldCore::with_config(width, height, config, seed)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(Self::from_core(core))
    }

    #[wasm_bindgen(getter)]
    pub fn width(&self) -> f32 { self.core.borrow().width() }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> f32 { self.core.borrow().height() }

    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> u64 { self.core.borrow().frame() }

    #[wasm_bindgen(getter)]
    pub fn body_count(&self) -> usize { self.core.borrow().body_count() }

    #[wasm_bindgen(getter)]
    pub fn settled_count(&self) -> usize { self.core.borrow().settled_count() }

    /// Spawn one glyph. Returns its id, or -1 when the container size is
    /// unknown or the world is at capacity.
    pub fn spawn(&self) -> i32 {
        self.core
            .borrow_mut()
            .spawn()
            .and_then(|id| i32::try_from(id).ok())
            .unwrap_or(-1)
    }

    /// Host container resize
    pub fn resize(&self, width: f32, height: f32) {
        self.core.borrow_mut().resize(width, height);
    }

    /// Step the simulation forward one frame
    pub fn step(&self) {
        self.core.borrow_mut().step();
    }

    pub fn reseed(&self, seed: u32) {
        self.core.borrow_mut().reseed(u64::from(seed));
    }

    /// Get last step stats
    pub fn step_stats(&self) -> StepStats {
        self.core.borrow().step_stats()
    }

    // === RENDER API ===

    /// Refresh the render buffer. Returns its length in f32 elements.
    pub fn extract_render_buffer(&self) -> usize {
        self.core.borrow_mut().extract_render_buffer()
    }

    /// Pointer into wasm memory. Valid until the next `extract_render_buffer`.
    pub fn render_buffer_ptr(&self) -> *const f32 {
        self.core.borrow().render_buffer_ptr()
    }

    pub fn render_buffer_len(&self) -> usize {
        self.core.borrow().render_buffer().len()
    }

    pub fn render_buffer_len_bytes(&self) -> usize {
        self.render_buffer_len() * std::mem::size_of::<f32>()
    }

    pub fn render_stride(&self) -> usize {
        RENDER_STRIDE
    }

    pub fn snapshot_json(&self) -> String {
        self.core.borrow().snapshot_json()
    }

    // === CONFIG API ===

    pub fn palette_json(&self) -> String {
        self.core.borrow().config().palette_json()
    }

    pub fn glyph(&self) -> String {
        self.core.borrow().config().glyph.to_string()
    }

    pub fn config_json(&self) -> String {
        self.core.borrow().config().to_json()
    }

    /// Replace the physics config from (partial) JSON; unknown keys are ignored
    pub fn load_config_json(&self, json: &str) -> Result<(), JsValue> {
        let config = PhysicsConfig::from_json(json).map_err(|e| JsValue::from_str(&e.to_string()))?;
        self.core
            .borrow_mut()
            .set_config(config)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(())
    }

    // === FRAME LOOP ===

    /// Drive this world from `requestAnimationFrame`. `on_frame` is called
    /// after every step; render from it.
    pub fn frame_loop(&self, on_frame: js_sys::Function) -> FrameLoop {
        FrameLoop::new(self.core(), on_frame)
    }
}

fn init_core(width: f32, height: f32, config: PhysicsConfig, seed: u64) -> WorldCore {
    log::debug!(target: "glyph_drop::world", "new world {width}x{height} seed={seed}");
    super::init::create_world_core(width, height, config, seed)
}
