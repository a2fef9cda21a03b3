//! requestAnimationFrame driver.
//!
//! Every frame: step the world once, call the host's `on_frame`, then request
//! the next frame. The scheduled callback only holds a weak handle, so
//! dropping the `FrameLoop` ends the loop and frees the closure.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use crate::simulation::WorldCore;

#[wasm_bindgen]
pub struct FrameLoop {
    state: Rc<LoopState>,
}

struct LoopState {
    core: Rc<RefCell<WorldCore>>,
    on_frame: js_sys::Function,
    running: Cell<bool>,
    /// Pending `requestAnimationFrame` handle
    handle: Cell<Option<i32>>,
    callback: RefCell<Option<Closure<dyn FnMut()>>>,
}

impl FrameLoop {
    pub fn new(core: Rc<RefCell<WorldCore>>, on_frame: js_sys::Function) -> Self {
        let state = Rc::new(LoopState {
            core,
            on_frame,
            running: Cell::new(false),
            handle: Cell::new(None),
            callback: RefCell::new(None),
        });

        let weak: Weak<LoopState> = Rc::downgrade(&state);
        let callback = Closure::wrap(Box::new(move || {
            if let Some(state) = weak.upgrade() {
                state.tick();
            }
        }) as Box<dyn FnMut()>);
        *state.callback.borrow_mut() = Some(callback);

        Self { state }
    }
}

#[wasm_bindgen]
impl FrameLoop {
    /// Start stepping. No-op while already running.
    pub fn start(&self) {
        if self.state.running.replace(true) {
            return;
        }
        log::debug!(target: "glyph_drop::frame_loop", "start");
        self.state.schedule();
    }

    /// Stop stepping and cancel the pending frame
    pub fn stop(&self) {
        if !self.state.running.replace(false) {
            return;
        }
        log::debug!(target: "glyph_drop::frame_loop", "stop");
        self.state.cancel();
    }

    #[wasm_bindgen(getter)]
    pub fn is_running(&self) -> bool {
        self.state.running.get()
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        self.state.running.set(false);
        self.state.cancel();
    }
}

impl LoopState {
    fn tick(&self) {
        self.handle.set(None);
        if !self.running.get() {
            return;
        }

        match self.core.try_borrow_mut() {
            Ok(mut core) => core.step(),
            // World is borrowed elsewhere; skip this step, keep the loop alive
            Err(_) => log::warn!(target: "glyph_drop::frame_loop", "world busy, frame skipped"),
        }

        if let Err(err) = self.on_frame.call0(&JsValue::NULL) {
            log::error!(target: "glyph_drop::frame_loop", "on_frame threw: {err:?}");
            self.running.set(false);
            return;
        }

        // on_frame may have stopped the loop
        if self.running.get() {
            self.schedule();
        }
    }

    fn schedule(&self) {
        let Some(window) = web_sys::window() else {
            log::error!(target: "glyph_drop::frame_loop", "no window, loop stopped");
            self.running.set(false);
            return;
        };

        let guard = self.callback.borrow();
        let Some(callback) = guard.as_ref() else {
            self.running.set(false);
            return;
        };

        match window.request_animation_frame(callback.as_ref().unchecked_ref()) {
            Ok(handle) => self.handle.set(Some(handle)),
            Err(err) => {
                log::error!(target: "glyph_drop::frame_loop", "requestAnimationFrame failed: {err:?}");
                self.running.set(false);
            }
        }
    }

    fn cancel(&self) {
        let Some(handle) = self.handle.take() else {
            return;
        };
        if let Some(window) = web_sys::window() {
            if let Err(err) = window.cancel_animation_frame(handle) {
                log::warn!(target: "glyph_drop::frame_loop", "cancelAnimationFrame failed: {err:?}");
            }
        }
    }
}
