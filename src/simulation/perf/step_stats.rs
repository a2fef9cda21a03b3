use wasm_bindgen::prelude::*;

/// Counters for the last completed step
#[wasm_bindgen]
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StepStats {
    pub(super) frame: u64,
    pub(super) body_count: u32,
    /// Unsettled bodies integrated this step
    pub(super) active: u32,
    pub(super) floor_contacts: u32,
    pub(super) pair_checks: u32,
    pub(super) contacts: u32,
    pub(super) impulses: u32,
    /// Settled by the integrator or the final settle pass
    pub(super) newly_settled: u32,
    pub(super) step_ms: f64,
}

impl StepStats {
    pub(crate) fn reset(&mut self) {
        *self = StepStats::default();
    }
}

#[wasm_bindgen]
impl StepStats {
    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> u64 { self.frame }
    #[wasm_bindgen(getter)]
    pub fn body_count(&self) -> u32 { self.body_count }
    #[wasm_bindgen(getter)]
    pub fn active(&self) -> u32 { self.active }
    #[wasm_bindgen(getter)]
    pub fn floor_contacts(&self) -> u32 { self.floor_contacts }
    #[wasm_bindgen(getter)]
    pub fn pair_checks(&self) -> u32 { self.pair_checks }
    #[wasm_bindgen(getter)]
    pub fn contacts(&self) -> u32 { self.contacts }
    #[wasm_bindgen(getter)]
    pub fn impulses(&self) -> u32 { self.impulses }
    #[wasm_bindgen(getter)]
    pub fn newly_settled(&self) -> u32 { self.newly_settled }
    #[wasm_bindgen(getter)]
    pub fn step_ms(&self) -> f64 { self.step_ms }
}
