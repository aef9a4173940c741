//! WASM bindings for Ohm Lab.
//!
//! This module provides JavaScript-friendly bindings so a browser UI can
//! drive the lab solvers from its slider callbacks.
//!
//! ## Usage (JavaScript)
//!
//! ```javascript
//! import init, { WasmLab } from 'ohm_lab';
//!
//! await init();
//!
//! const lab = new WasmLab('kirchhoff');
//!
//! // In a slider's onChange handler:
//! lab.set('r3', Number(event.target.value));
//! const i3 = lab.quantity('i3');
//! ```

use wasm_bindgen::prelude::*;

use crate::circuit::{ParamKey, Topology};
use crate::error::LabError;
use crate::lab::{LabConfig, LabSession, Simulation, SimulationKind};

/// Initialize panic hook for better error messages in browser console.
#[wasm_bindgen(start)]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}

fn to_js(err: LabError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// WASM-compatible lab session.
#[wasm_bindgen]
pub struct WasmLab {
    session: LabSession,
}

#[wasm_bindgen]
impl WasmLab {
    /// Start a lab by simulation name (`wire`, `ohm`, `series-parallel`,
    /// `closed-circuit` or `kirchhoff`).
    #[wasm_bindgen(constructor)]
    pub fn new(kind: &str) -> Result<WasmLab, JsValue> {
        Self::with_clamping(kind, true)
    }

    /// Start a lab, choosing whether out-of-range inputs are clamped or rejected.
    #[wasm_bindgen]
    pub fn with_clamping(kind: &str, clamp_inputs: bool) -> Result<WasmLab, JsValue> {
        let kind = kind.parse::<SimulationKind>().map_err(to_js)?;
        let config = LabConfig::new().with_clamp_inputs(clamp_inputs);
        let session = LabSession::with_config(Simulation::new(kind), config).map_err(to_js)?;
        Ok(WasmLab { session })
    }

    /// Move a control and recompute.
    #[wasm_bindgen]
    pub fn set(&mut self, key: &str, value: f64) -> Result<(), JsValue> {
        let key = key
            .parse::<ParamKey>()
            .map_err(|_| to_js(LabError::unknown_parameter(key, self.session.kind())))?;
        self.session.set(key, value).map(|_| ()).map_err(to_js)
    }

    /// Switch between series (`true`) and parallel (`false`).
    #[wasm_bindgen]
    pub fn set_topology(&mut self, series: bool) -> Result<(), JsValue> {
        let topology = if series { Topology::Series } else { Topology::Parallel };
        self.session.set_topology(topology).map(|_| ()).map_err(to_js)
    }

    /// Current value of a control, or `undefined` if the lab has no such control.
    #[wasm_bindgen]
    pub fn param(&self, key: &str) -> Option<f64> {
        let key = key.parse::<ParamKey>().ok()?;
        self.session.simulation().get(key)
    }

    /// A solved quantity by name (e.g. `i_total`, `v_terminal`, `i3`).
    #[wasm_bindgen]
    pub fn quantity(&self, name: &str) -> Option<f64> {
        self.session.solution().quantity(name)
    }

    /// Names of every solved quantity, in display order.
    #[wasm_bindgen]
    pub fn quantity_names(&self) -> Vec<String> {
        self.session
            .solution()
            .quantities()
            .into_iter()
            .map(|q| q.name.to_string())
            .collect()
    }

    /// Plain-text summary of the lab state.
    #[wasm_bindgen]
    pub fn summary(&self) -> String {
        self.session.summary()
    }
}

/// Get the library version.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
