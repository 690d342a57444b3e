//! WASM bindings for Logic Lab Core.
//!
//! This module provides JavaScript-friendly bindings for the teaching page.
//! The page keeps drawing its canvases; Rust owns the circuit state and the
//! logic.
//!
//! ## Usage (JavaScript)
//!
//! ```javascript
//! import init, { WasmLogicLab } from 'logic_lab_core';
//!
//! await init();
//!
//! const lab = new WasmLogicLab();
//!
//! // Button handler
//! const outputs = lab.toggle('mux', 'I3');
//! drawMultiplexer(lab.output_names('mux'), outputs, lab.readout('mux'));
//!
//! // Once the canvas has a size (e.g. from a ResizeObserver)
//! drawMultiplexer(lab.output_names('mux'), lab.became_visible('mux'), lab.readout('mux'));
//! ```

use wasm_bindgen::prelude::*;

use crate::error::LogicLabError;
use crate::session::{InputChange, Session, SessionConfig};
use crate::signal::{CircuitKind, OutputSet, Signal};

/// Initialize panic hook for better error messages in browser console.
#[wasm_bindgen(start)]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}

fn to_js(err: LogicLabError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn kind(name: &str) -> Result<CircuitKind, JsValue> {
    name.parse::<CircuitKind>().map_err(to_js)
}

fn bits(outputs: &OutputSet) -> Vec<u8> {
    outputs.values().iter().map(|s| s.bit()).collect()
}

/// WASM-compatible logic session.
///
/// Every method taking a circuit name accepts `decoder`, `encoder`, `gray`,
/// `mux` or `bcd`, and returns output bits in the order given by
/// `output_names`.
#[wasm_bindgen]
pub struct WasmLogicLab {
    session: Session,
}

#[wasm_bindgen]
impl WasmLogicLab {
    /// Create a session with the page's default behavior.
    #[wasm_bindgen(constructor)]
    pub fn new() -> WasmLogicLab {
        Self::with_config(true, true)
    }

    /// Create a session with explicit settings.
    ///
    /// # Arguments
    /// * `exclusive_encoder_inputs` - raising one encoder line lowers the rest
    /// * `enables_high` - decoder and multiplexer start enabled
    #[wasm_bindgen]
    pub fn with_config(exclusive_encoder_inputs: bool, enables_high: bool) -> WasmLogicLab {
        let config = SessionConfig::new()
            .with_exclusive_encoder_inputs(exclusive_encoder_inputs)
            .with_enables_high(enables_high);
        WasmLogicLab {
            session: Session::new(config),
        }
    }

    /// Drive an input pin to 0 or 1.
    #[wasm_bindgen]
    pub fn set_input(&mut self, circuit: &str, pin: &str, value: u8) -> Result<Vec<u8>, JsValue> {
        let signal = Signal::try_from(value).map_err(to_js)?;
        let change = InputChange::set(kind(circuit)?, pin, signal);
        self.session.apply(&change).map(|o| bits(&o)).map_err(to_js)
    }

    /// Flip an input pin.
    #[wasm_bindgen]
    pub fn toggle(&mut self, circuit: &str, pin: &str) -> Result<Vec<u8>, JsValue> {
        let change = InputChange::toggle(kind(circuit)?, pin);
        self.session.apply(&change).map(|o| bits(&o)).map_err(to_js)
    }

    /// Current input bits, in the order given by `input_names`.
    #[wasm_bindgen]
    pub fn inputs(&mut self, circuit: &str) -> Result<Vec<u8>, JsValue> {
        let view = self.session.open(kind(circuit)?);
        Ok(view.inputs().values().iter().map(|s| s.bit()).collect())
    }

    /// Current output bits.
    #[wasm_bindgen]
    pub fn outputs(&mut self, circuit: &str) -> Result<Vec<u8>, JsValue> {
        Ok(bits(self.session.open(kind(circuit)?).outputs()))
    }

    /// Input pin names.
    #[wasm_bindgen]
    pub fn input_names(&self, circuit: &str) -> Result<Vec<JsValue>, JsValue> {
        let names = kind(circuit)?.input_names();
        Ok(names.iter().map(|n| JsValue::from_str(n)).collect())
    }

    /// Output pin names.
    #[wasm_bindgen]
    pub fn output_names(&self, circuit: &str) -> Result<Vec<JsValue>, JsValue> {
        let names = kind(circuit)?.output_names();
        Ok(names.iter().map(|n| JsValue::from_str(n)).collect())
    }

    /// Text shown next to the indicators (`"7"`, `"-"`, `"Selected: I3"`),
    /// or `undefined` for circuits without one.
    #[wasm_bindgen]
    pub fn readout(&mut self, circuit: &str) -> Result<Option<String>, JsValue> {
        let view = self.session.open(kind(circuit)?);
        Ok(view.outputs().readout().map(|r| r.to_string()))
    }

    /// Report that a circuit's canvas can be drawn; returns its outputs.
    #[wasm_bindgen]
    pub fn became_visible(&mut self, circuit: &str) -> Result<Vec<u8>, JsValue> {
        let kind = kind(circuit)?;
        self.session.became_visible(kind).map_err(to_js)?;
        Ok(bits(self.session.open(kind).outputs()))
    }

    /// Report that a circuit's canvas left the screen.
    #[wasm_bindgen]
    pub fn became_hidden(&mut self, circuit: &str) -> Result<(), JsValue> {
        self.session.became_hidden(kind(circuit)?);
        Ok(())
    }

    /// Restore a circuit's initial inputs; returns its outputs.
    #[wasm_bindgen]
    pub fn reset(&mut self, circuit: &str) -> Result<Vec<u8>, JsValue> {
        self.session
            .reset(kind(circuit)?)
            .map(|o| bits(&o))
            .map_err(to_js)
    }
}

impl Default for WasmLogicLab {
    fn default() -> Self {
        Self::new()
    }
}

/// Get the library version.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
