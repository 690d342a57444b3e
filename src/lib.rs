//! # Logic Lab Core
//!
//! Combinational logic evaluators behind an interactive digital logic
//! teaching page.
//!
//! This library provides:
//! - Five fixed circuits: 3-to-8 decoder, 8-to-3 priority encoder, 3-bit
//!   Gray-to-binary converter, 8:1 multiplexer and BCD-to-7-segment decoder
//! - Pure, total evaluators over named input and output sets
//! - Per-view session state driven by input-change events
//! - A render adapter boundary, with a text renderer and browser bindings
//! - A small scripting language for stepping circuits through input changes
//!
//! ## Architecture
//!
//! The library is organized into several modules:
//!
//! - [`signal`] - Signals, circuit kinds and their pin tables, input/output sets
//! - [`circuits`] - The evaluators and the dispatch table
//! - [`truth_table`] - Exhaustive enumeration of a circuit's inputs
//! - [`session`] - View state and input-change events
//! - [`render`] - The render adapter trait and the text renderer
//! - [`dsl`] - Parser and runner for stimulus scripts
//!
//! ## Usage
//!
//! ### Library
//!
//! ```
//! use logic_lab_core::{circuits, CircuitKind, InputSet, Signal};
//!
//! let inputs = InputSet::new(CircuitKind::GrayToBinary3bit)
//!     .with("G2", Signal::High)?
//!     .with("G1", Signal::High)?;
//! let outputs = circuits::evaluate(&inputs);
//! assert_eq!(outputs.to_string(), "B2=1 B1=0 B0=0");
//! # Ok::<(), logic_lab_core::LogicLabError>(())
//! ```
//!
//! ### Native CLI
//!
//! ```bash
//! logiclab eval bcd A=1 D=1 --segments
//! logiclab run walkthrough.stim
//! ```
//!
//! ### WASM
//!
//! ```javascript
//! import { WasmLogicLab } from 'logic_lab_core';
//!
//! const lab = new WasmLogicLab();
//! const segments = lab.set_input('bcd', 'D', 1);
//! ```

pub mod circuits;
pub mod dsl;
pub mod error;
pub mod render;
pub mod session;
pub mod signal;
pub mod truth_table;

// Re-export main types for convenience
pub use error::{LogicLabError, Result};
pub use session::{CircuitView, InputChange, Session, SessionConfig};
pub use signal::{CircuitKind, InputSet, OutputSet, Readout, Signal};
pub use truth_table::TruthTable;

// WASM bindings
#[cfg(feature = "wasm")]
mod wasm;

#[cfg(feature = "wasm")]
pub use wasm::WasmLogicLab;
