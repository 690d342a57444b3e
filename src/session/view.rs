//! Per-circuit view state.

use crate::circuits;
use crate::signal::{CircuitKind, InputSet, OutputSet};

/// The state of one circuit on screen.
///
/// The outputs are always the evaluation of the current inputs; the only way
/// to change them is to replace the inputs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CircuitView {
    inputs: InputSet,
    outputs: OutputSet,
    visible: bool,
}

impl CircuitView {
    /// Create a hidden view and evaluate it once.
    pub fn new(inputs: InputSet) -> Self {
        Self {
            outputs: circuits::evaluate(&inputs),
            inputs,
            visible: false,
        }
    }

    /// The circuit shown by this view.
    pub fn kind(&self) -> CircuitKind {
        self.inputs.kind()
    }

    /// Current inputs.
    pub fn inputs(&self) -> &InputSet {
        &self.inputs
    }

    /// Outputs derived from the current inputs.
    pub fn outputs(&self) -> &OutputSet {
        &self.outputs
    }

    /// Whether the adapter reported the view as on screen.
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub(crate) fn replace_inputs(&mut self, inputs: InputSet) -> OutputSet {
        debug_assert_eq!(inputs.kind(), self.inputs.kind());
        self.inputs = inputs;
        self.outputs = circuits::evaluate(&self.inputs);
        self.outputs
    }

    pub(crate) fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }
}
