//! Parsed representation of a stimulus script.

use crate::signal::{CircuitKind, Signal};

/// A complete stimulus script.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Stimulus {
    /// Steps in script order
    pub steps: Vec<Step>,
}

/// One step of a script, bound to the circuit selected at that point.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    /// Target circuit
    pub kind: CircuitKind,
    /// What to do
    pub action: Action,
    /// Source line number for error reporting
    pub line: usize,
}

/// Step actions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// `.circuit <name>`: bring the circuit on screen
    Select,
    /// `.hide`: take the circuit off screen
    Hide,
    /// `PIN=bit ...`: drive pins, left to right
    Assign(Vec<(String, Signal)>),
    /// `.toggle PIN ...`: flip pins, left to right
    Toggle(Vec<String>),
    /// `.reset`: restore the initial inputs
    Reset,
}
