//! Signal representation shared by every circuit.
//!
//! This module provides the data model the evaluators work on: the binary
//! [`Signal`], the closed set of [`CircuitKind`]s with their pin tables, and
//! the named [`InputSet`] / [`OutputSet`] mappings.

mod kind;
mod sets;
mod types;

pub use kind::{CircuitKind, MAX_INPUTS, MAX_OUTPUTS};
pub use sets::{InputSet, OutputSet};
pub use types::*;
