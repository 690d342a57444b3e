//! Exhaustive truth tables.

use std::fmt;

use crate::circuits;
use crate::signal::{from_index, CircuitKind, InputSet, OutputSet, Signal, MAX_INPUTS};

/// One row of a truth table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Row {
    pub inputs: InputSet,
    pub outputs: OutputSet,
}

/// Every input combination of a circuit together with its outputs.
///
/// Rows are ordered by input value. The first input pin is the least
/// significant bit, unless the circuit lists its pins most significant first,
/// in which case the last pin is.
#[derive(Debug, Clone)]
pub struct TruthTable {
    kind: CircuitKind,
    rows: Vec<Row>,
}

impl TruthTable {
    /// Build the table for a circuit.
    pub fn for_kind(kind: CircuitKind) -> Self {
        let width = kind.input_count();
        let evaluate = circuits::evaluator(kind);
        let rows = (0..1usize << width)
            .map(|value| {
                let mut bits: [Signal; MAX_INPUTS] = from_index(value);
                if kind.inputs_msb_first() {
                    bits[..width].reverse();
                }
                let inputs = InputSet::from_values(kind, &bits[..width]);
                Row {
                    inputs,
                    outputs: evaluate(&inputs),
                }
            })
            .collect();
        Self { kind, rows }
    }

    /// The circuit this table describes.
    pub fn kind(&self) -> CircuitKind {
        self.kind
    }

    /// All rows.
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }
}

impl fmt::Display for TruthTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inputs = self.kind.input_names();
        let outputs = self.kind.output_names();
        let has_readout = self.rows.iter().any(|row| row.outputs.readout().is_some());

        // Header
        writeln!(f, "{} | {}", inputs.join(" "), outputs.join(" "))?;

        for row in &self.rows {
            for (i, (name, value)) in row.inputs.iter().enumerate() {
                let sep = if i == 0 { "" } else { " " };
                write!(f, "{}{:>width$}", sep, value, width = name.len())?;
            }
            write!(f, " |")?;
            for (name, value) in row.outputs.iter() {
                write!(f, " {:>width$}", value, width = name.len())?;
            }
            if has_readout {
                if let Some(readout) = row.outputs.readout() {
                    write!(f, "  {}", readout)?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
