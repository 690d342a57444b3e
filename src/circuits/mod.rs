//! Combinational circuit evaluators.
//!
//! This module provides the five circuits of the teaching page:
//! - [`decoder`]: 3-to-8 line decoder with enable
//! - [`encoder`]: 8-to-3 priority encoder
//! - [`gray`]: 3-bit Gray code to binary converter
//! - [`mux`]: 8:1 multiplexer with enable
//! - [`seven_segment`]: BCD to 7-segment decoder
//!
//! Each circuit exposes a typed function over fixed-size signal arrays. Named
//! [`InputSet`]s go through [`evaluate`], which picks the right circuit from a
//! dispatch table keyed by [`CircuitKind`]. All of them are pure and total.

pub mod decoder;
pub mod encoder;
pub mod gray;
pub mod mux;
pub mod seven_segment;

use crate::signal::{CircuitKind, InputSet, OutputSet};

/// Evaluator signature shared by every circuit.
pub type Evaluator = fn(&InputSet) -> OutputSet;

/// Dispatch table, in [`CircuitKind::ALL`] order.
const EVALUATORS: [(CircuitKind, Evaluator); 5] = [
    (CircuitKind::Decoder3to8, decoder::evaluate),
    (CircuitKind::PriorityEncoder8to3, encoder::evaluate),
    (CircuitKind::GrayToBinary3bit, gray::evaluate),
    (CircuitKind::Multiplexer8to1, mux::evaluate),
    (CircuitKind::BcdTo7Segment, seven_segment::evaluate),
];

/// Look up the evaluator for a circuit.
pub fn evaluator(kind: CircuitKind) -> Evaluator {
    EVALUATORS[kind.index()].1
}

/// Evaluate an input set with the evaluator for its circuit.
pub fn evaluate(inputs: &InputSet) -> OutputSet {
    let outputs = evaluator(inputs.kind())(inputs);
    log::trace!("{}: {} -> {}", inputs.kind(), inputs, outputs);
    outputs
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::signal::Signal;

    #[test]
    fn test_table_order_matches_kinds() {
        for (i, (kind, _)) in EVALUATORS.iter().enumerate() {
            assert_eq!(kind.index(), i);
        }
    }

    #[test]
    fn test_dispatch_uses_input_kind() {
        for kind in CircuitKind::ALL {
            let outputs = evaluate(&InputSet::new(kind));
            assert_eq!(outputs.kind(), kind);
            assert_eq!(outputs.values().len(), kind.output_count());
        }
    }

    #[test]
    fn test_reevaluation_is_identical() {
        let inputs = InputSet::new(CircuitKind::Multiplexer8to1)
            .with("I4", Signal::High)
            .and_then(|s| s.with("S2", Signal::High))
            .and_then(|s| s.with("EN", Signal::High))
            .unwrap();
        let first = evaluate(&inputs);
        let second = evaluate(&inputs);
        assert_eq!(first, second);
        assert_eq!(first.get("Y"), Some(Signal::High));
    }
}
