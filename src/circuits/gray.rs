//! 3-bit Gray code to binary converter.

use crate::signal::{CircuitKind, InputSet, OutputSet, Signal};

/// Convert `[G2, G1, G0]` into `[B2, B1, B0]` with the ripple XOR chain.
pub fn gray_to_binary(gray: [Signal; 3]) -> [Signal; 3] {
    let [g2, g1, g0] = gray;
    let b2 = g2;
    let b1 = b2 ^ g1;
    let b0 = b1 ^ g0;
    [b2, b1, b0]
}

/// Evaluate a converter input set (`G2 G1 G0`) into `B2 B1 B0`.
pub(crate) fn evaluate(inputs: &InputSet) -> OutputSet {
    debug_assert_eq!(inputs.kind(), CircuitKind::GrayToBinary3bit);
    let v = inputs.values();
    let outputs = gray_to_binary([v[0], v[1], v[2]]);
    OutputSet::new(CircuitKind::GrayToBinary3bit, &outputs, None)
}
