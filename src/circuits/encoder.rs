//! 8-to-3 priority encoder.
//!
//! There is no "valid" output: with no request line set the code is `000`,
//! the same as when only `Y0` is set.

use crate::signal::{from_index, CircuitKind, InputSet, OutputSet, Signal};

/// Index of the highest request line that is set, if any.
pub fn highest_active(lines: &[Signal; 8]) -> Option<usize> {
    (0..lines.len()).rev().find(|&i| lines[i].is_high())
}

/// Encode request lines `[Y0..Y7]` into `[A2, A1, A0]`.
pub fn encode(lines: [Signal; 8]) -> [Signal; 3] {
    let [a0, a1, a2] = from_index::<3>(highest_active(&lines).unwrap_or(0));
    [a2, a1, a0]
}

/// Evaluate an encoder input set (`Y0..Y7`) into `A2 A1 A0`.
pub(crate) fn evaluate(inputs: &InputSet) -> OutputSet {
    debug_assert_eq!(inputs.kind(), CircuitKind::PriorityEncoder8to3);
    let mut lines = [Signal::Low; 8];
    lines.copy_from_slice(inputs.values());
    OutputSet::new(CircuitKind::PriorityEncoder8to3, &encode(lines), None)
}
