//! BCD to 7-segment display decoder.
//!
//! Segments are labelled the usual way:
//!
//! ```text
//!  aaa
//! f   b
//!  ggg
//! e   c
//!  ddd
//! ```

use crate::signal::{to_index, CircuitKind, InputSet, OutputSet, Readout, Signal};

/// Segment patterns `[a, b, c, d, e, f, g]` for the digits 0-9.
pub const SEGMENT_PATTERNS: [[u8; 7]; 10] = [
    [1, 1, 1, 1, 1, 1, 0], // 0
    [0, 1, 1, 0, 0, 0, 0], // 1
    [1, 1, 0, 1, 1, 0, 1], // 2
    [1, 1, 1, 1, 0, 0, 1], // 3
    [0, 1, 1, 0, 0, 1, 1], // 4
    [1, 0, 1, 1, 0, 1, 1], // 5
    [1, 0, 1, 1, 1, 1, 1], // 6
    [1, 1, 1, 0, 0, 0, 0], // 7
    [1, 1, 1, 1, 1, 1, 1], // 8
    [1, 1, 1, 1, 0, 1, 1], // 9
];

/// Segments for a digit; values above 9 light nothing.
pub fn segments_for(value: usize) -> [Signal; 7] {
    let mut segments = [Signal::Low; 7];
    if let Some(pattern) = SEGMENT_PATTERNS.get(value) {
        for (seg, bit) in segments.iter_mut().zip(pattern) {
            *seg = Signal::from(*bit == 1);
        }
    }
    segments
}

/// Decode `[A, B, C, D]` (A is the LSB) into segments and a decimal readout.
pub fn decode_bcd(bcd: [Signal; 4]) -> ([Signal; 7], Readout) {
    let value = to_index(&bcd);
    let readout = match u8::try_from(value) {
        Ok(digit) if digit <= 9 => Readout::Decimal(digit),
        _ => Readout::Invalid,
    };
    (segments_for(value), readout)
}

/// Evaluate a BCD input set (`A B C D`) into segments `a..g`.
pub(crate) fn evaluate(inputs: &InputSet) -> OutputSet {
    debug_assert_eq!(inputs.kind(), CircuitKind::BcdTo7Segment);
    let v = inputs.values();
    let (segments, readout) = decode_bcd([v[0], v[1], v[2], v[3]]);
    OutputSet::new(CircuitKind::BcdTo7Segment, &segments, Some(readout))
}
