//! 3-to-8 line decoder.

use crate::signal::{to_index, CircuitKind, InputSet, OutputSet, Signal};

const S0: usize = 0;
const E: usize = 3;

/// Decode a 3-bit select code into a one-hot output vector.
///
/// `select` is `[S0, S1, S2]`. With `enable` low every output is low.
pub fn decode(select: [Signal; 3], enable: Signal) -> [Signal; 8] {
    let mut outputs = [Signal::Low; 8];
    if enable.is_high() {
        outputs[to_index(&select)] = Signal::High;
    }
    outputs
}

/// Evaluate a decoder input set (`S0 S1 S2 E`) into `D0..D7`.
pub(crate) fn evaluate(inputs: &InputSet) -> OutputSet {
    debug_assert_eq!(inputs.kind(), CircuitKind::Decoder3to8);
    let v = inputs.values();
    let outputs = decode([v[S0], v[S0 + 1], v[S0 + 2]], v[E]);
    OutputSet::new(CircuitKind::Decoder3to8, &outputs, None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::signal::from_index;

    #[test]
    fn test_enabled_is_one_hot() {
        for code in 0..8 {
            let outputs = decode(from_index(code), Signal::High);
            for (i, out) in outputs.iter().enumerate() {
                assert_eq!(out.is_high(), i == code, "code {} output {}", code, i);
            }
        }
    }

    #[test]
    fn test_disabled_is_all_low() {
        for code in 0..8 {
            assert_eq!(decode(from_index(code), Signal::Low), [Signal::Low; 8]);
        }
    }

    #[test]
    fn test_evaluate_named() {
        let inputs = InputSet::new(CircuitKind::Decoder3to8)
            .with("S0", Signal::High)
            .and_then(|s| s.with("S2", Signal::High))
            .and_then(|s| s.with("E", Signal::High))
            .unwrap();
        let outputs = evaluate(&inputs);
        assert_eq!(outputs.get("D5"), Some(Signal::High));
        assert_eq!(outputs.values().iter().filter(|s| s.is_high()).count(), 1);
        assert_eq!(outputs.readout(), None);
    }
}
