//! 8:1 multiplexer with enable and complemented output.

use crate::signal::{to_index, CircuitKind, InputSet, OutputSet, Readout, Signal};

const I0: usize = 0;
const S0: usize = 8;
const EN: usize = 11;

/// Result of a multiplexer evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MuxOutputs {
    /// Routed output
    pub y: Signal,
    /// Complemented output (low while disabled)
    pub y_not: Signal,
    /// Index of the addressed data line
    pub line: usize,
}

/// Route one of eight data lines to the output.
///
/// `code` is `[S0, S1, S2]`. While `enable` is low both `Y` and `Y'` are
/// forced low, so they are only complements when enabled.
pub fn select(data: [Signal; 8], code: [Signal; 3], enable: Signal) -> MuxOutputs {
    let line = to_index(&code);
    let selected = data[line];
    let (y, y_not) = if enable.is_high() {
        (selected, !selected)
    } else {
        (Signal::Low, Signal::Low)
    };
    MuxOutputs { y, y_not, line }
}

/// Evaluate a multiplexer input set (`I0..I7 S0 S1 S2 EN`) into `Y Y'`.
pub(crate) fn evaluate(inputs: &InputSet) -> OutputSet {
    debug_assert_eq!(inputs.kind(), CircuitKind::Multiplexer8to1);
    let v = inputs.values();
    let mut data = [Signal::Low; 8];
    data.copy_from_slice(&v[I0..I0 + 8]);
    let out = select(data, [v[S0], v[S0 + 1], v[S0 + 2]], v[EN]);
    OutputSet::new(
        CircuitKind::Multiplexer8to1,
        &[out.y, out.y_not],
        Some(Readout::Selected(out.line)),
    )
}
