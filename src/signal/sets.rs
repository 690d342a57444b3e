//! Named input and output sets.

use std::fmt;

use super::kind::{CircuitKind, MAX_INPUTS, MAX_OUTPUTS};
use super::types::{Readout, Signal};
use crate::error::{LogicLabError, Result};

/// The current inputs of one circuit.
///
/// Every pin always holds a valid [`Signal`]; pins that were never assigned
/// read as [`Signal::Low`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct InputSet {
    kind: CircuitKind,
    values: [Signal; MAX_INPUTS],
}

impl InputSet {
    /// Create an all-zero input set for a circuit.
    pub fn new(kind: CircuitKind) -> Self {
        Self {
            kind,
            values: [Signal::Low; MAX_INPUTS],
        }
    }

    /// Create an input set from values in pin order.
    ///
    /// Missing trailing values default to 0; extra values are ignored.
    pub fn from_values(kind: CircuitKind, values: &[Signal]) -> Self {
        let mut set = Self::new(kind);
        let n = values.len().min(kind.input_count());
        set.values[..n].copy_from_slice(&values[..n]);
        set
    }

    /// Builder-style assignment, for constructing sets in one expression.
    pub fn with(mut self, name: &str, value: Signal) -> Result<Self> {
        self.set(name, value)?;
        Ok(self)
    }

    /// Apply `PIN=BIT` assignments, as typed on a command line.
    ///
    /// Assignments are applied to this set directly, so the result is the
    /// same whatever order distinct pins are listed in.
    pub fn with_assignments<I, S>(mut self, assignments: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for assignment in assignments {
            let text = assignment.as_ref();
            let (name, value) = text
                .split_once('=')
                .ok_or_else(|| LogicLabError::InvalidAssignment {
                    text: text.to_string(),
                })?;
            self.set(name.trim(), value.parse()?)?;
        }
        Ok(self)
    }

    /// The circuit this set belongs to.
    pub fn kind(&self) -> CircuitKind {
        self.kind
    }

    /// Values in pin order.
    pub fn values(&self) -> &[Signal] {
        &self.values[..self.kind.input_count()]
    }

    /// Read a pin by name.
    pub fn get(&self, name: &str) -> Result<Signal> {
        Ok(self.values[self.index_of(name)?])
    }

    /// Assign a pin by name.
    pub fn set(&mut self, name: &str, value: Signal) -> Result<()> {
        let idx = self.index_of(name)?;
        self.values[idx] = value;
        Ok(())
    }

    /// Flip a pin, returning its new value.
    pub fn toggle(&mut self, name: &str) -> Result<Signal> {
        let idx = self.index_of(name)?;
        self.values[idx] = !self.values[idx];
        Ok(self.values[idx])
    }

    /// Drive every pin low.
    pub fn clear(&mut self) {
        self.values = [Signal::Low; MAX_INPUTS];
    }

    /// Iterate `(pin name, value)` pairs in pin order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, Signal)> + '_ {
        self.kind.input_names().iter().copied().zip(self.values().iter().copied())
    }

    fn index_of(&self, name: &str) -> Result<usize> {
        self.kind
            .input_index(name)
            .ok_or_else(|| LogicLabError::unknown_signal(self.kind.name(), name))
    }
}

impl fmt::Display for InputSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_pairs(f, self.iter())
    }
}

/// Outputs derived from an [`InputSet`].
///
/// Only the evaluators construct output sets; there is no way to modify one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OutputSet {
    kind: CircuitKind,
    values: [Signal; MAX_OUTPUTS],
    readout: Option<Readout>,
}

impl OutputSet {
    pub(crate) fn new(kind: CircuitKind, outputs: &[Signal], readout: Option<Readout>) -> Self {
        debug_assert_eq!(outputs.len(), kind.output_count());
        let mut values = [Signal::Low; MAX_OUTPUTS];
        let n = outputs.len().min(MAX_OUTPUTS);
        values[..n].copy_from_slice(&outputs[..n]);
        Self {
            kind,
            values,
            readout,
        }
    }

    /// The circuit that produced these outputs.
    pub fn kind(&self) -> CircuitKind {
        self.kind
    }

    /// Values in pin order.
    pub fn values(&self) -> &[Signal] {
        &self.values[..self.kind.output_count()]
    }

    /// Read an output by name.
    pub fn get(&self, name: &str) -> Option<Signal> {
        self.kind.output_index(name).map(|idx| self.values[idx])
    }

    /// Decimal digit, invalid marker or selected line, if the circuit has one.
    pub fn readout(&self) -> Option<Readout> {
        self.readout
    }

    /// Iterate `(pin name, value)` pairs in pin order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, Signal)> + '_ {
        self.kind.output_names().iter().copied().zip(self.values().iter().copied())
    }
}

impl fmt::Display for OutputSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_pairs(f, self.iter())?;
        if let Some(readout) = self.readout {
            write!(f, " [{}]", readout)?;
        }
        Ok(())
    }
}

fn write_pairs(
    f: &mut fmt::Formatter<'_>,
    pairs: impl Iterator<Item = (&'static str, Signal)>,
) -> fmt::Result {
    for (i, (name, value)) in pairs.enumerate() {
        if i > 0 {
            write!(f, " ")?;
        }
        write!(f, "{}={}", name, value)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unset_pins_default_low() {
        let set = InputSet::new(CircuitKind::Multiplexer8to1);
        assert_eq!(set.values().len(), 12);
        assert!(set.values().iter().all(|v| *v == Signal::Low));
    }

    #[test]
    fn test_set_get_toggle() {
        let mut set = InputSet::new(CircuitKind::Decoder3to8);
        set.set("S1", Signal::High).unwrap();
        assert_eq!(set.get("S1").unwrap(), Signal::High);
        assert_eq!(set.toggle("S1").unwrap(), Signal::Low);
        assert_eq!(set.toggle("E").unwrap(), Signal::High);
        assert_eq!(set.to_string(), "S0=0 S1=0 S2=0 E=1");
    }

    #[test]
    fn test_unknown_pin_is_rejected() {
        let mut set = InputSet::new(CircuitKind::GrayToBinary3bit);
        let err = set.set("G3", Signal::High).unwrap_err();
        assert!(matches!(err, LogicLabError::UnknownSignal { ref name, .. } if name == "G3"));
        // The set is untouched
        assert_eq!(set, InputSet::new(CircuitKind::GrayToBinary3bit));
    }

    #[test]
    fn test_from_values_pads_and_truncates() {
        let set = InputSet::from_values(CircuitKind::GrayToBinary3bit, &[Signal::High]);
        assert_eq!(set.values(), &[Signal::High, Signal::Low, Signal::Low]);

        let long = [Signal::High; 5];
        let set = InputSet::from_values(CircuitKind::GrayToBinary3bit, &long);
        assert_eq!(set.values().len(), 3);
    }

    #[test]
    fn test_assignments_ignore_order() {
        let enc = CircuitKind::PriorityEncoder8to3;
        let forward = InputSet::new(enc).with_assignments(["Y6=1", "Y2=1"]).unwrap();
        let backward = InputSet::new(enc).with_assignments(["Y2=1", "Y6=1"]).unwrap();
        assert_eq!(forward, backward);
        assert_eq!(forward.get("Y6").unwrap(), Signal::High);
        assert_eq!(forward.get("Y2").unwrap(), Signal::High);
    }

    #[test]
    fn test_assignments_keep_base_values() {
        let mut base = InputSet::new(CircuitKind::Decoder3to8);
        base.set("E", Signal::High).unwrap();
        let set = base.with_assignments(["S1 = 1"]).unwrap();
        assert_eq!(set.to_string(), "S0=0 S1=1 S2=0 E=1");

        let set = set.with_assignments(["E=0"]).unwrap();
        assert_eq!(set.get("E").unwrap(), Signal::Low);
    }

    #[test]
    fn test_malformed_assignments_are_rejected() {
        let set = InputSet::new(CircuitKind::BcdTo7Segment);
        assert!(matches!(
            set.with_assignments(["A"]),
            Err(LogicLabError::InvalidAssignment { .. })
        ));
        assert!(matches!(
            set.with_assignments(["A=2"]),
            Err(LogicLabError::InvalidSignal { .. })
        ));
        assert!(matches!(
            set.with_assignments(["a=1"]),
            Err(LogicLabError::UnknownSignal { .. })
        ));
    }

    #[test]
    fn test_output_display_includes_readout() {
        let out = OutputSet::new(
            CircuitKind::Multiplexer8to1,
            &[Signal::High, Signal::Low],
            Some(Readout::Selected(3)),
        );
        assert_eq!(out.get("Y"), Some(Signal::High));
        assert_eq!(out.get("Z"), None);
        assert_eq!(out.to_string(), "Y=1 Y'=0 [Selected: I3]");
    }
}
