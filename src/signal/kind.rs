//! The closed set of circuits and their pin tables.

use std::fmt;
use std::str::FromStr;

use crate::error::{LogicLabError, Result};

/// Largest input pin count of any circuit (the multiplexer).
pub const MAX_INPUTS: usize = 12;

/// Largest output pin count of any circuit (the decoder).
pub const MAX_OUTPUTS: usize = 8;

/// One of the five fixed circuits on the teaching page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CircuitKind {
    /// 3-to-8 line decoder with enable
    Decoder3to8,
    /// 8-to-3 priority encoder
    PriorityEncoder8to3,
    /// 3-bit Gray code to binary converter
    GrayToBinary3bit,
    /// 8:1 multiplexer with enable and complemented output
    Multiplexer8to1,
    /// BCD to 7-segment display decoder
    BcdTo7Segment,
}

impl CircuitKind {
    /// Every circuit, in dispatch-table order.
    pub const ALL: [CircuitKind; 5] = [
        CircuitKind::Decoder3to8,
        CircuitKind::PriorityEncoder8to3,
        CircuitKind::GrayToBinary3bit,
        CircuitKind::Multiplexer8to1,
        CircuitKind::BcdTo7Segment,
    ];

    /// Position in [`CircuitKind::ALL`].
    pub fn index(self) -> usize {
        match self {
            CircuitKind::Decoder3to8 => 0,
            CircuitKind::PriorityEncoder8to3 => 1,
            CircuitKind::GrayToBinary3bit => 2,
            CircuitKind::Multiplexer8to1 => 3,
            CircuitKind::BcdTo7Segment => 4,
        }
    }

    /// Short name used on the command line and in stimulus scripts.
    pub fn name(self) -> &'static str {
        match self {
            CircuitKind::Decoder3to8 => "decoder",
            CircuitKind::PriorityEncoder8to3 => "encoder",
            CircuitKind::GrayToBinary3bit => "gray",
            CircuitKind::Multiplexer8to1 => "mux",
            CircuitKind::BcdTo7Segment => "bcd",
        }
    }

    /// Human readable title.
    pub fn title(self) -> &'static str {
        match self {
            CircuitKind::Decoder3to8 => "3-to-8 Decoder",
            CircuitKind::PriorityEncoder8to3 => "8-to-3 Priority Encoder",
            CircuitKind::GrayToBinary3bit => "Gray to Binary Converter",
            CircuitKind::Multiplexer8to1 => "8:1 Multiplexer",
            CircuitKind::BcdTo7Segment => "BCD to 7-Segment Decoder",
        }
    }

    /// Look up a circuit by short name (case-insensitive).
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "decoder" | "dec" => Some(CircuitKind::Decoder3to8),
            "encoder" | "enc" => Some(CircuitKind::PriorityEncoder8to3),
            "gray" => Some(CircuitKind::GrayToBinary3bit),
            "mux" | "multiplexer" => Some(CircuitKind::Multiplexer8to1),
            "bcd" | "7seg" => Some(CircuitKind::BcdTo7Segment),
            _ => None,
        }
    }

    /// Input pin names, in storage order.
    pub fn input_names(self) -> &'static [&'static str] {
        match self {
            CircuitKind::Decoder3to8 => &["S0", "S1", "S2", "E"],
            CircuitKind::PriorityEncoder8to3 => &["Y0", "Y1", "Y2", "Y3", "Y4", "Y5", "Y6", "Y7"],
            CircuitKind::GrayToBinary3bit => &["G2", "G1", "G0"],
            CircuitKind::Multiplexer8to1 => &[
                "I0", "I1", "I2", "I3", "I4", "I5", "I6", "I7", "S0", "S1", "S2", "EN",
            ],
            CircuitKind::BcdTo7Segment => &["A", "B", "C", "D"],
        }
    }

    /// Output pin names, in storage order.
    pub fn output_names(self) -> &'static [&'static str] {
        match self {
            CircuitKind::Decoder3to8 => &["D0", "D1", "D2", "D3", "D4", "D5", "D6", "D7"],
            CircuitKind::PriorityEncoder8to3 => &["A2", "A1", "A0"],
            CircuitKind::GrayToBinary3bit => &["B2", "B1", "B0"],
            CircuitKind::Multiplexer8to1 => &["Y", "Y'"],
            CircuitKind::BcdTo7Segment => &["a", "b", "c", "d", "e", "f", "g"],
        }
    }

    /// Whether input pins are listed most significant first (`G2 G1 G0`).
    pub fn inputs_msb_first(self) -> bool {
        matches!(self, CircuitKind::GrayToBinary3bit)
    }

    /// Number of input pins.
    pub fn input_count(self) -> usize {
        self.input_names().len()
    }

    /// Number of output pins.
    pub fn output_count(self) -> usize {
        self.output_names().len()
    }

    /// Position of an input pin. Pin names are case-sensitive.
    pub fn input_index(self, name: &str) -> Option<usize> {
        self.input_names().iter().position(|pin| *pin == name)
    }

    /// Position of an output pin.
    pub fn output_index(self, name: &str) -> Option<usize> {
        self.output_names().iter().position(|pin| *pin == name)
    }

    /// The enable pin, for circuits that have one.
    pub fn enable_pin(self) -> Option<&'static str> {
        match self {
            CircuitKind::Decoder3to8 => Some("E"),
            CircuitKind::Multiplexer8to1 => Some("EN"),
            _ => None,
        }
    }
}

impl fmt::Display for CircuitKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for CircuitKind {
    type Err = LogicLabError;

    fn from_str(s: &str) -> Result<Self> {
        CircuitKind::from_name(s).ok_or_else(|| LogicLabError::UnknownCircuit {
            name: s.to_string(),
        })
    }
}
