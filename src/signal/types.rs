//! Core binary types shared by every circuit.

use std::fmt;
use std::ops::{BitAnd, BitOr, BitXor, Not};
use std::str::FromStr;

use crate::error::{LogicLabError, Result};

/// A single binary signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum Signal {
    /// Logic 0
    #[default]
    Low,
    /// Logic 1
    High,
}

impl Signal {
    /// Convert a raw integer, rejecting anything but 0 and 1.
    pub fn from_int(value: i64) -> Result<Self> {
        match value {
            0 => Ok(Signal::Low),
            1 => Ok(Signal::High),
            _ => Err(LogicLabError::InvalidSignal { value }),
        }
    }

    /// Check if the signal is logic 1.
    pub fn is_high(self) -> bool {
        self == Signal::High
    }

    /// The signal as 0 or 1.
    pub fn bit(self) -> u8 {
        match self {
            Signal::Low => 0,
            Signal::High => 1,
        }
    }
}

impl From<bool> for Signal {
    fn from(value: bool) -> Self {
        if value {
            Signal::High
        } else {
            Signal::Low
        }
    }
}

impl From<Signal> for bool {
    fn from(signal: Signal) -> Self {
        signal.is_high()
    }
}

impl TryFrom<u8> for Signal {
    type Error = LogicLabError;

    fn try_from(value: u8) -> Result<Self> {
        Signal::from_int(i64::from(value))
    }
}

impl FromStr for Signal {
    type Err = LogicLabError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "0" => Ok(Signal::Low),
            "1" => Ok(Signal::High),
            other => Err(LogicLabError::InvalidSignal {
                // Non-numeric text is reported as -1
                value: other.parse::<i64>().unwrap_or(-1),
            }),
        }
    }
}

impl fmt::Display for Signal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.bit(), f)
    }
}

impl Not for Signal {
    type Output = Signal;

    fn not(self) -> Signal {
        match self {
            Signal::Low => Signal::High,
            Signal::High => Signal::Low,
        }
    }
}

impl BitXor for Signal {
    type Output = Signal;

    fn bitxor(self, rhs: Signal) -> Signal {
        Signal::from(self != rhs)
    }
}

impl BitAnd for Signal {
    type Output = Signal;

    fn bitand(self, rhs: Signal) -> Signal {
        Signal::from(self.is_high() && rhs.is_high())
    }
}

impl BitOr for Signal {
    type Output = Signal;

    fn bitor(self, rhs: Signal) -> Signal {
        Signal::from(self.is_high() || rhs.is_high())
    }
}

/// Weighted value of a little-endian bit group (`bits[0]` is the LSB).
pub fn to_index(bits: &[Signal]) -> usize {
    bits.iter()
        .enumerate()
        .fold(0, |acc, (i, bit)| acc | (usize::from(bit.bit()) << i))
}

/// Split a value into `N` little-endian bits.
pub fn from_index<const N: usize>(value: usize) -> [Signal; N] {
    let mut bits = [Signal::Low; N];
    for (i, bit) in bits.iter_mut().enumerate() {
        *bit = Signal::from((value >> i) & 1 == 1);
    }
    bits
}

/// Auxiliary annotation shown next to a circuit's indicators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Readout {
    /// A valid BCD digit
    Decimal(u8),
    /// BCD input outside 0-9
    Invalid,
    /// Index of the data line a multiplexer routes
    Selected(usize),
}

impl fmt::Display for Readout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Readout::Decimal(digit) => write!(f, "{}", digit),
            Readout::Invalid => write!(f, "-"),
            Readout::Selected(line) => write!(f, "Selected: I{}", line),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_int_rejects_non_binary() {
        assert_eq!(Signal::from_int(0).unwrap(), Signal::Low);
        assert_eq!(Signal::from_int(1).unwrap(), Signal::High);
        assert!(matches!(
            Signal::from_int(2),
            Err(LogicLabError::InvalidSignal { value: 2 })
        ));
        assert!(Signal::try_from(7u8).is_err());
        assert!("x".parse::<Signal>().is_err());
        assert_eq!(" 1".parse::<Signal>().unwrap(), Signal::High);
    }

    #[test]
    fn test_operators() {
        use Signal::{High, Low};
        assert_eq!(High ^ High, Low);
        assert_eq!(High ^ Low, High);
        assert_eq!(!Low, High);
        assert_eq!(High & Low, Low);
        assert_eq!(High | Low, High);
    }

    #[test]
    fn test_index_round_trip_is_lsb_first() {
        let bits = [Signal::High, Signal::High, Signal::Low];
        assert_eq!(to_index(&bits), 3);
        assert_eq!(from_index::<3>(6), [Signal::Low, Signal::High, Signal::High]);
    }

    #[test]
    fn test_readout_display() {
        assert_eq!(Readout::Decimal(7).to_string(), "7");
        assert_eq!(Readout::Invalid.to_string(), "-");
        assert_eq!(Readout::Selected(3).to_string(), "Selected: I3");
    }
}
