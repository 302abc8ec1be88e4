//! Encoded line identifiers
//!
//! A watch slot stores its line in a single byte: digital lines as-is,
//! analog lines offset by [`ANALOG_BIAS`]. Decoding subtracts the bias;
//! a value that stays non-negative is analog.

use tickloop_hal::gpio::Line;

use crate::config::ANALOG_BIAS;

/// Read mode and physical line of a watch slot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LineKind {
    /// Digital input, reads 0 or 1
    Digital(Line),
    /// Analog input, reads the raw converter value
    Analog(Line),
}

/// Line number with its read mode folded in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PortCode(u8);

impl PortCode {
    /// Encode a line
    ///
    /// Returns `None` for a digital line not below [`ANALOG_BIAS`], which
    /// would decode as analog, and for an analog line whose biased value
    /// does not fit in a byte.
    pub fn encode(line: Line, analog: bool) -> Option<Self> {
        if analog {
            line.checked_add(ANALOG_BIAS).map(Self)
        } else if line < ANALOG_BIAS {
            Some(Self(line))
        } else {
            None
        }
    }

    /// Split back into read mode and physical line
    pub fn decode(self) -> LineKind {
        match self.0.checked_sub(ANALOG_BIAS) {
            Some(line) => LineKind::Analog(line),
            None => LineKind::Digital(self.0),
        }
    }

    /// Raw stored byte
    pub fn raw(self) -> u8 {
        self.0
    }
}
