//! Line-numbered pin banks
//!
//! Holds `embedded-hal` pins in a fixed array indexed by line number, so a
//! chip HAL only has to hand over its pins to get [`LineReader`] and
//! [`LineWriter`]. Unbound lines read as 0 and ignore writes; pin errors
//! are treated the same way.

use embedded_hal::digital::{InputPin, OutputPin, PinState};

use crate::gpio::{Line, LineReader, LineWriter};

/// Error binding a pin to a line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BindError {
    /// Line number beyond the bank
    InvalidLine,
    /// Line already has a pin
    AlreadyBound,
}

/// Fixed array of optional pins
struct Slots<P, const N: usize> {
    pins: [Option<P>; N],
}

impl<P, const N: usize> Slots<P, N> {
    fn new() -> Self {
        Self {
            pins: core::array::from_fn(|_| None),
        }
    }

    fn bind(&mut self, line: Line, pin: P) -> Result<(), BindError> {
        let slot = self
            .pins
            .get_mut(line as usize)
            .ok_or(BindError::InvalidLine)?;
        if slot.is_some() {
            return Err(BindError::AlreadyBound);
        }
        *slot = Some(pin);
        Ok(())
    }

    fn get_mut(&mut self, line: Line) -> Option<&mut P> {
        self.pins.get_mut(line as usize)?.as_mut()
    }

    fn is_bound(&self, line: Line) -> bool {
        matches!(self.pins.get(line as usize), Some(Some(_)))
    }
}

/// Digital input pins addressed by line
///
/// Has no converter: analog reads return 0.
pub struct InputBank<P, const N: usize> {
    slots: Slots<P, N>,
}

impl<P: InputPin, const N: usize> Default for InputBank<P, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: InputPin, const N: usize> InputBank<P, N> {
    /// Create an empty bank
    pub fn new() -> Self {
        Self { slots: Slots::new() }
    }

    /// Bind `pin` to `line`
    pub fn bind(&mut self, line: Line, pin: P) -> Result<(), BindError> {
        self.slots.bind(line, pin)
    }

    /// Check if a line has a pin
    pub fn is_bound(&self, line: Line) -> bool {
        self.slots.is_bound(line)
    }
}

impl<P: InputPin, const N: usize> LineReader for InputBank<P, N> {
    fn read_digital(&mut self, line: Line) -> i32 {
        match self.slots.get_mut(line).map(|pin| pin.is_high()) {
            Some(Ok(true)) => 1,
            _ => 0,
        }
    }

    fn read_analog(&mut self, _line: Line) -> i32 {
        0
    }
}

/// Digital output pins addressed by line
pub struct OutputBank<P, const N: usize> {
    slots: Slots<P, N>,
}

impl<P: OutputPin, const N: usize> Default for OutputBank<P, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: OutputPin, const N: usize> OutputBank<P, N> {
    /// Create an empty bank
    pub fn new() -> Self {
        Self { slots: Slots::new() }
    }

    /// Bind `pin` to `line`
    pub fn bind(&mut self, line: Line, pin: P) -> Result<(), BindError> {
        self.slots.bind(line, pin)
    }

    /// Check if a line has a pin
    pub fn is_bound(&self, line: Line) -> bool {
        self.slots.is_bound(line)
    }
}

impl<P: OutputPin, const N: usize> LineWriter for OutputBank<P, N> {
    fn write_digital(&mut self, line: Line, value: i32) {
        if let Some(pin) = self.slots.get_mut(line) {
            let _ = pin.set_state(PinState::from(value != 0));
        }
    }
}
