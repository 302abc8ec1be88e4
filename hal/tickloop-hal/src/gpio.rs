//! Numbered line abstractions
//!
//! The runtime addresses inputs and outputs by a small line number, the
//! way a board header is labelled, rather than by owned pin types. Chip
//! HALs map line numbers onto their own pins.

/// Line number on the board header
pub type Line = u8;

/// Reads digital and analog input lines
///
/// Reads always succeed and take bounded time. A line the platform does
/// not know about reads as 0.
pub trait LineReader {
    /// Read a digital line, returning 0 (low) or 1 (high)
    fn read_digital(&mut self, line: Line) -> i32;

    /// Read an analog line, returning the raw converter value
    fn read_analog(&mut self, line: Line) -> i32;
}

/// Drives digital output lines
pub trait LineWriter {
    /// Drive a digital line; any nonzero value is high
    fn write_digital(&mut self, line: Line, value: i32);

    /// Drive a line high
    fn set_high(&mut self, line: Line) {
        self.write_digital(line, 1);
    }

    /// Drive a line low
    fn set_low(&mut self, line: Line) {
        self.write_digital(line, 0);
    }
}

impl<T: LineReader + ?Sized> LineReader for &mut T {
    fn read_digital(&mut self, line: Line) -> i32 {
        (**self).read_digital(line)
    }

    fn read_analog(&mut self, line: Line) -> i32 {
        (**self).read_analog(line)
    }
}

impl<T: LineWriter + ?Sized> LineWriter for &mut T {
    fn write_digital(&mut self, line: Line, value: i32) {
        (**self).write_digital(line, value)
    }
}
