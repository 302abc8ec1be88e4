//! UART serial transmit
//!
//! The debug console of the original board is a UART line printer.
//! [`UartSink`] turns any blocking transmitter into a [`DebugSink`].

use core::fmt::Write;

use heapless::String;

use crate::debug::DebugSink;

/// UART transmitter
pub trait UartTx {
    /// Error type for transmit operations
    type Error;

    /// Write data to the UART
    ///
    /// Blocks until all data has been written or an error occurs.
    fn write_blocking(&mut self, data: &[u8]) -> Result<(), Self::Error>;

    /// Flush any buffered data
    fn flush(&mut self) -> Result<(), Self::Error>;
}

/// Debug console line settings
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct UartConfig {
    /// Baud rate in bits per second
    pub baudrate: u32,
}

impl Default for UartConfig {
    fn default() -> Self {
        Self { baudrate: 9600 }
    }
}

/// Longest decimal rendering of an `i32`, sign included
const VALUE_WIDTH: usize = 11;

/// Debug sink writing newline-terminated ASCII to a UART
///
/// Transmit errors are counted and otherwise ignored.
pub struct UartSink<T> {
    tx: T,
    dropped: u32,
}

impl<T: UartTx> UartSink<T> {
    /// Wrap a transmitter
    pub fn new(tx: T) -> Self {
        Self { tx, dropped: 0 }
    }

    /// Number of writes that failed
    pub fn dropped(&self) -> u32 {
        self.dropped
    }

    /// Give the transmitter back
    pub fn into_inner(self) -> T {
        self.tx
    }

    /// Wait until everything written so far has left the transmitter
    pub fn flush(&mut self) {
        if self.tx.flush().is_err() {
            self.dropped = self.dropped.wrapping_add(1);
        }
    }

    fn send(&mut self, data: &[u8]) {
        if self.tx.write_blocking(data).is_err() {
            self.dropped = self.dropped.wrapping_add(1);
        }
    }
}

impl<T: UartTx> DebugSink for UartSink<T> {
    fn print_line(&mut self, line: &str) {
        self.send(line.as_bytes());
        self.send(b"\n");
    }

    fn print_value(&mut self, value: i32) {
        let mut text: String<VALUE_WIDTH> = String::new();
        // Cannot overflow: VALUE_WIDTH fits i32::MIN
        let _ = write!(text, "{}", value);
        self.print_line(&text);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Mock transmitter recording everything written
    struct MockTx {
        buf: heapless::Vec<u8, 64>,
        fail: bool,
        flushes: u32,
    }

    impl MockTx {
        fn new() -> Self {
            Self {
                buf: heapless::Vec::new(),
                fail: false,
                flushes: 0,
            }
        }
    }

    impl UartTx for MockTx {
        type Error = ();

        fn write_blocking(&mut self, data: &[u8]) -> Result<(), ()> {
            if self.fail {
                return Err(());
            }
            self.buf.extend_from_slice(data).map_err(|_| ())
        }

        fn flush(&mut self) -> Result<(), ()> {
            if self.fail {
                return Err(());
            }
            self.flushes += 1;
            Ok(())
        }
    }

    #[test]
    fn test_print_line_appends_newline() {
        let mut sink = UartSink::new(MockTx::new());
        sink.print_line("ready");
        assert_eq!(sink.into_inner().buf.as_slice(), b"ready\n");
    }

    #[test]
    fn test_print_value_formats_decimal() {
        let mut sink = UartSink::new(MockTx::new());
        sink.print_value(0);
        sink.print_value(-42);
        sink.print_value(i32::MIN);
        assert_eq!(
            sink.into_inner().buf.as_slice(),
            b"0\n-42\n-2147483648\n".as_slice()
        );
    }

    #[test]
    fn test_errors_are_counted_not_raised() {
        let mut tx = MockTx::new();
        tx.fail = true;
        let mut sink = UartSink::new(tx);
        sink.print_line("lost");
        assert_eq!(sink.dropped(), 2);
    }

    #[test]
    fn test_flush_reaches_transmitter() {
        let mut sink = UartSink::new(MockTx::new());
        sink.print_line("tickloop");
        sink.flush();
        assert_eq!(sink.dropped(), 0);
        assert_eq!(sink.into_inner().flushes, 1);

        let mut tx = MockTx::new();
        tx.fail = true;
        let mut sink = UartSink::new(tx);
        sink.flush();
        assert_eq!(sink.dropped(), 1);
    }

    #[test]
    fn test_default_baud_matches_console() {
        assert_eq!(UartConfig::default().baudrate, 9600);
    }
}
