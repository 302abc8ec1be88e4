//! Debug console
//!
//! A one-way channel for human-readable output. Nothing written here
//! affects control flow; implementations drop output they cannot send.

/// Fire-and-forget text and number output
pub trait DebugSink {
    /// Emit a line of text
    fn print_line(&mut self, line: &str);

    /// Emit a numeric value
    fn print_value(&mut self, value: i32);
}

impl<T: DebugSink + ?Sized> DebugSink for &mut T {
    fn print_line(&mut self, line: &str) {
        (**self).print_line(line)
    }

    fn print_value(&mut self, value: i32) {
        (**self).print_value(value)
    }
}

/// Sink that discards everything
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl DebugSink for NullSink {
    fn print_line(&mut self, _line: &str) {}

    fn print_value(&mut self, _value: i32) {}
}
