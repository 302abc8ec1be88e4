//! Debug console UART
//!
//! Wraps embassy-rp's blocking UART transmitter in the `tickloop-hal`
//! [`UartTx`] trait so it can back a `UartSink`.

use embassy_rp::uart::{self, Blocking};
use tickloop_hal::UartTx;

/// Blocking UART transmitter
pub struct BlockingUartTx {
    tx: uart::UartTx<'static, Blocking>,
}

impl BlockingUartTx {
    /// Wrap a transmitter set up with `UartTx::new_blocking`
    pub fn new(tx: uart::UartTx<'static, Blocking>) -> Self {
        Self { tx }
    }
}

impl UartTx for BlockingUartTx {
    type Error = uart::Error;

    fn write_blocking(&mut self, data: &[u8]) -> Result<(), Self::Error> {
        self.tx.blocking_write(data)
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        self.tx.blocking_flush()
    }
}
