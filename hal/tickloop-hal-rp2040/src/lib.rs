//! RP2040 platform for the tickloop runtime
//!
//! Implements the `tickloop-hal` traits on embassy-rp peripherals:
//! - Digital lines are GPIO numbers, held in `tickloop-hal` pin banks
//! - Analog lines are ADC channels 0-3 (GPIO26-29)
//! - The debug console is a blocking UART transmitter

#![no_std]

pub mod adc;
pub mod gpio;
pub mod uart;

pub use adc::AdcChannel;
pub use gpio::{BoardInputs, BoardOutputs, GPIO_COUNT};
pub use uart::BlockingUartTx;
