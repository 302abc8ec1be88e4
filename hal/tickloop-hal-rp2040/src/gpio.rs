//! Board line I/O
//!
//! Digital lines are GPIO numbers. Pins are bound once at start-up and
//! owned by the bank for the rest of the run.

use embassy_rp::adc::{Adc, Blocking, Channel};
use embassy_rp::gpio::{Input, Output};
use tickloop_hal::bank::{BindError, InputBank, OutputBank};
use tickloop_hal::gpio::Line;
use tickloop_hal::{LineReader, LineWriter};

use crate::adc::{AdcChannel, ANALOG_COUNT};

/// Maximum number of GPIO pins on RP2040
pub const GPIO_COUNT: usize = 30;

/// Everything the input poller reads
pub struct BoardInputs {
    digital: InputBank<Input<'static>, GPIO_COUNT>,
    adc: Adc<'static, Blocking>,
    channels: [Option<Channel<'static>>; ANALOG_COUNT],
    /// Failed conversions, read as 0
    adc_errors: u32,
}

impl BoardInputs {
    /// Create with no lines bound
    pub fn new(adc: Adc<'static, Blocking>) -> Self {
        Self {
            digital: InputBank::new(),
            adc,
            channels: [None, None, None, None],
            adc_errors: 0,
        }
    }

    /// Bind a digital input to its GPIO number
    pub fn bind_digital(&mut self, gpio: Line, pin: Input<'static>) -> Result<(), BindError> {
        self.digital.bind(gpio, pin)
    }

    /// Bind an ADC channel as an analog line
    pub fn bind_analog(&mut self, channel: AdcChannel, pin: Channel<'static>) -> Result<(), BindError> {
        let slot = &mut self.channels[channel.line() as usize];
        if slot.is_some() {
            return Err(BindError::AlreadyBound);
        }
        *slot = Some(pin);
        Ok(())
    }

    /// Number of failed conversions so far
    pub fn adc_errors(&self) -> u32 {
        self.adc_errors
    }
}

impl LineReader for BoardInputs {
    fn read_digital(&mut self, line: Line) -> i32 {
        self.digital.read_digital(line)
    }

    fn read_analog(&mut self, line: Line) -> i32 {
        let Some(channel) = self.channels.get_mut(line as usize).and_then(Option::as_mut) else {
            return 0;
        };
        match self.adc.blocking_read(channel) {
            Ok(raw) => i32::from(raw),
            Err(_) => {
                self.adc_errors = self.adc_errors.wrapping_add(1);
                #[cfg(feature = "defmt")]
                defmt::warn!("ADC read failed on analog line {}", line);
                0
            }
        }
    }
}

/// Everything the application drives
pub struct BoardOutputs {
    digital: OutputBank<Output<'static>, GPIO_COUNT>,
}

impl Default for BoardOutputs {
    fn default() -> Self {
        Self::new()
    }
}

impl BoardOutputs {
    /// Create with no lines bound
    pub fn new() -> Self {
        Self {
            digital: OutputBank::new(),
        }
    }

    /// Bind a digital output to its GPIO number
    pub fn bind(&mut self, gpio: Line, pin: Output<'static>) -> Result<(), BindError> {
        self.digital.bind(gpio, pin)
    }
}

impl LineWriter for BoardOutputs {
    fn write_digital(&mut self, line: Line, value: i32) {
        self.digital.write_digital(line, value)
    }
}
