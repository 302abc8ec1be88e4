//! ADC channel mapping
//!
//! RP2040 has a single ADC with 4 external channels, which are the
//! board's analog lines:
//! - ADC0: GPIO26
//! - ADC1: GPIO27
//! - ADC2: GPIO28
//! - ADC3: GPIO29

use tickloop_hal::gpio::Line;

/// Number of analog lines
pub const ANALOG_COUNT: usize = 4;

/// ADC channel identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AdcChannel {
    /// ADC0 on GPIO26
    Adc0,
    /// ADC1 on GPIO27
    Adc1,
    /// ADC2 on GPIO28
    Adc2,
    /// ADC3 on GPIO29
    Adc3,
}

impl AdcChannel {
    /// Get the GPIO pin for this ADC channel
    pub fn gpio(&self) -> u8 {
        26 + self.line()
    }

    /// Analog line number served by this channel
    pub fn line(&self) -> Line {
        *self as Line
    }

    /// Get ADC channel from analog line number
    pub fn from_line(line: Line) -> Option<Self> {
        match line {
            0 => Some(AdcChannel::Adc0),
            1 => Some(AdcChannel::Adc1),
            2 => Some(AdcChannel::Adc2),
            3 => Some(AdcChannel::Adc3),
            _ => None,
        }
    }

    /// Get ADC channel from GPIO pin
    pub fn from_gpio(gpio: u8) -> Option<Self> {
        Self::from_line(gpio.checked_sub(26)?)
    }
}
