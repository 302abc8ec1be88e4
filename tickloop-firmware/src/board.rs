//! Reference board pin assignment
//!
//! Physical pins are fixed by the board; the line numbers they are bound
//! to come from the wiring table, so both must agree.

use defmt::*;
use embassy_rp::adc::{Adc, Channel, Config as AdcConfig};
use embassy_rp::gpio::{Input, Level, Output, Pull};
use embassy_rp::peripherals::{ADC, PIN_2, PIN_26, PIN_3, PIN_4, PIN_5, PIN_7};
use embassy_rp::Peri;

use tickloop_app::WiringConfig;
use tickloop_hal_rp2040::{AdcChannel, BoardInputs, BoardOutputs};

/// GPIO of the sound sensor, matching `BoardPins::sound`
const SOUND_GPIO: u8 = 26;

/// Peripherals the board wiring consumes
pub struct BoardPins {
    pub adc: Peri<'static, ADC>,
    pub door: Peri<'static, PIN_2>,
    pub button: Peri<'static, PIN_3>,
    pub trigger: Peri<'static, PIN_5>,
    pub sound: Peri<'static, PIN_26>,
    pub lamp: Peri<'static, PIN_7>,
    pub light: Peri<'static, PIN_4>,
}

/// Bind the board's pins to their lines
///
/// A pin that cannot be bound is logged and left out; its line then reads
/// 0 or ignores writes.
pub fn setup(pins: BoardPins, wiring: &WiringConfig) -> (BoardInputs, BoardOutputs) {
    let mut inputs = BoardInputs::new(Adc::new_blocking(pins.adc, AdcConfig::default()));

    // Switches pull the line low when active
    let digital = [
        (wiring.door_line, Input::new(pins.door, Pull::Up)),
        (wiring.button_line, Input::new(pins.button, Pull::Up)),
        (wiring.trigger_line, Input::new(pins.trigger, Pull::Up)),
    ];
    for (line, pin) in digital {
        if let Err(e) = inputs.bind_digital(line, pin) {
            warn!("Input line {} not bound: {}", line, e);
        }
    }

    match AdcChannel::from_gpio(SOUND_GPIO) {
        Some(channel) if channel.line() == wiring.sound_line => {
            let pin = Channel::new_pin(pins.sound, Pull::None);
            if let Err(e) = inputs.bind_analog(channel, pin) {
                warn!("Analog line {} not bound: {}", wiring.sound_line, e);
            }
        }
        Some(channel) => warn!(
            "GPIO{} serves analog line {}, wiring expects {}",
            channel.gpio(),
            channel.line(),
            wiring.sound_line
        ),
        None => warn!("GPIO{} has no ADC channel", SOUND_GPIO),
    }

    let mut outputs = BoardOutputs::new();
    let lamp = Output::new(pins.lamp, Level::Low);
    let light = Output::new(pins.light, Level::Low);
    for (line, pin) in [(wiring.lamp_line, lamp), (wiring.light_line, light)] {
        if let Err(e) = outputs.bind(line, pin) {
            warn!("Output line {} not bound: {}", line, e);
        }
    }

    (inputs, outputs)
}
