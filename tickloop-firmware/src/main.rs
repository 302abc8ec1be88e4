//! Tickloop - super-loop firmware
//!
//! Main firmware binary for RP2040-based boards. Each loop iteration is
//! one tick: the task scheduler updates first, then the input poller.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::uart::{Config as RpUartConfig, UartTx};
use embassy_time::{Duration, Ticker};
use {defmt_rtt as _, panic_probe as _};

use tickloop_app::{register, App, WiringConfig};
use tickloop_core::SuperLoop;
use tickloop_hal::uart::UartConfig;
use tickloop_hal::{DebugSink, UartSink};
use tickloop_hal_rp2040::BlockingUartTx;

use crate::board::BoardPins;
use crate::config::{BANNER, LOOP_PERIOD_MS};

mod board;
mod config;

/// Main entry point
#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    info!("Tickloop firmware starting...");

    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    // Debug console on UART0 TX (GPIO0)
    let console_config = UartConfig::default();
    let mut uart_config = RpUartConfig::default();
    uart_config.baudrate = console_config.baudrate;
    let tx = UartTx::new_blocking(p.UART0, p.PIN_0, uart_config);
    let mut console = UartSink::new(BlockingUartTx::new(tx));
    console.print_line(BANNER);
    console.flush();
    info!("Console up at {} baud", console_config.baudrate);

    let wiring = WiringConfig::default();
    let (mut inputs, outputs) = board::setup(
        BoardPins {
            adc: p.ADC,
            door: p.PIN_2,
            button: p.PIN_3,
            trigger: p.PIN_5,
            sound: p.PIN_26,
            lamp: p.PIN_7,
            light: p.PIN_4,
        },
        &wiring,
    );

    let mut super_loop = SuperLoop::new(App::new(outputs, wiring));
    match register(&mut super_loop) {
        Ok(()) => info!("Listeners registered"),
        Err(e) => warn!("Wiring rejected, some listeners inactive: {}", e),
    }

    info!("Super-loop running, {} ms per tick", LOOP_PERIOD_MS);
    let mut ticker = Ticker::every(Duration::from_millis(LOOP_PERIOD_MS));

    loop {
        super_loop.iterate(&mut inputs, &mut console);
        ticker.next().await;
    }
}
