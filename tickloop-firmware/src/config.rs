//! Firmware configuration
//!
//! Loop pacing and the console banner. Console line settings live in
//! `tickloop_hal::uart::UartConfig`, application wiring in
//! `tickloop_app::WiringConfig`.

/// Period of one super-loop iteration (one tick), in milliseconds
pub const LOOP_PERIOD_MS: u64 = 5;

/// Printed on the debug console at start-up
pub const BANNER: &str = "tickloop firmware v0.1.0";
