//! Application behaviour for the tickloop board
//!
//! Registers the board's listeners with the input poller and supplies the
//! task and listener callbacks:
//!
//! - Door closed: flash the lamp slowly
//! - Trigger pressed: flash the lamp quickly
//! - Button pressed: stop flashing
//! - Loud sound: hold the light on for a while

#![no_std]
#![deny(unsafe_code)]

pub mod app;
pub mod config;
pub mod handlers;

pub use app::{register, App, Board};
pub use config::WiringConfig;
