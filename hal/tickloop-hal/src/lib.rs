//! Tickloop Hardware Abstraction Layer
//!
//! This crate defines the platform capabilities the tickloop runtime
//! consumes but does not implement. Chip-specific crates (RP2040, etc.)
//! implement them, and host tests implement them with mocks.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  Super-loop (tickloop-firmware)         │
//! └─────────────────────────────────────────┘
//!          │                    │
//!          ▼                    ▼
//! ┌─────────────────┐  ┌─────────────────┐
//! │ tickloop-core   │  │ tickloop-app    │
//! └─────────────────┘  └─────────────────┘
//!          │                    │
//!          └─────────┬──────────┘
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │  tickloop-hal (this crate - traits)     │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//!          ┌───────────────────┐
//!          │ tickloop-hal-     │
//!          │    rp2040         │
//!          └───────────────────┘
//! ```
//!
//! # Traits
//!
//! - [`gpio::LineReader`], [`gpio::LineWriter`] - Numbered digital/analog lines
//! - [`bank::InputBank`], [`bank::OutputBank`] - Line numbers over `embedded-hal` pins
//! - [`debug::DebugSink`] - Fire-and-forget debug console
//! - [`uart::UartTx`] - Blocking serial transmit, adapted to a sink by [`uart::UartSink`]

#![no_std]
#![deny(unsafe_code)]

pub mod bank;
pub mod debug;
pub mod gpio;
pub mod uart;

// Re-export key traits at crate root for convenience
pub use bank::{InputBank, OutputBank};
pub use debug::DebugSink;
pub use gpio::{LineReader, LineWriter};
pub use uart::{UartSink, UartTx};
