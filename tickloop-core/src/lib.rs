//! Cooperative runtime core for super-loop firmware
//!
//! This crate contains the two fixed-capacity pools the super-loop drives
//! once per iteration:
//!
//! - Task scheduler: periodic callbacks keyed by tick interval, with
//!   optional run-count expiry
//! - Input poller: change detection on digital and analog lines
//! - Super-loop driver fixing the per-iteration update order
//!
//! Nothing here allocates, blocks, or panics on the runtime path. Invalid
//! requests leave state untouched and are reported as [`SlotError`].

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
extern crate std;

pub mod config;
pub mod error;
pub mod poller;
pub mod runtime;
pub mod scheduler;

pub use error::SlotError;
pub use poller::{InputPoller, WatchFn};
pub use runtime::{SuperLoop, TaskHost};
pub use scheduler::{RunLimit, TaskFn, TaskScheduler};
