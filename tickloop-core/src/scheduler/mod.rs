//! Tick-driven task scheduler
//!
//! A fixed pool of task slots addressed by id. Every call to
//! [`TaskScheduler::update`] advances the tick and fires each task whose
//! interval divides it, in ascending id order.

pub mod executor;
pub mod task;

pub use executor::TaskScheduler;
pub use task::{RunLimit, TaskFn};
