//! Board wiring table
//!
//! Slot ids, line numbers and timings for the application. The defaults
//! match the reference board.

use tickloop_core::config::TASK_CAPACITY;
use tickloop_core::SlotError;
use tickloop_hal::gpio::Line;

/// Application wiring
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct WiringConfig {
    /// Door switch (digital, reads 0 when closed)
    pub door_line: Line,
    /// Stop button (digital, reads 0 when pressed)
    pub button_line: Line,
    /// Quick-flash trigger (digital, reads 0 when pressed)
    pub trigger_line: Line,
    /// Microphone level (analog)
    pub sound_line: Line,
    /// Flashing lamp output
    pub lamp_line: Line,
    /// Sound-activated light output
    pub light_line: Line,

    /// Watch slot ids
    pub door_listener: usize,
    pub button_listener: usize,
    pub trigger_listener: usize,
    pub sound_listener: usize,

    /// Task slot ids
    pub splash_task: usize,
    pub light_task: usize,

    /// Lamp toggle period when started by the door, in ticks
    pub slow_splash_interval: u16,
    /// Lamp toggle period when started by the trigger, in ticks
    pub fast_splash_interval: u16,
    /// Light task period, in ticks
    pub light_interval: u16,
    /// Light task firings before the light goes off
    pub light_hold_runs: u32,
    /// Analog level above which a sound turns the light on
    pub sound_threshold: i32,
}

impl Default for WiringConfig {
    fn default() -> Self {
        Self {
            door_line: 2,
            button_line: 3,
            trigger_line: 5,
            sound_line: 0,
            lamp_line: 7,
            light_line: 4,
            door_listener: 12,
            button_listener: 13,
            trigger_listener: 14,
            sound_listener: 16,
            splash_task: 17,
            light_task: 18,
            slow_splash_interval: 200,
            fast_splash_interval: 20,
            light_interval: 40,
            light_hold_runs: 2000,
            sound_threshold: 127,
        }
    }
}

impl WiringConfig {
    /// Check the task side of the table
    ///
    /// Listener ids and lines are checked when they are registered; task
    /// slots are only filled later from callbacks, which cannot report.
    pub fn validate(&self) -> Result<(), SlotError> {
        if self.splash_task >= TASK_CAPACITY || self.light_task >= TASK_CAPACITY {
            return Err(SlotError::OutOfRange);
        }
        if self.slow_splash_interval == 0
            || self.fast_splash_interval == 0
            || self.light_interval == 0
        {
            return Err(SlotError::ZeroInterval);
        }
        Ok(())
    }
}
