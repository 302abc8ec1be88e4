//! Pool sizes and encoding constants

/// Number of task slots in the scheduler
pub const TASK_CAPACITY: usize = 64;

/// Number of watch slots in the input poller
pub const WATCH_CAPACITY: usize = 32;

/// Offset added to an analog line number when it is stored in a watch slot
///
/// Digital lines are stored as-is, so a digital line number must be below it.
pub const ANALOG_BIAS: u8 = 32;
