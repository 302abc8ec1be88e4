//! Task slot contents

use core::num::NonZeroU16;

use super::executor::TaskScheduler;

/// Task callback
///
/// Receives the scheduler (so a task may cancel itself or schedule
/// others), the application context, and the number of times this task
/// has fired before, starting at 0.
pub type TaskFn<C> = fn(&mut TaskScheduler<C>, &mut C, u32);

/// How many more times a task may fire
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RunLimit {
    /// Never expires
    Forever,
    /// Remaining firings; the task is cancelled once this drops to 0 or below
    Times(i32),
}

impl RunLimit {
    /// Account for one firing
    ///
    /// Returns true when the task is spent and must be cancelled.
    pub fn consume(&mut self) -> bool {
        match self {
            RunLimit::Forever => false,
            RunLimit::Times(n) => {
                *n = n.saturating_sub(1);
                *n <= 0
            }
        }
    }
}

/// An occupied task slot
pub(crate) struct Task<C> {
    pub(crate) callback: TaskFn<C>,
    pub(crate) interval: NonZeroU16,
    pub(crate) remaining: RunLimit,
    pub(crate) invocations: u32,
    /// Registration stamp, distinguishes a re-added slot from the original
    pub(crate) stamp: u32,
}

// Manual impls: a derive would demand `C: Copy` although only fn pointers are stored
impl<C> Clone for Task<C> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<C> Copy for Task<C> {}

impl<C> Task<C> {
    /// Whether this task is due on `tick`
    pub(crate) fn is_due(&self, tick: u32) -> bool {
        tick % u32::from(self.interval.get()) == 0
    }
}
