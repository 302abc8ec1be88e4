//! Super-loop driver
//!
//! Fixes the per-iteration order: the task scheduler updates first, then
//! the input poller. Watch callbacks receive the whole application, which
//! owns the scheduler, so an input change can start or cancel tasks.

use tickloop_hal::{DebugSink, LineReader};

use crate::poller::InputPoller;
use crate::scheduler::TaskScheduler;

/// Application state that owns the task scheduler
pub trait TaskHost {
    /// Context handed to task callbacks
    type Context;

    /// Borrow the scheduler and the task context side by side
    fn split(&mut self) -> (&mut TaskScheduler<Self::Context>, &mut Self::Context);
}

/// One scheduler and one poller driven in lockstep
pub struct SuperLoop<A> {
    app: A,
    inputs: InputPoller<A>,
}

impl<A: TaskHost> SuperLoop<A> {
    /// Wrap an application with an empty watch pool
    pub fn new(app: A) -> Self {
        Self {
            app,
            inputs: InputPoller::new(),
        }
    }

    /// Run one loop iteration
    pub fn iterate<R, S>(&mut self, io: &mut R, sink: &mut S)
    where
        R: LineReader,
        S: DebugSink,
    {
        let (tasks, ctx) = self.app.split();
        tasks.update(ctx);
        self.inputs.update(io, &mut self.app, sink);
    }

    /// Application and watch pool, for start-up wiring
    pub fn parts(&mut self) -> (&mut A, &mut InputPoller<A>) {
        (&mut self.app, &mut self.inputs)
    }

    /// Borrow the application
    pub fn app(&self) -> &A {
        &self.app
    }

    /// Borrow the watch pool
    pub fn inputs(&self) -> &InputPoller<A> {
        &self.inputs
    }
}
