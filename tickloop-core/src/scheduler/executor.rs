//! Task pool and per-tick dispatch
//!
//! The scheduler owns the process tick counter. Each `update` advances it
//! by one and walks the live slot array from id 0 upwards, so a callback
//! that adds or cancels a higher id affects the same pass, while changes
//! to its own or lower ids only show on the next tick.

use core::num::NonZeroU16;

use super::task::{RunLimit, Task, TaskFn};
use crate::config::TASK_CAPACITY;
use crate::error::SlotError;

/// Fixed-capacity periodic task scheduler
///
/// `C` is the application context handed to every callback.
pub struct TaskScheduler<C> {
    /// Task slots, `None` when free
    slots: [Option<Task<C>>; TASK_CAPACITY],
    /// Ticks since start, wrapping
    tick: u32,
    /// Last registration stamp handed out
    stamp: u32,
}

impl<C> Default for TaskScheduler<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> TaskScheduler<C> {
    /// Create a scheduler with every slot free and the tick at 0
    pub fn new() -> Self {
        Self {
            slots: [None; TASK_CAPACITY],
            tick: 0,
            stamp: 0,
        }
    }

    /// Install a task in slot `id`
    ///
    /// Any task already in the slot is discarded and the invocation count
    /// restarts at 0. The task first fires on the next tick that is a
    /// multiple of `interval`.
    ///
    /// # Errors
    /// - [`SlotError::OutOfRange`] if `id` is not below [`TASK_CAPACITY`]
    /// - [`SlotError::ZeroInterval`] if `interval` is 0
    ///
    /// Either way the pool is left untouched.
    pub fn add(
        &mut self,
        callback: TaskFn<C>,
        id: usize,
        interval: u16,
        remaining: RunLimit,
    ) -> Result<(), SlotError> {
        let slot = self.slots.get_mut(id).ok_or(SlotError::OutOfRange)?;
        let interval = NonZeroU16::new(interval).ok_or(SlotError::ZeroInterval)?;

        self.stamp = self.stamp.wrapping_add(1);
        *slot = Some(Task {
            callback,
            interval,
            remaining,
            invocations: 0,
            stamp: self.stamp,
        });
        Ok(())
    }

    /// Free slot `id`
    ///
    /// Out-of-range ids and already-free slots are ignored.
    pub fn cancel(&mut self, id: usize) {
        if let Some(slot) = self.slots.get_mut(id) {
            *slot = None;
        }
    }

    /// Advance the tick and fire every due task
    ///
    /// After a task fires its invocation count goes up by one and, unless
    /// it runs forever, its remaining runs go down by one. A spent task is
    /// cancelled before the scan moves on. If the callback cancelled or
    /// re-added its own slot, that bookkeeping is skipped: a task re-added
    /// from its own callback starts with invocation count 0 and its full
    /// run limit, not with one run already charged against it.
    pub fn update(&mut self, ctx: &mut C) {
        self.tick = self.tick.wrapping_add(1);
        let tick = self.tick;

        for id in 0..TASK_CAPACITY {
            let Some(task) = self.slots[id] else {
                continue;
            };
            if !task.is_due(tick) {
                continue;
            }

            (task.callback)(self, ctx, task.invocations);

            let Some(live) = self.slots[id]
                .as_mut()
                .filter(|live| live.stamp == task.stamp)
            else {
                continue;
            };
            live.invocations = live.invocations.wrapping_add(1);
            if live.remaining.consume() {
                self.slots[id] = None;
            }
        }
    }

    /// Number of `update` calls so far, wrapping
    pub fn current_tick(&self) -> u32 {
        self.tick
    }

    /// Callback installed in slot `id`, or `None` if the slot is free or
    /// `id` is out of range
    pub fn get(&self, id: usize) -> Option<TaskFn<C>> {
        self.task(id).map(|task| task.callback)
    }

    /// Whether slot `id` holds a task
    pub fn is_scheduled(&self, id: usize) -> bool {
        self.task(id).is_some()
    }

    /// Remaining runs of the task in slot `id`
    pub fn remaining(&self, id: usize) -> Option<RunLimit> {
        self.task(id).map(|task| task.remaining)
    }

    /// How many times the task in slot `id` has fired
    pub fn invocations(&self, id: usize) -> Option<u32> {
        self.task(id).map(|task| task.invocations)
    }

    /// Number of occupied slots
    pub fn active_count(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    fn task(&self, id: usize) -> Option<&Task<C>> {
        self.slots.get(id)?.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::vec::Vec;

    /// Firing record: (tag, tick, invocation count)
    #[derive(Default)]
    struct Trace {
        events: Vec<(char, u32, u32)>,
    }

    impl Trace {
        fn count(&self, tag: char) -> usize {
            self.events.iter().filter(|e| e.0 == tag).count()
        }
    }

    type Sched = TaskScheduler<Trace>;

    fn tag_a(s: &mut Sched, t: &mut Trace, n: u32) {
        t.events.push(('a', s.current_tick(), n));
    }

    fn tag_b(s: &mut Sched, t: &mut Trace, n: u32) {
        t.events.push(('b', s.current_tick(), n));
    }

    fn tag_c(s: &mut Sched, t: &mut Trace, n: u32) {
        t.events.push(('c', s.current_tick(), n));
    }

    fn run(s: &mut Sched, t: &mut Trace, ticks: u32) {
        for _ in 0..ticks {
            s.update(t);
        }
    }

    #[test]
    fn test_add_then_get() {
        let mut s = Sched::new();
        let mut t = Trace::default();
        assert!(s.get(3).is_none());

        s.add(tag_b, 3, 1, RunLimit::Forever).unwrap();
        let cb = s.get(3).unwrap();
        cb(&mut s, &mut t, 7);
        assert_eq!(t.events, [('b', 0, 7)]);

        s.cancel(3);
        assert!(s.get(3).is_none());
    }

    #[test]
    fn test_out_of_range_is_ignored() {
        let mut s = Sched::new();
        s.add(tag_a, 0, 2, RunLimit::Times(4)).unwrap();

        assert_eq!(
            s.add(tag_b, TASK_CAPACITY, 1, RunLimit::Forever),
            Err(SlotError::OutOfRange)
        );
        assert_eq!(
            s.add(tag_b, usize::MAX, 1, RunLimit::Forever),
            Err(SlotError::OutOfRange)
        );
        s.cancel(TASK_CAPACITY);
        s.cancel(usize::MAX);

        assert_eq!(s.active_count(), 1);
        assert_eq!(s.remaining(0), Some(RunLimit::Times(4)));
        assert!(s.get(TASK_CAPACITY).is_none());
        assert!(s.get(usize::MAX).is_none());
    }

    #[test]
    fn test_zero_interval_rejected() {
        let mut s = Sched::new();
        s.add(tag_a, 9, 5, RunLimit::Forever).unwrap();
        assert_eq!(
            s.add(tag_b, 9, 0, RunLimit::Forever),
            Err(SlotError::ZeroInterval)
        );

        // Previous occupant untouched
        let mut t = Trace::default();
        run(&mut s, &mut t, 5);
        assert_eq!(t.events, [('a', 5, 0)]);
    }

    #[test]
    fn test_cancel_is_idempotent() {
        let mut s = Sched::new();
        s.cancel(4);
        s.add(tag_a, 4, 1, RunLimit::Forever).unwrap();
        s.cancel(4);
        s.cancel(4);
        assert!(!s.is_scheduled(4));
        assert_eq!(s.active_count(), 0);
    }

    #[test]
    fn test_tick_advances_before_dispatch() {
        let mut s = Sched::new();
        let mut t = Trace::default();
        assert_eq!(s.current_tick(), 0);

        s.add(tag_a, 0, 1, RunLimit::Times(1)).unwrap();
        s.update(&mut t);
        assert_eq!(s.current_tick(), 1);
        assert_eq!(t.events, [('a', 1, 0)]);
    }

    #[test]
    fn test_interval_twenty_forever() {
        let mut s = Sched::new();
        let mut t = Trace::default();
        s.add(tag_a, 5, 20, RunLimit::Forever).unwrap();

        run(&mut s, &mut t, 39);
        assert_eq!(t.events, [('a', 20, 0)]);

        run(&mut s, &mut t, 2);
        assert_eq!(s.current_tick(), 41);
        assert_eq!(t.events, [('a', 20, 0), ('a', 40, 1)]);
        assert!(s.is_scheduled(5));
    }

    #[test]
    fn test_limited_runs_expire() {
        let mut s = Sched::new();
        let mut t = Trace::default();
        s.add(tag_a, 2, 3, RunLimit::Times(2)).unwrap();

        run(&mut s, &mut t, 5);
        assert!(s.get(2).is_some());
        assert_eq!(s.remaining(2), Some(RunLimit::Times(1)));

        run(&mut s, &mut t, 1);
        assert!(s.get(2).is_none());

        run(&mut s, &mut t, 30);
        assert_eq!(t.events, [('a', 3, 0), ('a', 6, 1)]);
    }

    #[test]
    fn test_non_positive_runs_fire_once() {
        let mut s = Sched::new();
        let mut t = Trace::default();
        s.add(tag_a, 0, 1, RunLimit::Times(0)).unwrap();
        s.add(tag_b, 1, 1, RunLimit::Times(-3)).unwrap();

        run(&mut s, &mut t, 10);
        assert_eq!(t.events, [('a', 1, 0), ('b', 1, 0)]);
        assert_eq!(s.active_count(), 0);
    }

    #[test]
    fn test_same_interval_ascending_order() {
        let mut s = Sched::new();
        let mut t = Trace::default();
        s.add(tag_c, 40, 2, RunLimit::Forever).unwrap();
        s.add(tag_a, 3, 2, RunLimit::Forever).unwrap();
        s.add(tag_b, 17, 2, RunLimit::Forever).unwrap();

        run(&mut s, &mut t, 2);
        assert_eq!(t.events, [('a', 2, 0), ('b', 2, 0), ('c', 2, 0)]);
    }

    #[test]
    fn test_readd_overwrites_and_resets_count() {
        let mut s = Sched::new();
        let mut t = Trace::default();
        s.add(tag_a, 7, 1, RunLimit::Forever).unwrap();
        run(&mut s, &mut t, 3);
        assert_eq!(s.invocations(7), Some(3));

        s.add(tag_b, 7, 2, RunLimit::Times(1)).unwrap();
        assert_eq!(s.invocations(7), Some(0));
        assert_eq!(s.remaining(7), Some(RunLimit::Times(1)));

        run(&mut s, &mut t, 2);
        assert_eq!(t.count('a'), 3);
        assert_eq!(t.events.last(), Some(&('b', 4, 0)));
        assert!(!s.is_scheduled(7));
    }

    fn cancel_self(s: &mut Sched, t: &mut Trace, n: u32) {
        t.events.push(('x', s.current_tick(), n));
        s.cancel(10);
    }

    #[test]
    fn test_callback_cancels_itself() {
        let mut s = Sched::new();
        let mut t = Trace::default();
        s.add(cancel_self, 10, 1, RunLimit::Forever).unwrap();

        run(&mut s, &mut t, 5);
        assert_eq!(t.events, [('x', 1, 0)]);
        assert!(s.get(10).is_none());
    }

    fn schedule_later(s: &mut Sched, t: &mut Trace, n: u32) {
        t.events.push(('x', s.current_tick(), n));
        s.add(tag_b, 20, 1, RunLimit::Times(1)).unwrap();
        s.add(tag_a, 0, 1, RunLimit::Times(1)).unwrap();
    }

    #[test]
    fn test_mutation_ahead_of_scan_seen_same_pass() {
        let mut s = Sched::new();
        let mut t = Trace::default();
        s.add(schedule_later, 10, 3, RunLimit::Times(1)).unwrap();

        run(&mut s, &mut t, 3);
        // Slot 20 is ahead of the scan and fires on tick 3; slot 0 waits
        assert_eq!(t.events, [('x', 3, 0), ('b', 3, 0)]);
        assert!(s.is_scheduled(0));
        assert!(!s.is_scheduled(20));

        run(&mut s, &mut t, 1);
        assert_eq!(t.events.last(), Some(&('a', 4, 0)));
    }

    fn cancel_ahead(s: &mut Sched, t: &mut Trace, n: u32) {
        t.events.push(('x', s.current_tick(), n));
        s.cancel(30);
    }

    #[test]
    fn test_cancel_ahead_of_scan_suppresses_firing() {
        let mut s = Sched::new();
        let mut t = Trace::default();
        s.add(cancel_ahead, 1, 1, RunLimit::Times(1)).unwrap();
        s.add(tag_c, 30, 1, RunLimit::Forever).unwrap();

        run(&mut s, &mut t, 1);
        assert_eq!(t.events, [('x', 1, 0)]);
        assert_eq!(s.active_count(), 0);
    }

    fn replace_self(s: &mut Sched, t: &mut Trace, n: u32) {
        t.events.push(('x', s.current_tick(), n));
        s.add(tag_a, 12, 1, RunLimit::Times(2)).unwrap();
    }

    #[test]
    fn test_replacing_own_slot_keeps_new_task_fresh() {
        let mut s = Sched::new();
        let mut t = Trace::default();
        s.add(replace_self, 12, 1, RunLimit::Times(1)).unwrap();

        run(&mut s, &mut t, 1);
        assert_eq!(s.invocations(12), Some(0));
        assert_eq!(s.remaining(12), Some(RunLimit::Times(2)));

        run(&mut s, &mut t, 2);
        assert_eq!(t.events, [('x', 1, 0), ('a', 2, 0), ('a', 3, 1)]);
        assert!(!s.is_scheduled(12));
    }

    #[test]
    fn test_tick_wraps() {
        let mut s = Sched::new();
        s.tick = u32::MAX;
        let mut t = Trace::default();
        s.update(&mut t);
        assert_eq!(s.current_tick(), 0);
    }

    proptest! {
        #[test]
        fn prop_fires_on_multiples(interval in 1u16..60, ticks in 0u32..600) {
            let mut s = Sched::new();
            let mut t = Trace::default();
            s.add(tag_a, 33, interval, RunLimit::Forever).unwrap();
            run(&mut s, &mut t, ticks);

            let k = u32::from(interval);
            prop_assert_eq!(t.events.len() as u32, ticks / k);
            for (i, &(_, tick, count)) in t.events.iter().enumerate() {
                prop_assert_eq!(tick, k * (i as u32 + 1));
                prop_assert_eq!(count, i as u32);
            }
        }

        #[test]
        fn prop_limited_fires_exactly_r(interval in 1u16..20, runs in 1i32..30) {
            let mut s = Sched::new();
            let mut t = Trace::default();
            s.add(tag_b, 63, interval, RunLimit::Times(runs)).unwrap();

            run(&mut s, &mut t, u32::from(interval) * (runs as u32 + 5));
            prop_assert_eq!(t.count('b'), runs as usize);
            prop_assert!(s.get(63).is_none());
        }
    }
}
