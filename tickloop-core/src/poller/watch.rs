//! Watch pool and change detection

use tickloop_hal::gpio::Line;
use tickloop_hal::{DebugSink, LineReader};

use super::port::{LineKind, PortCode};
use crate::config::WATCH_CAPACITY;
use crate::error::SlotError;

/// Reading stored in a fresh slot
///
/// No line read produces it, so the first poll of a new slot always
/// reports the line's current state.
pub const UNOBSERVED: i32 = i32::MIN;

/// Watch callback
///
/// Receives the poller, the application context, and the new reading.
pub type WatchFn<C> = fn(&mut InputPoller<C>, &mut C, i32);

/// An occupied watch slot
struct Watch<C> {
    callback: WatchFn<C>,
    port: PortCode,
    last: i32,
}

impl<C> Clone for Watch<C> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<C> Copy for Watch<C> {}

/// Fixed-capacity input change poller
///
/// There is deliberately no way to free a watch slot: once bound, a slot
/// is polled for the life of the process. Re-adding the same id rebinds it.
pub struct InputPoller<C> {
    slots: [Option<Watch<C>>; WATCH_CAPACITY],
}

impl<C> Default for InputPoller<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> InputPoller<C> {
    /// Create a poller with every slot unused
    pub fn new() -> Self {
        Self {
            slots: [None; WATCH_CAPACITY],
        }
    }

    /// Bind slot `id` to `line`
    ///
    /// Overwrites whatever the slot held. The stored reading starts as
    /// [`UNOBSERVED`].
    ///
    /// # Errors
    /// - [`SlotError::OutOfRange`] if `id` is not below [`WATCH_CAPACITY`]
    /// - [`SlotError::LineOutOfRange`] if `line` cannot be encoded
    pub fn add(
        &mut self,
        callback: WatchFn<C>,
        id: usize,
        line: Line,
        is_analog: bool,
    ) -> Result<(), SlotError> {
        let slot = self.slots.get_mut(id).ok_or(SlotError::OutOfRange)?;
        let port = PortCode::encode(line, is_analog).ok_or(SlotError::LineOutOfRange)?;

        *slot = Some(Watch {
            callback,
            port,
            last: UNOBSERVED,
        });
        Ok(())
    }

    /// Read every bound line and notify on change
    ///
    /// Slots are visited in ascending id order. A changed reading is
    /// printed to `sink`, stored, then passed to the slot's callback.
    pub fn update<R, S>(&mut self, io: &mut R, ctx: &mut C, sink: &mut S)
    where
        R: LineReader,
        S: DebugSink,
    {
        for id in 0..WATCH_CAPACITY {
            let Some(watch) = self.slots[id] else {
                continue;
            };

            let value = match watch.port.decode() {
                LineKind::Analog(line) => io.read_analog(line),
                LineKind::Digital(line) => io.read_digital(line),
            };
            if value == watch.last {
                continue;
            }

            sink.print_value(value);
            if let Some(live) = self.slots[id].as_mut() {
                live.last = value;
            }
            (watch.callback)(self, ctx, value);
        }
    }

    /// Callback bound to slot `id`
    pub fn get(&self, id: usize) -> Option<WatchFn<C>> {
        self.watch(id).map(|watch| watch.callback)
    }

    /// Line and read mode bound to slot `id`
    pub fn line(&self, id: usize) -> Option<LineKind> {
        self.watch(id).map(|watch| watch.port.decode())
    }

    /// Last reading seen on slot `id`
    pub fn last_value(&self, id: usize) -> Option<i32> {
        self.watch(id).map(|watch| watch.last)
    }

    fn watch(&self, id: usize) -> Option<&Watch<C>> {
        self.slots.get(id)?.as_ref()
    }
}
