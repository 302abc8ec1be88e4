//! Slot registration errors

/// Reason a registration was refused
///
/// A refused registration never changes any slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SlotError {
    /// Slot id is outside the pool
    OutOfRange,
    /// Task interval of zero ticks
    ZeroInterval,
    /// Line number cannot be encoded alongside the analog bias
    LineOutOfRange,
}
