//! Input change poller
//!
//! A fixed pool of watch slots, each bound to one digital or analog line.
//! Every [`InputPoller::update`] reads each bound line and notifies only
//! when the reading differs from the previous one.

pub mod port;
pub mod watch;

pub use port::{LineKind, PortCode};
pub use watch::{InputPoller, WatchFn, UNOBSERVED};
