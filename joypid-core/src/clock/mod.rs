//! Tick source
//!
//! Millisecond counter advanced by the timer interrupt, plus the divider that
//! derives the joystick poll cadence from it.

pub mod divider;
pub mod tick;

pub use divider::{TickDivider, DEFAULT_POLL_TICKS};
pub use tick::{ClockError, TickClock};
