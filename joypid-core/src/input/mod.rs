//! Joystick input
//!
//! Button snapshots, the pointer model, and the accelerating mapper between
//! them.

pub mod buttons;
pub mod joystick;
pub mod pointer;

pub use buttons::Buttons;
pub use joystick::{apply, AccelCurve, JoystickMapper, DEFAULT_DEAD_ZONE, DEFAULT_MAX_STEP};
pub use pointer::{DisplaySize, PointerState};
