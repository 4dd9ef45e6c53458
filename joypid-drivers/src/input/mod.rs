//! Input device drivers

pub mod joystick;

pub use joystick::{GpioJoystick, JoystickLines};
