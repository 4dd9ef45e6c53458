//! Board-agnostic core of the GUI board shim
//!
//! Everything here runs on the host as well as the target:
//!
//! - Millisecond tick counter and the divider for the joystick cadence
//! - Joystick-to-pointer mapper with hold-to-accelerate movement
//! - Capability traits for the GUI library's input, OS, and log hooks
//! - Board configuration types and the `board.toml` reader

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod clock;
pub mod config;
pub mod input;
pub mod traits;
