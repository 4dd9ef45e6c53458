//! Board configuration
//!
//! Types for the tick source and joystick, plus the reader for the
//! `board.toml` file embedded in the firmware.

pub mod parse;
pub mod types;

pub use parse::parse_config;
pub use types::*;
