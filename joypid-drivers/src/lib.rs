//! Hardware driver implementations
//!
//! Concrete implementations of the traits defined in joypid-core:
//!
//! - Five-way digital joystick on GPIO (implements `ButtonSource`)

#![no_std]
#![deny(unsafe_code)]

pub mod input;
