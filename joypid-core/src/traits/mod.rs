//! Capability traits
//!
//! These define the seams between the shim logic, the board drivers, and the
//! external GUI library.

pub mod gui;
pub mod input;

pub use gui::{GuiLog, GuiOs, NullLog, SingleTask, SINGLE_TASK_ID};
pub use input::{ButtonSource, PointerTarget};
