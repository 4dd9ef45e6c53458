//! Input-side seams: the raw joystick and the library's pointer accessors

use crate::input::{Buttons, DisplaySize, PointerState};

/// Raw button state provider
///
/// Implemented by the joystick driver. Called from interrupt context, so
/// implementations must not block.
pub trait ButtonSource {
    /// Sample all five buttons
    fn read_buttons(&mut self) -> Buttons;
}

/// Pointer input queue of the GUI library
///
/// The mapper reads the current pointer, modifies it, and stores it back.
pub trait PointerTarget {
    /// Fetch the pointer state the library currently holds
    fn pointer_state(&mut self) -> PointerState;

    /// Publish an updated pointer state
    fn store_pointer_state(&mut self, state: &PointerState);

    /// Current drawable area used for clamping
    fn display_size(&self) -> DisplaySize;
}
