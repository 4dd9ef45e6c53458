//! Bindings to the closed-source GUI library
//!
//! Only the handful of entry points the shim needs. Everything else in the
//! library is reached from the application's own C code.

use core::ffi::c_int;

use joypid_core::input::{DisplaySize, PointerState};
use joypid_core::traits::PointerTarget;

/// Library start-up failure
#[derive(Debug, Clone, Copy, PartialEq, Eq, defmt::Format)]
pub struct GuiInitError(pub i32);

/// Pointer input device state as laid out by the library
#[repr(C)]
#[derive(Debug, Clone, Copy, Default)]
pub struct GuiPidState {
    pub x: c_int,
    pub y: c_int,
    pub pressed: u8,
    pub layer: u8,
}

impl From<GuiPidState> for PointerState {
    fn from(raw: GuiPidState) -> Self {
        Self {
            x: raw.x,
            y: raw.y,
            pressed: raw.pressed != 0,
            layer: raw.layer,
        }
    }
}

impl From<&PointerState> for GuiPidState {
    fn from(state: &PointerState) -> Self {
        Self {
            x: state.x,
            y: state.y,
            pressed: state.pressed as u8,
            layer: state.layer,
        }
    }
}

extern "C" {
    fn GUI_Init() -> c_int;
    fn GUI_Exec() -> c_int;
    fn GUI_PID_GetState(state: *mut GuiPidState) -> c_int;
    fn GUI_PID_StoreState(state: *const GuiPidState);
    fn LCD_GetXSize() -> c_int;
    fn LCD_GetYSize() -> c_int;
}

/// Initialize the library
///
/// The library calls back into `GUI_X_Init` from here.
pub fn init() -> Result<(), GuiInitError> {
    // SAFETY: called once from thread mode before any other library call
    match unsafe { GUI_Init() } {
        0 => Ok(()),
        code => Err(GuiInitError(code)),
    }
}

/// Run pending window manager jobs; true if any work was done
pub fn exec() -> bool {
    // SAFETY: library initialized by `init`, called from thread mode only
    unsafe { GUI_Exec() != 0 }
}

/// The library's pointer input queue
///
/// Zero-sized; every call goes straight through to the library.
#[derive(Debug, Default)]
pub struct EmWinPointer;

impl PointerTarget for EmWinPointer {
    fn pointer_state(&mut self) -> PointerState {
        let mut raw = GuiPidState::default();
        // SAFETY: `raw` is a valid, writable GUI_PID_STATE
        unsafe {
            GUI_PID_GetState(&mut raw);
        }
        raw.into()
    }

    fn store_pointer_state(&mut self, state: &PointerState) {
        let raw = GuiPidState::from(state);
        // SAFETY: the library copies the state before returning
        unsafe { GUI_PID_StoreState(&raw) }
    }

    fn display_size(&self) -> DisplaySize {
        // SAFETY: pure queries of the configured display
        unsafe { DisplaySize::new(LCD_GetXSize(), LCD_GetYSize()) }
    }
}
