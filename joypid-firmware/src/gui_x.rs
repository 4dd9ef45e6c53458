//! System hooks the GUI library links against
//!
//! The library expects these `GUI_X_*` symbols from the board:
//!
//! - Timing: `GUI_X_GetTime`, `GUI_X_Delay`
//! - Start-up: `GUI_X_Init` (joystick and SysTick), `GUI_X_ExecIdle`
//! - Logging: `GUI_X_Log`, `GUI_X_Warn`, `GUI_X_ErrorOut`
//! - Multitasking: `GUI_X_InitOS`, `GUI_X_Lock`, `GUI_X_Unlock`,
//!   `GUI_X_GetTaskId`, `GUI_X_WaitEvent`, `GUI_X_WaitEventTimed`,
//!   `GUI_X_SignalEvent`
//!
//! The OS hooks go through [`BoardOs`], which is the single-task no-op
//! implementation. Swapping the alias for a scheduler-backed `GuiOs` is all
//! a multi-task build needs.

#![allow(non_snake_case)]

use core::cell::RefCell;
use core::ffi::{c_char, c_int, CStr};

use cortex_m::peripheral::SYST;
use defmt::*;
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::blocking_mutex::Mutex;

use joypid_core::clock::ClockError;
use joypid_core::config::BoardConfig;
use joypid_core::traits::{GuiLog, GuiOs, SingleTask};

use crate::systick::{self, BoardJoystick, CLOCK};

/// OS capability handed to the library
type BoardOs = SingleTask;

/// Hardware that `GUI_X_Init` brings up
pub struct BringUp {
    /// `None` when the joystick pins could not be claimed
    pub joystick: Option<BoardJoystick>,
    pub syst: SYST,
    pub config: BoardConfig,
}

static BRING_UP: Mutex<CriticalSectionRawMutex, RefCell<Option<BringUp>>> =
    Mutex::new(RefCell::new(None));

/// Stage the input hardware for the library's init callback
///
/// Must happen before `GUI_Init`.
pub fn stage_bring_up(bring_up: BringUp) {
    BRING_UP.lock(|cell| cell.replace(Some(bring_up)));
}

// ---------------------------------------------------------------------------
// Timing

/// Milliseconds since boot, in the library's signed `int`
#[no_mangle]
pub extern "C" fn GUI_X_GetTime() -> c_int {
    CLOCK.now() as c_int
}

/// Busy-wait for `ms` milliseconds
///
/// If the tick cannot advance (interrupts masked, called from a handler, or
/// before `GUI_X_Init`), the remainder is spun off on the CPU cycle count
/// instead of hanging forever.
#[no_mangle]
pub extern "C" fn GUI_X_Delay(ms: c_int) {
    if let Err(ClockError::TickStalled { remaining_ms }) =
        CLOCK.delay_ms(ms, systick::is_ticking)
    {
        warn!(
            "GUI_X_Delay: tick stalled, {} ms left on cycle count",
            remaining_ms
        );
        let cycles_per_ms = embassy_rp::clocks::clk_sys_freq() / 1000;
        for _ in 0..remaining_ms {
            cortex_m::asm::delay(cycles_per_ms);
        }
    }
}

// ---------------------------------------------------------------------------
// Start-up

/// Called by `GUI_Init` before the library initializes itself
#[no_mangle]
pub extern "C" fn GUI_X_Init() {
    let Some(bring_up) = BRING_UP.lock(|cell| cell.take()) else {
        warn!("GUI_X_Init: nothing staged, tick and joystick disabled");
        return;
    };

    let BringUp {
        joystick,
        syst,
        config,
    } = bring_up;

    match joystick {
        Some(joystick) => systick::install_joystick(joystick, &config.joystick),
        None => warn!("GUI_X_Init: no joystick, pointer input disabled"),
    }
    systick::arm(
        syst,
        embassy_rp::clocks::clk_sys_freq(),
        config.clock.tick_hz,
    );
}

/// Called when the window manager has nothing to do
#[no_mangle]
pub extern "C" fn GUI_X_ExecIdle() {}

// ---------------------------------------------------------------------------
// Logging

/// Forwards library diagnostics to defmt
#[cfg(feature = "gui-log")]
struct DefmtLog;

#[cfg(feature = "gui-log")]
impl GuiLog for DefmtLog {
    fn log(&self, msg: &str) {
        debug!("GUI: {}", msg);
    }

    fn warn(&self, msg: &str) {
        warn!("GUI: {}", msg);
    }

    fn error_out(&self, msg: &str) {
        error!("GUI: {}", msg);
    }
}

#[cfg(feature = "gui-log")]
const LOG: DefmtLog = DefmtLog;

#[cfg(not(feature = "gui-log"))]
const LOG: joypid_core::traits::NullLog = joypid_core::traits::NullLog;

/// Borrow a library message as `&str`
///
/// # Safety
/// `s` must be null or point to a NUL-terminated string that outlives the
/// returned reference.
unsafe fn message<'a>(s: *const c_char) -> Option<&'a str> {
    if s.is_null() {
        return None;
    }
    CStr::from_ptr(s).to_str().ok()
}

/// # Safety
/// `s` is a NUL-terminated string supplied by the library.
#[no_mangle]
pub unsafe extern "C" fn GUI_X_Log(s: *const c_char) {
    if let Some(msg) = message(s) {
        LOG.log(msg);
    }
}

/// # Safety
/// `s` is a NUL-terminated string supplied by the library.
#[no_mangle]
pub unsafe extern "C" fn GUI_X_Warn(s: *const c_char) {
    if let Some(msg) = message(s) {
        LOG.warn(msg);
    }
}

/// # Safety
/// `s` is a NUL-terminated string supplied by the library.
#[no_mangle]
pub unsafe extern "C" fn GUI_X_ErrorOut(s: *const c_char) {
    if let Some(msg) = message(s) {
        LOG.error_out(msg);
    }
}

// ---------------------------------------------------------------------------
// Multitasking

#[no_mangle]
pub extern "C" fn GUI_X_InitOS() {
    BoardOs::default().init();
}

#[no_mangle]
pub extern "C" fn GUI_X_Lock() {
    BoardOs::default().lock();
}

#[no_mangle]
pub extern "C" fn GUI_X_Unlock() {
    BoardOs::default().unlock();
}

#[no_mangle]
pub extern "C" fn GUI_X_GetTaskId() -> u32 {
    BoardOs::default().task_id()
}

// ---------------------------------------------------------------------------
// Event driving

#[no_mangle]
pub extern "C" fn GUI_X_WaitEvent() {
    BoardOs::default().wait_event();
}

#[no_mangle]
pub extern "C" fn GUI_X_WaitEventTimed(period: c_int) {
    BoardOs::default().wait_event_timed(period);
}

#[no_mangle]
pub extern "C" fn GUI_X_SignalEvent() {
    BoardOs::default().signal_event();
}
