//! SysTick tick source and joystick poll
//!
//! The SysTick exception advances the millisecond clock and, every
//! `poll_ticks` ticks, runs the joystick mapper against the library's
//! pointer queue. All mapper state lives in one interrupt-owned context.

use core::cell::RefCell;

use cortex_m::peripheral::scb::VectActive;
use cortex_m::peripheral::syst::SystClkSource;
use cortex_m::peripheral::{SCB, SYST};
use cortex_m_rt::exception;
use defmt::*;
use embassy_rp::gpio::Input;
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::blocking_mutex::Mutex;
use portable_atomic::{AtomicBool, Ordering};

use joypid_core::clock::{TickClock, TickDivider};
use joypid_core::config::JoystickConfig;
use joypid_core::input::JoystickMapper;
use joypid_drivers::input::GpioJoystick;

use crate::emwin::EmWinPointer;

/// Joystick wired to RP2040 GPIO
pub type BoardJoystick = GpioJoystick<Input<'static>>;

/// Millisecond clock, advanced only by the SysTick exception
pub static CLOCK: TickClock = TickClock::new();

/// Set once SysTick has been configured and enabled
static ARMED: AtomicBool = AtomicBool::new(false);

/// State owned by the tick interrupt
struct PollContext {
    divider: TickDivider,
    mapper: JoystickMapper,
    joystick: BoardJoystick,
    pointer: EmWinPointer,
}

static POLL: Mutex<CriticalSectionRawMutex, RefCell<Option<PollContext>>> =
    Mutex::new(RefCell::new(None));

/// Hand the joystick to the tick interrupt
pub fn install_joystick(joystick: BoardJoystick, config: &JoystickConfig) {
    let divider = TickDivider::new(config.poll_ticks);
    let mapper = JoystickMapper::new(config.curve());
    info!(
        "Joystick installed: poll every {} ticks, curve {}",
        divider.period(),
        mapper.curve()
    );

    let context = PollContext {
        divider,
        mapper,
        joystick,
        pointer: EmWinPointer,
    };
    POLL.lock(|cell| cell.replace(Some(context)));
}

/// Start SysTick at `tick_hz` from the core clock
///
/// The clock is told the rate first so it keeps counting milliseconds.
pub fn arm(mut syst: SYST, core_hz: u32, tick_hz: u32) {
    let tick_hz = tick_hz.max(1);
    let reload = (core_hz / tick_hz).saturating_sub(1);
    CLOCK.set_tick_hz(tick_hz);

    syst.set_clock_source(SystClkSource::Core);
    syst.set_reload(reload);
    syst.clear_current();
    syst.enable_interrupt();
    syst.enable_counter();

    ARMED.store(true, Ordering::Release);
    info!("SysTick armed: {} Hz (reload {})", tick_hz, reload);
}

/// Whether the clock can advance while the caller spins
///
/// False before [`arm`], with interrupts masked, or from inside an exception
/// handler (all handlers share SysTick's priority, so it cannot preempt).
pub fn is_ticking() -> bool {
    ARMED.load(Ordering::Acquire)
        && cortex_m::register::primask::read().is_active()
        && SCB::vect_active() == VectActive::ThreadMode
}

#[exception]
fn SysTick() {
    CLOCK.advance();

    POLL.lock(|cell| {
        if let Some(ctx) = cell.borrow_mut().as_mut() {
            if ctx.divider.advance() {
                ctx.mapper.exec(&mut ctx.joystick, &mut ctx.pointer);
            }
        }
    });
}
