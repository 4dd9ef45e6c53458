//! joypid - GUI library board shim
//!
//! Firmware binary for an RP2040 board driving the closed-source GUI
//! library. Provides the library's `GUI_X_*` system hooks and emulates a
//! touch pointer from a five-way joystick polled in the SysTick interrupt.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_time::{Duration, Timer};
use {defmt_rtt as _, panic_probe as _};

mod config;
mod emwin;
mod gui_x;
mod pins;
mod systick;

use crate::gui_x::BringUp;
use crate::pins::PinBank;

/// Pause between window manager passes
const GUI_EXEC_INTERVAL_MS: u64 = 10;

/// Main entry point
#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    info!("joypid firmware starting...");

    let core = unwrap!(cortex_m::Peripherals::take());
    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    let board = config::load();

    let mut bank = PinBank::new(p);
    let joystick = bank
        .joystick(&board.joystick)
        .map_err(|e| error!("Joystick pins unavailable: {:?}", e))
        .ok();

    gui_x::stage_bring_up(BringUp {
        joystick,
        syst: core.SYST,
        config: board,
    });

    // GUI_X_Init runs from inside here
    if let Err(e) = emwin::init() {
        error!("GUI_Init failed: {:?}", e);
    } else {
        info!("GUI initialized at {} ms", gui_x::GUI_X_GetTime());
    }

    loop {
        emwin::exec();
        Timer::after(Duration::from_millis(GUI_EXEC_INTERVAL_MS)).await;
    }
}
