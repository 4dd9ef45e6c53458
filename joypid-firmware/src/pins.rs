//! GPIO allocation by number
//!
//! Joystick pin numbers come from `board.toml`, so the bank hands out pins
//! by index at runtime.

use defmt::*;
use embassy_rp::gpio::{AnyPin, Input, Pull};
use embassy_rp::{Peri, Peripherals};

use joypid_core::config::{JoystickConfig, GPIO_COUNT};
use joypid_drivers::input::{GpioJoystick, JoystickLines};

use crate::systick::BoardJoystick;

/// Error when requesting a pin
#[derive(Debug, Clone, Copy, PartialEq, Eq, defmt::Format)]
pub enum PinError {
    /// Pin number out of range (0-29 valid)
    InvalidPin(u8),
    /// Pin already taken
    AlreadyTaken(u8),
}

/// All GPIO pins, taken one at a time by number
pub struct PinBank {
    pins: [Option<Peri<'static, AnyPin>>; GPIO_COUNT as usize],
}

impl PinBank {
    /// Move every GPIO out of the peripherals
    pub fn new(p: Peripherals) -> Self {
        Self {
            pins: [
                Some(p.PIN_0.into()),
                Some(p.PIN_1.into()),
                Some(p.PIN_2.into()),
                Some(p.PIN_3.into()),
                Some(p.PIN_4.into()),
                Some(p.PIN_5.into()),
                Some(p.PIN_6.into()),
                Some(p.PIN_7.into()),
                Some(p.PIN_8.into()),
                Some(p.PIN_9.into()),
                Some(p.PIN_10.into()),
                Some(p.PIN_11.into()),
                Some(p.PIN_12.into()),
                Some(p.PIN_13.into()),
                Some(p.PIN_14.into()),
                Some(p.PIN_15.into()),
                Some(p.PIN_16.into()),
                Some(p.PIN_17.into()),
                Some(p.PIN_18.into()),
                Some(p.PIN_19.into()),
                Some(p.PIN_20.into()),
                Some(p.PIN_21.into()),
                Some(p.PIN_22.into()),
                Some(p.PIN_23.into()),
                Some(p.PIN_24.into()),
                Some(p.PIN_25.into()),
                Some(p.PIN_26.into()),
                Some(p.PIN_27.into()),
                Some(p.PIN_28.into()),
                Some(p.PIN_29.into()),
            ],
        }
    }

    /// Take a pin by number
    pub fn take(&mut self, pin: u8) -> Result<Peri<'static, AnyPin>, PinError> {
        self.pins
            .get_mut(pin as usize)
            .ok_or(PinError::InvalidPin(pin))?
            .take()
            .ok_or(PinError::AlreadyTaken(pin))
    }

    fn input(&mut self, pin: u8, pull: Pull) -> Result<Input<'static>, PinError> {
        Ok(Input::new(self.take(pin)?, pull))
    }

    /// Build the joystick driver from the configured pins
    pub fn joystick(&mut self, config: &JoystickConfig) -> Result<BoardJoystick, PinError> {
        let pull = if config.active_low { Pull::Up } else { Pull::Down };
        let pins = &config.pins;

        let lines = JoystickLines {
            left: self.input(pins.left, pull)?,
            right: self.input(pins.right, pull)?,
            up: self.input(pins.up, pull)?,
            down: self.input(pins.down, pull)?,
            center: self.input(pins.center, pull)?,
        };

        info!(
            "Joystick on GPIO L={} R={} U={} D={} C={}",
            pins.left, pins.right, pins.up, pins.down, pins.center
        );
        Ok(GpioJoystick::new(lines, config.active_low))
    }
}
