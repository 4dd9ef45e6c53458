//! Board configuration types

use crate::clock::DEFAULT_POLL_TICKS;
use crate::input::{AccelCurve, DEFAULT_DEAD_ZONE, DEFAULT_MAX_STEP};

/// Number of GPIO pins on the RP2040
pub const GPIO_COUNT: u8 = 30;

/// Default tick interrupt rate (1 ms)
pub const DEFAULT_TICK_HZ: u32 = 1000;

/// Accepted tick rate range
pub const MIN_TICK_HZ: u32 = 100;
pub const MAX_TICK_HZ: u32 = 10_000;

/// Configuration errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Unknown or malformed `[section]` header
    InvalidSection,
    /// Key not recognised in its section
    UnknownKey,
    /// Value has the wrong type or does not fit
    InvalidValue,
    /// Value parsed but lies outside the accepted range
    OutOfRange,
    /// Two joystick buttons share a GPIO
    DuplicatePin,
}

/// Tick source configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ClockConfig {
    /// Timer interrupt rate; 1000 gives millisecond ticks
    pub tick_hz: u32,
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self {
            tick_hz: DEFAULT_TICK_HZ,
        }
    }
}

/// GPIO assignment for the five joystick contacts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct JoystickPins {
    pub left: u8,
    pub right: u8,
    pub up: u8,
    pub down: u8,
    pub center: u8,
}

impl Default for JoystickPins {
    fn default() -> Self {
        Self {
            left: 12,
            right: 13,
            up: 14,
            down: 15,
            center: 16,
        }
    }
}

impl JoystickPins {
    /// Pins in left, right, up, down, center order
    pub fn as_array(&self) -> [u8; 5] {
        [self.left, self.right, self.up, self.down, self.center]
    }
}

/// Joystick mapper configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct JoystickConfig {
    /// Ticks between joystick polls
    pub poll_ticks: u16,
    /// Polls of unchanged input before acceleration starts
    pub dead_zone: u8,
    /// Largest displacement per poll in pixels
    pub max_step: u8,
    /// Contacts pull the line low when pressed
    pub active_low: bool,
    pub pins: JoystickPins,
}

impl Default for JoystickConfig {
    fn default() -> Self {
        Self {
            poll_ticks: DEFAULT_POLL_TICKS,
            dead_zone: DEFAULT_DEAD_ZONE,
            max_step: DEFAULT_MAX_STEP,
            active_low: true,
            pins: JoystickPins::default(),
        }
    }
}

impl JoystickConfig {
    pub fn curve(&self) -> AccelCurve {
        AccelCurve {
            dead_zone: self.dead_zone,
            max_step: self.max_step,
        }
    }
}

/// Complete board configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BoardConfig {
    pub clock: ClockConfig,
    pub joystick: JoystickConfig,
}

impl BoardConfig {
    /// Check ranges and pin uniqueness
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(MIN_TICK_HZ..=MAX_TICK_HZ).contains(&self.clock.tick_hz) {
            return Err(ConfigError::OutOfRange);
        }

        let joystick = &self.joystick;
        if joystick.poll_ticks == 0 || joystick.max_step == 0 {
            return Err(ConfigError::OutOfRange);
        }

        let pins = joystick.pins.as_array();
        if pins.iter().any(|&pin| pin >= GPIO_COUNT) {
            return Err(ConfigError::OutOfRange);
        }
        for (i, pin) in pins.iter().enumerate() {
            if pins[i + 1..].contains(pin) {
                return Err(ConfigError::DuplicatePin);
            }
        }

        Ok(())
    }

    /// Joystick poll interval in milliseconds
    pub fn poll_interval_ms(&self) -> u32 {
        self.joystick.poll_ticks as u32 * 1000 / self.clock.tick_hz.max(1)
    }
}
