//! Joystick-to-pointer mapper
//!
//! Turns periodic samples of a five-way digital joystick into pointer
//! updates with hold-to-accelerate movement:
//!
//! - a new button combination moves the pointer by 1 pixel
//! - holding it moves 0 pixels for the first `dead_zone` polls, then
//!   1, 2, 3, ... pixels per poll up to `max_step`
//! - an idle joystick (no buttons, unchanged) publishes nothing

use crate::traits::{ButtonSource, PointerTarget};

use super::buttons::Buttons;
use super::pointer::{DisplaySize, PointerState};

/// Polls of unchanged input before the pointer starts accelerating
pub const DEFAULT_DEAD_ZONE: u8 = 3;

/// Largest per-poll displacement in pixels
pub const DEFAULT_MAX_STEP: u8 = 40;

/// Hold-then-accelerate displacement curve
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AccelCurve {
    pub dead_zone: u8,
    pub max_step: u8,
}

impl Default for AccelCurve {
    fn default() -> Self {
        Self {
            dead_zone: DEFAULT_DEAD_ZONE,
            max_step: DEFAULT_MAX_STEP,
        }
    }
}

impl AccelCurve {
    /// Highest value the hold counter reaches
    pub const fn hold_limit(&self) -> u8 {
        self.dead_zone.saturating_add(self.max_step)
    }

    /// Displacement for a given hold count
    pub fn step_for(&self, hold: u8) -> i32 {
        hold.saturating_sub(self.dead_zone).min(self.max_step) as i32
    }
}

/// Mapper state that persists between polls
#[derive(Debug, Clone)]
pub struct JoystickMapper {
    curve: AccelCurve,
    /// Consecutive polls with an unchanged snapshot
    hold: u8,
    /// Snapshot last published to the pointer
    previous: Buttons,
}

impl Default for JoystickMapper {
    fn default() -> Self {
        Self::new(AccelCurve::default())
    }
}

impl JoystickMapper {
    pub const fn new(curve: AccelCurve) -> Self {
        Self {
            curve,
            hold: 0,
            previous: Buttons::empty(),
        }
    }

    pub fn curve(&self) -> AccelCurve {
        self.curve
    }

    pub fn hold(&self) -> u8 {
        self.hold
    }

    pub fn previous(&self) -> Buttons {
        self.previous
    }

    /// Return to the idle state
    pub fn reset(&mut self) {
        self.hold = 0;
        self.previous = Buttons::empty();
    }

    /// Feed one snapshot into the acceleration curve
    ///
    /// Returns the displacement to apply, or `None` when the joystick is idle
    /// and unchanged and nothing should be published.
    pub fn advance(&mut self, keys: Buttons) -> Option<i32> {
        let step = if keys == self.previous {
            if self.hold < self.curve.hold_limit() {
                self.hold += 1;
            }
            self.curve.step_for(self.hold)
        } else {
            self.hold = 0;
            1
        };

        if keys.is_empty() && keys == self.previous {
            return None;
        }

        self.previous = keys;
        Some(step)
    }

    /// Poll the joystick and publish a pointer update if needed
    ///
    /// Returns the state written to `target`, if any.
    pub fn exec<B, P>(&mut self, buttons: &mut B, target: &mut P) -> Option<PointerState>
    where
        B: ButtonSource,
        P: PointerTarget,
    {
        let keys = buttons.read_buttons();
        let step = self.advance(keys)?;

        let next = apply(keys, step, target.pointer_state(), target.display_size());
        target.store_pointer_state(&next);

        #[cfg(feature = "defmt")]
        defmt::trace!(
            "pointer {} {} pressed={} step={}",
            next.x,
            next.y,
            next.pressed,
            step
        );

        Some(next)
    }
}

/// Move `current` by `step` pixels in the held directions
///
/// Both axes end up inside `size` and `pressed` follows the center button.
pub fn apply(keys: Buttons, step: i32, current: PointerState, size: DisplaySize) -> PointerState {
    let mut next = current;
    next.x = next.x.saturating_add(keys.dx() * step);
    next.y = next.y.saturating_add(keys.dy() * step);
    next.pressed = keys.is_pressed();
    next.clamped(size)
}
