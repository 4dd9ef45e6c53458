//! Five-way digital joystick on GPIO
//!
//! Each contact is a plain switch to ground (or to VCC), read through an
//! `embedded_hal::digital::InputPin`. Sampling is non-blocking so it can run
//! from the tick interrupt.

use embedded_hal::digital::InputPin;

use joypid_core::input::Buttons;
use joypid_core::traits::ButtonSource;

/// The five joystick contact lines
pub struct JoystickLines<P> {
    pub left: P,
    pub right: P,
    pub up: P,
    pub down: P,
    pub center: P,
}

/// GPIO joystick driver
pub struct GpioJoystick<P> {
    lines: JoystickLines<P>,
    active_low: bool,
}

impl<P: InputPin> GpioJoystick<P> {
    /// Create a joystick driver
    ///
    /// With `active_low` a pressed contact reads low, the usual wiring with
    /// pull-ups.
    pub fn new(lines: JoystickLines<P>, active_low: bool) -> Self {
        Self { lines, active_low }
    }

    /// A pin that fails to read counts as released
    fn is_pressed(pin: &mut P, active_low: bool) -> bool {
        match pin.is_high() {
            Ok(high) => high != active_low,
            Err(_) => false,
        }
    }
}

impl<P: InputPin> ButtonSource for GpioJoystick<P> {
    fn read_buttons(&mut self) -> Buttons {
        let active_low = self.active_low;
        let lines = &mut self.lines;

        let mut keys = Buttons::empty();
        keys.set(Buttons::LEFT, Self::is_pressed(&mut lines.left, active_low));
        keys.set(Buttons::RIGHT, Self::is_pressed(&mut lines.right, active_low));
        keys.set(Buttons::UP, Self::is_pressed(&mut lines.up, active_low));
        keys.set(Buttons::DOWN, Self::is_pressed(&mut lines.down, active_low));
        keys.set(Buttons::CENTER, Self::is_pressed(&mut lines.center, active_low));
        keys
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_hal::digital::{ErrorKind, ErrorType};

    // Mock pin for testing
    struct MockPin {
        level: Result<bool, ErrorKind>,
    }

    impl MockPin {
        fn high() -> Self {
            Self { level: Ok(true) }
        }

        fn low() -> Self {
            Self { level: Ok(false) }
        }

        fn broken() -> Self {
            Self {
                level: Err(ErrorKind::Other),
            }
        }
    }

    impl ErrorType for MockPin {
        type Error = ErrorKind;
    }

    impl InputPin for MockPin {
        fn is_high(&mut self) -> Result<bool, Self::Error> {
            self.level
        }

        fn is_low(&mut self) -> Result<bool, Self::Error> {
            self.level.map(|high| !high)
        }
    }

    fn idle_lines() -> JoystickLines<MockPin> {
        JoystickLines {
            left: MockPin::high(),
            right: MockPin::high(),
            up: MockPin::high(),
            down: MockPin::high(),
            center: MockPin::high(),
        }
    }

    #[test]
    fn test_idle_active_low_reads_empty() {
        let mut joystick = GpioJoystick::new(idle_lines(), true);
        assert_eq!(joystick.read_buttons(), Buttons::empty());
    }

    #[test]
    fn test_active_low_press() {
        let mut lines = idle_lines();
        lines.left = MockPin::low();
        lines.center = MockPin::low();

        let mut joystick = GpioJoystick::new(lines, true);
        assert_eq!(joystick.read_buttons(), Buttons::LEFT | Buttons::CENTER);
    }

    #[test]
    fn test_active_high_wiring() {
        let mut lines = idle_lines();
        lines.down = MockPin::low();

        // Everything but DOWN reads high, i.e. pressed
        let mut joystick = GpioJoystick::new(lines, false);
        assert_eq!(
            joystick.read_buttons(),
            Buttons::LEFT | Buttons::RIGHT | Buttons::UP | Buttons::CENTER
        );
    }

    #[test]
    fn test_read_error_is_released() {
        let mut lines = idle_lines();
        lines.up = MockPin::broken();
        lines.right = MockPin::low();

        let mut joystick = GpioJoystick::new(lines, true);
        assert_eq!(joystick.read_buttons(), Buttons::RIGHT);
    }
}
