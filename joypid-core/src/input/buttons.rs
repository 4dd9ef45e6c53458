//! Joystick button snapshot

use bitflags::bitflags;

bitflags! {
    /// One sample of the five-way joystick
    ///
    /// A set bit means the direction or center button is held.
    #[repr(transparent)]
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct Buttons: u8 {
        const LEFT = 0x01;
        const RIGHT = 0x02;
        const UP = 0x04;
        const DOWN = 0x08;
        const CENTER = 0x10;
    }
}

impl Buttons {
    /// Horizontal direction (-1, 0, or +1)
    pub fn dx(self) -> i32 {
        self.contains(Buttons::RIGHT) as i32 - self.contains(Buttons::LEFT) as i32
    }

    /// Vertical direction (-1, 0, or +1), screen coordinates grow downward
    pub fn dy(self) -> i32 {
        self.contains(Buttons::DOWN) as i32 - self.contains(Buttons::UP) as i32
    }

    /// Center button held
    pub fn is_pressed(self) -> bool {
        self.contains(Buttons::CENTER)
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Buttons {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "Buttons({=u8:#x})", self.bits());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_directions() {
        assert_eq!(Buttons::LEFT.dx(), -1);
        assert_eq!(Buttons::RIGHT.dx(), 1);
        assert_eq!(Buttons::UP.dy(), -1);
        assert_eq!(Buttons::DOWN.dy(), 1);
        assert_eq!(Buttons::UP.dx(), 0);
        assert_eq!(Buttons::empty().dy(), 0);
    }

    #[test]
    fn test_opposing_directions_cancel() {
        let keys = Buttons::LEFT | Buttons::RIGHT | Buttons::UP | Buttons::DOWN;
        assert_eq!(keys.dx(), 0);
        assert_eq!(keys.dy(), 0);
    }

    #[test]
    fn test_center_is_press() {
        assert!((Buttons::CENTER | Buttons::UP).is_pressed());
        assert!(!Buttons::UP.is_pressed());
    }

    #[test]
    fn test_unknown_bits_dropped() {
        assert_eq!(Buttons::from_bits_truncate(0xE1), Buttons::LEFT);
    }
}
