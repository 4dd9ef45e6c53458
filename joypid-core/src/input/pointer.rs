//! Pointer state and display geometry

/// Emulated pointer (touch) state owned by the GUI library
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PointerState {
    pub x: i32,
    pub y: i32,
    pub pressed: bool,
    /// Display layer the pointer belongs to, carried through unchanged
    pub layer: u8,
}

impl PointerState {
    /// Pointer at a position, released, on layer 0
    pub const fn at(x: i32, y: i32) -> Self {
        Self {
            x,
            y,
            pressed: false,
            layer: 0,
        }
    }

    /// Clamp the position into the drawable area
    pub fn clamped(mut self, size: DisplaySize) -> Self {
        self.x = self.x.clamp(0, size.max_x());
        self.y = self.y.clamp(0, size.max_y());
        self
    }
}

/// Current drawable area in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DisplaySize {
    pub width: i32,
    pub height: i32,
}

impl DisplaySize {
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// Largest valid x; 0 for an empty axis
    pub fn max_x(&self) -> i32 {
        (self.width - 1).max(0)
    }

    /// Largest valid y; 0 for an empty axis
    pub fn max_y(&self) -> i32 {
        (self.height - 1).max(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_inside_is_identity() {
        let size = DisplaySize::new(320, 240);
        assert_eq!(PointerState::at(10, 20).clamped(size), PointerState::at(10, 20));
    }

    #[test]
    fn test_clamp_to_edges() {
        let size = DisplaySize::new(320, 240);
        assert_eq!(PointerState::at(-5, 500).clamped(size), PointerState::at(0, 239));
        assert_eq!(PointerState::at(320, -1).clamped(size), PointerState::at(319, 0));
    }

    #[test]
    fn test_empty_display_clamps_to_origin() {
        let size = DisplaySize::new(0, -3);
        assert_eq!(PointerState::at(7, 7).clamped(size), PointerState::at(0, 0));
    }

    #[test]
    fn test_clamp_keeps_press_and_layer() {
        let state = PointerState {
            x: 999,
            y: 0,
            pressed: true,
            layer: 2,
        };
        let clamped = state.clamped(DisplaySize::new(100, 100));
        assert!(clamped.pressed);
        assert_eq!(clamped.layer, 2);
    }
}
