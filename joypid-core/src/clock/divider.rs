//! Tick rate divider
//!
//! Derives a slower cadence from the tick interrupt, e.g. the joystick poll
//! every 50th tick.

/// Default joystick poll period in ticks (50 ms at 1 kHz)
pub const DEFAULT_POLL_TICKS: u16 = 50;

/// Fires on every `period`-th call to [`TickDivider::advance`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TickDivider {
    period: u16,
    count: u16,
}

impl Default for TickDivider {
    fn default() -> Self {
        Self::new(DEFAULT_POLL_TICKS)
    }
}

impl TickDivider {
    /// Create a divider; a period of 0 is treated as 1
    pub const fn new(period: u16) -> Self {
        Self {
            period: if period == 0 { 1 } else { period },
            count: 0,
        }
    }

    /// The divider period in ticks
    pub fn period(&self) -> u16 {
        self.period
    }

    /// Count one tick, returning true when the period elapses
    pub fn advance(&mut self) -> bool {
        self.count += 1;
        if self.count >= self.period {
            self.count = 0;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fires_every_period() {
        let mut divider = TickDivider::new(50);
        let fired: heapless::Vec<u32, 8> = (1..=200u32)
            .filter(|_| divider.advance())
            .collect();

        assert_eq!(fired.as_slice(), &[50, 100, 150, 200]);
    }

    #[test]
    fn test_period_one_fires_always() {
        let mut divider = TickDivider::new(1);
        assert!(divider.advance());
        assert!(divider.advance());
    }

    #[test]
    fn test_zero_period_clamped() {
        let mut divider = TickDivider::new(0);
        assert_eq!(divider.period(), 1);
        assert!(divider.advance());
    }

    #[test]
    fn test_default_is_joystick_cadence() {
        assert_eq!(TickDivider::default().period(), DEFAULT_POLL_TICKS);
    }
}
