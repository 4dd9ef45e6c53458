//! Millisecond tick counter
//!
//! A single wrapping 32-bit millisecond counter advanced by the periodic
//! timer interrupt and read from foreground code. The interrupt may run at
//! any rate; each tick credits `1000 / tick_hz` ms, carrying the fraction to
//! the next tick. Comparisons use signed wrapping differences so a single
//! wraparound is tolerated.

use portable_atomic::{AtomicU32, Ordering};

use crate::config::DEFAULT_TICK_HZ;

/// Tick source errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ClockError {
    /// The tick source stopped advancing during a delay
    ///
    /// Reported when the liveness probe says the timer interrupt cannot
    /// fire (masked interrupts, timer not armed).
    TickStalled {
        /// Milliseconds still outstanding when the stall was detected
        remaining_ms: u32,
    },
}

/// Process-wide monotonic millisecond counter
///
/// Only the timer interrupt calls [`TickClock::advance`]. Everything else
/// reads.
#[derive(Debug)]
pub struct TickClock {
    millis: AtomicU32,
    tick_hz: AtomicU32,
    /// Sub-millisecond remainder, in units of `1 / tick_hz` ms
    residue: AtomicU32,
}

impl Default for TickClock {
    fn default() -> Self {
        Self::new()
    }
}

impl TickClock {
    /// Create a clock at zero, ticking at 1 kHz
    pub const fn new() -> Self {
        Self::starting_at(0)
    }

    /// Create a 1 kHz clock starting at an arbitrary millisecond value
    pub const fn starting_at(ms: u32) -> Self {
        Self {
            millis: AtomicU32::new(ms),
            tick_hz: AtomicU32::new(DEFAULT_TICK_HZ),
            residue: AtomicU32::new(0),
        }
    }

    /// Set the interrupt rate the clock is advanced at
    ///
    /// Call before the timer starts. A rate of 0 is treated as 1 Hz.
    pub fn set_tick_hz(&self, tick_hz: u32) {
        self.tick_hz.store(tick_hz.max(1), Ordering::Relaxed);
        self.residue.store(0, Ordering::Relaxed);
    }

    /// The interrupt rate in Hz
    pub fn tick_hz(&self) -> u32 {
        self.tick_hz.load(Ordering::Relaxed)
    }

    /// Advance by one tick
    ///
    /// Call exactly once per timer interrupt. Returns the new millisecond
    /// value.
    pub fn advance(&self) -> u32 {
        let tick_hz = u64::from(self.tick_hz());
        let accrued = u64::from(self.residue.load(Ordering::Relaxed)) + 1000;

        // residue < tick_hz, so both fit back into u32
        let step = (accrued / tick_hz) as u32;
        self.residue
            .store((accrued % tick_hz) as u32, Ordering::Relaxed);

        self.millis
            .fetch_add(step, Ordering::Relaxed)
            .wrapping_add(step)
    }

    /// Milliseconds since the clock started, wrapping
    pub fn now(&self) -> u32 {
        self.millis.load(Ordering::Relaxed)
    }

    /// Milliseconds elapsed since `earlier`, wrapping
    pub fn elapsed_since(&self, earlier: u32) -> u32 {
        self.now().wrapping_sub(earlier)
    }

    /// Busy-wait for `ms` milliseconds
    ///
    /// Returns at once for `ms <= 0`. Otherwise spins until the signed
    /// difference between the deadline and the current time is no longer
    /// positive. `is_ticking` is polled on every spin; when it returns false
    /// the counter cannot move and the wait aborts with
    /// [`ClockError::TickStalled`].
    pub fn delay_ms<F>(&self, ms: i32, mut is_ticking: F) -> Result<(), ClockError>
    where
        F: FnMut() -> bool,
    {
        if ms <= 0 {
            return Ok(());
        }
        let deadline = self.now().wrapping_add(ms as u32);

        loop {
            let remaining = deadline.wrapping_sub(self.now()) as i32;
            if remaining <= 0 {
                return Ok(());
            }
            if !is_ticking() {
                return Err(ClockError::TickStalled {
                    remaining_ms: remaining as u32,
                });
            }
            core::hint::spin_loop();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_starts_at_zero() {
        let clock = TickClock::new();
        assert_eq!(clock.now(), 0);
    }

    #[test]
    fn test_advance_returns_new_value() {
        let clock = TickClock::starting_at(41);
        assert_eq!(clock.advance(), 42);
        assert_eq!(clock.now(), 42);
    }

    #[test]
    fn test_advance_wraps() {
        let clock = TickClock::starting_at(u32::MAX);
        assert_eq!(clock.advance(), 0);
        assert_eq!(clock.elapsed_since(u32::MAX), 1);
    }

    #[test]
    fn test_delay_waits_for_requested_millis() {
        let clock = TickClock::starting_at(1000);
        let mut polls = 0;

        // Each probe call stands in for one timer interrupt
        let result = clock.delay_ms(5, || {
            polls += 1;
            clock.advance();
            true
        });

        assert_eq!(result, Ok(()));
        assert_eq!(polls, 5);
        assert_eq!(clock.now(), 1005);
    }

    #[test]
    fn test_delay_zero_returns_immediately() {
        let clock = TickClock::new();
        let result = clock.delay_ms(0, || panic!("probe must not be polled"));
        assert_eq!(result, Ok(()));
    }

    #[test]
    fn test_delay_across_wraparound() {
        let clock = TickClock::starting_at(u32::MAX - 2);
        let result = clock.delay_ms(10, || {
            clock.advance();
            true
        });

        assert_eq!(result, Ok(()));
        assert_eq!(clock.now(), 7);
    }

    #[test]
    fn test_delay_reports_stalled_tick() {
        let clock = TickClock::new();
        let mut fired = 0;

        let result = clock.delay_ms(10, || {
            if fired < 3 {
                fired += 1;
                clock.advance();
                true
            } else {
                false
            }
        });

        assert_eq!(result, Err(ClockError::TickStalled { remaining_ms: 7 }));
    }

    #[test]
    fn test_negative_delay_returns_immediately() {
        let clock = TickClock::new();
        let result = clock.delay_ms(-5, || panic!("probe must not be polled"));
        assert_eq!(result, Ok(()));
    }

    #[test]
    fn test_longest_delay_is_not_truncated() {
        let clock = TickClock::new();
        let result = clock.delay_ms(i32::MAX, || false);
        assert_eq!(
            result,
            Err(ClockError::TickStalled {
                remaining_ms: i32::MAX as u32
            })
        );
    }

    #[test]
    fn test_slow_tick_counts_milliseconds() {
        let clock = TickClock::new();
        clock.set_tick_hz(100);

        // One second of 100 Hz interrupts
        for _ in 0..100 {
            clock.advance();
        }
        assert_eq!(clock.now(), 1000);
    }

    #[test]
    fn test_fast_tick_carries_fraction() {
        let clock = TickClock::new();
        clock.set_tick_hz(10_000);

        for _ in 0..9 {
            clock.advance();
        }
        assert_eq!(clock.now(), 0);
        assert_eq!(clock.advance(), 1);

        for _ in 0..9_990 {
            clock.advance();
        }
        assert_eq!(clock.now(), 1000);
    }

    #[test]
    fn test_delay_at_slow_tick_waits_real_time() {
        let clock = TickClock::new();
        clock.set_tick_hz(100);
        let mut ticks = 0;

        let result = clock.delay_ms(25, || {
            ticks += 1;
            clock.advance();
            true
        });

        assert_eq!(result, Ok(()));
        assert_eq!(ticks, 3);
        assert_eq!(clock.now(), 30);
    }

    #[test]
    fn test_zero_rate_is_one_hz() {
        let clock = TickClock::new();
        clock.set_tick_hz(0);
        assert_eq!(clock.tick_hz(), 1);
        assert_eq!(clock.advance(), 1000);
    }

    proptest! {
        #[test]
        fn prop_advance_n_times(start in any::<u32>(), n in 0u32..2000) {
            let clock = TickClock::starting_at(start);
            for _ in 0..n {
                clock.advance();
            }
            prop_assert_eq!(clock.now(), start.wrapping_add(n));
            prop_assert_eq!(clock.elapsed_since(start), n);
        }

        #[test]
        fn prop_millis_track_tick_rate(tick_hz in 100u32..=10_000, n in 0u32..20_000) {
            let clock = TickClock::new();
            clock.set_tick_hz(tick_hz);
            for _ in 0..n {
                clock.advance();
            }
            let expected = (u64::from(n) * 1000 / u64::from(tick_hz)) as u32;
            prop_assert_eq!(clock.now(), expected);
        }
    }
}
