//! Ready/fire blink timer
//!
//! The flash cadence rides the same 0-80 scale as the charge
//! counters: the timer climbs by ten per effective update and flips
//! its flag each time it tops out, so fully charged banks alternate
//! their status text every eight updates.

/// Counter increment per effective update
pub const BLINK_STEP: u8 = 10;

/// Counter value at which the flag flips and the counter restarts
pub const BLINK_WRAP: u8 = 80;

/// Timer driving the charged-bank status flash
#[derive(Debug, Clone)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BlinkTimer {
    counter: u8,
    flag: bool,
}

impl BlinkTimer {
    pub fn new() -> Self {
        Self {
            counter: 0,
            flag: false,
        }
    }

    /// Advance one effective update
    pub fn tick(&mut self) {
        self.counter += BLINK_STEP;
        if self.counter >= BLINK_WRAP {
            self.counter = 0;
            self.flag = !self.flag;
        }
    }

    /// Current flash phase
    pub fn is_on(&self) -> bool {
        self.flag
    }
}

impl Default for BlinkTimer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_flips_every_eighth_tick() {
        let mut timer = BlinkTimer::new();
        for _ in 0..7 {
            timer.tick();
            assert!(!timer.is_on());
        }
        timer.tick();
        assert!(timer.is_on());
    }

    #[test]
    fn test_full_period_returns_to_start() {
        let mut timer = BlinkTimer::new();
        for _ in 0..16 {
            timer.tick();
        }
        assert!(!timer.is_on());
    }
}
