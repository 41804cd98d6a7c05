//! Shared acceleration clock.

/// Row-wide pacing: one clock for every unit in a scheduler.
///
/// Each cycle starts with `initial` delay ticks between steps. Every step
/// shortens the ramp by one until steps happen on every tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AccelerationClock {
    initial: u16,
    ramp: u16,
    delay: u16,
}

impl AccelerationClock {
    /// Create a clock at the start of its ramp.
    pub const fn new(initial: u16) -> Self {
        Self {
            initial,
            ramp: initial,
            delay: 0,
        }
    }

    /// Delay ticks at the start of a cycle.
    #[inline]
    pub fn initial(&self) -> u16 {
        self.initial
    }

    /// Current ramp value.
    #[inline]
    pub fn ramp(&self) -> u16 {
        self.ramp
    }

    /// Delay ticks left before the next step.
    #[inline]
    pub fn sub_tick_delay(&self) -> u16 {
        self.delay
    }

    /// Consume one delay tick. Returns `false` if a step is due.
    #[inline]
    pub(crate) fn take_delay(&mut self) -> bool {
        if self.delay > 0 {
            self.delay -= 1;
            true
        } else {
            false
        }
    }

    /// Shorten the ramp after a step and schedule the next delay.
    #[inline]
    pub(crate) fn accelerate(&mut self) {
        if self.ramp > 0 {
            self.ramp -= 1;
            self.delay = self.ramp;
        }
    }

    /// Back to the slow end of the ramp for the next cycle.
    #[inline]
    pub(crate) fn reset(&mut self) {
        self.ramp = self.initial;
        self.delay = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ramp_shortens_each_step() {
        let mut clock = AccelerationClock::new(3);
        let mut gaps = [0u16; 5];

        for gap in gaps.iter_mut() {
            clock.accelerate();
            while clock.take_delay() {
                *gap += 1;
            }
        }

        assert_eq!(gaps, [2, 1, 0, 0, 0]);
        assert_eq!(clock.ramp(), 0);
    }

    #[test]
    fn test_reset() {
        let mut clock = AccelerationClock::new(4);
        clock.accelerate();
        assert_eq!(clock.sub_tick_delay(), 3);

        clock.reset();
        assert_eq!(clock.ramp(), 4);
        assert_eq!(clock.sub_tick_delay(), 0);
    }
}
