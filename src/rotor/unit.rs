//! Per-unit dead-reckoning state.

use crate::config::units::FlapIndex;

use super::phase::Phase;

/// One character position: a drum, its motor, and where we believe it is.
///
/// There is no position sensor. `settled` is whatever flap the last loaded
/// cycle was aimed at, counted from the operator's manual alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Unit {
    index: usize,
    settled: FlapIndex,
    remaining_steps: u32,
    brake_ticks: u16,
    phase: Phase,
}

impl Unit {
    /// A parked unit resting on `settled`.
    pub(crate) fn new(index: usize, settled: FlapIndex) -> Self {
        Self {
            index,
            settled,
            remaining_steps: 0,
            brake_ticks: 0,
            phase: Phase::default(),
        }
    }

    /// Position in the row.
    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Flap targeted by the most recently loaded cycle.
    #[inline]
    pub fn settled_flap(&self) -> FlapIndex {
        self.settled
    }

    /// Motor steps still to execute in this cycle.
    #[inline]
    pub fn remaining_steps(&self) -> u32 {
        self.remaining_steps
    }

    /// Step ticks of brake hold left after the movement has ended.
    #[inline]
    pub fn brake_ticks(&self) -> u16 {
        self.brake_ticks
    }

    /// Current excitation phase.
    #[inline]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Whether the coils should be powered: moving or holding.
    #[inline]
    pub fn is_energized(&self) -> bool {
        self.remaining_steps > 0 || self.brake_ticks > 0
    }

    /// Start a new cycle towards `target`.
    pub(crate) fn load(&mut self, target: FlapIndex, steps: u32) {
        self.settled = target;
        self.remaining_steps = steps;
        self.brake_ticks = 0;
    }

    /// Run one step tick. Returns `true` if the phase advanced.
    ///
    /// The final step arms a hold of `brake_steps` ticks; the hold then
    /// counts down on later ticks without moving the rotor.
    pub(crate) fn advance(&mut self, brake_steps: u16) -> bool {
        if self.remaining_steps > 0 {
            self.phase = self.phase.next();
            self.remaining_steps -= 1;
            if self.remaining_steps == 0 {
                self.brake_ticks = brake_steps;
            }
            true
        } else {
            self.brake_ticks = self.brake_ticks.saturating_sub(1);
            false
        }
    }
}
