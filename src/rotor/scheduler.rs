//! Tick-driven rotor step scheduler.
//!
//! Owns every unit of one display row plus the row's acceleration clock and
//! pending message. The host calls [`RotorScheduler::tick`] once per poll;
//! the scheduler never sleeps, so all waiting happens between ticks in the
//! caller.

use crate::config::units::FlapIndex;
use crate::config::{validate_config, DisplayConfig, FlapMechanics};
use crate::error::{ConfigError, Error, Result};
use crate::flap::FlapEncoder;
use crate::message::MessageQueue;

use super::clock::AccelerationClock;
use super::state::RowState;
use super::unit::Unit;

/// Open-loop step scheduler for a row of `N` split-flap units.
///
/// # Example
///
/// ```rust
/// use splitflap_motion::{FlapMechanics, RotorScheduler};
///
/// let mut row: RotorScheduler<4> = RotorScheduler::new(FlapMechanics::default())?;
/// row.submit("HI")?;
///
/// while row.tick().is_rolling() || row.completed_cycles() == 0 {}
/// assert_eq!(row.settled_text().as_str(), "HI  ");
/// # Ok::<(), splitflap_motion::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct RotorScheduler<const N: usize> {
    /// Per-unit dead-reckoning state.
    units: [Unit; N],

    /// Shared inter-step pacing.
    clock: AccelerationClock,

    /// Character and step-plan mapping.
    encoder: FlapEncoder,

    /// Hold ticks armed when a unit finishes moving.
    brake_steps: u16,

    /// Next message, consumed only between cycles.
    pending: MessageQueue<N>,

    /// State after the most recent tick.
    state: RowState,

    /// Cycles that rolled and then parked.
    completed_cycles: u32,
}

impl<const N: usize> RotorScheduler<N> {
    /// Create a parked row with every unit on the space flap.
    ///
    /// # Errors
    ///
    /// Returns a config error if `mechanics` fails
    /// [`FlapMechanics::validate`].
    pub fn new(mechanics: FlapMechanics) -> Result<Self> {
        mechanics.validate()?;

        let space = mechanics.space();
        Ok(Self {
            units: core::array::from_fn(|i| Unit::new(i, space)),
            clock: AccelerationClock::new(mechanics.initial_accel),
            encoder: FlapEncoder::from_mechanics(&mechanics),
            brake_steps: mechanics.brake_steps,
            pending: MessageQueue::new(),
            state: RowState::Idle,
            completed_cycles: 0,
        })
    }

    /// Create a scheduler from a display configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or names a different
    /// number of units than `N`.
    pub fn from_config(config: &DisplayConfig) -> Result<Self> {
        validate_config(config)?;

        if config.display.units != N {
            return Err(Error::Config(ConfigError::UnitCountMismatch {
                configured: config.display.units,
                capacity: N,
            }));
        }

        Self::new(FlapMechanics::from_config(config))
    }

    /// Advance the row by one poll.
    ///
    /// While the acceleration clock has delay ticks left, only the delay is
    /// consumed. Otherwise every energized unit steps (or counts down its
    /// brake hold). Once the whole row has parked, the ramp resets and the
    /// pending message, if any, is loaded as the next cycle.
    pub fn tick(&mut self) -> RowState {
        if self.clock.take_delay() {
            self.state = RowState::Rolling;
            return self.state;
        }

        let was_rolling = self.state == RowState::Rolling;
        let mut rolling = false;

        for unit in self.units.iter_mut().filter(|u| u.is_energized()) {
            unit.advance(self.brake_steps);
            rolling |= unit.is_energized();
        }

        if rolling {
            self.clock.accelerate();
            self.state = RowState::Rolling;
            return self.state;
        }

        self.clock.reset();

        if was_rolling {
            self.completed_cycles = self.completed_cycles.wrapping_add(1);
            #[cfg(feature = "defmt")]
            defmt::debug!("cycle {} complete", self.completed_cycles);
        }

        if !self.pending.is_empty() {
            self.load_cycle();
        }

        self.state = if self.units.iter().any(Unit::is_energized) {
            RowState::Rolling
        } else if was_rolling {
            RowState::Completing
        } else {
            RowState::Idle
        };
        self.state
    }

    /// Consume the pending message into per-unit step plans.
    fn load_cycle(&mut self) {
        let space = self.encoder.space();

        for unit in self.units.iter_mut() {
            let target = self
                .pending
                .pop()
                .map(|ch| self.encoder.target(ch))
                .unwrap_or(space);
            let steps = self.encoder.step_plan(unit.settled_flap(), target);
            unit.load(target, steps);
        }

        #[cfg(feature = "defmt")]
        defmt::debug!(
            "cycle loaded: {} of {} units moving",
            self.units.iter().filter(|u| u.is_energized()).count(),
            N
        );
    }

    /// Queue the next message, truncated to `N` characters.
    ///
    /// # Errors
    ///
    /// Returns `MessageError::Pending` if the previous message has not been
    /// loaded yet.
    pub fn submit<T: AsRef<[u8]>>(&mut self, text: T) -> Result<usize> {
        self.pending.load(text)
    }

    /// The pending message.
    #[inline]
    pub fn pending(&self) -> &MessageQueue<N> {
        &self.pending
    }

    /// State after the most recent tick.
    #[inline]
    pub fn state(&self) -> RowState {
        self.state
    }

    /// Whether any unit still has motion or brake hold pending.
    #[inline]
    pub fn is_rolling(&self) -> bool {
        self.state.is_rolling()
    }

    /// All units, in row order.
    #[inline]
    pub fn units(&self) -> &[Unit; N] {
        &self.units
    }

    /// One unit, if `index < N`.
    #[inline]
    pub fn unit(&self, index: usize) -> Option<&Unit> {
        self.units.get(index)
    }

    /// The shared acceleration clock.
    #[inline]
    pub fn clock(&self) -> &AccelerationClock {
        &self.clock
    }

    /// The character and step-plan mapping.
    #[inline]
    pub fn encoder(&self) -> &FlapEncoder {
        &self.encoder
    }

    /// Mutable encoder access, for tuning compensation on a live row.
    ///
    /// Changes apply from the next loaded cycle.
    #[inline]
    pub fn encoder_mut(&mut self) -> &mut FlapEncoder {
        &mut self.encoder
    }

    /// Number of cycles that rolled and then parked.
    #[inline]
    pub fn completed_cycles(&self) -> u32 {
        self.completed_cycles
    }

    /// Settled flap of every unit.
    pub fn settled_flaps(&self) -> [FlapIndex; N] {
        core::array::from_fn(|i| self.units[i].settled_flap())
    }

    /// Text the row shows once the current cycle parks.
    ///
    /// Flaps with no glyph in this alphabet read as `'?'`.
    pub fn settled_text(&self) -> heapless::String<N> {
        let mut text = heapless::String::new();
        for unit in self.units.iter() {
            let ch = self.encoder.character(unit.settled_flap()).unwrap_or(b'?');
            // Cannot fail: one ASCII byte per unit
            let _ = text.push(ch as char);
        }
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::units::CompensationRatio;
    use crate::rotor::Phase;

    fn exact() -> FlapMechanics {
        FlapMechanics::default().with_compensation(CompensationRatio::IDENTITY)
    }

    fn no_ramp() -> FlapMechanics {
        FlapMechanics {
            initial_accel: 0,
            ..exact()
        }
    }

    fn remaining<const N: usize>(row: &RotorScheduler<N>) -> [u32; N] {
        core::array::from_fn(|i| row.units()[i].remaining_steps())
    }

    fn run_to_idle<const N: usize>(row: &mut RotorScheduler<N>) -> usize {
        let mut ticks = 0;
        while row.tick().is_rolling() {
            ticks += 1;
        }
        ticks
    }

    #[test]
    fn test_starts_idle_on_space() {
        let row: RotorScheduler<3> = RotorScheduler::new(exact()).unwrap();
        assert_eq!(row.state(), RowState::Idle);
        assert_eq!(row.settled_text().as_str(), "   ");
        assert!(row.units().iter().all(|u| !u.is_energized()));
    }

    #[test]
    fn test_idle_tick_without_message() {
        let mut row: RotorScheduler<2> = RotorScheduler::new(exact()).unwrap();
        assert_eq!(row.tick(), RowState::Idle);
        assert_eq!(row.clock().sub_tick_delay(), 0);
        assert_eq!(row.clock().ramp(), 10);
    }

    #[test]
    fn test_hello_step_plans() {
        let mut row: RotorScheduler<10> = RotorScheduler::new(exact()).unwrap();
        row.submit("HELLO ").unwrap();

        assert_eq!(row.tick(), RowState::Rolling);
        assert_eq!(
            remaining(&row),
            [512, 320, 768, 768, 960, 0, 0, 0, 0, 0]
        );
        assert!(row.pending().is_empty());
        assert_eq!(row.settled_text().as_str(), "HELLO     ");
    }

    #[test]
    fn test_hello_completes() {
        let mut row: RotorScheduler<10> = RotorScheduler::new(exact()).unwrap();
        row.submit("HELLO ").unwrap();
        row.tick();

        run_to_idle(&mut row);

        assert_eq!(row.state(), RowState::Completing);
        assert_eq!(row.completed_cycles(), 1);
        let flaps: [u8; 10] = core::array::from_fn(|i| row.settled_flaps()[i].value());
        assert_eq!(flaps, [7, 4, 11, 11, 14, 31, 31, 31, 31, 31]);
        assert!(row.units().iter().all(|u| !u.is_energized()));

        assert_eq!(row.tick(), RowState::Idle);
    }

    #[test]
    fn test_short_unit_finishes_first() {
        let mut row: RotorScheduler<2> = RotorScheduler::new(no_ramp()).unwrap();
        // 'A' is one flap past space, 'B' two
        row.submit("AB").unwrap();
        row.tick();
        assert_eq!(remaining(&row), [64, 128]);

        for _ in 0..64 {
            row.tick();
        }
        assert_eq!(remaining(&row), [0, 64]);
        assert_eq!(row.units()[0].brake_ticks(), 10);

        for _ in 0..10 {
            row.tick();
        }
        assert!(!row.units()[0].is_energized());
        assert!(row.units()[1].is_energized());
        assert!(row.is_rolling());
    }

    #[test]
    fn test_identical_targets_never_roll() {
        let mut row: RotorScheduler<3> = RotorScheduler::new(exact()).unwrap();
        row.submit("   ").unwrap();

        assert_eq!(row.tick(), RowState::Idle);
        assert_eq!(remaining(&row), [0, 0, 0]);
        assert_eq!(row.tick(), RowState::Idle);
        assert_eq!(row.completed_cycles(), 0);
    }

    #[test]
    fn test_delay_tick_does_not_step() {
        let mut row: RotorScheduler<1> = RotorScheduler::new(exact()).unwrap();
        row.submit("Z").unwrap();
        row.tick();

        // First step tick, then the ramp schedules initial - 1 delay ticks
        row.tick();
        assert_eq!(row.clock().sub_tick_delay(), 9);
        let phase = row.units()[0].phase();
        let steps = row.units()[0].remaining_steps();

        assert_eq!(row.tick(), RowState::Rolling);
        assert_eq!(row.clock().sub_tick_delay(), 8);
        assert_eq!(row.units()[0].phase(), phase);
        assert_eq!(row.units()[0].remaining_steps(), steps);
    }

    #[test]
    fn test_ramp_accelerates_to_every_tick() {
        let mut row: RotorScheduler<1> = RotorScheduler::new(FlapMechanics {
            initial_accel: 3,
            ..exact()
        })
        .unwrap();
        row.submit("Z").unwrap();
        row.tick();

        let mut step_ticks = heapless::Vec::<usize, 8>::new();
        for tick in 0..10 {
            let before = row.units()[0].remaining_steps();
            row.tick();
            if row.units()[0].remaining_steps() < before {
                let _ = step_ticks.push(tick);
            }
        }

        // Gaps of 2, 1, then none
        assert_eq!(&step_ticks[..], &[0, 3, 5, 6, 7, 8, 9]);
    }

    #[test]
    fn test_phase_advances_once_per_step() {
        let mut row: RotorScheduler<1> = RotorScheduler::new(no_ramp()).unwrap();
        row.submit("A").unwrap();
        row.tick();

        let mut expected = Phase::default();
        for _ in 0..64 {
            row.tick();
            expected = expected.next();
            assert_eq!(row.units()[0].phase(), expected);
        }
        // 64 steps is a whole number of 4-phase cycles
        assert_eq!(expected, Phase::Ab);
    }

    #[test]
    fn test_next_cycle_starts_from_settled() {
        let mut row: RotorScheduler<1> = RotorScheduler::new(no_ramp()).unwrap();
        row.submit("C").unwrap();
        row.tick();
        run_to_idle(&mut row);

        row.submit("A").unwrap();
        row.tick();
        // C (2) -> A (0) wraps forward 30 flaps
        assert_eq!(row.units()[0].remaining_steps(), 30 * 64);
    }

    #[test]
    fn test_back_to_back_cycles_load_on_completion() {
        let mut row: RotorScheduler<1> = RotorScheduler::new(no_ramp()).unwrap();
        row.submit("A").unwrap();
        row.tick();
        // Loading emptied the queue, so the next message can wait there
        row.submit("B").unwrap();
        assert_eq!(row.submit("C"), Err(Error::Message(crate::error::MessageError::Pending)));

        // 64 steps + 10 brake ticks; the last brake tick parks the row
        for _ in 0..73 {
            assert_eq!(row.tick(), RowState::Rolling);
            assert_eq!(row.settled_text().as_str(), "A");
        }

        // Parking and loading "B" happen in the same tick
        assert_eq!(row.tick(), RowState::Rolling);
        assert_eq!(row.completed_cycles(), 1);
        assert_eq!(row.units()[0].remaining_steps(), 64);
        assert_eq!(row.settled_text().as_str(), "B");
    }

    #[test]
    fn test_completing_without_pending_message() {
        let mut row: RotorScheduler<1> = RotorScheduler::new(no_ramp()).unwrap();
        row.submit("A").unwrap();
        row.tick();

        for _ in 0..73 {
            row.tick();
        }
        assert_eq!(row.tick(), RowState::Completing);
        assert_eq!(row.tick(), RowState::Idle);
        assert_eq!(row.completed_cycles(), 1);
    }

    #[test]
    fn test_from_config_width_mismatch() {
        let config = DisplayConfig::with_units(6);
        let result = RotorScheduler::<4>::from_config(&config);
        assert!(matches!(
            result,
            Err(Error::Config(ConfigError::UnitCountMismatch {
                configured: 6,
                capacity: 4
            }))
        ));
        assert!(RotorScheduler::<6>::from_config(&config).is_ok());
    }

    #[test]
    fn test_rejects_invalid_mechanics() {
        let small = FlapMechanics {
            num_flaps: 20,
            ..exact()
        };
        assert!(matches!(
            RotorScheduler::<1>::new(small),
            Err(Error::Config(ConfigError::InvalidFlapCount(20)))
        ));

        let empty = FlapMechanics {
            num_flaps: 0,
            ..exact()
        };
        assert!(RotorScheduler::<1>::new(empty).is_err());
    }

    #[test]
    fn test_retuned_compensation_applies_from_next_cycle() {
        let mut row: RotorScheduler<1> = RotorScheduler::new(no_ramp()).unwrap();
        row.submit("H").unwrap();
        row.tick();
        row.encoder_mut()
            .set_compensation(CompensationRatio::new(1, 2))
            .unwrap();
        assert_eq!(row.units()[0].remaining_steps(), 512);

        run_to_idle(&mut row);
        row.submit("P").unwrap();
        row.tick();
        // H (7) -> P (15) is 8 flaps, halved
        assert_eq!(row.units()[0].remaining_steps(), 256);
    }

    #[test]
    fn test_compensation_applies_to_plan() {
        let mut row: RotorScheduler<1> = RotorScheduler::new(FlapMechanics::default()).unwrap();
        row.submit("H").unwrap();
        row.tick();
        assert_eq!(row.units()[0].remaining_steps(), 510);
    }
}
