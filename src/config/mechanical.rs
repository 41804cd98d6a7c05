//! Runtime mechanics derived from display configuration.

use crate::error::Result;

use super::display::DisplayConfig;
use super::units::{CompensationRatio, FlapIndex};
use super::validation::validate_drum;

/// Derived parameters shared by the flap encoder and the rotor scheduler.
///
/// Computed once at initialization; the scheduler never reads the raw config.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FlapMechanics {
    /// Flaps per drum.
    pub num_flaps: u8,

    /// Motor steps per flap.
    pub gear_ratio: u32,

    /// Step ticks a unit stays energized after its movement ends.
    pub brake_steps: u16,

    /// Inter-step delay, in ticks, at the start of each cycle.
    pub initial_accel: u16,

    /// Overshoot correction applied to every step plan.
    pub compensation: CompensationRatio,
}

impl FlapMechanics {
    /// Compute mechanics from display configuration.
    ///
    /// Expects a validated config; an out-of-range flap count saturates at 255.
    pub fn from_config(config: &DisplayConfig) -> Self {
        let mechanics = &config.mechanics;
        Self {
            num_flaps: u8::try_from(mechanics.num_flaps).unwrap_or(u8::MAX),
            gear_ratio: mechanics.gear_ratio,
            brake_steps: mechanics.brake_steps,
            initial_accel: config.timing.initial_accel,
            compensation: mechanics.compensation,
        }
    }

    /// Same mechanics with a different compensation ratio.
    pub fn with_compensation(mut self, compensation: CompensationRatio) -> Self {
        self.compensation = compensation;
        self
    }

    /// The space flap on this drum.
    #[inline]
    pub fn space(&self) -> FlapIndex {
        FlapIndex::space(self.num_flaps)
    }

    /// Check the drum geometry with the same rules as
    /// [`validate_config`](super::validate_config).
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidFlapCount` if the drum cannot hold the
    /// alphabet plus space, `InvalidGearRatio` for a zero gear ratio and
    /// `InvalidCompensation` for an unusable ratio.
    pub fn validate(&self) -> Result<()> {
        validate_drum(self.num_flaps as u16, self.gear_ratio, self.compensation)
    }
}

impl Default for FlapMechanics {
    fn default() -> Self {
        Self {
            num_flaps: 32,
            gear_ratio: 64,
            brake_steps: 10,
            initial_accel: 10,
            compensation: CompensationRatio::DEFAULT,
        }
    }
}
