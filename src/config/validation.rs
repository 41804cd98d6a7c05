//! Configuration validation.

use crate::error::{ConfigError, Error, Result};

use super::units::CompensationRatio;
use super::DisplayConfig;

/// Smallest drum that fits 'A'..='Z' plus the space flap.
pub const MIN_FLAPS: u16 = 27;

/// Validate a display configuration.
///
/// Checks:
/// - The row has at least one unit
/// - The drum holds the alphabet plus space and fits a `u8` index
/// - Gear ratio and compensation ratio are usable
/// - Pacing delays are non-zero
pub fn validate_config(config: &DisplayConfig) -> Result<()> {
    if config.display.units == 0 {
        return Err(Error::Config(ConfigError::NoUnits));
    }

    let mechanics = &config.mechanics;
    validate_drum(
        mechanics.num_flaps,
        mechanics.gear_ratio,
        mechanics.compensation,
    )?;

    if config.timing.rolling_delay_us == 0 {
        return Err(Error::Config(ConfigError::InvalidDelay("rolling_delay_us")));
    }

    if config.timing.idle_delay_ms == 0 {
        return Err(Error::Config(ConfigError::InvalidDelay("idle_delay_ms")));
    }

    Ok(())
}

/// Drum and gearing checks shared by config validation and
/// [`FlapMechanics::validate`](super::FlapMechanics::validate).
pub(crate) fn validate_drum(
    num_flaps: u16,
    gear_ratio: u32,
    compensation: CompensationRatio,
) -> Result<()> {
    if !(MIN_FLAPS..=u8::MAX as u16).contains(&num_flaps) {
        return Err(Error::Config(ConfigError::InvalidFlapCount(num_flaps)));
    }

    if gear_ratio == 0 {
        return Err(Error::Config(ConfigError::InvalidGearRatio(gear_ratio)));
    }

    if !compensation.is_valid() {
        return Err(Error::Config(ConfigError::InvalidCompensation {
            numerator: compensation.numerator,
            denominator: compensation.denominator,
        }));
    }

    Ok(())
}
