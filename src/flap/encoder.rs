//! Character to flap mapping and forward step planning.

use crate::config::units::{CompensationRatio, FlapIndex};
use crate::config::FlapMechanics;
use crate::error::{ConfigError, Error, Result};

/// Number of letter flaps at the front of the drum ('A'..='Z').
pub const LETTER_FLAPS: u8 = 26;

/// Maps characters to flaps and flap pairs to step counts.
///
/// Pure: holds only drum geometry and the compensation ratio.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlapEncoder {
    num_flaps: u8,
    gear_ratio: u32,
    compensation: CompensationRatio,
}

impl FlapEncoder {
    /// Create an encoder for the given drum.
    ///
    /// # Errors
    ///
    /// Returns a config error if the drum is too small for the alphabet plus
    /// space, the gear ratio is zero or the compensation ratio is unusable.
    pub fn new(num_flaps: u8, gear_ratio: u32, compensation: CompensationRatio) -> Result<Self> {
        let mechanics = FlapMechanics {
            num_flaps,
            gear_ratio,
            compensation,
            ..FlapMechanics::default()
        };
        mechanics.validate()?;
        Ok(Self::from_mechanics(&mechanics))
    }

    /// Encoder for mechanics that already passed validation.
    pub(crate) fn from_mechanics(mechanics: &FlapMechanics) -> Self {
        Self {
            num_flaps: mechanics.num_flaps,
            gear_ratio: mechanics.gear_ratio,
            compensation: mechanics.compensation,
        }
    }

    /// Flaps per drum.
    #[inline]
    pub fn num_flaps(&self) -> u8 {
        self.num_flaps
    }

    /// The compensation ratio applied by [`step_plan`](Self::step_plan).
    #[inline]
    pub fn compensation(&self) -> CompensationRatio {
        self.compensation
    }

    /// Change the compensation ratio.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidCompensation` and keeps the current ratio
    /// unless `0 < numerator <= denominator`.
    pub fn set_compensation(&mut self, compensation: CompensationRatio) -> Result<()> {
        if !compensation.is_valid() {
            return Err(Error::Config(ConfigError::InvalidCompensation {
                numerator: compensation.numerator,
                denominator: compensation.denominator,
            }));
        }
        self.compensation = compensation;
        Ok(())
    }

    /// The space flap, used for every byte outside 'A'..='Z'.
    #[inline]
    pub fn space(&self) -> FlapIndex {
        FlapIndex::space(self.num_flaps)
    }

    /// Map a character byte to its flap.
    ///
    /// Total: anything that is not an uppercase ASCII letter lands on the
    /// space flap, so the result is always inside `0..num_flaps`.
    pub fn target(&self, ch: u8) -> FlapIndex {
        match ch {
            b'A'..=b'Z' if ch - b'A' < self.num_flaps => FlapIndex(ch - b'A'),
            _ => self.space(),
        }
    }

    /// Reverse lookup: the character printed on a flap.
    ///
    /// Returns `None` for flaps between 'Z' and space and for indices past
    /// the end of the drum.
    pub fn character(&self, flap: FlapIndex) -> Option<u8> {
        if flap == self.space() {
            Some(b' ')
        } else if flap.0 < LETTER_FLAPS && flap.0 < self.num_flaps {
            Some(b'A' + flap.0)
        } else {
            None
        }
    }

    /// Motor steps to turn forward from `current` to `target`.
    ///
    /// `forward_distance * gear_ratio`, scaled by the compensation ratio.
    pub fn step_plan(&self, current: FlapIndex, target: FlapIndex) -> u32 {
        let flaps = current.forward_distance(target, self.num_flaps);
        self.compensation
            .apply(flaps.saturating_mul(self.gear_ratio))
    }
}

impl Default for FlapEncoder {
    fn default() -> Self {
        Self::from_mechanics(&FlapMechanics::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn exact() -> FlapEncoder {
        FlapEncoder::new(32, 64, CompensationRatio::IDENTITY).unwrap()
    }

    #[test]
    fn test_letters_map_in_order() {
        let encoder = exact();
        assert_eq!(encoder.target(b'A'), FlapIndex(0));
        assert_eq!(encoder.target(b'H'), FlapIndex(7));
        assert_eq!(encoder.target(b'Z'), FlapIndex(25));
    }

    #[test]
    fn test_everything_else_is_space() {
        let encoder = exact();
        for ch in [b' ', 0u8, b'a', b'z', b'0', b'@', b'[', 0xFF] {
            assert_eq!(encoder.target(ch), FlapIndex(31), "byte {:#04x}", ch);
        }
    }

    #[test]
    fn test_reverse_lookup() {
        let encoder = exact();
        assert_eq!(encoder.character(FlapIndex(0)), Some(b'A'));
        assert_eq!(encoder.character(FlapIndex(31)), Some(b' '));
        assert_eq!(encoder.character(FlapIndex(26)), None);
        assert_eq!(encoder.character(FlapIndex(40)), None);
    }

    #[test]
    fn test_step_plan_exact() {
        let encoder = exact();
        let space = encoder.space();
        assert_eq!(encoder.step_plan(space, encoder.target(b'H')), 512);
        assert_eq!(encoder.step_plan(space, encoder.target(b'O')), 960);
        assert_eq!(encoder.step_plan(space, space), 0);
        // Going backwards one flap means almost a full revolution
        assert_eq!(encoder.step_plan(FlapIndex(1), FlapIndex(0)), 31 * 64);
    }

    #[test]
    fn test_step_plan_compensated() {
        let encoder = FlapEncoder::default();
        // 8 flaps * 64 = 512, * 319/320 = 510.4
        assert_eq!(encoder.step_plan(FlapIndex(31), FlapIndex(7)), 510);
    }

    #[test]
    fn test_rejects_drum_without_room_for_space() {
        // 'T' would share flap 19 with space on a 20-flap drum
        assert_eq!(
            FlapEncoder::new(20, 64, CompensationRatio::IDENTITY),
            Err(Error::Config(ConfigError::InvalidFlapCount(20)))
        );
        assert!(FlapEncoder::new(0, 64, CompensationRatio::IDENTITY).is_err());
        assert!(FlapEncoder::new(27, 64, CompensationRatio::IDENTITY).is_ok());
    }

    #[test]
    fn test_set_compensation() {
        let mut encoder = exact();
        encoder.set_compensation(CompensationRatio::new(63, 64)).unwrap();
        assert_eq!(encoder.step_plan(FlapIndex(31), FlapIndex(0)), 63);

        assert!(encoder.set_compensation(CompensationRatio::new(1, 0)).is_err());
        assert_eq!(encoder.compensation(), CompensationRatio::new(63, 64));
    }
}
