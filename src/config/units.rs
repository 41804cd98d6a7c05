//! Unit types for flap positions and step compensation.
//!
//! Keeps flap indices and the mechanical compensation ratio distinct from raw
//! integers so step arithmetic cannot silently mix them up.

use serde::Deserialize;

/// Position of a flap on the drum (0 = first letter, `num_flaps - 1` = space).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Deserialize)]
#[serde(transparent)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FlapIndex(pub u8);

impl FlapIndex {
    /// Create a new FlapIndex value.
    #[inline]
    pub const fn new(value: u8) -> Self {
        Self(value)
    }

    /// Get the raw value.
    #[inline]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// The space flap for a drum with `num_flaps` flaps.
    #[inline]
    pub const fn space(num_flaps: u8) -> Self {
        Self(num_flaps.saturating_sub(1))
    }

    /// Forward distance in flaps from `self` to `target` on a ring of `num_flaps`.
    ///
    /// Rotors only turn one way, so the result is always in `0..num_flaps`.
    #[inline]
    pub fn forward_distance(self, target: FlapIndex, num_flaps: u8) -> u32 {
        if num_flaps == 0 {
            return 0;
        }
        let n = num_flaps as u32;
        let current = self.0 as u32 % n;
        let target = target.0 as u32 % n;
        (target + n - current) % n
    }
}

/// Rational correction applied to every step plan.
///
/// Open-loop drums overshoot by a small, motor-specific amount per flap; the
/// plan is scaled by `numerator / denominator`, rounding toward zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CompensationRatio {
    /// Ratio numerator.
    pub numerator: u32,
    /// Ratio denominator.
    pub denominator: u32,
}

impl CompensationRatio {
    /// No correction.
    pub const IDENTITY: Self = Self::new(1, 1);

    /// Empirical correction for the 28BYJ-48 drums this crate was tuned on.
    pub const DEFAULT: Self = Self::new(319, 320);

    /// Create a new ratio.
    #[inline]
    pub const fn new(numerator: u32, denominator: u32) -> Self {
        Self {
            numerator,
            denominator,
        }
    }

    /// Check that `0 < numerator <= denominator`.
    #[inline]
    pub fn is_valid(self) -> bool {
        self.numerator > 0 && self.denominator > 0 && self.numerator <= self.denominator
    }

    /// Scale a step count by this ratio.
    #[inline]
    pub fn apply(self, steps: u32) -> u32 {
        if self.denominator == 0 {
            return steps;
        }
        let scaled = steps as u64 * self.numerator as u64 / self.denominator as u64;
        u32::try_from(scaled).unwrap_or(u32::MAX)
    }
}

impl Default for CompensationRatio {
    fn default() -> Self {
        Self::DEFAULT
    }
}
