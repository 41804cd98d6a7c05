//! Per-unit actuation signals.

use crate::rotor::{Phase, Unit};

/// Coil pattern for each phase; bit 0 = coil A, bit 3 = coil D.
///
/// Two adjacent coils are always on (full-step, two-phase-on drive).
pub const EXCITATION: [u8; 4] = [0b0011, 0b0110, 0b1100, 0b1001];

/// What one unit's driver should do this tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ActuationSignal {
    /// Whether the coils are powered at all.
    pub energized: bool,
    /// Coil pattern, low four bits.
    pub pattern: u8,
}

impl ActuationSignal {
    /// All coils off.
    pub const OFF: Self = Self {
        energized: false,
        pattern: 0,
    };

    /// Powered coils for `phase`.
    #[inline]
    pub fn excite(phase: Phase) -> Self {
        Self {
            energized: true,
            pattern: EXCITATION[phase.index()],
        }
    }

    /// The nibble actually driven onto the coils.
    #[inline]
    pub fn nibble(self) -> u8 {
        if self.energized {
            self.pattern & 0x0F
        } else {
            0
        }
    }
}

/// Signal for one unit: coils off once parked, otherwise its phase pattern.
///
/// Parked motors are released so they do not sit on holding current.
pub fn encode(unit: &Unit) -> ActuationSignal {
    if unit.is_energized() {
        ActuationSignal::excite(unit.phase())
    } else {
        ActuationSignal::OFF
    }
}

/// Signals for a whole row, in unit order.
pub fn encode_row<const N: usize>(units: &[Unit; N]) -> [ActuationSignal; N] {
    core::array::from_fn(|i| encode(&units[i]))
}
