//! Four-phase excitation position of a unit's motor.

/// Which coil pair is energized. Advancing walks the drum forward one step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Phase {
    /// Coils A and B.
    #[default]
    Ab,
    /// Coils B and C.
    Bc,
    /// Coils C and D.
    Cd,
    /// Coils D and A.
    Da,
}

impl Phase {
    /// All phases in forward order.
    pub const SEQUENCE: [Phase; 4] = [Phase::Ab, Phase::Bc, Phase::Cd, Phase::Da];

    /// The next phase in forward rotation.
    #[inline]
    pub fn next(self) -> Self {
        match self {
            Phase::Ab => Phase::Bc,
            Phase::Bc => Phase::Cd,
            Phase::Cd => Phase::Da,
            Phase::Da => Phase::Ab,
        }
    }

    /// Position in [`SEQUENCE`](Self::SEQUENCE).
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_four_steps_wrap() {
        let mut phase = Phase::default();
        for expected in Phase::SEQUENCE.iter().cycle().skip(1).take(8) {
            phase = phase.next();
            assert_eq!(phase, *expected);
        }
        assert_eq!(phase, Phase::Ab);
    }

    #[test]
    fn test_index_matches_sequence() {
        for (i, phase) in Phase::SEQUENCE.iter().enumerate() {
            assert_eq!(phase.index(), i);
        }
    }
}
