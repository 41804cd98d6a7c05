//! Row-wide scheduler state.

/// Where the row is in its rolling cycle after a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RowState {
    /// No unit energized; a pending message may be loaded.
    #[default]
    Idle,
    /// At least one unit is stepping or holding its brake.
    Rolling,
    /// The last energized unit parked during this tick.
    Completing,
}

impl RowState {
    /// Whether any unit still has motion or brake hold pending.
    #[inline]
    pub fn is_rolling(self) -> bool {
        self == RowState::Rolling
    }

    /// State name for display/debugging.
    pub fn name(self) -> &'static str {
        match self {
            RowState::Idle => "Idle",
            RowState::Rolling => "Rolling",
            RowState::Completing => "Completing",
        }
    }
}
