//! Display configuration - root configuration structure.

use serde::Deserialize;

use super::units::CompensationRatio;

/// Root configuration structure from TOML.
#[derive(Debug, Clone, Deserialize)]
pub struct DisplayConfig {
    /// Row layout.
    pub display: RowConfig,

    /// Drum and motor mechanics.
    #[serde(default)]
    pub mechanics: MechanicsConfig,

    /// Acceleration ramp and host pacing.
    #[serde(default)]
    pub timing: TimingConfig,
}

/// Row layout.
#[derive(Debug, Clone, Deserialize)]
pub struct RowConfig {
    /// Number of character units in the row.
    pub units: usize,
}

/// Drum and motor mechanics.
#[derive(Debug, Clone, Deserialize)]
pub struct MechanicsConfig {
    /// Flaps per drum; the last one is the space flap.
    #[serde(default = "default_num_flaps")]
    pub num_flaps: u16,

    /// Motor steps per flap.
    #[serde(default = "default_gear_ratio")]
    pub gear_ratio: u32,

    /// Step ticks a unit stays energized after its movement ends.
    #[serde(default = "default_brake_steps")]
    pub brake_steps: u16,

    /// Overshoot correction applied to every step plan.
    #[serde(default)]
    pub compensation: CompensationRatio,
}

/// Acceleration ramp and host pacing.
#[derive(Debug, Clone, Deserialize)]
pub struct TimingConfig {
    /// Inter-step delay, in ticks, at the start of each cycle.
    #[serde(default = "default_initial_accel")]
    pub initial_accel: u16,

    /// Host pause between polls while the row is rolling.
    #[serde(default = "default_rolling_delay_us")]
    pub rolling_delay_us: u32,

    /// Host pause between polls while the row is idle.
    #[serde(default = "default_idle_delay_ms")]
    pub idle_delay_ms: u32,
}

fn default_num_flaps() -> u16 {
    32
}

fn default_gear_ratio() -> u32 {
    64
}

fn default_brake_steps() -> u16 {
    10
}

fn default_initial_accel() -> u16 {
    10
}

fn default_rolling_delay_us() -> u32 {
    2_000
}

fn default_idle_delay_ms() -> u32 {
    4_000
}

impl DisplayConfig {
    /// Configuration for a row of `units` with default mechanics and timing.
    pub fn with_units(units: usize) -> Self {
        Self {
            display: RowConfig { units },
            mechanics: MechanicsConfig::default(),
            timing: TimingConfig::default(),
        }
    }
}

impl Default for MechanicsConfig {
    fn default() -> Self {
        Self {
            num_flaps: default_num_flaps(),
            gear_ratio: default_gear_ratio(),
            brake_steps: default_brake_steps(),
            compensation: CompensationRatio::default(),
        }
    }
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            initial_accel: default_initial_accel(),
            rolling_delay_us: default_rolling_delay_us(),
            idle_delay_ms: default_idle_delay_ms(),
        }
    }
}

impl TimingConfig {
    /// Idle pause in microseconds.
    pub fn idle_delay_us(&self) -> u32 {
        self.idle_delay_ms.saturating_mul(1_000)
    }
}
