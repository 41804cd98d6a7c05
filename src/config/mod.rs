//! Configuration module for splitflap-motion.
//!
//! Provides types for loading and validating display configurations
//! from TOML files (with `std` feature) or pre-parsed data.

mod display;
mod mechanical;
pub mod units;
#[cfg(feature = "std")]
mod loader;
mod validation;

pub use display::{DisplayConfig, MechanicsConfig, RowConfig, TimingConfig};
pub use mechanical::FlapMechanics;
pub use validation::{validate_config, MIN_FLAPS};

#[cfg(feature = "std")]
pub use loader::{load_config, parse_config};

// Re-export unit types at config level
pub use units::{CompensationRatio, FlapIndex};
