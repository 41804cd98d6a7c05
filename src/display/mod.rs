//! Display module for splitflap-motion.
//!
//! Host-facing facade: one row scheduler plus the port that drives it.

mod builder;
mod driver;

pub use builder::SplitFlapDisplayBuilder;
pub use driver::{Pacing, PollStatus, SplitFlapDisplay};
