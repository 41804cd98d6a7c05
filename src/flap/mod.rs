//! Flap module for splitflap-motion.
//!
//! Converts characters to flap positions and computes forward-only step plans.

mod encoder;

pub use encoder::{FlapEncoder, LETTER_FLAPS};
