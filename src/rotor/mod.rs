//! Rotor module for splitflap-motion.
//!
//! Provides the tick-driven step scheduler, per-unit position tracking and
//! the shared acceleration clock.

mod clock;
mod phase;
mod scheduler;
mod state;
mod unit;

pub use clock::AccelerationClock;
pub use phase::Phase;
pub use scheduler::RotorScheduler;
pub use state::RowState;
pub use unit::Unit;
