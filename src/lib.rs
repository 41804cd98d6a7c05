//! # splitflap-motion
//!
//! Non-blocking, open-loop stepper scheduler for rows of split-flap display
//! units, with embedded-hal 1.0 output ports.
//!
//! ## Features
//!
//! - **Poll-driven**: `tick()` never sleeps; the host decides when to call again
//! - **Open-loop**: flap positions are dead-reckoned from a manual alignment
//! - **Shared acceleration ramp**: every cycle starts slow and speeds up
//! - **Brake hold**: finished drums stay energized briefly, then release
//! - **Configuration-driven**: mechanics and pacing from TOML files
//! - **no_std compatible**: no heap, fixed-width rows via const generics
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use splitflap_motion::{SplitFlapDisplay, ShiftRegisterPort};
//!
//! let config = splitflap_motion::load_config("display.toml")?;
//!
//! let mut display = SplitFlapDisplay::<_, 10>::builder()
//!     .from_config(&config)?
//!     .port(ShiftRegisterPort::new(data_pin, clock_pin, latch_pin))
//!     .build()?;
//!
//! display.submit("HELLO")?;
//! loop {
//!     let status = display.poll()?;
//!     delay.delay_us(status.next_delay_us);
//! }
//! ```
//!
//! ## Feature Flags
//!
//! - `std` (default): Enables file I/O and TOML parsing
//! - `defmt`: Enables defmt logging for embedded targets

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]
// Allow large error types - necessary for no_std with heapless strings
#![allow(clippy::result_large_err)]

// Core modules
pub mod config;
pub mod display;
pub mod error;
pub mod flap;
pub mod message;
pub mod output;
pub mod rotor;

// Re-exports for ergonomic API
pub use config::{validate_config, DisplayConfig, FlapMechanics};
pub use display::{Pacing, PollStatus, SplitFlapDisplay, SplitFlapDisplayBuilder};
pub use error::{Error, Result};
pub use flap::FlapEncoder;
pub use message::{MessageQueue, MessageSource, Playlist};
pub use output::{ActuationPort, ActuationSignal, CoilPins, ShiftRegisterPort};
pub use rotor::{Phase, RotorScheduler, RowState, Unit};

// Configuration loading (std only)
#[cfg(feature = "std")]
pub use config::{load_config, parse_config};

// Unit types
pub use config::units::{CompensationRatio, FlapIndex};
