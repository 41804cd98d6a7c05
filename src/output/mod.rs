//! Output module for splitflap-motion.
//!
//! Turns unit phase state into coil signals, packs them for serial
//! transport, and drives them onto hardware through embedded-hal pins.

mod frame;
mod port;
mod signal;

pub use frame::{pack, unit_nibble};
pub use port::{ActuationPort, CoilPins, ShiftRegisterPort};
pub use signal::{encode, encode_row, ActuationSignal, EXCITATION};
