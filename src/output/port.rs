//! Hardware actuation ports.
//!
//! The scheduler only decides coil patterns; a port puts them on the wire.
//! Two embedded-hal 1.0 adapters are provided: direct GPIO per coil, and a
//! bit-banged chain of 8-bit shift registers carrying two units per byte.

use embedded_hal::digital::{OutputPin, PinState};

use crate::error::{PortError, Result};

use super::frame::pack;
use super::signal::ActuationSignal;

/// Sink for one row's actuation signals.
pub trait ActuationPort {
    /// Drive every unit's coils. `signals` is in unit order.
    ///
    /// # Errors
    ///
    /// Returns a `PortError` if the transport fails or the row width differs
    /// from what the port drives.
    fn apply(&mut self, signals: &[ActuationSignal]) -> Result<()>;
}

fn check_width(expected: usize, actual: usize) -> Result<()> {
    if expected == actual {
        Ok(())
    } else {
        Err(PortError::WidthMismatch { expected, actual }.into())
    }
}

/// Four GPIO pins per unit, coil A first.
pub struct CoilPins<P, const N: usize>
where
    P: OutputPin,
{
    coils: [[P; 4]; N],
}

impl<P, const N: usize> CoilPins<P, N>
where
    P: OutputPin,
{
    /// Wrap the coil pins of `N` units.
    pub fn new(coils: [[P; 4]; N]) -> Self {
        Self { coils }
    }

    /// Give the pins back.
    pub fn release(self) -> [[P; 4]; N] {
        self.coils
    }
}

impl<P, const N: usize> ActuationPort for CoilPins<P, N>
where
    P: OutputPin,
{
    fn apply(&mut self, signals: &[ActuationSignal]) -> Result<()> {
        check_width(N, signals.len())?;

        for (pins, signal) in self.coils.iter_mut().zip(signals) {
            let nibble = signal.nibble();
            for (bit, pin) in pins.iter_mut().enumerate() {
                let state = PinState::from(nibble & (1 << bit) != 0);
                pin.set_state(state).map_err(|_| PortError::Pin)?;
            }
        }

        Ok(())
    }
}

/// Daisy-chained 8-bit shift registers (74HC595 style), two units each.
///
/// Bytes are shifted last-first, MSB first, so byte 0 ends up in the register
/// nearest the controller. LATCH is pulsed once the whole frame is in.
pub struct ShiftRegisterPort<DATA, CLOCK, LATCH, const N: usize>
where
    DATA: OutputPin,
    CLOCK: OutputPin,
    LATCH: OutputPin,
{
    data: DATA,
    clock: CLOCK,
    latch: LATCH,
}

impl<DATA, CLOCK, LATCH, const N: usize> ShiftRegisterPort<DATA, CLOCK, LATCH, N>
where
    DATA: OutputPin,
    CLOCK: OutputPin,
    LATCH: OutputPin,
{
    /// Wrap the serial, shift-clock and storage-latch pins.
    pub fn new(data: DATA, clock: CLOCK, latch: LATCH) -> Self {
        Self { data, clock, latch }
    }

    /// Give the pins back.
    pub fn release(self) -> (DATA, CLOCK, LATCH) {
        (self.data, self.clock, self.latch)
    }

    fn shift_byte(&mut self, byte: u8) -> Result<()> {
        for bit in (0..8).rev() {
            self.data
                .set_state(PinState::from(byte & (1 << bit) != 0))
                .map_err(|_| PortError::Pin)?;
            self.clock.set_high().map_err(|_| PortError::Pin)?;
            self.clock.set_low().map_err(|_| PortError::Pin)?;
        }
        Ok(())
    }
}

impl<DATA, CLOCK, LATCH, const N: usize> ActuationPort for ShiftRegisterPort<DATA, CLOCK, LATCH, N>
where
    DATA: OutputPin,
    CLOCK: OutputPin,
    LATCH: OutputPin,
{
    fn apply(&mut self, signals: &[ActuationSignal]) -> Result<()> {
        let row: &[ActuationSignal; N] = signals.try_into().map_err(|_| PortError::WidthMismatch {
            expected: N,
            actual: signals.len(),
        })?;

        let frame = pack(row);
        for &byte in frame.iter().rev() {
            self.shift_byte(byte)?;
        }

        self.latch.set_high().map_err(|_| PortError::Pin)?;
        self.latch.set_low().map_err(|_| PortError::Pin)?;
        Ok(())
    }
}
