//! Split-flap row driver.
//!
//! Glues a [`RotorScheduler`] to an [`ActuationPort`] and tells the host how
//! long to wait before polling again.

use embedded_hal::delay::DelayNs;

use crate::config::TimingConfig;
use crate::error::Result;
use crate::message::MessageSource;
use crate::output::{encode_row, ActuationPort};
use crate::rotor::{RotorScheduler, RowState};

use super::builder::SplitFlapDisplayBuilder;

/// Host pause between polls, chosen from the row state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Pacing {
    /// Pause while rolling; bounds the motor step rate.
    pub rolling_delay_us: u32,
    /// Pause while idle; keeps settled text on show.
    pub idle_delay_us: u32,
}

impl Pacing {
    /// Derive pacing from timing configuration.
    pub fn from_config(timing: &TimingConfig) -> Self {
        Self {
            rolling_delay_us: timing.rolling_delay_us,
            idle_delay_us: timing.idle_delay_us(),
        }
    }

    /// Pause to apply after a tick that left the row in `state`.
    #[inline]
    pub fn delay_for(&self, state: RowState) -> u32 {
        match state {
            RowState::Rolling => self.rolling_delay_us,
            RowState::Idle | RowState::Completing => self.idle_delay_us,
        }
    }
}

impl Default for Pacing {
    fn default() -> Self {
        Self::from_config(&TimingConfig::default())
    }
}

/// Outcome of one poll.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PollStatus {
    /// Row state after the tick.
    pub state: RowState,
    /// How long the host should wait before the next poll.
    pub next_delay_us: u32,
}

/// A split-flap row wired to its hardware.
///
/// # Example
///
/// ```rust,ignore
/// use splitflap_motion::{SplitFlapDisplay, Playlist, load_config};
///
/// let config = load_config("display.toml")?;
/// let mut display = SplitFlapDisplay::<_, 10>::builder()
///     .from_config(&config)?
///     .port(shift_register)
///     .build()?;
///
/// let mut playlist = Playlist::new(&["HELLO", "WORLD"]);
/// loop {
///     let status = display.poll_source(&mut playlist)?;
///     delay.delay_us(status.next_delay_us);
/// }
/// ```
pub struct SplitFlapDisplay<PORT, const N: usize>
where
    PORT: ActuationPort,
{
    /// Step scheduler for the row.
    scheduler: RotorScheduler<N>,

    /// Hardware the coil signals go to.
    port: PORT,

    /// Host pause policy.
    pacing: Pacing,
}

impl<PORT, const N: usize> SplitFlapDisplay<PORT, N>
where
    PORT: ActuationPort,
{
    /// Start building a display.
    pub fn builder() -> SplitFlapDisplayBuilder<PORT, N> {
        SplitFlapDisplayBuilder::new()
    }

    pub(crate) fn new(scheduler: RotorScheduler<N>, port: PORT, pacing: Pacing) -> Self {
        Self {
            scheduler,
            port,
            pacing,
        }
    }

    /// Tick the scheduler once and push the resulting coil signals out.
    ///
    /// Never waits; the returned status says how long the host should.
    ///
    /// # Errors
    ///
    /// Returns the port's error if the signals could not be applied.
    pub fn poll(&mut self) -> Result<PollStatus> {
        let state = self.scheduler.tick();
        let signals = encode_row(self.scheduler.units());
        self.port.apply(&signals)?;

        Ok(PollStatus {
            state,
            next_delay_us: self.pacing.delay_for(state),
        })
    }

    /// Like [`poll`](Self::poll), but first pulls the next message from
    /// `source` if the row is idle and nothing is pending.
    ///
    /// # Errors
    ///
    /// Returns the port's error if the signals could not be applied.
    pub fn poll_source<S: MessageSource>(&mut self, source: &mut S) -> Result<PollStatus> {
        if !self.scheduler.is_rolling() && self.scheduler.pending().is_empty() {
            if let Some(message) = source.next_message() {
                self.scheduler.submit(message)?;
            }
        }
        self.poll()
    }

    /// Poll, then wait out the suggested pause on `delay`.
    ///
    /// A convenience for simple host loops; the scheduler itself never blocks.
    ///
    /// # Errors
    ///
    /// Returns the port's error if the signals could not be applied.
    pub fn poll_blocking<D: DelayNs>(&mut self, delay: &mut D) -> Result<PollStatus> {
        let status = self.poll()?;
        delay.delay_us(status.next_delay_us);
        Ok(status)
    }

    /// Queue the next message.
    ///
    /// # Errors
    ///
    /// Returns `MessageError::Pending` if the previous one is still queued.
    pub fn submit<T: AsRef<[u8]>>(&mut self, text: T) -> Result<usize> {
        self.scheduler.submit(text)
    }

    /// The row scheduler.
    #[inline]
    pub fn scheduler(&self) -> &RotorScheduler<N> {
        &self.scheduler
    }

    /// Mutable access to the row scheduler.
    #[inline]
    pub fn scheduler_mut(&mut self) -> &mut RotorScheduler<N> {
        &mut self.scheduler
    }

    /// The hardware port.
    #[inline]
    pub fn port(&self) -> &PORT {
        &self.port
    }

    /// Host pause policy.
    #[inline]
    pub fn pacing(&self) -> Pacing {
        self.pacing
    }

    /// Take the display apart.
    pub fn release(self) -> (RotorScheduler<N>, PORT) {
        (self.scheduler, self.port)
    }
}
