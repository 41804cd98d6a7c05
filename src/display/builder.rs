//! Builder pattern for SplitFlapDisplay.

use crate::config::{validate_config, DisplayConfig, FlapMechanics};
use crate::error::{ConfigError, Error, Result};
use crate::output::ActuationPort;
use crate::rotor::RotorScheduler;

use super::driver::{Pacing, SplitFlapDisplay};

/// Builder for creating SplitFlapDisplay instances.
pub struct SplitFlapDisplayBuilder<PORT, const N: usize>
where
    PORT: ActuationPort,
{
    port: Option<PORT>,
    mechanics: FlapMechanics,
    pacing: Pacing,
}

impl<PORT, const N: usize> Default for SplitFlapDisplayBuilder<PORT, N>
where
    PORT: ActuationPort,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<PORT, const N: usize> SplitFlapDisplayBuilder<PORT, N>
where
    PORT: ActuationPort,
{
    /// Create a new builder with default mechanics and pacing.
    pub fn new() -> Self {
        Self {
            port: None,
            mechanics: FlapMechanics::default(),
            pacing: Pacing::default(),
        }
    }

    /// Set the hardware port.
    pub fn port(mut self, port: PORT) -> Self {
        self.port = Some(port);
        self
    }

    /// Set drum and motor mechanics.
    pub fn mechanics(mut self, mechanics: FlapMechanics) -> Self {
        self.mechanics = mechanics;
        self
    }

    /// Set host pacing.
    pub fn pacing(mut self, pacing: Pacing) -> Self {
        self.pacing = pacing;
        self
    }

    /// Configure mechanics and pacing from a DisplayConfig.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or its unit count
    /// differs from `N`.
    pub fn from_config(self, config: &DisplayConfig) -> Result<Self> {
        validate_config(config)?;

        if config.display.units != N {
            return Err(Error::Config(ConfigError::UnitCountMismatch {
                configured: config.display.units,
                capacity: N,
            }));
        }

        Ok(self
            .mechanics(FlapMechanics::from_config(config))
            .pacing(Pacing::from_config(&config.timing)))
    }

    /// Build the SplitFlapDisplay.
    ///
    /// # Errors
    ///
    /// Returns an error if no port was provided or the mechanics fail
    /// [`FlapMechanics::validate`].
    pub fn build(self) -> Result<SplitFlapDisplay<PORT, N>> {
        let port = self
            .port
            .ok_or(Error::Config(ConfigError::MissingField("port")))?;
        let scheduler = RotorScheduler::new(self.mechanics)?;

        #[cfg(feature = "defmt")]
        defmt::info!("split-flap row ready: {} units, {}", N, self.mechanics);

        Ok(SplitFlapDisplay::new(scheduler, port, self.pacing))
    }
}
