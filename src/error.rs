//! Error types for splitflap-motion.
//!
//! The scheduler core never fails: unsupported characters and overlong
//! messages fall back deterministically. Errors only come from the edges:
//! configuration, message ingestion and hardware ports.

use core::fmt;

/// Result type alias using the library's Error type.
pub type Result<T> = core::result::Result<T, Error>;

/// Unified error type for all splitflap-motion operations.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Configuration parsing or validation error
    Config(ConfigError),
    /// Pending-message ingestion error
    Message(MessageError),
    /// Hardware actuation port error
    Port(PortError),
}

/// Configuration-related errors.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Failed to parse TOML configuration
    ParseError(heapless::String<128>),
    /// A required builder field was not provided
    MissingField(&'static str),
    /// Display must have at least one unit
    NoUnits,
    /// Configured unit count does not match the scheduler width
    UnitCountMismatch {
        /// Units named in the configuration
        configured: usize,
        /// Units the scheduler was instantiated with
        capacity: usize,
    },
    /// Flap count cannot hold the alphabet plus the space flap
    InvalidFlapCount(u16),
    /// Gear ratio must be > 0
    InvalidGearRatio(u32),
    /// Compensation ratio must satisfy 0 < numerator <= denominator
    InvalidCompensation {
        /// Ratio numerator
        numerator: u32,
        /// Ratio denominator
        denominator: u32,
    },
    /// Pacing delay must be > 0
    InvalidDelay(&'static str),
    /// File I/O error (std only)
    #[cfg(feature = "std")]
    IoError(heapless::String<128>),
}

/// Pending-message errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageError {
    /// Queue already holds one character per unit
    Full,
    /// A message is still waiting for the current cycle to finish
    Pending,
}

/// Hardware port errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PortError {
    /// Pin operation failed
    Pin,
    /// Port was handed a different number of signals than it drives
    WidthMismatch {
        /// Units the port drives
        expected: usize,
        /// Signals supplied
        actual: usize,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Config(e) => write!(f, "Configuration error: {}", e),
            Error::Message(e) => write!(f, "Message error: {}", e),
            Error::Port(e) => write!(f, "Port error: {}", e),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ParseError(msg) => write!(f, "Parse error: {}", msg),
            ConfigError::MissingField(field) => write!(f, "{} is required", field),
            ConfigError::NoUnits => write!(f, "Display must have at least one unit"),
            ConfigError::UnitCountMismatch {
                configured,
                capacity,
            } => write!(
                f,
                "Configured {} units but scheduler drives {}",
                configured, capacity
            ),
            ConfigError::InvalidFlapCount(v) => {
                write!(f, "Invalid flap count: {}. Must be 27-255", v)
            }
            ConfigError::InvalidGearRatio(v) => write!(f, "Invalid gear ratio: {}. Must be > 0", v),
            ConfigError::InvalidCompensation {
                numerator,
                denominator,
            } => write!(
                f,
                "Invalid compensation ratio {}/{}: need 0 < numerator <= denominator",
                numerator, denominator
            ),
            ConfigError::InvalidDelay(name) => write!(f, "Invalid {}: must be > 0", name),
            #[cfg(feature = "std")]
            ConfigError::IoError(msg) => write!(f, "I/O error: {}", msg),
        }
    }
}

impl fmt::Display for MessageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MessageError::Full => write!(f, "Message queue is full"),
            MessageError::Pending => write!(f, "Previous message has not been consumed yet"),
        }
    }
}

impl fmt::Display for PortError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PortError::Pin => write!(f, "GPIO pin operation failed"),
            PortError::WidthMismatch { expected, actual } => {
                write!(f, "Port drives {} units, got {} signals", expected, actual)
            }
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Error {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Error::Config(_) => defmt::write!(f, "Configuration error"),
            Error::Message(e) => defmt::write!(f, "Message error: {}", e),
            Error::Port(e) => defmt::write!(f, "Port error: {}", e),
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for MessageError {
    fn format(&self, f: defmt::Formatter) {
        match self {
            MessageError::Full => defmt::write!(f, "queue full"),
            MessageError::Pending => defmt::write!(f, "message pending"),
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for PortError {
    fn format(&self, f: defmt::Formatter) {
        match self {
            PortError::Pin => defmt::write!(f, "pin failure"),
            PortError::WidthMismatch { expected, actual } => {
                defmt::write!(f, "width mismatch: expected {}, got {}", expected, actual)
            }
        }
    }
}

// Conversion impls
impl From<ConfigError> for Error {
    fn from(e: ConfigError) -> Self {
        Error::Config(e)
    }
}

impl From<MessageError> for Error {
    fn from(e: MessageError) -> Self {
        Error::Message(e)
    }
}

impl From<PortError> for Error {
    fn from(e: PortError) -> Self {
        Error::Port(e)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}

#[cfg(feature = "std")]
impl std::error::Error for MessageError {}

#[cfg(feature = "std")]
impl std::error::Error for PortError {}
