//! Configuration loading from files (std only).

use std::fs;
use std::path::Path;

use crate::error::{ConfigError, Error, Result};

use super::DisplayConfig;

/// Load configuration from a TOML file.
///
/// # Errors
///
/// Returns an error if the file cannot be read, parsed or validated.
///
/// # Example
///
/// ```rust,ignore
/// use splitflap_motion::load_config;
///
/// let config = load_config("display.toml")?;
/// ```
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<DisplayConfig> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|e| {
        let msg = format!("{}: {}", path.display(), e);
        Error::Config(ConfigError::IoError(bounded(&msg)))
    })?;

    parse_config(&content)
}

/// Parse configuration from a TOML string.
///
/// Parse errors are prefixed with the 1-based line they were found on.
///
/// # Errors
///
/// Returns an error if the TOML is invalid or fails validation.
pub fn parse_config(content: &str) -> Result<DisplayConfig> {
    let config: DisplayConfig = toml::from_str(content).map_err(|e| {
        let msg = match e.span() {
            Some(span) => {
                let line = content[..span.start].matches('\n').count() + 1;
                format!("line {}: {}", line, e.message())
            }
            None => e.message().to_owned(),
        };
        Error::Config(ConfigError::ParseError(bounded(&msg)))
    })?;

    super::validation::validate_config(&config)?;

    Ok(config)
}

/// Copy as much of `msg` as fits, cutting on a char boundary.
fn bounded<const N: usize>(msg: &str) -> heapless::String<N> {
    let mut out = heapless::String::new();
    for ch in msg.chars() {
        if out.push(ch).is_err() {
            break;
        }
    }
    out
}
