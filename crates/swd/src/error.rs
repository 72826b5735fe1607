#![forbid(unsafe_code)]

//! Top-level error type.
//!
//! Each layer keeps its own typed error ([`BuildError`] from the widgets,
//! [`ConfigError`] from configuration loading). [`Error`] wraps them so an
//! application can load a config file and build a list with one `?` chain.

use std::fmt;

use swd_runtime::ConfigError;
use swd_widgets::BuildError;

/// Any error an swd application can hit while setting up a list.
#[derive(Debug)]
pub enum Error {
    /// A list or prompt builder was incomplete or misconfigured.
    Build(BuildError),
    /// A configuration file could not be read, parsed or validated.
    Config(ConfigError),
}

/// Standard result type for swd APIs.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Validation messages carried by this error, if any.
    ///
    /// Both an invalid builder config and a failed config validation carry
    /// the same list of human-readable problems.
    pub fn validation_messages(&self) -> Option<&[String]> {
        match self {
            Self::Build(BuildError::InvalidConfig(errors)) => Some(errors),
            Self::Config(ConfigError::Validation(errors)) => Some(errors),
            _ => None,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Build(e) => write!(f, "build error: {e}"),
            Self::Config(e) => write!(f, "config error: {e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Build(e) => Some(e),
            Self::Config(e) => Some(e),
        }
    }
}

impl From<BuildError> for Error {
    fn from(err: BuildError) -> Self {
        Self::Build(err)
    }
}

impl From<ConfigError> for Error {
    fn from(err: ConfigError) -> Self {
        Self::Config(err)
    }
}
