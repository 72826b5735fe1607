#![forbid(unsafe_code)]

//! Construction errors.

use std::fmt;

/// A widget builder was missing something it cannot work without.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuildError {
    /// No row source was supplied.
    MissingRowSource,
    /// No per-row dismiss callback was supplied.
    MissingDismissCallback,
    /// No row animator was supplied.
    MissingAnimator,
    /// No prompt surface was supplied.
    MissingPromptSurface,
    /// No auto-hide scheduler was supplied.
    MissingScheduler,
    /// The configuration failed validation.
    InvalidConfig(Vec<String>),
}

impl fmt::Display for BuildError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingRowSource => write!(f, "row source is required"),
            Self::MissingDismissCallback => write!(f, "dismiss callback is required"),
            Self::MissingAnimator => write!(f, "row animator is required"),
            Self::MissingPromptSurface => write!(f, "prompt surface is required"),
            Self::MissingScheduler => write!(f, "auto-hide scheduler is required"),
            Self::InvalidConfig(errors) => {
                write!(f, "invalid configuration: {}", errors.join("; "))
            }
        }
    }
}

impl std::error::Error for BuildError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_is_actionable() {
        assert_eq!(
            BuildError::MissingRowSource.to_string(),
            "row source is required"
        );
        assert_eq!(
            BuildError::InvalidConfig(vec!["slop must be >= 0, got -1".into()]).to_string(),
            "invalid configuration: slop must be >= 0, got -1"
        );
    }
}
