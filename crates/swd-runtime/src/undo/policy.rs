#![forbid(unsafe_code)]

//! How many dismissals can be undone, and how much one tap undoes.

/// Undo policy for a dismiss list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "config", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "config", serde(rename_all = "snake_case"))]
pub enum UndoPolicy {
    /// Only the latest dismissal can be undone; a new one discards the
    /// previous.
    #[default]
    Single,
    /// Every dismissal is remembered; each tap undoes the most recent one.
    Multi,
    /// Every dismissal is remembered; one tap undoes all of them.
    Collapsed,
}

impl UndoPolicy {
    /// Whether a new dismissal discards what is already stored.
    #[inline]
    #[must_use]
    pub const fn keeps_one(self) -> bool {
        matches!(self, Self::Single)
    }

    /// Whether the button should read "undo all" for `stored` entries.
    #[inline]
    #[must_use]
    pub const fn undoes_all(self, stored: usize) -> bool {
        matches!(self, Self::Collapsed) && stored > 1
    }

    /// Stable lowercase name, used in logs.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Single => "single",
            Self::Multi => "multi",
            Self::Collapsed => "collapsed",
        }
    }
}

impl std::fmt::Display for UndoPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
