#![forbid(unsafe_code)]

//! Geometric primitives and row identity.

/// A point in list-surface coordinates (logical pixels, origin at top-left).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    /// Horizontal position.
    pub x: f32,
    /// Vertical position.
    pub y: f32,
}

impl Point {
    /// Create a new point.
    #[inline]
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Stable identifier of a list entry, independent of its on-screen position.
///
/// Ordering follows the underlying index so that batches can be processed
/// from the highest identifier down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RowId(pub usize);

impl RowId {
    /// Create a row identifier from a raw index.
    #[inline]
    #[must_use]
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    /// Get the raw index.
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl std::fmt::Display for RowId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Horizontal reading direction of the hosting list.
///
/// Decides which physical side counts as "start" and "end".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LayoutDirection {
    /// Left-to-right: start is left.
    #[default]
    Ltr,
    /// Right-to-left: start is right.
    Rtl,
}

impl LayoutDirection {
    /// Multiplier that maps a physical horizontal delta onto the logical
    /// start→end axis (`+1` for LTR, `-1` for RTL).
    #[inline]
    #[must_use]
    pub const fn sign(self) -> f32 {
        match self {
            Self::Ltr => 1.0,
            Self::Rtl => -1.0,
        }
    }
}
