#![forbid(unsafe_code)]

//! Canonical pointer and scroll events.
//!
//! The host toolkit translates its native touch/mouse stream into
//! [`PointerEvent`] values and feeds them to the list in delivery order.
//!
//! # Design Notes
//!
//! - Positions are in list-surface coordinates (the host applies any
//!   window→list offset before constructing the event).
//! - Timestamps are monotonic milliseconds; only differences matter.
//! - `Cancel` is the toolkit telling us the stream was taken away (e.g. a
//!   parent started intercepting), not a user action.

use crate::geometry::Point;

/// Identifier of a single touch/pointer within a multi-pointer stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PointerId(pub u32);

/// What happened to the pointer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerEventKind {
    /// Pointer touched down.
    Down,
    /// Pointer moved while down.
    Move,
    /// Pointer lifted.
    Up,
    /// The toolkit aborted the stream.
    Cancel,
}

/// A single pointer event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    /// Event kind.
    pub kind: PointerEventKind,
    /// Which pointer produced the event.
    pub pointer: PointerId,
    /// Position in list-surface coordinates.
    pub position: Point,
    /// Monotonic timestamp in milliseconds.
    pub time_ms: i64,
}

impl PointerEvent {
    /// Create an event for the primary pointer.
    #[must_use]
    pub const fn new(kind: PointerEventKind, x: f32, y: f32, time_ms: i64) -> Self {
        Self {
            kind,
            pointer: PointerId(0),
            position: Point::new(x, y),
            time_ms,
        }
    }

    /// Primary-pointer down.
    #[must_use]
    pub const fn down(x: f32, y: f32, time_ms: i64) -> Self {
        Self::new(PointerEventKind::Down, x, y, time_ms)
    }

    /// Primary-pointer move.
    #[must_use]
    pub const fn moved(x: f32, y: f32, time_ms: i64) -> Self {
        Self::new(PointerEventKind::Move, x, y, time_ms)
    }

    /// Primary-pointer up.
    #[must_use]
    pub const fn up(x: f32, y: f32, time_ms: i64) -> Self {
        Self::new(PointerEventKind::Up, x, y, time_ms)
    }

    /// Primary-pointer cancel.
    #[must_use]
    pub const fn cancel(x: f32, y: f32, time_ms: i64) -> Self {
        Self::new(PointerEventKind::Cancel, x, y, time_ms)
    }

    /// Attribute the event to a different pointer.
    #[must_use]
    pub const fn with_pointer(mut self, pointer: PointerId) -> Self {
        self.pointer = pointer;
        self
    }
}

/// Scroll state reported by the hosting list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScrollState {
    /// Not scrolling.
    #[default]
    Idle,
    /// The user is dragging the list vertically.
    TouchScroll,
    /// The list is coasting after a vertical fling.
    Fling,
}

impl ScrollState {
    /// Whether swipe gestures should be suppressed in this state.
    ///
    /// Only an active finger-driven scroll suppresses gesture start; a
    /// coasting list can still be swiped.
    #[inline]
    #[must_use]
    pub const fn suppresses_swipe(self) -> bool {
        matches!(self, Self::TouchScroll)
    }
}
