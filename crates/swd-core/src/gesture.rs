#![forbid(unsafe_code)]

//! Swipe gesture classification: turns a raw pointer stream into swipe
//! progress, dismiss and cancel decisions for list rows.
//!
//! [`SwipeClassifier`] tracks one pointer at a time. Feed every
//! [`PointerEvent`] of the list surface to
//! [`process`](SwipeClassifier::process) together with the host's
//! [`RowSource`]; it returns the [`SwipeEvent`]s the host should act on.
//!
//! # State Machine
//!
//! ```text
//!            down on row                |dx| > slop, allowed dir
//!   Idle ─────────────────► Tracking ───────────────────────────► Swiping
//!    ▲                          │                                    │
//!    └──────── up / cancel ─────┴────────── up / cancel ─────────────┘
//!                        (Dismiss or Cancel decided here)
//! ```
//!
//! # Invariants
//!
//! 1. At most one session exists; events from other pointers are ignored
//!    while it is active.
//! 2. `CancelPress` is emitted exactly once per session, on entering
//!    `Swiping`.
//! 3. `Dismiss` is only ever emitted for a session that reached `Swiping`,
//!    and only toward a side the [`SwipeDirection`] permits.
//! 4. Every session that emitted `Progress` ends with exactly one
//!    `Dismiss` or `Cancel`.
//!
//! # Failure Modes
//!
//! - Up/move/cancel without a preceding down: ignored.
//! - A down for the same pointer while a session is active: the old session
//!   is abandoned (with `Cancel` if it was swiping) and a new one starts.
//! - A zero or sub-pixel viewport width: treated as 1 px so opacity and
//!   thresholds stay finite.

use crate::event::{PointerEvent, PointerEventKind, PointerId, ScrollState};
use crate::geometry::{LayoutDirection, RowId};
use crate::rows::RowSource;
use crate::velocity::VelocityTracker;

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

/// Fraction of the row width past which releasing always dismisses.
pub const DISMISS_FRACTION: f32 = 0.5;

/// Minimum fraction of the row width a fling must have travelled.
pub const FLING_MIN_FRACTION: f32 = 0.2;

/// Thresholds for swipe recognition, in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwipeConfig {
    /// Horizontal distance before a touch becomes a swipe (default: 8).
    pub slop: f32,
    /// Minimum horizontal fling velocity, px/s (default: 50).
    pub min_fling_velocity: f32,
    /// Maximum horizontal fling velocity, px/s (default: 8000).
    pub max_fling_velocity: f32,
}

impl Default for SwipeConfig {
    fn default() -> Self {
        Self {
            slop: 8.0,
            min_fling_velocity: 50.0,
            max_fling_velocity: 8_000.0,
        }
    }
}

/// Which way rows may be swiped to dismiss them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum SwipeDirection {
    /// Either side.
    #[default]
    Both,
    /// Toward the start edge only (left in LTR, right in RTL).
    Start,
    /// Toward the end edge only (right in LTR, left in RTL).
    End,
}

impl SwipeDirection {
    /// Whether a horizontal delta points in a permitted direction.
    #[must_use]
    pub fn permits(self, delta_x: f32, layout: LayoutDirection) -> bool {
        let logical = layout.sign() * delta_x;
        match self {
            Self::Both => true,
            Self::Start => logical < 0.0,
            Self::End => logical > 0.0,
        }
    }
}

/// Physical side a dismissed row leaves through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DismissSide {
    /// Slides out past the left edge.
    Left,
    /// Slides out past the right edge.
    Right,
}

impl DismissSide {
    /// Side matching the sign of a horizontal quantity (`0` counts as left).
    #[must_use]
    pub fn from_sign(value: f32) -> Self {
        if value > 0.0 { Self::Right } else { Self::Left }
    }

    /// Final horizontal offset for a row of the given width.
    #[must_use]
    pub fn offset(self, width: f32) -> f32 {
        match self {
            Self::Left => -width,
            Self::Right => width,
        }
    }

    /// Whether this side is the logical end edge under `layout`.
    #[must_use]
    pub fn is_end(self, layout: LayoutDirection) -> bool {
        matches!(
            (self, layout),
            (Self::Right, LayoutDirection::Ltr) | (Self::Left, LayoutDirection::Rtl)
        )
    }
}

/// What the classifier asks the host to do.
#[derive(Debug, Clone, PartialEq)]
pub enum SwipeEvent<H> {
    /// The row is now being swiped; drop the list's own pressed/click state.
    CancelPress {
        /// Swiped row.
        row: RowId,
    },
    /// Live feedback while swiping.
    Progress {
        /// Swiped row.
        row: RowId,
        /// Row handle.
        handle: H,
        /// Horizontal offset from the resting position.
        offset: f32,
        /// Opacity in `[0, 1]`.
        opacity: f32,
    },
    /// The gesture was released as a dismissal.
    Dismiss {
        /// Dismissed row.
        row: RowId,
        /// Row handle.
        handle: H,
        /// Side the row should leave through.
        side: DismissSide,
        /// Row width used for the decision; the slide-out target is
        /// `side.offset(width)`.
        width: f32,
    },
    /// The gesture ended without dismissing; animate the row back.
    Cancel {
        /// Row that was touched.
        row: RowId,
        /// Row handle.
        handle: H,
    },
}

// ---------------------------------------------------------------------------
// Internal state
// ---------------------------------------------------------------------------

/// Coarse classifier state, for inspection and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GesturePhase {
    /// No pointer is down on a row.
    Idle,
    /// A pointer is down on a row but has not crossed the slop.
    Tracking,
    /// The row is following the pointer.
    Swiping,
}

#[derive(Debug, Clone)]
struct Session<H> {
    pointer: PointerId,
    row: RowId,
    handle: H,
    origin_x: f32,
    width: f32,
    layout: LayoutDirection,
    velocity: VelocityTracker,
    swiping: bool,
}

impl<H: Clone> Session<H> {
    fn cancel_event(&self) -> SwipeEvent<H> {
        SwipeEvent::Cancel {
            row: self.row,
            handle: self.handle.clone(),
        }
    }
}

// ---------------------------------------------------------------------------
// SwipeClassifier
// ---------------------------------------------------------------------------

/// Stateful swipe recognizer for one list surface.
pub struct SwipeClassifier<H> {
    config: SwipeConfig,
    direction: SwipeDirection,
    /// Suppresses gesture start while the list is being scrolled.
    paused: bool,
    /// Suppresses all pointer handling.
    disabled: bool,
    session: Option<Session<H>>,
}

impl<H> std::fmt::Debug for SwipeClassifier<H> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SwipeClassifier")
            .field("direction", &self.direction)
            .field("paused", &self.paused)
            .field("disabled", &self.disabled)
            .field("phase", &self.phase())
            .finish()
    }
}

impl<H: Clone> Default for SwipeClassifier<H> {
    fn default() -> Self {
        Self::new(SwipeConfig::default())
    }
}

impl<H: Clone> SwipeClassifier<H> {
    /// Create a classifier with the given thresholds and [`SwipeDirection::Both`].
    #[must_use]
    pub fn new(config: SwipeConfig) -> Self {
        Self {
            config,
            direction: SwipeDirection::Both,
            paused: false,
            disabled: false,
            session: None,
        }
    }

    /// Builder-style direction policy.
    #[must_use]
    pub fn with_direction(mut self, direction: SwipeDirection) -> Self {
        self.direction = direction;
        self
    }

    /// Process a pointer event, accepting every row.
    pub fn process<R>(&mut self, event: &PointerEvent, rows: &R) -> Vec<SwipeEvent<H>>
    where
        R: RowSource<Handle = H> + ?Sized,
    {
        self.process_filtered(event, rows, |_| true)
    }

    /// Process a pointer event. `accept` can veto starting a session on a
    /// row (e.g. one that is already animating out).
    pub fn process_filtered<R, F>(
        &mut self,
        event: &PointerEvent,
        rows: &R,
        accept: F,
    ) -> Vec<SwipeEvent<H>>
    where
        R: RowSource<Handle = H> + ?Sized,
        F: FnOnce(RowId) -> bool,
    {
        let mut out = Vec::with_capacity(2);
        if self.disabled {
            return out;
        }

        // A down from any pointer supersedes the session; other events must
        // come from the session's pointer.
        if event.kind != PointerEventKind::Down
            && self
                .session
                .as_ref()
                .is_some_and(|s| s.pointer != event.pointer)
        {
            return out;
        }

        match event.kind {
            PointerEventKind::Down => self.on_down(event, rows, accept, &mut out),
            PointerEventKind::Move => self.on_move(event, &mut out),
            PointerEventKind::Up => self.on_up(event, &mut out),
            PointerEventKind::Cancel => {
                if let Some(session) = self.session.take() {
                    tracing::debug!(target: "swd.gesture", row = %session.row, "pointer cancelled");
                    out.push(session.cancel_event());
                }
            }
        }
        out
    }

    /// End the active session, returning `Cancel` if its row had moved.
    pub fn cancel_active(&mut self) -> Option<SwipeEvent<H>> {
        self.session
            .take()
            .filter(|s| s.swiping)
            .map(|s| s.cancel_event())
    }
}

impl<H> SwipeClassifier<H> {
    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> GesturePhase {
        match &self.session {
            None => GesturePhase::Idle,
            Some(s) if s.swiping => GesturePhase::Swiping,
            Some(_) => GesturePhase::Tracking,
        }
    }

    /// Whether a pointer is down on a row.
    #[inline]
    #[must_use]
    pub fn is_tracking(&self) -> bool {
        self.session.is_some()
    }

    /// Whether a row is following the pointer.
    #[inline]
    #[must_use]
    pub fn is_swiping(&self) -> bool {
        self.session.as_ref().is_some_and(|s| s.swiping)
    }

    /// Row of the active session, if any.
    #[must_use]
    pub fn active_row(&self) -> Option<RowId> {
        self.session.as_ref().map(|s| s.row)
    }

    /// Pause or resume gesture start (driven by list scrolling).
    pub fn set_paused(&mut self, paused: bool) {
        self.paused = paused;
    }

    /// Whether gesture start is currently paused.
    #[must_use]
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Feed a scroll-state change from the host list.
    pub fn on_scroll_state_changed(&mut self, state: ScrollState) {
        self.set_paused(state.suppresses_swipe());
    }

    /// Enable or disable swipe handling entirely.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.disabled = !enabled;
    }

    /// Whether swipe handling is enabled.
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        !self.disabled
    }

    /// Swipe direction policy.
    #[must_use]
    pub fn direction(&self) -> SwipeDirection {
        self.direction
    }

    /// Change the swipe direction policy.
    pub fn set_direction(&mut self, direction: SwipeDirection) {
        self.direction = direction;
    }

    /// Thresholds in use.
    #[must_use]
    pub fn config(&self) -> &SwipeConfig {
        &self.config
    }

    /// Replace the thresholds.
    pub fn set_config(&mut self, config: SwipeConfig) {
        self.config = config;
    }

    /// Abandon any active session without emitting events.
    pub fn reset(&mut self) {
        self.session = None;
    }
}

// ---------------------------------------------------------------------------
// Internal event handlers
// ---------------------------------------------------------------------------

impl<H: Clone> SwipeClassifier<H> {
    fn on_down<R, F>(
        &mut self,
        event: &PointerEvent,
        rows: &R,
        accept: F,
        out: &mut Vec<SwipeEvent<H>>,
    ) where
        R: RowSource<Handle = H> + ?Sized,
        F: FnOnce(RowId) -> bool,
    {
        if self.paused {
            tracing::trace!(target: "swd.gesture", "down ignored while paused");
            return;
        }

        if let Some(old) = self.session.take().filter(|s| s.swiping) {
            out.push(old.cancel_event());
        }

        let Some((row, handle)) = rows.row_at(event.position) else {
            return;
        };
        if !accept(row) {
            tracing::debug!(target: "swd.gesture", row = %row, "down on busy row ignored");
            return;
        }

        let viewport = rows.viewport_width();
        let width = if viewport < 2.0 { 1.0 } else { viewport };
        let mut velocity = VelocityTracker::new();
        velocity.add(event.time_ms, event.position);

        tracing::debug!(target: "swd.gesture", row = %row, x = event.position.x, "tracking");
        self.session = Some(Session {
            pointer: event.pointer,
            row,
            handle,
            origin_x: event.position.x,
            width,
            layout: rows.layout_direction(),
            velocity,
            swiping: false,
        });
    }

    fn on_move(&mut self, event: &PointerEvent, out: &mut Vec<SwipeEvent<H>>) {
        if self.paused {
            return;
        }
        let Some(session) = self.session.as_mut() else {
            return;
        };

        session.velocity.add(event.time_ms, event.position);
        let mut delta = event.position.x - session.origin_x;

        if self.direction.permits(delta, session.layout) {
            if !session.swiping && delta.abs() > self.config.slop {
                session.swiping = true;
                tracing::debug!(target: "swd.gesture", row = %session.row, delta, "swiping");
                out.push(SwipeEvent::CancelPress { row: session.row });
            }
        } else {
            // Moving the wrong way restarts the gesture from here.
            session.origin_x = event.position.x;
            delta = 0.0;
        }

        if session.swiping {
            let opacity = (1.0 - 2.0 * delta.abs() / session.width).clamp(0.0, 1.0);
            tracing::trace!(target: "swd.gesture", row = %session.row, offset = delta, opacity, "progress");
            out.push(SwipeEvent::Progress {
                row: session.row,
                handle: session.handle.clone(),
                offset: delta,
                opacity,
            });
        }
    }

    fn on_up(&mut self, event: &PointerEvent, out: &mut Vec<SwipeEvent<H>>) {
        let Some(mut session) = self.session.take() else {
            return;
        };

        session.velocity.add(event.time_ms, event.position);
        let delta = event.position.x - session.origin_x;
        let velocity = session.velocity.velocity(0.0);
        let vx = velocity.x.abs();
        let vy = velocity.y.abs();
        let layout = session.layout;

        let side = if session.swiping
            && delta.abs() > session.width * DISMISS_FRACTION
            && self.direction.permits(delta, layout)
        {
            Some(DismissSide::from_sign(delta))
        } else if session.swiping
            && self.config.min_fling_velocity <= vx
            && vx <= self.config.max_fling_velocity
            && vy < vx
            && self.direction.permits(velocity.x, layout)
            && delta * velocity.x.signum() >= session.width * FLING_MIN_FRACTION
        {
            Some(DismissSide::from_sign(velocity.x))
        } else {
            None
        };

        match side {
            Some(side) => {
                tracing::debug!(
                    target: "swd.gesture",
                    row = %session.row,
                    delta,
                    vx = velocity.x,
                    ?side,
                    "dismiss"
                );
                out.push(SwipeEvent::Dismiss {
                    row: session.row,
                    handle: session.handle,
                    side,
                    width: session.width,
                });
            }
            None => {
                tracing::debug!(target: "swd.gesture", row = %session.row, delta, vx = velocity.x, "cancel");
                out.push(session.cancel_event());
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
