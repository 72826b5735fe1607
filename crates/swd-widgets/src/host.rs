#![forbid(unsafe_code)]

//! Toolkit-side collaborators.
//!
//! The widgets never draw, animate or sleep on their own. The host toolkit
//! implements these traits and reports completions back through the
//! `on_*_finished` / `on_auto_hide_elapsed` methods of
//! [`SwipeDismissList`](crate::SwipeDismissList).

use std::time::Duration;

use swd_core::RowId;
use swd_runtime::{HideToken, PromptContent};

use crate::prompt_layout::PromptGeometry;

/// Row animations, addressed by the host's row handle `H`.
pub trait Animator<H> {
    /// Drop the list's pressed/click state: the touch became a swipe.
    fn cancel_press(&mut self, row: RowId);

    /// Follow the pointer: apply a horizontal offset and opacity now.
    fn set_swipe_progress(&mut self, row: RowId, handle: &H, offset: f32, opacity: f32);

    /// Animate the row to `target_offset` while fading it out. The host must
    /// call `on_slide_out_finished(row)` once when done.
    fn slide_out(&mut self, row: RowId, handle: &H, target_offset: f32, duration: Duration);

    /// Animate the row back to offset 0 and full opacity.
    fn slide_back(&mut self, row: RowId, handle: &H, duration: Duration);

    /// Shrink the row's height to zero. The host must call
    /// `on_collapse_finished(row)` once when done.
    fn collapse(&mut self, row: RowId, handle: &H, duration: Duration);

    /// Restore natural opacity, offset and height after the row was removed
    /// (handles are recycled by most lists).
    fn reset_row(&mut self, row: RowId, handle: &H);
}

/// The floating undo prompt.
pub trait PromptSurface {
    /// Present the prompt at `geometry`.
    fn show(&mut self, content: &PromptContent, geometry: PromptGeometry);

    /// Replace the text of a visible prompt.
    fn update(&mut self, content: &PromptContent);

    /// Hide the prompt.
    fn hide(&mut self);

    /// Whether the prompt is on screen.
    fn is_showing(&self) -> bool;
}

/// Delayed callbacks. The host calls `on_auto_hide_elapsed(token)` after
/// `delay`; it never needs to cancel anything.
pub trait HideScheduler {
    /// Arrange for `token` to be delivered after `delay`.
    fn schedule(&mut self, delay: Duration, token: HideToken);
}

impl<F> HideScheduler for F
where
    F: FnMut(Duration, HideToken),
{
    fn schedule(&mut self, delay: Duration, token: HideToken) {
        self(delay, token);
    }
}
