#![forbid(unsafe_code)]

//! Undo coordination for batches of dismissed rows.
//!
//! [`UndoCoordinator`] owns every [`Undoable`] produced by the dismiss
//! callback and decides what the undo prompt shows. It never touches a
//! prompt directly: each operation returns the [`PromptEffect`]s the host
//! (normally `swd_widgets::UndoPrompt`) should apply, in order.
//!
//! # Invariants
//!
//! 1. Every stored undoable is consumed exactly once, by `undo` or
//!    `discard`.
//! 2. Under [`UndoPolicy::Single`] at most one undoable is stored.
//! 3. The prompt is visible iff the last emitted show/hide effect was a
//!    show, and a show is only emitted with a non-empty store.
//! 4. A `ScheduleHide` always carries the timer's current token.
//!
//! # Failure Modes
//!
//! - Undo tap with nothing stored: no-op.
//! - Auto-hide fire with a stale token: no-op.

use std::time::Duration;

use swd_core::RowId;

use super::auto_hide::{AutoHideTimer, HideToken};
use super::policy::UndoPolicy;
use super::undoable::Undoable;

/// Default prompt text for one dismissal without a title.
pub const DEFAULT_DELETE_MESSAGE: &str = "Item deleted";
/// Default prompt text for several dismissals; `%d` is the count.
pub const DEFAULT_DELETE_MULTIPLE_MESSAGE: &str = "%d items deleted";
/// Default button label.
pub const DEFAULT_UNDO_LABEL: &str = "Undo";
/// Default button label when one tap undoes several dismissals.
pub const DEFAULT_UNDO_ALL_LABEL: &str = "Undo all";

// ---------------------------------------------------------------------------
// Prompt text
// ---------------------------------------------------------------------------

/// Strings the prompt is built from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptMessages {
    /// Text for a single dismissal whose undoable has no title.
    pub delete_message: String,
    /// Template for several dismissals. `None` falls back to the latest
    /// title.
    pub delete_multiple_message: Option<String>,
    /// Button label.
    pub undo_label: String,
    /// Button label under [`UndoPolicy::Collapsed`] with several entries.
    pub undo_all_label: String,
}

impl Default for PromptMessages {
    fn default() -> Self {
        Self {
            delete_message: DEFAULT_DELETE_MESSAGE.to_owned(),
            delete_multiple_message: Some(DEFAULT_DELETE_MULTIPLE_MESSAGE.to_owned()),
            undo_label: DEFAULT_UNDO_LABEL.to_owned(),
            undo_all_label: DEFAULT_UNDO_ALL_LABEL.to_owned(),
        }
    }
}

/// What the prompt displays.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptContent {
    /// Message text.
    pub message: String,
    /// Button label.
    pub button: String,
}

/// An instruction for the prompt host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptEffect {
    /// Present the prompt.
    Show(PromptContent),
    /// Refresh the prompt while it stays visible.
    Update(PromptContent),
    /// Hide the prompt.
    Hide,
    /// Call [`UndoCoordinator::on_auto_hide_elapsed`] with `token` after
    /// `delay`.
    ScheduleHide {
        /// How long to wait.
        delay: Duration,
        /// Token to hand back.
        token: HideToken,
    },
}

// ---------------------------------------------------------------------------
// UndoCoordinator
// ---------------------------------------------------------------------------

/// Holds pending undoables and drives the prompt.
pub struct UndoCoordinator {
    policy: UndoPolicy,
    messages: PromptMessages,
    timer: AutoHideTimer,
    /// Oldest first.
    stored: Vec<Box<dyn Undoable>>,
    visible: bool,
}

impl std::fmt::Debug for UndoCoordinator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UndoCoordinator")
            .field("policy", &self.policy)
            .field("stored", &self.stored.len())
            .field("visible", &self.visible)
            .field("token", &self.timer.current())
            .finish()
    }
}

impl Default for UndoCoordinator {
    fn default() -> Self {
        Self::new(UndoPolicy::default())
    }
}

impl UndoCoordinator {
    /// Create a coordinator with default messages and delay.
    #[must_use]
    pub fn new(policy: UndoPolicy) -> Self {
        Self {
            policy,
            messages: PromptMessages::default(),
            timer: AutoHideTimer::default(),
            stored: Vec::new(),
            visible: false,
        }
    }

    /// Set the prompt strings.
    #[must_use]
    pub fn with_messages(mut self, messages: PromptMessages) -> Self {
        self.messages = messages;
        self
    }

    /// Set the auto-hide delay.
    #[must_use]
    pub fn with_auto_hide_delay(mut self, delay: Duration) -> Self {
        self.timer.set_delay(delay);
        self
    }

    // --- Operations ---

    /// Dismiss `rows` in the given order.
    ///
    /// `dismiss` is the per-row callback; a returned undoable is stored.
    pub fn batch_dismiss<F>(&mut self, rows: &[RowId], mut dismiss: F) -> Vec<PromptEffect>
    where
        F: FnMut(RowId) -> Option<Box<dyn Undoable>>,
    {
        for &row in rows {
            if self.policy.keeps_one() {
                self.discard_stored();
            }
            match dismiss(row) {
                Some(undoable) => self.stored.push(undoable),
                None => {
                    tracing::trace!(target: "swd.undo", row = %row, "dismissed without undo");
                }
            }
            self.timer.interrupt();
        }

        tracing::debug!(
            target: "swd.undo",
            rows = rows.len(),
            stored = self.stored.len(),
            policy = self.policy.as_str(),
            "batch dismissed"
        );

        let mut effects = Vec::with_capacity(2);
        if self.stored.is_empty() {
            self.push_hide(&mut effects);
            return effects;
        }
        let content = self.content();
        if self.visible {
            effects.push(PromptEffect::Update(content));
        } else {
            self.visible = true;
            effects.push(PromptEffect::Show(content));
        }
        self.push_schedule(&mut effects);
        effects
    }

    /// The undo button was activated.
    pub fn undo_pressed(&mut self) -> Vec<PromptEffect> {
        if self.stored.is_empty() {
            tracing::trace!(target: "swd.undo", "undo with nothing stored");
            return Vec::new();
        }

        let undone = match self.policy {
            UndoPolicy::Single | UndoPolicy::Multi => {
                if let Some(last) = self.stored.pop() {
                    last.undo();
                }
                if self.policy == UndoPolicy::Single {
                    self.discard_stored();
                }
                1
            }
            UndoPolicy::Collapsed => {
                let count = self.stored.len();
                while let Some(last) = self.stored.pop() {
                    last.undo();
                }
                count
            }
        };
        self.timer.interrupt();

        tracing::debug!(
            target: "swd.undo",
            undone,
            remaining = self.stored.len(),
            policy = self.policy.as_str(),
            "undo"
        );

        let mut effects = Vec::with_capacity(2);
        if self.stored.is_empty() {
            self.push_hide(&mut effects);
        } else {
            effects.push(PromptEffect::Update(self.content()));
            self.push_schedule(&mut effects);
        }
        effects
    }

    /// The user touched the undo button; restarts the countdown.
    pub fn undo_touched(&mut self) -> Vec<PromptEffect> {
        self.timer.interrupt();
        let mut effects = Vec::new();
        self.push_schedule(&mut effects);
        effects
    }

    /// The user touched the list; (re)starts the countdown with the current
    /// token without invalidating fires already scheduled.
    pub fn pointer_activity(&mut self) -> Vec<PromptEffect> {
        let mut effects = Vec::new();
        self.push_schedule(&mut effects);
        effects
    }

    /// A scheduled auto-hide fired.
    pub fn on_auto_hide_elapsed(&mut self, token: HideToken) -> Vec<PromptEffect> {
        if !self.timer.is_current(token) {
            tracing::trace!(
                target: "swd.undo",
                token = token.0,
                current = self.timer.current().0,
                "stale auto-hide ignored"
            );
            return Vec::new();
        }
        tracing::debug!(target: "swd.undo", token = token.0, stored = self.stored.len(), "auto-hide");
        self.discard_all()
    }

    /// Make every stored dismissal permanent and hide the prompt now.
    pub fn discard_all(&mut self) -> Vec<PromptEffect> {
        self.discard_stored();
        let mut effects = Vec::with_capacity(1);
        self.push_hide(&mut effects);
        effects
    }

    // --- Queries ---

    /// Prompt content for the current store, or `None` when empty.
    #[must_use]
    pub fn prompt_content(&self) -> Option<PromptContent> {
        (!self.stored.is_empty()).then(|| self.content())
    }

    /// Number of stored undoables.
    #[inline]
    #[must_use]
    pub fn stored_len(&self) -> usize {
        self.stored.len()
    }

    /// Whether anything can be undone.
    #[inline]
    #[must_use]
    pub fn can_undo(&self) -> bool {
        !self.stored.is_empty()
    }

    /// Whether the prompt is currently shown.
    #[inline]
    #[must_use]
    pub fn is_prompt_visible(&self) -> bool {
        self.visible
    }

    /// The undo policy.
    #[must_use]
    pub fn policy(&self) -> UndoPolicy {
        self.policy
    }

    /// Token a fire scheduled now would carry.
    #[must_use]
    pub fn current_token(&self) -> HideToken {
        self.timer.current()
    }

    /// Auto-hide delay.
    #[must_use]
    pub fn auto_hide_delay(&self) -> Duration {
        self.timer.delay()
    }

    /// Prompt strings.
    #[must_use]
    pub fn messages(&self) -> &PromptMessages {
        &self.messages
    }

    // --- Setters ---

    /// Change the auto-hide delay for future schedules.
    pub fn set_auto_hide_delay(&mut self, delay: Duration) {
        self.timer.set_delay(delay);
    }

    /// Change the single-dismissal message.
    pub fn set_delete_message(&mut self, message: impl Into<String>) {
        self.messages.delete_message = message.into();
    }

    /// Change (or clear) the multiple-dismissal template.
    pub fn set_delete_multiple_message(&mut self, template: Option<String>) {
        self.messages.delete_multiple_message = template;
    }

    // --- Internals ---

    fn content(&self) -> PromptContent {
        let count = self.stored.len();
        let message = match (&self.messages.delete_multiple_message, self.stored.last()) {
            (Some(template), _) if count > 1 => template.replacen("%d", &count.to_string(), 1),
            (_, Some(last)) => last
                .title()
                .unwrap_or(&self.messages.delete_message)
                .to_owned(),
            (_, None) => self.messages.delete_message.clone(),
        };
        let button = if self.policy.undoes_all(count) {
            self.messages.undo_all_label.clone()
        } else {
            self.messages.undo_label.clone()
        };
        PromptContent { message, button }
    }

    fn discard_stored(&mut self) {
        if self.stored.is_empty() {
            return;
        }
        tracing::trace!(target: "swd.undo", count = self.stored.len(), "discarding");
        for undoable in self.stored.drain(..) {
            undoable.discard();
        }
    }

    fn push_hide(&mut self, effects: &mut Vec<PromptEffect>) {
        if self.visible {
            self.visible = false;
            effects.push(PromptEffect::Hide);
        }
    }

    fn push_schedule(&self, effects: &mut Vec<PromptEffect>) {
        if self.visible {
            effects.push(PromptEffect::ScheduleHide {
                delay: self.timer.delay(),
                token: self.timer.current(),
            });
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
