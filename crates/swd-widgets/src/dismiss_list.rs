#![forbid(unsafe_code)]

//! Swipe-to-dismiss behaviour for a host list.
//!
//! [`SwipeDismissList`] glues the pieces together:
//!
//! ```text
//!  PointerEvent ─► SwipeClassifier ─► Animator (progress / slide out / back)
//!                                          │ on_slide_out_finished(row)
//!                                          ▼
//!                               PendingDismissals ─► Animator::collapse
//!                                          │ on_collapse_finished(row)
//!                                          ▼ (last one in flight)
//!                       UndoPrompt::batch_dismiss(rows, high → low)
//! ```
//!
//! Everything runs on the host's UI thread. The host forwards pointer and
//! scroll events, and reports animation completions and auto-hide fires
//! back through the `on_*` methods.
//!
//! # Example
//!
//! ```ignore
//! let mut list = SwipeDismissList::builder()
//!     .rows(my_rows)
//!     .on_dismiss(|row| {
//!         let mail = inbox.archive(row.index());
//!         Some(FnUndoable::new(move || inbox.restore(mail)).boxed())
//!     })
//!     .animator(my_animator)
//!     .prompt_surface(my_snackbar)
//!     .scheduler(|delay: Duration, token: HideToken| timers.after(delay, token))
//!     .config(DismissConfig::default().with_undo_policy(UndoPolicy::Collapsed))
//!     .build()?;
//!
//! list.handle_pointer(&event);
//! ```

use std::fmt;
use std::time::Duration;

use swd_core::{
    PointerEvent, PointerEventKind, RowId, RowSource, ScrollState, SwipeClassifier,
    SwipeDirection, SwipeEvent,
};
use swd_runtime::{DismissConfig, HideToken, UndoPolicy, Undoable};

use crate::error::BuildError;
use crate::host::{Animator, HideScheduler, PromptSurface};
use crate::pending::PendingDismissals;
use crate::prompt_layout::PromptLayout;
use crate::undo_prompt::UndoPrompt;

/// Per-row dismiss callback: remove the row's item, optionally returning a
/// way to put it back.
pub type DismissCallback = Box<dyn FnMut(RowId) -> Option<Box<dyn Undoable>>>;

/// A list whose rows can be swiped away, with undo.
pub struct SwipeDismissList<R: RowSource> {
    rows: R,
    classifier: SwipeClassifier<R::Handle>,
    pending: PendingDismissals<R::Handle>,
    animator: Box<dyn Animator<R::Handle>>,
    prompt: UndoPrompt,
    on_dismiss: DismissCallback,
    animation_duration: Duration,
}

impl<R: RowSource> fmt::Debug for SwipeDismissList<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SwipeDismissList")
            .field("classifier", &self.classifier)
            .field("pending", &self.pending.len())
            .field("in_flight", &self.pending.in_flight())
            .field("prompt", &self.prompt)
            .finish()
    }
}

impl<R: RowSource> SwipeDismissList<R> {
    /// Start building a list.
    #[must_use]
    pub fn builder() -> SwipeDismissListBuilder<R> {
        SwipeDismissListBuilder::default()
    }

    // --- Input ---

    /// Feed a pointer event from the list surface.
    ///
    /// Returns `true` when the event belongs to a swipe and the host list
    /// should not also treat it as a scroll or click.
    pub fn handle_pointer(&mut self, event: &PointerEvent) -> bool {
        if event.kind == PointerEventKind::Move && self.classifier.is_enabled() {
            self.prompt.pointer_activity();
        }

        let pending = &self.pending;
        let events = self
            .classifier
            .process_filtered(event, &self.rows, |row| !pending.contains(row));
        let consumed = !events.is_empty() || self.classifier.is_swiping();
        for swipe in events {
            self.apply_swipe(swipe);
        }
        consumed
    }

    /// Feed a scroll-state change from the host list.
    pub fn on_scroll_state_changed(&mut self, state: ScrollState) {
        tracing::trace!(target: "swd.dismiss", ?state, "scroll state");
        self.classifier.on_scroll_state_changed(state);
    }

    // --- Animation completions ---

    /// The slide-out animation of `row` finished.
    pub fn on_slide_out_finished(&mut self, row: RowId) {
        match self.pending.slide_out_finished(row) {
            Some(handle) => {
                tracing::debug!(target: "swd.dismiss", row = %row, "collapsing");
                self.animator.collapse(row, handle, self.animation_duration);
            }
            None => {
                tracing::trace!(target: "swd.dismiss", row = %row, "unexpected slide-out completion");
            }
        }
    }

    /// The collapse animation of `row` finished.
    pub fn on_collapse_finished(&mut self, row: RowId) {
        if !self.pending.contains(row) {
            tracing::trace!(target: "swd.dismiss", row = %row, "unexpected collapse completion");
            return;
        }
        let Some(batch) = self.pending.collapse_finished(row) else {
            tracing::trace!(
                target: "swd.dismiss",
                row = %row,
                in_flight = self.pending.in_flight(),
                "waiting for batch"
            );
            return;
        };

        // Resolve before the callback shifts the data; the host may have
        // recycled the row's view while it was animating.
        let batch: Vec<_> = batch
            .into_iter()
            .map(|(row, handle)| (row, self.rows.handle_for(row).unwrap_or(handle)))
            .collect();
        let ids: Vec<RowId> = batch.iter().map(|(row, _)| *row).collect();
        tracing::debug!(target: "swd.dismiss", rows = ?ids, "batch complete");
        self.prompt.batch_dismiss(&ids, &mut self.on_dismiss);
        for (row, handle) in &batch {
            self.animator.reset_row(*row, handle);
        }
    }

    // --- Undo prompt ---

    /// The undo button was activated.
    pub fn undo_pressed(&mut self) {
        self.prompt.undo_pressed();
    }

    /// The undo button was touched (counts as activity).
    pub fn undo_touched(&mut self) {
        self.prompt.undo_touched();
    }

    /// A scheduled auto-hide fired.
    pub fn on_auto_hide_elapsed(&mut self, token: HideToken) {
        self.prompt.on_auto_hide_elapsed(token);
    }

    /// Make every undoable dismissal permanent and hide the prompt.
    pub fn discard_undo(&mut self) {
        self.prompt.discard_all();
    }

    /// Dismiss rows without a gesture or animation. Rows are processed from
    /// the highest identifier down; duplicates and rows past the end of the
    /// list are dropped.
    pub fn dismiss(&mut self, rows: &[RowId]) {
        let count = self.rows.row_count();
        let mut ids: Vec<RowId> = rows.iter().copied().filter(|row| row.0 < count).collect();
        if ids.len() < rows.len() {
            tracing::trace!(target: "swd.dismiss", count, "rows past the end ignored");
        }
        if ids.is_empty() {
            return;
        }
        ids.sort_unstable_by(|a, b| b.cmp(a));
        ids.dedup();
        tracing::debug!(target: "swd.dismiss", rows = ?ids, "programmatic dismiss");
        self.prompt.batch_dismiss(&ids, &mut self.on_dismiss);
    }

    // --- Setters ---

    /// Change the auto-hide delay.
    pub fn set_auto_hide_delay(&mut self, delay: Duration) {
        self.prompt.coordinator_mut().set_auto_hide_delay(delay);
    }

    /// Change the swipe direction policy.
    pub fn set_swipe_direction(&mut self, direction: SwipeDirection) {
        self.classifier.set_direction(direction);
    }

    /// Enable or disable swiping. Disabling mid-swipe slides the row back.
    pub fn set_swipe_enabled(&mut self, enabled: bool) {
        if !enabled {
            if let Some(cancel) = self.classifier.cancel_active() {
                self.apply_swipe(cancel);
            }
        }
        self.classifier.set_enabled(enabled);
    }

    /// Change the single-dismissal message.
    pub fn set_delete_message(&mut self, message: impl Into<String>) {
        self.prompt.coordinator_mut().set_delete_message(message);
    }

    /// Change (or clear) the multiple-dismissal template.
    pub fn set_delete_multiple_message(&mut self, template: Option<String>) {
        self.prompt
            .coordinator_mut()
            .set_delete_multiple_message(template);
    }

    /// Update screen metrics for the prompt.
    pub fn set_prompt_layout(&mut self, layout: PromptLayout) {
        self.prompt.set_layout(layout);
    }

    // --- Accessors ---

    /// The host row source.
    #[must_use]
    pub fn rows(&self) -> &R {
        &self.rows
    }

    /// Mutable access to the row source (e.g. after the data set changed).
    pub fn rows_mut(&mut self) -> &mut R {
        &mut self.rows
    }

    /// The undo prompt.
    #[must_use]
    pub fn prompt(&self) -> &UndoPrompt {
        &self.prompt
    }

    /// The gesture classifier.
    #[must_use]
    pub fn classifier(&self) -> &SwipeClassifier<R::Handle> {
        &self.classifier
    }

    /// Rows between a confirmed swipe and removal.
    #[must_use]
    pub fn pending(&self) -> &PendingDismissals<R::Handle> {
        &self.pending
    }

    /// Undo policy.
    #[must_use]
    pub fn undo_policy(&self) -> UndoPolicy {
        self.prompt.coordinator().policy()
    }

    fn apply_swipe(&mut self, swipe: SwipeEvent<R::Handle>) {
        match swipe {
            SwipeEvent::CancelPress { row } => self.animator.cancel_press(row),
            SwipeEvent::Progress {
                row,
                handle,
                offset,
                opacity,
            } => self.animator.set_swipe_progress(row, &handle, offset, opacity),
            SwipeEvent::Dismiss {
                row,
                handle,
                side,
                width,
            } => {
                self.animator
                    .slide_out(row, &handle, side.offset(width), self.animation_duration);
                self.pending.begin(row, handle);
                tracing::debug!(
                    target: "swd.dismiss",
                    row = %row,
                    ?side,
                    in_flight = self.pending.in_flight(),
                    "sliding out"
                );
            }
            SwipeEvent::Cancel { row, handle } => {
                self.animator.slide_back(row, &handle, self.animation_duration);
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Builder
// ---------------------------------------------------------------------------

/// Builder for [`SwipeDismissList`].
pub struct SwipeDismissListBuilder<R: RowSource> {
    rows: Option<R>,
    on_dismiss: Option<DismissCallback>,
    animator: Option<Box<dyn Animator<R::Handle>>>,
    surface: Option<Box<dyn PromptSurface>>,
    scheduler: Option<Box<dyn HideScheduler>>,
    config: DismissConfig,
    layout: PromptLayout,
}

impl<R: RowSource> Default for SwipeDismissListBuilder<R> {
    fn default() -> Self {
        Self {
            rows: None,
            on_dismiss: None,
            animator: None,
            surface: None,
            scheduler: None,
            config: DismissConfig::default(),
            layout: PromptLayout::default(),
        }
    }
}

impl<R: RowSource> fmt::Debug for SwipeDismissListBuilder<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SwipeDismissListBuilder")
            .field("has_rows", &self.rows.is_some())
            .field("has_on_dismiss", &self.on_dismiss.is_some())
            .field("has_animator", &self.animator.is_some())
            .field("has_surface", &self.surface.is_some())
            .field("has_scheduler", &self.scheduler.is_some())
            .field("config", &self.config)
            .finish()
    }
}

impl<R: RowSource> SwipeDismissListBuilder<R> {
    /// The host list.
    #[must_use]
    pub fn rows(mut self, rows: R) -> Self {
        self.rows = Some(rows);
        self
    }

    /// Per-row dismiss callback.
    #[must_use]
    pub fn on_dismiss(
        mut self,
        callback: impl FnMut(RowId) -> Option<Box<dyn Undoable>> + 'static,
    ) -> Self {
        self.on_dismiss = Some(Box::new(callback));
        self
    }

    /// Row animations.
    #[must_use]
    pub fn animator(mut self, animator: impl Animator<R::Handle> + 'static) -> Self {
        self.animator = Some(Box::new(animator));
        self
    }

    /// Where the undo prompt is drawn.
    #[must_use]
    pub fn prompt_surface(mut self, surface: impl PromptSurface + 'static) -> Self {
        self.surface = Some(Box::new(surface));
        self
    }

    /// How auto-hide fires are scheduled.
    #[must_use]
    pub fn scheduler(mut self, scheduler: impl HideScheduler + 'static) -> Self {
        self.scheduler = Some(Box::new(scheduler));
        self
    }

    /// All tunables at once.
    #[must_use]
    pub fn config(mut self, config: DismissConfig) -> Self {
        self.config = config;
        self
    }

    /// Undo policy.
    #[must_use]
    pub fn undo_policy(mut self, policy: UndoPolicy) -> Self {
        self.config.undo_policy = policy;
        self
    }

    /// Swipe direction policy.
    #[must_use]
    pub fn swipe_direction(mut self, direction: SwipeDirection) -> Self {
        self.config.swipe_direction = direction;
        self
    }

    /// Screen metrics for the prompt.
    #[must_use]
    pub fn prompt_layout(mut self, layout: PromptLayout) -> Self {
        self.layout = layout;
        self
    }

    /// Build the list, failing fast if a collaborator is missing or the
    /// configuration is invalid.
    pub fn build(self) -> Result<SwipeDismissList<R>, BuildError> {
        let rows = self.rows.ok_or(BuildError::MissingRowSource)?;
        let on_dismiss = self.on_dismiss.ok_or(BuildError::MissingDismissCallback)?;
        let animator = self.animator.ok_or(BuildError::MissingAnimator)?;
        let surface = self.surface.ok_or(BuildError::MissingPromptSurface)?;
        let scheduler = self.scheduler.ok_or(BuildError::MissingScheduler)?;

        let errors = self.config.validate();
        if !errors.is_empty() {
            return Err(BuildError::InvalidConfig(errors));
        }

        let config = self.config;
        let mut classifier =
            SwipeClassifier::new(config.swipe_config()).with_direction(config.swipe_direction);
        classifier.set_enabled(config.swipe_enabled);

        let prompt =
            UndoPrompt::from_parts(config.undo_coordinator(), surface, scheduler, self.layout);

        tracing::debug!(
            target: "swd.dismiss",
            policy = config.undo_policy.as_str(),
            direction = ?config.swipe_direction,
            "list built"
        );

        Ok(SwipeDismissList {
            rows,
            classifier,
            pending: PendingDismissals::new(),
            animator,
            prompt,
            on_dismiss,
            animation_duration: config.animation_duration(),
        })
    }
}
