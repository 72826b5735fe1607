#![forbid(unsafe_code)]

//! The undo prompt: an [`UndoCoordinator`] wired to a [`PromptSurface`] and
//! a [`HideScheduler`].
//!
//! # Example
//!
//! ```ignore
//! let mut prompt = UndoPrompt::builder()
//!     .surface(my_snackbar)
//!     .scheduler(|delay, token| timers.after(delay, token))
//!     .config(&config)
//!     .build()?;
//!
//! prompt.batch_dismiss(&[RowId(3)], |row| archive(row));
//! // ... later, from the toolkit:
//! prompt.undo_pressed();
//! prompt.on_auto_hide_elapsed(token);
//! ```

use std::fmt;

use swd_core::RowId;
use swd_runtime::{
    DismissConfig, HideToken, PromptContent, PromptEffect, UndoCoordinator, UndoPolicy, Undoable,
};

use crate::error::BuildError;
use crate::host::{HideScheduler, PromptSurface};
use crate::prompt_layout::PromptLayout;

/// Coordinator plus the surfaces its effects land on.
pub struct UndoPrompt {
    coordinator: UndoCoordinator,
    surface: Box<dyn PromptSurface>,
    scheduler: Box<dyn HideScheduler>,
    layout: PromptLayout,
}

impl fmt::Debug for UndoPrompt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UndoPrompt")
            .field("coordinator", &self.coordinator)
            .field("showing", &self.surface.is_showing())
            .field("layout", &self.layout)
            .finish()
    }
}

impl UndoPrompt {
    /// Wire a coordinator to its surfaces.
    #[must_use]
    pub fn new(
        coordinator: UndoCoordinator,
        surface: impl PromptSurface + 'static,
        scheduler: impl HideScheduler + 'static,
    ) -> Self {
        Self::from_parts(
            coordinator,
            Box::new(surface),
            Box::new(scheduler),
            PromptLayout::default(),
        )
    }

    pub(crate) fn from_parts(
        coordinator: UndoCoordinator,
        surface: Box<dyn PromptSurface>,
        scheduler: Box<dyn HideScheduler>,
        layout: PromptLayout,
    ) -> Self {
        Self {
            coordinator,
            surface,
            scheduler,
            layout,
        }
    }

    /// Start building a prompt.
    #[must_use]
    pub fn builder() -> UndoPromptBuilder {
        UndoPromptBuilder::default()
    }

    /// Set the screen metrics the prompt is placed against.
    #[must_use]
    pub fn with_layout(mut self, layout: PromptLayout) -> Self {
        self.layout = layout;
        self
    }

    // --- Operations ---

    /// Dismiss `rows` through `dismiss` and refresh the prompt.
    pub fn batch_dismiss<F>(&mut self, rows: &[RowId], dismiss: F)
    where
        F: FnMut(RowId) -> Option<Box<dyn Undoable>>,
    {
        let effects = self.coordinator.batch_dismiss(rows, dismiss);
        self.apply(effects);
    }

    /// The undo button was activated.
    pub fn undo_pressed(&mut self) {
        let effects = self.coordinator.undo_pressed();
        self.apply(effects);
    }

    /// The undo button was touched.
    pub fn undo_touched(&mut self) {
        let effects = self.coordinator.undo_touched();
        self.apply(effects);
    }

    /// The user interacted with the list while the prompt is up.
    pub fn pointer_activity(&mut self) {
        if !self.surface.is_showing() {
            return;
        }
        let effects = self.coordinator.pointer_activity();
        self.apply(effects);
    }

    /// A scheduled auto-hide fired.
    pub fn on_auto_hide_elapsed(&mut self, token: HideToken) {
        let effects = self.coordinator.on_auto_hide_elapsed(token);
        self.apply(effects);
    }

    /// Make every pending dismissal permanent and hide the prompt.
    pub fn discard_all(&mut self) {
        let effects = self.coordinator.discard_all();
        self.apply(effects);
    }

    // --- Accessors ---

    /// The coordinator.
    #[must_use]
    pub fn coordinator(&self) -> &UndoCoordinator {
        &self.coordinator
    }

    /// Mutable access to the coordinator (for setters).
    pub fn coordinator_mut(&mut self) -> &mut UndoCoordinator {
        &mut self.coordinator
    }

    /// Whether the surface reports the prompt as shown.
    #[must_use]
    pub fn is_showing(&self) -> bool {
        self.surface.is_showing()
    }

    /// Screen metrics in use.
    #[must_use]
    pub fn layout(&self) -> PromptLayout {
        self.layout
    }

    /// Update screen metrics (e.g. after rotation); applies on next show.
    pub fn set_layout(&mut self, layout: PromptLayout) {
        self.layout = layout;
    }

    fn show(&mut self, content: &PromptContent) {
        let geometry = self.layout.geometry();
        tracing::debug!(
            target: "swd.dismiss",
            message = %content.message,
            width = geometry.width,
            "prompt shown"
        );
        self.surface.show(content, geometry);
    }

    fn apply(&mut self, effects: Vec<PromptEffect>) {
        for effect in effects {
            match effect {
                PromptEffect::Show(content) => self.show(&content),
                // The host may have closed the prompt on its own.
                PromptEffect::Update(content) if !self.surface.is_showing() => {
                    self.show(&content);
                }
                PromptEffect::Update(content) => self.surface.update(&content),
                PromptEffect::Hide => {
                    tracing::debug!(target: "swd.dismiss", "prompt hidden");
                    self.surface.hide();
                }
                PromptEffect::ScheduleHide { delay, token } => {
                    self.scheduler.schedule(delay, token);
                }
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Builder
// ---------------------------------------------------------------------------

/// Builder for [`UndoPrompt`].
#[derive(Default)]
pub struct UndoPromptBuilder {
    surface: Option<Box<dyn PromptSurface>>,
    scheduler: Option<Box<dyn HideScheduler>>,
    policy: Option<UndoPolicy>,
    config: Option<DismissConfig>,
    layout: PromptLayout,
}

impl fmt::Debug for UndoPromptBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UndoPromptBuilder")
            .field("has_surface", &self.surface.is_some())
            .field("has_scheduler", &self.scheduler.is_some())
            .field("policy", &self.policy)
            .finish()
    }
}

impl UndoPromptBuilder {
    /// Where the prompt is drawn.
    #[must_use]
    pub fn surface(mut self, surface: impl PromptSurface + 'static) -> Self {
        self.surface = Some(Box::new(surface));
        self
    }

    /// How auto-hide fires are scheduled.
    #[must_use]
    pub fn scheduler(mut self, scheduler: impl HideScheduler + 'static) -> Self {
        self.scheduler = Some(Box::new(scheduler));
        self
    }

    /// Take policy, messages and delay from `config`.
    #[must_use]
    pub fn config(mut self, config: &DismissConfig) -> Self {
        self.config = Some(config.clone());
        self
    }

    /// Override the undo policy.
    #[must_use]
    pub fn policy(mut self, policy: UndoPolicy) -> Self {
        self.policy = Some(policy);
        self
    }

    /// Screen metrics.
    #[must_use]
    pub fn layout(mut self, layout: PromptLayout) -> Self {
        self.layout = layout;
        self
    }

    /// Build, failing if a collaborator is missing or the config is invalid.
    pub fn build(self) -> Result<UndoPrompt, BuildError> {
        let surface = self.surface.ok_or(BuildError::MissingPromptSurface)?;
        let scheduler = self.scheduler.ok_or(BuildError::MissingScheduler)?;
        let mut config = self.config.unwrap_or_default();
        if let Some(policy) = self.policy {
            config.undo_policy = policy;
        }
        let errors = config.validate();
        if !errors.is_empty() {
            return Err(BuildError::InvalidConfig(errors));
        }
        Ok(UndoPrompt::from_parts(
            config.undo_coordinator(),
            surface,
            scheduler,
            self.layout,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompt_layout::PromptGeometry;
    use std::cell::RefCell;
    use std::rc::Rc;
    use std::time::Duration;
    use swd_runtime::undo::DEFAULT_AUTO_HIDE_DELAY;
    use swd_runtime::{FnUndoable, PromptContent};

    #[derive(Default)]
    struct Screen {
        calls: Vec<String>,
        showing: bool,
    }

    #[derive(Clone, Default)]
    struct FakeSurface(Rc<RefCell<Screen>>);

    impl PromptSurface for FakeSurface {
        fn show(&mut self, content: &PromptContent, geometry: PromptGeometry) {
            let mut s = self.0.borrow_mut();
            s.showing = true;
            s.calls
                .push(format!("show {} [{}] w={}", content.message, content.button, geometry.width));
        }

        fn update(&mut self, content: &PromptContent) {
            self.0
                .borrow_mut()
                .calls
                .push(format!("update {} [{}]", content.message, content.button));
        }

        fn hide(&mut self) {
            let mut s = self.0.borrow_mut();
            s.showing = false;
            s.calls.push("hide".into());
        }

        fn is_showing(&self) -> bool {
            self.0.borrow().showing
        }
    }

    type Timers = Rc<RefCell<Vec<(Duration, HideToken)>>>;

    fn prompt(policy: UndoPolicy) -> (UndoPrompt, FakeSurface, Timers) {
        let surface = FakeSurface::default();
        let timers = Timers::default();
        let sink = timers.clone();
        let prompt = UndoPrompt::builder()
            .surface(surface.clone())
            .scheduler(move |delay: Duration, token: HideToken| sink.borrow_mut().push((delay, token)))
            .policy(policy)
            .build()
            .expect("complete builder");
        (prompt, surface, timers)
    }

    fn undoable() -> Option<Box<dyn Undoable>> {
        Some(FnUndoable::new(|| {}).boxed())
    }

    #[test]
    fn builder_requires_surface_and_scheduler() {
        let err = UndoPrompt::builder().build().unwrap_err();
        assert_eq!(err, BuildError::MissingPromptSurface);
        let err = UndoPrompt::builder()
            .surface(FakeSurface::default())
            .build()
            .unwrap_err();
        assert_eq!(err, BuildError::MissingScheduler);
    }

    #[test]
    fn builder_rejects_invalid_config() {
        let mut config = DismissConfig::default();
        config.auto_hide_delay_ms = 0;
        let err = UndoPrompt::builder()
            .surface(FakeSurface::default())
            .scheduler(|_: Duration, _: HideToken| {})
            .config(&config)
            .build()
            .unwrap_err();
        assert!(matches!(err, BuildError::InvalidConfig(_)));
    }

    #[test]
    fn effects_reach_surface_and_scheduler() {
        let (mut prompt, surface, timers) = prompt(UndoPolicy::Collapsed);
        prompt.batch_dismiss(&[RowId(2), RowId(1)], |_| undoable());
        assert_eq!(
            surface.0.borrow().calls,
            vec!["show 2 items deleted [Undo all] w=330"]
        );
        assert_eq!(*timers.borrow(), vec![(DEFAULT_AUTO_HIDE_DELAY, HideToken(2))]);

        prompt.undo_pressed();
        assert_eq!(surface.0.borrow().calls.last().map(String::as_str), Some("hide"));
        assert!(!prompt.is_showing());
    }

    #[test]
    fn pointer_activity_only_while_showing() {
        let (mut prompt, _surface, timers) = prompt(UndoPolicy::Single);
        prompt.pointer_activity();
        assert!(timers.borrow().is_empty());

        prompt.batch_dismiss(&[RowId(0)], |_| undoable());
        prompt.pointer_activity();
        let timers = timers.borrow();
        assert_eq!(timers.len(), 2);
        assert_eq!(timers[0].1, timers[1].1);
    }

    #[test]
    fn update_reshows_prompt_closed_by_host() {
        let (mut prompt, surface, timers) = prompt(UndoPolicy::Multi);
        prompt.batch_dismiss(&[RowId(1)], |_| undoable());
        surface.0.borrow_mut().showing = false;

        prompt.batch_dismiss(&[RowId(2)], |_| undoable());
        assert!(prompt.is_showing());
        assert_eq!(
            surface.0.borrow().calls,
            vec![
                "show Item deleted [Undo] w=330",
                "show 2 items deleted [Undo] w=330",
            ]
        );
        assert_eq!(timers.borrow().len(), 2);
        assert_eq!(prompt.coordinator().stored_len(), 2);
    }

    #[test]
    fn elapsed_token_hides() {
        let (mut prompt, surface, timers) = prompt(UndoPolicy::Multi);
        prompt.batch_dismiss(&[RowId(0)], |_| undoable());
        let token = timers.borrow()[0].1;
        prompt.undo_touched();
        prompt.on_auto_hide_elapsed(token);
        assert!(prompt.is_showing());

        let token = timers.borrow().last().map(|t| t.1).expect("rescheduled");
        prompt.on_auto_hide_elapsed(token);
        assert!(!prompt.is_showing());
        assert_eq!(surface.0.borrow().calls.last().map(String::as_str), Some("hide"));
    }
}
