#![forbid(unsafe_code)]

//! The reversible result of dismissing one row.
//!
//! The per-row dismiss callback returns an [`Undoable`] when the removal can
//! be taken back. The coordinator owns it from then on and consumes it
//! exactly once: either through [`Undoable::undo`] (the user tapped undo) or
//! through [`Undoable::discard`] (undo is no longer possible).

use std::fmt;

/// A dismissal that can still be reversed.
pub trait Undoable {
    /// Text shown in the undo prompt while this is the most recent
    /// dismissal. `None` falls back to the configured singular message.
    fn title(&self) -> Option<&str> {
        None
    }

    /// Reverse the dismissal.
    fn undo(self: Box<Self>);

    /// Make the dismissal permanent. Called instead of [`undo`](Self::undo)
    /// when the prompt times out, a newer SINGLE dismissal supersedes this
    /// one, or the host discards explicitly.
    fn discard(self: Box<Self>) {}
}

impl fmt::Debug for dyn Undoable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Undoable")
            .field("title", &self.title())
            .finish()
    }
}

/// Callback type for reversing a dismissal.
pub type UndoFn = Box<dyn FnOnce()>;
/// Callback type for finalizing a dismissal.
pub type DiscardFn = Box<dyn FnOnce()>;

/// Closure-backed [`Undoable`].
///
/// ```
/// use swd_runtime::undo::FnUndoable;
///
/// let undo = FnUndoable::new(|| println!("restored"))
///     .with_title("Mail archived")
///     .with_discard(|| println!("archived for good"));
/// # let _ = undo;
/// ```
pub struct FnUndoable {
    title: Option<String>,
    undo: UndoFn,
    discard: Option<DiscardFn>,
}

impl fmt::Debug for FnUndoable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnUndoable")
            .field("title", &self.title)
            .field("has_discard", &self.discard.is_some())
            .finish()
    }
}

impl FnUndoable {
    /// Create an undoable that runs `undo` when reversed.
    #[must_use]
    pub fn new(undo: impl FnOnce() + 'static) -> Self {
        Self {
            title: None,
            undo: Box::new(undo),
            discard: None,
        }
    }

    /// Set the prompt title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Run `discard` when the dismissal becomes permanent.
    #[must_use]
    pub fn with_discard(mut self, discard: impl FnOnce() + 'static) -> Self {
        self.discard = Some(Box::new(discard));
        self
    }

    /// Box for returning from a dismiss callback.
    #[must_use]
    pub fn boxed(self) -> Box<dyn Undoable> {
        Box::new(self)
    }
}

impl Undoable for FnUndoable {
    fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    fn undo(self: Box<Self>) {
        (self.undo)();
    }

    fn discard(self: Box<Self>) {
        if let Some(discard) = self.discard {
            discard();
        }
    }
}
