#![forbid(unsafe_code)]

//! Undo for dismissed rows.
//!
//! A dismissed row may leave behind an [`Undoable`]. The
//! [`UndoCoordinator`] stores these according to an [`UndoPolicy`], keeps
//! the undo prompt's text in sync, and makes them permanent when the
//! [`AutoHideTimer`] runs out.
//!
//! # Architecture
//!
//! ```text
//!   batch_dismiss(ids) ──► dismiss callback ──► Undoable ──┐
//!                                                          ▼
//!   undo_pressed() ◄──────── prompt ◄─── PromptEffect ── UndoCoordinator
//!   on_auto_hide_elapsed(token) ◄── host timer ◄── ScheduleHide ──┘
//! ```
//!
//! | Policy      | stored | one tap undoes     |
//! |-------------|--------|--------------------|
//! | `Single`    | ≤ 1    | it                 |
//! | `Multi`     | any    | the newest         |
//! | `Collapsed` | any    | all, newest first  |
//!
//! # Module Structure
//!
//! - [`undoable`]: the [`Undoable`] trait and [`FnUndoable`]
//! - [`policy`]: [`UndoPolicy`]
//! - [`auto_hide`]: [`AutoHideTimer`] and [`HideToken`]
//! - [`coordinator`]: [`UndoCoordinator`] and its [`PromptEffect`]s

pub mod auto_hide;
pub mod coordinator;
pub mod policy;
pub mod undoable;

pub use auto_hide::{AutoHideTimer, DEFAULT_AUTO_HIDE_DELAY, HideToken};
pub use coordinator::{
    DEFAULT_DELETE_MESSAGE, DEFAULT_DELETE_MULTIPLE_MESSAGE, DEFAULT_UNDO_ALL_LABEL,
    DEFAULT_UNDO_LABEL, PromptContent, PromptEffect, PromptMessages, UndoCoordinator,
};
pub use policy::UndoPolicy;
pub use undoable::{DiscardFn, FnUndoable, UndoFn, Undoable};
