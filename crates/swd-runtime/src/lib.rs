#![forbid(unsafe_code)]

//! Runtime: undo coordination, auto-hide timing and configuration.
//!
//! # Role in swd
//! `swd-runtime` decides what happens to rows once they are gone: which
//! dismissals can still be undone, what the undo prompt says, and when the
//! dismissals become permanent. It is driven by `swd-widgets` and never
//! talks to a toolkit itself; every operation returns
//! [`undo::PromptEffect`]s.
//!
//! # Primary responsibilities
//! - **UndoCoordinator**: stores undoables per [`undo::UndoPolicy`].
//! - **AutoHideTimer**: token-based invalidation of scheduled hides.
//! - **DismissConfig**: every tunable in one loadable struct.

pub mod config;
pub mod undo;

pub use config::{ConfigError, DEFAULT_ANIMATION_DURATION, DismissConfig};
pub use undo::{
    AutoHideTimer, FnUndoable, HideToken, PromptContent, PromptEffect, PromptMessages,
    UndoCoordinator, UndoPolicy, Undoable,
};
