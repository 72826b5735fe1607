#![forbid(unsafe_code)]

//! swd public facade crate.
//!
//! Swipe-to-dismiss for vertically scrolling lists, with batched row
//! removal and an undo prompt. This crate re-exports the types an
//! application needs from `swd-core`, `swd-runtime` and `swd-widgets`,
//! and offers a prelude for day-to-day usage.
//!
//! # Wiring a list
//!
//! ```ignore
//! use swd::prelude::*;
//!
//! let mut list = SwipeDismissList::builder()
//!     .rows(UniformRows::new(20, 48.0, 360.0))
//!     .on_dismiss(|row| Some(FnUndoable::new(move || restore(row)).boxed()))
//!     .animator(my_animator)
//!     .prompt_surface(my_prompt)
//!     .scheduler(|delay: Duration, token: HideToken| timers.after(delay, token))
//!     .undo_policy(UndoPolicy::Multi)
//!     .build()?;
//!
//! list.handle_pointer(&event);
//! ```

// --- Core re-exports -------------------------------------------------------

pub use swd_core::{
    DismissSide, GesturePhase, LayoutDirection, Point, PointerEvent, PointerEventKind, PointerId,
    RowId, RowSource, ScrollState, SwipeClassifier, SwipeConfig, SwipeDirection, SwipeEvent,
    UniformRows, Velocity, VelocityTracker,
};

// --- Runtime re-exports ----------------------------------------------------

pub use swd_runtime::undo::DEFAULT_AUTO_HIDE_DELAY;
pub use swd_runtime::{
    AutoHideTimer, ConfigError, DEFAULT_ANIMATION_DURATION, DismissConfig, FnUndoable, HideToken,
    PromptContent, PromptEffect, PromptMessages, UndoCoordinator, UndoPolicy, Undoable,
};

// --- Widget re-exports -----------------------------------------------------

pub use swd_widgets::{
    Animator, BuildError, DismissBatch, DismissCallback, HideScheduler, PendingDismissals,
    PromptGeometry, PromptLayout, PromptSurface, SwipeDismissList, SwipeDismissListBuilder,
    UndoPrompt, UndoPromptBuilder,
};

// --- Errors ----------------------------------------------------------------

pub mod error;

pub use error::{Error, Result};

// --- Config loading --------------------------------------------------------

/// Load and validate a [`DismissConfig`] from disk.
///
/// Files ending in `.json` are parsed as JSON; anything else as TOML.
#[cfg(feature = "config")]
pub fn load_config(path: impl AsRef<std::path::Path>) -> Result<DismissConfig> {
    let path = path.as_ref();
    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    let config = if is_json {
        DismissConfig::from_json_file(path)?
    } else {
        DismissConfig::from_toml_file(path)?
    };
    tracing::debug!(target: "swd.dismiss", path = %path.display(), json = is_json, "config loaded");
    Ok(config.validated()?)
}

// --- Prelude ---------------------------------------------------------------

pub mod prelude {
    pub use crate::{
        Animator, DismissConfig, Error, FnUndoable, HideScheduler, HideToken, PointerEvent,
        PromptContent, PromptGeometry, PromptSurface, Result, RowId, RowSource, ScrollState,
        SwipeDirection, SwipeDismissList, UndoPolicy, Undoable, UniformRows,
    };

    pub use std::time::Duration;

    pub use crate::{core, runtime, widgets};
}

pub use swd_core as core;
pub use swd_runtime as runtime;
pub use swd_widgets as widgets;
