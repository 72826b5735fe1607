#![forbid(unsafe_code)]

//! Widgets: the swipe-to-dismiss list and its undo prompt.
//!
//! # Role in swd
//! `swd-widgets` connects the gesture layer (`swd-core`) and the undo layer
//! (`swd-runtime`) to a host toolkit through three small traits:
//! [`Animator`], [`PromptSurface`] and [`HideScheduler`].
//!
//! # Primary responsibilities
//! - **SwipeDismissList**: routes pointer events, animations and batches.
//! - **PendingDismissals**: in-flight counting and descending batches.
//! - **UndoPrompt**: applies coordinator effects to the prompt surface.
//! - **PromptLayout**: prompt size buckets by screen width.

pub mod dismiss_list;
pub mod error;
pub mod host;
pub mod pending;
pub mod prompt_layout;
pub mod undo_prompt;

pub use dismiss_list::{DismissCallback, SwipeDismissList, SwipeDismissListBuilder};
pub use error::BuildError;
pub use host::{Animator, HideScheduler, PromptSurface};
pub use pending::{DismissBatch, PendingDismissals};
pub use prompt_layout::{PromptGeometry, PromptLayout};
pub use undo_prompt::{UndoPrompt, UndoPromptBuilder};
