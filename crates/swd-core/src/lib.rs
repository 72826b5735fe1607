#![forbid(unsafe_code)]

//! Core: pointer events, row lookup, velocity tracking, and swipe gesture
//! classification.
//!
//! # Role in swd
//! `swd-core` is the input layer. It knows nothing about undo or animation;
//! it turns a raw pointer stream into [`gesture::SwipeEvent`] decisions that
//! the widget layer (`swd-widgets`) acts on.
//!
//! # Primary responsibilities
//! - **PointerEvent / ScrollState**: canonical input from the host toolkit.
//! - **RowSource**: the host list's hit-testing and viewport metrics.
//! - **VelocityTracker**: fling velocity estimation.
//! - **SwipeClassifier**: the tracking → swiping → release state machine.

pub mod event;
pub mod geometry;
pub mod gesture;
pub mod rows;
pub mod velocity;

pub use event::{PointerEvent, PointerEventKind, PointerId, ScrollState};
pub use geometry::{LayoutDirection, Point, RowId};
pub use gesture::{
    DismissSide, GesturePhase, SwipeClassifier, SwipeConfig, SwipeDirection, SwipeEvent,
};
pub use rows::{RowSource, UniformRows};
pub use velocity::{Velocity, VelocityTracker};
