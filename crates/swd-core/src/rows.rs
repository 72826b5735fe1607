#![forbid(unsafe_code)]

//! The hosting list, as seen by the gesture layer.

use crate::geometry::{LayoutDirection, Point, RowId};

/// Row lookup and viewport metrics supplied by the host list.
///
/// `Handle` is whatever the host uses to address an on-screen row (a view
/// pointer, a node id, an index into a recycler pool). It is cloned into
/// gesture sessions and pending dismissals and handed back to the animator.
pub trait RowSource {
    /// Host-side handle to an on-screen row.
    type Handle: Clone;

    /// Hit-test a point in list coordinates.
    fn row_at(&self, point: Point) -> Option<(RowId, Self::Handle)>;

    /// Resolve the current on-screen handle of a row, if it is visible.
    fn handle_for(&self, row: RowId) -> Option<Self::Handle>;

    /// Total number of rows in the list.
    fn row_count(&self) -> usize;

    /// Width of the list viewport in logical pixels.
    fn viewport_width(&self) -> f32;

    /// Reading direction of the list.
    fn layout_direction(&self) -> LayoutDirection {
        LayoutDirection::Ltr
    }
}

impl<R: RowSource + ?Sized> RowSource for &R {
    type Handle = R::Handle;

    fn row_at(&self, point: Point) -> Option<(RowId, Self::Handle)> {
        (**self).row_at(point)
    }

    fn handle_for(&self, row: RowId) -> Option<Self::Handle> {
        (**self).handle_for(row)
    }

    fn row_count(&self) -> usize {
        (**self).row_count()
    }

    fn viewport_width(&self) -> f32 {
        (**self).viewport_width()
    }

    fn layout_direction(&self) -> LayoutDirection {
        (**self).layout_direction()
    }
}

/// A list of equally tall rows stacked from `y = 0`.
///
/// Handles are the row identifiers themselves. Useful for hosts with a
/// uniform row height and for tests.
#[derive(Debug, Clone, PartialEq)]
pub struct UniformRows {
    /// Number of rows.
    pub count: usize,
    /// Height of each row.
    pub row_height: f32,
    /// Viewport width.
    pub width: f32,
    /// Reading direction.
    pub direction: LayoutDirection,
}

impl UniformRows {
    /// Create a left-to-right uniform list.
    #[must_use]
    pub const fn new(count: usize, row_height: f32, width: f32) -> Self {
        Self {
            count,
            row_height,
            width,
            direction: LayoutDirection::Ltr,
        }
    }

    /// Set the reading direction.
    #[must_use]
    pub const fn with_direction(mut self, direction: LayoutDirection) -> Self {
        self.direction = direction;
        self
    }
}

impl RowSource for UniformRows {
    type Handle = RowId;

    fn row_at(&self, point: Point) -> Option<(RowId, RowId)> {
        if self.row_height <= 0.0
            || point.y < 0.0
            || point.x < 0.0
            || point.x >= self.width
        {
            return None;
        }
        let index = (point.y / self.row_height) as usize;
        (index < self.count).then_some((RowId(index), RowId(index)))
    }

    fn handle_for(&self, row: RowId) -> Option<RowId> {
        (row.0 < self.count).then_some(row)
    }

    fn row_count(&self) -> usize {
        self.count
    }

    fn viewport_width(&self) -> f32 {
        self.width
    }

    fn layout_direction(&self) -> LayoutDirection {
        self.direction
    }
}
