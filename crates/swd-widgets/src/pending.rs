#![forbid(unsafe_code)]

//! Batching of concurrently animating dismissals.
//!
//! Each confirmed swipe goes through two animations: slide out, then
//! collapse. Several rows can be in either phase at once. The batch is
//! released only when the last collapse finishes, so the host removes every
//! row in one pass.
//!
//! # Invariants
//!
//! 1. `in_flight()` counts rows whose collapse has not finished.
//! 2. A batch is released exactly once, when `in_flight()` returns to zero,
//!    and lists rows in descending [`RowId`] order.
//! 3. Completions for unknown rows, or for the wrong phase, are ignored.

use std::cmp::Reverse;
use std::collections::BTreeMap;

use swd_core::RowId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stage {
    SlidingOut,
    Collapsing,
    Collapsed,
}

#[derive(Debug, Clone)]
struct Entry<H> {
    handle: H,
    stage: Stage,
}

/// A released batch: rows in descending order with their handles.
pub type DismissBatch<H> = Vec<(RowId, H)>;

/// Rows between "swipe confirmed" and "removed from the list".
#[derive(Debug, Clone)]
pub struct PendingDismissals<H> {
    entries: BTreeMap<Reverse<RowId>, Entry<H>>,
    in_flight: usize,
}

impl<H> Default for PendingDismissals<H> {
    fn default() -> Self {
        Self {
            entries: BTreeMap::new(),
            in_flight: 0,
        }
    }
}

impl<H> PendingDismissals<H> {
    /// Create an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that `row` started sliding out. Returns `false` (and changes
    /// nothing) if the row is already pending.
    pub fn begin(&mut self, row: RowId, handle: H) -> bool {
        if self.entries.contains_key(&Reverse(row)) {
            return false;
        }
        self.entries.insert(
            Reverse(row),
            Entry {
                handle,
                stage: Stage::SlidingOut,
            },
        );
        self.in_flight += 1;
        true
    }

    /// The slide-out of `row` finished. Returns its handle so the caller can
    /// start the collapse, or `None` if the row was not sliding out.
    pub fn slide_out_finished(&mut self, row: RowId) -> Option<&H> {
        let entry = self.entries.get_mut(&Reverse(row))?;
        if entry.stage != Stage::SlidingOut {
            return None;
        }
        entry.stage = Stage::Collapsing;
        Some(&entry.handle)
    }

    /// The collapse of `row` finished. Returns the whole batch when this was
    /// the last animation in flight.
    pub fn collapse_finished(&mut self, row: RowId) -> Option<DismissBatch<H>> {
        let entry = self.entries.get_mut(&Reverse(row))?;
        if entry.stage != Stage::Collapsing {
            return None;
        }
        entry.stage = Stage::Collapsed;
        self.in_flight -= 1;
        if self.in_flight > 0 {
            return None;
        }
        let batch = std::mem::take(&mut self.entries)
            .into_iter()
            .map(|(Reverse(row), entry)| (row, entry.handle))
            .collect();
        Some(batch)
    }

    /// Whether `row` is anywhere between slide-out and removal.
    #[must_use]
    pub fn contains(&self, row: RowId) -> bool {
        self.entries.contains_key(&Reverse(row))
    }

    /// Rows whose collapse has not finished.
    #[inline]
    #[must_use]
    pub fn in_flight(&self) -> usize {
        self.in_flight
    }

    /// Number of pending rows.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing is pending.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Pending rows, highest first.
    pub fn rows(&self) -> impl Iterator<Item = RowId> + '_ {
        self.entries.keys().map(|Reverse(row)| *row)
    }
}
