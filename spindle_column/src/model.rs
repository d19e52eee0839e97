// Copyright 2026 the Spindle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared value types for the column engine.

use thiserror::Error;

/// Returns the replication multiplier for a column.
///
/// The multiplier is how many times the logical rows are duplicated to build
/// the virtual row space that simulates infinite scrolling. Columns that do
/// not loop always get a multiplier of 1. Looping columns get a multiplier
/// large enough that a user cannot plausibly scroll past either end of the
/// replicated space within a session, while keeping the row space small for
/// columns with many rows:
///
/// | `row_count` | multiplier |
/// |---|---|
/// | > 100 | 100 |
/// | 51–100 | 200 |
/// | 26–50 | 400 |
/// | ≤ 25 | 800 |
///
/// The result is deterministic in its inputs.
#[must_use]
pub const fn replication_multiplier(row_count: usize, looping: bool) -> usize {
    if !looping {
        1
    } else if row_count > 100 {
        100
    } else if row_count > 50 {
        200
    } else if row_count > 25 {
        400
    } else {
        800
    }
}

/// Where the engine wants the viewport scrolled, in strip coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollTarget {
    /// Target scroll offset, `virtual_row * row_height`.
    pub offset: f64,
    /// Whether the host should animate the scroll. Selection state is updated
    /// before any animation runs; this flag is purely a viewport request.
    pub animated: bool,
}

/// Outcome of an engine operation that moved the selection.
///
/// The virtual row the engine settled on is an implementation detail; only
/// the logical row is reported outward, together with the scroll command the
/// viewport should execute.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColumnUpdate {
    /// The newly selected logical row.
    pub logical_row: usize,
    /// The viewport scroll request that aligns the selected row.
    pub scroll: ScrollTarget,
}

/// Lifecycle of a column between data changes and user scrolls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnPhase {
    /// [`ColumnEngine::configure`] has never been called.
    ///
    /// [`ColumnEngine::configure`]: crate::ColumnEngine::configure
    Unconfigured,
    /// Configured, with a recenter pending (after a reload, a geometry
    /// change, or a viewport resize).
    Configured,
    /// At rest on a centered row.
    Centered,
    /// The user is dragging; ends with the next drag-end event.
    Scrolling,
}

/// Error returned when a requested logical row cannot be selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SelectError {
    /// The requested row is outside `0..row_count`. An empty column rejects
    /// every row.
    #[error("logical row {row} is out of range for a column with {row_count} rows")]
    OutOfRange {
        /// The logical row that was requested.
        row: usize,
        /// The number of logical rows in the column.
        row_count: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::replication_multiplier;

    #[test]
    fn multiplier_matches_the_policy_table() {
        assert_eq!(replication_multiplier(1000, true), 100);
        assert_eq!(replication_multiplier(101, true), 100);
        assert_eq!(replication_multiplier(100, true), 200);
        assert_eq!(replication_multiplier(60, true), 200);
        assert_eq!(replication_multiplier(51, true), 200);
        assert_eq!(replication_multiplier(50, true), 400);
        assert_eq!(replication_multiplier(26, true), 400);
        assert_eq!(replication_multiplier(25, true), 800);
        assert_eq!(replication_multiplier(12, true), 800);
        assert_eq!(replication_multiplier(0, true), 800);
    }

    #[test]
    fn multiplier_is_one_without_looping() {
        for rows in [0, 12, 60, 100, 1000] {
            assert_eq!(replication_multiplier(rows, false), 1);
        }
    }
}
