// Copyright 2026 the Spindle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Outward events and viewport commands.

/// An event surfaced by the picker, tagged with the column that produced it.
///
/// Events are queued in the order they occur and never coalesced; a rapid
/// sequence of distinct selections surfaces individually.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickerEvent {
    /// A column's selected row changed.
    SelectionChanged {
        /// Column that produced the event.
        column: usize,
        /// The newly selected logical row.
        logical_row: usize,
    },
    /// The user tapped a row.
    RowTapped {
        /// Column that was tapped.
        column: usize,
        /// The logical row under the tap.
        logical_row: usize,
    },
}

/// A fire-and-forget request to the host's scroll views.
///
/// Commands never block and never gate state reads; the picker's selection
/// state is already updated by the time a command is queued.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ViewportCommand {
    /// Scroll a column to an absolute offset.
    SetScrollOffset {
        /// Column to scroll.
        column: usize,
        /// Target offset in strip coordinates.
        offset: f64,
        /// Whether the host should animate the scroll.
        animated: bool,
    },
    /// Enable or disable user scrolling for a column.
    SetScrollEnabled {
        /// Column to toggle.
        column: usize,
        /// New enabled state.
        enabled: bool,
    },
}

/// Command sink for hosts that prefer a push interface over draining
/// [`ViewportCommand`]s.
pub trait Viewport {
    /// Scroll `column` to `offset`.
    fn set_scroll_offset(&mut self, column: usize, offset: f64, animated: bool);

    /// Enable or disable user scrolling for `column`.
    fn set_scroll_enabled(&mut self, column: usize, enabled: bool);
}
