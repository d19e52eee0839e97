// Copyright 2026 the Spindle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The per-column selection engine.

use kurbo::Size;

use crate::{
    ColumnExtents, ColumnPhase, ColumnUpdate, ScrollTarget, SelectError, replication_multiplier,
};

/// Selection engine for a single picker column.
///
/// The engine owns the mapping between the *virtual* row space (the logical
/// rows replicated `multiplier` times to fake infinite scrolling) and the
/// *logical* rows of the host's data. On every relevant event it decides
/// which virtual row should be centered, and reports the outcome as a
/// [`ColumnUpdate`] value: the logical row that is now selected plus the
/// scroll request the viewport should execute.
///
/// It does *not* know about any widget/view system. Hosts are expected to
/// wrap this (usually via a multi-column coordinator), feed it drag and
/// resize events, and forward its scroll targets to the actual scroll view.
///
/// Reloads and geometry changes follow a two-phase protocol: [`configure`],
/// [`set_looping`], [`set_row_height`], and [`on_resize`] only mark a
/// recenter as pending; the recenter itself runs when the host explicitly
/// calls [`recenter_if_needed`]. This keeps data queries free of hidden
/// side effects.
///
/// [`configure`]: Self::configure
/// [`set_looping`]: Self::set_looping
/// [`set_row_height`]: Self::set_row_height
/// [`on_resize`]: Self::on_resize
/// [`recenter_if_needed`]: Self::recenter_if_needed
#[derive(Debug, Clone)]
pub struct ColumnEngine {
    row_count: usize,
    looping: bool,
    multiplier: usize,
    row_height: f64,

    selected_virtual_row: Option<usize>,
    /// Logical row to restore on the next recenter, stowed across reloads.
    recenter_target: Option<usize>,
    pending_recenter: bool,
    user_scrolling: bool,

    last_viewport: Option<Size>,
    configured: bool,
}

impl ColumnEngine {
    /// Creates a new, unconfigured engine.
    #[must_use]
    pub fn new() -> Self {
        Self {
            row_count: 0,
            looping: false,
            multiplier: 1,
            row_height: 0.0,
            selected_virtual_row: None,
            recenter_target: None,
            pending_recenter: false,
            user_scrolling: false,
            last_viewport: None,
            configured: false,
        }
    }

    /// Configures the column for a (re)loaded data set.
    ///
    /// Recomputes the replication multiplier, clears the live selection, and
    /// marks a recenter as pending. The previously selected logical row, if
    /// any, is stowed and restored by the next [`Self::recenter_if_needed`]
    /// as long as it is still in range for the new row count.
    ///
    /// `row_count == 0` is legal and leaves the column empty: selection
    /// queries return `None` and every select is rejected. Negative row
    /// heights are clamped to `0.0`.
    pub fn configure(&mut self, row_count: usize, looping: bool, row_height: f64) {
        let previous = self.current_logical_selection();
        self.row_count = row_count;
        self.looping = looping;
        self.multiplier = replication_multiplier(row_count, looping);
        self.row_height = clamp_extent(row_height);
        self.selected_virtual_row = None;
        self.recenter_target = previous;
        self.pending_recenter = true;
        self.user_scrolling = false;
        self.configured = true;
    }

    /// Enables or disables infinite looping.
    ///
    /// Re-runs the multiplier policy and marks a recenter as pending. The
    /// currently selected logical row survives the recenter even though its
    /// virtual row changes with the multiplier.
    pub fn set_looping(&mut self, looping: bool) {
        if !self.configured || looping == self.looping {
            return;
        }
        self.recenter_target = self.current_logical_selection().or(self.recenter_target);
        self.selected_virtual_row = None;
        self.looping = looping;
        self.multiplier = replication_multiplier(self.row_count, looping);
        self.pending_recenter = true;
    }

    /// Sets the uniform row height, clamping negative values to `0.0`.
    ///
    /// A changed height marks a recenter as pending; the selection itself is
    /// untouched (the virtual row is still valid, only its offset moved).
    pub fn set_row_height(&mut self, row_height: f64) {
        let row_height = clamp_extent(row_height);
        if row_height == self.row_height {
            return;
        }
        self.row_height = row_height;
        if self.configured {
            self.pending_recenter = true;
        }
    }

    /// Records a viewport size report.
    ///
    /// Marks a recenter as pending only if the size differs from the last
    /// observed one. Rapid resize reports coalesce: only the latest size is
    /// kept, and at most one recenter results.
    pub fn on_resize(&mut self, new_size: Size) {
        if self.configured && self.last_viewport != Some(new_size) {
            self.pending_recenter = true;
        }
        self.last_viewport = Some(new_size);
    }

    /// Performs the pending recenter, if any.
    ///
    /// Picks the virtual row at the midpoint of the replicated space that
    /// maps to the target logical row — the current selection if present,
    /// else the row stowed by the last reload, else the middle row
    /// `(row_count - 1) / 2` — selects it, and returns the update. Returns
    /// `None` when no recenter is pending or the column is empty; calling
    /// this twice without an intervening reload/resize is a no-op the second
    /// time.
    pub fn recenter_if_needed(&mut self) -> Option<ColumnUpdate> {
        if !self.pending_recenter || self.row_count == 0 {
            return None;
        }
        let target = self
            .current_logical_selection()
            .or(self.recenter_target.filter(|&row| row < self.row_count))
            .unwrap_or((self.row_count - 1) / 2);
        let virtual_row = self.midpoint_virtual_row(target);
        self.selected_virtual_row = Some(virtual_row);
        self.recenter_target = None;
        self.pending_recenter = false;
        Some(ColumnUpdate {
            logical_row: target,
            scroll: ScrollTarget {
                offset: self.aligned_offset(virtual_row),
                animated: false,
            },
        })
    }

    /// Signals that the user started dragging this column.
    pub fn on_drag_begin(&mut self) {
        if self.configured && self.row_count > 0 {
            self.user_scrolling = true;
        }
    }

    /// Settles a finished drag at `raw_offset`.
    ///
    /// Rounds `raw_offset / row_height` to the nearest virtual row, stores it
    /// as the selection, and returns the logical row plus an animated snap
    /// target at the row-aligned offset. Returns `None` for empty or
    /// unconfigured columns and when the row height is degenerate.
    pub fn on_drag_end(&mut self, raw_offset: f64) -> Option<ColumnUpdate> {
        self.user_scrolling = false;
        let virtual_row = self.nearest_virtual_row(raw_offset)?;
        self.selected_virtual_row = Some(virtual_row);
        Some(ColumnUpdate {
            logical_row: virtual_row % self.row_count,
            scroll: ScrollTarget {
                offset: self.aligned_offset(virtual_row),
                animated: true,
            },
        })
    }

    /// Returns the virtual row nearest to `raw_offset` without mutating
    /// anything.
    ///
    /// This is the same rounding [`Self::on_drag_end`] applies; hosts use it
    /// to highlight the geometrically centered row while a scroll is still in
    /// flight. An offset that overshoots the top edge clamps to row 0. The
    /// bottom edge of the replicated space is not clamped.
    #[must_use]
    pub fn nearest_virtual_row(&self, raw_offset: f64) -> Option<usize> {
        if !self.configured || self.row_count == 0 || self.row_height <= 0.0 {
            return None;
        }
        let ratio = raw_offset / self.row_height;
        #[allow(
            clippy::cast_possible_truncation,
            reason = "Negative results are clamped to 0 immediately after the cast"
        )]
        let rounded = ratio.round() as isize;
        Some(rounded.max(0) as usize)
    }

    /// Selects `row` programmatically.
    ///
    /// Validates `row < row_count` (rejecting with [`SelectError::OutOfRange`]
    /// and no state change otherwise), recomputes the centered virtual row
    /// with the same midpoint placement a recenter uses, and returns the
    /// update. The selection change is effective immediately; `animated` is
    /// forwarded to the viewport and never gates state.
    pub fn select_logical_row(
        &mut self,
        row: usize,
        animated: bool,
    ) -> Result<ColumnUpdate, SelectError> {
        if row >= self.row_count {
            return Err(SelectError::OutOfRange {
                row,
                row_count: self.row_count,
            });
        }
        let virtual_row = self.midpoint_virtual_row(row);
        self.selected_virtual_row = Some(virtual_row);
        // An explicit select supersedes any pending recenter; re-running it
        // would land on the same virtual row anyway.
        self.recenter_target = None;
        self.pending_recenter = false;
        Ok(ColumnUpdate {
            logical_row: row,
            scroll: ScrollTarget {
                offset: self.aligned_offset(virtual_row),
                animated,
            },
        })
    }

    /// Returns the selected logical row, or `None` if nothing was ever
    /// selected (or the column is empty).
    #[must_use]
    pub fn current_logical_selection(&self) -> Option<usize> {
        if self.row_count == 0 {
            return None;
        }
        self.selected_virtual_row.map(|v| v % self.row_count)
    }

    /// Returns the selected virtual row, if any.
    ///
    /// Virtual rows are render bookkeeping; selection events only ever carry
    /// logical rows.
    #[must_use]
    pub const fn selected_virtual_row(&self) -> Option<usize> {
        self.selected_virtual_row
    }

    /// Number of logical rows supplied by the host data.
    #[must_use]
    pub const fn row_count(&self) -> usize {
        self.row_count
    }

    /// Whether infinite looping is enabled.
    #[must_use]
    pub const fn looping(&self) -> bool {
        self.looping
    }

    /// The current replication multiplier.
    #[must_use]
    pub const fn multiplier(&self) -> usize {
        self.multiplier
    }

    /// The uniform row height.
    #[must_use]
    pub const fn row_height(&self) -> f64 {
        self.row_height
    }

    /// Number of rows in the replicated virtual space,
    /// `row_count * multiplier`.
    #[must_use]
    pub const fn virtual_row_count(&self) -> usize {
        self.row_count * self.multiplier
    }

    /// The last viewport size reported via [`Self::on_resize`].
    #[must_use]
    pub const fn viewport_size(&self) -> Option<Size> {
        self.last_viewport
    }

    /// Returns `true` for the first and last rows of the virtual strip.
    ///
    /// Edge rows are rendered with extra extent (see
    /// [`Self::edge_row_extent`]) so the true first/last logical rows can
    /// reach the visual center.
    #[must_use]
    pub const fn is_edge_row(&self, virtual_row: usize) -> bool {
        let count = self.virtual_row_count();
        count > 0 && (virtual_row == 0 || virtual_row == count - 1)
    }

    /// The extent an edge row should be rendered with,
    /// `viewport_height / 2 + row_height / 2`.
    #[must_use]
    pub fn edge_row_extent(&self) -> f64 {
        let viewport_height = self.last_viewport.map_or(0.0, |size| size.height);
        viewport_height / 2.0 + self.row_height / 2.0
    }

    /// Returns the extent model for the rendered virtual strip.
    #[must_use]
    pub fn extents(&self) -> ColumnExtents {
        let viewport_height = self.last_viewport.map_or(0.0, |size| size.height);
        ColumnExtents::new(self.virtual_row_count(), self.row_height, viewport_height)
    }

    /// The column's current lifecycle phase.
    #[must_use]
    pub const fn phase(&self) -> ColumnPhase {
        if !self.configured {
            ColumnPhase::Unconfigured
        } else if self.pending_recenter {
            ColumnPhase::Configured
        } else if self.user_scrolling {
            ColumnPhase::Scrolling
        } else {
            ColumnPhase::Centered
        }
    }

    /// Virtual row that puts `target` in the middle of the replicated space.
    ///
    /// Looping columns center on the middle band; non-looping columns have a
    /// single band, so the virtual row is the logical row itself.
    fn midpoint_virtual_row(&self, target: usize) -> usize {
        let mid_band = if self.looping {
            self.multiplier / 2
        } else {
            self.multiplier
        };
        mid_band * self.row_count - (self.row_count - target)
    }

    /// Scroll offset that centers `virtual_row`.
    fn aligned_offset(&self, virtual_row: usize) -> f64 {
        virtual_row as f64 * self.row_height
    }
}

impl Default for ColumnEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Clamp finite negative extents to `0.0`, like the rest of the strip math.
fn clamp_extent(extent: f64) -> f64 {
    debug_assert!(
        extent.is_finite(),
        "row heights must be finite; got {extent:?}"
    );
    if extent.is_sign_negative() { 0.0 } else { extent }
}

#[cfg(test)]
mod tests {
    use kurbo::Size;

    use super::ColumnEngine;
    use crate::{ColumnPhase, SelectError};

    const ROW_HEIGHT: f64 = 32.0;

    fn configured(row_count: usize, looping: bool) -> ColumnEngine {
        let mut engine = ColumnEngine::new();
        engine.configure(row_count, looping, ROW_HEIGHT);
        engine
    }

    #[test]
    fn twelve_row_column_centers_on_the_middle_row() {
        // Months without looping: the default target is (12 - 1) / 2 = 5.
        let mut engine = configured(12, false);
        let update = engine.recenter_if_needed().expect("recenter is pending");
        assert_eq!(update.logical_row, 5);
        assert!(!update.scroll.animated);
        assert_eq!(engine.current_logical_selection(), Some(5));
        // Without looping the virtual row is the logical row.
        assert_eq!(engine.selected_virtual_row(), Some(5));
        assert_eq!(update.scroll.offset, 5.0 * ROW_HEIGHT);
    }

    #[test]
    fn looping_recenter_lands_in_the_middle_band() {
        let mut engine = configured(12, true);
        assert_eq!(engine.multiplier(), 800);
        let update = engine.recenter_if_needed().expect("recenter is pending");
        assert_eq!(update.logical_row, 5);
        let virtual_row = engine.selected_virtual_row().expect("selected");
        assert_eq!(virtual_row, 400 * 12 - (12 - 5));
        assert_eq!(virtual_row % 12, 5);
        assert!(virtual_row < engine.virtual_row_count());
    }

    #[test]
    fn recenter_is_idempotent() {
        let mut engine = configured(12, true);
        engine.recenter_if_needed().expect("first recenter runs");
        let selected = engine.selected_virtual_row();
        assert_eq!(engine.recenter_if_needed(), None);
        assert_eq!(engine.selected_virtual_row(), selected);
    }

    #[test]
    fn drag_end_rounds_to_the_nearest_row_and_reports_modulo() {
        // 100 rows looping: multiplier 200, virtual space 20000 rows.
        let mut engine = configured(100, true);
        assert_eq!(engine.multiplier(), 200);
        let update = engine
            .on_drag_end(5050.0 * ROW_HEIGHT + 9.0)
            .expect("non-empty column");
        assert_eq!(engine.selected_virtual_row(), Some(5050));
        assert_eq!(update.logical_row, 50);
        assert!(update.scroll.animated);
        assert_eq!(update.scroll.offset, 5050.0 * ROW_HEIGHT);
    }

    #[test]
    fn drag_end_overshooting_the_top_edge_clamps_to_row_zero() {
        let mut engine = configured(12, false);
        let update = engine.on_drag_end(-3.0 * ROW_HEIGHT).expect("non-empty");
        assert_eq!(update.logical_row, 0);
        assert_eq!(engine.selected_virtual_row(), Some(0));
    }

    #[test]
    fn drag_end_beyond_the_bottom_of_the_replicated_space_is_not_clamped() {
        // 10 rows without looping: the virtual space ends at row 9, but a
        // drag that rounds past it keeps the unclamped virtual row and still
        // reports modulo row count.
        let mut engine = configured(10, false);
        let update = engine.on_drag_end(12.0 * ROW_HEIGHT).expect("non-empty");
        assert_eq!(engine.selected_virtual_row(), Some(12));
        assert_eq!(update.logical_row, 2);
    }

    #[test]
    fn select_round_trips_for_every_valid_row() {
        for looping in [false, true] {
            let mut engine = configured(12, looping);
            for row in 0..12 {
                engine.select_logical_row(row, false).expect("in range");
                assert_eq!(engine.current_logical_selection(), Some(row));
                let virtual_row = engine.selected_virtual_row().expect("selected");
                assert!(virtual_row < engine.virtual_row_count());
            }
        }
    }

    #[test]
    fn out_of_range_select_is_rejected_without_mutation() {
        let mut engine = configured(12, false);
        engine.select_logical_row(3, false).expect("in range");
        let err = engine.select_logical_row(12, false).unwrap_err();
        assert_eq!(
            err,
            SelectError::OutOfRange {
                row: 12,
                row_count: 12
            }
        );
        assert_eq!(engine.current_logical_selection(), Some(3));
    }

    #[test]
    fn empty_column_never_selects() {
        let mut engine = configured(0, true);
        assert_eq!(engine.recenter_if_needed(), None);
        assert_eq!(engine.on_drag_end(100.0), None);
        assert!(engine.select_logical_row(0, false).is_err());
        assert_eq!(engine.current_logical_selection(), None);
    }

    #[test]
    fn enabling_looping_preserves_the_logical_selection() {
        let mut engine = configured(12, false);
        engine.recenter_if_needed().expect("recenter runs");
        engine.select_logical_row(9, false).expect("in range");
        let before = engine.current_logical_selection();

        engine.set_looping(true);
        assert_eq!(engine.multiplier(), 800);
        assert_eq!(engine.phase(), ColumnPhase::Configured);

        let update = engine.recenter_if_needed().expect("recenter is pending");
        assert_eq!(Some(update.logical_row), before);
        assert_eq!(engine.current_logical_selection(), before);
        // The virtual row moved into the middle band even though the logical
        // selection did not change.
        assert_ne!(engine.selected_virtual_row(), Some(9));
    }

    #[test]
    fn reload_restores_a_still_valid_selection_and_drops_a_stale_one() {
        let mut engine = configured(12, false);
        engine.select_logical_row(9, false).expect("in range");

        engine.configure(12, false, ROW_HEIGHT);
        let update = engine.recenter_if_needed().expect("recenter is pending");
        assert_eq!(update.logical_row, 9);

        // Shrinking the data below the stowed row falls back to the middle.
        engine.configure(4, false, ROW_HEIGHT);
        let update = engine.recenter_if_needed().expect("recenter is pending");
        assert_eq!(update.logical_row, 1);
    }

    #[test]
    fn resize_recenters_only_when_the_size_changes() {
        let mut engine = configured(12, false);
        engine.recenter_if_needed().expect("recenter runs");

        engine.on_resize(Size::new(320.0, 216.0));
        assert_eq!(engine.phase(), ColumnPhase::Configured);
        let update = engine.recenter_if_needed().expect("recenter is pending");
        assert_eq!(update.logical_row, 5);

        // Same size again: nothing to do.
        engine.on_resize(Size::new(320.0, 216.0));
        assert_eq!(engine.recenter_if_needed(), None);

        // Rapid resizes coalesce into a single recenter at the latest size.
        engine.on_resize(Size::new(480.0, 216.0));
        engine.on_resize(Size::new(568.0, 216.0));
        engine.recenter_if_needed().expect("one recenter");
        assert_eq!(engine.recenter_if_needed(), None);
        assert_eq!(engine.viewport_size(), Some(Size::new(568.0, 216.0)));
    }

    #[test]
    fn row_height_change_keeps_the_virtual_row_but_moves_the_offset() {
        let mut engine = configured(12, false);
        engine.recenter_if_needed().expect("recenter runs");
        let virtual_row = engine.selected_virtual_row().expect("selected");

        engine.set_row_height(44.0);
        let update = engine.recenter_if_needed().expect("recenter is pending");
        assert_eq!(engine.selected_virtual_row(), Some(virtual_row));
        assert_eq!(update.scroll.offset, virtual_row as f64 * 44.0);
    }

    #[test]
    fn explicit_select_supersedes_a_pending_recenter() {
        let mut engine = configured(12, false);
        engine.select_logical_row(7, false).expect("in range");
        assert_eq!(engine.recenter_if_needed(), None);
        assert_eq!(engine.current_logical_selection(), Some(7));
    }

    #[test]
    fn phases_walk_the_lifecycle() {
        let mut engine = ColumnEngine::new();
        assert_eq!(engine.phase(), ColumnPhase::Unconfigured);

        engine.configure(12, false, ROW_HEIGHT);
        assert_eq!(engine.phase(), ColumnPhase::Configured);

        engine.recenter_if_needed().expect("recenter runs");
        assert_eq!(engine.phase(), ColumnPhase::Centered);

        engine.on_drag_begin();
        assert_eq!(engine.phase(), ColumnPhase::Scrolling);

        engine.on_drag_end(2.0 * ROW_HEIGHT).expect("non-empty");
        assert_eq!(engine.phase(), ColumnPhase::Centered);
    }

    #[test]
    fn edge_rows_are_the_strip_ends() {
        let mut engine = configured(10, false);
        engine.on_resize(Size::new(320.0, 216.0));
        assert!(engine.is_edge_row(0));
        assert!(engine.is_edge_row(9));
        assert!(!engine.is_edge_row(1));
        assert!(!engine.is_edge_row(10));
        assert_eq!(engine.edge_row_extent(), 216.0 / 2.0 + ROW_HEIGHT / 2.0);
    }

    #[test]
    fn negative_row_height_is_clamped() {
        let mut engine = ColumnEngine::new();
        engine.configure(12, false, -10.0);
        assert_eq!(engine.row_height(), 0.0);
        // Degenerate height also disables drag math.
        assert_eq!(engine.nearest_virtual_row(50.0), None);
    }
}
