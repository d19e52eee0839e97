// Copyright 2026 the Spindle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The multi-column coordinator.

use std::borrow::Cow;

use kurbo::Size;
use log::{debug, trace};
use smallvec::SmallVec;
use thiserror::Error;

use spindle_column::{ColumnEngine, ColumnExtents, ColumnPhase, SelectError};

use crate::{
    ColumnLayout, DataProvider, PickerConfig, PickerEvent, RowRenderer, Viewport, ViewportCommand,
};

/// Error returned by coordinator operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PickerError {
    /// The requested column is outside `0..column_count`.
    #[error("column {column} is out of range for a picker with {column_count} columns")]
    ColumnOutOfRange {
        /// The column that was requested.
        column: usize,
        /// The number of columns in the picker.
        column_count: usize,
    },
    /// A per-column selection failed.
    #[error(transparent)]
    Select(#[from] SelectError),
}

/// A multi-column wheel picker, minus the rendering.
///
/// The picker owns one [`ColumnEngine`] per column and mediates between the
/// host-side collaborators ([`DataProvider`], [`RowRenderer`], the scroll
/// viewport) and the engines. Selection changes from any column surface as
/// [`PickerEvent`]s tagged with the producing column, in order and
/// uncoalesced; scroll requests surface as [`ViewportCommand`]s, either
/// drained by the host or pushed into a [`Viewport`] implementation.
///
/// All operations are synchronous and run on the thread that owns the UI
/// update cycle. [`Self::rebuild_columns`] runs to completion before
/// returning, so no other operation can observe a partially rebuilt column
/// list.
#[derive(Debug, Default)]
pub struct Picker {
    config: PickerConfig,
    engines: Vec<ColumnEngine>,
    events: SmallVec<[PickerEvent; 4]>,
    commands: Vec<ViewportCommand>,
}

impl Picker {
    /// Creates a picker with the given configuration and no columns.
    ///
    /// Call [`Self::rebuild_columns`] with a [`DataProvider`] to populate it.
    #[must_use]
    pub fn new(config: PickerConfig) -> Self {
        Self {
            config,
            engines: Vec::new(),
            events: SmallVec::new(),
            commands: Vec::new(),
        }
    }

    /// The current configuration.
    #[must_use]
    pub const fn config(&self) -> &PickerConfig {
        &self.config
    }

    /// Number of columns built by the last [`Self::rebuild_columns`].
    #[must_use]
    pub fn column_count(&self) -> usize {
        self.engines.len()
    }

    /// Rebuilds the column list from the provider.
    ///
    /// Destroys every existing engine (selections do not survive), creates
    /// one engine per provider column configured from the provider's row
    /// count and the current configuration, and queues a scroll-enabled
    /// command per column. Empty columns get scrolling disabled regardless of
    /// the enabled flag.
    pub fn rebuild_columns<P: DataProvider + ?Sized>(&mut self, provider: &P) {
        let column_count = provider.column_count();
        debug!("rebuilding picker columns: {column_count}");
        self.engines.clear();
        for column in 0..column_count {
            let row_count = provider.row_count(column);
            let mut engine = ColumnEngine::new();
            engine.configure(row_count, self.config.looping, self.config.row_height);
            self.commands.push(ViewportCommand::SetScrollEnabled {
                column,
                enabled: self.config.enabled && row_count > 0,
            });
            self.engines.push(engine);
        }
    }

    /// Runs every column's pending recenter.
    ///
    /// Columns that recenter emit a [`PickerEvent::SelectionChanged`] and an
    /// unanimated scroll command; columns with nothing pending are left
    /// alone. Idempotent until the next reload/resize/geometry change.
    pub fn recenter_if_needed(&mut self) {
        for (column, engine) in self.engines.iter_mut().enumerate() {
            if let Some(update) = engine.recenter_if_needed() {
                trace!("column {column}: recentered on row {}", update.logical_row);
                self.events.push(PickerEvent::SelectionChanged {
                    column,
                    logical_row: update.logical_row,
                });
                self.commands.push(ViewportCommand::SetScrollOffset {
                    column,
                    offset: update.scroll.offset,
                    animated: update.scroll.animated,
                });
            }
        }
    }

    /// Returns the selected logical row of `column`, or `None` if the column
    /// has no selection yet.
    pub fn selected_row(&self, column: usize) -> Result<Option<usize>, PickerError> {
        Ok(self.engine(column)?.current_logical_selection())
    }

    /// Selects `row` in `column` programmatically.
    ///
    /// The selection event is emitted synchronously, before any viewport
    /// animation runs.
    pub fn select_row(
        &mut self,
        column: usize,
        row: usize,
        animated: bool,
    ) -> Result<(), PickerError> {
        let update = self.engine_mut(column)?.select_logical_row(row, animated)?;
        trace!("column {column}: selected row {}", update.logical_row);
        self.events.push(PickerEvent::SelectionChanged {
            column,
            logical_row: update.logical_row,
        });
        self.commands.push(ViewportCommand::SetScrollOffset {
            column,
            offset: update.scroll.offset,
            animated: update.scroll.animated,
        });
        Ok(())
    }

    /// Enables or disables looping on every column.
    ///
    /// Each engine re-runs its multiplier policy and marks itself
    /// recenter-pending; run [`Self::recenter_if_needed`] afterwards.
    pub fn set_looping_enabled(&mut self, looping: bool) {
        self.config.looping = looping;
        for engine in &mut self.engines {
            engine.set_looping(looping);
        }
    }

    /// Sets the row height on every column.
    pub fn set_row_height(&mut self, row_height: f64) {
        self.config.row_height = row_height;
        for engine in &mut self.engines {
            engine.set_row_height(row_height);
        }
    }

    /// Enables or disables user scrolling, re-issuing the per-column
    /// scroll-enabled commands. Empty columns stay disabled.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.config.enabled = enabled;
        for (column, engine) in self.engines.iter().enumerate() {
            self.commands.push(ViewportCommand::SetScrollEnabled {
                column,
                enabled: enabled && engine.row_count() > 0,
            });
        }
    }

    /// Reports that the user started dragging `column`.
    pub fn on_drag_begin(&mut self, column: usize) -> Result<(), PickerError> {
        self.engine_mut(column)?.on_drag_begin();
        Ok(())
    }

    /// Reports that a drag on `column` ended at `raw_offset`.
    ///
    /// Emits the resulting selection and queues the animated snap command.
    /// A drag-end on an empty column is accepted and does nothing.
    pub fn on_drag_end(&mut self, column: usize, raw_offset: f64) -> Result<(), PickerError> {
        if let Some(update) = self.engine_mut(column)?.on_drag_end(raw_offset) {
            trace!("column {column}: drag settled on row {}", update.logical_row);
            self.events.push(PickerEvent::SelectionChanged {
                column,
                logical_row: update.logical_row,
            });
            self.commands.push(ViewportCommand::SetScrollOffset {
                column,
                offset: update.scroll.offset,
                animated: update.scroll.animated,
            });
        }
        Ok(())
    }

    /// Reports a viewport size change to every column.
    ///
    /// Engines compare against the last observed size, so repeated reports
    /// of the same size are free and rapid resizes coalesce to the latest.
    pub fn on_resize(&mut self, new_size: Size) {
        for engine in &mut self.engines {
            engine.on_resize(new_size);
        }
    }

    /// Reports a tap on a rendered (virtual) row.
    ///
    /// Emits [`PickerEvent::RowTapped`] with the logical row and selects it
    /// with an animated scroll, so a tap behaves like picking the row. Taps
    /// on empty columns are ignored.
    pub fn on_row_tapped(&mut self, column: usize, virtual_row: usize) -> Result<(), PickerError> {
        let row_count = self.engine(column)?.row_count();
        if row_count == 0 {
            return Ok(());
        }
        let logical_row = virtual_row % row_count;
        self.events.push(PickerEvent::RowTapped { column, logical_row });
        self.select_row(column, logical_row, true)
    }

    /// The logical row currently nearest the center of `column` at
    /// `raw_offset`, for live highlighting while a scroll is in flight.
    pub fn centered_row(&self, column: usize, raw_offset: f64) -> Result<Option<usize>, PickerError> {
        let engine = self.engine(column)?;
        Ok(engine
            .nearest_virtual_row(raw_offset)
            .map(|virtual_row| virtual_row % engine.row_count()))
    }

    /// Title for a rendered (virtual) row, resolved through the provider.
    ///
    /// Returns `None` for empty columns.
    pub fn row_title<'p, P: DataProvider + ?Sized>(
        &self,
        provider: &'p P,
        column: usize,
        virtual_row: usize,
    ) -> Result<Option<Cow<'p, str>>, PickerError> {
        let row_count = self.engine(column)?.row_count();
        if row_count == 0 {
            return Ok(None);
        }
        Ok(Some(provider.row_title(column, virtual_row % row_count)))
    }

    /// Renders a virtual row through the host renderer.
    ///
    /// Maps the virtual row to its logical row, computes the highlight state
    /// from the column's selection, restyles the column label, and returns
    /// the built view. `None` for empty columns and rows past the end of the
    /// virtual strip.
    pub fn render_row<R: RowRenderer>(
        &self,
        renderer: &mut R,
        column: usize,
        virtual_row: usize,
    ) -> Result<Option<R::View>, PickerError> {
        let engine = self.engine(column)?;
        if engine.row_count() == 0 || virtual_row >= engine.virtual_row_count() {
            return Ok(None);
        }
        let logical_row = virtual_row % engine.row_count();
        let highlighted = engine.selected_virtual_row() == Some(virtual_row);
        renderer.style_label(column, highlighted);
        Ok(Some(renderer.render(column, logical_row, highlighted)))
    }

    /// Number of rows in `column`'s replicated virtual strip.
    pub fn virtual_row_count(&self, column: usize) -> Result<usize, PickerError> {
        Ok(self.engine(column)?.virtual_row_count())
    }

    /// Whether `virtual_row` is one of `column`'s oversized edge rows.
    pub fn is_edge_row(&self, column: usize, virtual_row: usize) -> Result<bool, PickerError> {
        Ok(self.engine(column)?.is_edge_row(virtual_row))
    }

    /// Strip geometry for rendering `column`.
    pub fn column_extents(&self, column: usize) -> Result<ColumnExtents, PickerError> {
        Ok(self.engine(column)?.extents())
    }

    /// Lifecycle phase of `column`.
    pub fn column_phase(&self, column: usize) -> Result<ColumnPhase, PickerError> {
        Ok(self.engine(column)?.phase())
    }

    /// Resolves the configured width policy for the current column count.
    #[must_use]
    pub fn column_layout(&self, total_width: f64) -> Vec<ColumnLayout> {
        self.config.column_layout(self.engines.len(), total_width)
    }

    /// Drains the queued events, oldest first.
    pub fn take_events(&mut self) -> Vec<PickerEvent> {
        self.events.drain(..).collect()
    }

    /// Drains the queued viewport commands, oldest first.
    pub fn take_commands(&mut self) -> Vec<ViewportCommand> {
        std::mem::take(&mut self.commands)
    }

    /// Pushes the queued viewport commands into `viewport`, draining them.
    pub fn flush_commands<V: Viewport>(&mut self, viewport: &mut V) {
        for command in self.commands.drain(..) {
            match command {
                ViewportCommand::SetScrollOffset {
                    column,
                    offset,
                    animated,
                } => viewport.set_scroll_offset(column, offset, animated),
                ViewportCommand::SetScrollEnabled { column, enabled } => {
                    viewport.set_scroll_enabled(column, enabled);
                }
            }
        }
    }

    fn engine(&self, column: usize) -> Result<&ColumnEngine, PickerError> {
        self.engines.get(column).ok_or(PickerError::ColumnOutOfRange {
            column,
            column_count: self.engines.len(),
        })
    }

    fn engine_mut(&mut self, column: usize) -> Result<&mut ColumnEngine, PickerError> {
        let column_count = self.engines.len();
        self.engines
            .get_mut(column)
            .ok_or(PickerError::ColumnOutOfRange {
                column,
                column_count,
            })
    }
}
