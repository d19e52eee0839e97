// Copyright 2026 the Spindle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=spindle_picker --heading-base-level=0

//! Spindle Picker: a multi-column wheel-picker core, minus the rendering.
//!
//! This crate coordinates one `spindle_column` selection engine per column
//! and mediates the host-facing collaborators. It owns no views: hosts
//! implement the collaborator traits and drive the picker from their UI
//! loop.
//!
//! The moving parts are:
//!
//! - [`Picker`]: owns the ordered set of [`ColumnEngine`]s, rebuilds them
//!   from a [`DataProvider`], broadcasts configuration changes, and re-emits
//!   per-column selection changes as [`PickerEvent`]s tagged with the
//!   producing column.
//! - [`DataProvider`]: the host's data — column count, per-column row
//!   counts, and row titles. Queried on demand, never retained.
//! - [`RowRenderer`]: builds the host's display representation for a logical
//!   row and highlight state.
//! - [`Viewport`] / [`ViewportCommand`]: the scroll-view boundary. The host
//!   reports drags, taps, and resizes via the `on_*` methods; the picker
//!   answers with fire-and-forget scroll commands, drained with
//!   [`Picker::take_commands`] or pushed with [`Picker::flush_commands`].
//! - [`PickerConfig`]: looping, row height, column widths and spacing, the
//!   enabled flag, and the [`SelectionStyle`] hint for renderers.
//!
//! Everything is synchronous and single-threaded; all calls run on the
//! thread that owns the UI update cycle and return immediately.
//!
//! ## Minimal example
//!
//! ```rust
//! use std::borrow::Cow;
//!
//! use spindle_picker::{DataProvider, Picker, PickerConfig, PickerEvent};
//!
//! struct Months;
//!
//! impl DataProvider for Months {
//!     fn column_count(&self) -> usize {
//!         1
//!     }
//!
//!     fn row_count(&self, _column: usize) -> usize {
//!         12
//!     }
//!
//!     fn row_title(&self, _column: usize, logical_row: usize) -> Cow<'_, str> {
//!         Cow::Owned(format!("month {logical_row}"))
//!     }
//! }
//!
//! let mut picker = Picker::new(PickerConfig::default());
//! picker.rebuild_columns(&Months);
//! picker.recenter_if_needed();
//! assert_eq!(picker.selected_row(0).unwrap(), Some(5));
//!
//! picker.select_row(0, 9, false).unwrap();
//! let events = picker.take_events();
//! assert_eq!(
//!     events.last(),
//!     Some(&PickerEvent::SelectionChanged { column: 0, logical_row: 9 })
//! );
//! ```
//!
//! [`ColumnEngine`]: spindle_column::ColumnEngine

mod config;
mod events;
mod picker;
mod provider;

pub use config::{ColumnLayout, ColumnWidth, PickerConfig, SelectionStyle};
pub use events::{PickerEvent, Viewport, ViewportCommand};
pub use picker::{Picker, PickerError};
pub use provider::{DataProvider, RowRenderer};

// Re-export the per-column vocabulary so hosts only need one import path.
pub use spindle_column::{
    ColumnEngine, ColumnExtents, ColumnPhase, ColumnUpdate, ScrollTarget, SelectError,
    replication_multiplier,
};
