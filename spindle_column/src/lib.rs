// Copyright 2026 the Spindle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=spindle_column --heading-base-level=0

//! Spindle Column: the selection engine for one wheel-picker column.
//!
//! This crate provides a small, renderer-agnostic core for a single column
//! of a slot-machine style picker: a scrollable list of rows that can loop
//! "infinitely" through a finite data set and always settles centered on one
//! row. It is intended to be shared across UI stacks; a sibling crate
//! (`spindle_picker`) replicates it per column and mediates the host-facing
//! collaborators.
//!
//! The core concepts are:
//!
//! - **Logical row**: an index into the real, host-supplied data,
//!   `0..row_count`.
//! - **Virtual row**: an index into the replicated row space
//!   `0..row_count * multiplier` used to fake infinite scrolling. A virtual
//!   row maps back to its logical row by `virtual % row_count`.
//! - [`replication_multiplier`]: the policy choosing how many times the
//!   logical rows are duplicated, from the row count and the looping flag.
//! - [`ColumnEngine`]: the per-column state machine. It owns the selection,
//!   decides which virtual row is centered after reloads, resizes, drags,
//!   and programmatic selects, and reports each move as a [`ColumnUpdate`]
//!   (logical row + the scroll request for the viewport).
//! - [`ColumnExtents`]: strip geometry for rendering, with oversized first
//!   and last rows so the ends of the data can reach the visual center.
//!
//! This crate deliberately does **not** know about widgets, gestures, or any
//! particular UI framework. Hosts are responsible for:
//!
//! - Owning the data and the actual scroll view.
//! - Forwarding drag-begin/drag-end/resize events into the engine.
//! - Executing the [`ScrollTarget`]s the engine hands back.
//!
//! ## Minimal example
//!
//! A month column without looping:
//!
//! ```rust
//! use spindle_column::ColumnEngine;
//!
//! let mut column = ColumnEngine::new();
//! column.configure(12, false, 32.0);
//!
//! // Reloads leave a recenter pending; running it picks the middle row.
//! let update = column.recenter_if_needed().expect("recenter is pending");
//! assert_eq!(update.logical_row, 5);
//! assert_eq!(column.current_logical_selection(), Some(5));
//!
//! // A finished drag snaps to the nearest row and reports the logical index.
//! let update = column.on_drag_end(9.0 * 32.0 + 4.0).expect("non-empty column");
//! assert_eq!(update.logical_row, 9);
//! assert!(update.scroll.animated);
//! ```
//!
//! ## Looping
//!
//! With looping enabled the engine replicates the rows and centers the
//! selection in the middle band of the virtual space, so the user can drag
//! in either direction for a long time without hitting an end:
//!
//! ```rust
//! use spindle_column::{ColumnEngine, replication_multiplier};
//!
//! assert_eq!(replication_multiplier(60, true), 200);
//! assert_eq!(replication_multiplier(60, false), 1);
//!
//! let mut column = ColumnEngine::new();
//! column.configure(60, true, 32.0);
//! column.recenter_if_needed();
//!
//! let virtual_row = column.selected_virtual_row().expect("centered");
//! assert_eq!(virtual_row % 60, column.current_logical_selection().unwrap());
//! assert!(virtual_row < column.virtual_row_count());
//! ```

mod engine;
mod extents;
mod model;

pub use engine::ColumnEngine;
pub use extents::ColumnExtents;
pub use model::{ColumnPhase, ColumnUpdate, ScrollTarget, SelectError, replication_multiplier};
