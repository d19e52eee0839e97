// Copyright 2026 the Spindle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Host collaborator contracts.
//!
//! The picker core consumes these traits; it never retains the
//! implementations. Providers are passed by reference into the operations
//! that need them and looked up on demand, never cached beyond one rebuild
//! cycle.

use std::borrow::Cow;

/// Supplies the picker's data: how many columns, and the rows of each.
///
/// Implementations are trusted: the coordinator forwards queries as-is and
/// does not second-guess the answers beyond its own range checks.
pub trait DataProvider {
    /// Number of columns in the picker.
    fn column_count(&self) -> usize;

    /// Number of logical rows in `column`.
    fn row_count(&self, column: usize) -> usize;

    /// Display title for a logical row.
    fn row_title(&self, column: usize, logical_row: usize) -> Cow<'_, str>;
}

/// Builds the host's display representation for rows.
///
/// The coordinator maps virtual rows to logical rows and computes the
/// highlight state before calling in, so implementations only ever see
/// logical indices.
pub trait RowRenderer {
    /// The host's view/widget type for one rendered row.
    type View;

    /// Produces the view for a logical row, highlighted when the row is the
    /// centered selection.
    fn render(&mut self, column: usize, logical_row: usize, highlighted: bool) -> Self::View;

    /// Restyles the reusable label for a column, for hosts that restyle in
    /// place rather than rebuild.
    fn style_label(&mut self, column: usize, highlighted: bool);
}
