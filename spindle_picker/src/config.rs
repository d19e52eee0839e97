// Copyright 2026 the Spindle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Host-facing picker configuration.

/// How column widths are resolved.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum ColumnWidth {
    /// Distribute the available width equally among the columns, after
    /// subtracting the inter-column spacing.
    #[default]
    Equal,
    /// Give every column this fixed width.
    Fixed(f64),
}

/// The selection-indicator style a host renderer should draw.
///
/// The core never draws; this is a hint carried in the configuration so a
/// renderer can pick its treatment for the centered row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectionStyle {
    /// No indicator; only the highlight flag distinguishes the centered row.
    #[default]
    None,
    /// A pair of hairlines above and below the centered row.
    Indicator,
    /// A translucent band over the centered row.
    Overlay,
    /// A host-supplied image behind the centered row.
    Image,
}

/// Resolved placement of one column along the horizontal axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColumnLayout {
    /// Leading edge of the column.
    pub x: f64,
    /// Width of the column.
    pub width: f64,
}

/// Configuration the host sets on the picker as a whole.
///
/// Broadcast to every column engine on rebuild and on the `set_*`
/// operations; engines re-run their multiplier policy and mark themselves
/// recenter-pending when the relevant knobs change.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PickerConfig {
    /// Whether columns loop "infinitely" through their rows.
    pub looping: bool,
    /// Uniform row height, in the host's logical coordinates.
    pub row_height: f64,
    /// Column width policy.
    pub column_width: ColumnWidth,
    /// Spacing between adjacent columns.
    pub column_spacing: f64,
    /// Whether user scrolling is enabled at all.
    pub enabled: bool,
    /// Selection-indicator treatment for the host renderer.
    pub selection_style: SelectionStyle,
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            looping: false,
            row_height: 40.0,
            column_width: ColumnWidth::Equal,
            column_spacing: 0.0,
            enabled: true,
            selection_style: SelectionStyle::None,
        }
    }
}

impl PickerConfig {
    /// Resolves the width policy into per-column placements for a picker of
    /// `column_count` columns rendered into `total_width`.
    ///
    /// Widths never go negative; a viewport too narrow for the spacing
    /// collapses the columns to zero width rather than overflowing.
    #[must_use]
    pub fn column_layout(&self, column_count: usize, total_width: f64) -> Vec<ColumnLayout> {
        if column_count == 0 {
            return Vec::new();
        }
        let spacing = self.column_spacing.max(0.0);
        let gaps = spacing * (column_count - 1) as f64;
        let width = match self.column_width {
            ColumnWidth::Fixed(width) => width.max(0.0),
            ColumnWidth::Equal => ((total_width - gaps) / column_count as f64).max(0.0),
        };
        (0..column_count)
            .map(|index| ColumnLayout {
                x: index as f64 * (width + spacing),
                width,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::{ColumnLayout, ColumnWidth, PickerConfig};

    #[test]
    fn equal_distribution_shares_the_width_after_spacing() {
        let config = PickerConfig {
            column_spacing: 10.0,
            ..PickerConfig::default()
        };
        let layout = config.column_layout(3, 320.0);
        // (320 - 2 * 10) / 3 = 100 per column.
        assert_eq!(
            layout,
            vec![
                ColumnLayout { x: 0.0, width: 100.0 },
                ColumnLayout { x: 110.0, width: 100.0 },
                ColumnLayout { x: 220.0, width: 100.0 },
            ]
        );
    }

    #[test]
    fn fixed_widths_ignore_the_total() {
        let config = PickerConfig {
            column_width: ColumnWidth::Fixed(80.0),
            ..PickerConfig::default()
        };
        let layout = config.column_layout(2, 10.0);
        assert_eq!(layout[0].width, 80.0);
        assert_eq!(layout[1].x, 80.0);
    }

    #[test]
    fn narrow_viewports_clamp_widths_to_zero() {
        let config = PickerConfig {
            column_spacing: 50.0,
            ..PickerConfig::default()
        };
        let layout = config.column_layout(4, 100.0);
        assert!(layout.iter().all(|column| column.width == 0.0));
    }

    #[test]
    fn zero_columns_lay_out_to_nothing() {
        assert!(PickerConfig::default().column_layout(0, 320.0).is_empty());
    }
}
