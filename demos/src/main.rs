// Copyright 2026 the Spindle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scripted drive of a three-column date picker.
//!
//! Wires a day/month/year provider to a [`Picker`], runs through the reload
//! → recenter → drag → select lifecycle, and prints the event stream and the
//! scroll commands a real host would execute.

use std::borrow::Cow;

use kurbo::Size;
use log::LevelFilter;
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};
use spindle_column::ColumnPhase;
use spindle_picker::{DataProvider, Picker, PickerConfig, Viewport};

const MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

struct DateProvider;

impl DataProvider for DateProvider {
    fn column_count(&self) -> usize {
        3
    }

    fn row_count(&self, column: usize) -> usize {
        match column {
            0 => 31,
            1 => 12,
            _ => 50,
        }
    }

    fn row_title(&self, column: usize, logical_row: usize) -> Cow<'_, str> {
        match column {
            0 => Cow::Owned((logical_row + 1).to_string()),
            1 => Cow::Borrowed(MONTHS[logical_row]),
            _ => Cow::Owned((2000 + logical_row).to_string()),
        }
    }
}

/// Prints the scroll commands a real scroll view would execute.
struct PrintViewport;

impl Viewport for PrintViewport {
    fn set_scroll_offset(&mut self, column: usize, offset: f64, animated: bool) {
        println!("viewport: column {column} -> offset {offset} (animated: {animated})");
    }

    fn set_scroll_enabled(&mut self, column: usize, enabled: bool) {
        println!("viewport: column {column} scroll enabled: {enabled}");
    }
}

fn main() {
    TermLogger::init(
        LevelFilter::Trace,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )
    .expect("no other logger is installed");

    let mut picker = Picker::new(PickerConfig {
        looping: true,
        row_height: 32.0,
        ..PickerConfig::default()
    });
    let mut viewport = PrintViewport;

    picker.rebuild_columns(&DateProvider);
    picker.on_resize(Size::new(320.0, 216.0));
    picker.recenter_if_needed();
    picker.flush_commands(&mut viewport);

    // The user flicks the day column, then picks December directly.
    picker.on_drag_begin(0).expect("column exists");
    assert_eq!(picker.column_phase(0).expect("column exists"), ColumnPhase::Scrolling);
    picker
        .on_drag_end(0, 6_190.0 * 32.0 + 11.0)
        .expect("column exists");
    picker.select_row(1, 11, true).expect("December is in range");
    picker.flush_commands(&mut viewport);

    for event in picker.take_events() {
        println!("event: {event:?}");
    }

    for column in 0..picker.column_count() {
        let row = picker
            .selected_row(column)
            .expect("column exists")
            .expect("every column has rows");
        println!(
            "column {column}: {}",
            picker
                .row_title(&DateProvider, column, row)
                .expect("column exists")
                .expect("column is non-empty"),
        );
    }
}
