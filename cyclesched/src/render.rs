/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

//! Fixed-width ASCII timeline of a schedule.
//!
//! ```text
//! Schedule for Workload 1
//! 10.2.0.10a  |xx   |     |xx   |     |xx   |     |xx   |     | ...
//! 10.2.0.10b  |  xx |     |  xx |     |  xx |     |  xx |     | ...
//! 20.1.5.20   |     |x    |     |     |     |x    |     |     | ...
//!             0     5     10    15    20    25    30    35    40 ...
//! ```
//!
//! One row per task in workload order; `x` marks a time unit the task
//! occupies.  Every fifth unit is preceded by `|`, and the ruler labels the
//! column boundaries.

use std::fmt::Write as _;

use crate::scheduler::{Launch, Schedule};
use crate::workload::Workload;

/// Width of one ruler column: the `|` separator plus five time units.
const COLUMN_WIDTH: usize = 6;

/// Time units per column.
const UNITS_PER_COLUMN: i64 = 5;

/// Render `schedule` as a timeline, one line per task plus header and ruler.
///
/// The output ends with an empty line.
pub fn render(workload: &Workload, schedule: &Schedule) -> String {
    let tasks = workload.tasks();
    let hyperperiod = schedule.hyperperiod();
    // Padding counts chars, not bytes.
    let name_width = tasks
        .iter()
        .map(|t| t.name().chars().count())
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    let _ = writeln!(out, "Schedule for {}", workload.name());

    for (index, task) in tasks.iter().enumerate() {
        let row = task_row(workload, schedule, index, hyperperiod);
        let _ = writeln!(out, "{:<name_width$} {}", task.name(), row);
    }

    let _ = writeln!(out, "{:<name_width$} {}", "", ruler(hyperperiod));
    out.push('\n');
    out
}

fn task_row(workload: &Workload, schedule: &Schedule, index: usize, hyperperiod: i64) -> String {
    let mut row = String::new();
    let mut pos: i64 = 0;

    for slot in schedule.timeline(workload) {
        let mark = if slot.launch == (Launch::Task { index }) {
            'x'
        } else {
            ' '
        };
        for _ in 0..slot.duration {
            if pos % UNITS_PER_COLUMN == 0 {
                row.push('|');
            }
            row.push(mark);
            pos += 1;
        }
    }

    while pos < hyperperiod {
        row.push(' ');
        pos += 1;
    }
    row.push('|');
    row
}

fn ruler(hyperperiod: i64) -> String {
    let labels = (hyperperiod + UNITS_PER_COLUMN - 1) / UNITS_PER_COLUMN + 1;
    (0..labels)
        .map(|i| format!("{:<width$}", i * UNITS_PER_COLUMN, width = COLUMN_WIDTH))
        .collect()
}

// ── Tests ─────────────────────────────────────────────────────────────────────
