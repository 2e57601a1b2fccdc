/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

//! Cheap pre-search schedulability diagnostics.
//!
//! # Status: warning only
//!
//! These checks are **computed and logged** before every search.  They never
//! short-circuit it: the backtracking search is the single source of truth for
//! the outcome, and the checks only explain an `Infeasible` result early.
//!
//! # Theory
//! On one processor a periodic task set needs at least
//!
//! $$U = \sum_{i=1}^{n} \frac{C_i}{T_i} \leq 1$$
//!
//! of processor time.  `U > 1` means no schedule can exist, whatever the
//! ordering.  Independently, a task whose window `L - D` is shorter than its
//! duration `C` can never start legally.

use crate::task::Task;

// ── Public API ────────────────────────────────────────────────────────────────

/// Total processor utilisation `Σ duration / period`.
///
/// Tasks with `period <= 0` are excluded (they are rejected by validation
/// anyway).
pub fn total_utilization(tasks: &[Task]) -> f64 {
    tasks
        .iter()
        .filter(|t| t.period() > 0)
        .map(|t| t.duration() as f64 / t.period() as f64)
        .sum()
}

/// Returns `Some(total_utilisation)` if it exceeds `1.0`, `None` otherwise.
///
/// Exactly `1.0` is accepted (`≤`, not `<`).
pub fn check_utilization(tasks: &[Task]) -> Option<f64> {
    let u = total_utilization(tasks);
    if u > 1.0 {
        Some(u)
    } else {
        None
    }
}

/// Tasks whose start window is too short for their duration.
pub fn unfit_windows(tasks: &[Task]) -> Vec<&Task> {
    tasks
        .iter()
        .filter(|t| t.latest_start() < t.delay())
        .collect()
}

// ── Tests ─────────────────────────────────────────────────────────────────────
