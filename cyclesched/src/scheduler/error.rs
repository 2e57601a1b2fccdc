/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

//! Structured error type for the cyclic scheduler.
//!
//! Only caller mistakes and resource limits are errors.  A task set the search
//! cannot schedule is a normal result, reported as
//! [`ScheduleOutcome::Infeasible`](super::ScheduleOutcome::Infeasible).
//!
//! **Do not** replace these with `anyhow::Error` in library paths; callers
//! match on the variants.

use thiserror::Error;

use crate::hyperperiod::HyperperiodError;
use crate::task::TaskError;

/// Top-level error type returned by
/// [`Scheduler::make_schedule()`](super::Scheduler::make_schedule).
#[derive(Debug, Error)]
pub enum SchedulerError {
    /// A task violates the scheduling preconditions (non-positive period or
    /// duration, negative delay or deadline).
    #[error("invalid task specification: {0}")]
    InvalidTask(#[from] TaskError),

    /// The hyperperiod could not be computed, or exceeds the configured limit.
    #[error("hyperperiod calculation failed: {0}")]
    Hyperperiod(#[from] HyperperiodError),

    /// A timing parameter is larger than the hyperperiod limit, so the search
    /// arithmetic could leave the representable range.
    #[error("task '{task}' has {field} {value} above the hyperperiod limit {limit}")]
    TaskOutOfRange {
        task: String,
        field: &'static str,
        value: i64,
        limit: i64,
    },

    /// The configured node budget ran out before the search finished.
    ///
    /// Launch state is fully restored before this is returned.
    #[error("search budget of {limit} nodes exhausted (deepest partial schedule: {max_depth} launches)")]
    SearchBudgetExceeded { limit: u64, max_depth: usize },
}
