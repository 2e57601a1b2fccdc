/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

//! Hyperperiod calculation.
//!
//! The hyperperiod of a set of periodic tasks is the Least Common Multiple
//! (LCM) of all their periods.  It represents the smallest time window after
//! which the entire task set repeats, and is therefore the span a static
//! schedule has to cover.
//!
//! Failure cases are distinct [`HyperperiodError`] variants so the caller can
//! tell "no tasks" apart from "overflow" or "too long to search".

pub mod math;

use thiserror::Error;
use tracing::{debug, info, warn};

use crate::task::{Task, Time};
use math::{lcm_of, MathError};

// ── Constants ─────────────────────────────────────────────────────────────────

/// Default upper limit on the hyperperiod, in schedule time units.
///
/// The search depth grows with the hyperperiod, so an unbounded value would
/// let a badly chosen period set run for hours.  Callers that want a different
/// limit pass their own value to [`analyze`].
pub const DEFAULT_HYPERPERIOD_LIMIT: Time = 1_000_000;

// ── Error type ────────────────────────────────────────────────────────────────

/// Errors that can occur during hyperperiod calculation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HyperperiodError {
    /// The task slice was empty; the hyperperiod is undefined.
    #[error("no tasks provided; hyperperiod is undefined")]
    NoTasks,

    /// A task period is zero or negative.
    #[error("task '{task}' has invalid period {period}")]
    InvalidPeriod { task: String, period: Time },

    /// LCM calculation overflowed.
    ///
    /// Contains the two operands that caused the overflow so the caller can
    /// log a useful message.
    #[error("LCM overflow computing lcm({a}, {b})")]
    Overflow { a: u64, b: u64 },

    /// The calculated hyperperiod exceeded the configured limit.
    #[error("hyperperiod {value} exceeds limit {limit}")]
    TooLarge { value: u64, limit: u64 },
}

impl From<MathError> for HyperperiodError {
    fn from(err: MathError) -> Self {
        match err {
            MathError::Overflow { a, b } => HyperperiodError::Overflow { a, b },
        }
    }
}

// ── HyperperiodInfo ───────────────────────────────────────────────────────────

/// Calculated hyperperiod for one task set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HyperperiodInfo {
    /// LCM of all task periods.
    pub hyperperiod: Time,

    /// Unique periods present in the task set (sorted, deduplicated).
    pub unique_periods: Vec<Time>,

    /// Number of tasks that contributed to this hyperperiod.
    pub task_count: usize,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Pure hyperperiod of `tasks`: the LCM of every task period.
///
/// Independent of task order and of launch state, so it is safe to call from
/// renderers and verifiers for display scaling.
///
/// # Errors
/// * [`HyperperiodError::NoTasks`] – `tasks` is empty.
/// * [`HyperperiodError::InvalidPeriod`] – a period is `<= 0`.
/// * [`HyperperiodError::Overflow`] – the LCM does not fit in `u64`.
/// * [`HyperperiodError::TooLarge`] – the LCM fits in `u64` but not in [`Time`].
pub fn hyperperiod(tasks: &[Task]) -> Result<Time, HyperperiodError> {
    let periods = collect_periods(tasks)?;
    let value = lcm_of(&periods)?;
    Time::try_from(value).map_err(|_| HyperperiodError::TooLarge {
        value,
        limit: Time::MAX.unsigned_abs(),
    })
}

/// Calculate the hyperperiod of `tasks` and check it against `limit`.
///
/// # Errors
/// Everything [`hyperperiod`] returns, plus [`HyperperiodError::TooLarge`]
/// when the result exceeds `limit`.
pub fn analyze(tasks: &[Task], limit: Time) -> Result<HyperperiodInfo, HyperperiodError> {
    let mut unique_periods = collect_periods(tasks)?;
    unique_periods.sort_unstable();
    unique_periods.dedup();

    let hyperperiod = hyperperiod(tasks)?;

    if hyperperiod > limit {
        warn!(hyperperiod, limit, "Hyperperiod exceeds configured limit");
        return Err(HyperperiodError::TooLarge {
            value: hyperperiod.unsigned_abs(),
            limit: limit.unsigned_abs(),
        });
    }

    info!(
        task_count = tasks.len(),
        unique_count = unique_periods.len(),
        hyperperiod,
        "Calculated hyperperiod"
    );
    for p in &unique_periods {
        debug!(period = p, repetitions = hyperperiod / p, "  unique period");
    }

    Ok(HyperperiodInfo {
        hyperperiod,
        unique_periods,
        task_count: tasks.len(),
    })
}

fn collect_periods(tasks: &[Task]) -> Result<Vec<Time>, HyperperiodError> {
    if tasks.is_empty() {
        return Err(HyperperiodError::NoTasks);
    }

    tasks
        .iter()
        .map(|t| {
            if t.period() > 0 {
                Ok(t.period())
            } else {
                Err(HyperperiodError::InvalidPeriod {
                    task: t.name().to_string(),
                    period: t.period(),
                })
            }
        })
        .collect()
}

// ── Tests ─────────────────────────────────────────────────────────────────────
