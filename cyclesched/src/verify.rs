/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

//! Independent schedule checker.
//!
//! [`verify`] replays a schedule from time `0` using only the task timing
//! parameters (never the launch state the search left behind) and reports
//! every violation of the periodic constraints:
//!
//! * a launch before the task's release offset within its period,
//! * a launch that finishes after the task's relative deadline,
//! * a period of the hyperperiod in which the task did not run exactly once.
//!
//! An empty result means the schedule is valid.  The search only guarantees
//! its own choice rule, so callers should verify before trusting a schedule.

use std::fmt;

use tracing::warn;

use crate::scheduler::{Launch, Schedule};
use crate::task::Time;
use crate::workload::Workload;

// ── Violation ─────────────────────────────────────────────────────────────────

/// One broken constraint found while replaying a schedule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Violation {
    /// Launched before `period_start + delay`.
    LaunchedTooEarly { task: String, at: Time },

    /// `launch offset + duration` exceeds the relative deadline.
    MissedDeadline { task: String, at: Time },

    /// Ran `runs` times (instead of once) in period `period_index`.
    WrongRunCount {
        task: String,
        period_index: usize,
        runs: usize,
    },

    /// Launched at or after the end of the hyperperiod.
    LaunchBeyondHyperperiod { task: String, at: Time },
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Violation::LaunchedTooEarly { task, at } => {
                write!(f, "Task {task} launched too early at {at}")
            }
            Violation::MissedDeadline { task, at } => {
                write!(f, "Task {task} launched at {at} missed deadline")
            }
            Violation::WrongRunCount {
                task,
                period_index,
                runs,
            } => write!(f, "Task {task} ran {runs} times in period {period_index}"),
            Violation::LaunchBeyondHyperperiod { task, at } => {
                write!(f, "Task {task} launched at {at}, beyond the hyperperiod")
            }
        }
    }
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Check `schedule` against the timing constraints of `workload`.
///
/// The hyperperiod is recomputed from the workload; a workload whose
/// hyperperiod cannot be computed (empty, invalid periods) has nothing to
/// verify and yields no violations.
pub fn verify(workload: &Workload, schedule: &Schedule) -> Vec<Violation> {
    let Ok(hyperperiod) = crate::hyperperiod::hyperperiod(workload.tasks()) else {
        return Vec::new();
    };

    let mut violations = Vec::new();

    for (index, task) in workload.tasks().iter().enumerate() {
        let period = task.period();
        let num_periods = usize::try_from(hyperperiod / period).unwrap_or(0);
        let mut runs = vec![0usize; num_periods];

        let launches = schedule
            .timeline(workload)
            .filter(|slot| slot.launch == Launch::Task { index });

        for slot in launches {
            let now = slot.start;
            let relative = now.rem_euclid(period);

            if relative < task.delay() {
                violations.push(Violation::LaunchedTooEarly {
                    task: task.name().to_string(),
                    at: now,
                });
            }
            if relative.saturating_add(task.duration()) > task.deadline() {
                violations.push(Violation::MissedDeadline {
                    task: task.name().to_string(),
                    at: now,
                });
            }

            let period_index = usize::try_from(now.div_euclid(period)).ok();
            match period_index.and_then(|k| runs.get_mut(k)) {
                Some(count) => *count += 1,
                None => violations.push(Violation::LaunchBeyondHyperperiod {
                    task: task.name().to_string(),
                    at: now,
                }),
            }
        }

        for (period_index, &count) in runs.iter().enumerate() {
            if count != 1 {
                violations.push(Violation::WrongRunCount {
                    task: task.name().to_string(),
                    period_index,
                    runs: count,
                });
            }
        }
    }

    for v in &violations {
        warn!(workload = workload.name(), "{v}");
    }

    violations
}

// ── Tests ─────────────────────────────────────────────────────────────────────
