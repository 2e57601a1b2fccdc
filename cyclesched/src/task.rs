/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

//! Periodic task model.
//!
//! A [`Task`] is an immutable timing specification plus exactly one piece of
//! mutable scheduling state: the absolute time of its most recent launch.
//!
//! ```text
//!   period k start                                      period k+1 start
//!   |<-- delay -->|<------ legal start window ------>|        |
//!   +-------------+----------------------------------+--------+
//!                 ^ earliest start                   ^ deadline - duration
//! ```
//!
//! # Ownership model
//! Tasks are owned by a [`Workload`](crate::workload::Workload).  The search
//! mutates `last_launch` in place through [`Task::launch`] and restores it with
//! the returned undo token on backtrack, so a workload must never be searched
//! by two schedulers at once (the `&mut` borrow enforces this).

use thiserror::Error;

/// Schedule time, in abstract integer units.
///
/// Signed so the fictitious launch one period before time zero is
/// representable.
pub type Time = i64;

// ── Error type ────────────────────────────────────────────────────────────────

/// A task specification that violates the scheduling preconditions.
///
/// A zero period would otherwise surface as a division fault deep inside the
/// eligibility arithmetic.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TaskError {
    #[error("task '{task}' has non-positive period {period}")]
    NonPositivePeriod { task: String, period: Time },

    #[error("task '{task}' has non-positive duration {duration}")]
    NonPositiveDuration { task: String, duration: Time },

    #[error("task '{task}' has negative delay {delay}")]
    NegativeDelay { task: String, delay: Time },

    #[error("task '{task}' has negative deadline {deadline}")]
    NegativeDeadline { task: String, deadline: Time },
}

// ── Task ──────────────────────────────────────────────────────────────────────

/// A strictly periodic, non-preemptive task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    /// Display name.  Not used as a search key.
    name: String,

    /// Period `P`: one instance per half-open window of this length.
    period: Time,

    /// Release offset `D` within each period.
    delay: Time,

    /// Execution length `C`, consumed atomically once launched.
    duration: Time,

    /// Relative deadline `L` within each period.
    deadline: Time,

    /// Absolute time of the most recent launch.  Starts at `-period`.
    last_launch: Time,
}

impl Task {
    /// Task with an implicit window: delay `0`, deadline equal to the period.
    pub fn new(name: impl Into<String>, period: Time, duration: Time) -> Self {
        Self {
            name: name.into(),
            period,
            delay: 0,
            duration,
            deadline: period,
            last_launch: -period,
        }
    }

    /// Returns the task with release offset `delay`.
    pub fn with_delay(self, delay: Time) -> Self {
        Self { delay, ..self }
    }

    /// Returns the task with relative deadline `deadline`.
    pub fn with_deadline(self, deadline: Time) -> Self {
        Self { deadline, ..self }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn period(&self) -> Time {
        self.period
    }

    pub fn delay(&self) -> Time {
        self.delay
    }

    pub fn duration(&self) -> Time {
        self.duration
    }

    pub fn deadline(&self) -> Time {
        self.deadline
    }

    pub fn last_launch(&self) -> Time {
        self.last_launch
    }

    /// Latest legal start relative to the period start: `deadline - duration`.
    ///
    /// Negative when the task can never meet its deadline.
    pub fn latest_start(&self) -> Time {
        self.deadline - self.duration
    }

    /// Check the structural preconditions of the search.
    ///
    /// `deadline < delay + duration` is allowed; such a task simply never
    /// becomes a legal choice.
    pub fn validate(&self) -> Result<(), TaskError> {
        if self.period <= 0 {
            return Err(TaskError::NonPositivePeriod {
                task: self.name.clone(),
                period: self.period,
            });
        }
        if self.duration <= 0 {
            return Err(TaskError::NonPositiveDuration {
                task: self.name.clone(),
                duration: self.duration,
            });
        }
        if self.delay < 0 {
            return Err(TaskError::NegativeDelay {
                task: self.name.clone(),
                delay: self.delay,
            });
        }
        if self.deadline < 0 {
            return Err(TaskError::NegativeDeadline {
                task: self.name.clone(),
                deadline: self.deadline,
            });
        }
        Ok(())
    }

    // ── Scheduling state ──────────────────────────────────────────────────────

    /// Absolute deadline of the next instance, given the current launch state.
    ///
    /// The instance index is `floor((last_launch + period) / period)`, so the
    /// value advances automatically as periods are serviced.  This is what
    /// makes the choice ordering earliest-deadline-first.  Saturates at
    /// `Time::MAX`.
    pub fn next_deadline(&self) -> Time {
        let period_index = self
            .last_launch
            .saturating_add(self.period)
            .div_euclid(self.period);
        period_index
            .saturating_mul(self.period)
            .saturating_add(self.deadline)
    }

    /// Record a launch at `now` and return the previous launch time.
    ///
    /// The return value is the undo token: passing it back to `launch`
    /// restores the exact prior state.
    pub fn launch(&mut self, now: Time) -> Time {
        std::mem::replace(&mut self.last_launch, now)
    }

    /// Time the task must wait from `now` before it may legally launch.
    ///
    /// The window is the current period's release point, or the next period's
    /// if the task already launched at or after this period's release.  `0`
    /// means eligible immediately.  Saturates at `Time::MAX` for release
    /// offsets too large to reach.
    pub fn must_wait(&self, now: Time) -> Time {
        let period_start = now.div_euclid(self.period) * self.period;
        let mut earliest_launch = period_start.saturating_add(self.delay);
        if self.last_launch >= earliest_launch {
            earliest_launch = earliest_launch.saturating_add(self.period);
        }
        earliest_launch.saturating_sub(now).max(0)
    }

    /// Restore the fictitious prior launch one period before time zero.
    pub fn reset(&mut self) {
        self.last_launch = -self.period;
    }
}

impl std::fmt::Display for Task {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{{name={}, period={}, delay={}, duration={}, deadline={}, launch={}}}",
            self.name, self.period, self.delay, self.duration, self.deadline, self.last_launch
        )
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
