/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

//! Search output types.
//!
//! A [`Schedule`] does not own tasks.  Each [`Launch`] either names a task by
//! its index in the originating [`Workload`] or is an idle gap with its own
//! length, so replaying it always needs the workload it came from.  Replaying
//! against a workload without that index stops at the first such launch.

use crate::task::{Task, Time};
use crate::workload::Workload;

// ── Launch ────────────────────────────────────────────────────────────────────

/// One atomic entry of a schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Launch {
    /// Run the task at `index` in the workload for its full duration.
    Task { index: usize },

    /// Leave the processor idle until the next task becomes eligible.
    Idle { duration: Time },
}

impl Launch {
    /// Length of this entry.  An index not present in `tasks` counts as `0`.
    pub fn duration(&self, tasks: &[Task]) -> Time {
        match *self {
            Launch::Task { index } => tasks.get(index).map_or(0, Task::duration),
            Launch::Idle { duration } => duration,
        }
    }

    /// EDF sort key.  Idle never carries deadline pressure.
    pub fn next_deadline(&self, tasks: &[Task]) -> Time {
        match *self {
            Launch::Task { index } => tasks.get(index).map_or(Time::MAX, Task::next_deadline),
            Launch::Idle { .. } => Time::MAX,
        }
    }

    pub fn task_index(&self) -> Option<usize> {
        match *self {
            Launch::Task { index } => Some(index),
            Launch::Idle { .. } => None,
        }
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, Launch::Idle { .. })
    }
}

// ── Schedule ──────────────────────────────────────────────────────────────────

/// Ordered launches covering one hyperperiod.
///
/// Replayed from time `0`, consecutive durations sum to at least
/// [`hyperperiod`](Self::hyperperiod); the last launch may overrun it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Schedule {
    hyperperiod: Time,
    launches: Vec<Launch>,
}

/// A launch placed on the replayed timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slot {
    pub start: Time,
    pub duration: Time,
    pub launch: Launch,
}

impl Slot {
    pub fn finish(&self) -> Time {
        self.start.saturating_add(self.duration)
    }
}

impl Schedule {
    pub fn new(hyperperiod: Time, launches: Vec<Launch>) -> Self {
        Self {
            hyperperiod,
            launches,
        }
    }

    pub fn hyperperiod(&self) -> Time {
        self.hyperperiod
    }

    pub fn launches(&self) -> &[Launch] {
        &self.launches
    }

    pub fn len(&self) -> usize {
        self.launches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.launches.is_empty()
    }

    /// Replay the launches from time `0` against `workload`.
    ///
    /// Ends early at the first launch whose task index `workload` does not
    /// have.  Start times saturate at `Time::MAX`.
    pub fn timeline<'a>(&'a self, workload: &'a Workload) -> impl Iterator<Item = Slot> + 'a {
        let tasks = workload.tasks();
        self.launches.iter().scan(0, move |now: &mut Time, &launch| {
            let duration = match launch {
                Launch::Task { index } => tasks.get(index)?.duration(),
                Launch::Idle { duration } => duration,
            };
            let slot = Slot {
                start: *now,
                duration,
                launch,
            };
            *now = now.saturating_add(duration);
            Some(slot)
        })
    }

    /// Total replayed length, saturating at `Time::MAX`.
    pub fn span(&self, workload: &Workload) -> Time {
        self.timeline(workload)
            .fold(0, |total: Time, slot| total.saturating_add(slot.duration))
    }

    /// Number of launches of the task at `index`.
    pub fn launch_count(&self, index: usize) -> usize {
        self.launches
            .iter()
            .filter(|l| l.task_index() == Some(index))
            .count()
    }

    /// Total idle time inserted by the search.
    pub fn idle_time(&self) -> Time {
        self.launches
            .iter()
            .map(|l| match *l {
                Launch::Idle { duration } => duration,
                Launch::Task { .. } => 0,
            })
            .fold(0, Time::saturating_add)
    }
}

// ── Outcome ───────────────────────────────────────────────────────────────────

/// Counters collected during one search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Search nodes visited (choice enumerations).
    pub nodes: u64,

    /// Commits undone after their subtree failed.
    pub backtracks: u64,

    /// Longest partial schedule reached.
    pub max_depth: usize,
}

/// Result of a completed search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScheduleOutcome {
    /// A launch order covering the whole hyperperiod was found.
    Feasible { schedule: Schedule, stats: SearchStats },

    /// Every branch was exhausted.  This means "not found by this search",
    /// not a proof that no legal order exists.
    Infeasible { stats: SearchStats },
}

impl ScheduleOutcome {
    pub fn is_feasible(&self) -> bool {
        matches!(self, ScheduleOutcome::Feasible { .. })
    }

    pub fn schedule(&self) -> Option<&Schedule> {
        match self {
            ScheduleOutcome::Feasible { schedule, .. } => Some(schedule),
            ScheduleOutcome::Infeasible { .. } => None,
        }
    }

    pub fn into_schedule(self) -> Option<Schedule> {
        match self {
            ScheduleOutcome::Feasible { schedule, .. } => Some(schedule),
            ScheduleOutcome::Infeasible { .. } => None,
        }
    }

    pub fn stats(&self) -> SearchStats {
        match self {
            ScheduleOutcome::Feasible { stats, .. } | ScheduleOutcome::Infeasible { stats } => {
                *stats
            }
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
