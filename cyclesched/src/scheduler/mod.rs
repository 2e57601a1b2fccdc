/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

//! Static cyclic scheduler.
//!
//! [`Scheduler`] builds, for one hyperperiod, an ordered sequence of
//! non-preemptive launches in which every task starts inside its periodic
//! release window and finishes by its relative deadline.  The result is a
//! [`ScheduleOutcome`]: either a [`Schedule`] or a report that the search ran
//! out of branches.
//!
//! # Algorithm
//! Depth-first backtracking from simulated time `0`:
//!
//! 1. At time `now`, enumerate the choices (see [`Scheduler::choices`]):
//!    every task that is released (`must_wait == 0`) and can still finish by
//!    its next deadline, sorted earliest-deadline-first.  If nothing is
//!    released, a single idle gap lasting until the next release.
//! 2. Commit the first untried choice, advance `now` by its duration.
//! 3. Stop with success once `now >= hyperperiod`; otherwise descend.
//! 4. When a node runs out of choices, undo the parent's commit and try the
//!    parent's next choice.
//!
//! EDF ordering only decides which branch is tried first; completeness with
//! respect to the choice rule comes from the exhaustive backtracking.
//!
//! # Design decisions
//!
//! | Topic | Approach |
//! |---|---|
//! | Recursion | Explicit frame stack; depth equals schedule length |
//! | Launch state | Mutated in place; every commit pushes `(launch, previous last_launch)` onto an undo log popped on backtrack |
//! | Idle | Tagged [`Launch::Idle`] variant, never a fake task |
//! | Determinism | Launch state is reset before each search; ties keep workload order (stable sort) |
//!
//! # Example
//! ```rust
//! use cyclesched::scheduler::Scheduler;
//! use cyclesched::task::Task;
//! use cyclesched::workload::Workload;
//!
//! let mut workload = Workload::new("demo")
//!     .with_task(Task::new("a", 10, 2))
//!     .with_task(Task::new("b", 10, 2));
//!
//! let outcome = Scheduler::new().make_schedule(&mut workload).unwrap();
//! let schedule = outcome.schedule().unwrap();
//! assert_eq!(schedule.hyperperiod(), 10);
//! assert_eq!(schedule.launch_count(0), 1);
//! assert_eq!(schedule.launch_count(1), 1);
//! ```

pub mod error;
pub mod feasibility;
pub mod schedule;

pub use error::SchedulerError;
pub use schedule::{Launch, Schedule, ScheduleOutcome, SearchStats, Slot};

use tracing::{debug, info, trace, warn};

use crate::hyperperiod::{self, HyperperiodError, DEFAULT_HYPERPERIOD_LIMIT};
use crate::task::{Task, Time};
use crate::workload::Workload;

use feasibility::{check_utilization, unfit_windows};

// ── Configuration ─────────────────────────────────────────────────────────────

/// Resource limits for one search.  Neither limit changes the search order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchLimits {
    /// Largest hyperperiod the scheduler accepts.
    pub max_hyperperiod: Time,

    /// Maximum number of search nodes; `None` = unlimited.
    pub max_nodes: Option<u64>,
}

impl Default for SearchLimits {
    fn default() -> Self {
        Self {
            max_hyperperiod: DEFAULT_HYPERPERIOD_LIMIT,
            max_nodes: None,
        }
    }
}

// ── Internal search state ─────────────────────────────────────────────────────

/// One level of the explicit search stack.
#[derive(Debug)]
struct Frame {
    now: Time,
    choices: Vec<Launch>,
    /// Index of the next untried choice.
    next: usize,
    /// `true` while one of this frame's choices sits on top of the undo log.
    committed: bool,
}

impl Frame {
    fn new(now: Time, choices: Vec<Launch>) -> Self {
        Self {
            now,
            choices,
            next: 0,
            committed: false,
        }
    }
}

/// Undo-log entry.  `previous` is the task's launch time before the commit
/// (`None` for idle, which has no state).
#[derive(Debug, Clone, Copy)]
struct Commit {
    launch: Launch,
    previous: Option<Time>,
}

// ── Scheduler ─────────────────────────────────────────────────────────────────

/// The cyclic schedule search engine.
///
/// Holds only configuration; all per-run state is local to
/// [`make_schedule`](Self::make_schedule).  The workload's launch state is the
/// one shared mutable resource, and the `&mut Workload` borrow keeps a second
/// search off it.
#[derive(Debug, Clone, Default)]
pub struct Scheduler {
    limits: SearchLimits,
}

impl Scheduler {
    /// Scheduler with [`SearchLimits::default`].
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_limits(limits: SearchLimits) -> Self {
        Self { limits }
    }

    pub fn limits(&self) -> &SearchLimits {
        &self.limits
    }

    /// LCM of every task period.  Pure, usable for display scaling.
    ///
    /// # Errors
    /// See [`hyperperiod::hyperperiod`]; an empty slice is
    /// [`HyperperiodError::NoTasks`].
    pub fn hyperperiod(tasks: &[Task]) -> Result<Time, HyperperiodError> {
        hyperperiod::hyperperiod(tasks)
    }

    // ── Public entry point ────────────────────────────────────────────────────

    /// Search for a launch order covering one hyperperiod of `workload`.
    ///
    /// An empty workload is trivially feasible: an empty schedule with
    /// hyperperiod `0`.  On return every task's launch state is either the
    /// state at the end of the found schedule or, for `Infeasible` and errors,
    /// the initial state.
    ///
    /// # Errors
    /// * [`SchedulerError::InvalidTask`] – a task fails [`Task::validate`].
    /// * [`SchedulerError::Hyperperiod`] – overflow, or above
    ///   [`SearchLimits::max_hyperperiod`].
    /// * [`SchedulerError::TaskOutOfRange`] – a delay, duration or deadline
    ///   above [`SearchLimits::max_hyperperiod`].
    /// * [`SchedulerError::SearchBudgetExceeded`] – above
    ///   [`SearchLimits::max_nodes`].
    pub fn make_schedule(
        &self,
        workload: &mut Workload,
    ) -> Result<ScheduleOutcome, SchedulerError> {
        if workload.is_empty() {
            info!(workload = workload.name(), "empty workload, nothing to schedule");
            return Ok(ScheduleOutcome::Feasible {
                schedule: Schedule::default(),
                stats: SearchStats::default(),
            });
        }

        workload.validate()?;
        let info = hyperperiod::analyze(workload.tasks(), self.limits.max_hyperperiod)?;
        self.check_ranges(workload.tasks())?;

        Self::log_diagnostics(workload);
        workload.reset_launches();

        info!(
            workload = workload.name(),
            task_count = workload.len(),
            hyperperiod = info.hyperperiod,
            "=== Scheduler::make_schedule() ==="
        );

        let outcome = self.search(workload.tasks_mut(), info.hyperperiod)?;
        let stats = outcome.stats();

        match &outcome {
            ScheduleOutcome::Feasible { schedule, .. } => info!(
                workload = workload.name(),
                launches = schedule.len(),
                idle = schedule.idle_time(),
                nodes = stats.nodes,
                backtracks = stats.backtracks,
                "✓ schedule found"
            ),
            ScheduleOutcome::Infeasible { .. } => info!(
                workload = workload.name(),
                nodes = stats.nodes,
                backtracks = stats.backtracks,
                max_depth = stats.max_depth,
                "✗ no schedule found"
            ),
        }

        Ok(outcome)
    }

    // ── Choice enumeration ────────────────────────────────────────────────────

    /// The launches the search may commit at time `now`, in the order it tries
    /// them.
    ///
    /// A task qualifies when it is released (`must_wait(now) == 0`) and
    /// `now + duration <= next_deadline()`.  Qualifying tasks are sorted by
    /// ascending next deadline, ties in workload order.  If no task is
    /// released, the only choice is an idle gap as long as the shortest wait.
    /// A released task that can no longer meet its deadline blocks idling, so
    /// that node has no choices at all.
    pub fn choices(tasks: &[Task], now: Time) -> Vec<Launch> {
        let mut min_wait = Time::MAX;
        let mut choices = Vec::with_capacity(tasks.len());

        for (index, task) in tasks.iter().enumerate() {
            let wait = task.must_wait(now);
            min_wait = min_wait.min(wait);
            if wait == 0 && now.saturating_add(task.duration()) <= task.next_deadline() {
                choices.push(Launch::Task { index });
            }
        }

        if !tasks.is_empty() && min_wait > 0 {
            choices.push(Launch::Idle { duration: min_wait });
        }

        // Stable: equal deadlines keep workload order.
        choices.sort_by_key(|c| c.next_deadline(tasks));
        choices
    }

    // ── Search ────────────────────────────────────────────────────────────────

    fn search(&self, tasks: &mut [Task], end: Time) -> Result<ScheduleOutcome, SchedulerError> {
        let mut stats = SearchStats {
            nodes: 1,
            ..SearchStats::default()
        };
        let mut log: Vec<Commit> = Vec::new();
        let mut stack = vec![Frame::new(0, Self::choices(tasks, 0))];

        while let Some(frame) = stack.last_mut() {
            // Returning here means the subtree under the last commit failed.
            if frame.committed {
                Self::undo(tasks, &mut log);
                frame.committed = false;
                stats.backtracks += 1;
            }

            let Some(&launch) = frame.choices.get(frame.next) else {
                trace!(now = frame.now, "choices exhausted");
                stack.pop();
                continue;
            };
            frame.next += 1;
            frame.committed = true;
            let now = frame.now;

            let previous = launch.task_index().map(|i| tasks[i].launch(now));
            log.push(Commit { launch, previous });
            stats.max_depth = stats.max_depth.max(log.len());
            trace!(now, ?launch, depth = log.len(), "commit");

            let finish = now.saturating_add(launch.duration(tasks));
            if finish >= end {
                let launches = log.into_iter().map(|c| c.launch).collect();
                return Ok(ScheduleOutcome::Feasible {
                    schedule: Schedule::new(end, launches),
                    stats,
                });
            }

            if let Some(limit) = self.limits.max_nodes {
                if stats.nodes >= limit {
                    warn!(limit, max_depth = stats.max_depth, "search node budget exhausted");
                    while !log.is_empty() {
                        Self::undo(tasks, &mut log);
                    }
                    return Err(SchedulerError::SearchBudgetExceeded {
                        limit,
                        max_depth: stats.max_depth,
                    });
                }
            }

            stack.push(Frame::new(finish, Self::choices(tasks, finish)));
            stats.nodes += 1;
        }

        debug!(
            nodes = stats.nodes,
            backtracks = stats.backtracks,
            "search exhausted every branch"
        );
        Ok(ScheduleOutcome::Infeasible { stats })
    }

    /// Pop the newest commit and restore the launch state it replaced.
    fn undo(tasks: &mut [Task], log: &mut Vec<Commit>) {
        if let Some(Commit {
            launch: Launch::Task { index },
            previous: Some(previous),
        }) = log.pop()
        {
            tasks[index].launch(previous);
        }
    }

    // ── Diagnostics ───────────────────────────────────────────────────────────

    /// Reject timing parameters above the hyperperiod limit.
    fn check_ranges(&self, tasks: &[Task]) -> Result<(), SchedulerError> {
        let limit = self.limits.max_hyperperiod;
        for task in tasks {
            let fields = [
                ("delay", task.delay()),
                ("duration", task.duration()),
                ("deadline", task.deadline()),
            ];
            if let Some(&(field, value)) = fields.iter().find(|(_, v)| *v > limit) {
                return Err(SchedulerError::TaskOutOfRange {
                    task: task.name().to_string(),
                    field,
                    value,
                    limit,
                });
            }
        }
        Ok(())
    }

    fn log_diagnostics(workload: &Workload) {
        if let Some(u) = check_utilization(workload.tasks()) {
            warn!(
                workload = workload.name(),
                utilization = u,
                "total utilization exceeds 1.0; no single-processor schedule exists"
            );
        }
        for task in unfit_windows(workload.tasks()) {
            warn!(
                task = task.name(),
                delay = task.delay(),
                deadline = task.deadline(),
                duration = task.duration(),
                "start window shorter than duration; task can never launch on time"
            );
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::samples;
    use crate::verify::verify;

    // ── Test helpers ──────────────────────────────────────────────────────────

    fn windowed(name: &str, period: Time, duration: Time, delay: Time, deadline: Time) -> Task {
        Task::new(name, period, duration)
            .with_delay(delay)
            .with_deadline(deadline)
    }

    fn workload(tasks: Vec<Task>) -> Workload {
        let mut wl = Workload::new("test");
        wl.extend(tasks);
        wl
    }

    /// `(start, name)` pairs of a schedule, `"idle"` for gaps.
    fn replay<'a>(wl: &'a Workload, schedule: &Schedule) -> Vec<(Time, &'a str)> {
        schedule
            .timeline(wl)
            .map(|slot| {
                let name = match slot.launch {
                    Launch::Task { index } => wl.tasks()[index].name(),
                    Launch::Idle { .. } => "idle",
                };
                (slot.start, name)
            })
            .collect()
    }

    fn schedule_of(wl: &mut Workload) -> Schedule {
        Scheduler::new()
            .make_schedule(wl)
            .unwrap()
            .into_schedule()
            .expect("workload should be feasible")
    }

    // ── hyperperiod ───────────────────────────────────────────────────────────

    #[test]
    fn hyperperiod_is_lcm_of_periods() {
        let wl = workload(vec![
            Task::new("a", 20, 1),
            Task::new("b", 30, 1),
            Task::new("c", 50, 1),
        ]);
        assert_eq!(Scheduler::hyperperiod(wl.tasks()).unwrap(), 300);
    }

    #[test]
    fn hyperperiod_of_empty_set_is_an_error() {
        assert_eq!(
            Scheduler::hyperperiod(&[]).unwrap_err(),
            HyperperiodError::NoTasks
        );
    }

    // ── choices ───────────────────────────────────────────────────────────────

    #[test]
    fn choices_are_sorted_earliest_deadline_first() {
        let tasks = [
            windowed("late", 20, 1, 0, 20),
            windowed("early", 10, 1, 0, 5),
            windowed("mid", 10, 1, 0, 8),
        ];
        assert_eq!(
            Scheduler::choices(&tasks, 0),
            vec![
                Launch::Task { index: 1 },
                Launch::Task { index: 2 },
                Launch::Task { index: 0 },
            ]
        );
    }

    #[test]
    fn choices_keep_workload_order_on_equal_deadlines() {
        let tasks = [
            Task::new("a", 10, 1),
            Task::new("b", 10, 2),
            Task::new("c", 10, 3),
        ];
        let order: Vec<usize> = Scheduler::choices(&tasks, 0)
            .iter()
            .filter_map(Launch::task_index)
            .collect();
        assert_eq!(order, [0, 1, 2]);
    }

    #[test]
    fn choices_synthesise_idle_for_shortest_wait() {
        let tasks = [windowed("a", 20, 1, 5, 20), windowed("b", 20, 1, 3, 20)];
        assert_eq!(
            Scheduler::choices(&tasks, 0),
            vec![Launch::Idle { duration: 3 }]
        );
    }

    #[test]
    fn choices_exclude_tasks_that_would_miss_their_deadline() {
        let tasks = [windowed("tight", 10, 4, 0, 5), Task::new("loose", 10, 1)];
        // At 2 "tight" is released but 2 + 4 > 5.
        assert_eq!(
            Scheduler::choices(&tasks, 2),
            vec![Launch::Task { index: 1 }]
        );
    }

    #[test]
    fn released_but_doomed_task_leaves_no_choices() {
        let tasks = [windowed("tight", 10, 4, 0, 5)];
        assert!(Scheduler::choices(&tasks, 3).is_empty());
    }

    #[test]
    fn choices_skip_tasks_already_run_this_period() {
        let mut tasks = [Task::new("a", 10, 2), Task::new("b", 10, 2)];
        tasks[0].launch(0);
        assert_eq!(
            Scheduler::choices(&tasks, 2),
            vec![Launch::Task { index: 1 }]
        );
        tasks[1].launch(2);
        assert_eq!(
            Scheduler::choices(&tasks, 4),
            vec![Launch::Idle { duration: 6 }]
        );
    }

    #[test]
    fn choices_of_empty_task_set_are_empty() {
        assert!(Scheduler::choices(&[], 0).is_empty());
    }

    // ── make_schedule: scenarios ──────────────────────────────────────────────

    #[test]
    fn two_tasks_sharing_a_period() {
        let mut wl = workload(vec![Task::new("a", 10, 2), Task::new("b", 10, 2)]);
        let outcome = Scheduler::new().make_schedule(&mut wl).unwrap();
        assert_eq!(
            outcome.stats(),
            SearchStats {
                nodes: 3,
                backtracks: 0,
                max_depth: 3
            }
        );

        let schedule = outcome.into_schedule().unwrap();
        assert_eq!(schedule.hyperperiod(), 10);
        assert!(schedule.span(&wl) >= 10);
        assert_eq!(replay(&wl, &schedule), vec![(0, "a"), (2, "b"), (4, "idle")]);
        assert_eq!(schedule.launches()[2], Launch::Idle { duration: 6 });
    }

    #[test]
    fn overloaded_period_is_infeasible() {
        let mut wl = workload(vec![
            Task::new("a", 10, 4),
            Task::new("b", 10, 4),
            Task::new("c", 10, 4),
        ]);
        let outcome = Scheduler::new().make_schedule(&mut wl).unwrap();
        assert_eq!(
            outcome,
            ScheduleOutcome::Infeasible {
                stats: SearchStats {
                    nodes: 10,
                    backtracks: 9,
                    max_depth: 2
                }
            }
        );
    }

    #[test]
    fn single_task_runs_once_then_idles() {
        let mut wl = workload(vec![Task::new("a", 5, 1)]);
        let schedule = schedule_of(&mut wl);
        assert_eq!(schedule.hyperperiod(), 5);
        assert_eq!(
            schedule.launches(),
            [Launch::Task { index: 0 }, Launch::Idle { duration: 4 }]
        );
    }

    #[test]
    fn mixed_periods_repeat_each_task_per_period() {
        let mut wl = workload(vec![Task::new("a", 4, 1), Task::new("b", 6, 2)]);
        let schedule = schedule_of(&mut wl);
        assert_eq!(schedule.hyperperiod(), 12);
        assert_eq!(
            replay(&wl, &schedule),
            vec![
                (0, "a"),
                (1, "b"),
                (3, "idle"),
                (4, "a"),
                (5, "idle"),
                (6, "b"),
                (8, "a"),
                (9, "idle"),
            ]
        );
        assert_eq!(schedule.launch_count(0), 3);
        assert_eq!(schedule.launch_count(1), 2);
        assert!(verify(&wl, &schedule).is_empty());
    }

    #[test]
    fn release_offset_delays_launch() {
        let mut wl = workload(vec![windowed("a", 10, 3, 2, 8), Task::new("b", 5, 1)]);
        let schedule = schedule_of(&mut wl);
        assert_eq!(
            replay(&wl, &schedule),
            vec![(0, "b"), (1, "idle"), (2, "a"), (5, "b"), (6, "idle")]
        );
        assert!(verify(&wl, &schedule).is_empty());
    }

    #[test]
    fn backtracking_recovers_from_greedy_dead_end() {
        // At time 2 EDF prefers t0 over t1; after t0, t1 pushes t2's second
        // instance past its deadline, so the search backs out twice.
        let mut wl = workload(vec![
            windowed("t0", 8, 1, 1, 7),
            windowed("t1", 8, 2, 1, 8),
            windowed("t2", 4, 2, 0, 2),
        ]);
        let outcome = Scheduler::new().make_schedule(&mut wl).unwrap();
        let stats = outcome.stats();
        assert_eq!(stats.nodes, 7);
        assert_eq!(stats.backtracks, 2);

        let schedule = outcome.into_schedule().unwrap();
        assert_eq!(
            replay(&wl, &schedule),
            vec![(0, "t2"), (2, "t1"), (4, "t2"), (6, "t0"), (7, "idle")]
        );
        assert!(verify(&wl, &schedule).is_empty());
    }

    #[test]
    fn deadline_tighter_than_window_is_infeasible() {
        let mut wl = workload(vec![
            Task::new("long", 10, 6),
            windowed("tight", 5, 2, 0, 3),
        ]);
        let outcome = Scheduler::new().make_schedule(&mut wl).unwrap();
        assert!(!outcome.is_feasible());
        assert_eq!(outcome.stats().backtracks, 3);
    }

    // ── make_schedule: state discipline ───────────────────────────────────────

    #[test]
    fn infeasible_search_restores_every_launch_state() {
        let mut wl = workload(vec![
            Task::new("a", 10, 4),
            Task::new("b", 10, 4),
            Task::new("c", 10, 4),
        ]);
        let fresh = wl.clone();
        let outcome = Scheduler::new().make_schedule(&mut wl).unwrap();
        assert!(!outcome.is_feasible());
        assert_eq!(wl, fresh);
    }

    #[test]
    fn repeated_runs_produce_identical_schedules() {
        let mut wl = samples::workloads().remove(1);
        let sched = Scheduler::new();
        let reference = sched.make_schedule(&mut wl).unwrap();
        assert!(reference.is_feasible());

        for _ in 0..5 {
            // Launch state left by the previous run must not leak in.
            let again = sched.make_schedule(&mut wl).unwrap();
            assert_eq!(again, reference);
        }
    }

    #[test]
    fn empty_workload_is_trivially_feasible() {
        let mut wl = Workload::new("empty");
        let outcome = Scheduler::new().make_schedule(&mut wl).unwrap();
        let schedule = outcome.into_schedule().unwrap();
        assert!(schedule.is_empty());
        assert_eq!(schedule.hyperperiod(), 0);
    }

    // ── make_schedule: errors ─────────────────────────────────────────────────

    #[test]
    fn zero_period_is_invalid_input() {
        let mut wl = workload(vec![Task::new("a", 10, 1), Task::new("zero", 0, 1)]);
        let err = Scheduler::new().make_schedule(&mut wl).unwrap_err();
        assert!(matches!(err, SchedulerError::InvalidTask(_)), "got: {err}");
    }

    #[test]
    fn zero_duration_is_invalid_input() {
        let mut wl = workload(vec![Task::new("a", 10, 0)]);
        let err = Scheduler::new().make_schedule(&mut wl).unwrap_err();
        assert!(matches!(err, SchedulerError::InvalidTask(_)), "got: {err}");
    }

    #[test]
    fn hyperperiod_above_limit_is_rejected() {
        let mut wl = workload(vec![Task::new("a", 7, 1), Task::new("b", 11, 1)]);
        let sched = Scheduler::with_limits(SearchLimits {
            max_hyperperiod: 50,
            max_nodes: None,
        });
        let err = sched.make_schedule(&mut wl).unwrap_err();
        assert!(
            matches!(
                err,
                SchedulerError::Hyperperiod(HyperperiodError::TooLarge { value: 77, .. })
            ),
            "got: {err}"
        );
    }

    #[test]
    fn oversized_timing_parameters_are_rejected() {
        let mut wl = workload(vec![
            Task::new("c", 5, 1),
            Task::new("a", 20, 1),
            windowed("b", 10, 1, Time::MAX, Time::MAX),
        ]);
        assert!(wl.validate().is_ok());
        let err = Scheduler::new().make_schedule(&mut wl).unwrap_err();
        assert!(
            matches!(
                &err,
                SchedulerError::TaskOutOfRange { task, field: "delay", value, .. }
                    if task == "b" && *value == Time::MAX
            ),
            "got: {err}"
        );

        let mut wl = workload(vec![
            Task::new("c", 5, 1),
            Task::new("b", 10, Time::MAX).with_deadline(Time::MAX),
        ]);
        let err = Scheduler::new().make_schedule(&mut wl).unwrap_err();
        assert!(
            matches!(err, SchedulerError::TaskOutOfRange { field: "duration", .. }),
            "got: {err}"
        );
    }

    #[test]
    fn unbounded_limit_saturates_instead_of_overflowing() {
        let sched = Scheduler::with_limits(SearchLimits {
            max_hyperperiod: Time::MAX,
            max_nodes: None,
        });

        // "b" can never be released; the others fill the hyperperiod.
        let mut wl = workload(vec![
            Task::new("c", 5, 1),
            Task::new("a", 20, 1),
            windowed("b", 10, 1, Time::MAX, Time::MAX),
        ]);
        let schedule = sched.make_schedule(&mut wl).unwrap().into_schedule().unwrap();
        assert_eq!(schedule.hyperperiod(), 20);
        assert_eq!(schedule.launch_count(2), 0);

        // "b" runs once and its finish saturates past the hyperperiod.
        let mut wl = workload(vec![
            Task::new("c", 5, 1),
            Task::new("b", 10, Time::MAX).with_deadline(Time::MAX),
        ]);
        let schedule = sched.make_schedule(&mut wl).unwrap().into_schedule().unwrap();
        assert_eq!(
            schedule.launches(),
            [Launch::Task { index: 0 }, Launch::Task { index: 1 }]
        );
        assert_eq!(schedule.span(&wl), Time::MAX);
    }

    #[test]
    fn node_budget_exhaustion_restores_state() {
        let mut wl = workload(vec![
            Task::new("a", 10, 4),
            Task::new("b", 10, 4),
            Task::new("c", 10, 4),
        ]);
        let fresh = wl.clone();
        let sched = Scheduler::with_limits(SearchLimits {
            max_nodes: Some(4),
            ..SearchLimits::default()
        });
        let err = sched.make_schedule(&mut wl).unwrap_err();
        assert!(
            matches!(err, SchedulerError::SearchBudgetExceeded { limit: 4, .. }),
            "got: {err}"
        );
        assert_eq!(wl, fresh);
    }

    #[test]
    fn node_budget_large_enough_does_not_interfere() {
        let mut wl = workload(vec![Task::new("a", 10, 2), Task::new("b", 10, 2)]);
        let sched = Scheduler::with_limits(SearchLimits {
            max_nodes: Some(3),
            ..SearchLimits::default()
        });
        assert!(sched.make_schedule(&mut wl).unwrap().is_feasible());
    }
}
