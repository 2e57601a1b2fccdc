/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

//! A named, ordered collection of [`Task`]s.
//!
//! Task order is significant: it is the tie-break order for equal deadlines
//! and the row order of the rendered timeline.  Schedules refer to tasks by
//! their index in this collection.

use crate::task::{Task, TaskError};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Workload {
    name: String,
    tasks: Vec<Task>,
}

impl Workload {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            tasks: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Append `task` to the end of the collection.
    pub fn add(&mut self, task: Task) {
        self.tasks.push(task);
    }

    /// Builder form of [`add`](Self::add).
    pub fn with_task(mut self, task: Task) -> Self {
        self.add(task);
        self
    }

    /// Ordered view of every task.
    ///
    /// The slice stays stable for as long as it is borrowed; any mutation
    /// needs `&mut self` and therefore ends the borrow first.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn task(&self, index: usize) -> Option<&Task> {
        self.tasks.get(index)
    }

    pub(crate) fn tasks_mut(&mut self) -> &mut [Task] {
        &mut self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Validate every task, stopping at the first malformed one.
    pub fn validate(&self) -> Result<(), TaskError> {
        self.tasks.iter().try_for_each(Task::validate)
    }

    /// Put every task back into its initial launch state.
    pub fn reset_launches(&mut self) {
        self.tasks.iter_mut().for_each(Task::reset);
    }
}

impl Extend<Task> for Workload {
    fn extend<I: IntoIterator<Item = Task>>(&mut self, iter: I) {
        self.tasks.extend(iter);
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
