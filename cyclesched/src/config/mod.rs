/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

//! Workload catalog loading.
//!
//! The expected YAML structure is:
//! ```yaml
//! workloads:
//!   - name: "Workload 1"
//!     tasks:
//!       - name: "10.2.0.10a"
//!         period: 10
//!         duration: 2
//!         delay: 0        # optional, defaults to 0
//!         deadline: 10    # optional, defaults to period
//! ```
//!
//! Workloads keep file order, and so do the tasks within each workload.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::{debug, info, warn};

use crate::task::{Task, Time};
use crate::workload::Workload;

// ── Private YAML deserialization types ────────────────────────────────────────

#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    workloads: Vec<WorkloadEntry>,
}

#[derive(Debug, Deserialize)]
struct WorkloadEntry {
    name: String,
    #[serde(default)]
    tasks: Vec<TaskEntry>,
}

/// Per-task fields as they appear in the YAML file.
///
/// `delay` and `deadline` are optional; a missing deadline means the whole
/// period.
#[derive(Debug, Deserialize)]
struct TaskEntry {
    name: String,
    period: Time,
    duration: Time,
    #[serde(default)]
    delay: Time,
    deadline: Option<Time>,
}

impl TaskEntry {
    fn into_task(self) -> Task {
        let deadline = self.deadline.unwrap_or(self.period);
        Task::new(self.name, self.period, self.duration)
            .with_delay(self.delay)
            .with_deadline(deadline)
    }
}

// ── WorkloadCatalog ───────────────────────────────────────────────────────────

/// Loads workloads from a YAML file.
#[derive(Debug, Default)]
pub struct WorkloadCatalog {
    workloads: Vec<Workload>,

    /// Set to `true` after a successful [`load_from_file`](Self::load_from_file).
    loaded: bool,
}

impl WorkloadCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses `path` and replaces any previously loaded workloads.
    ///
    /// Every task is validated while loading, so a catalog that loads
    /// successfully only holds well-formed workloads.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read, the YAML is structurally
    /// invalid, or a task has invalid timing parameters.
    pub fn load_from_file(&mut self, path: &Path) -> Result<()> {
        info!("Loading workloads from: {}", path.display());

        self.workloads.clear();
        self.loaded = false;

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Cannot open workload file: {}", path.display()))?;

        let file: CatalogFile = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse YAML file: {}", path.display()))?;

        let mut workloads = Vec::with_capacity(file.workloads.len());
        for entry in file.workloads {
            let mut workload = Workload::new(entry.name);
            workload.extend(entry.tasks.into_iter().map(TaskEntry::into_task));

            workload
                .validate()
                .with_context(|| format!("Invalid workload '{}'", workload.name()))?;

            debug!(
                "  Workload: {} | Tasks: {}",
                workload.name(),
                workload.len()
            );
            for task in workload.tasks() {
                debug!("    {task}");
            }

            workloads.push(workload);
        }

        if workloads.is_empty() {
            warn!("No workloads found in {}", path.display());
        }

        self.workloads = workloads;
        self.loaded = true;

        info!("Successfully loaded {} workload(s)", self.workloads.len());
        Ok(())
    }

    /// Returns `true` after a successful call to [`load_from_file`](Self::load_from_file).
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    pub fn workloads(&self) -> &[Workload] {
        &self.workloads
    }

    /// First workload named `name`.
    pub fn get(&self, name: &str) -> Option<&Workload> {
        self.workloads.iter().find(|w| w.name() == name)
    }

    pub fn into_workloads(self) -> Vec<Workload> {
        self.workloads
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
