/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

//! Built-in reference workloads.
//!
//! Task names encode `period.duration.delay.deadline`; the CLI falls back to
//! these when no workload file is given.

use crate::task::Task;
use crate::workload::Workload;

/// The two reference workloads, in presentation order.
pub fn workloads() -> Vec<Workload> {
    vec![workload_1(), workload_2()]
}

fn task(name: &str, period: i64, duration: i64, delay: i64, deadline: i64) -> Task {
    Task::new(name, period, duration)
        .with_delay(delay)
        .with_deadline(deadline)
}

fn workload_1() -> Workload {
    let mut wl = Workload::new("Workload 1");
    wl.extend([
        task("10.2.0.10a", 10, 2, 0, 10),
        task("10.2.0.10b", 10, 2, 0, 10),
        task("20.1.5.20", 20, 1, 5, 20),
        task("20.2.5.20", 20, 2, 5, 20),
        task("40.2.5.30a", 40, 2, 5, 30),
        task("40.2.5.30b", 40, 2, 5, 30),
        task("80.2.10.60a", 80, 2, 10, 60),
        task("80.2.10.60b", 80, 2, 10, 60),
    ]);
    wl
}

fn workload_2() -> Workload {
    let mut wl = Workload::new("Workload 2");
    wl.extend([
        task("20.4.0.15", 20, 4, 0, 15),
        task("20.1.5.20", 20, 1, 5, 20),
        task("30.2.5.30", 30, 2, 5, 30),
        task("30.1.5.30", 30, 1, 5, 30),
        task("50.1.10.40a", 50, 1, 10, 40),
        task("50,1,10.40b", 50, 1, 10, 40),
        task("50.2.25.50a", 50, 2, 25, 50),
        task("50.2.25.50b", 50, 2, 25, 50),
    ]);
    wl
}

// ── Tests ─────────────────────────────────────────────────────────────────────
