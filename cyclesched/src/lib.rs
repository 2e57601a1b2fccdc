/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

//! cyclesched – static cyclic scheduler for periodic tasks
//!
//! Module layout:
//!
//! ```text
//! lib.rs
//! ├── task          – periodic task model and launch bookkeeping
//! ├── workload      – named, ordered task set
//! ├── hyperperiod/  – LCM / GCD helpers and hyperperiod analysis
//! ├── scheduler/    – backtracking EDF search over one hyperperiod
//! ├── verify        – independent schedule checker
//! ├── render        – ASCII timeline output
//! ├── config/       – YAML workload catalog
//! └── samples       – built-in reference workloads
//! ```

pub mod config;
pub mod hyperperiod;
pub mod render;
pub mod samples;
pub mod scheduler;
pub mod task;
pub mod verify;
pub mod workload;
