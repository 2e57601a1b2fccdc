/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

use std::path::PathBuf;
use std::process;

use clap::Parser;
use tracing::{error, info, warn};

use cyclesched::config::WorkloadCatalog;
use cyclesched::hyperperiod::DEFAULT_HYPERPERIOD_LIMIT;
use cyclesched::render::render;
use cyclesched::samples;
use cyclesched::scheduler::{ScheduleOutcome, Scheduler, SearchLimits};
use cyclesched::verify::verify;
use cyclesched::workload::Workload;

// ── CLI argument definition ───────────────────────────────────────────────────

/// Static cyclic scheduler for periodic tasks.
///
/// Example:
///   cyclesched --workloads workloads/sample.yaml --max-nodes 1000000
#[derive(Debug, Parser)]
#[command(
    name = "cyclesched",
    about = "Build a non-preemptive cyclic schedule for each workload",
    long_about = None,
)]
struct Cli {
    /// YAML workload file.  The built-in reference workloads are used when absent.
    #[arg(short = 'w', long = "workloads")]
    workloads: Option<PathBuf>,

    /// Largest hyperperiod accepted before a workload is rejected.
    #[arg(long = "max-hyperperiod", default_value_t = DEFAULT_HYPERPERIOD_LIMIT)]
    max_hyperperiod: i64,

    /// Abort a search after this many nodes.
    #[arg(long = "max-nodes")]
    max_nodes: Option<u64>,

    /// Skip the independent check of each found schedule.
    #[arg(long = "no-verify", default_value_t = false)]
    no_verify: bool,
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() {
    // Level is controlled by the RUST_LOG env-var (e.g. RUST_LOG=debug).
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    info!(
        workloads       = ?cli.workloads,
        max_hyperperiod = cli.max_hyperperiod,
        max_nodes       = ?cli.max_nodes,
        verify          = !cli.no_verify,
        "Configuration"
    );

    // ── Load workloads ────────────────────────────────────────────────────────
    let workloads = match &cli.workloads {
        Some(path) => {
            let mut catalog = WorkloadCatalog::new();
            if let Err(e) = catalog.load_from_file(path) {
                error!("Failed to load workloads: {:#}", e);
                process::exit(1);
            }
            catalog.into_workloads()
        }
        None => {
            warn!("No workload file provided, using the built-in reference workloads");
            samples::workloads()
        }
    };

    let scheduler = Scheduler::with_limits(SearchLimits {
        max_hyperperiod: cli.max_hyperperiod,
        max_nodes: cli.max_nodes,
    });

    let mut failed = false;
    for mut workload in workloads {
        if !run_workload(&scheduler, &mut workload, !cli.no_verify) {
            failed = true;
        }
    }

    if failed {
        process::exit(1);
    }
}

/// Schedule, print and optionally verify one workload.  Returns `false` on a
/// scheduler error or a verification failure.
fn run_workload(scheduler: &Scheduler, workload: &mut Workload, check: bool) -> bool {
    let outcome = match scheduler.make_schedule(workload) {
        Ok(outcome) => outcome,
        Err(e) => {
            error!(workload = workload.name(), "Scheduling failed: {}", e);
            return false;
        }
    };

    let schedule = match outcome {
        ScheduleOutcome::Feasible { schedule, .. } => schedule,
        ScheduleOutcome::Infeasible { .. } => {
            println!("Schedule is not feasible");
            return true;
        }
    };

    print!("{}", render(workload, &schedule));

    if !check {
        return true;
    }

    let violations = verify(workload, &schedule);
    for v in &violations {
        println!("Workload {}, {}", workload.name(), v);
    }
    violations.is_empty()
}
