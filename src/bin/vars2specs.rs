//! # vars2specs
//!
//! Generates `meta/argument_specs.yml` from the variables defined in a role's
//! `defaults/main.yml` and `vars/main.yml`. Existing entries are kept as they
//! are; only unspecified variables are added.

use anyhow::Context;
use argspecs::collector::{collect_role, CollectOutcome};
use argspecs::config::CollectorConfig;
use argspecs::logging::init_structured_logging;
use argspecs::runner::{run_roles, EXIT_USAGE};
use argspecs::walker::lookup_roles;
use clap::Parser;
use std::path::PathBuf;
use std::process;
use tracing::{error, info};

#[derive(Parser, Debug)]
#[command(name = "vars2specs")]
#[command(about = "Generate argument_specs.yml from the variables parsed in a role")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Cli {
    /// Parse all roles in a collection
    #[arg(short, long)]
    collection: bool,

    /// Input role directory (collection directory with --collection)
    #[arg(short, long = "role_dir", visible_alias = "role-dir", value_name = "DIR", default_value = ".")]
    role_dir: PathBuf,

    /// Verbose output level (use multiple times for more verbosity)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl From<&Cli> for CollectorConfig {
    fn from(cli: &Cli) -> Self {
        CollectorConfig {
            role_dir: cli.role_dir.clone(),
            collection: cli.collection,
        }
    }
}

fn main() {
    let cli = Cli::parse();
    init_structured_logging(cli.verbose);

    let config = CollectorConfig::from(&cli);
    process::exit(exit_code(run(&config)));
}

fn exit_code(result: anyhow::Result<i32>) -> i32 {
    result.unwrap_or_else(|e| {
        error!("{e:#}");
        EXIT_USAGE
    })
}

fn run(config: &CollectorConfig) -> anyhow::Result<i32> {
    config.validate()?;
    info!(role_dir = %config.role_dir.display(), collection = config.collection, "Work directory");

    let roles = lookup_roles(&config.role_dir, config.collection)
        .context("Failed to list roles")?;

    let report = run_roles(&roles, "vars2specs", collect_role);
    for (role, outcome) in &report.succeeded {
        summarize(role, outcome);
    }
    report.log_summary("vars2specs");

    Ok(report.exit_code())
}

fn summarize(role: &str, outcome: &CollectOutcome) {
    if outcome.written {
        info!(
            role = %role,
            spec = %outcome.spec_path.display(),
            added = ?outcome.merge.added,
            "Argument specification updated"
        );
    } else {
        info!(role = %role, "Argument specification unchanged");
    }
}
