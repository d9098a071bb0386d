//! # specs2readme
//!
//! Renders a role's `meta/argument_specs.yml` into the "Role Variables" and
//! "Role Defaults" tables of its `README.md`.

use anyhow::Context;
use argspecs::config::{DiffMode, ReadmeConfig, TableFormat};
use argspecs::logging::init_structured_logging;
use argspecs::readme::document_role;
use argspecs::runner::{run_roles, EXIT_USAGE};
use argspecs::walker::lookup_roles;
use clap::Parser;
use std::io::Write;
use std::path::PathBuf;
use std::process;
use tracing::{error, info};

#[derive(Parser, Debug)]
#[command(name = "specs2readme")]
#[command(about = "Generate README.md documentation from argument_specs.yml")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Cli {
    /// Parse all roles in a collection
    #[arg(short, long)]
    collection: bool,

    /// Input role directory (collection directory with --collection)
    #[arg(short, long = "role_dir", visible_alias = "role-dir", value_name = "DIR", default_value = ".")]
    role_dir: PathBuf,

    /// Dry-run, write the patched README to standard output
    #[arg(short, long = "dry-run")]
    dry_run: bool,

    /// Use two columns table format instead of three columns
    #[arg(short = '2', long = "two-columns")]
    two_columns: bool,

    /// Emit all variables, not only the ones not already in README.md
    #[arg(short, long = "no-diff")]
    no_diff: bool,

    /// Verbose output level (use multiple times for more verbosity)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    /// Apply the command line flags on top of `base`; flags only ever enable
    fn apply(&self, base: ReadmeConfig) -> ReadmeConfig {
        let mut config = base;
        config.role_dir = self.role_dir.clone();
        config.collection = self.collection;
        config.dry_run = self.dry_run;
        if self.two_columns {
            config.table_format = TableFormat::TwoColumns;
        }
        if self.no_diff {
            config.diff_mode = DiffMode::Replace;
        }
        config
    }
}

fn main() {
    let cli = Cli::parse();
    init_structured_logging(cli.verbose);

    let config = cli.apply(ReadmeConfig::from_env());
    process::exit(exit_code(run(&config)));
}

fn exit_code(result: anyhow::Result<i32>) -> i32 {
    result.unwrap_or_else(|e| {
        error!("{e:#}");
        EXIT_USAGE
    })
}

fn run(config: &ReadmeConfig) -> anyhow::Result<i32> {
    config.validate()?;
    info!(role_dir = %config.role_dir.display(), collection = config.collection, "Work directory");

    let roles = lookup_roles(&config.role_dir, config.collection)
        .context("Failed to list roles")?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let report = run_roles(&roles, "specs2readme", |role_dir| {
        document_role(role_dir, config, &mut out)
    });
    out.flush().context("Failed to flush standard output")?;

    for (role, outcome) in &report.succeeded {
        if outcome.written {
            info!(role = %role, readme = %outcome.readme_path.display(), "README updated");
        }
    }
    report.log_summary("specs2readme");

    Ok(report.exit_code())
}
