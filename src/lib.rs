#![allow(clippy::doc_markdown)] // Allow technical terms like YAML, README in docs
#![allow(clippy::missing_errors_doc)] // Allow public functions without # Errors sections
#![allow(clippy::must_use_candidate)] // Allow methods without must_use when context is clear

//! # argspecs
//!
//! Documentation tooling for Ansible roles.
//!
//! ## Overview
//!
//! Two command line programs keep a role's variables, its
//! `meta/argument_specs.yml` and its `README.md` in sync:
//!
//! - **`vars2specs`** reads `defaults/main.yml` and `vars/main.yml` and adds
//!   an argument spec entry for every variable that is not specified yet.
//! - **`specs2readme`** renders the argument specification into "Role
//!   Variables" and "Role Defaults" tables inside marker-delimited regions of
//!   the README.
//!
//! Both are additive and idempotent: hand-written descriptions and README rows
//! survive every run, and running either tool twice on unchanged input leaves
//! the files byte-for-byte identical.
//!
//! ## Module Organization
//!
//! - [`spec`] - Argument specification document and entries
//! - [`collector`] - Variable discovery and additive merge
//! - [`readme`] - Table rendering and managed region patching
//! - [`walker`] - Role discovery for collections
//! - [`runner`] - Per-role error isolation and exit codes
//! - [`config`] - Options of both programs
//! - [`error`] - Structured error handling
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use argspecs::collector::collect_role;
//! use argspecs::config::ReadmeConfig;
//! use argspecs::readme::document_role;
//! use std::path::Path;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let role = Path::new("roles/webserver");
//!
//! let collected = collect_role(role)?;
//! println!("added {} variables", collected.merge.added.len());
//!
//! let config = ReadmeConfig::default();
//! document_role(role, &config, &mut std::io::stdout())?;
//! # Ok(())
//! # }
//! ```

pub mod collector;
pub mod config;
pub mod constants;
pub mod error;
pub mod logging;
pub mod readme;
pub mod runner;
pub mod spec;
pub mod utils;
pub mod walker;

pub use config::{CollectorConfig, DiffMode, ReadmeConfig, TableFormat};
pub use error::{ArgSpecsError, Result};
pub use spec::{ArgumentEntry, SpecDocument};
