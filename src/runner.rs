//! Per-role error boundary shared by both binaries.
//!
//! Every role is attempted even when an earlier one fails. Failures are logged
//! with the role name and collected into a [`RunReport`], which decides the
//! process exit code once all roles are done.

use crate::error::{ArgSpecsError, Result};
use crate::logging::{log_error, log_role_operation};
use crate::walker::role_name;
use std::path::{Path, PathBuf};
use tracing::{error, info};

/// Exit code when every role succeeded
pub const EXIT_SUCCESS: i32 = 0;
/// Exit code when at least one role failed
pub const EXIT_ROLE_FAILURE: i32 = 1;
/// Exit code for unusable invocations (bad role directory, bad flags)
pub const EXIT_USAGE: i32 = 2;

#[derive(Debug)]
pub struct RoleFailure {
    pub role: String,
    pub role_dir: PathBuf,
    pub error: ArgSpecsError,
}

#[derive(Debug)]
pub struct RunReport<T> {
    pub succeeded: Vec<(String, T)>,
    pub failures: Vec<RoleFailure>,
}

impl<T> Default for RunReport<T> {
    fn default() -> Self {
        Self {
            succeeded: Vec::new(),
            failures: Vec::new(),
        }
    }
}

impl<T> RunReport<T> {
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }

    pub fn exit_code(&self) -> i32 {
        if self.is_success() {
            EXIT_SUCCESS
        } else {
            EXIT_ROLE_FAILURE
        }
    }

    /// Log one line per failed role, then a summary
    pub fn log_summary(&self, operation: &str) {
        for failure in &self.failures {
            error!(role = %failure.role, error = %failure.error, "Role failed");
        }

        info!(
            operation = %operation,
            succeeded = self.succeeded.len(),
            failed = self.failures.len(),
            "Run finished"
        );
    }
}

/// Apply `process` to every role, isolating failures per role
pub fn run_roles<T, F>(roles: &[PathBuf], operation: &str, mut process: F) -> RunReport<T>
where
    F: FnMut(&Path) -> Result<T>,
{
    let mut report = RunReport::default();

    for role_dir in roles {
        let role = role_name(role_dir);
        log_role_operation(operation, &role, "started");

        match process(role_dir) {
            Ok(outcome) => {
                log_role_operation(operation, &role, "completed");
                report.succeeded.push((role, outcome));
            }
            Err(e) => {
                log_error(operation, "process_role", &e.to_string(), Some(&role));
                report.failures.push(RoleFailure {
                    role,
                    role_dir: role_dir.clone(),
                    error: e,
                });
            }
        }
    }

    report
}
