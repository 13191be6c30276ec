//! Blocking invocation of the external Dakota executable.
//!
//! One subprocess per run, launched in the run directory and waited on to
//! completion. There is no retry and no partial-result recovery: a spawn
//! failure or nonzero exit surfaces directly to the caller.
use std::process::Command;
use std::time::Instant;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{info, warn};

use crate::core::params::RunParams;
use crate::error::{Error, Result};
use crate::io::outputs::OutputFiles;

/// Outcome of a completed Dakota invocation.
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub started_at: DateTime<Utc>,
    pub duration_seconds: f64,
    pub status_code: i32,
    pub outputs: OutputFiles,
}

/// Launch `dakota -i <input> -o <run log>` in the run directory and wait.
///
/// `tabular_data_file` is the name the experiment's environment block
/// declared; it locates the second output file for the report.
pub fn invoke(params: &RunParams, tabular_data_file: &str) -> Result<RunReport> {
    let mut command = Command::new(&params.executable);
    command
        .arg("-i")
        .arg(&params.input_file)
        .arg("-o")
        .arg(&params.run_log)
        .current_dir(&params.run_directory);
    adjust_library_path(&mut command);

    info!(
        executable = %params.executable,
        input = %params.input_file,
        run_dir = ?params.run_directory,
        "launching Dakota"
    );

    let started_at = Utc::now();
    let timer = Instant::now();
    let status = command.status().map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            Error::ExecutableNotFound {
                executable: params.executable.clone(),
            }
        } else {
            Error::Io(e)
        }
    })?;
    let duration_seconds = timer.elapsed().as_secs_f64();

    if !status.success() {
        warn!(%status, "Dakota run failed");
        return Err(Error::ExecutionFailed {
            status: status.to_string(),
            run_log: params.run_log_path(),
        });
    }

    info!(duration_seconds, "Dakota run complete");
    Ok(RunReport {
        started_at,
        duration_seconds,
        // Abnormal termination without a code is already handled above.
        status_code: status.code().unwrap_or(0),
        outputs: OutputFiles::in_directory(
            &params.run_directory,
            &params.run_log,
            tabular_data_file,
        ),
    })
}

/// Dakota's dynamic libraries are found through `LD_LIBRARY_PATH`; on macOS
/// the loader reads `DYLD_LIBRARY_PATH` instead, so mirror the former into
/// the latter for the child when it is not already set.
#[cfg(target_os = "macos")]
fn adjust_library_path(command: &mut Command) {
    if std::env::var_os("DYLD_LIBRARY_PATH").is_none() {
        if let Some(ld_path) = std::env::var_os("LD_LIBRARY_PATH") {
            command.env("DYLD_LIBRARY_PATH", ld_path);
        }
    }
}

#[cfg(not(target_os = "macos"))]
fn adjust_library_path(_command: &mut Command) {}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(executable: &str, dir: &std::path::Path) -> RunParams {
        RunParams {
            executable: executable.to_string(),
            run_directory: dir.to_path_buf(),
            ..RunParams::default()
        }
    }

    #[test]
    fn missing_executable_is_reported_as_such() {
        let dir = tempfile::tempdir().unwrap();
        let err = invoke(&params("dakota-definitely-not-installed", dir.path()), "dakota.dat")
            .unwrap_err();
        assert!(matches!(err, Error::ExecutableNotFound { .. }));
    }

    #[cfg(unix)]
    #[test]
    fn zero_exit_produces_report() {
        let dir = tempfile::tempdir().unwrap();
        let report = invoke(&params("true", dir.path()), "dakota.dat").unwrap();
        assert_eq!(report.status_code, 0);
        assert_eq!(report.outputs.run_log, dir.path().join("dakota.out"));
        assert_eq!(report.outputs.tabular_data, dir.path().join("dakota.dat"));
    }

    #[cfg(unix)]
    #[test]
    fn nonzero_exit_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = invoke(&params("false", dir.path()), "dakota.dat").unwrap_err();
        assert!(matches!(err, Error::ExecutionFailed { .. }));
    }
}
