//! Well-known file names and post-run output checks.
//!
//! Dakota produces exactly two files this layer cares about: the free-form
//! run log and the tabular data file. Neither is parsed here; callers read
//! them directly.
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Default name of the rendered Dakota input file.
pub const INPUT_FILE: &str = "dakota.in";
/// Default name of the free-form run log.
pub const RUN_LOG_FILE: &str = "dakota.out";
/// Default name of the tabular data file.
pub const TABULAR_DATA_FILE: &str = "dakota.dat";
/// Default name of the persisted run config.
pub const CONFIG_FILE: &str = "dakota.json";

/// Paths of the two output files of a run.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct OutputFiles {
    pub run_log: PathBuf,
    pub tabular_data: PathBuf,
}

impl OutputFiles {
    pub fn in_directory(dir: &Path, run_log: &str, tabular_data: &str) -> Self {
        Self {
            run_log: dir.join(run_log),
            tabular_data: dir.join(tabular_data),
        }
    }

    /// Confirm both files exist and are non-empty. Called after a
    /// successful exit; a zero-length file means the run went wrong in a
    /// way the exit status did not capture.
    pub fn verify(&self) -> Result<()> {
        for path in [&self.run_log, &self.tabular_data] {
            let meta = std::fs::metadata(path).map_err(|_| Error::MissingOutput {
                path: path.clone(),
            })?;
            if meta.len() == 0 {
                return Err(Error::MissingOutput { path: path.clone() });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verify_passes_on_non_empty_files() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(RUN_LOG_FILE), "Dakota version 6.4\n").unwrap();
        std::fs::write(dir.path().join(TABULAR_DATA_FILE), "%eval_id x1 y1\n").unwrap();
        let outputs = OutputFiles::in_directory(dir.path(), RUN_LOG_FILE, TABULAR_DATA_FILE);
        assert!(outputs.verify().is_ok());
    }

    #[test]
    fn verify_rejects_missing_and_empty_files() {
        let dir = tempfile::tempdir().unwrap();
        let outputs = OutputFiles::in_directory(dir.path(), RUN_LOG_FILE, TABULAR_DATA_FILE);
        assert!(matches!(outputs.verify(), Err(Error::MissingOutput { .. })));

        std::fs::write(dir.path().join(RUN_LOG_FILE), "log\n").unwrap();
        std::fs::write(dir.path().join(TABULAR_DATA_FILE), "").unwrap();
        assert!(matches!(outputs.verify(), Err(Error::MissingOutput { .. })));
    }
}
