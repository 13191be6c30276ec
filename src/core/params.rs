use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::io::outputs::{INPUT_FILE, RUN_LOG_FILE};

/// Run-level parameters suitable for config files: where to run, what to
/// call the files involved, and the optional component template.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunParams {
    /// Directory the study runs in; input and output files land here.
    pub run_directory: PathBuf,
    /// Name of the rendered Dakota input file.
    pub input_file: String,
    /// Name of the free-form run log Dakota writes.
    pub run_log: String,
    /// Executable to invoke; override to pin a specific install.
    pub executable: String,
    /// Optional component template (`.dtmpl`) substituted before the run.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template_file: Option<PathBuf>,
    /// Values substituted into the template, keyed by placeholder name.
    /// A BTreeMap keeps config serialization stable across runs.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub template_values: BTreeMap<String, String>,
}

impl Default for RunParams {
    fn default() -> Self {
        Self {
            run_directory: PathBuf::from("."),
            input_file: INPUT_FILE.to_string(),
            run_log: RUN_LOG_FILE.to_string(),
            executable: "dakota".to_string(),
            template_file: None,
            template_values: BTreeMap::new(),
        }
    }
}

impl RunParams {
    pub fn input_path(&self) -> PathBuf {
        self.run_directory.join(&self.input_file)
    }

    pub fn run_log_path(&self) -> PathBuf {
        self.run_directory.join(&self.run_log)
    }
}
