//! Persisted run configuration (`dakota.json`): run-level parameters plus
//! the experiment itself, so a study can be re-run from file alone.
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::experiment::Experiment;
use crate::core::params::RunParams;
use crate::error::Result;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunConfig {
    #[serde(default)]
    pub run: RunParams,
    pub experiment: Experiment,
}

impl RunConfig {
    pub fn new(experiment: Experiment) -> Self {
        Self {
            run: RunParams::default(),
            experiment,
        }
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&text)?)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let text = serde_json::to_string_pretty(self)?;
        std::fs::write(path, text)?;
        Ok(())
    }
}
