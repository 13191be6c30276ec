use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::types::InterfaceKind;

use super::push_quoted;

/// The `interface` block: how Dakota calls back into the component under
/// study. `parameters_file` and `results_file` name the per-evaluation
/// exchange files the driver reads and writes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Interface {
    pub id_interface: String,
    pub kind: InterfaceKind,
    pub analysis_driver: String,
    /// Extra tokens passed to the driver, e.g. the component name and its
    /// rendered config file.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub analysis_components: Vec<String>,
    pub parameters_file: String,
    pub results_file: String,
}

impl Default for Interface {
    fn default() -> Self {
        Self {
            id_interface: "dakrun".to_string(),
            kind: InterfaceKind::Fork,
            analysis_driver: "dakrun-driver".to_string(),
            analysis_components: Vec::new(),
            parameters_file: "params.in".to_string(),
            results_file: "results.out".to_string(),
        }
    }
}

impl Interface {
    pub fn validate(&self) -> Result<()> {
        if self.analysis_driver.is_empty() {
            return Err(Error::MissingParameter {
                param: "analysis_driver",
            });
        }
        Ok(())
    }
}

impl std::fmt::Display for Interface {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut s = String::from("interface\n");
        s.push_str(&format!("  id_interface = '{}'\n", self.id_interface));
        s.push_str(&format!("  {}\n", self.kind));
        s.push_str(&format!("  analysis_driver = '{}'\n", self.analysis_driver));
        if !self.analysis_components.is_empty() {
            s.push_str("  analysis_components =");
            push_quoted(&mut s, &self.analysis_components);
        }
        s.push_str(&format!("  parameters_file = '{}'\n", self.parameters_file));
        s.push_str(&format!("  results_file = '{}'\n", self.results_file));
        write!(f, "{}", s)
    }
}
