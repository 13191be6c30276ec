use serde::{Deserialize, Serialize};

use crate::io::outputs::TABULAR_DATA_FILE;

/// The `environment` block: top-level settings, currently just the
/// tabular-data capture that produces the `dakota.dat` output file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Environment {
    pub tabular_data_file: String,
}

impl Default for Environment {
    fn default() -> Self {
        Self {
            tabular_data_file: TABULAR_DATA_FILE.to_string(),
        }
    }
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "environment")?;
        writeln!(f, "  tabular_data")?;
        writeln!(f, "    tabular_data_file = '{}'", self.tabular_data_file)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_tabular_data_block() {
        let block = Environment::default();
        assert_eq!(
            block.to_string(),
            "environment\n  tabular_data\n    tabular_data_file = 'dakota.dat'\n"
        );
    }
}
