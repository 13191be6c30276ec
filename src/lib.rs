#![doc = r#"
DAKRUN — a configuration-generation and execution wrapper for the Dakota toolkit.

This crate provides a typed, ergonomic API for describing a Dakota analysis method
(parameter studies, sampling, polynomial chaos), rendering it into Dakota's native
input-file syntax, invoking the separately installed `dakota` executable as a
blocking subprocess, and locating the two output files it produces. It powers the
DAKRUN CLI and can be embedded in your own Rust applications or orchestration
frameworks.

All analytical work happens inside the external executable; this crate treats it
as an opaque black box and implements no parameter-study or UQ algorithm itself.

Requirements
------------
- The Dakota toolkit installed and on `PATH` (or pointed to via `RunParams`).
- Rust 2024 edition toolchain.

Add dependency
--------------
```toml
[dependencies]
dakrun = "0.1"
```

Quick start: run a parameter study
----------------------------------
```rust,no_run
use dakrun::{Experiment, Method, Responses, RunConfig, Variables, api};

fn main() -> dakrun::Result<()> {
    let experiment = Experiment::new(
        Method::VectorParameterStudy {
            final_point: vec![1.1, 1.3],
            num_steps: 10,
        },
        Variables::ContinuousDesign {
            descriptors: vec!["x1".to_string(), "x2".to_string()],
            initial_point: vec![-0.3, 0.2],
            lower_bounds: vec![],
            upper_bounds: vec![],
        },
        Responses {
            response_descriptors: vec!["y1".to_string()],
            response_statistics: vec![],
        },
    );

    let report = api::run(&RunConfig::new(experiment))?;
    println!(
        "done in {:.2}s; tabular data at {}",
        report.duration_seconds,
        report.outputs.tabular_data.display()
    );
    Ok(())
}
```

Render the input file without running
-------------------------------------
```rust
use dakrun::{Experiment, Method, Responses, Variables, api};

fn render() -> dakrun::Result<String> {
    let experiment = Experiment::new(
        Method::MultidimParameterStudy { partitions: vec![3, 3] },
        Variables::UniformUncertain {
            descriptors: vec!["T_air_min".to_string(), "T_air_max".to_string()],
            lower_bounds: vec![-20.0, 5.0],
            upper_bounds: vec![-5.0, 20.0],
        },
        Responses {
            response_descriptors: vec!["frostnumber__air".to_string()],
            response_statistics: vec![],
        },
    );
    api::render_input(&experiment)
}
```

Component templates
-------------------
A study often drives a model whose own config file must vary per run. Keep that
config as a `.dtmpl` template with `{name}` placeholders and let the wrapper
substitute concrete values before launching:

```rust
use std::collections::BTreeMap;
use dakrun::io::template;

fn fill() -> Result<String, dakrun::io::TemplateError> {
    let mut values = BTreeMap::new();
    values.insert("T_air".to_string(), template::fmt_scalar(-5.0));
    template::substitute("t_air = {T_air}\n", &values)
}
```

Embedding: the lifecycle contract
---------------------------------
Orchestration frameworks drive components through setup/initialize/update/finalize.
`Component` implements that contract over the same templating/invocation logic:

```rust,no_run
use std::path::Path;
use dakrun::{Component, Experiment, Lifecycle, Method, Responses, RunConfig, Variables};

fn main() -> dakrun::Result<()> {
    let config = RunConfig::new(Experiment::new(
        Method::MultidimParameterStudy { partitions: vec![3, 3] },
        Variables::UniformUncertain {
            descriptors: vec!["x1".to_string(), "x2".to_string()],
            lower_bounds: vec![0.0, 0.0],
            upper_bounds: vec![1.0, 1.0],
        },
        Responses {
            response_descriptors: vec!["y1".to_string()],
            response_statistics: vec![],
        },
    ));

    let mut component = Component::new(config);
    let config_file = component.setup(Path::new("/tmp/study"))?;
    component.initialize(&config_file)?;
    component.update()?;
    component.finalize()
}
```

Error handling
--------------
All public functions return `dakrun::Result<T>`; match on `dakrun::Error` to handle
specific cases. Parameter problems surface before any subprocess is launched;
subprocess failures carry the exit status and the run-log path.

```rust,no_run
use dakrun::{Error, RunConfig, api};

fn report(config: &RunConfig) {
    match api::run(config) {
        Ok(_) => {}
        Err(Error::ExecutableNotFound { executable }) => {
            eprintln!("is Dakota installed? could not launch {executable}")
        }
        Err(Error::ExecutionFailed { status, run_log }) => {
            eprintln!("Dakota failed ({status}); inspect {}", run_log.display())
        }
        Err(other) => eprintln!("Other error: {other}"),
    }
}
```

Useful modules
--------------
- [`api`] — high-level entry points and the lifecycle contract.
- [`core`] — typed input-file blocks, `Experiment`, and `RunParams`.
- [`io`] — template substitution, config persistence, output-file checks.
- [`exec`] — the blocking subprocess invocation.
- [`error`] — crate-level `Error` and `Result`.
"#]

// Core modules (public)
pub mod api;
pub mod core;
pub mod error;
pub mod exec;
pub mod io;
pub mod types;

// Curated public API surface
// Types
pub use crate::core::params::RunParams;
pub use crate::error::{Error, Result};
pub use crate::types::{BasisPolynomialFamily, InterfaceKind, ResponseStatistic, SampleType};

// Input-file model
pub use crate::core::blocks::{
    Environment, Interface, Levels, Method, MethodControls, Responses, Variables,
};
pub use crate::core::experiment::Experiment;

// Files and subprocess
pub use crate::exec::RunReport;
pub use crate::io::config::RunConfig;
pub use crate::io::outputs::{
    CONFIG_FILE, INPUT_FILE, OutputFiles, RUN_LOG_FILE, TABULAR_DATA_FILE,
};
pub use crate::io::template::TemplateError;

// High-level API re-exports
pub use crate::api::{Component, Lifecycle, render_input, run, stage, write_input};
