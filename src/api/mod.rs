//! High-level, ergonomic library API: render experiments to Dakota input
//! files, run complete studies from a `RunConfig`, and the lifecycle
//! contract for embedding the wrapper in a component-orchestration
//! framework. Prefer these entrypoints over the lower-level modules.
use std::path::{Path, PathBuf};

use tracing::info;

use crate::core::experiment::Experiment;
use crate::error::Result;
use crate::exec::{self, RunReport};
use crate::io::config::RunConfig;
use crate::io::outputs::{CONFIG_FILE, OutputFiles};
use crate::io::template::{self, TEMPLATE_EXTENSION};

/// Validate an experiment and render its input-file text.
pub fn render_input(experiment: &Experiment) -> Result<String> {
    experiment.validate()?;
    Ok(experiment.render())
}

/// Validate an experiment and write its input file to `path`.
pub fn write_input(experiment: &Experiment, path: &Path) -> Result<()> {
    let text = render_input(experiment)?;
    std::fs::write(path, text)?;
    Ok(())
}

/// Destination for a rendered template: the template's own name with the
/// `.dtmpl` suffix stripped, placed in the run directory.
fn rendered_template_target(template: &Path, run_directory: &Path) -> PathBuf {
    let name = template.file_name().unwrap_or_default();
    let target = match template.extension() {
        Some(ext) if ext == TEMPLATE_EXTENSION => Path::new(name).with_extension(""),
        _ => PathBuf::from(name),
    };
    run_directory.join(target)
}

/// Prepare the run directory: create it, substitute the component template
/// if one is configured, and write the Dakota input file.
pub fn stage(config: &RunConfig) -> Result<PathBuf> {
    config.experiment.validate()?;
    std::fs::create_dir_all(&config.run.run_directory)?;

    if let Some(template) = &config.run.template_file {
        let rendered = template::render_file(template, &config.run.template_values)?;
        let target = rendered_template_target(template, &config.run.run_directory);
        std::fs::write(&target, rendered)?;
        info!(template = ?template, target = ?target, "rendered component template");
    }

    let input_path = config.run.input_path();
    std::fs::write(&input_path, config.experiment.render())?;
    info!(input = ?input_path, "wrote Dakota input file");
    Ok(input_path)
}

/// Run a complete study: stage the run directory, invoke Dakota, and verify
/// the two output files it leaves behind.
pub fn run(config: &RunConfig) -> Result<RunReport> {
    stage(config)?;
    let report = exec::invoke(&config.run, &config.experiment.environment.tabular_data_file)?;
    report.outputs.verify()?;
    Ok(report)
}

/// The setup/initialize/update/finalize calling convention used to embed
/// this wrapper as a step inside a larger orchestration tool. Each call is
/// a direct pass-through to the templating/invocation logic.
pub trait Lifecycle {
    /// Bind to a run directory and persist the config there, returning the
    /// config file path a later `initialize` can consume.
    fn setup(&mut self, run_directory: &Path) -> Result<PathBuf>;
    /// Load a config file and stage the run directory.
    fn initialize(&mut self, config_file: &Path) -> Result<()>;
    /// Invoke the external executable once, blocking until it exits.
    fn update(&mut self) -> Result<()>;
    /// Verify the run's output files.
    fn finalize(&mut self) -> Result<()>;
}

/// A Dakota study as an orchestratable component.
pub struct Component {
    config: RunConfig,
    report: Option<RunReport>,
}

impl Component {
    pub fn new(config: RunConfig) -> Self {
        Self {
            config,
            report: None,
        }
    }

    pub fn config(&self) -> &RunConfig {
        &self.config
    }

    /// The report of the last successful `update`, if any.
    pub fn report(&self) -> Option<&RunReport> {
        self.report.as_ref()
    }

    fn output_files(&self) -> OutputFiles {
        OutputFiles::in_directory(
            &self.config.run.run_directory,
            &self.config.run.run_log,
            &self.config.experiment.environment.tabular_data_file,
        )
    }
}

impl Lifecycle for Component {
    fn setup(&mut self, run_directory: &Path) -> Result<PathBuf> {
        self.config.run.run_directory = run_directory.to_path_buf();
        std::fs::create_dir_all(run_directory)?;
        let config_path = run_directory.join(CONFIG_FILE);
        self.config.save(&config_path)?;
        info!(config = ?config_path, "component set up");
        Ok(config_path)
    }

    fn initialize(&mut self, config_file: &Path) -> Result<()> {
        self.config = RunConfig::load(config_file)?;
        stage(&self.config)?;
        Ok(())
    }

    fn update(&mut self) -> Result<()> {
        self.config.experiment.validate()?;
        let report = exec::invoke(
            &self.config.run,
            &self.config.experiment.environment.tabular_data_file,
        )?;
        self.report = Some(report);
        Ok(())
    }

    fn finalize(&mut self) -> Result<()> {
        self.output_files().verify()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::blocks::{Method, Responses, Variables};
    use crate::error::Error;

    fn experiment() -> Experiment {
        Experiment::new(
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
        )
    }

    #[test]
    fn invalid_experiment_fails_before_any_subprocess() {
        let mut bad = experiment();
        bad.responses.response_descriptors.clear();
        let mut config = RunConfig::new(bad);
        // Executable that cannot exist: if validation let us through, the
        // error kind would differ.
        config.run.executable = "dakota-definitely-not-installed".to_string();
        assert!(matches!(
            run(&config),
            Err(Error::MissingParameter { param: "response_descriptors" })
        ));
    }

    #[test]
    fn write_input_produces_renderable_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dakota.in");
        write_input(&experiment(), &path).unwrap();
        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, experiment().render());
    }

    #[test]
    fn stage_renders_template_without_dtmpl_suffix() {
        let dir = tempfile::tempdir().unwrap();
        let template_path = dir.path().join("component.cfg.dtmpl");
        std::fs::write(&template_path, "x1 = {x1}\n").unwrap();

        let mut config = RunConfig::new(experiment());
        config.run.run_directory = dir.path().join("run");
        config.run.template_file = Some(template_path);
        config
            .run
            .template_values
            .insert("x1".to_string(), "-0.3".to_string());

        stage(&config).unwrap();
        let rendered =
            std::fs::read_to_string(config.run.run_directory.join("component.cfg")).unwrap();
        assert_eq!(rendered, "x1 = -0.3\n");
        assert!(config.run.input_path().exists());
    }

    #[test]
    fn setup_then_initialize_round_trips_the_config() {
        let dir = tempfile::tempdir().unwrap();
        let mut component = Component::new(RunConfig::new(experiment()));
        let config_path = component.setup(dir.path()).unwrap();
        assert_eq!(config_path, dir.path().join(CONFIG_FILE));

        component.initialize(&config_path).unwrap();
        assert!(component.config().run.input_path().exists());
    }

    #[cfg(unix)]
    #[test]
    fn full_lifecycle_with_stub_executable() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        // Stands in for dakota: consumes -i/-o and writes both output files.
        let stub = dir.path().join("fake-dakota.sh");
        std::fs::write(
            &stub,
            "#!/bin/sh\necho 'run log' > \"$4\"\necho '%eval_id x1' > dakota.dat\n",
        )
        .unwrap();
        let mut perms = std::fs::metadata(&stub).unwrap().permissions();
        perms.set_mode(0o755);
        std::fs::set_permissions(&stub, perms).unwrap();

        let mut config = RunConfig::new(experiment());
        config.run.executable = stub.to_string_lossy().into_owned();
        let mut component = Component::new(config);

        let config_path = component.setup(dir.path()).unwrap();
        component.initialize(&config_path).unwrap();
        component.update().unwrap();
        component.finalize().unwrap();

        let report = component.report().unwrap();
        assert_eq!(report.status_code, 0);
        assert!(report.outputs.tabular_data.exists());
    }
}
