use tracing::info;

use dakrun::api;
use dakrun::core::blocks::{Method, Responses, Variables};
use dakrun::core::experiment::Experiment;
use dakrun::io::config::RunConfig;
use dakrun::types::ResponseStatistic;

use super::args::CliArgs;
use super::errors::AppError;

/// A small, valid multidim parameter study users can edit into shape.
fn starter_config() -> RunConfig {
    RunConfig::new(Experiment::new(
        Method::MultidimParameterStudy {
            partitions: vec![3, 3],
        },
        Variables::UniformUncertain {
            descriptors: vec!["x1".to_string(), "x2".to_string()],
            lower_bounds: vec![0.0, 0.0],
            upper_bounds: vec![1.0, 1.0],
        },
        Responses {
            response_descriptors: vec!["y1".to_string()],
            response_statistics: vec![ResponseStatistic::Mean],
        },
    ))
}

fn apply_overrides(config: &mut RunConfig, args: &CliArgs) -> Result<(), AppError> {
    if let Some(run_dir) = &args.run_dir {
        config.run.run_directory = run_dir.clone();
    }
    if let Some(executable) = &args.executable {
        config.run.executable = executable.clone();
    }
    if let Some(template) = &args.template {
        config.run.template_file = Some(template.clone());
    }
    for pair in &args.template_values {
        let (name, value) = pair.split_once('=').ok_or_else(|| AppError::InvalidSetValue {
            value: pair.clone(),
        })?;
        config
            .run
            .template_values
            .insert(name.to_string(), value.to_string());
    }
    Ok(())
}

pub fn run(args: CliArgs) -> Result<(), Box<dyn std::error::Error>> {
    if args.log {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .init();
    }

    if let Some(path) = &args.init {
        starter_config().save(path)?;
        info!("Wrote starter config: {:?}", path);
        println!("Wrote starter config: {}", path.display());
        return Ok(());
    }

    let config_path = args.config.as_ref().ok_or(AppError::MissingArgument {
        arg: "--config".to_string(),
    })?;
    let mut config = RunConfig::load(config_path).map_err(AppError::Dakrun)?;
    apply_overrides(&mut config, &args)?;

    if args.render_only {
        let input_path = api::stage(&config).map_err(AppError::Dakrun)?;
        info!("Input file written: {:?}", input_path);
        println!("Input file written: {}", input_path.display());
        return Ok(());
    }

    let report = api::run(&config).map_err(AppError::Dakrun)?;
    info!(
        "Run complete in {:.2}s; run log {:?}, tabular data {:?}",
        report.duration_seconds, report.outputs.run_log, report.outputs.tabular_data
    );
    println!(
        "Run complete in {:.2}s\n  run log:      {}\n  tabular data: {}",
        report.duration_seconds,
        report.outputs.run_log.display(),
        report.outputs.tabular_data.display()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starter_config_is_valid_and_renderable() {
        let config = starter_config();
        assert!(config.experiment.validate().is_ok());
        assert!(config.experiment.render().contains("multidim_parameter_study"));
    }

    #[test]
    fn set_pairs_require_an_equals_sign() {
        let mut config = starter_config();
        let args = CliArgs {
            config: None,
            init: None,
            render_only: false,
            run_dir: None,
            executable: None,
            template: None,
            template_values: vec!["broken".to_string()],
            log: false,
        };
        assert!(matches!(
            apply_overrides(&mut config, &args),
            Err(AppError::InvalidSetValue { .. })
        ));
    }
}
