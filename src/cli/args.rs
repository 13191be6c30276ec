use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "dakrun", version, about = "DAKRUN CLI")]
pub struct CliArgs {
    /// Run config file (dakota.json) describing the study
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Write a starter config file to this path and exit
    #[arg(long, value_name = "PATH")]
    pub init: Option<PathBuf>,

    /// Validate and write the Dakota input file without launching Dakota
    #[arg(long, default_value_t = false)]
    pub render_only: bool,

    /// Override the run directory from the config
    #[arg(long)]
    pub run_dir: Option<PathBuf>,

    /// Override the Dakota executable from the config
    #[arg(long)]
    pub executable: Option<String>,

    /// Component template file (.dtmpl) substituted before the run
    #[arg(long)]
    pub template: Option<PathBuf>,

    /// Template substitution values as name=value pairs
    #[arg(long = "set", value_name = "NAME=VALUE")]
    pub template_values: Vec<String>,

    /// Enable logging
    #[arg(long, default_value_t = false)]
    pub log: bool,
}
