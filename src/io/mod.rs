//! File-level concerns: template substitution, persisted run configs, and
//! the well-known output files.
pub mod config;
pub mod outputs;
pub mod template;

pub use template::TemplateError;
