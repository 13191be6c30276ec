//! Command Line Interface (CLI) layer for DAKRUN.
//!
//! This module defines argument parsing (`args`), error types (`errors`),
//! and the orchestration logic (`runner`) for rendering input files and
//! launching Dakota runs. It wires user-provided options to the underlying
//! library functionality exposed via `dakrun::api`.
//!
//! If you are embedding DAKRUN into another application, prefer using
//! the high-level `dakrun::api` module instead of calling the CLI code.
pub mod args;
pub mod errors;
pub mod runner;

pub use args::CliArgs;
pub use runner::run;
