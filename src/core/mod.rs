//! Core configuration model: typed input-file blocks, the `Experiment`
//! aggregate, and run-level parameters.
pub mod blocks;
pub mod experiment;
pub mod params;
