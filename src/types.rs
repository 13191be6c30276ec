//! Shared types and enums used across DAKRUN.
//! Includes `SampleType`, `BasisPolynomialFamily`, `ResponseStatistic`, and
//! `InterfaceKind`. Display impls render the exact Dakota input-file keyword.
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Technique Dakota uses for choosing points during a sampling study.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug, Serialize, Deserialize)]
pub enum SampleType {
    Random,
    Lhs,
}

impl std::fmt::Display for SampleType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            SampleType::Random => "random",
            SampleType::Lhs => "lhs",
        };
        write!(f, "{}", s)
    }
}

/// Polynomial basis family for expansion-based uncertainty methods.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug, Serialize, Deserialize)]
pub enum BasisPolynomialFamily {
    Extended,
    Askey,
    Wiener,
}

impl std::fmt::Display for BasisPolynomialFamily {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            BasisPolynomialFamily::Extended => "extended",
            BasisPolynomialFamily::Askey => "askey",
            BasisPolynomialFamily::Wiener => "wiener",
        };
        write!(f, "{}", s)
    }
}

/// Statistic the analysis driver reports for a response.
///
/// Carried alongside the response descriptors for the driver's benefit;
/// Dakota's `responses` block does not render them.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug, Serialize, Deserialize)]
pub enum ResponseStatistic {
    Mean,
    Median,
    StandardDeviation,
}

impl std::fmt::Display for ResponseStatistic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            ResponseStatistic::Mean => "mean",
            ResponseStatistic::Median => "median",
            ResponseStatistic::StandardDeviation => "standard_deviation",
        };
        write!(f, "{}", s)
    }
}

/// How Dakota invokes the analysis driver.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug, Serialize, Deserialize)]
pub enum InterfaceKind {
    Fork,
    Direct,
}

impl std::fmt::Display for InterfaceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            InterfaceKind::Fork => "fork",
            InterfaceKind::Direct => "direct",
        };
        write!(f, "{}", s)
    }
}
