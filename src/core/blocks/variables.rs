//! The `variables` block: the parameter set the method sweeps or samples.
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

use super::{push_quoted, push_values};

/// Variable set declared to Dakota. The variant picks the Dakota variable
/// type; every vector field must carry one entry per descriptor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Variables {
    ContinuousDesign {
        /// Labels attached to the variables.
        descriptors: Vec<String>,
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        initial_point: Vec<f64>,
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        lower_bounds: Vec<f64>,
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        upper_bounds: Vec<f64>,
    },
    UniformUncertain {
        descriptors: Vec<String>,
        lower_bounds: Vec<f64>,
        upper_bounds: Vec<f64>,
    },
    NormalUncertain {
        descriptors: Vec<String>,
        means: Vec<f64>,
        std_deviations: Vec<f64>,
    },
}

impl Variables {
    /// The variable-type keyword as it appears in the input file.
    pub fn type_name(&self) -> &'static str {
        match self {
            Variables::ContinuousDesign { .. } => "continuous_design",
            Variables::UniformUncertain { .. } => "uniform_uncertain",
            Variables::NormalUncertain { .. } => "normal_uncertain",
        }
    }

    pub fn descriptors(&self) -> &[String] {
        match self {
            Variables::ContinuousDesign { descriptors, .. }
            | Variables::UniformUncertain { descriptors, .. }
            | Variables::NormalUncertain { descriptors, .. } => descriptors,
        }
    }

    pub fn len(&self) -> usize {
        self.descriptors().len()
    }

    pub fn is_empty(&self) -> bool {
        self.descriptors().is_empty()
    }

    pub fn validate(&self) -> Result<()> {
        if self.is_empty() {
            return Err(Error::MissingParameter {
                param: "descriptors",
            });
        }
        let n = self.len();
        let check = |param: &'static str, v: &[f64], required: bool| -> Result<()> {
            if v.is_empty() && !required {
                return Ok(());
            }
            if v.len() != n {
                return Err(Error::LengthMismatch {
                    param,
                    expected: n,
                    actual: v.len(),
                });
            }
            Ok(())
        };
        match self {
            Variables::ContinuousDesign {
                initial_point,
                lower_bounds,
                upper_bounds,
                ..
            } => {
                check("initial_point", initial_point, false)?;
                check("lower_bounds", lower_bounds, false)?;
                check("upper_bounds", upper_bounds, false)?;
            }
            Variables::UniformUncertain {
                lower_bounds,
                upper_bounds,
                ..
            } => {
                check("lower_bounds", lower_bounds, true)?;
                check("upper_bounds", upper_bounds, true)?;
                for (lo, hi) in lower_bounds.iter().zip(upper_bounds) {
                    if lo >= hi {
                        return Err(Error::InvalidParameter {
                            param: "lower_bounds",
                            value: lo.to_string(),
                            reason: "lower bound must be below its upper bound",
                        });
                    }
                }
            }
            Variables::NormalUncertain {
                means,
                std_deviations,
                ..
            } => {
                check("means", means, true)?;
                check("std_deviations", std_deviations, true)?;
                if std_deviations.iter().any(|sd| *sd <= 0.0) {
                    return Err(Error::InvalidParameter {
                        param: "std_deviations",
                        value: format!("{:?}", std_deviations),
                        reason: "standard deviations must be positive",
                    });
                }
            }
        }
        Ok(())
    }
}

impl std::fmt::Display for Variables {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut s = format!("variables\n  {} = {}\n", self.type_name(), self.len());
        s.push_str("    descriptors =");
        push_quoted(&mut s, self.descriptors());
        let mut line = |key: &str, values: &[f64]| {
            if !values.is_empty() {
                s.push_str(&format!("    {} =", key));
                push_values(&mut s, values);
            }
        };
        match self {
            Variables::ContinuousDesign {
                initial_point,
                lower_bounds,
                upper_bounds,
                ..
            } => {
                line("initial_point", initial_point);
                line("lower_bounds", lower_bounds);
                line("upper_bounds", upper_bounds);
            }
            Variables::UniformUncertain {
                lower_bounds,
                upper_bounds,
                ..
            } => {
                line("lower_bounds", lower_bounds);
                line("upper_bounds", upper_bounds);
            }
            Variables::NormalUncertain {
                means,
                std_deviations,
                ..
            } => {
                line("means", means);
                line("std_deviations", std_deviations);
            }
        }
        write!(f, "{}", s)
    }
}
