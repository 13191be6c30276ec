//! The `method` block: analysis method selection plus the method-independent
//! controls Dakota accepts on every method.
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::types::{BasisPolynomialFamily, SampleType};

use super::{Levels, push_levels, push_values};

/// Method-independent controls, rendered right after the method name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MethodControls {
    /// Stopping criterion based on number of iterations.
    pub max_iterations: Option<u32>,
    /// Stopping criterion based on convergence of the objective function or
    /// statistics. Must lie on the open interval (0, 1).
    pub convergence_tolerance: Option<f64>,
}

impl MethodControls {
    pub fn validate(&self) -> Result<()> {
        if let Some(tol) = self.convergence_tolerance {
            if tol <= 0.0 || tol >= 1.0 {
                return Err(Error::InvalidParameter {
                    param: "convergence_tolerance",
                    value: tol.to_string(),
                    reason: "must be on the open interval (0, 1)",
                });
            }
        }
        Ok(())
    }
}

/// The analysis method run by the Dakota executable.
///
/// Parameter studies sweep the variables along predefined patterns; the
/// sampling and polynomial-chaos methods are uncertainty-quantification
/// methods driven by random or structured sample points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "name", rename_all = "snake_case")]
pub enum Method {
    VectorParameterStudy {
        /// End point of the sweep, one entry per variable.
        final_point: Vec<f64>,
        /// Number of steps from the initial point to the final point.
        num_steps: u32,
    },
    CenteredParameterStudy {
        /// Steps taken in each direction away from the center, per variable.
        steps_per_variable: Vec<u32>,
        /// Step size per variable.
        step_vector: Vec<f64>,
    },
    MultidimParameterStudy {
        /// Number of intervals per variable in the grid.
        partitions: Vec<u32>,
    },
    Sampling {
        samples: u32,
        sample_type: SampleType,
        /// Seed for the random number generator; `None` or `0` lets Dakota
        /// pick one, making repeated studies non-reproducible.
        seed: Option<u32>,
        #[serde(default, skip_serializing_if = "Levels::is_empty")]
        probability_levels: Levels,
        #[serde(default, skip_serializing_if = "Levels::is_empty")]
        response_levels: Levels,
        #[serde(default)]
        variance_based_decomp: bool,
    },
    PolynomialChaos {
        basis_polynomial_family: BasisPolynomialFamily,
        quadrature_order: u32,
        samples: u32,
        sample_type: SampleType,
        seed: Option<u32>,
        #[serde(default, skip_serializing_if = "Levels::is_empty")]
        probability_levels: Levels,
    },
}

impl Method {
    /// The method keyword as it appears in the input file.
    pub fn name(&self) -> &'static str {
        match self {
            Method::VectorParameterStudy { .. } => "vector_parameter_study",
            Method::CenteredParameterStudy { .. } => "centered_parameter_study",
            Method::MultidimParameterStudy { .. } => "multidim_parameter_study",
            Method::Sampling { .. } => "sampling",
            Method::PolynomialChaos { .. } => "polynomial_chaos",
        }
    }

    /// Number of variables this method's vectors imply, if any.
    pub fn implied_variable_count(&self) -> Option<usize> {
        match self {
            Method::VectorParameterStudy { final_point, .. } => Some(final_point.len()),
            Method::CenteredParameterStudy { step_vector, .. } => Some(step_vector.len()),
            Method::MultidimParameterStudy { partitions } => Some(partitions.len()),
            Method::Sampling { .. } | Method::PolynomialChaos { .. } => None,
        }
    }

    pub fn validate(&self) -> Result<()> {
        match self {
            Method::VectorParameterStudy {
                final_point,
                num_steps,
            } => {
                if final_point.is_empty() {
                    return Err(Error::MissingParameter {
                        param: "final_point",
                    });
                }
                if *num_steps == 0 {
                    return Err(Error::InvalidParameter {
                        param: "num_steps",
                        value: num_steps.to_string(),
                        reason: "must be at least 1",
                    });
                }
            }
            Method::CenteredParameterStudy {
                steps_per_variable,
                step_vector,
            } => {
                if steps_per_variable.is_empty() {
                    return Err(Error::MissingParameter {
                        param: "steps_per_variable",
                    });
                }
                if step_vector.len() != steps_per_variable.len() {
                    return Err(Error::LengthMismatch {
                        param: "step_vector",
                        expected: steps_per_variable.len(),
                        actual: step_vector.len(),
                    });
                }
            }
            Method::MultidimParameterStudy { partitions } => {
                if partitions.is_empty() {
                    return Err(Error::MissingParameter {
                        param: "partitions",
                    });
                }
            }
            Method::Sampling { samples, .. } => {
                if *samples == 0 {
                    return Err(Error::InvalidParameter {
                        param: "samples",
                        value: samples.to_string(),
                        reason: "must be at least 1",
                    });
                }
            }
            Method::PolynomialChaos {
                quadrature_order,
                samples,
                ..
            } => {
                if *quadrature_order == 0 {
                    return Err(Error::InvalidParameter {
                        param: "quadrature_order",
                        value: quadrature_order.to_string(),
                        reason: "must be at least 1",
                    });
                }
                if *samples == 0 {
                    return Err(Error::InvalidParameter {
                        param: "samples",
                        value: samples.to_string(),
                        reason: "must be at least 1",
                    });
                }
            }
        }
        Ok(())
    }

    /// Render the full `method` block, controls included.
    pub fn render(&self, controls: &MethodControls) -> String {
        let mut s = format!("method\n  {}\n", self.name());
        if let Some(max_iterations) = controls.max_iterations {
            s.push_str(&format!("    max_iterations = {}\n", max_iterations));
        }
        if let Some(tol) = controls.convergence_tolerance {
            s.push_str(&format!("    convergence_tolerance = {}\n", tol));
        }
        match self {
            Method::VectorParameterStudy {
                final_point,
                num_steps,
            } => {
                s.push_str("    final_point =");
                push_values(&mut s, final_point);
                s.push_str(&format!("    num_steps = {}\n", num_steps));
            }
            Method::CenteredParameterStudy {
                steps_per_variable,
                step_vector,
            } => {
                s.push_str("    steps_per_variable =");
                push_values(&mut s, steps_per_variable);
                s.push_str("    step_vector =");
                push_values(&mut s, step_vector);
            }
            Method::MultidimParameterStudy { partitions } => {
                s.push_str("    partitions =");
                push_values(&mut s, partitions);
            }
            Method::Sampling {
                samples,
                sample_type,
                seed,
                probability_levels,
                response_levels,
                variance_based_decomp,
            } => {
                s.push_str(&format!("    sample_type = {}\n", sample_type));
                s.push_str(&format!("    samples = {}\n", samples));
                if let Some(seed) = seed {
                    if *seed != 0 {
                        s.push_str(&format!("    seed = {}\n", seed));
                    }
                }
                if !probability_levels.is_empty() {
                    s.push_str("    probability_levels =");
                    push_levels(&mut s, probability_levels);
                }
                if !response_levels.is_empty() {
                    s.push_str("    response_levels =");
                    push_levels(&mut s, response_levels);
                }
                if *variance_based_decomp {
                    s.push_str("    variance_based_decomp\n");
                }
            }
            Method::PolynomialChaos {
                basis_polynomial_family,
                quadrature_order,
                samples,
                sample_type,
                seed,
                probability_levels,
            } => {
                if *basis_polynomial_family != BasisPolynomialFamily::Extended {
                    s.push_str(&format!("    {}\n", basis_polynomial_family));
                }
                s.push_str(&format!("    quadrature_order = {}\n", quadrature_order));
                s.push_str(&format!("    sample_type = {}\n", sample_type));
                s.push_str(&format!("    samples = {}\n", samples));
                if let Some(seed) = seed {
                    if *seed != 0 {
                        s.push_str(&format!("    seed = {}\n", seed));
                    }
                }
                if !probability_levels.is_empty() {
                    s.push_str("    probability_levels =");
                    push_levels(&mut s, probability_levels);
                }
            }
        }
        s
    }
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.render(&MethodControls::default()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vector_study_renders_points_and_steps() {
        let method = Method::VectorParameterStudy {
            final_point: vec![1.1, 1.3],
            num_steps: 10,
        };
        assert_eq!(
            method.to_string(),
            "method\n  vector_parameter_study\n    final_point = 1.1 1.3\n    num_steps = 10\n"
        );
    }

    #[test]
    fn controls_render_before_method_keywords() {
        let method = Method::MultidimParameterStudy {
            partitions: vec![3, 3],
        };
        let controls = MethodControls {
            max_iterations: Some(100),
            convergence_tolerance: Some(0.001),
        };
        assert_eq!(
            method.render(&controls),
            "method\n  multidim_parameter_study\n    max_iterations = 100\n    convergence_tolerance = 0.001\n    partitions = 3 3\n"
        );
    }

    #[test]
    fn sampling_renders_levels_and_skips_zero_seed() {
        let method = Method::Sampling {
            samples: 24,
            sample_type: SampleType::Lhs,
            seed: Some(0),
            probability_levels: Levels::Flat(vec![0.1, 0.5, 0.9]),
            response_levels: Levels::PerResponse(vec![vec![1.0, 2.0], vec![3.0, 4.0]]),
            variance_based_decomp: true,
        };
        let rendered = method.to_string();
        assert!(!rendered.contains("seed"));
        assert!(rendered.contains("    probability_levels = 0.1 0.5 0.9\n"));
        assert!(rendered.contains("    response_levels =\n      1 2\n      3 4\n"));
        assert!(rendered.ends_with("    variance_based_decomp\n"));
    }

    #[test]
    fn polynomial_chaos_omits_default_basis() {
        let method = Method::PolynomialChaos {
            basis_polynomial_family: BasisPolynomialFamily::Extended,
            quadrature_order: 4,
            samples: 100,
            sample_type: SampleType::Random,
            seed: Some(17),
            probability_levels: Levels::default(),
        };
        let rendered = method.to_string();
        assert!(!rendered.contains("extended"));
        assert!(rendered.contains("    quadrature_order = 4\n"));
        assert!(rendered.contains("    seed = 17\n"));
    }

    #[test]
    fn centered_study_rejects_mismatched_step_vector() {
        let method = Method::CenteredParameterStudy {
            steps_per_variable: vec![2, 2],
            step_vector: vec![0.1],
        };
        assert!(matches!(
            method.validate(),
            Err(Error::LengthMismatch { param: "step_vector", expected: 2, actual: 1 })
        ));
    }

    #[test]
    fn convergence_tolerance_must_be_open_unit_interval() {
        let controls = MethodControls {
            max_iterations: None,
            convergence_tolerance: Some(1.0),
        };
        assert!(controls.validate().is_err());
    }
}
