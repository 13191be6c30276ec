//! The full Dakota experiment: one of each input-file block, validated as a
//! whole and rendered in Dakota's canonical block order.
use serde::{Deserialize, Serialize};

use crate::core::blocks::{
    Environment, Interface, Levels, Method, MethodControls, Responses, Variables,
};
use crate::error::{Error, Result};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Experiment {
    #[serde(default)]
    pub environment: Environment,
    #[serde(default)]
    pub controls: MethodControls,
    pub method: Method,
    pub variables: Variables,
    #[serde(default)]
    pub interface: Interface,
    pub responses: Responses,
}

impl Experiment {
    pub fn new(method: Method, variables: Variables, responses: Responses) -> Self {
        Self {
            environment: Environment::default(),
            controls: MethodControls::default(),
            method,
            variables,
            interface: Interface::default(),
            responses,
        }
    }

    /// Validate every block plus the cross-block consistency rules. Called
    /// before any input file is written, so a bad experiment never reaches
    /// the subprocess.
    pub fn validate(&self) -> Result<()> {
        self.controls.validate()?;
        self.method.validate()?;
        self.variables.validate()?;
        self.interface.validate()?;
        self.responses.validate()?;

        if let Some(expected) = self.method.implied_variable_count() {
            if self.variables.len() != expected {
                return Err(Error::LengthMismatch {
                    param: "descriptors",
                    expected,
                    actual: self.variables.len(),
                });
            }
        }
        if let Method::Sampling {
            probability_levels,
            response_levels,
            ..
        } = &self.method
        {
            self.check_level_rows("probability_levels", probability_levels)?;
            self.check_level_rows("response_levels", response_levels)?;
        }
        if let Method::PolynomialChaos {
            probability_levels, ..
        } = &self.method
        {
            self.check_level_rows("probability_levels", probability_levels)?;
        }
        Ok(())
    }

    fn check_level_rows(&self, param: &'static str, levels: &Levels) -> Result<()> {
        if let Levels::PerResponse(rows) = levels {
            if !rows.is_empty() && rows.len() != self.responses.len() {
                return Err(Error::LengthMismatch {
                    param,
                    expected: self.responses.len(),
                    actual: rows.len(),
                });
            }
        }
        Ok(())
    }

    /// Render the complete input file. Pure: the same experiment always
    /// produces the same bytes.
    pub fn render(&self) -> String {
        let blocks = [
            self.environment.to_string(),
            self.method.render(&self.controls),
            self.variables.to_string(),
            self.interface.to_string(),
            self.responses.to_string(),
        ];
        blocks.join("\n")
    }
}

impl std::fmt::Display for Experiment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.render())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::SampleType;

    fn multidim_experiment() -> Experiment {
        Experiment::new(
            Method::MultidimParameterStudy {
                partitions: vec![3, 3],
            },
            Variables::UniformUncertain {
                descriptors: vec!["T_air_min".to_string(), "T_air_max".to_string()],
                lower_bounds: vec![-20.0, 5.0],
                upper_bounds: vec![-5.0, 20.0],
            },
            Responses {
                response_descriptors: vec!["frostnumber__air".to_string()],
                response_statistics: vec![],
            },
        )
    }

    #[test]
    fn rendering_is_deterministic() {
        let experiment = multidim_experiment();
        assert_eq!(experiment.render(), experiment.render());
    }

    #[test]
    fn rendered_input_contains_every_declared_parameter() {
        let experiment = multidim_experiment();
        let rendered = experiment.render();
        for needle in [
            "multidim_parameter_study",
            "partitions = 3 3",
            "'T_air_min' 'T_air_max'",
            "lower_bounds = -20 5",
            "upper_bounds = -5 20",
            "'frostnumber__air'",
            "tabular_data_file = 'dakota.dat'",
        ] {
            assert!(rendered.contains(needle), "missing {:?} in:\n{}", needle, rendered);
        }
    }

    #[test]
    fn blocks_render_in_canonical_order() {
        let rendered = multidim_experiment().render();
        let pos = |kw: &str| rendered.find(kw).unwrap();
        assert!(pos("environment") < pos("method"));
        assert!(pos("method") < pos("variables"));
        assert!(pos("variables") < pos("interface"));
        assert!(pos("interface") < pos("responses"));
    }

    #[test]
    fn variable_count_must_match_method_vectors() {
        let mut experiment = multidim_experiment();
        experiment.method = Method::MultidimParameterStudy {
            partitions: vec![3, 3, 3],
        };
        assert!(matches!(
            experiment.validate(),
            Err(Error::LengthMismatch { param: "descriptors", expected: 3, actual: 2 })
        ));
    }

    #[test]
    fn per_response_levels_must_match_response_count() {
        let mut experiment = multidim_experiment();
        experiment.method = Method::Sampling {
            samples: 10,
            sample_type: SampleType::Random,
            seed: None,
            probability_levels: Levels::PerResponse(vec![vec![0.1], vec![0.5]]),
            response_levels: Levels::default(),
            variance_based_decomp: false,
        };
        assert!(experiment.validate().is_err());
    }

    #[test]
    fn valid_experiment_passes() {
        assert!(multidim_experiment().validate().is_ok());
    }
}
