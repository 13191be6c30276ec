use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::types::ResponseStatistic;

use super::push_quoted;

/// The `responses` block. Gradients and Hessians are never requested; the
/// wrapped studies are derivative-free.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Responses {
    pub response_descriptors: Vec<String>,
    /// Statistic the analysis driver computes per response. Not rendered
    /// into the block; length-checked against the descriptors.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub response_statistics: Vec<ResponseStatistic>,
}

impl Responses {
    pub fn len(&self) -> usize {
        self.response_descriptors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.response_descriptors.is_empty()
    }

    pub fn validate(&self) -> Result<()> {
        if self.is_empty() {
            return Err(Error::MissingParameter {
                param: "response_descriptors",
            });
        }
        if !self.response_statistics.is_empty()
            && self.response_statistics.len() != self.response_descriptors.len()
        {
            return Err(Error::LengthMismatch {
                param: "response_statistics",
                expected: self.response_descriptors.len(),
                actual: self.response_statistics.len(),
            });
        }
        Ok(())
    }
}

impl std::fmt::Display for Responses {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut s = format!("responses\n  response_functions = {}\n", self.len());
        s.push_str("    response_descriptors =");
        push_quoted(&mut s, &self.response_descriptors);
        s.push_str("  no_gradients\n");
        s.push_str("  no_hessians\n");
        write!(f, "{}", s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_descriptors_and_derivative_flags() {
        let responses = Responses {
            response_descriptors: vec!["Qs_median".to_string(), "Q_mean".to_string()],
            response_statistics: vec![ResponseStatistic::Median, ResponseStatistic::Mean],
        };
        assert_eq!(
            responses.to_string(),
            "responses\n  response_functions = 2\n    response_descriptors = 'Qs_median' 'Q_mean'\n  no_gradients\n  no_hessians\n"
        );
    }

    #[test]
    fn statistics_must_match_descriptor_count() {
        let responses = Responses {
            response_descriptors: vec!["a".to_string(), "b".to_string()],
            response_statistics: vec![ResponseStatistic::Mean],
        };
        assert!(matches!(
            responses.validate(),
            Err(Error::LengthMismatch { param: "response_statistics", expected: 2, actual: 1 })
        ));
    }
}
