//! Evaluation output structures

use super::validation::InputError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Readiness classification
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    Ready,
    NotReady,
    Invalid(InputError),
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Ready => write!(f, "Ready to Retire ✅"),
            Verdict::NotReady => write!(f, "Not Ready to Retire ❌"),
            Verdict::Invalid(err) => write!(f, "Error: {}", err),
        }
    }
}

/// Result of one evaluation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationResult {
    /// Lump sum needed at retirement
    pub corpus_needed: f64,

    /// Net worth today (assets minus debts)
    pub corpus_available: f64,

    pub ready: bool,

    /// Rendered verdict label
    pub verdict: String,

    /// Suggestions in rule order
    pub suggestions: Vec<String>,
}

impl EvaluationResult {
    /// Result for an input that failed validation: zeroed figures and one remedy line
    pub fn rejected(error: &InputError) -> Self {
        Self {
            corpus_needed: 0.0,
            corpus_available: 0.0,
            ready: false,
            verdict: Verdict::Invalid(error.clone()).to_string(),
            suggestions: vec![error.remedy()],
        }
    }

    /// True when this result came from a validation failure
    pub fn is_rejected(&self) -> bool {
        self.verdict.starts_with("Error:")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::Flag;

    #[test]
    fn test_verdict_labels() {
        assert_eq!(Verdict::Ready.to_string(), "Ready to Retire ✅");
        assert_eq!(Verdict::NotReady.to_string(), "Not Ready to Retire ❌");
        assert_eq!(
            Verdict::Invalid(InputError::InvalidFlag(Flag::OnRent)).to_string(),
            "Error: On Rent should be Y or N"
        );
    }

    #[test]
    fn test_rejected_result() {
        let result = EvaluationResult::rejected(&InputError::NegativeValue);
        assert_eq!(result.corpus_needed, 0.0);
        assert_eq!(result.corpus_available, 0.0);
        assert!(!result.ready);
        assert!(result.is_rejected());
        assert_eq!(
            result.verdict,
            "Error: Please ensure all financial inputs are non-negative."
        );
        assert_eq!(result.suggestions, vec!["Please check your input values.".to_string()]);
    }
}
