//! Assessment service
//!
//! Wires the evaluator to the optional collaborators: the evaluation store
//! and the report builder. Collaborator failures are logged and never change
//! the evaluation result.

use crate::evaluation::{EvaluationResult, RetirementEvaluator};
use crate::profile::{EvaluationInput, Submission};
use crate::report::{ReportBuilder, ReportDocument};
use crate::store::{record_evaluation, EvaluationStore};
use log::debug;
use serde::Serialize;

/// Outcome of assessing one submission
#[derive(Debug, Clone, Serialize)]
pub struct Assessment {
    /// Typed input, absent when the submission failed validation
    pub input: Option<EvaluationInput>,
    pub result: EvaluationResult,
    /// Whether a store row was written
    pub saved: bool,
}

impl Assessment {
    /// Render the report; `None` when there is no validated input to describe
    pub fn report(&self, builder: &ReportBuilder) -> Option<ReportDocument> {
        self.input
            .as_ref()
            .map(|input| builder.build(input, &self.result))
    }
}

/// Evaluates submissions and hands validated ones to a store
#[derive(Debug, Clone, Default)]
pub struct AssessmentService {
    evaluator: RetirementEvaluator,
}

impl AssessmentService {
    pub fn new() -> Self {
        Self {
            evaluator: RetirementEvaluator::new(),
        }
    }

    /// Evaluate one submission and record it when a store is given
    pub fn assess(&self, submission: &Submission, store: Option<&mut dyn EvaluationStore>) -> Assessment {
        let (input, result) = self.evaluator.evaluate_parsed(submission);
        let saved = match store {
            Some(store) => save(input.as_ref(), &result, store),
            None => false,
        };
        Assessment { input, result, saved }
    }

    /// Evaluate a batch in parallel, then record rows in submission order
    pub fn assess_batch(
        &self,
        submissions: &[Submission],
        mut store: Option<&mut dyn EvaluationStore>,
    ) -> Vec<Assessment> {
        self.evaluator
            .evaluate_submissions(submissions)
            .into_iter()
            .map(|(input, result)| {
                let saved = match store.as_mut() {
                    Some(store) => save(input.as_ref(), &result, &mut **store),
                    None => false,
                };
                Assessment { input, result, saved }
            })
            .collect()
    }
}

fn save(input: Option<&EvaluationInput>, result: &EvaluationResult, store: &mut dyn EvaluationStore) -> bool {
    match input {
        Some(input) => record_evaluation(store, input, result),
        None => {
            debug!("Skipping store for rejected submission");
            false
        }
    }
}
