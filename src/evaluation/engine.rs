//! Retirement readiness evaluator
//!
//! validate -> compute corpus -> classify -> suggest. Pure: no I/O and no
//! state carried between calls.

use super::result::{EvaluationResult, Verdict};
use super::rules::{suggest, RuleContext, Suggestion};
use super::validation::{check_figures, parse_submission, Figures, InputError};
use crate::assumptions::PlanningAssumptions;
use crate::currency::symbol_for_country;
use crate::profile::{EvaluationInput, Submission};
use log::{debug, warn};
use rayon::prelude::*;
use serde::Serialize;

/// Intermediate figures of the corpus calculation
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CorpusBreakdown {
    pub years_to_retirement: i32,
    pub inflation_factor: f64,
    pub required_income_at_retirement: f64,
    pub corpus_needed: f64,
    pub corpus_available: f64,
}

impl CorpusBreakdown {
    pub fn ready(&self) -> bool {
        self.corpus_available >= self.corpus_needed
    }
}

/// Evaluates retirement readiness under the standard planning assumptions
#[derive(Debug, Clone, Default)]
pub struct RetirementEvaluator {
    assumptions: PlanningAssumptions,
}

impl RetirementEvaluator {
    pub fn new() -> Self {
        Self {
            assumptions: PlanningAssumptions::standard(),
        }
    }

    /// Evaluate a typed input
    pub fn evaluate(&self, input: &EvaluationInput) -> EvaluationResult {
        match check_figures(&Figures::of_input(input)) {
            Ok(()) => self.assess(input),
            Err(err) => reject(&err),
        }
    }

    /// Evaluate a raw submission, validating its yes/no tokens first
    pub fn evaluate_submission(&self, submission: &Submission) -> EvaluationResult {
        self.evaluate_parsed(submission).1
    }

    /// Validate once and evaluate; the typed input is returned when validation passed
    pub fn evaluate_parsed(
        &self,
        submission: &Submission,
    ) -> (Option<EvaluationInput>, EvaluationResult) {
        match parse_submission(submission) {
            Ok(input) => {
                let result = self.assess(&input);
                (Some(input), result)
            }
            Err(err) => (None, reject(&err)),
        }
    }

    /// Evaluate many inputs in parallel; output order follows input order
    pub fn evaluate_batch(&self, inputs: &[EvaluationInput]) -> Vec<EvaluationResult> {
        inputs.par_iter().map(|input| self.evaluate(input)).collect()
    }

    /// Evaluate many raw submissions in parallel, keeping each typed input
    pub fn evaluate_submissions(
        &self,
        submissions: &[Submission],
    ) -> Vec<(Option<EvaluationInput>, EvaluationResult)> {
        submissions
            .par_iter()
            .map(|submission| self.evaluate_parsed(submission))
            .collect()
    }

    /// Corpus figures for an input, without validation
    pub fn breakdown(&self, input: &EvaluationInput) -> CorpusBreakdown {
        let years_to_retirement = input.years_to_retirement();
        let inflation_factor = self
            .assumptions
            .inflation_factor(input.expected_inflation_rate, years_to_retirement);
        let required_income_at_retirement =
            self.assumptions.required_income(input.income, inflation_factor);

        CorpusBreakdown {
            years_to_retirement,
            inflation_factor,
            required_income_at_retirement,
            corpus_needed: self.assumptions.capitalise(required_income_at_retirement),
            corpus_available: input.net_worth(),
        }
    }

    /// Suggestions with their topics for an already validated input
    pub fn suggestions(&self, input: &EvaluationInput) -> Vec<Suggestion> {
        let breakdown = self.breakdown(input);
        suggest(&RuleContext {
            input,
            assumptions: &self.assumptions,
            corpus_needed: breakdown.corpus_needed,
            corpus_available: breakdown.corpus_available,
            ready: breakdown.ready(),
            years_to_retirement: breakdown.years_to_retirement,
            currency_symbol: symbol_for_country(&input.country),
        })
    }

    fn assess(&self, input: &EvaluationInput) -> EvaluationResult {
        let breakdown = self.breakdown(input);
        let ready = breakdown.ready();
        let verdict = if ready { Verdict::Ready } else { Verdict::NotReady };

        debug!(
            "Evaluated: years={} factor={:.6} needed={:.2} available={:.2} ready={}",
            breakdown.years_to_retirement,
            breakdown.inflation_factor,
            breakdown.corpus_needed,
            breakdown.corpus_available,
            ready
        );

        let suggestions = self
            .suggestions(input)
            .into_iter()
            .map(|s| s.text)
            .collect();

        EvaluationResult {
            corpus_needed: breakdown.corpus_needed,
            corpus_available: breakdown.corpus_available,
            ready,
            verdict: verdict.to_string(),
            suggestions,
        }
    }
}

fn reject(err: &InputError) -> EvaluationResult {
    warn!("Rejected input: {}", err);
    EvaluationResult::rejected(err)
}
