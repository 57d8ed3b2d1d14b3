//! Retirement readiness evaluation: validation, corpus calculation and suggestions

mod engine;
mod result;
pub mod rules;
mod validation;

pub use engine::{CorpusBreakdown, RetirementEvaluator};
pub use result::{EvaluationResult, Verdict};
pub use rules::{Suggestion, SuggestionTopic, SUGGESTION_RULES};
pub use validation::{parse_submission, InputError};
