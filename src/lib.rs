//! Retirement Readiness - corpus estimation and planning advice
//!
//! This library provides:
//! - Validation of personal finance submissions (including "Y"/"N" tokens)
//! - Required vs available retirement corpus under fixed planning assumptions
//! - A readiness verdict and an ordered list of planning suggestions
//! - Collaborators: currency labels and conversion, text reports, an append-only store

pub mod assumptions;
pub mod currency;
pub mod evaluation;
pub mod profile;
pub mod report;
pub mod service;
pub mod store;

// Re-export commonly used types
pub use assumptions::PlanningAssumptions;
pub use evaluation::{EvaluationResult, InputError, RetirementEvaluator, Verdict};
pub use profile::{EvaluationInput, Submission};
pub use report::{ReportBuilder, ReportDocument};
pub use service::{Assessment, AssessmentService};
pub use store::{CsvEvaluationStore, EvaluationStore, MemoryEvaluationStore};
