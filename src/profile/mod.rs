//! Personal finance profiles and submission loading

mod data;
pub mod loader;

pub use data::{flag_token, parse_flag_token, EvaluationInput, Flag, Gender, Submission};
pub use loader::{load_submission_json, load_submissions, load_submissions_from_reader, submission_from_json, LoadError};
