//! Persistence of evaluations behind an append-row interface
//!
//! The evaluator never touches storage; callers hand results to an
//! [`EvaluationStore`] and a failing store never changes a result.

mod csv_store;
mod record;

pub use csv_store::{CsvEvaluationStore, DEFAULT_STORE_PATH};
pub use record::{EvaluationRecord, HEADER};

use crate::evaluation::EvaluationResult;
use crate::profile::EvaluationInput;
use log::warn;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("store CSV failed: {0}")]
    Csv(#[from] csv::Error),
}

/// Append-only sink for evaluation rows
pub trait EvaluationStore {
    fn append(&mut self, record: &EvaluationRecord) -> Result<(), StoreError>;
}

/// Keeps rows in memory
#[derive(Debug, Clone, Default)]
pub struct MemoryEvaluationStore {
    records: Vec<EvaluationRecord>,
}

impl MemoryEvaluationStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> &[EvaluationRecord] {
        &self.records
    }
}

impl EvaluationStore for MemoryEvaluationStore {
    fn append(&mut self, record: &EvaluationRecord) -> Result<(), StoreError> {
        self.records.push(record.clone());
        Ok(())
    }
}

/// Append an evaluation, logging instead of propagating store failures.
/// Returns whether the row was written.
pub fn record_evaluation(
    store: &mut dyn EvaluationStore,
    input: &EvaluationInput,
    result: &EvaluationResult,
) -> bool {
    match store.append(&EvaluationRecord::new(input, result)) {
        Ok(()) => true,
        Err(err) => {
            warn!("Evaluation not saved: {}", err);
            false
        }
    }
}
