//! Append-only CSV file store

use super::{EvaluationRecord, EvaluationStore, StoreError};
use csv::WriterBuilder;
use log::info;
use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};

/// Default location of the evaluation log
pub const DEFAULT_STORE_PATH: &str = "user_data/user_data.csv";

/// Appends one row per evaluation to a CSV file, writing the header on first use
#[derive(Debug, Clone)]
pub struct CsvEvaluationStore {
    path: PathBuf,
}

impl CsvEvaluationStore {
    /// Prepare a store at `path`, creating missing parent directories
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        let path = path.as_ref().to_path_buf();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
                info!("Created store directory {}", parent.display());
            }
        }
        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read every stored row back
    pub fn records(&self) -> Result<Vec<EvaluationRecord>, StoreError> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let mut reader = csv::Reader::from_path(&self.path)?;
        let mut records = Vec::new();
        for row in reader.deserialize() {
            let record: EvaluationRecord = row?;
            records.push(record);
        }
        Ok(records)
    }
}

impl EvaluationStore for CsvEvaluationStore {
    fn append(&mut self, record: &EvaluationRecord) -> Result<(), StoreError> {
        let file = OpenOptions::new().create(true).append(true).open(&self.path)?;
        let needs_header = file.metadata()?.len() == 0;
        if needs_header {
            info!("Starting evaluation log at {}", self.path.display());
        }

        let mut writer = WriterBuilder::new()
            .has_headers(needs_header)
            .from_writer(file);
        writer.serialize(record)?;
        writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evaluation::RetirementEvaluator;
    use crate::profile::EvaluationInput;
    use crate::store::HEADER;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "retirement_store_{}_{}",
            std::process::id(),
            name
        ));
        let _ = fs::remove_dir_all(&dir);
        dir
    }

    fn record(age: i32) -> EvaluationRecord {
        let input = EvaluationInput { age, ..EvaluationInput::default() };
        let result = RetirementEvaluator::new().evaluate(&input);
        EvaluationRecord::new(&input, &result)
    }

    #[test]
    fn test_creates_directory_and_header_once() {
        let dir = scratch_dir("header");
        let path = dir.join("nested").join("user_data.csv");

        let mut store = CsvEvaluationStore::open(&path).unwrap();
        assert!(path.parent().unwrap().exists());

        store.append(&record(30)).unwrap();
        store.append(&record(35)).unwrap();

        let text = fs::read_to_string(&path).unwrap();
        let header_lines = text.lines().filter(|l| l.starts_with("Country,")).count();
        assert_eq!(header_lines, 1);

        let mut reader = csv::Reader::from_path(&path).unwrap();
        let headers: Vec<String> = reader.headers().unwrap().iter().map(String::from).collect();
        assert_eq!(headers, HEADER.to_vec());

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_rows_read_back_in_order() {
        let dir = scratch_dir("rows");
        let mut store = CsvEvaluationStore::open(dir.join("log.csv")).unwrap();
        assert!(store.records().unwrap().is_empty());

        store.append(&record(30)).unwrap();
        store.append(&record(45)).unwrap();

        let records = store.records().unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].age, 30);
        assert_eq!(records[1].age, 45);
        assert_eq!(records[1].owns_house, "Y");
        assert_eq!(records[1].upcoming_big_goals, "Children's Education");
        assert!(!records[1].ready);

        // A second handle on the same file keeps appending without a new header
        let mut reopened = CsvEvaluationStore::open(store.path()).unwrap();
        reopened.append(&record(50)).unwrap();
        assert_eq!(reopened.records().unwrap().len(), 3);

        let _ = fs::remove_dir_all(&dir);
    }
}
