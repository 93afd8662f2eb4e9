//! Training dataset loading.
//!
//! The dataset is a CSV file with `review` and `label` columns; labels are
//! binary (0 = negative, 1 = positive). Documents are immutable once loaded.

use serde::Deserialize;
use std::path::Path;
use tracing::info;

use crate::error::{AppError, Result};

#[derive(Debug, Deserialize)]
struct Record {
    review: String,
    label: u8,
}

/// Load the CSV into parallel document/label lists of equal length.
pub fn load(path: &Path) -> Result<(Vec<String>, Vec<u8>)> {
    let mut reader = csv::Reader::from_path(path)
        .map_err(|e| AppError::Load(format!("cannot open dataset {}: {}", path.display(), e)))?;

    let mut documents = Vec::new();
    let mut labels = Vec::new();
    for row in reader.deserialize() {
        let record: Record = row?;
        documents.push(record.review);
        labels.push(record.label);
    }

    info!(documents = documents.len(), "loaded training dataset");
    Ok((documents, labels))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn loads_documents_and_labels() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "review,label").unwrap();
        writeln!(file, "\"I loved it, truly\",1").unwrap();
        writeln!(file, "terrible experience,0").unwrap();
        file.flush().unwrap();

        let (documents, labels) = load(file.path()).unwrap();
        assert_eq!(documents.len(), labels.len());
        assert_eq!(documents[0], "I loved it, truly");
        assert_eq!(labels, vec![1, 0]);
    }

    #[test]
    fn missing_file_is_a_load_error() {
        let result = load(Path::new("/no/such/dataset.csv"));
        assert!(matches!(result, Err(AppError::Load(_))));
    }

    #[test]
    fn malformed_label_is_a_load_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "review,label").unwrap();
        writeln!(file, "fine movie,positive").unwrap();
        file.flush().unwrap();

        let result = load(file.path());
        assert!(matches!(result, Err(AppError::Load(_))));
    }
}
