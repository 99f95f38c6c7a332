use std::path::Path;

use tracing::warn;

use crate::core::record::{ExpectedRecord, REGISTRATION_COLUMN};
use crate::parsing::{list_dir_sorted, resolve, Resolved, SourceIssue};

/// The expected-results dataset: one record per vehicle, in file order.
///
/// `records` is empty when nothing could be loaded; `issues` records why.
#[derive(Debug, Clone, Default)]
pub struct ExpectedDataset {
    pub records: Vec<ExpectedRecord>,
    pub issues: Vec<SourceIssue>,
}

impl ExpectedDataset {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Load the expected-results dataset from a CSV file, or from every file in
/// a directory concatenated in name order.
///
/// Each data row becomes an [`ExpectedRecord`] mapping column header to cell
/// value; the header row itself is consumed. Never fails: missing paths and
/// unreadable or malformed files contribute no records, with the problem
/// recorded in [`issues`](ExpectedDataset::issues) and logged.
#[must_use]
pub fn load(base: &Path, path: &Path) -> ExpectedDataset {
    let mut dataset = ExpectedDataset::default();

    match resolve(base, path) {
        Resolved::File(file) => load_file_into(&file, &mut dataset),
        Resolved::Dir(dir) => match list_dir_sorted(&dir) {
            Ok(files) => {
                for file in files {
                    load_file_into(&file, &mut dataset);
                }
            }
            Err(err) => {
                warn!(path = %dir.display(), error = %err, "unable to list expected-results directory");
                dataset.issues.push(SourceIssue::Unreadable {
                    path: dir,
                    detail: err.to_string(),
                });
            }
        },
        Resolved::Missing(missing) => {
            warn!(path = %missing.display(), "expected-results source does not exist, continuing with no records");
            dataset.issues.push(SourceIssue::Missing { path: missing });
        }
    }

    dataset
}

fn load_file_into(file: &Path, dataset: &mut ExpectedDataset) {
    match read_records(file) {
        Ok(records) => dataset.records.extend(records),
        Err(err) => {
            warn!(path = %file.display(), error = %err, "unable to load expected-results file, skipping");
            dataset.issues.push(SourceIssue::Malformed {
                path: file.to_path_buf(),
                detail: err.to_string(),
            });
        }
    }
}

fn read_records(file: &Path) -> Result<Vec<ExpectedRecord>, csv::Error> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(file)?;

    let headers: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();
    if !headers.iter().any(|h| h == REGISTRATION_COLUMN) {
        warn!(
            path = %file.display(),
            column = REGISTRATION_COLUMN,
            "expected-results file lacks the registration column, its rows can never be paired"
        );
    }

    let mut records = Vec::new();
    for row in reader.records() {
        let row = row?;
        let record: ExpectedRecord = headers
            .iter()
            .zip(row.iter())
            .map(|(header, cell)| (header.clone(), cell.to_string()))
            .collect();
        records.push(record);
    }

    Ok(records)
}
