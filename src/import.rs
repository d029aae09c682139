/// CSV upload: one text item per row.
use std::path::Path;

use crate::api::{ApiError, InputStore};
use crate::types::UserInput;

#[derive(Debug, thiserror::Error)]
pub enum ImportError {
    #[error("failed to read CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error("column {0:?} not found in CSV header")]
    MissingColumn(String),
}

#[derive(Clone, Debug, Default)]
pub struct ImportOptions {
    /// Header name, or zero-based index when the file has no header row.
    pub column: Option<String>,
    pub has_headers: bool,
}

#[derive(Debug, Default)]
pub struct ImportReport {
    pub submitted: Vec<UserInput>,
    pub skipped: usize,
    /// One-based CSV record number paired with the store error.
    pub failed: Vec<(usize, ApiError)>,
}

impl ImportReport {
    pub fn summary(&self) -> String {
        format!(
            "Imported {} row(s), skipped {} empty, {} failed.",
            self.submitted.len(),
            self.skipped,
            self.failed.len()
        )
    }
}

/// Reads the chosen column of every record. Blank cells come back as `None`.
pub fn read_texts(path: &Path, options: &ImportOptions) -> Result<Vec<Option<String>>, ImportError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(options.has_headers)
        .flexible(true)
        .from_path(path)?;

    let index = match options.column.as_deref() {
        None => 0,
        Some(name) if options.has_headers => reader
            .headers()?
            .iter()
            .position(|header| header.trim() == name)
            .ok_or_else(|| ImportError::MissingColumn(name.to_string()))?,
        Some(raw) => raw
            .parse::<usize>()
            .map_err(|_| ImportError::MissingColumn(raw.to_string()))?,
    };

    let mut texts = Vec::new();
    for record in reader.records() {
        let record = record?;
        let text = record
            .get(index)
            .map(str::trim)
            .filter(|cell| !cell.is_empty())
            .map(str::to_string);
        texts.push(text);
    }
    Ok(texts)
}

/// Submits every non-empty row; a failed row is recorded and the import continues.
pub fn import_csv(
    path: &Path,
    options: &ImportOptions,
    store: &dyn InputStore,
) -> Result<ImportReport, ImportError> {
    let texts = read_texts(path, options)?;
    let mut report = ImportReport::default();
    for (row, text) in texts.into_iter().enumerate() {
        let Some(text) = text else {
            report.skipped += 1;
            continue;
        };
        match store.submit(&text) {
            Ok(input) => report.submitted.push(input),
            Err(err) => {
                tracing::warn!(row = row + 1, error = %err, "csv row rejected");
                report.failed.push((row + 1, err));
            }
        }
    }
    tracing::info!(
        path = %path.display(),
        submitted = report.submitted.len(),
        skipped = report.skipped,
        failed = report.failed.len(),
        "csv import finished"
    );
    Ok(report)
}
