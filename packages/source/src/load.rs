//! JSON and CSV dataset readers.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use crime_map_source_models::IncidentRow;

use crate::SourceError;

/// Options controlling how a dataset is read.
#[derive(Debug, Clone)]
pub struct LoadOptions {
    /// Maximum number of rows to keep.
    pub limit: Option<u64>,
    /// CSV field delimiter.
    pub delimiter: u8,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            limit: None,
            delimiter: b',',
        }
    }
}

/// Reads a JSON array of incident rows.
///
/// # Errors
///
/// Returns [`SourceError::Json`] if the input is not an array of rows.
pub fn load_json<R: Read>(
    reader: R,
    options: &LoadOptions,
) -> Result<Vec<IncidentRow>, SourceError> {
    let mut rows: Vec<IncidentRow> = serde_json::from_reader(reader)?;

    if let Some(limit) = options.limit
        && let Ok(limit) = usize::try_from(limit)
    {
        rows.truncate(limit);
    }

    log::info!("Loaded {} rows from JSON", rows.len());
    Ok(rows)
}

/// Reads incident rows from CSV with a header line.
///
/// Records that cannot be deserialized are logged and skipped.
///
/// # Errors
///
/// Returns [`SourceError::Csv`] if the header line cannot be read.
pub fn load_csv<R: Read>(
    reader: R,
    options: &LoadOptions,
) -> Result<Vec<IncidentRow>, SourceError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .delimiter(options.delimiter)
        .flexible(true)
        .from_reader(reader);

    csv_reader.headers()?;

    let mut rows = Vec::new();
    let mut skipped: u64 = 0;

    for (i, record) in csv_reader.deserialize::<IncidentRow>().enumerate() {
        if let Some(limit) = options.limit
            && rows.len() as u64 >= limit
        {
            log::info!("Reached limit of {limit} rows");
            break;
        }

        match record {
            Ok(row) => rows.push(row),
            Err(e) => {
                skipped += 1;
                log::warn!("Skipping CSV record {}: {e}", i + 1);
            }
        }
    }

    log::info!("Loaded {} rows from CSV ({skipped} skipped)", rows.len());
    Ok(rows)
}

/// Reads a dataset file, choosing the format from its extension
/// (`.json` or `.csv`).
///
/// # Errors
///
/// Returns [`SourceError`] if the file cannot be opened, has an unsupported
/// extension, or fails to parse.
pub fn load_path(path: &Path, options: &LoadOptions) -> Result<Vec<IncidentRow>, SourceError> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);

    log::info!("Reading dataset from {}", path.display());

    match extension.as_deref() {
        Some("json") => load_json(BufReader::new(File::open(path)?), options),
        Some("csv") => load_csv(BufReader::new(File::open(path)?), options),
        _ => Err(SourceError::UnsupportedFormat {
            path: path.display().to_string(),
        }),
    }
}
