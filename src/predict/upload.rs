use std::io::Read;
use std::path::Path;

use crate::core::EsgError;
use crate::predict::input::PredictionField;

/// Columns a batch upload must carry, in the order they are reported when missing.
pub const REQUIRED_COLUMNS: [&str; 7] = [
    "environmental_score",
    "social_score",
    "governance_score",
    "carbon_emissions",
    "employee_satisfaction",
    "board_diversity",
    "controversies",
];

// The required columns are exactly the single-prediction inputs.
const _: () = assert!(REQUIRED_COLUMNS.len() == PredictionField::ALL.len());

/// Parse only the header row of a CSV and return its column names.
///
/// # Errors
///
/// Returns `EsgError::Csv` if the header row is not valid CSV.
pub fn read_header<R: Read>(reader: R) -> Result<Vec<String>, EsgError> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);
    Ok(rdr.headers()?.iter().map(str::to_string).collect())
}

/// Required columns absent from `header`, in [`REQUIRED_COLUMNS`] order.
#[must_use]
pub fn missing_columns<S: AsRef<str>>(header: &[S]) -> Vec<String> {
    REQUIRED_COLUMNS
        .iter()
        .filter(|col| !header.iter().any(|h| h.as_ref() == **col))
        .map(|col| (*col).to_string())
        .collect()
}

/// Check the header row of a CSV before anything is uploaded.
///
/// # Errors
///
/// `EsgError::MissingColumns` naming every absent required column, or `EsgError::Csv` if the
/// header cannot be parsed.
pub fn validate_header<R: Read>(reader: R) -> Result<(), EsgError> {
    let header = read_header(reader)?;
    let missing = missing_columns(&header);
    if missing.is_empty() {
        Ok(())
    } else {
        Err(EsgError::MissingColumns(missing))
    }
}

/// A CSV file staged for batch prediction. Construction validates the header, so an
/// instance is always safe to send.
#[derive(Debug, Clone)]
pub struct BatchUpload {
    file_name: String,
    bytes: Vec<u8>,
}

impl BatchUpload {
    /// Stage in-memory CSV content.
    ///
    /// # Errors
    ///
    /// See [`validate_header`].
    pub fn from_bytes(file_name: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Result<Self, EsgError> {
        let bytes = bytes.into();
        validate_header(bytes.as_slice())?;
        Ok(Self {
            file_name: file_name.into(),
            bytes,
        })
    }

    /// Read and stage a CSV file from disk.
    ///
    /// # Errors
    ///
    /// `EsgError::Io` if the file cannot be read, otherwise see [`validate_header`].
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, EsgError> {
        let path = path.as_ref();
        let bytes = std::fs::read(path)?;
        let file_name = path
            .file_name()
            .map_or_else(|| "upload.csv".to_string(), |n| n.to_string_lossy().into_owned());
        Self::from_bytes(file_name, bytes)
    }

    #[must_use]
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub(crate) fn into_part(self) -> Result<reqwest::multipart::Part, EsgError> {
        Ok(reqwest::multipart::Part::bytes(self.bytes)
            .file_name(self.file_name)
            .mime_str("text/csv")?)
    }
}
