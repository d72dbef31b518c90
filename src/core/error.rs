use thiserror::Error;

/// The primary error type for all fallible operations in this crate.
///
/// Every variant renders to a short, user-presentable string via `Display`. Partial or
/// missing fields in an otherwise valid backend payload are never reported as errors; they
/// are absorbed by the scorecard fallback chains instead.
#[derive(Debug, Error)]
pub enum EsgError {
    /// An error occurred during an HTTP request (connection refused, timeout, TLS, ...).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// A provided URL could not be parsed or joined.
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// The server returned an unexpected or unsuccessful HTTP status code.
    #[error("Unexpected response status: {status} at {url}")]
    Status {
        /// The HTTP status code.
        status: u16,
        /// The URL that returned the error.
        url: String,
    },

    /// The response body was not valid JSON for the expected shape.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// The data received from the API was in an unexpected format.
    #[error("Data format unexpected: {0}")]
    Data(String),

    /// The service answered successfully but reported an error in the body,
    /// e.g. `{"error": "Company not found"}`.
    #[error("{0}")]
    Backend(String),

    /// A CSV upload is missing one or more required column headers.
    /// The columns are listed in the order they are required.
    #[error("Missing required columns: {}", .0.join(", "))]
    MissingColumns(Vec<String>),

    /// The CSV header row could not be parsed.
    #[error("Error parsing CSV: {0}")]
    Csv(#[from] csv::Error),

    /// A local file could not be read.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl EsgError {
    /// Returns `true` for failures detected before anything was sent to the service.
    #[must_use]
    pub const fn is_client_side(&self) -> bool {
        matches!(
            self,
            Self::MissingColumns(_) | Self::Csv(_) | Self::Io(_) | Self::Url(_)
        )
    }
}
