//! Single (`/predict`) and batch (`/predict-csv`) predictions.

mod api;
mod input;
mod model;
mod upload;

pub use input::{PredictionField, PredictionInput};
pub use model::{BatchPredictions, BatchRow, PredictionResult};
pub use upload::{BatchUpload, REQUIRED_COLUMNS, missing_columns, read_header, validate_header};

use crate::{EsgClient, EsgError};

impl EsgClient {
    /// Requests a single ESG score prediction.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the status is not 2xx, or the body is not JSON.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err))]
    pub async fn predict(&self, input: &PredictionInput) -> Result<PredictionResult, EsgError> {
        api::predict_single(self, input).await
    }

    /// Uploads a staged CSV for batch prediction.
    ///
    /// The header was validated when the upload was staged, so files with missing columns
    /// never reach this call.
    ///
    /// # Errors
    ///
    /// Returns `EsgError::Backend` when the service answers with `{"error": ..}`,
    /// `EsgError::Data` when the body is JSON but not a list of rows, or a
    /// transport/status/JSON error. Non-object entries in the list are skipped.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, upload), err, fields(file = %upload.file_name())))]
    pub async fn predict_csv(&self, upload: BatchUpload) -> Result<BatchPredictions, EsgError> {
        api::predict_batch(self, upload).await
    }
}
