use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::core::wire::{de_lenient_f64, number_of};
use crate::metrics::{TrendPoint, TrendSummary, compute_metrics};

/// Result of a single prediction.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct PredictionResult {
    #[serde(default, deserialize_with = "de_lenient_f64")]
    pub predicted_esg_score: Option<f64>,
    /// Anything else the service returned.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// One row of a batch prediction, keyed by column in the order the service sent them.
pub type BatchRow = Map<String, Value>;

/// Rows returned by a batch prediction. The column set varies with the uploaded file.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BatchPredictions {
    pub rows: Vec<BatchRow>,
}

impl BatchPredictions {
    /// Column keys of the first row; empty when there are no rows.
    #[must_use]
    pub fn columns(&self) -> Vec<&str> {
        self.rows
            .first()
            .map(|r| r.keys().map(String::as_str).collect())
            .unwrap_or_default()
    }

    /// Display label for a column key: underscores become spaces.
    #[must_use]
    pub fn column_label(column: &str) -> String {
        column.replace('_', " ")
    }

    /// Cell text for display; missing cells and `null` render empty.
    #[must_use]
    pub fn cell(row: &BatchRow, column: &str) -> String {
        match row.get(column) {
            None | Some(Value::Null) => String::new(),
            Some(Value::String(s)) => s.clone(),
            Some(other) => other.to_string(),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Rows as trend points (actual vs predicted), labelled by `company` or row position.
    #[must_use]
    pub fn as_points(&self) -> Vec<TrendPoint> {
        self.rows
            .iter()
            .enumerate()
            .map(|(i, row)| TrendPoint {
                label: row
                    .get("company")
                    .and_then(Value::as_str)
                    .map_or_else(|| format!("Row {}", i + 1), str::to_string),
                year: None,
                actual: row.get("actual_esg_score").and_then(number_of),
                predicted: row.get("predicted_esg_score").and_then(number_of),
            })
            .collect()
    }

    /// MAE/RMSE over rows that matched a reference score. `None` if no row did.
    #[must_use]
    pub fn accuracy(&self) -> Option<TrendSummary> {
        compute_metrics(&self.as_points())
    }
}
