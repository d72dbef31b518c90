use chrono::{DateTime, Utc};
use serde::Serialize;

/// Hold-out quality of the deployed model.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ModelMetrics {
    pub rmse: Option<f64>,
    pub mae: Option<f64>,
    pub r2: Option<f64>,
    /// Training timestamp as reported (ISO 8601).
    pub trained_at: Option<String>,
    pub n_estimators: Option<u64>,
    pub n_train: Option<u64>,
    pub n_test: Option<u64>,
    /// Whether the service has a model loaded.
    pub trained: Option<bool>,
}

impl ModelMetrics {
    /// `trained_at` parsed as an RFC 3339 timestamp.
    #[must_use]
    pub fn trained_at_utc(&self) -> Option<DateTime<Utc>> {
        let raw = self.trained_at.as_deref()?;
        DateTime::parse_from_rfc3339(raw)
            .ok()
            .map(|dt| dt.with_timezone(&Utc))
    }
}

/// Relative importance of one model input; importances sum to 1 across features.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeatureImportance {
    pub feature: String,
    pub importance: f64,
}

/// Everything shown on the model page, loaded in one go.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ModelDiagnostics {
    pub metrics: ModelMetrics,
    pub features: Vec<String>,
    pub importance: Vec<FeatureImportance>,
}

impl ModelDiagnostics {
    /// Importances for charting; when none were reported, every known feature at zero.
    #[must_use]
    pub fn importance_or_features(&self) -> Vec<FeatureImportance> {
        if self.importance.is_empty() {
            self.features
                .iter()
                .map(|f| FeatureImportance {
                    feature: f.clone(),
                    importance: 0.0,
                })
                .collect()
        } else {
            self.importance.clone()
        }
    }
}

/// Liveness and readiness of the scoring service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ServiceStatus {
    pub healthy: bool,
    pub ready: bool,
}
