//! Model quality, inputs and feature importance (`/model/*`), plus service status.

mod api;
mod model;
mod wire;

pub use model::{FeatureImportance, ModelDiagnostics, ModelMetrics, ServiceStatus};

use crate::{EsgClient, EsgError};

impl EsgClient {
    /// Fetches the hold-out metrics of the deployed model.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the status is not 2xx, or the body is not JSON.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err))]
    pub async fn model_metrics(&self) -> Result<ModelMetrics, EsgError> {
        api::fetch_metrics(self).await
    }

    /// Fetches the names of the model's input features.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the status is not 2xx, or the body is not JSON.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err))]
    pub async fn model_features(&self) -> Result<Vec<String>, EsgError> {
        api::fetch_features(self).await
    }

    /// Fetches per-feature importances. Empty if the model does not expose any.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the status is not 2xx, or the body is not JSON.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err))]
    pub async fn feature_importance(&self) -> Result<Vec<FeatureImportance>, EsgError> {
        api::fetch_importance(self).await
    }

    /// Whether `/health` reports `{"status": "ok"}`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the status is not 2xx, or the body is not JSON.
    pub async fn health(&self) -> Result<bool, EsgError> {
        api::fetch_health(self).await
    }

    /// Whether `/readiness` reports a loaded model.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the status is not 2xx, or the body is not JSON.
    pub async fn readiness(&self) -> Result<bool, EsgError> {
        api::fetch_readiness(self).await
    }

    /// Checks `/health` and `/readiness` together. Either endpoint failing counts as `false`.
    pub async fn service_status(&self) -> ServiceStatus {
        let (healthy, ready) = futures::join!(self.health(), self.readiness());
        ServiceStatus {
            healthy: healthy.unwrap_or(false),
            ready: ready.unwrap_or(false),
        }
    }
}

impl ModelDiagnostics {
    /// Loads metrics, features and importances concurrently.
    ///
    /// Each part that fails to load is left at its empty default, so this never errors.
    pub async fn load(client: &EsgClient) -> Self {
        let (metrics, features, importance) = futures::join!(
            client.model_metrics(),
            client.model_features(),
            client.feature_importance()
        );

        #[cfg(feature = "tracing")]
        {
            let failures = [
                ("metrics", metrics.as_ref().err()),
                ("features", features.as_ref().err()),
                ("importance", importance.as_ref().err()),
            ];
            for (part, err) in failures {
                if let Some(e) = err {
                    tracing::warn!(part, error = %e, "model diagnostics part unavailable");
                }
            }
        }

        Self {
            metrics: metrics.unwrap_or_default(),
            features: features.unwrap_or_default(),
            importance: importance.unwrap_or_default(),
        }
    }
}
