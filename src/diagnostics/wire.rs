use serde::Deserialize;

use crate::core::wire::{de_lenient_f64, de_lenient_string, de_lenient_vec};

#[derive(Deserialize)]
pub(crate) struct MetricsEnvelope {
    #[serde(default)]
    pub(crate) metrics: Option<MetricsNode>,
    #[serde(default)]
    pub(crate) trained: Option<bool>,
}

#[derive(Deserialize)]
pub(crate) struct MetricsNode {
    #[serde(default, deserialize_with = "de_lenient_f64")]
    pub(crate) rmse: Option<f64>,
    #[serde(default, deserialize_with = "de_lenient_f64")]
    pub(crate) mae: Option<f64>,
    #[serde(default, deserialize_with = "de_lenient_f64")]
    pub(crate) r2: Option<f64>,
    #[serde(default, deserialize_with = "de_lenient_string")]
    pub(crate) trained_at: Option<String>,
    #[serde(default, deserialize_with = "de_lenient_f64")]
    pub(crate) n_estimators: Option<f64>,
    #[serde(default, deserialize_with = "de_lenient_f64")]
    pub(crate) n_train: Option<f64>,
    #[serde(default, deserialize_with = "de_lenient_f64")]
    pub(crate) n_test: Option<f64>,
}

#[derive(Deserialize)]
pub(crate) struct FeaturesEnvelope {
    #[serde(default, deserialize_with = "de_lenient_vec")]
    pub(crate) features: Vec<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ImportanceEnvelope {
    #[serde(default, deserialize_with = "de_lenient_vec")]
    pub(crate) feature_importance: Vec<ImportanceNode>,
}

#[derive(Deserialize)]
pub(crate) struct ImportanceNode {
    #[serde(default, deserialize_with = "de_lenient_string")]
    pub(crate) feature: Option<String>,
    #[serde(default, deserialize_with = "de_lenient_f64")]
    pub(crate) importance: Option<f64>,
}

#[derive(Deserialize)]
pub(crate) struct HealthNode {
    #[serde(default, deserialize_with = "de_lenient_string")]
    pub(crate) status: Option<String>,
}

#[derive(Deserialize)]
pub(crate) struct ReadinessNode {
    #[serde(default)]
    pub(crate) ready: Option<bool>,
}
