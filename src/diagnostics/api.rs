use crate::{
    core::{
        EsgClient, EsgError,
        client::constants::{
            PATH_FEATURE_IMPORTANCE, PATH_HEALTH, PATH_MODEL_FEATURES, PATH_MODEL_METRICS,
            PATH_READINESS,
        },
        net,
    },
    diagnostics::{
        model::{FeatureImportance, ModelMetrics},
        wire::{
            FeaturesEnvelope, HealthNode, ImportanceEnvelope, MetricsEnvelope, ReadinessNode,
        },
    },
};

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn count(v: Option<f64>) -> Option<u64> {
    v.filter(|f| *f >= 0.0 && f.fract() == 0.0).map(|f| f as u64)
}

pub(super) async fn fetch_metrics(client: &EsgClient) -> Result<ModelMetrics, EsgError> {
    let env: MetricsEnvelope = net::get_json(client, PATH_MODEL_METRICS).await?;
    let mut out = env.metrics.map_or_else(ModelMetrics::default, |m| ModelMetrics {
        rmse: m.rmse,
        mae: m.mae,
        r2: m.r2,
        trained_at: m.trained_at,
        n_estimators: count(m.n_estimators),
        n_train: count(m.n_train),
        n_test: count(m.n_test),
        trained: None,
    });
    out.trained = env.trained;
    Ok(out)
}

pub(super) async fn fetch_features(client: &EsgClient) -> Result<Vec<String>, EsgError> {
    let env: FeaturesEnvelope = net::get_json(client, PATH_MODEL_FEATURES).await?;
    Ok(env.features)
}

pub(super) async fn fetch_importance(
    client: &EsgClient,
) -> Result<Vec<FeatureImportance>, EsgError> {
    let env: ImportanceEnvelope = net::get_json(client, PATH_FEATURE_IMPORTANCE).await?;
    Ok(env
        .feature_importance
        .into_iter()
        .filter_map(|n| {
            Some(FeatureImportance {
                feature: n.feature?,
                importance: n.importance.unwrap_or(0.0),
            })
        })
        .collect())
}

pub(super) async fn fetch_health(client: &EsgClient) -> Result<bool, EsgError> {
    let node: HealthNode = net::get_json(client, PATH_HEALTH).await?;
    Ok(node.status.as_deref() == Some("ok"))
}

pub(super) async fn fetch_readiness(client: &EsgClient) -> Result<bool, EsgError> {
    let node: ReadinessNode = net::get_json(client, PATH_READINESS).await?;
    Ok(node.ready.unwrap_or(false))
}
