//! Centralized constants for default endpoints and UA.

/// User agent sent with every request unless overridden.
pub(crate) const USER_AGENT: &str = concat!("esg-signal-rs/", env!("CARGO_PKG_VERSION"));

/// Local scoring service address used when nothing else is configured.
pub(crate) const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";

/// Environment variable holding the scoring service base URL.
pub const BASE_URL_ENV: &str = "ESG_API_URL";

pub(crate) const PATH_COMPANY_LIST: &str = "company-list";
pub(crate) const PATH_COMPANY_INFO: &str = "company-esg-info";
pub(crate) const PATH_PREDICT: &str = "predict";
pub(crate) const PATH_PREDICT_CSV: &str = "predict-csv";
pub(crate) const PATH_MODEL_METRICS: &str = "model/metrics";
pub(crate) const PATH_MODEL_FEATURES: &str = "model/features";
pub(crate) const PATH_FEATURE_IMPORTANCE: &str = "model/feature-importance";
pub(crate) const PATH_HEALTH: &str = "health";
pub(crate) const PATH_READINESS: &str = "readiness";
