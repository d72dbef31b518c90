//! esg-signal-rs: typed client for an ESG risk scoring service.
//!
//! The service predicts ESG scores and serves per-company history. This crate wraps its HTTP
//! endpoints and adds the client-side logic needed to present the results:
//!
//! - [`scorecard`]: reconciles a partial company row with the current selection into a
//!   complete [`CompanyScorecard`] with a risk band.
//! - [`metrics`]: MAE/RMSE over a company's actual-vs-predicted history and a per-year
//!   cumulative R².
//! - [`predict`]: single predictions with range-checked inputs and CSV batch uploads that
//!   are validated before being sent.
//! - [`dashboard`]: a session that sequences overlapping company requests so a stale
//!   response never replaces a newer one.
//!
//! ```no_run
//! # use esg_signal::{Dashboard, EsgClient};
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = EsgClient::from_env()?;
//! let companies = client.company_list().await?;
//! let first = companies.first().ok_or("no companies")?;
//!
//! let dashboard = Dashboard::new(client, first.to_selection());
//! dashboard.refresh().await?;
//! let view = dashboard.snapshot().await;
//! println!("{} scores {} ({} risk)", view.scorecard.name, view.scorecard.esg_score, view.scorecard.risk_level);
//! # Ok(())
//! # }
//! ```

pub mod companies;
pub mod company_info;
pub mod core;
pub mod dashboard;
pub mod diagnostics;
pub mod metrics;
pub mod predict;
pub mod scorecard;

pub use companies::{CompanyListing, filter_companies};
pub use company_info::{CompanyEsgInfo, CompanyInfoBuilder, PeerScore, RawCompanyInfo, TrendVsRest};
pub use crate::core::client::{Backoff, RetryConfig};
pub use crate::core::{EsgClient, EsgClientBuilder, EsgError};
pub use dashboard::{Dashboard, DashboardSnapshot, FetchOutcome};
pub use diagnostics::{FeatureImportance, ModelDiagnostics, ModelMetrics, ServiceStatus};
pub use metrics::{
    ByYearMetrics, ScoredPoint, TrendPoint, TrendSummary, YearMetric, by_year_metrics,
    compute_metrics,
};
pub use predict::{
    BatchPredictions, BatchUpload, PredictionField, PredictionInput, PredictionResult,
    REQUIRED_COLUMNS,
};
pub use scorecard::{
    BenchmarkPosition, CompanyScorecard, RiskLevel, industry_benchmark, normalize, normalize_at,
};

/// Install a `fmt` subscriber filtered by `RUST_LOG` (default `info`).
///
/// Intended for demos and tests; calling it twice is harmless.
#[cfg(feature = "tracing-subscriber")]
pub fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
