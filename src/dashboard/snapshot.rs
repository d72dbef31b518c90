use serde::Serialize;

use crate::{
    company_info::{CompanyEsgInfo, PeerScore},
    metrics::{TrendPoint, TrendSummary, YearMetric, by_year_metrics, compute_metrics},
    predict::PredictionInput,
    scorecard::{BenchmarkPosition, CompanyScorecard, industry_benchmark, normalize},
};

/// Everything the dashboard displays at one moment. Recomputed on every call to
/// [`Dashboard::snapshot`](super::Dashboard::snapshot).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardSnapshot {
    pub scorecard: CompanyScorecard,
    pub industry_benchmark: u32,
    pub benchmark_position: BenchmarkPosition,
    pub peers: Vec<PeerScore>,
    pub trend: Vec<TrendPoint>,
    /// `None` when the history has no point with both actual and predicted scores.
    pub summary: Option<TrendSummary>,
    pub by_year: Vec<YearMetric>,
    pub prediction_defaults: PredictionInput,
    pub last_error: Option<String>,
    pub loading: bool,
}

impl DashboardSnapshot {
    pub(crate) fn build(
        selected: &CompanyScorecard,
        info: Option<&CompanyEsgInfo>,
        last_error: Option<String>,
        loading: bool,
    ) -> Self {
        let raw = info.and_then(|i| i.company.as_ref());
        let scorecard = normalize(raw, selected);

        let peers = info.map(|i| i.industry_comparison.clone()).unwrap_or_default();
        let benchmark = industry_benchmark(&peers);
        let trend = info.map(|i| i.trend.clone()).unwrap_or_default();

        Self {
            industry_benchmark: benchmark,
            benchmark_position: BenchmarkPosition::of(scorecard.esg_score, benchmark),
            summary: compute_metrics(&trend),
            by_year: by_year_metrics(&trend).collect(),
            prediction_defaults: PredictionInput::seeded(&scorecard, raw),
            scorecard,
            peers,
            trend,
            last_error,
            loading,
        }
    }
}
