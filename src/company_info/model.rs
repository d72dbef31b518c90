use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::core::wire::{de_lenient_f64, de_lenient_string, de_lenient_year};
use crate::metrics::TrendPoint;

/// The company row exactly as the service returned it.
///
/// Every field is optional: the backend dumps a raw data row, so columns may be missing,
/// `null`, or of an unexpected type. Non-numeric values in numeric columns decode as `None`.
/// Columns not modelled here are kept in [`extra`](Self::extra) in their original order.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct RawCompanyInfo {
    #[serde(default, deserialize_with = "de_lenient_string")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "de_lenient_string")]
    pub symbol: Option<String>,
    #[serde(default, deserialize_with = "de_lenient_string")]
    pub company: Option<String>,
    #[serde(default, deserialize_with = "de_lenient_string")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "de_lenient_string")]
    pub industry: Option<String>,
    #[serde(default, deserialize_with = "de_lenient_string")]
    pub sector: Option<String>,
    #[serde(default, deserialize_with = "de_lenient_string")]
    pub region: Option<String>,
    #[serde(default, deserialize_with = "de_lenient_year")]
    pub year: Option<i64>,

    #[serde(default, deserialize_with = "de_lenient_f64")]
    pub esg_score: Option<f64>,
    #[serde(default, deserialize_with = "de_lenient_f64")]
    pub actual_esg_score: Option<f64>,
    #[serde(default, deserialize_with = "de_lenient_f64")]
    pub predicted_esg_score: Option<f64>,
    #[serde(default, deserialize_with = "de_lenient_f64")]
    pub environmental_score: Option<f64>,
    #[serde(default, deserialize_with = "de_lenient_f64")]
    pub social_score: Option<f64>,
    #[serde(default, deserialize_with = "de_lenient_f64")]
    pub governance_score: Option<f64>,

    #[serde(default, deserialize_with = "de_lenient_f64")]
    pub carbon_emissions: Option<f64>,
    #[serde(default, deserialize_with = "de_lenient_f64")]
    pub employee_satisfaction: Option<f64>,
    #[serde(default, deserialize_with = "de_lenient_f64")]
    pub board_diversity: Option<f64>,
    #[serde(default, deserialize_with = "de_lenient_f64")]
    pub controversies: Option<f64>,

    /// Any other columns of the row.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A peer company's scores as used by the industry comparison chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PeerScore {
    pub name: String,
    pub environmental: Option<f64>,
    pub social: Option<f64>,
    pub governance: Option<f64>,
    /// Actual ESG score, or the model prediction when no actual score is recorded.
    pub overall: Option<f64>,
}

/// One year of the selected company against the average of every other company.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrendVsRest {
    pub year: Option<i64>,
    pub selected_actual: Option<f64>,
    pub selected_predicted: Option<f64>,
    pub rest_actual_avg: Option<f64>,
    pub rest_predicted_avg: Option<f64>,
}

/// Everything the service reports about one company.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CompanyEsgInfo {
    /// The company's own data row; `None` when the service omitted it.
    pub company: Option<RawCompanyInfo>,
    /// Actual vs predicted history, oldest first.
    pub trend: Vec<TrendPoint>,
    /// Peers in the same industry (the company itself included).
    pub industry_comparison: Vec<PeerScore>,
    /// Companies outside the industry.
    pub rest_comparison: Vec<PeerScore>,
    /// Per-year comparison against the rest of the universe.
    pub trend_vs_rest: Vec<TrendVsRest>,
    /// History of the `compare_with` company, oldest first. Empty unless requested.
    pub compare_trend: Vec<TrendPoint>,
}
