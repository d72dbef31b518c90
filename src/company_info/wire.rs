use serde::Deserialize;

use crate::company_info::model::RawCompanyInfo;
use crate::core::wire::{de_lenient_f64, de_lenient_string, de_lenient_vec, de_lenient_year};

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CompanyInfoEnvelope {
    #[serde(default, deserialize_with = "de_lenient_string")]
    pub(crate) error: Option<String>,
    #[serde(default)]
    pub(crate) company: Option<RawCompanyInfo>,
    #[serde(default, deserialize_with = "de_lenient_vec")]
    pub(crate) trend: Vec<TrendNode>,
    #[serde(default, deserialize_with = "de_lenient_vec")]
    pub(crate) industry_comparison: Vec<PeerNode>,
    #[serde(default, deserialize_with = "de_lenient_vec")]
    pub(crate) rest_of_companies_comparison: Vec<PeerNode>,
    #[serde(default, deserialize_with = "de_lenient_vec")]
    pub(crate) trend_comparison_with_rest: Vec<TrendVsRestNode>,
    #[serde(default, deserialize_with = "de_lenient_vec")]
    pub(crate) compare_company_trend: Vec<TrendNode>,
}

#[derive(Deserialize)]
pub(crate) struct TrendNode {
    #[serde(default, deserialize_with = "de_lenient_year")]
    pub(crate) year: Option<i64>,
    #[serde(default, deserialize_with = "de_lenient_f64")]
    pub(crate) actual_esg_score: Option<f64>,
    #[serde(default, deserialize_with = "de_lenient_f64")]
    pub(crate) predicted_esg_score: Option<f64>,
}

#[derive(Deserialize)]
pub(crate) struct PeerNode {
    #[serde(default, deserialize_with = "de_lenient_string")]
    pub(crate) company: Option<String>,
    #[serde(default, deserialize_with = "de_lenient_f64")]
    pub(crate) environmental_score: Option<f64>,
    #[serde(default, deserialize_with = "de_lenient_f64")]
    pub(crate) social_score: Option<f64>,
    #[serde(default, deserialize_with = "de_lenient_f64")]
    pub(crate) governance_score: Option<f64>,
    #[serde(default, deserialize_with = "de_lenient_f64")]
    pub(crate) actual_esg_score: Option<f64>,
    #[serde(default, deserialize_with = "de_lenient_f64")]
    pub(crate) predicted_esg_score: Option<f64>,
}

#[derive(Deserialize)]
pub(crate) struct TrendVsRestNode {
    #[serde(default, deserialize_with = "de_lenient_year")]
    pub(crate) year: Option<i64>,
    #[serde(default, deserialize_with = "de_lenient_f64")]
    pub(crate) selected_company_actual: Option<f64>,
    #[serde(default, deserialize_with = "de_lenient_f64")]
    pub(crate) selected_company_predicted: Option<f64>,
    #[serde(default, deserialize_with = "de_lenient_f64")]
    pub(crate) rest_companies_actual_avg: Option<f64>,
    #[serde(default, deserialize_with = "de_lenient_f64")]
    pub(crate) rest_companies_predicted_avg: Option<f64>,
}
