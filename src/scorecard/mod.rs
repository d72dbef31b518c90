//! Score normalization: reconciling a raw backend row with the current selection.

mod model;
pub mod resolve;

pub use model::{BenchmarkPosition, CompanyScorecard, RiskLevel};

use chrono::{DateTime, Utc};

use crate::company_info::{PeerScore, RawCompanyInfo};
use resolve::{
    ENVIRONMENTAL_CHAIN, GOVERNANCE_CHAIN, ID_CHAIN, NAME_CHAIN, OVERALL_CHAIN, SECTOR_CHAIN,
    SOCIAL_CHAIN, SYMBOL_CHAIN, Extractor, first_of,
};

/// Benchmark used when no peer carries a usable overall score.
pub const DEFAULT_INDUSTRY_BENCHMARK: u32 = 65;

/// Builds a complete scorecard from a possibly partial backend row.
///
/// With no row, `fallback` is returned unchanged. Otherwise every field is resolved through
/// its chain in [`resolve`], falling back to the value on `fallback`:
///
/// - overall: `esg_score`, `actual_esg_score`, `predicted_esg_score`, then the rounded mean of
///   the three components (only if all three are present);
/// - each component: its own column;
/// - identity: `id`; `symbol` then `company`; `company` then `name`; `industry` then `sector`.
///
/// Market cap always comes from `fallback`. The risk band is derived from the final overall
/// score, never read from the row. Scores are rounded to whole numbers but not clamped.
#[must_use]
pub fn normalize(raw: Option<&RawCompanyInfo>, fallback: &CompanyScorecard) -> CompanyScorecard {
    normalize_at(raw, fallback, Utc::now())
}

/// [`normalize`] with an explicit timestamp.
#[must_use]
pub fn normalize_at(
    raw: Option<&RawCompanyInfo>,
    fallback: &CompanyScorecard,
    now: DateTime<Utc>,
) -> CompanyScorecard {
    let Some(raw) = raw else {
        return fallback.clone();
    };

    let score =
        |chain: &[Extractor<f64>], prev: u32| first_of(raw, chain).map_or(prev, to_score);
    let text = |chain: &[Extractor<String>], prev: &str| {
        first_of(raw, chain).unwrap_or_else(|| prev.to_string())
    };

    let esg_score = score(OVERALL_CHAIN, fallback.esg_score);

    CompanyScorecard {
        id: text(ID_CHAIN, &fallback.id),
        symbol: text(SYMBOL_CHAIN, &fallback.symbol),
        name: text(NAME_CHAIN, &fallback.name),
        sector: text(SECTOR_CHAIN, &fallback.sector),
        market_cap: fallback.market_cap,
        esg_score,
        environmental_score: score(ENVIRONMENTAL_CHAIN, fallback.environmental_score),
        social_score: score(SOCIAL_CHAIN, fallback.social_score),
        governance_score: score(GOVERNANCE_CHAIN, fallback.governance_score),
        risk_level: RiskLevel::from_score(esg_score),
        last_updated: now,
    }
}

/// Mean overall score across peers, rounded; [`DEFAULT_INDUSTRY_BENCHMARK`] when no peer
/// has one.
#[must_use]
pub fn industry_benchmark(peers: &[PeerScore]) -> u32 {
    let values: Vec<f64> = peers
        .iter()
        .filter_map(|p| p.overall)
        .filter(|v| v.is_finite())
        .collect();
    if values.is_empty() {
        return DEFAULT_INDUSTRY_BENCHMARK;
    }
    #[allow(clippy::cast_precision_loss)]
    let mean = values.iter().sum::<f64>() / values.len() as f64;
    to_score(mean)
}

// Negative input saturates to 0; scores are otherwise taken as given.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn to_score(v: f64) -> u32 {
    v.round() as u32
}
