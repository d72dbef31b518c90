//! Ordered fallback chains over a raw company row.
//!
//! Each chain is a list of extractors tried in order; the first one that yields a value wins.
//! Keeping the precedence in data rather than in nested `or_else` calls makes each step
//! visible and testable on its own.

use crate::company_info::RawCompanyInfo;

/// Reads one candidate value out of a raw row.
pub type Extractor<T> = fn(&RawCompanyInfo) -> Option<T>;

/// Returns the first value produced by `chain`, or `None` if every step came up empty.
pub fn first_of<T>(raw: &RawCompanyInfo, chain: &[Extractor<T>]) -> Option<T> {
    chain.iter().find_map(|extract| extract(raw))
}

/* ---------------- numeric extractors ---------------- */

pub fn esg_score(r: &RawCompanyInfo) -> Option<f64> {
    r.esg_score
}

pub fn actual_esg_score(r: &RawCompanyInfo) -> Option<f64> {
    r.actual_esg_score
}

pub fn predicted_esg_score(r: &RawCompanyInfo) -> Option<f64> {
    r.predicted_esg_score
}

/// Mean of the three component scores, rounded; only when all three are present.
pub fn component_mean(r: &RawCompanyInfo) -> Option<f64> {
    match (r.environmental_score, r.social_score, r.governance_score) {
        (Some(e), Some(s), Some(g)) => Some(((e + s + g) / 3.0).round()),
        _ => None,
    }
}

pub fn environmental_score(r: &RawCompanyInfo) -> Option<f64> {
    r.environmental_score
}

pub fn social_score(r: &RawCompanyInfo) -> Option<f64> {
    r.social_score
}

pub fn governance_score(r: &RawCompanyInfo) -> Option<f64> {
    r.governance_score
}

/* ---------------- text extractors ---------------- */

pub fn id(r: &RawCompanyInfo) -> Option<String> {
    r.id.clone()
}

pub fn symbol(r: &RawCompanyInfo) -> Option<String> {
    r.symbol.clone()
}

pub fn company(r: &RawCompanyInfo) -> Option<String> {
    r.company.clone()
}

pub fn name(r: &RawCompanyInfo) -> Option<String> {
    r.name.clone()
}

pub fn industry(r: &RawCompanyInfo) -> Option<String> {
    r.industry.clone()
}

pub fn sector(r: &RawCompanyInfo) -> Option<String> {
    r.sector.clone()
}

/* ---------------- chains ---------------- */

pub const OVERALL_CHAIN: &[Extractor<f64>] = &[
    esg_score,
    actual_esg_score,
    predicted_esg_score,
    component_mean,
];
pub const ENVIRONMENTAL_CHAIN: &[Extractor<f64>] = &[environmental_score];
pub const SOCIAL_CHAIN: &[Extractor<f64>] = &[social_score];
pub const GOVERNANCE_CHAIN: &[Extractor<f64>] = &[governance_score];

pub const ID_CHAIN: &[Extractor<String>] = &[id];
pub const SYMBOL_CHAIN: &[Extractor<String>] = &[symbol, company];
pub const NAME_CHAIN: &[Extractor<String>] = &[company, name];
pub const SECTOR_CHAIN: &[Extractor<String>] = &[industry, sector];
