use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;

/// Risk band derived from an overall ESG score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
    Critical,
}

impl RiskLevel {
    /// Bands a 0–100 score: `>= 75` Low, `>= 50` Medium, `>= 25` High, otherwise Critical.
    #[must_use]
    pub const fn from_score(score: u32) -> Self {
        if score >= 75 {
            Self::Low
        } else if score >= 50 {
            Self::Medium
        } else if score >= 25 {
            Self::High
        } else {
            Self::Critical
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
            Self::Critical => "Critical",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The reconciled view of one company shown on the score card.
///
/// Built by [`normalize`](super::normalize) from a raw backend row and the previously
/// selected company. Scores are whole numbers on a 0–100 scale.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompanyScorecard {
    pub id: String,
    pub symbol: String,
    pub name: String,
    pub sector: String,
    /// Market capitalisation. The service does not report it, so it is carried over from
    /// the selection the scorecard was built on.
    pub market_cap: f64,
    pub esg_score: u32,
    pub environmental_score: u32,
    pub social_score: u32,
    pub governance_score: u32,
    /// Always derived from `esg_score`.
    pub risk_level: RiskLevel,
    /// When this scorecard was produced.
    pub last_updated: DateTime<Utc>,
}

impl CompanyScorecard {
    /// A blank scorecard carrying only identity fields; all scores are zero.
    #[must_use]
    pub fn seed(name: &str, symbol: &str, sector: &str) -> Self {
        Self {
            id: String::new(),
            symbol: symbol.to_string(),
            name: name.to_string(),
            sector: sector.to_string(),
            market_cap: 0.0,
            esg_score: 0,
            environmental_score: 0,
            social_score: 0,
            governance_score: 0,
            risk_level: RiskLevel::from_score(0),
            last_updated: Utc::now(),
        }
    }

    /// Sets the overall and component scores, re-deriving the risk band.
    #[must_use]
    pub fn with_scores(mut self, esg: u32, environmental: u32, social: u32, governance: u32) -> Self {
        self.esg_score = esg;
        self.environmental_score = environmental;
        self.social_score = social;
        self.governance_score = governance;
        self.risk_level = RiskLevel::from_score(esg);
        self
    }

    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    #[must_use]
    pub const fn with_market_cap(mut self, market_cap: f64) -> Self {
        self.market_cap = market_cap;
        self
    }
}

/// Where a score sits relative to the industry benchmark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum BenchmarkPosition {
    Above,
    Below,
    Level,
}

impl BenchmarkPosition {
    #[must_use]
    pub fn of(score: u32, benchmark: u32) -> Self {
        match score.cmp(&benchmark) {
            std::cmp::Ordering::Greater => Self::Above,
            std::cmp::Ordering::Less => Self::Below,
            std::cmp::Ordering::Equal => Self::Level,
        }
    }
}
