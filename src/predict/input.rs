use serde::Serialize;
use std::fmt;

use crate::company_info::RawCompanyInfo;
use crate::scorecard::CompanyScorecard;

/// The seven model inputs of a single prediction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PredictionField {
    EnvironmentalScore,
    SocialScore,
    GovernanceScore,
    CarbonEmissions,
    EmployeeSatisfaction,
    BoardDiversity,
    Controversies,
}

impl PredictionField {
    /// Every field, in the order the service expects them.
    pub const ALL: [Self; 7] = [
        Self::EnvironmentalScore,
        Self::SocialScore,
        Self::GovernanceScore,
        Self::CarbonEmissions,
        Self::EmployeeSatisfaction,
        Self::BoardDiversity,
        Self::Controversies,
    ];

    /// Column / JSON key name.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::EnvironmentalScore => "environmental_score",
            Self::SocialScore => "social_score",
            Self::GovernanceScore => "governance_score",
            Self::CarbonEmissions => "carbon_emissions",
            Self::EmployeeSatisfaction => "employee_satisfaction",
            Self::BoardDiversity => "board_diversity",
            Self::Controversies => "controversies",
        }
    }

    /// Inclusive range accepted for this field.
    #[must_use]
    pub const fn range(self) -> (f64, f64) {
        match self {
            Self::CarbonEmissions => (0.0, 1_000_000_000.0),
            _ => (0.0, 100.0),
        }
    }

    /// Clamp `value` into [`range`](Self::range). Non-finite input maps to the lower bound.
    #[must_use]
    pub fn clamp(self, value: f64) -> f64 {
        let (min, max) = self.range();
        if !value.is_finite() {
            return min;
        }
        value.clamp(min, max)
    }
}

impl fmt::Display for PredictionField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl std::str::FromStr for PredictionField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|f| f.key() == s)
            .ok_or_else(|| format!("unknown prediction field: {s}"))
    }
}

/// Inputs for a single prediction. Every value stays within its field's range.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct PredictionInput {
    environmental_score: f64,
    social_score: f64,
    governance_score: f64,
    carbon_emissions: f64,
    employee_satisfaction: f64,
    board_diversity: f64,
    controversies: f64,
}

impl PredictionInput {
    /// All zeros.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Form defaults for a company: component scores from the scorecard; employee
    /// satisfaction, board diversity and controversies from the raw row when present.
    /// Carbon emissions start at zero.
    #[must_use]
    pub fn seeded(scorecard: &CompanyScorecard, raw: Option<&RawCompanyInfo>) -> Self {
        let from_raw = |f: fn(&RawCompanyInfo) -> Option<f64>| raw.and_then(f).unwrap_or(0.0);
        Self::new()
            .with(
                PredictionField::EnvironmentalScore,
                f64::from(scorecard.environmental_score),
            )
            .with(PredictionField::SocialScore, f64::from(scorecard.social_score))
            .with(
                PredictionField::GovernanceScore,
                f64::from(scorecard.governance_score),
            )
            .with(
                PredictionField::EmployeeSatisfaction,
                from_raw(|r| r.employee_satisfaction),
            )
            .with(PredictionField::BoardDiversity, from_raw(|r| r.board_diversity))
            .with(PredictionField::Controversies, from_raw(|r| r.controversies))
    }

    /// Set a field, clamping the value into range. Returns the stored value.
    pub fn set(&mut self, field: PredictionField, value: f64) -> f64 {
        let v = field.clamp(value);
        *self.slot(field) = v;
        v
    }

    /// Builder-style [`set`](Self::set).
    #[must_use]
    pub fn with(mut self, field: PredictionField, value: f64) -> Self {
        self.set(field, value);
        self
    }

    #[must_use]
    pub const fn get(&self, field: PredictionField) -> f64 {
        match field {
            PredictionField::EnvironmentalScore => self.environmental_score,
            PredictionField::SocialScore => self.social_score,
            PredictionField::GovernanceScore => self.governance_score,
            PredictionField::CarbonEmissions => self.carbon_emissions,
            PredictionField::EmployeeSatisfaction => self.employee_satisfaction,
            PredictionField::BoardDiversity => self.board_diversity,
            PredictionField::Controversies => self.controversies,
        }
    }

    fn slot(&mut self, field: PredictionField) -> &mut f64 {
        match field {
            PredictionField::EnvironmentalScore => &mut self.environmental_score,
            PredictionField::SocialScore => &mut self.social_score,
            PredictionField::GovernanceScore => &mut self.governance_score,
            PredictionField::CarbonEmissions => &mut self.carbon_emissions,
            PredictionField::EmployeeSatisfaction => &mut self.employee_satisfaction,
            PredictionField::BoardDiversity => &mut self.board_diversity,
            PredictionField::Controversies => &mut self.controversies,
        }
    }
}
