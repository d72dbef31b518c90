use serde::Serialize;

/// One point of a company's actual-vs-predicted history.
///
/// Either value may be missing; such points stay in the series for display but are skipped
/// by every metric.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrendPoint {
    /// The year as text, or `Point N` when the year is unknown.
    pub label: String,
    pub year: Option<i64>,
    pub actual: Option<f64>,
    pub predicted: Option<f64>,
}

impl TrendPoint {
    /// Both values, if both are present and finite.
    #[must_use]
    pub fn pair(&self) -> Option<(f64, f64)> {
        match (self.actual, self.predicted) {
            (Some(a), Some(p)) if a.is_finite() && p.is_finite() => Some((a, p)),
            _ => None,
        }
    }
}

/// A trend point with both values present.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredPoint {
    pub label: String,
    pub actual: f64,
    pub predicted: f64,
}

impl ScoredPoint {
    /// Predicted minus actual.
    #[must_use]
    pub fn residual(&self) -> f64 {
        self.predicted - self.actual
    }
}

/// Aggregate error statistics over a company's scored history.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrendSummary {
    /// The most recent point carrying both values.
    pub latest: ScoredPoint,
    /// Mean absolute error.
    pub mae: f64,
    /// Root mean squared error.
    pub rmse: f64,
}

impl TrendSummary {
    /// Residual of the latest point (predicted minus actual).
    #[must_use]
    pub fn latest_residual(&self) -> f64 {
        self.latest.residual()
    }
}

/// Error figures for one point, with R² accumulated over all points up to it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct YearMetric {
    pub label: String,
    pub actual: f64,
    pub predicted: f64,
    /// Predicted minus actual.
    pub error: f64,
    pub mse: f64,
    /// Single-point RMSE, i.e. `|error|`.
    pub rmse: f64,
    /// Cumulative coefficient of determination. `None` for the first point and whenever every
    /// actual so far is identical.
    pub r2: Option<f64>,
}
