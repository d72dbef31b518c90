//! Accuracy metrics over a company's actual-vs-predicted history.

mod model;

pub use model::{ScoredPoint, TrendPoint, TrendSummary, YearMetric};

use std::iter::FusedIterator;

fn scored(points: &[TrendPoint]) -> impl Iterator<Item = ScoredPoint> + '_ {
    points.iter().filter_map(|p| {
        p.pair().map(|(actual, predicted)| ScoredPoint {
            label: p.label.clone(),
            actual,
            predicted,
        })
    })
}

/// MAE and RMSE over every point that has both an actual and a predicted value.
///
/// Returns `None` when no such point exists, which is not the same as a perfect fit.
#[must_use]
pub fn compute_metrics(points: &[TrendPoint]) -> Option<TrendSummary> {
    let mut n = 0usize;
    let mut abs_sum = 0.0;
    let mut sq_sum = 0.0;
    let mut latest = None;

    for p in scored(points) {
        let err = p.residual();
        abs_sum += err.abs();
        sq_sum += err * err;
        n += 1;
        latest = Some(p);
    }

    let latest = latest?;
    #[allow(clippy::cast_precision_loss)]
    let len = n as f64;
    Some(TrendSummary {
        latest,
        mae: abs_sum / len,
        rmse: (sq_sum / len).sqrt(),
    })
}

/// Per-point errors with a cumulative R², in input order.
///
/// The iterator is lazy and can be restarted by cloning it before consumption or by calling
/// this function again.
#[must_use]
pub fn by_year_metrics(points: &[TrendPoint]) -> ByYearMetrics<'_> {
    ByYearMetrics {
        points,
        pos: 0,
        actuals: Vec::new(),
        predicted: Vec::new(),
    }
}

/// Iterator returned by [`by_year_metrics`].
#[derive(Debug, Clone)]
pub struct ByYearMetrics<'a> {
    points: &'a [TrendPoint],
    pos: usize,
    actuals: Vec<f64>,
    predicted: Vec<f64>,
}

impl Iterator for ByYearMetrics<'_> {
    type Item = YearMetric;

    fn next(&mut self) -> Option<YearMetric> {
        let (point, (actual, predicted)) = loop {
            let point = self.points.get(self.pos)?;
            self.pos += 1;
            if let Some(pair) = point.pair() {
                break (point, pair);
            }
        };
        self.actuals.push(actual);
        self.predicted.push(predicted);

        let error = predicted - actual;
        let mse = error * error;
        Some(YearMetric {
            label: point.label.clone(),
            actual,
            predicted,
            error,
            mse,
            rmse: mse.sqrt(),
            r2: cumulative_r2(&self.actuals, &self.predicted),
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.points.len() - self.pos))
    }
}

impl FusedIterator for ByYearMetrics<'_> {}

/// R² of `predicted` against `actuals`; needs two points and a non-zero total variance.
fn cumulative_r2(actuals: &[f64], predicted: &[f64]) -> Option<f64> {
    if actuals.len() < 2 {
        return None;
    }
    #[allow(clippy::cast_precision_loss)]
    let mean = actuals.iter().sum::<f64>() / actuals.len() as f64;
    let ss_res: f64 = actuals
        .iter()
        .zip(predicted)
        .map(|(a, p)| (a - p).powi(2))
        .sum();
    let ss_tot: f64 = actuals.iter().map(|a| (a - mean).powi(2)).sum();
    if ss_tot == 0.0 {
        None
    } else {
        Some(1.0 - ss_res / ss_tot)
    }
}
