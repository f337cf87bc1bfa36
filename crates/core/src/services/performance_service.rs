use chrono::Duration;

use crate::models::comparison::{
    NormalizedPoint, PerformanceComparison, PeriodReturns, ReturnComparison,
};
use crate::models::performance::HistoricalPerformanceRecord;

/// Standard look-back windows shown next to the comparison chart.
pub const STANDARD_PERIODS: [(&str, i64); 3] =
    [("1 Month", 30), ("3 Months", 90), ("1 Year", 365)];

/// Compares the portfolio against the benchmark index and the alternative
/// asset over the recorded history.
///
/// Input order does not matter: records are sorted by date before use.
pub struct PerformanceService;

impl PerformanceService {
    pub fn new() -> Self {
        Self
    }

    /// "Growth of 100" series for the three return streams, oldest first.
    #[must_use]
    pub fn normalized_series(&self, history: &[HistoricalPerformanceRecord]) -> Vec<NormalizedPoint> {
        sorted_by_date(history)
            .into_iter()
            .map(|r| NormalizedPoint {
                date: r.date,
                portfolio: (1.0 + r.portfolio_return) * 100.0,
                benchmark: (1.0 + r.benchmark_return) * 100.0,
                alternative_asset: (1.0 + r.alternative_asset_return) * 100.0,
            })
            .collect()
    }

    /// Returns over the last `days` days.
    ///
    /// The window starts at the record whose date is nearest to
    /// `latest.date - days`; on equal distance the earlier record wins.
    /// Returns `None` with fewer than two records.
    #[must_use]
    pub fn period_returns(
        &self,
        history: &[HistoricalPerformanceRecord],
        days: i64,
    ) -> Option<ReturnComparison> {
        if history.len() < 2 {
            return None;
        }

        let sorted = sorted_by_date(history);
        let latest = *sorted.last()?;
        let target = latest.date - Duration::days(days);

        let reference = sorted.iter().copied().reduce(|prev, curr| {
            let prev_diff = (prev.date - target).num_days().abs();
            let curr_diff = (curr.date - target).num_days().abs();
            if curr_diff < prev_diff {
                curr
            } else {
                prev
            }
        })?;

        Some(ReturnComparison {
            from: reference.date,
            to: latest.date,
            portfolio_return: relative_return(latest.portfolio_return, reference.portfolio_return),
            benchmark_return: relative_return(latest.benchmark_return, reference.benchmark_return),
            alternative_asset_return: relative_return(
                latest.alternative_asset_return,
                reference.alternative_asset_return,
            ),
        })
    }

    /// Normalized series plus the standard 1M / 3M / 1Y windows.
    #[must_use]
    pub fn comparison(&self, history: &[HistoricalPerformanceRecord]) -> PerformanceComparison {
        let periods = STANDARD_PERIODS
            .iter()
            .map(|(label, days)| PeriodReturns {
                label: (*label).to_string(),
                days: *days,
                returns: self.period_returns(history, *days),
            })
            .collect();

        PerformanceComparison {
            series: self.normalized_series(history),
            periods,
        }
    }
}

impl Default for PerformanceService {
    fn default() -> Self {
        Self::new()
    }
}

fn sorted_by_date(history: &[HistoricalPerformanceRecord]) -> Vec<&HistoricalPerformanceRecord> {
    let mut sorted: Vec<&HistoricalPerformanceRecord> = history.iter().collect();
    sorted.sort_by_key(|r| r.date);
    sorted
}

/// Return between two cumulative returns: (1 + end) / (1 + start) - 1.
fn relative_return(end: f64, start: f64) -> f64 {
    let base = 1.0 + start;
    if base != 0.0 {
        (1.0 + end) / base - 1.0
    } else {
        0.0
    }
}
