use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One point of the "growth of 100" comparison chart.
///
/// The core generates these; a frontend just renders them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizedPoint {
    pub date: NaiveDate,

    /// (1 + portfolio_return) × 100
    pub portfolio: f64,

    /// (1 + benchmark_return) × 100
    pub benchmark: f64,

    /// (1 + alternative_asset_return) × 100
    pub alternative_asset: f64,
}

/// Returns of the three series between a reference record and the latest one.
/// All values are fractions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReturnComparison {
    /// Date of the record used as the start of the window
    pub from: NaiveDate,

    /// Date of the latest record
    pub to: NaiveDate,

    pub portfolio_return: f64,
    pub benchmark_return: f64,
    pub alternative_asset_return: f64,
}

/// A labelled look-back window, e.g. "3 Months" / 90 days.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PeriodReturns {
    pub label: String,
    pub days: i64,

    /// `None` when there are fewer than two records to compare
    pub returns: Option<ReturnComparison>,
}

/// Everything the performance comparison view needs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerformanceComparison {
    pub series: Vec<NormalizedPoint>,
    pub periods: Vec<PeriodReturns>,
}
