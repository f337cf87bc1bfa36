use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Portfolio, benchmark and alternative-asset levels on one date.
///
/// Returns are cumulative fractions (0.05 = 5%), not percentages.
/// Records are expected in chronological order, but nothing here enforces it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoricalPerformanceRecord {
    pub date: NaiveDate,

    /// Absolute portfolio value on `date`
    pub portfolio_value: f64,

    /// Benchmark index level on `date` (e.g., Nifty 50)
    pub benchmark_index_value: f64,

    /// Alternative asset price on `date` (e.g., gold per 10g)
    pub alternative_asset_value: f64,

    pub portfolio_return: f64,
    pub benchmark_return: f64,
    pub alternative_asset_return: f64,
}
