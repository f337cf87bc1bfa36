use serde::{Deserialize, Serialize};

use super::holding::Holding;
use super::performance::HistoricalPerformanceRecord;
use super::settings::Settings;

/// The data container handed to the analytics engine.
///
/// An immutable view of holdings and historical performance taken by the
/// caller, plus display settings. Every computation reads it, none writes it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PortfolioSnapshot {
    /// All owned positions
    pub holdings: Vec<Holding>,

    /// Dated portfolio / benchmark / alternative-asset records
    pub historical_performance: Vec<HistoricalPerformanceRecord>,

    #[serde(default)]
    pub settings: Settings,
}

impl PortfolioSnapshot {
    pub fn new(
        holdings: Vec<Holding>,
        historical_performance: Vec<HistoricalPerformanceRecord>,
    ) -> Self {
        Self {
            holdings,
            historical_performance,
            settings: Settings::default(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.holdings.is_empty() && self.historical_performance.is_empty()
    }
}
