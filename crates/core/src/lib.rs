pub mod errors;
pub mod models;
pub mod services;
pub mod storage;

use log::{debug, warn};
use models::{
    analytics::{MarketCapAllocation, PortfolioSummary, SectorAllocation, TopPerformers},
    comparison::PerformanceComparison,
    holding::Holding,
    performance::HistoricalPerformanceRecord,
    settings::Settings,
    snapshot::PortfolioSnapshot,
};
use services::{analytics_service::AnalyticsService, performance_service::PerformanceService};
use storage::{import::DatasetImporter, manager::StorageManager};

use errors::CoreError;

/// Largest tolerated gap between a stored holding value and
/// quantity × current_price before a warning is logged.
const VALUE_MISMATCH_TOLERANCE: f64 = 1.0;

/// Main entry point for the portfolio analytics core library.
///
/// Holds one immutable snapshot of holdings and historical performance and
/// exposes every read a boundary layer (HTTP handler, CLI, UI) needs. Each
/// method recomputes from the snapshot; nothing is cached between calls.
#[must_use]
pub struct PortfolioAnalytics {
    snapshot: PortfolioSnapshot,
    analytics_service: AnalyticsService,
    performance_service: PerformanceService,
    /// Tracks whether settings changed since the last save/load.
    dirty: bool,
}

impl std::fmt::Debug for PortfolioAnalytics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PortfolioAnalytics")
            .field("holdings", &self.snapshot.holdings.len())
            .field("history_records", &self.snapshot.historical_performance.len())
            .field("settings", &self.snapshot.settings)
            .field("dirty", &self.dirty)
            .finish()
    }
}

impl PortfolioAnalytics {
    /// Wrap an already loaded snapshot.
    pub fn new(snapshot: PortfolioSnapshot) -> Self {
        Self::build(snapshot)
    }

    /// Wrap the two collections with default settings.
    pub fn from_collections(
        holdings: Vec<Holding>,
        historical_performance: Vec<HistoricalPerformanceRecord>,
    ) -> Self {
        Self::build(PortfolioSnapshot::new(holdings, historical_performance))
    }

    /// Import the holdings and historical performance sheets from CSV files
    /// (native only, not WASM).
    #[cfg(not(target_arch = "wasm32"))]
    pub fn from_csv_files(holdings_path: &str, history_path: &str) -> Result<Self, CoreError> {
        let snapshot = DatasetImporter::snapshot_from_files(holdings_path, history_path)?;
        Ok(Self::build(snapshot))
    }

    /// Import the two sheets from in-memory CSV documents.
    pub fn from_csv_bytes(holdings_csv: &[u8], history_csv: &[u8]) -> Result<Self, CoreError> {
        let snapshot = DatasetImporter::snapshot_from_bytes(holdings_csv, history_csv)?;
        Ok(Self::build(snapshot))
    }

    /// Load a JSON snapshot from bytes.
    pub fn load_from_bytes(data: &[u8]) -> Result<Self, CoreError> {
        let snapshot = StorageManager::load_from_bytes(data)?;
        Ok(Self::build(snapshot))
    }

    /// Serialize the snapshot (including settings) to JSON bytes.
    /// Clears the unsaved-changes flag on success.
    pub fn save_to_bytes(&mut self) -> Result<Vec<u8>, CoreError> {
        let bytes = StorageManager::save_to_bytes(&self.snapshot)?;
        self.dirty = false;
        Ok(bytes)
    }

    /// Load a JSON snapshot file (native only, not WASM).
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_from_file(path: &str) -> Result<Self, CoreError> {
        let snapshot = StorageManager::load_from_file(path)?;
        Ok(Self::build(snapshot))
    }

    /// Save the snapshot as a JSON file (native only, not WASM).
    /// Clears the unsaved-changes flag on success.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn save_to_file(&mut self, path: &str) -> Result<(), CoreError> {
        StorageManager::save_to_file(&self.snapshot, path)?;
        self.dirty = false;
        Ok(())
    }

    // ── Portfolio Reads ─────────────────────────────────────────────

    /// All scalar metrics: value, invested, gain/loss, holding count,
    /// diversification score and risk level.
    #[must_use]
    pub fn summary(&self) -> PortfolioSummary {
        self.analytics_service
            .summary(&self.snapshot.holdings, &self.snapshot.historical_performance)
    }

    #[must_use]
    pub fn holdings(&self) -> &[Holding] {
        &self.snapshot.holdings
    }

    #[must_use]
    pub fn historical_performance(&self) -> &[HistoricalPerformanceRecord] {
        &self.snapshot.historical_performance
    }

    #[must_use]
    pub fn sector_allocation(&self) -> Vec<SectorAllocation> {
        let holdings = &self.snapshot.holdings;
        let total_value = self.analytics_service.total_value(holdings);
        self.analytics_service.sector_allocation(holdings, total_value)
    }

    #[must_use]
    pub fn market_cap_allocation(&self) -> Vec<MarketCapAllocation> {
        let holdings = &self.snapshot.holdings;
        let total_value = self.analytics_service.total_value(holdings);
        self.analytics_service
            .market_cap_allocation(holdings, total_value)
    }

    /// Best and worst holding by gain/loss percentage.
    ///
    /// Fails with [`CoreError::NotFound`] when the snapshot has no holdings.
    pub fn top_performers(&self) -> Result<TopPerformers, CoreError> {
        self.analytics_service
            .top_performers(&self.snapshot.holdings)
            .ok_or_else(|| CoreError::NotFound("No holdings found".into()))
    }

    /// Normalized return series and trailing 1M / 3M / 1Y returns for the
    /// portfolio, the benchmark index and the alternative asset.
    #[must_use]
    pub fn performance_comparison(&self) -> PerformanceComparison {
        self.performance_service
            .comparison(&self.snapshot.historical_performance)
    }

    /// Sample volatility of portfolio returns, in percent.
    #[must_use]
    pub fn volatility(&self) -> f64 {
        self.analytics_service
            .risk_service()
            .volatility(&self.snapshot.historical_performance)
    }

    /// Value-weighted portfolio beta derived from sector betas.
    #[must_use]
    pub fn portfolio_beta(&self) -> f64 {
        let holdings = &self.snapshot.holdings;
        let total_value = self.analytics_service.total_value(holdings);
        self.analytics_service
            .risk_service()
            .portfolio_beta(holdings, total_value)
    }

    #[must_use]
    pub fn snapshot(&self) -> &PortfolioSnapshot {
        &self.snapshot
    }

    // ── Settings ────────────────────────────────────────────────────

    #[must_use]
    pub fn settings(&self) -> &Settings {
        &self.snapshot.settings
    }

    /// Set the display currency (e.g., "INR", "USD").
    /// Currency code must be a 3-letter alphabetic string.
    pub fn set_currency(&mut self, currency: &str) -> Result<(), CoreError> {
        let trimmed = currency.trim().to_uppercase();
        if trimmed.len() != 3 || !trimmed.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(CoreError::ValidationError(format!(
                "Invalid currency code '{currency}': must be exactly 3 ASCII letters (e.g., INR, USD, EUR)"
            )));
        }
        self.snapshot.settings.currency = trimmed;
        self.dirty = true;
        Ok(())
    }

    /// Rename the benchmark and alternative-asset series. Names must not be blank.
    pub fn set_benchmark_names(
        &mut self,
        benchmark: &str,
        alternative_asset: &str,
    ) -> Result<(), CoreError> {
        let benchmark = benchmark.trim();
        let alternative_asset = alternative_asset.trim();
        if benchmark.is_empty() || alternative_asset.is_empty() {
            return Err(CoreError::ValidationError(
                "Benchmark and alternative asset names must not be empty".into(),
            ));
        }
        self.snapshot.settings.benchmark_name = benchmark.to_string();
        self.snapshot.settings.alternative_asset_name = alternative_asset.to_string();
        self.dirty = true;
        Ok(())
    }

    /// Returns `true` if settings changed since the last save or load.
    #[must_use]
    pub fn has_unsaved_changes(&self) -> bool {
        self.dirty
    }

    // ── Internal ────────────────────────────────────────────────────

    fn build(snapshot: PortfolioSnapshot) -> Self {
        debug!(
            "Portfolio snapshot: {} holdings, {} historical records",
            snapshot.holdings.len(),
            snapshot.historical_performance.len()
        );

        // Stored values are ground truth; inconsistencies are only reported.
        for holding in &snapshot.holdings {
            let expected = holding.quantity as f64 * holding.current_price;
            if (holding.value - expected).abs() > VALUE_MISMATCH_TOLERANCE {
                warn!(
                    "Holding {} has value {} but quantity × current price is {}",
                    holding.symbol, holding.value, expected
                );
            }
        }

        Self {
            snapshot,
            analytics_service: AnalyticsService::new(),
            performance_service: PerformanceService::new(),
            dirty: false,
        }
    }
}
