use crate::models::analytics::RiskLevel;
use crate::models::holding::Holding;
use crate::models::performance::HistoricalPerformanceRecord;
use crate::services::grouping::{self, share};

/// Approximate betas for large-cap sectors. Sectors not listed use
/// [`DEFAULT_BETA`].
pub const SECTOR_BETAS: [(&str, f64); 9] = [
    ("Technology", 1.2),
    ("Automotive", 1.1),
    ("Banking", 1.0),
    ("Financial Services", 1.1),
    ("Energy", 0.9),
    ("Consumer Discretionary", 1.0),
    ("Telecommunications", 0.9),
    ("Consumer Goods", 0.8),
    ("Healthcare", 0.7),
];

pub const DEFAULT_BETA: f64 = 1.0;

/// Volatility (in percent) assumed when there is no return history at all.
pub const DEFAULT_VOLATILITY_PCT: f64 = 10.0;

/// HHI with the whole portfolio in one sector (100²).
const HHI_MAX: f64 = 10_000.0;

const MIN_HOLDINGS_FOR_NO_PENALTY: usize = 15;
const MIN_SECTORS_FOR_NO_PENALTY: usize = 6;
const PENALTY: f64 = 0.5;
const MAX_SCORE: f64 = 10.0;

// Risk classification cut-offs
const LOW_BETA: f64 = 0.8;
const HIGH_BETA: f64 = 1.5;
const LOW_VOLATILITY_PCT: f64 = 5.0;
const HIGH_VOLATILITY_PCT: f64 = 15.0;
const LOW_RISK_LARGE_CAP_WEIGHT: f64 = 0.9;
const HIGH_RISK_LARGE_CAP_WEIGHT: f64 = 0.5;

/// Concentration and risk metrics: diversification score, beta,
/// large-cap weight, volatility and the resulting risk level.
pub struct RiskService;

impl RiskService {
    pub fn new() -> Self {
        Self
    }

    /// Beta of a single sector from [`SECTOR_BETAS`].
    #[must_use]
    pub fn sector_beta(&self, sector: &str) -> f64 {
        SECTOR_BETAS
            .iter()
            .find(|(name, _)| *name == sector)
            .map_or(DEFAULT_BETA, |(_, beta)| *beta)
    }

    /// Herfindahl-Hirschman based diversification score on a 0-10 scale.
    ///
    /// 1. Sum value per sector and square each sector's share (0-100 scale).
    /// 2. Normalize HHI between an even split across the observed sectors
    ///    (best case) and everything in one sector (worst case).
    /// 3. Subtract 0.5 for fewer than 15 holdings and 0.5 for fewer than 6 sectors.
    /// 4. Round to one decimal (ties to even) and clamp to [0, 10].
    #[must_use]
    pub fn diversification_score(&self, holdings: &[Holding], total_value: f64) -> f64 {
        let sectors = grouping::by_sector(holdings);
        let num_sectors = sectors.len();

        let hhi: f64 = sectors
            .iter()
            .map(|s| (share(s.value, total_value) * 100.0).powi(2))
            .sum();

        let hhi_min = if num_sectors > 0 {
            HHI_MAX / num_sectors as f64
        } else {
            HHI_MAX
        };

        let mut score = if HHI_MAX != hhi_min {
            MAX_SCORE * (1.0 - (hhi - hhi_min) / (HHI_MAX - hhi_min))
        } else {
            0.0
        };

        if holdings.len() < MIN_HOLDINGS_FOR_NO_PENALTY {
            score -= PENALTY;
        }
        if num_sectors < MIN_SECTORS_FOR_NO_PENALTY {
            score -= PENALTY;
        }

        round_to_one_decimal(score).clamp(0.0, MAX_SCORE)
    }

    /// Value-weighted average of sector betas.
    #[must_use]
    pub fn portfolio_beta(&self, holdings: &[Holding], total_value: f64) -> f64 {
        grouping::by_sector(holdings)
            .iter()
            .map(|s| share(s.value, total_value) * self.sector_beta(s.label))
            .sum()
    }

    /// Fraction of total value held in "Large" market-cap holdings.
    #[must_use]
    pub fn large_cap_weight(&self, holdings: &[Holding], total_value: f64) -> f64 {
        let large_cap_value: f64 = holdings
            .iter()
            .filter(|h| h.is_large_cap())
            .map(|h| h.value)
            .sum();
        share(large_cap_value, total_value)
    }

    /// Sample standard deviation (n - 1) of portfolio returns, in percent.
    ///
    /// No records: [`DEFAULT_VOLATILITY_PCT`]. One record: 0.
    #[must_use]
    pub fn volatility(&self, history: &[HistoricalPerformanceRecord]) -> f64 {
        if history.is_empty() {
            return DEFAULT_VOLATILITY_PCT;
        }

        let n = history.len() as f64;
        let mean = history.iter().map(|r| r.portfolio_return).sum::<f64>() / n;
        let variance = if history.len() > 1 {
            history
                .iter()
                .map(|r| (r.portfolio_return - mean).powi(2))
                .sum::<f64>()
                / (n - 1.0)
        } else {
            0.0
        };

        variance.sqrt() * 100.0
    }

    /// Classify the portfolio. Low is checked first, then High, else Moderate.
    #[must_use]
    pub fn risk_level(
        &self,
        holdings: &[Holding],
        history: &[HistoricalPerformanceRecord],
        total_value: f64,
    ) -> RiskLevel {
        let beta = self.portfolio_beta(holdings, total_value);
        let large_cap_weight = self.large_cap_weight(holdings, total_value);
        let volatility = self.volatility(history);

        log::debug!(
            "Risk inputs: beta={beta:.3}, volatility={volatility:.3}%, large_cap_weight={large_cap_weight:.3}"
        );

        if beta < LOW_BETA
            && volatility < LOW_VOLATILITY_PCT
            && large_cap_weight > LOW_RISK_LARGE_CAP_WEIGHT
        {
            RiskLevel::Low
        } else if beta > HIGH_BETA
            || volatility > HIGH_VOLATILITY_PCT
            || large_cap_weight < HIGH_RISK_LARGE_CAP_WEIGHT
        {
            RiskLevel::High
        } else {
            RiskLevel::Moderate
        }
    }
}

impl Default for RiskService {
    fn default() -> Self {
        Self::new()
    }
}

/// Halves go to the even digit, so a score of exactly 8.25 becomes 8.2.
fn round_to_one_decimal(x: f64) -> f64 {
    (x * 10.0).round_ties_even() / 10.0
}
