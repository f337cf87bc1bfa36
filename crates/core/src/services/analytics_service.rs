use crate::models::analytics::{
    MarketCapAllocation, Performer, PortfolioSummary, SectorAllocation, TopPerformers,
};
use crate::models::holding::Holding;
use crate::models::performance::HistoricalPerformanceRecord;
use crate::services::grouping::{self, share};
use crate::services::risk_service::RiskService;

/// Computes portfolio analytics: value, gain/loss, allocation breakdown,
/// best and worst performers.
///
/// Every method is a pure aggregation over borrowed slices. Nothing here
/// fails: zero denominators yield 0 instead of an error.
pub struct AnalyticsService {
    risk_service: RiskService,
}

impl AnalyticsService {
    pub fn new() -> Self {
        Self {
            risk_service: RiskService::new(),
        }
    }

    /// Risk metrics used by [`AnalyticsService::summary`].
    #[must_use]
    pub fn risk_service(&self) -> &RiskService {
        &self.risk_service
    }

    /// Sum of `value` across all holdings.
    #[must_use]
    pub fn total_value(&self, holdings: &[Holding]) -> f64 {
        holdings.iter().map(|h| h.value).sum()
    }

    /// Sum of `quantity * avg_price` across all holdings.
    #[must_use]
    pub fn total_invested(&self, holdings: &[Holding]) -> f64 {
        holdings.iter().map(Holding::invested).sum()
    }

    #[must_use]
    pub fn gain_loss(&self, total_value: f64, total_invested: f64) -> f64 {
        total_value - total_invested
    }

    /// Gain/loss as a fraction of the invested amount.
    ///
    /// Returns 0 when nothing is invested, which means "no basis", not "no gain".
    #[must_use]
    pub fn gain_loss_percent(&self, gain_loss: f64, total_invested: f64) -> f64 {
        share(gain_loss, total_invested)
    }

    #[must_use]
    pub fn number_of_holdings(&self, holdings: &[Holding]) -> usize {
        holdings.len()
    }

    /// One row per distinct sector, in first-seen order.
    #[must_use]
    pub fn sector_allocation(&self, holdings: &[Holding], total_value: f64) -> Vec<SectorAllocation> {
        grouping::by_sector(holdings)
            .into_iter()
            .map(|t| SectorAllocation {
                sector: t.label.to_string(),
                value: t.value,
                percentage: share(t.value, total_value),
                holdings_count: t.count,
            })
            .collect()
    }

    /// One row per distinct market-cap band, in first-seen order.
    #[must_use]
    pub fn market_cap_allocation(
        &self,
        holdings: &[Holding],
        total_value: f64,
    ) -> Vec<MarketCapAllocation> {
        grouping::by_market_cap(holdings)
            .into_iter()
            .map(|t| MarketCapAllocation {
                market_cap: t.label.to_string(),
                value: t.value,
                percentage: share(t.value, total_value),
                holdings_count: t.count,
            })
            .collect()
    }

    /// Holdings with the highest and lowest `gain_loss_percent`.
    ///
    /// On ties the first holding in input order wins, for best and worst
    /// independently. Returns `None` when there are no holdings.
    #[must_use]
    pub fn top_performers(&self, holdings: &[Holding]) -> Option<TopPerformers> {
        let (first, rest) = holdings.split_first()?;
        let mut best = first;
        let mut worst = first;

        for holding in rest {
            if holding.gain_loss_percent > best.gain_loss_percent {
                best = holding;
            }
            if holding.gain_loss_percent < worst.gain_loss_percent {
                worst = holding;
            }
        }

        Some(TopPerformers {
            best: performer(best),
            worst: performer(worst),
        })
    }

    /// All scalar metrics in one pass over the snapshot.
    #[must_use]
    pub fn summary(
        &self,
        holdings: &[Holding],
        history: &[HistoricalPerformanceRecord],
    ) -> PortfolioSummary {
        let total_value = self.total_value(holdings);
        let total_invested = self.total_invested(holdings);
        let total_gain_loss = self.gain_loss(total_value, total_invested);

        PortfolioSummary {
            total_value,
            total_invested,
            total_gain_loss,
            total_gain_loss_percent: self.gain_loss_percent(total_gain_loss, total_invested),
            number_of_holdings: self.number_of_holdings(holdings),
            diversification_score: self
                .risk_service
                .diversification_score(holdings, total_value),
            risk_level: self.risk_service.risk_level(holdings, history, total_value),
        }
    }
}

impl Default for AnalyticsService {
    fn default() -> Self {
        Self::new()
    }
}

fn performer(holding: &Holding) -> Performer {
    Performer {
        symbol: holding.symbol.clone(),
        name: holding.company_name.clone(),
        gain_percent: holding.gain_loss_percent,
    }
}
