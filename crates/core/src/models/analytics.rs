use serde::{Deserialize, Serialize};

/// Scalar portfolio metrics, serialized with the summary endpoint's wire names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioSummary {
    /// Sum of all holding values
    pub total_value: f64,

    /// Sum of quantity × avg_price over all holdings
    pub total_invested: f64,

    /// total_value - total_invested
    pub total_gain_loss: f64,

    /// total_gain_loss / total_invested as a fraction (0 when nothing is invested)
    pub total_gain_loss_percent: f64,

    pub number_of_holdings: usize,

    /// Sector concentration score, 0 (concentrated) to 10 (diversified)
    pub diversification_score: f64,

    pub risk_level: RiskLevel,
}

/// Coarse portfolio risk classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RiskLevel {
    Low,
    Moderate,
    High,
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RiskLevel::Low => write!(f, "Low"),
            RiskLevel::Moderate => write!(f, "Moderate"),
            RiskLevel::High => write!(f, "High"),
        }
    }
}

/// Value held in one sector.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectorAllocation {
    pub sector: String,
    pub value: f64,
    /// Share of total portfolio value as a fraction
    pub percentage: f64,
    pub holdings_count: usize,
}

/// Value held in one market-cap band.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketCapAllocation {
    pub market_cap: String,
    pub value: f64,
    /// Share of total portfolio value as a fraction
    pub percentage: f64,
    pub holdings_count: usize,
}

/// A holding picked out by its gain/loss percentage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Performer {
    pub symbol: String,
    pub name: String,
    /// Gain/loss as a fraction
    pub gain_percent: f64,
}

/// Best and worst holding by gain/loss percentage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopPerformers {
    #[serde(rename = "bestPerformer")]
    pub best: Performer,
    #[serde(rename = "worstPerformer")]
    pub worst: Performer,
}
