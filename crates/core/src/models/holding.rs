use serde::{Deserialize, Serialize};

/// Market-capitalization label that counts towards the large-cap weight.
pub const LARGE_CAP: &str = "Large";

/// One owned security.
///
/// `value`, `gain_loss` and `gain_loss_percent` are fixed at ingestion time.
/// The analytics engine treats `value` as ground truth and never re-derives it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Holding {
    /// Ticker symbol (e.g., "TCS", "HDFCBANK"). Not required to be unique.
    pub symbol: String,

    /// Company display name
    pub company_name: String,

    /// Number of shares owned
    pub quantity: i64,

    /// Average purchase price per share
    pub avg_price: f64,

    /// Latest market price per share
    pub current_price: f64,

    /// Sector classification (e.g., "Technology", "Banking")
    pub sector: String,

    /// Market-cap band (e.g., "Large", "Mid", "Small")
    pub market_cap: String,

    /// Listing exchange (e.g., "NSE")
    pub exchange: String,

    /// Current market value: quantity × current_price
    pub value: f64,

    /// Absolute gain/loss against the invested amount
    pub gain_loss: f64,

    /// Relative gain/loss as a fraction (0.05 = 5%)
    pub gain_loss_percent: f64,
}

impl Holding {
    /// Build a holding and derive its value and gain fields from price data.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        symbol: impl Into<String>,
        company_name: impl Into<String>,
        quantity: i64,
        avg_price: f64,
        current_price: f64,
        sector: impl Into<String>,
        market_cap: impl Into<String>,
        exchange: impl Into<String>,
    ) -> Self {
        let value = quantity as f64 * current_price;
        let invested = quantity as f64 * avg_price;
        let gain_loss = value - invested;
        let gain_loss_percent = if invested != 0.0 {
            gain_loss / invested
        } else {
            0.0
        };

        Self {
            symbol: symbol.into(),
            company_name: company_name.into(),
            quantity,
            avg_price,
            current_price,
            sector: sector.into(),
            market_cap: market_cap.into(),
            exchange: exchange.into(),
            value,
            gain_loss,
            gain_loss_percent,
        }
    }

    /// Amount paid for the position: quantity × avg_price.
    #[must_use]
    pub fn invested(&self) -> f64 {
        self.quantity as f64 * self.avg_price
    }

    #[must_use]
    pub fn is_large_cap(&self) -> bool {
        self.market_cap == LARGE_CAP
    }
}
