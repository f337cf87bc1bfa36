use serde::{Deserialize, Serialize};

/// Display settings stored alongside the snapshot.
///
/// Labels only: none of these values change a computed number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// ISO currency code of all monetary values (e.g., "INR", "USD").
    pub currency: String,

    /// Display name of the benchmark index series.
    pub benchmark_name: String,

    /// Display name of the alternative asset series.
    pub alternative_asset_name: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            currency: "INR".to_string(),
            benchmark_name: "Nifty 50".to_string(),
            alternative_asset_name: "Gold".to_string(),
        }
    }
}
