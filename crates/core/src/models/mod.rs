pub mod analytics;
pub mod comparison;
pub mod holding;
pub mod performance;
pub mod settings;
pub mod snapshot;
