pub mod analytics_service;
pub mod performance_service;
pub mod risk_service;

mod grouping;
