//! Strategy module - investor risk tolerance and holding-period definitions.

mod risk_tolerance_model;
mod time_horizon_model;
mod time_range_model;

pub use risk_tolerance_model::RiskTolerance;
pub use time_horizon_model::TimeHorizon;
pub use time_range_model::TimeRange;
