//! StockLens Core - Industry taxonomy, market classifications and insight services.
//!
//! This crate holds the pure classification tables the rest of StockLens
//! builds on. Lookups are total and allocation-free; the tables are built
//! once on first use and shared read-only across threads.

pub mod errors;
pub mod industries;
pub mod insights;
pub mod sectors;
pub mod strategy;

// Re-export the common taxonomy types
pub use industries::{Industry, IndustryCategory, IndustryProfile};
pub use sectors::{CompanySize, Sector};

// Re-export error types
pub use errors::Error;
pub use errors::Result;
