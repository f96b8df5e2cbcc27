//! Industries module - the industry catalogue, its category sets and predicates.
//!
//! The taxonomy is static data: identifiers, display names and set membership
//! are fixed at build time and read-only afterwards.

mod industry_category;
mod industry_model;
mod industry_queries;
mod industry_sets;

#[cfg(test)]
mod industry_model_tests;

pub use industry_category::IndustryCategory;
pub use industry_model::Industry;
pub use industry_queries::IndustryProfile;
pub use industry_sets::{NO_INVENTORY_COMPONENTS, NO_INVENTORY_EXTRAS};
