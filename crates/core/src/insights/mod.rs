//! Insight services module - SEC filing and social media sentiment analysis.

mod insights_model;
mod insights_service;
mod insights_traits;


pub use insights_model::{SecFilingsInsights, SocialMediaInsight};
pub use insights_service::{SecFilingsService, SocialMediaSentimentService};
pub use insights_traits::{SecFilingsServiceTrait, SocialMediaSentimentServiceTrait};
