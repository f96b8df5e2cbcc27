use async_trait::async_trait;
use chrono::NaiveDate;

use super::insights_model::{SecFilingsInsights, SocialMediaInsight};
use crate::errors::Result;

/// Trait for SEC filing analysis
#[async_trait]
pub trait SecFilingsServiceTrait: Send + Sync {
    async fn get_sec_filings_insights(
        &self,
        symbol: &str,
        exchange: &str,
        date: NaiveDate,
    ) -> Result<SecFilingsInsights>;
}

/// Trait for social media sentiment analysis
#[async_trait]
pub trait SocialMediaSentimentServiceTrait: Send + Sync {
    async fn get_social_media_insights(
        &self,
        symbol: &str,
        exchange: &str,
        date: NaiveDate,
    ) -> Result<SocialMediaInsight>;
}
