//! Placeholder insight services.
//!
//! Both services validate their input and return neutral results until a real
//! analysis backend is wired in.

use async_trait::async_trait;
use chrono::NaiveDate;
use log::debug;

use super::insights_model::{SecFilingsInsights, SocialMediaInsight};
use super::insights_traits::{SecFilingsServiceTrait, SocialMediaSentimentServiceTrait};
use crate::errors::{Result, ValidationError};

fn require_field(name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ValidationError::MissingField(name.to_string()).into());
    }
    Ok(())
}

#[derive(Debug, Default, Clone)]
pub struct SecFilingsService;

impl SecFilingsService {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl SecFilingsServiceTrait for SecFilingsService {
    async fn get_sec_filings_insights(
        &self,
        symbol: &str,
        exchange: &str,
        date: NaiveDate,
    ) -> Result<SecFilingsInsights> {
        require_field("symbol", symbol)?;
        require_field("exchange", exchange)?;
        debug!("SEC filings insights requested for {}:{} on {}", exchange, symbol, date);
        Ok(SecFilingsInsights::default())
    }
}

#[derive(Debug, Default, Clone)]
pub struct SocialMediaSentimentService;

impl SocialMediaSentimentService {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl SocialMediaSentimentServiceTrait for SocialMediaSentimentService {
    async fn get_social_media_insights(
        &self,
        symbol: &str,
        exchange: &str,
        date: NaiveDate,
    ) -> Result<SocialMediaInsight> {
        require_field("symbol", symbol)?;
        require_field("exchange", exchange)?;
        debug!("Social media insights requested for {}:{} on {}", exchange, symbol, date);
        Ok(SocialMediaInsight::default())
    }
}
