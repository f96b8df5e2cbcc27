use serde::{Deserialize, Serialize};

/// Analysis of a company's regulatory filings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SecFilingsInsights {
    pub summary: String,
    pub filing_type: String,
    /// Sentiment in `[-1.0, 1.0]`; `0.0` is neutral.
    pub sentiment_score: f64,
    pub outlook: String,
}

/// Aggregate sentiment from social media chatter about a symbol.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialMediaInsight {
    pub sentiment_score: f64,
    pub summary: String,
}
