use std::sync::Arc;

use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use chrono::{NaiveDate, Utc};
use serde::Deserialize;
use stocklens_core::insights::{
    SecFilingsInsights, SecFilingsServiceTrait, SocialMediaInsight,
    SocialMediaSentimentServiceTrait,
};

use crate::{error::ApiResult, main_lib::AppState};

#[derive(Debug, Deserialize)]
struct InsightsQuery {
    #[serde(default)]
    symbol: String,
    #[serde(default)]
    exchange: String,
    date: Option<NaiveDate>,
}

impl InsightsQuery {
    fn date_or_today(&self) -> NaiveDate {
        self.date.unwrap_or_else(|| Utc::now().date_naive())
    }
}

async fn get_sec_filings_insights(
    State(state): State<Arc<AppState>>,
    Query(query): Query<InsightsQuery>,
) -> ApiResult<Json<SecFilingsInsights>> {
    let insights = state
        .sec_filings_service
        .get_sec_filings_insights(&query.symbol, &query.exchange, query.date_or_today())
        .await?;
    Ok(Json(insights))
}

async fn get_social_media_insights(
    State(state): State<Arc<AppState>>,
    Query(query): Query<InsightsQuery>,
) -> ApiResult<Json<SocialMediaInsight>> {
    let insight = state
        .social_media_service
        .get_social_media_insights(&query.symbol, &query.exchange, query.date_or_today())
        .await?;
    Ok(Json(insight))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/sec-filings/insights", get(get_sec_filings_insights))
        .route("/social-media/insights", get(get_social_media_insights))
}
