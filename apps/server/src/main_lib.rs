use std::sync::Arc;

use stocklens_core::insights::{
    SecFilingsService, SecFilingsServiceTrait, SocialMediaSentimentService,
    SocialMediaSentimentServiceTrait,
};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub struct AppState {
    pub sec_filings_service: Arc<dyn SecFilingsServiceTrait>,
    pub social_media_service: Arc<dyn SocialMediaSentimentServiceTrait>,
}

pub fn init_tracing() {
    let log_format = std::env::var("SL_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init();
    }
}

pub fn build_state() -> Arc<AppState> {
    tracing::debug!("Wiring placeholder insight services");
    Arc::new(AppState {
        sec_filings_service: Arc::new(SecFilingsService::new()),
        social_media_service: Arc::new(SocialMediaSentimentService::new()),
    })
}
