use std::sync::Arc;

use axum::{
    extract::{Path, Query},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use stocklens_core::industries::{Industry, IndustryCategory, IndustryProfile};
use tracing::debug;

use crate::{
    error::{ApiError, ApiResult},
    main_lib::AppState,
};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct IndustryEntry {
    id: Industry,
    name: &'static str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CategoryEntry {
    id: IndustryCategory,
    name: &'static str,
}

#[derive(Debug, Deserialize)]
struct ResolveQuery {
    name: Option<String>,
}

async fn list_industries() -> Json<Vec<IndustryEntry>> {
    let entries = Industry::ALL
        .iter()
        .map(|industry| IndustryEntry {
            id: *industry,
            name: industry.industry_name(),
        })
        .collect();
    Json(entries)
}

async fn resolve_industry(Query(query): Query<ResolveQuery>) -> Json<IndustryProfile> {
    let industry = Industry::from_industry_name(query.name.as_deref());
    debug!("Resolved industry name {:?} to {}", query.name, industry.as_str());
    Json(industry.profile())
}

async fn get_industry_categories(Path(id): Path<String>) -> ApiResult<Json<Vec<CategoryEntry>>> {
    let industry = id
        .parse::<Industry>()
        .map_err(|e| ApiError::NotFound(e.to_string()))?;
    let categories = industry
        .categories()
        .into_iter()
        .map(|category| CategoryEntry {
            id: category,
            name: category.display_name(),
        })
        .collect();
    Ok(Json(categories))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/industries", get(list_industries))
        .route("/industries/resolve", get(resolve_industry))
        .route("/industries/{id}/categories", get(get_industry_categories))
}
