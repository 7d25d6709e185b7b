//! Raw set registration, listing, statistics, and search.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use serde::{Deserialize, Serialize};

use kotoba_core::requests::RegisterSetRequest;
use kotoba_core::responses::{MessageResponse, SetStatistics};

use crate::error::{ApiError, ApiJson, ApiQuery};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct StatsQuery {
    pub threshold: Option<u32>,
}

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub q: String,
}

/// Plain key list, or the per-set unstudied counts when a threshold is given.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum WordSetListing {
    Keys(Vec<String>),
    Statistics(SetStatistics),
}

pub async fn list_word_sets(
    State(st): State<AppState>,
    ApiQuery(query): ApiQuery<StatsQuery>,
) -> Result<Json<WordSetListing>, ApiError> {
    let listing = match query.threshold {
        Some(threshold) => WordSetListing::Statistics(st.engine.set_statistics(threshold).await?),
        None => WordSetListing::Keys(st.engine.list_set_keys().await?),
    };
    Ok(Json(listing))
}

pub async fn register_word_set(
    State(st): State<AppState>,
    ApiJson(req): ApiJson<RegisterSetRequest>,
) -> Result<(StatusCode, Json<MessageResponse>), ApiError> {
    let set = st.engine.register_set(&req.key, &req.content).await?;
    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new(format!("Word set {} saved", set.key))),
    ))
}

pub async fn search_word_sets(
    State(st): State<AppState>,
    ApiQuery(query): ApiQuery<SearchQuery>,
) -> Result<Json<Vec<String>>, ApiError> {
    Ok(Json(st.engine.search_sets(&query.q).await?))
}
