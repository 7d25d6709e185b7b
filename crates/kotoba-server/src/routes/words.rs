//! Handlers that add or remove vocabulary records.

use axum::Json;
use axum::extract::State;
use serde::Deserialize;

use kotoba_core::requests::{AddWordsRequest, RangeImportRequest};
use kotoba_core::responses::{DeleteWordResponse, ImportResponse, RangeImportResponse};

use super::default_true;
use crate::error::{ApiError, ApiJson, ApiPath, ApiQuery};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ImportQuery {
    #[serde(default = "default_true")]
    pub dedup: bool,
}

pub async fn add_set_to_user(
    State(st): State<AppState>,
    ApiPath(set_key): ApiPath<String>,
    ApiQuery(query): ApiQuery<ImportQuery>,
) -> Result<Json<ImportResponse>, ApiError> {
    Ok(Json(st.engine.import_set(&set_key, query.dedup).await?))
}

pub async fn add_range_to_user(
    State(st): State<AppState>,
    ApiJson(req): ApiJson<RangeImportRequest>,
) -> Result<Json<RangeImportResponse>, ApiError> {
    Ok(Json(
        st.engine.import_range(req.start, req.end, req.dedup).await?,
    ))
}

pub async fn add_words(
    State(st): State<AppState>,
    ApiJson(req): ApiJson<AddWordsRequest>,
) -> Result<Json<ImportResponse>, ApiError> {
    Ok(Json(st.engine.add_words(&req.text, req.dedup).await?))
}

pub async fn delete_word(
    State(st): State<AppState>,
    ApiPath(word_id): ApiPath<String>,
) -> Result<Json<DeleteWordResponse>, ApiError> {
    Ok(Json(st.engine.delete_word(&word_id).await?))
}
