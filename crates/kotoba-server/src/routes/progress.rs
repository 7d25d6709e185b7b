//! Handlers over the user progress document.

use axum::Json;
use axum::extract::State;

use kotoba_core::entities::UserProgress;
use kotoba_core::enums::CounterKind;
use kotoba_core::requests::{
    CounterUpdateRequest, RandomSetRequest, SearchAndAddRequest, ShuffleRequest,
};
use kotoba_core::responses::{
    CounterResponse, MessageResponse, RandomSetResponse, SearchAndAddResponse,
};

use crate::error::{ApiError, ApiJson};
use crate::state::AppState;

pub async fn get_progress(State(st): State<AppState>) -> Result<Json<UserProgress>, ApiError> {
    Ok(Json(st.engine.progress().await?))
}

pub async fn random_set(
    State(st): State<AppState>,
    ApiJson(req): ApiJson<RandomSetRequest>,
) -> Result<Json<RandomSetResponse>, ApiError> {
    Ok(Json(st.engine.random_set(&req).await?))
}

pub async fn search_and_add(
    State(st): State<AppState>,
    ApiJson(req): ApiJson<SearchAndAddRequest>,
) -> Result<Json<SearchAndAddResponse>, ApiError> {
    Ok(Json(st.engine.search_and_add(&req.search_term).await?))
}

pub async fn update_correct(
    State(st): State<AppState>,
    ApiJson(req): ApiJson<CounterUpdateRequest>,
) -> Result<Json<CounterResponse>, ApiError> {
    update_counter(&st, CounterKind::Correct, req).await
}

pub async fn update_incorrect(
    State(st): State<AppState>,
    ApiJson(req): ApiJson<CounterUpdateRequest>,
) -> Result<Json<CounterResponse>, ApiError> {
    update_counter(&st, CounterKind::Incorrect, req).await
}

async fn update_counter(
    st: &AppState,
    kind: CounterKind,
    req: CounterUpdateRequest,
) -> Result<Json<CounterResponse>, ApiError> {
    Ok(Json(st.engine.set_counter(kind, &req.word, req.count).await?))
}

pub async fn delete_all_words(
    State(st): State<AppState>,
) -> Result<Json<MessageResponse>, ApiError> {
    st.engine.reset().await?;
    Ok(Json(MessageResponse::new("All words deleted")))
}

pub async fn shuffle_words(
    State(st): State<AppState>,
    ApiJson(req): ApiJson<ShuffleRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    let progress = st
        .engine
        .replace_vocabulary(req.shuffled_vocabulary_data)
        .await?;
    Ok(Json(MessageResponse::new(format!(
        "Saved order of {} words",
        progress.vocabulary.len()
    ))))
}
