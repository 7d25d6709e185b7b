//! Route table.

mod health;
mod progress;
mod word_sets;
mod words;

use axum::Router;
use axum::routing::{delete, get, post};

use crate::state::AppState;

const fn default_true() -> bool {
    true
}

pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/healthz", get(health::healthz))
        .route("/api/userdata", get(progress::get_progress))
        .route("/api/userdata/random-set", post(progress::random_set))
        .route(
            "/api/userdata/search-and-add",
            post(progress::search_and_add),
        )
        .route("/api/correct/update", post(progress::update_correct))
        .route("/api/incorrect/update", post(progress::update_incorrect))
        .route("/api/delete-all-words", post(progress::delete_all_words))
        .route("/api/shuffle-words", post(progress::shuffle_words))
        .route(
            "/api/wordsets",
            get(word_sets::list_word_sets).post(word_sets::register_word_set),
        )
        .route("/api/wordsets/search", get(word_sets::search_word_sets))
        .route("/api/add-set-to-user/{set_key}", post(words::add_set_to_user))
        .route("/api/add-range-to-user", post(words::add_range_to_user))
        .route("/api/words", post(words::add_words))
        .route("/api/words/{word_id}", delete(words::delete_word))
}
