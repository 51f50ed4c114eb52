pub mod clock;
pub mod entries;
pub mod error;
pub mod extract;
pub mod users;

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    routing::{delete, get, post, put},
};

use diary_store::DiaryStore;
use diary_types::api::HealthResponse;

use crate::clock::Clock;

pub type AppState = Arc<AppStateInner>;

pub struct AppStateInner {
    pub store: DiaryStore,
    pub clock: Arc<dyn Clock>,
}

impl AppStateInner {
    pub fn new(clock: Arc<dyn Clock>) -> AppState {
        Arc::new(Self {
            store: DiaryStore::new(),
            clock,
        })
    }
}

/// All diary routes. Wrong methods on a known path answer 405, including
/// HEAD on the diary reads.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/register", post(users::register))
        .route("/login", post(users::login))
        .route(
            "/showDiaryOfMonth",
            get(entries::show_diary_of_month).head(method_not_allowed),
        )
        .route("/addEntry", post(entries::add_entry))
        .route("/updateEntry", put(entries::update_entry))
        .route("/deleteEntry", delete(entries::delete_entry))
        .route(
            "/showEntry",
            get(entries::show_entry).head(method_not_allowed),
        )
        .route("/health", get(health))
        .with_state(state)
}

/// GET /health — liveness plus the number of registered users.
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".into(),
        users: state.store.user_count().await,
    })
}

async fn method_not_allowed() -> StatusCode {
    StatusCode::METHOD_NOT_ALLOWED
}
