use std::sync::Arc;

use axum::{extract::State, response::Json};
use serde_json::Value;

use fitportal_common::{MasterData, RankingResponse};

use crate::AppState;

/// Admin lookup tables. Loaded once at startup and served unchanged.
pub async fn api_admin_masters(State(state): State<Arc<AppState>>) -> Json<MasterData> {
    Json(state.masters.clone())
}

/// Ranking has no backing computation yet; the list is always empty.
pub async fn api_ranking() -> Json<RankingResponse<Value>> {
    Json(RankingResponse::empty())
}
