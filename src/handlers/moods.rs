//! Mood discovery endpoint

use axum::{extract::State, Json};

use crate::{models::requests::MoodsResponse, state::AppState};

/// Lists the available moods in their fixed order
///
/// # Example
/// ```bash
/// curl http://localhost:8000/moods
/// # Returns: {"moods":[{"id":"sad","name":"Sad","description":"..."}, ...]}
/// ```
pub async fn list_moods(State(state): State<AppState>) -> Json<MoodsResponse> {
    Json(MoodsResponse {
        moods: state.moods.list_moods().to_vec(),
    })
}
