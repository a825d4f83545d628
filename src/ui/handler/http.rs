//! HTTP endpoint handlers.
//!
//! Everything besides the WebSocket upgrade path is a small operator
//! surface: a plaintext banner on any unmatched path plus JSON health and
//! room-listing endpoints.

use std::sync::Arc;

use axum::{Json, extract::State};

use crate::infrastructure::dto::http::RoomSummaryDto;
use crate::ui::state::AppState;

/// Plaintext acknowledgment for operators probing the server over plain HTTP
pub async fn banner() -> &'static str {
    "MAX miniapp signaling server\n"
}

/// Health check endpoint with current connection/room counts
pub async fn health_check(State(state): State<Arc<AppState>>) -> Json<serde_json::Value> {
    let connections = state.registry.count_connections().await;
    let rooms = state.registry.count_rooms().await;
    Json(serde_json::json!({
        "status": "ok",
        "connections": connections,
        "rooms": rooms,
    }))
}

/// List live rooms and their members
pub async fn get_rooms(State(state): State<Arc<AppState>>) -> Json<Vec<RoomSummaryDto>> {
    let snapshot = state.registry.rooms_snapshot().await;

    let mut rooms: Vec<RoomSummaryDto> = snapshot
        .into_iter()
        .map(|(room_id, members)| {
            let mut members: Vec<String> =
                members.into_iter().map(|id| id.to_string()).collect();
            members.sort();
            RoomSummaryDto {
                id: room_id.into_string(),
                members,
            }
        })
        .collect();

    // Sort by room id for consistent ordering
    rooms.sort_by(|a, b| a.id.cmp(&b.id));

    Json(rooms)
}
