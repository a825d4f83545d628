//! HTTP API DTOs for the observability endpoints.

use serde::{Deserialize, Serialize};

/// Room summary returned by the rooms listing endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoomSummaryDto {
    pub id: String,
    pub members: Vec<String>,
}
