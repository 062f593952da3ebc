use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// One ranked row of the public scoreboard
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ScoreboardEntry {
    /// The scored user's id
    pub id: Uuid,
    pub display_name: String,
    pub total_points: i64,
}

/// Envelope returned by the scoreboard endpoint. The polling client checks
/// `success` to tell a failed refresh apart from a genuinely empty board.
#[derive(Debug, Serialize, ToSchema)]
pub struct ScoreboardResponse {
    pub success: bool,
    pub data: Vec<ScoreboardEntry>,
}

impl ScoreboardResponse {
    pub fn new(data: Vec<ScoreboardEntry>) -> Self {
        Self {
            success: true,
            data,
        }
    }
}
