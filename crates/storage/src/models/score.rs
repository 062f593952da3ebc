use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// One immutable scoring event. A judge may score the same user any number
/// of times; each row is additive, never an upsert.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Score {
    pub score_id: Uuid,
    pub user_id: Uuid,
    pub judge_id: Uuid,
    pub points: i32,
    pub created_at: chrono::NaiveDateTime,
}
