use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// An actor authorized to assign points to users. Created through the admin
/// panel; never updated or deleted.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Judge {
    pub judge_id: Uuid,
    pub username: String,
    pub display_name: String,
    pub created_at: chrono::NaiveDateTime,
}
