use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use crate::dto::scoreboard::ScoreboardEntry;
use crate::error::Result;
use crate::services::scoreboard;

#[derive(FromRow)]
struct UserRow {
    user_id: Uuid,
    display_name: String,
}

#[derive(FromRow)]
struct ScoreRow {
    user_id: Uuid,
    points: i32,
}

pub struct ScoreboardRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> ScoreboardRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Load the full users and scores tables and rank them.
    ///
    /// Any query failure propagates as `Err`; an empty board is only ever
    /// the result of an empty users table, never of a swallowed error.
    pub async fn standings(&self) -> Result<Vec<ScoreboardEntry>> {
        let users: Vec<UserRow> = sqlx::query_as("SELECT user_id, display_name FROM users")
            .fetch_all(self.pool)
            .await?;

        let scores: Vec<ScoreRow> = sqlx::query_as("SELECT user_id, points FROM scores")
            .fetch_all(self.pool)
            .await?;

        Ok(scoreboard::rank(
            users.into_iter().map(|u| (u.user_id, u.display_name)),
            scores.into_iter().map(|s| (s.user_id, s.points)),
        ))
    }
}
