use sqlx::PgPool;

use crate::dto::score::SubmitScoreRequest;
use crate::error::{Result, StorageError};
use crate::models::Score;

pub struct ScoreRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> ScoreRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Insert one scoring event. An unknown user or judge id surfaces as
    /// `StorageError::ForeignKeyViolation`; existing rows are never touched.
    pub async fn insert(&self, req: &SubmitScoreRequest) -> Result<Score> {
        let score = sqlx::query_as::<_, Score>(
            r#"
            INSERT INTO scores (user_id, judge_id, points)
            VALUES ($1, $2, $3)
            RETURNING score_id, user_id, judge_id, points, created_at
            "#,
        )
        .bind(req.user_id)
        .bind(req.judge_id)
        .bind(req.points)
        .fetch_one(self.pool)
        .await
        .map_err(StorageError::from_write_error)?;

        Ok(score)
    }
}
