use sqlx::PgPool;

use crate::dto::judge::CreateJudgeRequest;
use crate::error::{Result, StorageError};
use crate::models::Judge;

pub struct JudgeRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> JudgeRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List all judges, ordered for the admin panel
    pub async fn list(&self) -> Result<Vec<Judge>> {
        let judges = sqlx::query_as::<_, Judge>(
            r#"
            SELECT judge_id, username, display_name, created_at
            FROM judges
            ORDER BY display_name, username
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(judges)
    }

    /// Insert a new judge. A duplicate username surfaces as
    /// `StorageError::UniqueViolation`.
    pub async fn create(&self, req: &CreateJudgeRequest) -> Result<Judge> {
        let judge = sqlx::query_as::<_, Judge>(
            r#"
            INSERT INTO judges (username, display_name)
            VALUES ($1, $2)
            RETURNING judge_id, username, display_name, created_at
            "#,
        )
        .bind(&req.username)
        .bind(&req.display_name)
        .fetch_one(self.pool)
        .await
        .map_err(StorageError::from_write_error)?;

        Ok(judge)
    }
}
