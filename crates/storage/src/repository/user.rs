use sqlx::PgPool;

use crate::error::Result;
use crate::models::User;

pub struct UserRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> UserRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List all participants, ordered for the judge portal dropdowns
    pub async fn list(&self) -> Result<Vec<User>> {
        let users = sqlx::query_as::<_, User>(
            r#"
            SELECT user_id, username, display_name, created_at
            FROM users
            ORDER BY display_name, username
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(users)
    }
}
