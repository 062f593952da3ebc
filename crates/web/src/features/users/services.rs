use sqlx::PgPool;
use storage::{error::Result, models::User, repository::user::UserRepository};

/// List all participants for the judge portal
pub async fn list_users(pool: &PgPool) -> Result<Vec<User>> {
    let repo = UserRepository::new(pool);
    repo.list().await
}
