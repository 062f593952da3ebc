use sqlx::PgPool;
use storage::{
    dto::judge::CreateJudgeRequest, error::StorageError, models::Judge,
    repository::judge::JudgeRepository,
};

use crate::error::{WebError, WebResult};

pub async fn list_judges(pool: &PgPool) -> WebResult<Vec<Judge>> {
    let repo = JudgeRepository::new(pool);
    Ok(repo.list().await?)
}

/// Register a new judge, translating the store's uniqueness violation into
/// a duplicate-specific conflict message.
pub async fn create_judge(pool: &PgPool, req: &CreateJudgeRequest) -> WebResult<Judge> {
    let repo = JudgeRepository::new(pool);

    match repo.create(req).await {
        Ok(judge) => Ok(judge),
        Err(StorageError::UniqueViolation(_)) => Err(WebError::Conflict(format!(
            "Judge username \"{}\" already exists",
            req.username
        ))),
        Err(e) => Err(e.into()),
    }
}
