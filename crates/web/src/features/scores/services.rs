use sqlx::PgPool;
use storage::{
    dto::score::SubmitScoreRequest, error::StorageError, models::Score,
    repository::score::ScoreRepository,
};

use crate::error::{WebError, WebResult};

/// Persist one scoring event. Referential failures get their own message;
/// points are already range-checked by the handler.
pub async fn submit_score(pool: &PgPool, req: &SubmitScoreRequest) -> WebResult<Score> {
    let repo = ScoreRepository::new(pool);

    match repo.insert(req).await {
        Ok(score) => Ok(score),
        Err(StorageError::ForeignKeyViolation(_)) => Err(WebError::UnknownReference(
            "Unknown user or judge id".to_string(),
        )),
        Err(e) => Err(e.into()),
    }
}
