use sqlx::PgPool;
use storage::{
    dto::scoreboard::ScoreboardEntry, error::Result,
    repository::scoreboard::ScoreboardRepository,
};

/// Recompute the full ranked scoreboard snapshot
pub async fn get_scoreboard(pool: &PgPool) -> Result<Vec<ScoreboardEntry>> {
    let repo = ScoreboardRepository::new(pool);
    repo.standings().await
}
