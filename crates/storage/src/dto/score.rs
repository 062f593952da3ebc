use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::models::Score;

/// Request payload for submitting one scoring event
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct SubmitScoreRequest {
    pub user_id: Uuid,
    pub judge_id: Uuid,
    #[validate(range(min = 1, max = 100, message = "Points must be between 1 and 100"))]
    pub points: i32,
}

/// Response containing one stored scoring event
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ScoreResponse {
    pub score_id: Uuid,
    pub user_id: Uuid,
    pub judge_id: Uuid,
    pub points: i32,
    pub created_at: chrono::NaiveDateTime,
}

impl From<Score> for ScoreResponse {
    fn from(score: Score) -> Self {
        Self {
            score_id: score.score_id,
            user_id: score.user_id,
            judge_id: score.judge_id,
            points: score.points,
            created_at: score.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(points: i32) -> SubmitScoreRequest {
        SubmitScoreRequest {
            user_id: Uuid::new_v4(),
            judge_id: Uuid::new_v4(),
            points,
        }
    }

    #[test]
    fn test_boundary_points_accepted() {
        assert!(request(1).validate().is_ok());
        assert!(request(100).validate().is_ok());
    }

    #[test]
    fn test_out_of_range_points_rejected() {
        assert!(request(0).validate().is_err());
        assert!(request(101).validate().is_err());
        assert!(request(-5).validate().is_err());
    }

    #[test]
    fn test_rejection_names_the_points_field() {
        let err = request(0).validate().unwrap_err();
        assert!(err.field_errors().contains_key("points"));
    }
}
