use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::models::Judge;

/// Request payload for registering a new judge
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateJudgeRequest {
    #[validate(length(
        min = 1,
        max = 64,
        message = "Username must be between 1 and 64 characters"
    ))]
    pub username: String,
    #[validate(length(
        min = 1,
        max = 128,
        message = "Display name must be between 1 and 128 characters"
    ))]
    pub display_name: String,
}

impl CreateJudgeRequest {
    /// Strip surrounding whitespace before validation, so an all-blank
    /// field fails the length check instead of slipping into the store.
    pub fn trimmed(self) -> Self {
        Self {
            username: self.username.trim().to_string(),
            display_name: self.display_name.trim().to_string(),
        }
    }
}

/// Response containing one registered judge
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct JudgeResponse {
    pub judge_id: Uuid,
    pub username: String,
    pub display_name: String,
    pub created_at: chrono::NaiveDateTime,
}

impl From<Judge> for JudgeResponse {
    fn from(judge: Judge) -> Self {
        Self {
            judge_id: judge.judge_id,
            username: judge.username,
            display_name: judge.display_name,
            created_at: judge.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(username: &str, display_name: &str) -> CreateJudgeRequest {
        CreateJudgeRequest {
            username: username.to_string(),
            display_name: display_name.to_string(),
        }
    }

    #[test]
    fn test_valid_request_passes() {
        assert!(request("jsmith", "Judge Smith").validate().is_ok());
    }

    #[test]
    fn test_empty_username_rejected() {
        assert!(request("", "Judge Smith").validate().is_err());
    }

    #[test]
    fn test_blank_fields_rejected_after_trim() {
        let req = request("   ", "\t").trimmed();
        let err = req.validate().unwrap_err();
        assert!(err.field_errors().contains_key("username"));
        assert!(err.field_errors().contains_key("display_name"));
    }

    #[test]
    fn test_trimming_preserves_inner_content() {
        let req = request("  jsmith ", " Judge Smith ").trimmed();
        assert_eq!(req.username, "jsmith");
        assert_eq!(req.display_name, "Judge Smith");
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_overlong_username_rejected() {
        assert!(request(&"x".repeat(65), "Judge Smith").validate().is_err());
    }
}
