use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use std::fmt;
use storage::error::StorageError;
use validator::ValidationErrors;

/// Web layer errors
#[derive(Debug)]
pub enum WebError {
    Storage(StorageError),
    Validation(ValidationErrors),
    BadRequest(String),
    Conflict(String),
    UnknownReference(String),
}

impl fmt::Display for WebError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Storage(e) => write!(f, "Storage error: {}", e),
            Self::Validation(e) => write!(f, "Validation error: {}", e),
            Self::BadRequest(msg) => write!(f, "Bad request: {}", msg),
            Self::Conflict(msg) => write!(f, "Conflict: {}", msg),
            Self::UnknownReference(msg) => write!(f, "Unknown reference: {}", msg),
        }
    }
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        let status_code = match &self {
            Self::Storage(StorageError::UniqueViolation(_)) => StatusCode::CONFLICT,
            Self::Storage(StorageError::ForeignKeyViolation(_)) => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            Self::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Conflict(_) => StatusCode::CONFLICT,
            Self::UnknownReference(_) => StatusCode::UNPROCESSABLE_ENTITY,
        };

        let body = match &self {
            Self::Storage(StorageError::UniqueViolation(_)) => {
                json!({
                    "error": "Already exists"
                })
            }
            Self::Storage(StorageError::ForeignKeyViolation(_)) => {
                json!({
                    "error": "Referenced resource does not exist"
                })
            }
            Self::Storage(e) => {
                tracing::error!("Storage error: {:?}", e);
                json!({
                    "error": "An internal error occurred"
                })
            }
            Self::Validation(errors) => {
                let field_errors: Vec<String> = errors
                    .field_errors()
                    .iter()
                    .flat_map(|(field, errors)| {
                        errors.iter().map(move |e| {
                            format!(
                                "{}: {}",
                                field,
                                e.message
                                    .as_ref()
                                    .map(|m| m.to_string())
                                    .unwrap_or_else(|| e.code.to_string())
                            )
                        })
                    })
                    .collect();

                json!({
                    "error": "Validation failed",
                    "details": field_errors
                })
            }
            Self::BadRequest(msg) => {
                json!({
                    "error": msg
                })
            }
            Self::Conflict(msg) => {
                json!({
                    "error": msg
                })
            }
            Self::UnknownReference(msg) => {
                json!({
                    "error": msg
                })
            }
        };

        (status_code, Json(body)).into_response()
    }
}

impl From<StorageError> for WebError {
    fn from(error: StorageError) -> Self {
        Self::Storage(error)
    }
}

impl From<ValidationErrors> for WebError {
    fn from(error: ValidationErrors) -> Self {
        Self::Validation(error)
    }
}

pub type WebResult<T> = Result<T, WebError>;

#[cfg(test)]
mod tests {
    use super::*;
    use storage::dto::score::SubmitScoreRequest;
    use uuid::Uuid;
    use validator::Validate;

    #[test]
    fn test_validation_maps_to_400() {
        let errors = SubmitScoreRequest {
            user_id: Uuid::new_v4(),
            judge_id: Uuid::new_v4(),
            points: 0,
        }
        .validate()
        .unwrap_err();

        let response = WebError::Validation(errors).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_conflict_maps_to_409() {
        let response = WebError::Conflict("Judge username \"x\" already exists".into())
            .into_response();
        assert_eq!(response.status(), StatusCode::CONFLICT);
    }

    #[test]
    fn test_unknown_reference_maps_to_422() {
        let response = WebError::UnknownReference("Unknown user or judge id".into())
            .into_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn test_storage_error_kinds_keep_their_statuses() {
        let unique = WebError::Storage(StorageError::UniqueViolation("judges_username_key".into()));
        assert_eq!(unique.into_response().status(), StatusCode::CONFLICT);

        let fk = WebError::Storage(StorageError::ForeignKeyViolation(
            "scores_user_id_fkey".into(),
        ));
        assert_eq!(fk.into_response().status(), StatusCode::UNPROCESSABLE_ENTITY);

        let infra = WebError::Storage(StorageError::Database(sqlx::Error::PoolTimedOut));
        assert_eq!(
            infra.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
