use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::judge::{CreateJudgeRequest, JudgeResponse},
};
use validator::Validate;

use crate::error::WebError;

use super::services;

#[utoipa::path(
    get,
    path = "/api/judges",
    responses(
        (status = 200, description = "List all judges successfully", body = Vec<JudgeResponse>)
    ),
    tag = "judges"
)]
pub async fn list_judges(State(db): State<Database>) -> Result<Response, WebError> {
    let judges = services::list_judges(db.pool()).await?;

    let response: Vec<JudgeResponse> = judges.into_iter().map(JudgeResponse::from).collect();

    Ok(Json(response).into_response())
}

#[utoipa::path(
    post,
    path = "/api/judges",
    request_body = CreateJudgeRequest,
    responses(
        (status = 201, description = "Judge registered successfully", body = JudgeResponse),
        (status = 400, description = "Validation error"),
        (status = 409, description = "Judge username already exists")
    ),
    tag = "judges"
)]
pub async fn create_judge(
    State(db): State<Database>,
    Json(req): Json<CreateJudgeRequest>,
) -> Result<Response, WebError> {
    let req = req.trimmed();
    req.validate()?;

    let judge = services::create_judge(db.pool(), &req).await?;

    Ok((StatusCode::CREATED, Json(JudgeResponse::from(judge))).into_response())
}
