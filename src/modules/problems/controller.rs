use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};
use tracing::{info, instrument, warn};
use validator::Validate;

use ojgate_core::AppError;
use ojgate_models::{CreateProblemDto, Problem, ProblemDetail, ProblemListItem};

use crate::middleware::auth::CurrentClaims;
use crate::modules::problems::service::ProblemService;
use crate::state::AppState;

#[instrument(skip(state))]
pub async fn get_problems(
    State(state): State<AppState>,
) -> Result<Json<Vec<ProblemListItem>>, AppError> {
    let problems = ProblemService::list_problems(state.store.as_ref()).await?;
    info!(count = problems.len(), "Retrieved problems list");
    Ok(Json(problems))
}

#[instrument(skip(state))]
pub async fn get_problem(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ProblemDetail>, AppError> {
    let detail = ProblemService::get_problem(state.store.as_ref(), &id).await?;
    info!(
        problem_id = %detail.problem.problem_id,
        samples = detail.sample_test_cases.len(),
        "Retrieved problem"
    );
    Ok(Json(detail))
}

#[instrument(skip(state, payload))]
pub async fn create_problem(
    State(state): State<AppState>,
    CurrentClaims(claims): CurrentClaims,
    payload: Result<Json<CreateProblemDto>, JsonRejection>,
) -> Result<(StatusCode, Json<Problem>), AppError> {
    let Json(dto) = payload.map_err(|rejection| {
        warn!(error = %rejection, "Invalid problem payload");
        AppError::bad_request("Invalid request payload. Please check your input.")
    })?;

    dto.validate().map_err(|_| {
        AppError::bad_request("Title, statement, and difficulty are required fields.")
    })?;

    let problem = ProblemService::create_problem(state.store.as_ref(), claims.username(), dto).await?;
    info!(problem_id = %problem.problem_id, author = %problem.author, "Created problem");

    Ok((StatusCode::CREATED, Json(problem)))
}

pub async fn only_get() -> AppError {
    AppError::method_not_allowed("Method not allowed. Only GET is accepted.")
}

pub async fn only_post() -> AppError {
    AppError::method_not_allowed("Method not allowed. Only POST is accepted.")
}
