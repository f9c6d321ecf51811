use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::analysis::ats::{analyze_resume, AtsReport};
use crate::errors::AppError;
use crate::models::resume::{ResumeRecord, ResumeRow};
use crate::resumes::store;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct UserIdQuery {
    pub user_id: Uuid,
}

#[derive(Deserialize)]
pub struct CreateResumeRequest {
    pub user_id: Uuid,
    pub title: String,
    #[serde(default)]
    pub record: ResumeRecord,
}

#[derive(Deserialize)]
pub struct UpdateResumeRequest {
    pub user_id: Uuid,
    pub title: String,
    #[serde(default)]
    pub record: ResumeRecord,
}

/// POST /api/v1/resumes
pub async fn handle_create_resume(
    State(state): State<AppState>,
    Json(req): Json<CreateResumeRequest>,
) -> Result<(StatusCode, Json<ResumeRow>), AppError> {
    if req.title.trim().is_empty() {
        return Err(AppError::Validation("Title must not be empty".to_string()));
    }
    let row = store::create_resume(&state.db, req.user_id, &req.title, &req.record).await?;
    Ok((StatusCode::CREATED, Json(row)))
}

/// GET /api/v1/resumes
pub async fn handle_list_resumes(
    State(state): State<AppState>,
    Query(params): Query<UserIdQuery>,
) -> Result<Json<Vec<ResumeRow>>, AppError> {
    let rows = store::list_resumes(&state.db, params.user_id).await?;
    Ok(Json(rows))
}

/// GET /api/v1/resumes/:id
pub async fn handle_get_resume(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(params): Query<UserIdQuery>,
) -> Result<Json<ResumeRow>, AppError> {
    let row = store::get_resume(&state.db, id, params.user_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Resume {id} not found")))?;
    Ok(Json(row))
}

/// PUT /api/v1/resumes/:id
pub async fn handle_update_resume(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateResumeRequest>,
) -> Result<Json<ResumeRow>, AppError> {
    if req.title.trim().is_empty() {
        return Err(AppError::Validation("Title must not be empty".to_string()));
    }
    let row = store::update_resume(&state.db, id, req.user_id, &req.title, &req.record)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Resume {id} not found")))?;
    Ok(Json(row))
}

/// DELETE /api/v1/resumes/:id
pub async fn handle_delete_resume(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(params): Query<UserIdQuery>,
) -> Result<StatusCode, AppError> {
    let deleted = store::delete_resume(&state.db, id, params.user_id).await?;
    if !deleted {
        return Err(AppError::NotFound(format!("Resume {id} not found")));
    }
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/v1/resumes/:id/analyze
///
/// Loads the stored snapshot, scores it, persists the score back onto the
/// row, and returns the full report. Re-running replaces the previous result
/// wholesale.
pub async fn handle_analyze_resume(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(params): Query<UserIdQuery>,
) -> Result<Json<AtsReport>, AppError> {
    let row = store::get_resume(&state.db, id, params.user_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Resume {id} not found")))?;

    let record: ResumeRecord = serde_json::from_value(row.data).map_err(|e| {
        AppError::UnprocessableEntity(format!("Stored resume snapshot is malformed: {e}"))
    })?;

    let report = analyze_resume(&record);
    store::save_ats_score(&state.db, id, params.user_id, report.score as i32).await?;
    Ok(Json(report))
}

/// POST /api/v1/analysis/ats
///
/// One-shot scoring of a raw snapshot, no persistence. Lets the form layer
/// re-analyze unsaved edits.
pub async fn handle_analyze_snapshot(Json(record): Json<ResumeRecord>) -> Json<AtsReport> {
    Json(analyze_resume(&record))
}
