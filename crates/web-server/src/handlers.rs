use crate::{error::AppError, health::{check_health, HealthReport}, AppState};
use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Query, State,
    },
    http::StatusCode,
    Json,
};
use core_types::{MarksDraft, MarksRecord};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

#[derive(Debug, Deserialize)]
pub struct MarksQuery {
    #[serde(rename = "rollNumber")]
    pub roll_number: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MarksListResponse {
    pub marks_list: Vec<MarksRecord>,
    pub success: bool,
}

#[derive(Debug, Serialize)]
pub struct MarksCreatedResponse {
    pub id: Uuid,
    pub success: bool,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub success: bool,
    pub data: HealthReport,
}

/// # GET /api/marks
/// Lists all marks, or only those for `?rollNumber=`.
pub async fn get_marks(
    State(state): State<Arc<AppState>>,
    query: Result<Query<MarksQuery>, QueryRejection>,
) -> Result<Json<MarksListResponse>, AppError> {
    let Query(query) = query?;
    let marks_list = state
        .marks_service
        .get_marks_data(query.roll_number.as_deref())
        .await?;
    Ok(Json(MarksListResponse {
        marks_list,
        success: true,
    }))
}

/// # POST /api/marks
/// Validates the six business fields, then stores the record.
pub async fn add_marks(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<MarksDraft>, JsonRejection>,
) -> Result<(StatusCode, Json<MarksCreatedResponse>), AppError> {
    let Json(draft) = payload?;
    let new_marks = draft.validate()?;
    let id = state.marks_service.add_marks(new_marks).await?;
    Ok((
        StatusCode::CREATED,
        Json(MarksCreatedResponse { id, success: true }),
    ))
}

/// # GET /api/health
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        success: true,
        data: check_health(),
    })
}
