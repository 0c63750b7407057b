//! Dashboard handlers
//!
//! Read-only views over the status cache. Handlers never touch the network.

use axum::{extract::{State, Path}, Json};
use chrono::Utc;

use crate::{AppState, AppResult, AppError};
use crate::demo::demo_response;
use crate::models::{DashboardResponse, WorkloadStatus};

/// Overall compliance verdict plus every cached workload
pub async fn status(State(state): State<AppState>) -> Json<DashboardResponse> {
    let now = Utc::now();
    let workloads = state.cache.snapshot();

    if workloads.is_empty() {
        return Json(demo_response(now));
    }

    Json(DashboardResponse::from_workloads(workloads, now))
}

/// Every cached workload
pub async fn workloads(State(state): State<AppState>) -> Json<Vec<WorkloadStatus>> {
    let workloads = state.cache.snapshot();

    if workloads.is_empty() {
        return Json(demo_response(Utc::now()).workloads);
    }

    Json(workloads)
}

/// Single workload by `namespace/name`
pub async fn detail(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> AppResult<Json<WorkloadStatus>> {
    lookup(&state, &name).map(Json)
}

/// `/api/workload/` with nothing after the slash
pub async fn detail_missing_name(State(state): State<AppState>) -> AppResult<Json<WorkloadStatus>> {
    lookup(&state, "").map(Json)
}

fn lookup(state: &AppState, name: &str) -> AppResult<WorkloadStatus> {
    if name.is_empty() {
        return Err(AppError::ValidationError("workload name required".to_string()));
    }

    state.cache
        .get(name)
        .ok_or_else(|| AppError::NotFound("workload not found".to_string()))
}
