use axum::{Json, extract::State};

use crate::state::AppState;
use crate::utils::errors::AppError;

use super::model::DashboardStats;
use super::service;

#[utoipa::path(
    get,
    path = "/api/admin/dashboard",
    responses(
        (status = 200, description = "Aggregate store statistics", body = DashboardStats),
        (status = 401, description = "Authentication required"),
        (status = 403, description = "Admin access required")
    ),
    security(("bearer_auth" = [])),
    tag = "Admin"
)]
pub async fn get_dashboard(
    State(state): State<AppState>,
) -> Result<Json<DashboardStats>, AppError> {
    let stats = service::get_dashboard_stats(&state.db).await?;
    Ok(Json(stats))
}
