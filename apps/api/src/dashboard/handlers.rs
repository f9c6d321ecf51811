use axum::{extract::Query, Json};
use serde::Deserialize;

use crate::dashboard::metrics::{mock_dashboard_metrics, DashboardMetrics, DEFAULT_SERIES_DAYS};

#[derive(Deserialize)]
pub struct MetricsQuery {
    pub days: Option<u32>,
}

/// GET /api/v1/dashboard/metrics
pub async fn handle_dashboard_metrics(Query(params): Query<MetricsQuery>) -> Json<DashboardMetrics> {
    Json(mock_dashboard_metrics(
        params.days.unwrap_or(DEFAULT_SERIES_DAYS),
    ))
}
