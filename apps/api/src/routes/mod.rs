pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::dashboard;
use crate::resumes::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Resume store
        .route(
            "/api/v1/resumes",
            post(handlers::handle_create_resume).get(handlers::handle_list_resumes),
        )
        .route(
            "/api/v1/resumes/:id",
            get(handlers::handle_get_resume)
                .put(handlers::handle_update_resume)
                .delete(handlers::handle_delete_resume),
        )
        // ATS analysis
        .route(
            "/api/v1/resumes/:id/analyze",
            post(handlers::handle_analyze_resume),
        )
        .route(
            "/api/v1/analysis/ats",
            post(handlers::handle_analyze_snapshot),
        )
        // Social dashboard (mock data)
        .route(
            "/api/v1/dashboard/metrics",
            get(dashboard::handlers::handle_dashboard_metrics),
        )
        .with_state(state)
}
