mod recommend;

use std::sync::Arc;

use axum::{
    http::Method,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use serde::Serialize;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use landplan_overpass::OverpassClient;

use crate::middleware::request_id;

#[derive(Clone)]
pub struct AppState {
    pub client: Arc<OverpassClient>,
    pub query_radius_m: u32,
}

/// Body used for every non-success outcome, including the normal
/// "contains buildings" result.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: &'static str,
}

#[derive(Debug, Serialize)]
struct HealthData {
    status: &'static str,
}

fn build_cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET])
        .allow_headers(Any)
}

pub fn build_app(state: AppState) -> Router {
    Router::new()
        .route("/recommend", get(recommend::get_recommendation))
        .route("/health", get(health))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(build_cors())
                .layer(axum::middleware::from_fn(request_id)),
        )
        .with_state(state)
}

async fn health() -> impl IntoResponse {
    Json(HealthData {
        status: "Backend operational",
    })
}
