use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Extension, Json,
};
use serde::{Deserialize, Serialize};

use landplan_core::Coordinate;
use landplan_overpass::extract;

use crate::api::{AppState, ErrorBody};
use crate::middleware::RequestId;

#[derive(Debug, Deserialize)]
pub struct RecommendQuery {
    pub lat: f64,
    pub lng: f64,
}

#[derive(Debug, Serialize)]
pub struct RecommendResponse {
    pub status: &'static str,
    pub location: LocationBody,
    pub analysis: AnalysisBody,
    pub recommendation: RecommendationBody,
}

#[derive(Debug, Serialize)]
pub struct LocationBody {
    pub lat: f64,
    pub lng: f64,
}

#[derive(Debug, Serialize)]
pub struct AnalysisBody {
    pub area_m2: f64,
    pub amenities_count: u32,
    pub road_distance_m: f64,
}

#[derive(Debug, Serialize)]
pub struct RecommendationBody {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub reason: &'static str,
}

/// `GET /recommend?lat=&lng=` — the whole recommendation pipeline for one
/// coordinate: validate, extract features, short-circuit on existing
/// buildings, otherwise run the rule engine.
pub async fn get_recommendation(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Query(params): Query<RecommendQuery>,
) -> Response {
    let origin = Coordinate::new(params.lat, params.lng);
    if !origin.is_valid() {
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorBody {
                error: "lat must be in [-90, 90] and lng in [-180, 180]",
            }),
        )
            .into_response();
    }

    let features = match extract(&state.client, origin, state.query_radius_m).await {
        Ok(features) => features,
        Err(e) => {
            tracing::error!(request_id = %req_id.0, error = %e, "overpass extraction failed");
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorBody {
                    error: "Map data service error",
                }),
            )
                .into_response();
        }
    };

    // Occupied land is a normal outcome, not a failure.
    if !features.is_empty {
        return Json(ErrorBody {
            error: "Selected area contains existing buildings",
        })
        .into_response();
    }

    let recommendation = landplan_engine::analyze(&features);
    tracing::info!(
        request_id = %req_id.0,
        lat = origin.lat,
        lng = origin.lng,
        recommendation = recommendation.recommendation,
        "recommendation produced"
    );

    Json(RecommendResponse {
        status: "success",
        location: LocationBody {
            lat: origin.lat,
            lng: origin.lng,
        },
        analysis: AnalysisBody {
            area_m2: features.area_m2,
            amenities_count: features.amenities,
            road_distance_m: features.road_dist_m,
        },
        recommendation: RecommendationBody {
            kind: recommendation.recommendation,
            reason: recommendation.reason,
        },
    })
    .into_response()
}
