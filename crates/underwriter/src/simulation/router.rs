use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{Json, Router};
use chrono::{Datelike, Local};
use serde::Serialize;

use super::intake::SimulationRequest;
use super::calculate_risk;

/// Error body returned for every rejected request: one entry per violated
/// constraint, or a single generic message for unparseable payloads.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub details: Vec<String>,
}

impl ErrorResponse {
    pub(crate) fn payload_incorrect() -> Self {
        Self {
            details: vec!["Payload incorrect, please fix it".to_string()],
        }
    }
}

/// Router exposing the risk simulation endpoint.
pub fn simulation_router() -> Router {
    Router::new().route("/risk/simulate", post(simulate_handler))
}

pub(crate) async fn simulate_handler(
    payload: Result<Json<SimulationRequest>, JsonRejection>,
) -> Response {
    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => {
            tracing::debug!(%rejection, "rejected unparseable simulation payload");
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::payload_incorrect()),
            )
                .into_response();
        }
    };

    match request.into_profile() {
        Ok(profile) => {
            let assessment = calculate_risk(&profile, Local::now().year());
            (StatusCode::OK, Json(assessment)).into_response()
        }
        Err(error) => (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                details: error.violations,
            }),
        )
            .into_response(),
    }
}
