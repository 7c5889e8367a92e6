use super::types::{
    ApiInfoResponse, ErrorResponse, HealthResponse, PredictionResponse, PredictionResult,
};
use crate::prediction::{PredictionReply, Predictor};
use axum::{body::Bytes, extract::State, http::StatusCode, response::Json};
use std::sync::Arc;
use tracing::{debug, info};

pub const API_NAME: &str = "DiabeTest API";
pub const API_DESCRIPTION: &str =
    "Diabetes prediction API backed by a deep learning model, with input validation and recommendations.";
pub const UNAVAILABLE_MESSAGE: &str = "Model or scaler failed to load. Check the server logs.";
pub const INVALID_INPUT_MESSAGE: &str = "Invalid input.";
pub const INTERNAL_ERROR_MESSAGE: &str = "An internal server error occurred.";

#[derive(Clone)]
pub struct AppState {
    pub predictor: Arc<Predictor>,
}

pub async fn index() -> Json<ApiInfoResponse> {
    Json(ApiInfoResponse {
        api_name: API_NAME.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        description: API_DESCRIPTION.to_string(),
    })
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        message: format!("{} is running", API_NAME),
    })
}

pub async fn predict(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<PredictionResponse>, (StatusCode, Json<ErrorResponse>)> {
    debug!("Received prediction request ({} bytes)", body.len());

    match state.predictor.predict(&body) {
        PredictionReply::Success(outcome) => {
            info!("Prediction request served with risk level {:?}", outcome.risk_level);
            Ok(Json(PredictionResponse {
                status: "success".to_string(),
                prediction_result: PredictionResult::from(outcome),
            }))
        }
        PredictionReply::Invalid(errors) => Err((
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::new(INVALID_INPUT_MESSAGE).with_errors(errors)),
        )),
        PredictionReply::ServiceUnavailable => Err((
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse::new(UNAVAILABLE_MESSAGE)),
        )),
        PredictionReply::InternalError => Err((
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse::new(INTERNAL_ERROR_MESSAGE)),
        )),
    }
}
