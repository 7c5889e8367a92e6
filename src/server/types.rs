use crate::prediction::{PredictionOutcome, RiskLevel};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct ApiInfoResponse {
    pub api_name: String,
    pub version: String,
    pub description: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct PredictionResponse {
    pub status: String,
    pub prediction_result: PredictionResult,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct PredictionResult {
    pub probability: f64,
    pub is_diabetic: bool,
    pub risk_level: RiskLevel,
    pub recommendations: Vec<String>,
}

impl From<PredictionOutcome> for PredictionResult {
    fn from(outcome: PredictionOutcome) -> Self {
        Self {
            probability: round_probability(outcome.probability),
            is_diabetic: outcome.is_diabetic,
            risk_level: outcome.risk_level,
            recommendations: outcome.recommendations,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub status: String,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<String>>,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            status: "error".to_string(),
            message: message.into(),
            errors: None,
        }
    }

    pub fn with_errors(mut self, errors: Vec<String>) -> Self {
        self.errors = Some(errors);
        self
    }
}

/// Four decimal places, rounding the exact binary value (half to even on
/// exact ties).
pub fn round_probability(probability: f64) -> f64 {
    format!("{:.4}", probability)
        .parse()
        .unwrap_or(probability)
}
