use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode},
};
use diabetest_api::{
    config::{ArtifactsConfig, Config, ValidationConfig},
    model::{Artifacts, Classifier, Scaler},
    prediction::Predictor,
    server::{handlers::AppState, router},
};
use serde_json::{Value, json};
use std::sync::Arc;
use tempfile::TempDir;
use tower::ServiceExt; // for `oneshot`

/// Record from the reference scenario: valid, no supplementary advice
pub fn sample_record() -> Value {
    json!({
        "Pregnancies": 2,
        "Glucose": 85,
        "BloodPressure": 66,
        "SkinThickness": 29,
        "Insulin": 0,
        "BMI": 26.6,
        "DiabetesPedigreeFunction": 0.351,
        "Age": 31
    })
}

pub fn create_test_app(
    classifier: impl Classifier + 'static,
    scaler: impl Scaler + 'static,
) -> Router {
    create_app_with_artifacts(
        Artifacts::new(Arc::new(classifier), Arc::new(scaler)),
        &ValidationConfig::default(),
    )
}

pub fn create_app_with_artifacts(artifacts: Artifacts, validation: &ValidationConfig) -> Router {
    router(AppState {
        predictor: Arc::new(Predictor::new(artifacts, validation)),
    })
}

/// Write both encoded ONNX artifacts into a fresh temp directory
pub async fn create_artifact_dir(model: &[u8], scaler: &[u8]) -> (TempDir, Config) {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp directory");
    let model_path = temp_dir.path().join("model_diabetes.onnx");
    let scaler_path = temp_dir.path().join("scaler_diabetes.onnx");
    tokio::fs::write(&model_path, model).await.unwrap();
    tokio::fs::write(&scaler_path, scaler).await.unwrap();

    let config = Config {
        artifacts: ArtifactsConfig {
            model_path: model_path.to_string_lossy().to_string(),
            scaler_path: scaler_path.to_string_lossy().to_string(),
            onnx_threads: 1,
        },
        ..Config::default()
    };
    (temp_dir, config)
}

pub async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

pub async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn post_predict(app: Router, body: impl Into<Body>) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri("/predict")
        .header("content-type", "application/json")
        .body(body.into())
        .unwrap();
    send(app, request).await
}

pub async fn post_record(app: Router, record: &Value) -> (StatusCode, Value) {
    post_predict(app, record.to_string()).await
}
