use super::{Classifier, OnnxClassifier, OnnxScaler, Scaler};
use crate::{Error, Result, config::ArtifactsConfig, prediction::Feature};
use std::sync::Arc;
use tracing::{error, info, warn};

/// Classifier and scaler shared by every request. Both are present or both
/// are absent.
#[derive(Clone, Default)]
pub struct Artifacts {
    classifier: Option<Arc<dyn Classifier>>,
    scaler: Option<Arc<dyn Scaler>>,
}

impl Artifacts {
    pub fn new(classifier: Arc<dyn Classifier>, scaler: Arc<dyn Scaler>) -> Self {
        Self {
            classifier: Some(classifier),
            scaler: Some(scaler),
        }
    }

    pub fn unavailable() -> Self {
        Self::default()
    }

    pub fn is_available(&self) -> bool {
        self.classifier.is_some() && self.scaler.is_some()
    }

    pub fn classifier(&self) -> Option<&Arc<dyn Classifier>> {
        self.classifier.as_ref()
    }

    pub fn scaler(&self) -> Option<&Arc<dyn Scaler>> {
        self.scaler.as_ref()
    }
}

impl std::fmt::Debug for Artifacts {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Artifacts")
            .field("available", &self.is_available())
            .finish()
    }
}

/// Loads both artifacts. Any failure leaves the service in degraded mode
/// instead of aborting startup.
pub async fn load(config: &ArtifactsConfig) -> Artifacts {
    match try_load(config).await {
        Ok(artifacts) => {
            info!(
                model = %config.model_path,
                scaler = %config.scaler_path,
                "Model and scaler loaded successfully"
            );
            artifacts
        }
        Err(e) => {
            error!("Failed to load model or scaler: {}", e);
            warn!(
                model = %config.model_path,
                scaler = %config.scaler_path,
                "Make sure both artifact files exist; /predict will be unavailable"
            );
            Artifacts::unavailable()
        }
    }
}

async fn try_load(config: &ArtifactsConfig) -> Result<Artifacts> {
    let config = config.clone();

    // Session creation parses and optimizes the graph
    tokio::task::spawn_blocking(move || -> Result<Artifacts> {
        let classifier =
            OnnxClassifier::load(&config.model_path, Feature::COUNT, config.onnx_threads)?;
        let scaler = OnnxScaler::load(&config.scaler_path, Feature::COUNT, config.onnx_threads)?;
        Ok(Artifacts::new(Arc::new(classifier), Arc::new(scaler)))
    })
    .await
    .map_err(|e| Error::artifact(format!("artifact loading task failed: {}", e)))?
}
