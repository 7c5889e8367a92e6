use super::{OnnxSession, Scaler};
use crate::{Error, Result};
use std::path::Path;
use tracing::debug;

/// Fitted standard scaler exported to ONNX (skl2onnx).
pub struct OnnxScaler {
    session: OnnxSession,
    num_features: usize,
}

impl OnnxScaler {
    /// Loads the scaler and checks with a dry run that it maps
    /// `num_features` inputs to as many outputs.
    pub fn load<P: AsRef<Path>>(path: P, num_features: usize, onnx_threads: usize) -> Result<Self> {
        let scaler = Self {
            session: OnnxSession::load(path, "scaler", onnx_threads)?,
            num_features,
        };
        scaler
            .transform(&vec![0.0; num_features])
            .map_err(|e| Error::artifact(format!("scaler dry run failed: {}", e)))?;
        Ok(scaler)
    }
}

impl Scaler for OnnxScaler {
    fn transform(&self, features: &[f64]) -> Result<Vec<f64>> {
        if features.len() != self.num_features {
            return Err(Error::inference(format!(
                "scaler expects {} features, got {}",
                self.num_features,
                features.len()
            )));
        }

        let scaled = self.session.run(features)?;
        if scaled.len() != self.num_features {
            return Err(Error::inference(format!(
                "{} produced {} values for {} features",
                self.session.name(),
                scaled.len(),
                self.num_features
            )));
        }

        debug!(scaled = ?scaled, "Features scaled");
        Ok(scaled)
    }
}
