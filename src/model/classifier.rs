use super::{Classifier, OnnxSession};
use crate::{Error, Result};
use std::path::Path;
use tracing::debug;

/// Binary classifier exported to ONNX (tf2onnx for Keras, skl2onnx for
/// scikit-learn).
pub struct OnnxClassifier {
    session: OnnxSession,
}

impl OnnxClassifier {
    /// Loads the classifier and checks with a dry run that it accepts
    /// `num_features` inputs and yields a probability.
    pub fn load<P: AsRef<Path>>(path: P, num_features: usize, onnx_threads: usize) -> Result<Self> {
        let classifier = Self {
            session: OnnxSession::load(path, "classifier", onnx_threads)?,
        };
        classifier
            .predict(&vec![0.0; num_features])
            .map_err(|e| Error::artifact(format!("classifier dry run failed: {}", e)))?;
        Ok(classifier)
    }
}

impl Classifier for OnnxClassifier {
    fn predict(&self, features: &[f64]) -> Result<f64> {
        let outputs = self.session.run(features)?;
        let probability = positive_class_probability(&outputs).ok_or_else(|| {
            Error::inference(format!("{} produced no output", self.session.name()))
        })?;

        debug!(model = %self.session.name(), probability = probability, "Classifier output");
        Ok(probability)
    }
}

/// A single sigmoid unit gives the probability directly; a two-column
/// `[p0, p1]` row gives it at index 1.
fn positive_class_probability(outputs: &[f64]) -> Option<f64> {
    match outputs {
        [] => None,
        [p] => Some(*p),
        [_, p1, ..] => Some(*p1),
    }
}
