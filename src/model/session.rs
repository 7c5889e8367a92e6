use crate::{Error, Result};
use ort::{
    session::{Session, builder::GraphOptimizationLevel},
    value::Tensor,
};
use std::{fmt, path::Path, sync::Mutex};
use tracing::info;

/// ONNX Runtime session with the input/output names it is driven by.
pub struct OnnxSession {
    name: String,
    session: Mutex<Session>,
    input_name: String,
    output_name: String,
}

impl OnnxSession {
    pub fn load<P: AsRef<Path>>(path: P, name: &str, onnx_threads: usize) -> Result<Self> {
        let path = path.as_ref();

        info!(model = %name, path = %path.display(), threads = onnx_threads, "Loading ONNX model");

        let session = Session::builder()
            .map_err(|e| load_error(path, e))?
            .with_optimization_level(GraphOptimizationLevel::Level3)
            .map_err(|e| load_error(path, e))?
            .with_intra_threads(onnx_threads)
            .map_err(|e| load_error(path, e))?
            .commit_from_file(path)
            .map_err(|e| load_error(path, e))?;

        let input_name = session
            .inputs
            .first()
            .map(|i| i.name.clone())
            .ok_or_else(|| Error::artifact(format!("{}: model has no inputs", path.display())))?;

        let output_names: Vec<String> = session.outputs.iter().map(|o| o.name.clone()).collect();
        let output_name = select_output(&output_names).ok_or_else(|| {
            Error::artifact(format!("{}: model has no usable output", path.display()))
        })?;

        info!(
            model = %name,
            input = %input_name,
            output = %output_name,
            "Model loaded successfully"
        );

        Ok(Self {
            name: name.to_string(),
            session: Mutex::new(session),
            input_name,
            output_name,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Runs a single row of features and returns the flattened output tensor.
    pub fn run(&self, features: &[f64]) -> Result<Vec<f64>> {
        // Shape [1, num_features]
        let shape = vec![1_i64, features.len() as i64];
        let data: Vec<f32> = features.iter().map(|&v| v as f32).collect();
        let input_tensor =
            Tensor::from_array((shape, data)).map_err(|e| self.run_error("input tensor", e))?;

        let mut session = self
            .session
            .lock()
            .map_err(|e| Error::inference(format!("{}: lock error: {}", self.name, e)))?;
        let outputs = session
            .run(ort::inputs![&self.input_name => input_tensor])
            .map_err(|e| self.run_error("run", e))?;

        let output = outputs.get(self.output_name.as_str()).ok_or_else(|| {
            Error::inference(format!("{}: missing output '{}'", self.name, self.output_name))
        })?;
        let (_, values) = output
            .try_extract_tensor::<f32>()
            .map_err(|e| self.run_error("output tensor", e))?;
        let values: Vec<f64> = values.iter().map(|&v| v as f64).collect();

        Ok(values)
    }

    fn run_error(&self, step: &str, e: impl fmt::Display) -> Error {
        Error::inference(format!("{} {}: {}", self.name, step, e))
    }
}

fn load_error(path: &Path, e: impl fmt::Display) -> Error {
    Error::artifact(format!("{}: {}", path.display(), e))
}

/// Prefers a probability output, then the first output that is not a label.
fn select_output(names: &[String]) -> Option<String> {
    names
        .iter()
        .find(|n| n.contains("prob"))
        .or_else(|| names.iter().find(|n| !n.contains("label")))
        .cloned()
}
