mod classifier;
mod loader;
mod scaler;
mod session;

pub use classifier::OnnxClassifier;
pub use loader::{Artifacts, load};
pub use scaler::OnnxScaler;
pub use session::OnnxSession;

use crate::Result;

/// Feature preprocessing fitted at training time.
#[cfg_attr(test, mockall::automock)]
pub trait Scaler: Send + Sync {
    fn transform(&self, features: &[f64]) -> Result<Vec<f64>>;
}

/// Binary classifier returning the probability of the positive class.
#[cfg_attr(test, mockall::automock)]
pub trait Classifier: Send + Sync {
    fn predict(&self, features: &[f64]) -> Result<f64>;
}
