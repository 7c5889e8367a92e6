mod features;
mod fsm;
mod risk;
mod service;
mod validator;

pub use features::{Feature, FeatureRecord};
pub use fsm::{PredictionEvent, PredictionState, PredictionStateMachine};
pub use risk::{
    DIABETIC_THRESHOLD, HIGH_RISK_THRESHOLD, MEDIUM_RISK_THRESHOLD, RiskLevel, assess,
    is_diabetic,
};
pub use service::{PredictionOutcome, PredictionReply, Predictor};
pub use validator::{ValidationErrors, Validator, parse_body};
