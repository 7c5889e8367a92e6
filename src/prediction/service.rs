use super::{
    FeatureRecord, PredictionEvent, PredictionState, PredictionStateMachine, RiskLevel, Validator,
    assess, is_diabetic, parse_body,
};
use crate::{
    Error, Result,
    config::ValidationConfig,
    model::{Artifacts, Classifier, Scaler},
};
use tracing::{error, info, warn};

#[derive(Debug, Clone, PartialEq)]
pub struct PredictionOutcome {
    pub probability: f64,
    pub is_diabetic: bool,
    pub risk_level: RiskLevel,
    pub recommendations: Vec<String>,
}

/// Terminal result of one `/predict` request.
#[derive(Debug, Clone, PartialEq)]
pub enum PredictionReply {
    Success(PredictionOutcome),
    Invalid(Vec<String>),
    ServiceUnavailable,
    InternalError,
}

impl PredictionReply {
    pub fn state(&self) -> PredictionState {
        match self {
            Self::Success(_) => PredictionState::Success,
            Self::Invalid(_) => PredictionState::Invalid,
            Self::ServiceUnavailable => PredictionState::ServiceUnavailable,
            Self::InternalError => PredictionState::InternalError,
        }
    }
}

pub struct Predictor {
    artifacts: Artifacts,
    validator: Validator,
}

impl Predictor {
    pub fn new(artifacts: Artifacts, validation: &ValidationConfig) -> Self {
        Self {
            artifacts,
            validator: Validator::new(validation),
        }
    }

    pub fn predict(&self, body: &[u8]) -> PredictionReply {
        let mut fsm = PredictionStateMachine::new();
        match self.run(&mut fsm, body) {
            Ok(reply) => {
                debug_assert!(fsm.is_terminal());
                debug_assert_eq!(reply.state(), fsm.current_state());
                reply
            }
            Err(e) => {
                error!("Prediction aborted in state {:?}: {}", fsm.current_state(), e);
                PredictionReply::InternalError
            }
        }
    }

    fn run(&self, fsm: &mut PredictionStateMachine, body: &[u8]) -> Result<PredictionReply> {
        let (Some(classifier), Some(scaler)) =
            (self.artifacts.classifier(), self.artifacts.scaler())
        else {
            fsm.transition(PredictionEvent::ArtifactsMissing)?;
            warn!("Prediction requested but model or scaler is not loaded");
            return Ok(PredictionReply::ServiceUnavailable);
        };
        fsm.transition(PredictionEvent::ArtifactsReady)?;

        let record = match parse_body(body).and_then(|map| self.validator.validate(&map)) {
            Ok(record) => record,
            Err(errors) => {
                fsm.transition(PredictionEvent::InputRejected)?;
                info!("Rejected prediction input: {}", errors);
                return Ok(PredictionReply::Invalid(errors.into_inner()));
            }
        };
        fsm.transition(PredictionEvent::InputAccepted)?;

        match infer(classifier.as_ref(), scaler.as_ref(), &record) {
            Ok(outcome) => {
                fsm.transition(PredictionEvent::InferenceSucceeded)?;
                info!(
                    probability = outcome.probability,
                    risk_level = ?outcome.risk_level,
                    "Prediction completed"
                );
                Ok(PredictionReply::Success(outcome))
            }
            Err(e) => {
                fsm.transition(PredictionEvent::InferenceFailed)?;
                error!("Error in /predict: {}", e);
                Ok(PredictionReply::InternalError)
            }
        }
    }
}

fn infer(
    classifier: &dyn Classifier,
    scaler: &dyn Scaler,
    record: &FeatureRecord,
) -> Result<PredictionOutcome> {
    let scaled = scaler.transform(&record.to_vector())?;
    let probability = classifier.predict(&scaled)?;

    if !probability.is_finite() || !(0.0..=1.0).contains(&probability) {
        return Err(Error::inference(format!(
            "classifier returned {} which is not a probability",
            probability
        )));
    }

    let (risk_level, recommendations) = assess(probability, record);
    Ok(PredictionOutcome {
        probability,
        is_diabetic: is_diabetic(probability),
        risk_level,
        recommendations,
    })
}
