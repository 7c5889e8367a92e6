use crate::{Error, Result};
use tracing::{debug, warn};

// Prediction states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PredictionState {
    Received,
    Validating,
    Inferring,
    Success,
    Invalid,
    ServiceUnavailable,
    InternalError,
}

// Prediction events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PredictionEvent {
    ArtifactsMissing,
    ArtifactsReady,
    InputRejected,
    InputAccepted,
    InferenceSucceeded,
    InferenceFailed,
}

pub struct PredictionStateMachine {
    state: PredictionState,
}

impl PredictionStateMachine {
    pub fn new() -> Self {
        Self {
            state: PredictionState::Received,
        }
    }

    pub fn current_state(&self) -> PredictionState {
        self.state
    }

    pub fn transition(&mut self, event: PredictionEvent) -> Result<PredictionState> {
        use PredictionEvent as E;
        use PredictionState as S;

        let new_state = match (self.state, event) {
            (S::Received, E::ArtifactsMissing) => S::ServiceUnavailable,
            (S::Received, E::ArtifactsReady) => S::Validating,
            (S::Validating, E::InputRejected) => S::Invalid,
            (S::Validating, E::InputAccepted) => S::Inferring,
            (S::Inferring, E::InferenceSucceeded) => S::Success,
            (S::Inferring, E::InferenceFailed) => S::InternalError,
            _ => {
                warn!(
                    "Invalid prediction transition from {:?} with event {:?}",
                    self.state, event
                );
                return Err(Error::InvalidTransition {
                    current: format!("{:?}", self.state),
                    requested: format!("{:?}", event),
                });
            }
        };

        debug!(
            "Prediction state transition: {:?} -> {:?} (event: {:?})",
            self.state, new_state, event
        );
        self.state = new_state;
        Ok(new_state)
    }

    pub fn is_terminal(&self) -> bool {
        matches!(
            self.state,
            PredictionState::Success
                | PredictionState::Invalid
                | PredictionState::ServiceUnavailable
                | PredictionState::InternalError
        )
    }
}

impl Default for PredictionStateMachine {
    fn default() -> Self {
        Self::new()
    }
}
