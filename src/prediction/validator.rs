use super::{Feature, FeatureRecord};
use crate::config::ValidationConfig;
use serde_json::{Map, Value};
use std::fmt;
use tracing::debug;

/// Ordered, human-readable problems found in a submitted record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationErrors(Vec<String>);

impl ValidationErrors {
    pub fn errors(&self) -> &[String] {
        &self.0
    }

    pub fn into_inner(self) -> Vec<String> {
        self.0
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.join("; "))
    }
}

impl std::error::Error for ValidationErrors {}

/// Parses a request body into a JSON object.
pub fn parse_body(body: &[u8]) -> Result<Map<String, Value>, ValidationErrors> {
    match serde_json::from_slice::<Value>(body) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(_) | Err(_) => Err(ValidationErrors(vec![
            "request body must be a JSON object".to_string(),
        ])),
    }
}

#[derive(Debug, Clone, Default)]
pub struct Validator {
    reject_unknown_fields: bool,
}

impl Validator {
    pub fn new(config: &ValidationConfig) -> Self {
        Self {
            reject_unknown_fields: config.reject_unknown_fields,
        }
    }

    pub fn validate(&self, record: &Map<String, Value>) -> Result<FeatureRecord, ValidationErrors> {
        let missing: Vec<String> = Feature::ALL
            .iter()
            .filter(|feature| !record.contains_key(feature.name()))
            .map(|feature| format!("required field '{}' not found", feature))
            .collect();
        if !missing.is_empty() {
            return Err(ValidationErrors(missing));
        }

        let mut errors = Vec::new();
        // Every slot is written below: all features are present and keys are unique.
        let mut values = [0.0; Feature::COUNT];

        for (name, value) in record {
            let Some(feature) = Feature::from_name(name) else {
                if self.reject_unknown_fields {
                    errors.push(format!("unexpected field '{}'", name));
                } else {
                    debug!("Ignoring unknown field '{}'", name);
                }
                continue;
            };

            let Some(value) = coerce(value) else {
                errors.push(format!("value for '{}' must be a number", feature));
                continue;
            };

            if !feature.in_range(value) {
                let (min, max) = feature.range();
                errors.push(format!(
                    "value for '{}' must be between {} and {}",
                    feature, min, max
                ));
            }
            values[feature.index()] = value;
        }

        if errors.is_empty() {
            Ok(FeatureRecord::from_values(values))
        } else {
            Err(ValidationErrors(errors))
        }
    }
}

/// Numbers, numeric strings and booleans are accepted.
fn coerce(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}
