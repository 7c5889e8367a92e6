use std::fmt;

/// Model inputs, declared in the column order the artifacts were fitted with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feature {
    Pregnancies,
    Glucose,
    BloodPressure,
    SkinThickness,
    Insulin,
    Bmi,
    DiabetesPedigreeFunction,
    Age,
}

impl Feature {
    pub const COUNT: usize = 8;

    pub const ALL: [Feature; Feature::COUNT] = [
        Feature::Pregnancies,
        Feature::Glucose,
        Feature::BloodPressure,
        Feature::SkinThickness,
        Feature::Insulin,
        Feature::Bmi,
        Feature::DiabetesPedigreeFunction,
        Feature::Age,
    ];

    /// Key used in request bodies.
    pub fn name(self) -> &'static str {
        match self {
            Self::Pregnancies => "Pregnancies",
            Self::Glucose => "Glucose",
            Self::BloodPressure => "BloodPressure",
            Self::SkinThickness => "SkinThickness",
            Self::Insulin => "Insulin",
            Self::Bmi => "BMI",
            Self::DiabetesPedigreeFunction => "DiabetesPedigreeFunction",
            Self::Age => "Age",
        }
    }

    /// Inclusive `(min, max)` bounds.
    pub fn range(self) -> (f64, f64) {
        match self {
            Self::Pregnancies => (0.0, 20.0),
            Self::Glucose => (70.0, 200.0),
            Self::BloodPressure => (40.0, 120.0),
            Self::SkinThickness => (10.0, 50.0),
            Self::Insulin => (0.0, 846.0),
            Self::Bmi => (18.0, 50.0),
            Self::DiabetesPedigreeFunction => (0.078, 2.42),
            Self::Age => (0.0, 100.0),
        }
    }

    pub fn in_range(self, value: f64) -> bool {
        let (min, max) = self.range();
        min <= value && value <= max
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.name() == name)
    }

    pub fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A complete, range-checked set of inputs. Only the validator builds these.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeatureRecord {
    values: [f64; Feature::COUNT],
}

impl FeatureRecord {
    pub(crate) fn from_values(values: [f64; Feature::COUNT]) -> Self {
        Self { values }
    }

    pub fn get(&self, feature: Feature) -> f64 {
        self.values[feature.index()]
    }

    /// Values in canonical column order.
    pub fn to_vector(&self) -> Vec<f64> {
        self.values.to_vec()
    }
}
