use serde::Serialize;
use std::fmt;
use wasm_bindgen::prelude::*;

pub mod config;
pub mod engine;
pub mod format;
pub mod gauge;
pub mod logger;
pub mod parse;
pub mod share;

pub use config::CalculatorConfig;
pub use engine::{
    calculate, calculate_and_notify, derive, Calculation, CalculationSink, Field, Inputs, Solved,
};
pub use parse::{ParseError, UnitPolicy};
pub use share::ShareState;

// Error type for a single calculation attempt
#[derive(Debug, Clone, PartialEq)]
pub enum CalcError {
    /// Non-empty fields whose text could not be parsed
    InvalidFields(Vec<(Field, ParseError)>),
    /// Zero, one or three values were supplied
    NeedExactlyTwo { present: usize },
    NonPositiveDistance,
    NonPositivePace,
    /// The derived value is too large to show
    OutOfRange(Field),
}

impl CalcError {
    pub fn invalid_fields(&self) -> Vec<Field> {
        match self {
            CalcError::InvalidFields(fields) => fields.iter().map(|(f, _)| *f).collect(),
            _ => Vec::new(),
        }
    }
}

impl fmt::Display for CalcError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CalcError::InvalidFields(_) => write!(f, "{}", config::MSG_CORRECT_INPUTS),
            CalcError::NeedExactlyTwo { .. } => {
                write!(f, "Please enter any two values to calculate the third.")
            }
            CalcError::NonPositiveDistance => write!(f, "Distance must be greater than zero."),
            CalcError::NonPositivePace => write!(f, "Pace must be greater than zero."),
            CalcError::OutOfRange(field) => {
                write!(f, "{} is too large to display. Check your inputs.", field.label())
            }
        }
    }
}

impl std::error::Error for CalcError {}

/// Serializable outcome of a calculation, for callers outside the Yew app.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum CalculationReport {
    Solved {
        field: Field,
        value: f64,
        display: String,
        pace_s_per_km: f64,
        gauge_fill: f64,
    },
    Failed {
        message: String,
        invalid_fields: Vec<Field>,
    },
}

impl CalculationReport {
    pub fn new(result: &Result<Calculation, CalcError>, config: &CalculatorConfig) -> Self {
        match result {
            Ok(calc) => CalculationReport::Solved {
                field: calc.solved.field(),
                value: calc.solved.value(),
                display: calc.solved.display(),
                pace_s_per_km: calc.pace_s_per_km,
                gauge_fill: config.gauge.fill(calc.pace_s_per_km),
            },
            Err(err) => CalculationReport::Failed {
                message: err.to_string(),
                invalid_fields: err.invalid_fields(),
            },
        }
    }
}

/// JavaScript entry point: solve for the empty field of the three.
///
/// # Arguments
/// * `distance` - Distance text, e.g. "10km"
/// * `time` - Time text, e.g. "50:00"
/// * `pace` - Pace text, e.g. "5:00"
///
/// # Returns
/// A serialized `CalculationReport`
#[wasm_bindgen]
pub fn calculate_pace(distance: &str, time: &str, pace: &str) -> JsValue {
    let config = CalculatorConfig::default();
    let result = calculate(&Inputs::new(distance, time, pace), &config);
    let report = CalculationReport::new(&result, &config);
    serde_wasm_bindgen::to_value(&report).unwrap_or(JsValue::NULL)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_report_for_solved_calculation() {
        let config = CalculatorConfig::default();
        let result = calculate(&Inputs::new("10km", "50:00", ""), &config);
        let report = serde_json::to_value(CalculationReport::new(&result, &config)).unwrap();
        assert_eq!(
            report,
            json!({
                "status": "solved",
                "field": "pace",
                "value": 300.0,
                "display": "5:00 min/km",
                "pace_s_per_km": 300.0,
                "gauge_fill": 100.0 - 150.0 / 450.0 * 100.0,
            })
        );
    }

    #[test]
    fn test_report_for_invalid_fields() {
        let config = CalculatorConfig::default();
        let result = calculate(&Inputs::new("abc", "", "xyz"), &config);
        let report = serde_json::to_value(CalculationReport::new(&result, &config)).unwrap();
        assert_eq!(
            report,
            json!({
                "status": "failed",
                "message": "Please correct invalid inputs.",
                "invalid_fields": ["distance", "pace"],
            })
        );
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            CalcError::NeedExactlyTwo { present: 1 }.to_string(),
            "Please enter any two values to calculate the third."
        );
        assert_eq!(
            CalcError::NonPositiveDistance.to_string(),
            "Distance must be greater than zero."
        );
        assert_eq!(
            CalcError::OutOfRange(Field::Time).to_string(),
            "Time is too large to display. Check your inputs."
        );
        assert!(CalcError::NonPositivePace.invalid_fields().is_empty());
    }
}
