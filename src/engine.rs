//! Derivation engine: parses the three fields and solves for the missing one.

use crate::config::{
    CalculatorConfig, MAX_RESULT_SECONDS, QUERY_DISTANCE, QUERY_PACE, QUERY_TIME,
};
use crate::format::{format_distance, format_duration, format_pace};
use crate::parse::{parse_distance, parse_duration, ParseError, UnitPolicy};
use crate::share::ShareState;
use crate::CalcError;
use log::{debug, info, warn};
use serde::Serialize;

/// One of the three calculator input fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Distance,
    Time,
    Pace,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::Distance, Field::Time, Field::Pace];

    pub fn query_key(self) -> &'static str {
        match self {
            Field::Distance => QUERY_DISTANCE,
            Field::Time => QUERY_TIME,
            Field::Pace => QUERY_PACE,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Field::Distance => "Distance",
            Field::Time => "Time",
            Field::Pace => "Pace",
        }
    }

    fn parse(self, text: &str, policy: UnitPolicy) -> Result<f64, ParseError> {
        match self {
            Field::Distance => parse_distance(text, policy),
            Field::Time | Field::Pace => parse_duration(text, policy),
        }
    }
}

/// Raw text of the three fields as the user typed it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Inputs {
    pub distance: String,
    pub time: String,
    pub pace: String,
}

impl Inputs {
    pub fn new(distance: &str, time: &str, pace: &str) -> Self {
        Self {
            distance: distance.to_string(),
            time: time.to_string(),
            pace: pace.to_string(),
        }
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Distance => &self.distance,
            Field::Time => &self.time,
            Field::Pace => &self.pace,
        }
    }
}

/// The quantity that was derived from the other two.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Solved {
    /// Seconds per kilometer.
    Pace(f64),
    /// Seconds.
    Duration(f64),
    /// Kilometers.
    Distance(f64),
}

impl Solved {
    pub fn field(&self) -> Field {
        match self {
            Solved::Pace(_) => Field::Pace,
            Solved::Duration(_) => Field::Time,
            Solved::Distance(_) => Field::Distance,
        }
    }

    pub fn value(&self) -> f64 {
        match *self {
            Solved::Pace(v) | Solved::Duration(v) | Solved::Distance(v) => v,
        }
    }

    pub fn display(&self) -> String {
        match *self {
            Solved::Pace(secs_per_km) => format_pace(secs_per_km),
            Solved::Duration(secs) => format_duration(secs),
            Solved::Distance(km) => format_distance(km),
        }
    }
}

/// A successful calculation.
#[derive(Debug, Clone, PartialEq)]
pub struct Calculation {
    pub solved: Solved,
    /// Pace of the run, whether it was supplied or derived.
    pub pace_s_per_km: f64,
    /// Raw field text to persist in the URL.
    pub share: ShareState,
}

impl Calculation {
    /// `"Pace: 5:00 min/km"`
    pub fn summary(&self) -> String {
        format!("{}: {}", self.solved.field().label(), self.solved.display())
    }
}

/// Receives the side effects of a successful calculation.
pub trait CalculationSink {
    fn publish_pace(&mut self, pace_s_per_km: f64);
    fn publish_share(&mut self, state: &ShareState);
}

/// Solve for whichever of the three values is absent.
///
/// Exactly two values must be present. A zero divisor is rejected rather
/// than producing an infinite or NaN result, and so is a result too large
/// to display.
pub fn derive(
    distance_km: Option<f64>,
    duration_s: Option<f64>,
    pace_s_per_km: Option<f64>,
) -> Result<Solved, CalcError> {
    let solved = match (distance_km, duration_s, pace_s_per_km) {
        (Some(distance), Some(duration), None) => {
            if distance <= 0.0 {
                return Err(CalcError::NonPositiveDistance);
            }
            Solved::Pace(duration / distance)
        }
        (Some(distance), None, Some(pace)) => Solved::Duration(pace * distance),
        (None, Some(duration), Some(pace)) => {
            if pace <= 0.0 {
                return Err(CalcError::NonPositivePace);
            }
            Solved::Distance(duration / pace)
        }
        (d, t, p) => {
            return Err(CalcError::NeedExactlyTwo {
                present: [d, t, p].iter().filter(|v| v.is_some()).count(),
            })
        }
    };

    let in_range = match solved {
        Solved::Pace(secs) | Solved::Duration(secs) => secs <= MAX_RESULT_SECONDS,
        Solved::Distance(km) => km.is_finite(),
    };
    if !in_range {
        return Err(CalcError::OutOfRange(solved.field()));
    }
    Ok(solved)
}

/// Parse every non-empty field, then derive the missing value.
///
/// All fields that fail to parse are reported together.
pub fn calculate(inputs: &Inputs, config: &CalculatorConfig) -> Result<Calculation, CalcError> {
    let mut values = [None; 3];
    let mut invalid = Vec::new();

    for (slot, field) in values.iter_mut().zip(Field::ALL) {
        let text = inputs.get(field);
        if text.trim().is_empty() {
            continue;
        }
        match field.parse(text, config.unit_policy) {
            Ok(value) => {
                debug!("{} = {}", field.label(), value);
                *slot = Some(value);
            }
            Err(err) => {
                warn!("{} field rejected: {}", field.label(), err);
                invalid.push((field, err));
            }
        }
    }

    if !invalid.is_empty() {
        return Err(CalcError::InvalidFields(invalid));
    }

    let [distance, duration, pace] = values;
    let solved = derive(distance, duration, pace).map_err(|err| {
        warn!("Calculation rejected: {}", err);
        err
    })?;

    let pace_s_per_km = match solved {
        Solved::Pace(derived) => derived,
        _ => pace.unwrap_or_default(),
    };

    let calculation = Calculation {
        solved,
        pace_s_per_km,
        share: ShareState::from_inputs(inputs),
    };
    info!("Calculated {}", calculation.summary());
    Ok(calculation)
}

/// Run [`calculate`] and hand the gauge pace and share state to `sink` on success.
pub fn calculate_and_notify(
    inputs: &Inputs,
    config: &CalculatorConfig,
    sink: &mut impl CalculationSink,
) -> Result<Calculation, CalcError> {
    let calculation = calculate(inputs, config)?;
    sink.publish_pace(calculation.pace_s_per_km);
    sink.publish_share(&calculation.share);
    Ok(calculation)
}
