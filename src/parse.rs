use log::{debug, warn};
use once_cell::sync::Lazy;
use regex::Regex;

// Unit spellings, longest first so alternation never stops at a prefix
const DISTANCE_UNITS: &str =
    "kilometres|kilometers|kilometre|kilometer|km|k|metres|meters|metre|meter|mtrs|mtr|m";

// Compiled regexes for distance and duration parsing
static DISTANCE_SEARCH_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(r"(\d+\.?\d*|\.\d+)\s*(?:({})\b)?", DISTANCE_UNITS)).unwrap()
});
static DISTANCE_STRICT_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(r"^(\d+\.?\d*|\.\d+)\s*({})?$", DISTANCE_UNITS)).unwrap()
});
static DURATION_UNITS_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:(\d+\.?\d*)\s*h)?\s*(?:(\d+\.?\d*)\s*m)?\s*(?:(\d+\.?\d*)\s*s)?").unwrap()
});
static PLAIN_NUMBER_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d+\.?\d*$").unwrap());
static PLAIN_NUMBER_PREFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?:\d+\.?\d*|\.\d+)").unwrap());

/// How to treat text the grammar does not recognize after a valid prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnitPolicy {
    /// Ignore trailing text and keep whatever number was found.
    #[default]
    Lenient,
    /// Reject the input unless the whole string matches the grammar.
    Strict,
}

/// Parse error types for distance and duration fields
#[derive(Debug, Clone, PartialEq)]
pub enum ParseError {
    Empty,
    NoNumber(String),
    UnknownUnit(String),
    InvalidNumber(String),
    ColonParts(usize),
    Unrecognized(String),
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseError::Empty => write!(f, "Input cannot be empty"),
            ParseError::NoNumber(input) => write!(f, "No number found in '{}'", input),
            ParseError::UnknownUnit(unit) => {
                write!(f, "Unknown unit '{}'. Use km, k, m, meters or kilometers", unit)
            }
            ParseError::InvalidNumber(part) => write!(f, "'{}' is not a valid number", part),
            ParseError::ColonParts(n) => {
                write!(f, "Expected h:m:s, m:s or s, got {} colon-separated parts", n)
            }
            ParseError::Unrecognized(input) => write!(
                f,
                "Unrecognized time '{}'. Use 1:30:00, 45:30, 1h30m45s or 90",
                input
            ),
        }
    }
}

impl std::error::Error for ParseError {}

fn parse_number(text: &str) -> Result<f64, ParseError> {
    text.parse::<f64>()
        .ok()
        .filter(|v| v.is_finite() && *v >= 0.0)
        .ok_or_else(|| ParseError::InvalidNumber(text.to_string()))
}

/// A sum of valid components can still overflow to infinity.
fn finite_total(total: f64, normalized: &str) -> Result<f64, ParseError> {
    if total.is_finite() {
        Ok(total)
    } else {
        Err(ParseError::InvalidNumber(normalized.to_string()))
    }
}

fn is_meters(unit: &str) -> bool {
    matches!(
        unit,
        "m" | "mtr" | "mtrs" | "meter" | "meters" | "metre" | "metres"
    )
}

/// Parse a distance string to kilometers.
///
/// Supported formats:
/// - Plain number: "10" or ".5" (kilometers)
/// - Kilometers: "10km", "10 k", "10 kilometers", "10 kilometres"
/// - Meters: "10000m", "400 meters", "1500 metre", "400mtr"
///
/// # Examples
/// ```
/// use pace_calculator::parse::{parse_distance, UnitPolicy};
/// assert_eq!(parse_distance("10km", UnitPolicy::Lenient), Ok(10.0));
/// assert_eq!(parse_distance("10000m", UnitPolicy::Lenient), Ok(10.0));
/// ```
pub fn parse_distance(input: &str, policy: UnitPolicy) -> Result<f64, ParseError> {
    let normalized = input.trim().to_lowercase();
    if normalized.is_empty() {
        return Err(ParseError::Empty);
    }

    let captures = match policy {
        UnitPolicy::Lenient => DISTANCE_SEARCH_REGEX.captures(&normalized),
        UnitPolicy::Strict => DISTANCE_STRICT_REGEX.captures(&normalized),
    };

    let Some(captures) = captures else {
        return Err(match policy {
            UnitPolicy::Strict if PLAIN_NUMBER_PREFIX.is_match(&normalized) => {
                let unit = PLAIN_NUMBER_PREFIX.replace(&normalized, "");
                ParseError::UnknownUnit(unit.trim().to_string())
            }
            _ => ParseError::NoNumber(normalized.clone()),
        });
    };

    let value = parse_number(&captures[1])?;
    let whole = captures.get(0).map_or("", |m| m.as_str());
    if whole.len() < normalized.len() {
        warn!("Ignoring unrecognized text in distance '{}'", normalized);
    }

    let km = match captures.get(2) {
        Some(unit) if is_meters(unit.as_str()) => value / 1000.0,
        _ => value,
    };
    debug!("Parsed distance '{}' as {} km", normalized, km);
    Ok(km)
}

/// Parse a time or pace string to seconds.
///
/// Supported formats:
/// - Colon format: "1:30:00" (h:m:s), "45:30" (m:s)
/// - Unit suffixes: "1h30m45s", "1h 30m", "5m", "45s"
/// - Pure number: "90" (seconds)
///
/// # Examples
/// ```
/// use pace_calculator::parse::{parse_duration, UnitPolicy};
/// assert_eq!(parse_duration("1:30:00", UnitPolicy::Lenient), Ok(5400.0));
/// assert_eq!(parse_duration("1h30m", UnitPolicy::Lenient), Ok(5400.0));
/// assert_eq!(parse_duration("90", UnitPolicy::Lenient), Ok(90.0));
/// ```
pub fn parse_duration(input: &str, policy: UnitPolicy) -> Result<f64, ParseError> {
    let normalized = input.trim().to_lowercase();
    if normalized.is_empty() {
        return Err(ParseError::Empty);
    }

    let seconds = if normalized.contains(':') {
        parse_colon_duration(&normalized)?
    } else {
        parse_unit_duration(&normalized, policy)?
    };
    debug!("Parsed duration '{}' as {} s", normalized, seconds);
    Ok(seconds)
}

fn parse_colon_duration(normalized: &str) -> Result<f64, ParseError> {
    let parts = normalized
        .split(':')
        .map(|part| {
            let part = part.trim();
            if PLAIN_NUMBER_REGEX.is_match(part) {
                parse_number(part)
            } else {
                Err(ParseError::InvalidNumber(part.to_string()))
            }
        })
        .collect::<Result<Vec<f64>, _>>()?;

    let total = match parts.as_slice() {
        [h, m, s] => h * 3600.0 + m * 60.0 + s,
        [m, s] => m * 60.0 + s,
        [s] => *s,
        _ => return Err(ParseError::ColonParts(parts.len())),
    };
    finite_total(total, normalized)
}

fn parse_unit_duration(normalized: &str, policy: UnitPolicy) -> Result<f64, ParseError> {
    let captures = DURATION_UNITS_REGEX
        .captures(normalized)
        .filter(|c| c.get(1).is_some() || c.get(2).is_some() || c.get(3).is_some());

    let Some(captures) = captures else {
        if PLAIN_NUMBER_REGEX.is_match(normalized) {
            return parse_number(normalized);
        }
        return Err(ParseError::Unrecognized(normalized.to_string()));
    };

    let whole = captures.get(0).map_or("", |m| m.as_str());
    if whole.len() < normalized.len() {
        match policy {
            UnitPolicy::Strict => return Err(ParseError::Unrecognized(normalized.to_string())),
            UnitPolicy::Lenient => {
                warn!("Ignoring unrecognized text in time '{}'", normalized)
            }
        }
    }

    let component = |idx: usize| -> Result<f64, ParseError> {
        captures
            .get(idx)
            .map_or(Ok(0.0), |m| parse_number(m.as_str()))
    };
    let total = component(1)? * 3600.0 + component(2)? * 60.0 + component(3)?;
    finite_total(total, normalized)
}
