//! Raw field strings carried in the page URL for shareable links.

use crate::config::{QUERY_DISTANCE, QUERY_PACE, QUERY_TIME};
use crate::engine::{Field, Inputs};

/// Query parameter payload: one entry per field, `None` when absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShareState {
    pub distance: Option<String>,
    pub time: Option<String>,
    pub pace: Option<String>,
}

fn non_empty(text: &str) -> Option<String> {
    if text.trim().is_empty() {
        None
    } else {
        Some(text.to_string())
    }
}

impl ShareState {
    /// Capture the raw text of every non-empty field.
    pub fn from_inputs(inputs: &Inputs) -> Self {
        Self {
            distance: non_empty(&inputs.distance),
            time: non_empty(&inputs.time),
            pace: non_empty(&inputs.pace),
        }
    }

    /// Build from a query lookup such as `URLSearchParams.get`.
    /// A key that is present keeps its value even when empty.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            distance: lookup(QUERY_DISTANCE),
            time: lookup(QUERY_TIME),
            pace: lookup(QUERY_PACE),
        }
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        match field {
            Field::Distance => self.distance.as_deref(),
            Field::Time => self.time.as_deref(),
            Field::Pace => self.pace.as_deref(),
        }
    }

    pub fn present_count(&self) -> usize {
        Field::ALL.iter().filter(|f| self.get(**f).is_some()).count()
    }

    /// Loading a link calculates immediately when it carries at least two keys.
    pub fn should_autorun(&self) -> bool {
        self.present_count() >= 2
    }

    /// `(key, value)` pairs in distance, time, pace order.
    pub fn pairs(&self) -> Vec<(&'static str, &str)> {
        Field::ALL
            .iter()
            .filter_map(|f| self.get(*f).map(|v| (f.query_key(), v)))
            .collect()
    }

    pub fn to_inputs(&self) -> Inputs {
        Inputs {
            distance: self.distance.clone().unwrap_or_default(),
            time: self.time.clone().unwrap_or_default(),
            pace: self.pace.clone().unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_from_inputs_skips_blank_fields() {
        let inputs = Inputs::new("10km", "  ", "5:00");
        let state = ShareState::from_inputs(&inputs);
        assert_eq!(state.distance.as_deref(), Some("10km"));
        assert_eq!(state.time, None);
        assert_eq!(state.pace.as_deref(), Some("5:00"));
        assert_eq!(state.pairs(), vec![("distance", "10km"), ("pace", "5:00")]);
    }

    #[test]
    fn test_from_lookup_and_autorun() {
        let query: HashMap<&str, &str> = [("time", "50:00"), ("pace", "")].into_iter().collect();
        let state = ShareState::from_lookup(|key| query.get(key).map(|v| v.to_string()));
        assert_eq!(state.present_count(), 2);
        assert!(state.should_autorun());

        let inputs = state.to_inputs();
        assert_eq!(inputs.distance, "");
        assert_eq!(inputs.time, "50:00");
        assert_eq!(inputs.pace, "");
    }

    #[test]
    fn test_single_key_does_not_autorun() {
        let state = ShareState {
            distance: Some("10".to_string()),
            ..Default::default()
        };
        assert!(!state.should_autorun());
    }
}
