//! Maps a pace onto the 0-100 % visual gauge.

use crate::config::{GAUGE_MAX_PACE, GAUGE_MIN_PACE};

/// Fast and slow reference paces, in seconds per kilometer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GaugeScale {
    pub min_pace: f64,
    pub max_pace: f64,
}

impl Default for GaugeScale {
    fn default() -> Self {
        Self {
            min_pace: GAUGE_MIN_PACE,
            max_pace: GAUGE_MAX_PACE,
        }
    }
}

impl GaugeScale {
    /// Position of `pace` between the references, clamped to [0, 100].
    pub fn percent(&self, pace: f64) -> f64 {
        let span = self.max_pace - self.min_pace;
        if span <= 0.0 || pace.is_nan() {
            return 0.0;
        }
        ((pace - self.min_pace) / span * 100.0).clamp(0.0, 100.0)
    }

    /// Width of the filled bar; faster paces fill more of it.
    pub fn fill(&self, pace: f64) -> f64 {
        100.0 - self.percent(pace)
    }
}

pub fn map_pace_to_gauge_percent(pace: f64) -> f64 {
    GaugeScale::default().percent(pace)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gauge_clamps_outside_references() {
        assert_eq!(map_pace_to_gauge_percent(100.0), 0.0);
        assert_eq!(map_pace_to_gauge_percent(700.0), 100.0);
    }

    #[test]
    fn test_gauge_midpoint() {
        assert_eq!(map_pace_to_gauge_percent(375.0), 50.0);
        assert_eq!(map_pace_to_gauge_percent(150.0), 0.0);
        assert_eq!(map_pace_to_gauge_percent(600.0), 100.0);
    }

    #[test]
    fn test_gauge_fill_is_inverted() {
        let scale = GaugeScale::default();
        assert_eq!(scale.fill(150.0), 100.0);
        assert_eq!(scale.fill(600.0), 0.0);
        assert_eq!(scale.fill(262.5), 75.0);
    }

    #[test]
    fn test_degenerate_scale() {
        let scale = GaugeScale {
            min_pace: 300.0,
            max_pace: 300.0,
        };
        assert_eq!(scale.percent(450.0), 0.0);
    }
}
