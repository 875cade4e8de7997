use serde::{Deserialize, Serialize};
use thiserror::Error;

// Key point:
// Serializable
// Comparable
// Explicit defaults

/// Per-gram energy factors used to turn macros into a calorie split.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnergyFactors {
    pub carbs: f64,
    pub protein: f64,
    pub fat: f64,
}

/// Target share of total energy for each macro.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MacroTargets {
    pub carbs: f64,
    pub protein: f64,
    pub fat: f64,
}

/// A configuration that cannot drive a query.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("{name} lower bound {min} exceeds upper bound {max}")]
    InvertedBounds {
        name: &'static str,
        min: usize,
        max: usize,
    },

    #[error("{name} must be a finite number in {range}, got {value}")]
    OutOfRange {
        name: &'static str,
        range: &'static str,
        value: f64,
    },

    #[error("{name} lower bound must be at least 1")]
    ZeroMinimum { name: &'static str },
}

/// Missing fields take their `v0()` value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    pub version: String,
    /// Minimum token overlap ratio for an ingredient phrase to count as satisfied.
    pub match_threshold: f64,
    pub core_weight: f64,
    pub supporting_weight: f64,
    pub coverage_weight: f64,
    pub balance_weight: f64,
    pub energy_factors: EnergyFactors,
    pub macro_targets: MacroTargets,
    pub ratio_tolerance: f64,
    pub min_results: usize,
    pub max_results: usize,
}

impl ScoringConfig {
    pub fn v0() -> Self {
        Self {
            version: "1".into(),
            match_threshold: 0.6,
            core_weight: 0.75,
            supporting_weight: 0.25,
            coverage_weight: 0.8,
            balance_weight: 0.2,
            energy_factors: EnergyFactors {
                carbs: 4.0,
                protein: 4.0,
                fat: 9.0,
            },
            macro_targets: MacroTargets {
                carbs: 0.4,
                protein: 0.3,
                fat: 0.3,
            },
            ratio_tolerance: 0.1,
            min_results: 1,
            max_results: 10,
        }
    }

    /// Clamp a requested result count into `[min_results, max_results]`.
    ///
    /// Zero and negative requests become `min_results`. Never panics; with
    /// inverted bounds the upper one wins.
    pub fn clamp_limit(&self, requested: i64) -> usize {
        clamp_into(requested, self.min_results, self.max_results)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_results == 0 {
            return Err(ConfigError::ZeroMinimum { name: "result limit" });
        }
        check_bounds("result limit", self.min_results, self.max_results)?;
        check_range("match_threshold", self.match_threshold, 0.0, 1.0, "(0, 1]", false)?;
        check_range("ratio_tolerance", self.ratio_tolerance, 0.0, 1.0, "(0, 1]", false)?;
        for (name, weight) in [
            ("core_weight", self.core_weight),
            ("supporting_weight", self.supporting_weight),
            ("coverage_weight", self.coverage_weight),
            ("balance_weight", self.balance_weight),
        ] {
            check_range(name, weight, 0.0, 1.0, "[0, 1]", true)?;
        }
        Ok(())
    }
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self::v0()
    }
}

/// Missing fields take their `v0()` value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ItineraryConfig {
    pub version: String,
    pub min_days: usize,
    pub max_days: usize,
    /// Style given to exploration days when no style was requested.
    pub fallback_style: String,
    pub exploration_title: String,
}

impl ItineraryConfig {
    pub fn v0() -> Self {
        Self {
            version: "1".into(),
            min_days: 3,
            max_days: 10,
            fallback_style: "explore".into(),
            exploration_title: "Open exploration".into(),
        }
    }

    /// Same rules as [`ScoringConfig::clamp_limit`].
    pub fn clamp_length(&self, requested: i64) -> usize {
        clamp_into(requested, self.min_days, self.max_days)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        check_bounds("trip length", self.min_days, self.max_days)
    }
}

impl Default for ItineraryConfig {
    fn default() -> Self {
        Self::v0()
    }
}

fn clamp_into(requested: i64, min: usize, max: usize) -> usize {
    let requested = usize::try_from(requested.max(0)).unwrap_or(usize::MAX);
    requested.max(min).min(max)
}

fn check_bounds(name: &'static str, min: usize, max: usize) -> Result<(), ConfigError> {
    if min > max {
        return Err(ConfigError::InvertedBounds { name, min, max });
    }
    Ok(())
}

fn check_range(
    name: &'static str,
    value: f64,
    low: f64,
    high: f64,
    range: &'static str,
    low_inclusive: bool,
) -> Result<(), ConfigError> {
    let above_low = if low_inclusive { value >= low } else { value > low };
    if value.is_finite() && above_low && value <= high {
        Ok(())
    } else {
        Err(ConfigError::OutOfRange { name, range, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn limit_is_clamped_into_bounds() {
        let config = ScoringConfig::v0();
        assert_eq!(config.clamp_limit(-4), 1);
        assert_eq!(config.clamp_limit(0), 1);
        assert_eq!(config.clamp_limit(3), 3);
        assert_eq!(config.clamp_limit(42), 10);
    }

    #[test]
    fn trip_length_is_clamped_into_bounds() {
        let config = ItineraryConfig::v0();
        assert_eq!(config.clamp_length(1), 3);
        assert_eq!(config.clamp_length(7), 7);
        assert_eq!(config.clamp_length(30), 10);
    }

    #[test]
    fn inverted_bounds_clamp_without_panicking() {
        let scoring = ScoringConfig {
            min_results: 5,
            max_results: 2,
            ..ScoringConfig::v0()
        };
        assert_eq!(scoring.clamp_limit(3), 2);
        assert_eq!(
            scoring.validate(),
            Err(ConfigError::InvertedBounds { name: "result limit", min: 5, max: 2 })
        );

        let itinerary = ItineraryConfig {
            min_days: 10,
            max_days: 3,
            ..ItineraryConfig::v0()
        };
        assert_eq!(itinerary.clamp_length(5), 3);
        assert!(itinerary.validate().is_err());
    }

    #[test]
    fn huge_bounds_do_not_wrap() {
        let scoring = ScoringConfig {
            min_results: 1,
            max_results: usize::MAX,
            ..ScoringConfig::v0()
        };
        assert_eq!(scoring.clamp_limit(i64::MAX), i64::MAX as usize);
        assert_eq!(scoring.clamp_limit(i64::MIN), 1);
        assert!(scoring.validate().is_ok());
    }

    #[test]
    fn zero_tolerance_is_rejected() {
        let scoring = ScoringConfig {
            ratio_tolerance: 0.0,
            ..ScoringConfig::v0()
        };
        assert!(matches!(
            scoring.validate(),
            Err(ConfigError::OutOfRange { name: "ratio_tolerance", .. })
        ));

        let nan_weight = ScoringConfig {
            core_weight: f64::NAN,
            ..ScoringConfig::v0()
        };
        assert!(nan_weight.validate().is_err());

        let no_results = ScoringConfig {
            min_results: 0,
            ..ScoringConfig::v0()
        };
        assert_eq!(
            no_results.validate(),
            Err(ConfigError::ZeroMinimum { name: "result limit" })
        );
    }

    #[test]
    fn defaults_are_valid() {
        assert!(ScoringConfig::v0().validate().is_ok());
        assert!(ItineraryConfig::v0().validate().is_ok());
    }

    #[test]
    fn partial_overrides_keep_other_defaults() {
        let scoring: ScoringConfig = serde_json::from_str(r#"{"max_results": 5}"#).unwrap();
        assert_eq!(scoring.max_results, 5);
        assert_eq!(scoring, ScoringConfig { max_results: 5, ..ScoringConfig::v0() });

        let itinerary: ItineraryConfig = serde_json::from_str(r#"{"min_days": 2}"#).unwrap();
        assert_eq!(itinerary, ItineraryConfig { min_days: 2, ..ItineraryConfig::v0() });
    }

    #[test]
    fn config_round_trips_through_json() {
        let config = ScoringConfig::v0();
        let json = serde_json::to_string(&config).unwrap();
        let back: ScoringConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, back);
    }
}
