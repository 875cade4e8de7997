use crate::catalog::recipe::Macros;
use crate::config::ScoringConfig;

/// Share of total energy contributed by each macro.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MacroRatios {
    pub carbs: f64,
    pub protein: f64,
    pub fat: f64,
}

impl MacroRatios {
    /// All ratios are zero when the recipe carries no energy.
    pub fn from_macros(macros: &Macros, config: &ScoringConfig) -> Self {
        let factors = &config.energy_factors;
        let carbs = macros.carbs * factors.carbs;
        let protein = macros.protein * factors.protein;
        let fat = macros.fat * factors.fat;
        let total = carbs + protein + fat;

        if total <= 0.0 {
            return MacroRatios {
                carbs: 0.0,
                protein: 0.0,
                fat: 0.0,
            };
        }

        MacroRatios {
            carbs: carbs / total,
            protein: protein / total,
            fat: fat / total,
        }
    }

    /// Absolute distance from the target ratio, per macro.
    pub fn deviations(&self, config: &ScoringConfig) -> [f64; 3] {
        let targets = &config.macro_targets;
        [
            (self.carbs - targets.carbs).abs(),
            (self.protein - targets.protein).abs(),
            (self.fat - targets.fat).abs(),
        ]
    }
}

/// Hard gate: every macro must sit within the tolerance window.
pub fn is_balanced(macros: &Macros, config: &ScoringConfig) -> bool {
    MacroRatios::from_macros(macros, config)
        .deviations(config)
        .iter()
        .all(|deviation| *deviation <= config.ratio_tolerance)
}

/// Continuous closeness to the target split, in `[0.0, 1.0]`.
pub fn balance_score(macros: &Macros, config: &ScoringConfig) -> f64 {
    let deviations = MacroRatios::from_macros(macros, config).deviations(config);
    if config.ratio_tolerance <= 0.0 || config.ratio_tolerance.is_nan() {
        return if deviations.iter().all(|d| *d == 0.0) { 1.0 } else { 0.0 };
    }
    let mean_delta = deviations
        .iter()
        .map(|deviation| deviation / config.ratio_tolerance)
        .sum::<f64>()
        / deviations.len() as f64;

    (1.0 - mean_delta).clamp(0.0, 1.0)
}
