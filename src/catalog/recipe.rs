use serde::{Deserialize, Deserializer, Serialize};

use crate::matching::normalize;

/// Grams per serving for each macro. Missing energy macros count as zero;
/// fiber only feeds presentation, so its absence is kept.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Macros {
    pub carbs: f64,
    pub protein: f64,
    pub fat: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fiber: Option<f64>,
}

/// A recipe record exactly as it appears in the dataset.
#[derive(Debug, Clone, Deserialize)]
pub struct RecipeRecord {
    pub name: String,
    #[serde(default = "default_servings", deserialize_with = "lenient_servings")]
    pub servings: u32,
    #[serde(default)]
    pub core_ingredients: Vec<String>,
    #[serde(default)]
    pub supporting_ingredients: Vec<String>,
    #[serde(default)]
    pub instructions: Vec<String>,
    #[serde(default)]
    pub macros: Macros,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub notes: String,
}

fn default_servings() -> u32 {
    1
}

/// Any JSON number is accepted: fractions truncate, anything below one
/// (or `null`) becomes one.
fn lenient_servings<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<f64>::deserialize(deserializer)?;
    Ok(match raw {
        Some(n) if n >= 1.0 => n.trunc().min(u32::MAX as f64) as u32,
        _ => default_servings(),
    })
}

/// A loaded recipe. Ingredient phrases are normalized and never empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    pub name: String,
    pub servings: u32,
    pub core_ingredients: Vec<String>,
    pub supporting_ingredients: Vec<String>,
    pub instructions: Vec<String>,
    pub macros: Macros,
    pub tags: Vec<String>,
    pub notes: String,
}

impl Recipe {
    /// Ingest a raw record.
    ///
    /// This is where every invariant is enforced: phrases normalized, empty
    /// phrases dropped, negative macros floored at zero.
    pub fn ingest(record: RecipeRecord) -> Self {
        let macros = Macros {
            carbs: record.macros.carbs.max(0.0),
            protein: record.macros.protein.max(0.0),
            fat: record.macros.fat.max(0.0),
            fiber: record.macros.fiber.map(|fiber| fiber.max(0.0)),
        };

        Recipe {
            name: record.name,
            servings: record.servings,
            core_ingredients: normalize_phrases(&record.core_ingredients),
            supporting_ingredients: normalize_phrases(&record.supporting_ingredients),
            instructions: record.instructions,
            macros,
            tags: record.tags,
            notes: record.notes,
        }
    }
}

fn normalize_phrases(raw: &[String]) -> Vec<String> {
    raw.iter()
        .map(|phrase| normalize(phrase))
        .filter(|phrase| !phrase.is_empty())
        .collect()
}
