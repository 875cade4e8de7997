use std::path::Path;

use recommend_core::catalog::Catalog;
use recommend_core::config::ItineraryConfig;
use recommend_core::itinerary::ItineraryAssembler;
use recommend_core::selection::RecipeSelector;
use recommend_core::types::{Pace, Pantry, TripPreferences};
use serde_json::Value;

fn sample_catalog() -> Catalog {
    let data = Path::new(env!("CARGO_MANIFEST_DIR")).join("data");
    Catalog::builder()
        .recipes_path(&data.join("recipes.json"))
        .unwrap()
        .destinations_path(&data.join("destinations.json"))
        .unwrap()
        .build()
}

#[test]
fn golden_recipe_recommendation_shape() {
    let catalog = sample_catalog();
    let result = RecipeSelector::default().recommend(&catalog, &Pantry::parse("salmon, rice, soy sauce"), 2);

    let json_str = serde_json::to_string(&result).unwrap();

    // "recipes" -> "selection"
    let recipes_pos = json_str.find("\"recipes\":").unwrap();
    let selection_pos = json_str.find("\"selection\":").unwrap();
    assert!(recipes_pos < selection_pos);

    let parsed: Value = serde_json::from_str(&json_str).unwrap();
    let top = &parsed["recipes"][0];
    assert_eq!(top["rank"], 1);
    assert_eq!(top["name"], "Salmon Rice Bowl");
    assert_eq!(top["why"]["matched_core"], serde_json::json!(["salmon", "rice"]));
    assert_eq!(top["why"]["missing_core"], serde_json::json!(["cucumber"]));
    assert_eq!(top["why"]["matched_supporting"], serde_json::json!(["soy sauce"]));
    assert_eq!(top["macros"]["fiber"], 3.0);

    let selection = &parsed["selection"];
    assert_eq!(selection["pantry"], serde_json::json!(["rice", "salmon", "soy sauce"]));
    assert_eq!(selection["limit"], 2);
    assert_eq!(selection["recipes_considered"], 6);
    assert!(selection["dataset_version"].as_str().unwrap().starts_with("sha256:"));
}

#[test]
fn golden_itinerary_shape() {
    let catalog = sample_catalog();
    let kyoto = catalog.destinations().iter().find(|d| d.id.as_str() == "kyoto").unwrap();
    let preferences = TripPreferences::new(&ItineraryConfig::v0(), 7, ["food"], Pace::Packed, None);

    let itinerary = ItineraryAssembler::default().assemble(kyoto, &preferences);
    let parsed: Value = serde_json::to_value(&itinerary).unwrap();

    assert_eq!(parsed["destination"], "kyoto");
    assert_eq!(parsed["pace"], "packed");
    assert_eq!(parsed["pace_note"], "Start before 8am to beat the crowds.");

    let days = parsed["days"].as_array().unwrap();
    assert_eq!(days.len(), 7);
    assert_eq!(days[0]["source"], "primary");
    assert_eq!(days[3]["source"], "flex");
    assert_eq!(days[3]["plan"]["title"], "Sake in Fushimi");
    assert_eq!(days[3]["style_score"], 1);
    assert_eq!(days[6]["source"], "exploration");
    assert_eq!(days[6]["style_score"], Value::Null);
    assert_eq!(days[6]["date"], Value::Null);

    // absent schedule slots are omitted
    let schedule = days[0]["plan"]["schedule"].as_object().unwrap();
    assert!(schedule.contains_key("morning"));
    assert!(!schedule.contains_key("late"));
}
