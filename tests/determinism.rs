use recommend_core::catalog::{Catalog, CatalogSession};
use recommend_core::config::ItineraryConfig;
use recommend_core::types::{Pace, TripPreferences};

fn load() -> Catalog {
    let root = env!("CARGO_MANIFEST_DIR");
    let recipes = std::fs::read(format!("{root}/data/recipes.json")).unwrap();
    let destinations = std::fs::read(format!("{root}/data/destinations.json")).unwrap();
    Catalog::builder()
        .recipes_json(&recipes)
        .unwrap()
        .destinations_json(&destinations)
        .unwrap()
        .build()
}

#[test]
fn identical_inputs_give_identical_output() {
    let session_a = CatalogSession::ready(load());
    let session_b = CatalogSession::ready(load());

    assert_eq!(
        session_a.catalog().unwrap().version(),
        session_b.catalog().unwrap().version()
    );

    for pantry in ["onion, canned tomatoes, eggs", "greek yogurt; oats", "rice\ncucumber\nsalmon"] {
        let a = serde_json::to_string(&session_a.recommend_recipes(pantry, 10).unwrap()).unwrap();
        let b = serde_json::to_string(&session_b.recommend_recipes(pantry, 10).unwrap()).unwrap();
        assert_eq!(a, b, "recipe output differs for {pantry:?}");
    }

    let preferences = TripPreferences::new(&ItineraryConfig::v0(), 10, ["history", "nature"], Pace::Relaxed, None);
    for id in ["lisbon", "kyoto"] {
        let a = serde_json::to_string(&session_a.plan_trip(id, &preferences).unwrap()).unwrap();
        let b = serde_json::to_string(&session_b.plan_trip(id, &preferences).unwrap()).unwrap();
        assert_eq!(a, b, "itinerary differs for {id}");
    }
}

#[test]
fn pantry_order_and_duplicates_do_not_matter() {
    let session = CatalogSession::ready(load());
    let a = session.recommend_recipes("onion, eggs, canned tomatoes", 10).unwrap();
    let b = session.recommend_recipes("Canned Tomatoes; EGGS, onion, onion", 10).unwrap();
    assert_eq!(a, b);
}
