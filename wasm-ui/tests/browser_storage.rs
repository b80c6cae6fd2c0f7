//! localStorage tests; run with `wasm-pack test --headless --firefox`.

#![cfg(target_arch = "wasm32")]

use recipe_box::{Recipe, RecipeCollection, RecipeStore, Storage};
use recipe_box_ui::storage::BrowserStorage;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn recipe(title: &str) -> Recipe {
    Recipe {
        title: title.to_string(),
        description: "From the browser".to_string(),
        ingredients: "eggs".to_string(),
        steps: "scramble".to_string(),
        image: Some("data:image/png;base64,iVBORw0KGgo=".to_string()),
    }
}

#[wasm_bindgen_test]
fn test_round_trip_through_local_storage() {
    let mut store = RecipeStore::with_key(BrowserStorage, "recipes-test-round-trip");
    let collection = RecipeCollection::from(vec![recipe("One"), recipe("Two")]);
    store.save(&collection).unwrap();

    let reopened = RecipeStore::with_key(BrowserStorage, "recipes-test-round-trip");
    assert_eq!(reopened.load(), collection);
}

#[wasm_bindgen_test]
fn test_malformed_local_storage_loads_empty() {
    let mut storage = BrowserStorage;
    storage
        .set_item("recipes-test-malformed", "not json at all")
        .unwrap();
    let store = RecipeStore::with_key(BrowserStorage, "recipes-test-malformed");
    assert!(store.load().is_empty());
}
