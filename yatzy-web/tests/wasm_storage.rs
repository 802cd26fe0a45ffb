#![cfg(target_arch = "wasm32")]

use wasm_bindgen_test::*;
use yatzy_game::{Category, GameStore, KeyValueStore, Language, Persistence, ScoreInput};
use yatzy_web::storage::BrowserStorage;

wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

fn reset() {
    let storage = BrowserStorage;
    for key in ["yatzy-game-state", "yatzy-game-history", "yatzy-language"] {
        storage.remove(key).expect("remove key");
    }
}

#[wasm_bindgen_test]
fn browser_storage_round_trips_blobs() {
    reset();
    let storage = BrowserStorage;
    assert_eq!(storage.get("yatzy-language").expect("read"), None);
    storage.set("yatzy-language", "fr").expect("write");
    assert_eq!(
        storage.get("yatzy-language").expect("read"),
        Some("fr".to_string())
    );
    assert_eq!(Persistence::new(storage).load_language(), Language::Fr);
    reset();
}

#[wasm_bindgen_test]
fn game_store_survives_reload() {
    reset();
    let player = {
        let mut store = GameStore::new(BrowserStorage, 7);
        let id = store.state().players[0].id.clone();
        store
            .set_score(&id, Category::Yatzy, ScoreInput::Value(50))
            .expect("legal score");
        id
    };
    let reloaded = GameStore::new(BrowserStorage, 8);
    let state = reloaded.state();
    assert_eq!(state.players[0].id, player);
    assert_eq!(state.players[0].value(Category::Yatzy), Some(50));
    reset();
}
