use chrono::{TimeZone, Utc};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use yatzy_game::{
    BonusRule, Category, FixedClock, GameStore, MemoryStore, PossibleValues, ScoreInput,
    bottom_section_total, current_ranking, high_scores, overall_ranking, possible_values,
    top_section_total,
};

fn clock(day: u32) -> FixedClock {
    FixedClock(Utc.with_ymd_and_hms(2025, 4, day, 21, 0, 0).unwrap())
}

fn random_input(rng: &mut ChaCha8Rng, category: Category) -> ScoreInput {
    if rng.gen_bool(0.1) {
        return ScoreInput::Skip;
    }
    match possible_values(category) {
        PossibleValues::Listed(values) => ScoreInput::Value(values[rng.gen_range(0..values.len())]),
        PossibleValues::Unrestricted => ScoreInput::Value(rng.gen_range(5..=30)),
    }
}

fn play_round(store: &mut GameStore<MemoryStore, FixedClock>, rng: &mut ChaCha8Rng) {
    let ids: Vec<_> = store.state().players.iter().map(|p| p.id.clone()).collect();
    for id in &ids {
        for category in Category::ALL {
            if category.is_derived() {
                continue;
            }
            let input = random_input(rng, category);
            store.set_score(id, category, input).expect("whitelisted entry");
        }
    }
}

#[test]
fn seeded_games_keep_totals_consistent() {
    for seed in 0..16_u64 {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let backing = MemoryStore::new();
        let mut store = GameStore::with_clock(backing.clone(), clock(1), seed);
        store.add_player();
        store.add_player();
        play_round(&mut store, &mut rng);

        let rule = BonusRule::default();
        for player in &store.state().players {
            let totals = store.totals(&player.id).unwrap();
            let top = top_section_total(player);
            assert_eq!(totals.top, top);
            assert_eq!(totals.bottom, bottom_section_total(player));
            assert_eq!(totals.bonus.is_some(), top >= rule.threshold);
            assert_eq!(totals.total, top + totals.bonus.unwrap_or(0) + totals.bottom);
        }

        let reloaded = GameStore::with_clock(backing, clock(1), seed + 1000);
        assert_eq!(reloaded.state(), store.state());
    }
}

#[test]
fn archived_rounds_feed_rankings() {
    let mut rng = ChaCha8Rng::seed_from_u64(42);
    let backing = MemoryStore::new();
    let mut store = GameStore::with_clock(backing.clone(), clock(3), 42);
    let ada = store.state().players[0].id.clone();
    store.update_player_name(&ada, "Ada");
    let bo = store.add_player();
    store.update_player_name(&bo, "Bo");

    for _ in 0..3 {
        play_round(&mut store, &mut rng);
        let standings_before = current_ranking(&store.state().players, store.bonus_rule());
        assert_eq!(standings_before[0].rank, 1);
        let entry = store.clear_game().expect("random rounds score points");
        assert_eq!(entry.results.len(), 2);
        assert!(store.state().players.iter().all(|p| p.scores.is_empty()));
    }

    let history = store.history();
    assert_eq!(history.len(), 3);
    let standings = overall_ranking(&history);
    assert_eq!(standings.len(), 2);
    assert!(standings.iter().all(|s| s.games == 3));
    assert!(standings.iter().map(|s| s.wins).sum::<u32>() >= 3);

    let top = high_scores(&history, 5);
    assert_eq!(top.len(), 5);
    assert!(top.windows(2).all(|w| w[0].total >= w[1].total));

    store.clear_history();
    assert!(store.history().is_empty());
}

#[test]
fn bonus_rule_is_configurable() {
    let mut store = GameStore::with_clock(MemoryStore::new(), clock(5), 1).with_bonus_rule(
        BonusRule {
            threshold: 50,
            award: 50,
        },
    );
    let id = store.state().players[0].id.clone();
    store.set_score(&id, Category::Sixes, ScoreInput::Value(30)).unwrap();
    store.set_score(&id, Category::Fives, ScoreInput::Value(20)).unwrap();
    let totals = store.totals(&id).unwrap();
    assert_eq!(totals.bonus, Some(50));
    assert_eq!(totals.total, 100);
}
