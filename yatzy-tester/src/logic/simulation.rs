//! Seeded play-through of one round against an in-memory store.
use anyhow::Result;
use chrono::{DateTime, TimeZone, Utc};
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::cell::Cell;
use std::rc::Rc;
use yatzy_game::constants::{DICE_PER_ROLL, GAME_HISTORY_KEY, GAME_STATE_KEY};
use yatzy_game::{
    BonusRule, Category, FixedClock, GameHistoryEntry, GameState, GameStore, MemoryStore,
    PossibleValues, ScoreInput, StoreError, possible_values,
};

/// Sums one roll can show; bounds free-entry values.
const MIN_DICE_SUM: u32 = DICE_PER_ROLL;
const MAX_DICE_SUM: u32 = DICE_PER_ROLL * 6;

pub type Expectation = fn(&SimulationSummary) -> Result<()>;

/// Condition of the backing store for a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageMode {
    Healthy,
    /// Every write is rejected, like a full quota
    ReadOnly,
    /// Both blobs hold garbage before the store starts
    Corrupt,
}

#[derive(Clone)]
pub struct SimulationPlan {
    pub min_players: usize,
    pub max_players: usize,
    pub skip_rate: f64,
    pub illegal_rate: f64,
    pub storage: StorageMode,
    pub rule: BonusRule,
    pub expectations: Vec<Expectation>,
}

impl std::fmt::Debug for SimulationPlan {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SimulationPlan")
            .field("min_players", &self.min_players)
            .field("max_players", &self.max_players)
            .field("skip_rate", &self.skip_rate)
            .field("illegal_rate", &self.illegal_rate)
            .field("storage", &self.storage)
            .field("rule", &self.rule)
            .field("expectations", &self.expectations.len())
            .finish()
    }
}

impl Default for SimulationPlan {
    fn default() -> Self {
        Self {
            min_players: 1,
            max_players: 6,
            skip_rate: 0.1,
            illegal_rate: 0.1,
            storage: StorageMode::Healthy,
            rule: BonusRule::default(),
            expectations: Vec::new(),
        }
    }
}

impl SimulationPlan {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn with_players(mut self, min: usize, max: usize) -> Self {
        self.min_players = min;
        self.max_players = max;
        self
    }

    #[must_use]
    pub const fn with_skip_rate(mut self, rate: f64) -> Self {
        self.skip_rate = rate;
        self
    }

    #[must_use]
    pub const fn with_illegal_rate(mut self, rate: f64) -> Self {
        self.illegal_rate = rate;
        self
    }

    #[must_use]
    pub const fn with_storage(mut self, storage: StorageMode) -> Self {
        self.storage = storage;
        self
    }

    #[must_use]
    pub const fn with_rule(mut self, rule: BonusRule) -> Self {
        self.rule = rule;
        self
    }

    #[must_use]
    pub fn with_expectation(mut self, expectation: Expectation) -> Self {
        self.expectations.push(expectation);
        self
    }
}

/// Everything a run observed, for expectations to inspect.
#[derive(Debug, Clone)]
pub struct SimulationSummary {
    pub seed: u64,
    pub storage: StorageMode,
    pub rule: BonusRule,
    /// Players present before the run added any
    pub initial_players: usize,
    /// Sheet at the end of play, before archiving
    pub final_state: GameState,
    /// What a fresh store over the same storage hydrates to
    pub reloaded_state: GameState,
    /// Raw state blob left in storage
    pub stored_blob: Option<String>,
    pub archived: Option<GameHistoryEntry>,
    pub history: Vec<GameHistoryEntry>,
    pub after_new_game: GameState,
    pub moves: usize,
    pub skips: usize,
    pub illegal_attempts: usize,
    pub rejected: usize,
    pub publishes: usize,
}

fn fixed_time(seed: u64) -> DateTime<Utc> {
    let offset = i64::try_from(seed % 86_400).unwrap_or(0);
    Utc.with_ymd_and_hms(2025, 5, 17, 0, 0, 0)
        .single()
        .map_or_else(Utc::now, |base| base + chrono::Duration::seconds(offset))
}

/// Draw a value the category accepts.
pub fn legal_value(rng: &mut impl Rng, category: Category) -> u32 {
    match possible_values(category) {
        PossibleValues::Listed(values) => values.choose(rng).copied().unwrap_or_default(),
        PossibleValues::Unrestricted => rng.gen_range(MIN_DICE_SUM..=MAX_DICE_SUM),
    }
}

/// Draw a value the category rejects, if it rejects anything.
pub fn illegal_value(rng: &mut impl Rng, category: Category) -> Option<u32> {
    let PossibleValues::Listed(values) = possible_values(category) else {
        return None;
    };
    let candidates: Vec<u32> = (0..=60).filter(|v| !values.contains(v)).collect();
    candidates.choose(rng).copied()
}

fn prepare_storage(mode: StorageMode) -> MemoryStore {
    let storage = MemoryStore::new();
    match mode {
        StorageMode::Healthy => {}
        StorageMode::ReadOnly => storage.set_read_only(true),
        StorageMode::Corrupt => {
            storage.put_raw(GAME_STATE_KEY, "{\"players\": [oops");
            storage.put_raw(GAME_HISTORY_KEY, "not json at all");
        }
    }
    storage
}

/// Play one full round of `plan` with `seed`.
pub fn run_plan(plan: &SimulationPlan, seed: u64) -> SimulationSummary {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let storage = prepare_storage(plan.storage);
    let clock = FixedClock(fixed_time(seed));
    let mut store =
        GameStore::with_clock(storage.clone(), clock, seed).with_bonus_rule(plan.rule);
    let initial_players = store.state().players.len();

    let publishes = Rc::new(Cell::new(0_usize));
    let counter = Rc::clone(&publishes);
    let subscription = store.subscribe(move |_| counter.set(counter.get() + 1));

    let max_players = plan.max_players.max(plan.min_players).max(1);
    let target = rng.gen_range(plan.min_players.max(1)..=max_players);
    while store.state().players.len() < target {
        store.add_player();
    }

    let mut turns: Vec<(usize, Category)> = Category::ALL
        .into_iter()
        .filter(|c| !c.is_derived())
        .flat_map(|c| (0..target).map(move |p| (p, c)))
        .collect();
    turns.shuffle(&mut rng);

    let (mut moves, mut skips, mut illegal_attempts, mut rejected) = (0, 0, 0, 0);
    for (index, category) in turns {
        let id = store.state().players[index].id.clone();
        if rng.gen_bool(plan.illegal_rate.clamp(0.0, 1.0))
            && let Some(bad) = illegal_value(&mut rng, category)
        {
            illegal_attempts += 1;
            if matches!(
                store.set_score(&id, category, ScoreInput::Value(bad)),
                Err(StoreError::IllegalValue(_))
            ) {
                rejected += 1;
            }
        }
        let input = if rng.gen_bool(plan.skip_rate.clamp(0.0, 1.0)) {
            skips += 1;
            ScoreInput::Skip
        } else {
            ScoreInput::Value(legal_value(&mut rng, category))
        };
        if let Err(err) = store.set_score(&id, category, input) {
            log::warn!("seed {seed}: legal move rejected: {err}");
        }
        moves += 1;
    }

    let final_state = (*store.state()).clone();
    let reloaded = GameStore::with_clock(storage.clone(), clock, seed.wrapping_add(1));
    let reloaded_state = (*reloaded.state()).clone();
    let stored_blob = storage.raw(GAME_STATE_KEY);
    let archived = store.clear_game();
    let history = store.history();
    let after_new_game = (*store.state()).clone();
    subscription.unsubscribe();

    SimulationSummary {
        seed,
        storage: plan.storage,
        rule: plan.rule,
        initial_players,
        final_state,
        reloaded_state,
        stored_blob,
        archived,
        history,
        after_new_game,
        moves,
        skips,
        illegal_attempts,
        rejected,
        publishes: publishes.get(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drawn_values_respect_whitelists() {
        let mut rng = ChaCha8Rng::seed_from_u64(9);
        for _ in 0..50 {
            for category in Category::ALL {
                let value = legal_value(&mut rng, category);
                assert!(possible_values(category).allows(value));
                if let Some(bad) = illegal_value(&mut rng, category) {
                    assert!(!possible_values(category).allows(bad));
                }
            }
        }
        assert_eq!(illegal_value(&mut rng, Category::Chance), None);
    }

    #[test]
    fn free_entry_draws_stay_within_one_roll() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        for _ in 0..200 {
            let value = legal_value(&mut rng, Category::Chance);
            assert!((DICE_PER_ROLL..=DICE_PER_ROLL * 6).contains(&value));
        }
    }

    #[test]
    fn same_seed_same_round() {
        let plan = SimulationPlan::new();
        let a = run_plan(&plan, 42);
        let b = run_plan(&plan, 42);
        assert_eq!(a.final_state, b.final_state);
        assert_eq!(a.moves, b.moves);
    }

    #[test]
    fn every_open_slot_gets_played() {
        let plan = SimulationPlan::new().with_players(3, 3);
        let summary = run_plan(&plan, 7);
        assert_eq!(summary.final_state.players.len(), 3);
        assert_eq!(summary.moves, 3 * 15);
        for player in &summary.final_state.players {
            assert_eq!(player.scores.len(), 15);
        }
    }
}
