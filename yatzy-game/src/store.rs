//! Observable game state store
//!
//! Every mutation builds a replacement snapshot, persists it, then publishes
//! it to subscribers, in that order. Persistence failures are logged and
//! swallowed so the in-memory game keeps working without durable storage.
//! Listeners are called synchronously and must not mutate the store while
//! being notified.
use crate::calculator::{BonusRule, PlayerTotals, totals};
use crate::category::Category;
use crate::clock::{Clock, SystemClock};
use crate::history::GameHistoryEntry;
use crate::persistence::{KeyValueStore, Persistence};
use crate::player::{
    GameState, IdGenerator, Player, PlayerId, ScoreInput, default_player_name,
};
use crate::values::{ValueError, validate};
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use thiserror::Error;

type Listener = Rc<dyn Fn(&Rc<GameState>)>;

#[derive(Default)]
struct Listeners {
    next_id: u64,
    entries: Vec<(u64, Listener)>,
}

/// Handle returned by [`GameStore::subscribe`].
#[must_use = "dropping the handle keeps the listener registered; call `unsubscribe` to remove it"]
pub struct Subscription {
    id: u64,
    registry: Weak<RefCell<Listeners>>,
}

impl Subscription {
    /// Stop receiving snapshots. A no-op once the store is gone.
    pub fn unsubscribe(self) {
        if let Some(registry) = self.registry.upgrade() {
            registry
                .borrow_mut()
                .entries
                .retain(|(id, _)| *id != self.id);
        }
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription").field("id", &self.id).finish()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("Unknown player: {0}")]
    UnknownPlayer(PlayerId),
    #[error("Category {0} is derived and cannot be entered")]
    DerivedCategory(Category),
    #[error(transparent)]
    IllegalValue(#[from] ValueError),
}

/// Owner of the live player list.
pub struct GameStore<S, C = SystemClock>
where
    S: KeyValueStore,
    C: Clock,
{
    persistence: Persistence<S>,
    clock: C,
    rule: BonusRule,
    ids: IdGenerator,
    state: Rc<GameState>,
    listeners: Rc<RefCell<Listeners>>,
}

impl<S: KeyValueStore> GameStore<S, SystemClock> {
    /// Hydrate from `storage` using the wall clock.
    pub fn new(storage: S, id_seed: u64) -> Self {
        Self::with_clock(storage, SystemClock, id_seed)
    }
}

impl<S, C> GameStore<S, C>
where
    S: KeyValueStore,
    C: Clock,
{
    /// Hydrate from `storage`; an empty or unreadable save starts with one
    /// default player that is not written back until the first mutation.
    pub fn with_clock(storage: S, clock: C, id_seed: u64) -> Self {
        let persistence = Persistence::new(storage);
        let mut ids = IdGenerator::from_seed(id_seed);
        let mut state = persistence.load_state();
        if state.players.is_empty() {
            state.players.push(Player::new(ids.next_player_id(), default_player_name(0)));
        }
        Self {
            persistence,
            clock,
            rule: BonusRule::default(),
            ids,
            state: Rc::new(state),
            listeners: Rc::new(RefCell::new(Listeners::default())),
        }
    }

    #[must_use]
    pub fn with_bonus_rule(mut self, rule: BonusRule) -> Self {
        self.rule = rule;
        self
    }

    /// Current snapshot.
    #[must_use]
    pub fn state(&self) -> Rc<GameState> {
        Rc::clone(&self.state)
    }

    #[must_use]
    pub const fn bonus_rule(&self) -> &BonusRule {
        &self.rule
    }

    #[must_use]
    pub const fn persistence(&self) -> &Persistence<S> {
        &self.persistence
    }

    /// Register a listener called with every new snapshot.
    pub fn subscribe(&self, listener: impl Fn(&Rc<GameState>) + 'static) -> Subscription {
        let mut registry = self.listeners.borrow_mut();
        let id = registry.next_id;
        registry.next_id += 1;
        registry.entries.push((id, Rc::new(listener)));
        Subscription {
            id,
            registry: Rc::downgrade(&self.listeners),
        }
    }

    fn publish(&self) {
        let listeners: Vec<Listener> = self
            .listeners
            .borrow()
            .entries
            .iter()
            .map(|(_, l)| Rc::clone(l))
            .collect();
        for listener in listeners {
            listener(&self.state);
        }
    }

    fn commit(&mut self, next: GameState) {
        if let Err(err) = self.persistence.save_state(&next) {
            log::error!("Failed to save game state: {err}");
        }
        self.state = Rc::new(next);
        self.publish();
    }

    fn default_player(&mut self, index: usize) -> Player {
        Player::new(self.ids.next_player_id(), default_player_name(index))
    }

    /// Append a player named after the current player count.
    pub fn add_player(&mut self) -> PlayerId {
        let mut next = (*self.state).clone();
        let player = self.default_player(next.players.len());
        let id = player.id.clone();
        next.players.push(player);
        self.commit(next);
        id
    }

    /// Remove a player. Unknown ids leave the state untouched and return
    /// `false`; removing the last player reseeds a default one.
    pub fn remove_player(&mut self, id: &PlayerId) -> bool {
        if self.state.position(id).is_none() {
            return false;
        }
        let mut next = (*self.state).clone();
        next.players.retain(|p| &p.id != id);
        if next.players.is_empty() {
            next.players.push(self.default_player(0));
        }
        self.commit(next);
        true
    }

    pub fn update_player_name(&mut self, id: &PlayerId, name: &str) -> bool {
        let Some(index) = self.state.position(id) else {
            return false;
        };
        let mut next = (*self.state).clone();
        next.players[index].name = name.to_string();
        self.commit(next);
        true
    }

    /// Set, skip or clear one category of one player.
    ///
    /// # Errors
    ///
    /// Rejects unknown players, the derived bonus row and values outside the
    /// category whitelist; the state is unchanged in every error case.
    pub fn set_score(
        &mut self,
        id: &PlayerId,
        category: Category,
        input: ScoreInput,
    ) -> Result<(), StoreError> {
        let index = self
            .state
            .position(id)
            .ok_or_else(|| StoreError::UnknownPlayer(id.clone()))?;
        if category.is_derived() {
            return Err(StoreError::DerivedCategory(category));
        }
        if let ScoreInput::Value(value) = input {
            validate(category, value)?;
        }
        let mut next = (*self.state).clone();
        next.players[index].apply(category, input);
        self.commit(next);
        Ok(())
    }

    /// Archive the finished round and start a new one with the same players.
    ///
    /// A history entry is written only when some player has a positive total;
    /// it is returned so callers can announce it.
    pub fn clear_game(&mut self) -> Option<GameHistoryEntry> {
        let entry = GameHistoryEntry::snapshot(
            self.ids.next_id(),
            self.clock.now(),
            &self.state.players,
            &self.rule,
        );
        let archived = if entry.has_points() {
            if let Err(err) = self.persistence.append_history(entry.clone()) {
                log::error!("Failed to save game history: {err}");
            }
            Some(entry)
        } else {
            None
        };

        let mut next = (*self.state).clone();
        for player in &mut next.players {
            player.scores.clear();
        }
        if next.players.is_empty() {
            next.players.push(self.default_player(0));
        }
        self.commit(next);
        archived
    }

    /// Discard every player and start over with one default player.
    /// Nothing is archived.
    pub fn clear_scoreboard(&mut self) {
        let player = self.default_player(0);
        self.commit(GameState {
            players: vec![player],
        });
    }

    /// Replace the player list with a caller-supplied order. The list is
    /// trusted to hold the same players; an empty list reseeds one player.
    pub fn reorder_players(&mut self, new_order: Vec<Player>) {
        let mut players = new_order;
        if players.is_empty() {
            players.push(self.default_player(0));
        }
        self.commit(GameState { players });
    }

    /// Move one player to `to_index` (clamped to the end of the list).
    pub fn move_player(&mut self, id: &PlayerId, to_index: usize) -> bool {
        let Some(from) = self.state.position(id) else {
            return false;
        };
        let mut players = self.state.players.clone();
        let player = players.remove(from);
        let to = to_index.min(players.len());
        players.insert(to, player);
        self.reorder_players(players);
        true
    }

    #[must_use]
    pub fn totals(&self, id: &PlayerId) -> Option<PlayerTotals> {
        self.state.find(id).map(|p| totals(p, &self.rule))
    }

    /// Archived games, newest first.
    #[must_use]
    pub fn history(&self) -> Vec<GameHistoryEntry> {
        self.persistence.load_history()
    }

    pub fn clear_history(&self) {
        if let Err(err) = self.persistence.clear_history() {
            log::error!("Failed to clear game history: {err}");
        }
    }
}
